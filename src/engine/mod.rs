//! Core analysis engine: parse a file, extract declared styles, collect
//! referenced names, diff the two, and rewrite sources to drop dead entries.

pub mod data;
pub mod diff;
pub mod file_scanner;
pub mod parser;

mod declarations;
mod rewriter;
mod scanner;
mod usages;

pub use data::{ScanResult, StyleDeclaration};
pub use declarations::DeclarationCollector;
pub use diff::unused_declarations;
pub use file_scanner::{FileScanResult, scan_files};
pub use parser::{ParsedSource, byte_range, parse_source};
pub use rewriter::{remove_declarations, rewrite_path};
pub use scanner::Scanner;
pub use usages::collect_used_names;
