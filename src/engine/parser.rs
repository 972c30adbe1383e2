use std::sync::Arc;

use anyhow::{Result, anyhow};
use swc_common::{FileName, GLOBALS, Globals, SourceMap, Span};
use swc_ecma_ast::Module;
use swc_ecma_parser::{Parser, StringInput, Syntax, TsSyntax};

/// A parsed source file: the AST plus everything needed to map spans
/// back to lines, columns and byte offsets in the original text.
pub struct ParsedSource {
    pub module: Module,
    pub source_map: Arc<SourceMap>,
    pub source: String,
}

/// Parse JSX/TSX source code into an AST.
///
/// This is the core parsing function. For file-based parsing with caching,
/// use [`crate::engine::Scanner::scan_one`] instead.
///
/// Parsing is side-effect-free: the same content and path always produce a
/// structurally equivalent tree. Failures are returned as `Err` and never
/// panic; the caller decides how to degrade.
pub fn parse_source(code: String, file_path: &str) -> Result<ParsedSource> {
    GLOBALS.set(&Globals::new(), || {
        let source_map = Arc::new(SourceMap::default());
        let source_file =
            source_map.new_source_file(FileName::Real(file_path.into()).into(), code.clone());

        let syntax = Syntax::Typescript(TsSyntax {
            tsx: true,
            ..Default::default()
        });

        let mut parser = Parser::new(syntax, StringInput::from(&*source_file), None);
        let module = parser
            .parse_module()
            .map_err(|e| anyhow!("Failed to parse source: {:?}", e))?;

        Ok(ParsedSource {
            module,
            source_map,
            source: code,
        })
    })
}

/// Resolve a span to `[start, end)` byte offsets within the file content.
pub fn byte_range(source_map: &SourceMap, span: Span) -> (usize, usize) {
    let lo = source_map.lookup_byte_offset(span.lo);
    let hi = source_map.lookup_byte_offset(span.hi);
    (lo.pos.0 as usize, hi.pos.0 as usize)
}
