//! Data types produced by a single-file scan.

/// One named entry declared inside a `StyleSheet.create({...})` block.
///
/// Produced fresh on every scan of a file and immutable afterwards. The byte
/// offsets are only meaningful against the exact file content the scan read;
/// the rewriter re-derives fresh offsets before mutating anything.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleDeclaration {
    /// The property key, e.g. `container`.
    pub name: String,
    /// First line of the declaration (1-indexed).
    pub start_line: usize,
    /// Last line of the declaration (1-indexed, inclusive).
    pub end_line: usize,
    /// Column of the property key (1-indexed, display width).
    pub col: usize,
    /// Text of `start_line`, kept for diagnostics.
    pub source_line: String,
    /// Byte offset of the property key within the file content.
    pub byte_start: usize,
    /// Byte offset one past the property value within the file content.
    pub byte_end: usize,
}

/// Aggregate result of scanning one file.
///
/// Invariant: `unused` is the subsequence of `defined` whose names are
/// absent from `used`, in the same relative order as `defined`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanResult {
    pub file: String,
    /// Declared styles in document order.
    pub defined: Vec<StyleDeclaration>,
    /// Referenced style names, deduplicated, in first-discovery order.
    pub used: Vec<String>,
    /// Declared styles never referenced.
    pub unused: Vec<StyleDeclaration>,
}

impl ScanResult {
    /// Result for a file with no extractable styles (e.g. a parse failure).
    pub fn empty(file: &str) -> Self {
        Self {
            file: file.to_string(),
            defined: Vec::new(),
            used: Vec::new(),
            unused: Vec::new(),
        }
    }
}
