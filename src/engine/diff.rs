//! Set difference between declared and referenced style names.

use std::collections::HashSet;

use super::data::StyleDeclaration;

/// Declarations whose names never appear in `used`, in declaration order.
pub fn unused_declarations(
    defined: &[StyleDeclaration],
    used: &[String],
) -> Vec<StyleDeclaration> {
    let used: HashSet<&str> = used.iter().map(|s| s.as_str()).collect();
    defined
        .iter()
        .filter(|d| !used.contains(d.name.as_str()))
        .cloned()
        .collect()
}
