//! Source rewriting.
//!
//! Deletes style declarations as a pure text transformation on byte
//! intervals. The AST is only consulted to locate the intervals; the rest of
//! the file is carried over byte for byte, comments and formatting included.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};
use swc_ecma_visit::VisitWith;

use super::data::StyleDeclaration;
use super::declarations::DeclarationCollector;
use super::parser::parse_source;

/// Remove the given declarations from `source`, returning the new content.
///
/// Each declaration interval is expanded to swallow its separator comma and
/// the blank remainder of its line, then overlapping intervals are merged so
/// adjacent removals cannot double-cut shared separators. Any comma a cut
/// leaves orphaned at the splice point is dropped as well; bytes away from
/// the splice points are never touched.
pub fn remove_declarations(source: &str, targets: &[StyleDeclaration]) -> String {
    let mut intervals: Vec<(usize, usize)> = targets
        .iter()
        .map(|d| expand_interval(source, d.byte_start, d.byte_end))
        .collect();
    intervals.sort_unstable();

    let mut merged: Vec<(usize, usize)> = Vec::with_capacity(intervals.len());
    for interval in intervals {
        match merged.last_mut() {
            Some(last) if interval.0 <= last.1 => last.1 = last.1.max(interval.1),
            _ => merged.push(interval),
        }
    }

    let mut result = source.to_string();
    for (start, end) in merged.into_iter().rev() {
        result.replace_range(start..end, "");
        drop_orphan_separator(&mut result, start);
    }
    result
}

/// Grow a `[start, end)` declaration interval over its separator.
///
/// Preference order: the comma that follows the declaration (plus the blank
/// remainder of the line), otherwise the comma that precedes it. Leading
/// indentation is consumed so removed declarations do not leave blank lines.
fn expand_interval(source: &str, start: usize, end: usize) -> (usize, usize) {
    let bytes = source.as_bytes();
    let mut new_start = start;
    let mut new_end = end;

    let mut i = end;
    while i < bytes.len() && bytes[i].is_ascii_whitespace() {
        i += 1;
    }

    if i < bytes.len() && bytes[i] == b',' {
        new_end = i + 1;
        // If nothing but whitespace follows on this line, take the line
        // terminator as well.
        let mut j = new_end;
        while j < bytes.len() && (bytes[j] == b' ' || bytes[j] == b'\t') {
            j += 1;
        }
        if j < bytes.len() && bytes[j] == b'\r' {
            j += 1;
        }
        if j < bytes.len() && bytes[j] == b'\n' {
            new_end = j + 1;
        }
        while new_start > 0 && (bytes[new_start - 1] == b' ' || bytes[new_start - 1] == b'\t') {
            new_start -= 1;
        }
    } else {
        // Last property of its block: claim the comma that precedes it.
        let mut k = start;
        while k > 0 && bytes[k - 1].is_ascii_whitespace() {
            k -= 1;
        }
        if k > 0 && bytes[k - 1] == b',' {
            new_start = k - 1;
        } else {
            while new_start > 0
                && (bytes[new_start - 1] == b' ' || bytes[new_start - 1] == b'\t')
            {
                new_start -= 1;
            }
        }
    }

    (new_start, new_end)
}

/// Drop a comma left syntactically invalid at a splice point, e.g. a comma
/// directly after `{` or a doubled `,,`. Only the immediate neighborhood of
/// the cut is inspected, so commas elsewhere in the file (array elisions,
/// string or regex contents) are never affected.
fn drop_orphan_separator(text: &mut String, pos: usize) {
    let comma = {
        let bytes = text.as_bytes();
        let mut next = pos;
        while next < bytes.len() && bytes[next].is_ascii_whitespace() {
            next += 1;
        }
        if next >= bytes.len() || bytes[next] != b',' {
            return;
        }
        let mut prev = pos;
        while prev > 0 && bytes[prev - 1].is_ascii_whitespace() {
            prev -= 1;
        }
        if prev > 0 && !matches!(bytes[prev - 1], b'{' | b'(' | b'[' | b',') {
            return;
        }
        next
    };
    text.remove(comma);
}

/// Delete the named styles from the file at `path` and write it back.
///
/// The file is re-read and re-parsed so the byte offsets used for the cut
/// always belong to the content actually on disk. Every requested name must
/// resolve to at least one declaration, otherwise nothing is written.
pub fn rewrite_path(path: &str, names: &[String], create_object: &str) -> Result<()> {
    let code = fs::read_to_string(Path::new(path))
        .with_context(|| format!("Failed to read {}", path))?;
    let parsed = parse_source(code, path)?;

    let mut collector = DeclarationCollector::new(&parsed.source_map, create_object);
    parsed.module.visit_with(&mut collector);

    let mut targets: Vec<StyleDeclaration> = Vec::new();
    for name in names {
        let matching: Vec<&StyleDeclaration> = collector
            .declarations
            .iter()
            .filter(|d| d.name == *name)
            .collect();
        if matching.is_empty() {
            bail!("style '{}' not found in {}", name, path);
        }
        for declaration in matching {
            if !targets.contains(declaration) {
                targets.push(declaration.clone());
            }
        }
    }

    if targets.is_empty() {
        return Ok(());
    }

    let rewritten = remove_declarations(&parsed.source, &targets);
    fs::write(Path::new(path), rewritten)
        .with_context(|| format!("Failed to write {}", path))?;
    Ok(())
}
