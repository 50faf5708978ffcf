//! Extraction of annotation descriptions from raw `/** ... */` comment text

/// Location of a description inside the original comment text
///
/// Lines are 1-based, columns are 0-based character offsets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StringPosition {
    pub start_line: usize,
    pub start_column: usize,
    pub end_line: usize,
    pub end_column: usize,
}

/// An annotation found in a doc comment, e.g. `@deprecated`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Marker {
    /// Annotation name without the leading `@`
    pub annotation: String,
    /// Where the annotation's description lives, if it has one
    pub description: Option<StringPosition>,
}

/// Return the description text of the first marker named `annotation`
#[must_use]
pub fn marker_description(original: &str, markers: &[Marker], annotation: &str) -> String {
    markers
        .iter()
        .find(|marker| marker.annotation == annotation)
        .map(|marker| extract_comment_string(original, marker.description))
        .unwrap_or_default()
}

/// Slice the text described by `position` out of a raw doc comment
///
/// The first line starts one column past the annotation position. Later
/// lines lose their leading whitespace and `*` decoration, and the last line
/// stops at the end column. Anything from a closing `*/` onwards is dropped.
#[must_use]
pub fn extract_comment_string(original: &str, position: Option<StringPosition>) -> String {
    let Some(position) = position else {
        return String::new();
    };
    let first = position.start_line.max(1);
    let last = position.end_line.max(first);

    let lines: Vec<&str> = original
        .split('\n')
        .skip(first - 1)
        .take(last - first + 1)
        .collect();
    let count = lines.len();

    lines
        .into_iter()
        .enumerate()
        .map(|(i, line)| {
            let mut line = if i == 0 {
                skip_chars(line, position.start_column + 1)
            } else {
                line
            };
            if i + 1 == count && last > first {
                line = take_chars(line, position.end_column);
            }
            if i > 0 {
                line = trim_comment_decoration(line);
            }
            match line.find("*/") {
                Some(index) => &line[..index],
                None => line,
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Drop leading whitespace followed by a single `*`
fn trim_comment_decoration(line: &str) -> &str {
    let trimmed = line.trim_start();
    match trimmed.strip_prefix('*') {
        Some(rest) => rest,
        None => line,
    }
}

fn skip_chars(line: &str, count: usize) -> &str {
    match line.char_indices().nth(count) {
        Some((index, _)) => &line[index..],
        None => line,
    }
}

fn take_chars(line: &str, count: usize) -> &str {
    match line.char_indices().nth(count) {
        Some((index, _)) => &line[..index],
        None => line,
    }
}
