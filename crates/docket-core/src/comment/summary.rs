//! First-sentence extraction

use std::sync::OnceLock;

use regex::Regex;

use super::{tokenize, Comment};
use crate::link::LinkResolver;

/// Lazily-compiled summary pattern: shortest prefix ending in a period that
/// is followed by whitespace or the end of the text
fn summary_regex() -> &'static Regex {
    static SUMMARY: OnceLock<Regex> = OnceLock::new();
    SUMMARY.get_or_init(|| Regex::new(r"(?s)\A(.*?\.)(?:\s|\z)").expect("valid summary regex"))
}

/// Extract the summary sentence of `text`
///
/// This is the text up to and including the first period that is followed by
/// whitespace or ends the input. Abbreviations such as "e.g." end the summary
/// early; without any such period the whole text is returned.
#[must_use]
pub fn summarize(text: &str) -> &str {
    summary_regex()
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map_or(text, |m| m.as_str())
}

/// Extract and tokenize the summary sentence of `text`
pub fn summary_comment<R>(text: &str, resolver: &R) -> Comment
where
    R: LinkResolver + ?Sized,
{
    tokenize(summarize(text), resolver)
}

/// Tokenize a block description, treating a missing doc comment as empty
pub fn block_description<R>(text: Option<&str>, resolver: &R) -> Comment
where
    R: LinkResolver + ?Sized,
{
    match text {
        Some(text) => tokenize(text, resolver),
        None => Comment::new(),
    }
}
