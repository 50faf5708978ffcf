//! Inline taglet tokenizer
//!
//! Splits comment text into tokens at `{@name body}` constructs. Scanning is
//! done with a byte cursor: a taglet starts at `{@`, a run of word characters
//! and a single whitespace character, and ends at the first `}` that is not
//! consumed by a nested `{ ... }` pair. A taglet with no terminator degrades
//! to plain text together with everything after it.

use tracing::{debug, warn};

use super::{Comment, CommentBuilder, Token};
use crate::link::LinkResolver;

/// Recognized inline taglets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Taglet {
    Code,
    Link,
    LinkPlain,
    Literal,
    Unknown,
}

impl Taglet {
    fn from_name(name: &str) -> Self {
        match name {
            "code" => Taglet::Code,
            "link" => Taglet::Link,
            "linkplain" => Taglet::LinkPlain,
            "literal" => Taglet::Literal,
            _ => Taglet::Unknown,
        }
    }
}

/// Target and display text of a `{@link}` or `{@linkplain}` body
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LinkInfo<'a> {
    /// Name handed to the link resolver
    pub target: &'a str,
    /// Text shown for the link
    pub text: &'a str,
}

impl<'a> LinkInfo<'a> {
    /// Split a link body on its first whitespace character
    ///
    /// Without whitespace the whole body is both target and text.
    #[must_use]
    pub fn parse(body: &'a str) -> Self {
        match body.char_indices().find(|(_, c)| c.is_whitespace()) {
            Some((index, c)) => Self {
                target: &body[..index],
                text: &body[index + c.len_utf8()..],
            },
            None => Self {
                target: body,
                text: body,
            },
        }
    }
}

/// Location of a taglet opening such as `{@link `
#[derive(Debug, Clone, Copy)]
struct TagStart<'a> {
    /// Byte offset of the opening `{`
    open: usize,
    /// Taglet name between `{@` and the whitespace
    name: &'a str,
    /// Byte offset where the taglet body begins
    body: usize,
}

/// Whitespace as understood by the taglet grammar
const fn is_tag_space(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\n' | b'\r' | b'\x0B' | b'\x0C')
}

const fn is_word(byte: u8) -> bool {
    byte.is_ascii_alphanumeric() || byte == b'_'
}

struct Scanner<'a> {
    text: &'a str,
    bytes: &'a [u8],
}

impl<'a> Scanner<'a> {
    fn new(text: &'a str) -> Self {
        Self {
            text,
            bytes: text.as_bytes(),
        }
    }

    /// Find the next taglet opening at or after `from`
    fn find_start(&self, from: usize) -> Option<TagStart<'a>> {
        let mut cursor = from;
        while let Some(offset) = self.bytes[cursor..].iter().position(|&b| b == b'{') {
            let open = cursor + offset;
            if let Some(start) = self.match_start(open) {
                return Some(start);
            }
            cursor = open + 1;
        }
        None
    }

    /// Match `{@word+\s` at `open`
    fn match_start(&self, open: usize) -> Option<TagStart<'a>> {
        if self.bytes.get(open + 1) != Some(&b'@') {
            return None;
        }
        let name_start = open + 2;
        let name_len = self.bytes[name_start..]
            .iter()
            .take_while(|&&b| is_word(b))
            .count();
        if name_len == 0 {
            return None;
        }
        let name_end = name_start + name_len;
        match self.bytes.get(name_end) {
            Some(&b) if is_tag_space(b) => Some(TagStart {
                open,
                name: &self.text[name_start..name_end],
                body: name_end + 1,
            }),
            _ => None,
        }
    }

    /// Find the `}` closing a taglet whose body scan begins at `from`
    ///
    /// Every `{` seen before the terminator must be closed first, so nested
    /// taglets resolve inside-out. Returns `None` when braces never balance.
    fn find_end(&self, from: usize) -> Option<usize> {
        let mut depth = 0usize;
        for (offset, &byte) in self.bytes[from..].iter().enumerate() {
            match byte {
                b'{' => depth += 1,
                b'}' if depth == 0 => return Some(from + offset),
                b'}' => depth -= 1,
                _ => {}
            }
        }
        None
    }
}

/// Tokenize comment text, resolving `{@link}` targets through `resolver`
///
/// Empty input produces an empty comment.
pub fn tokenize<R>(text: &str, resolver: &R) -> Comment
where
    R: LinkResolver + ?Sized,
{
    let mut builder = CommentBuilder::new();
    if text.is_empty() {
        return builder.build();
    }

    let scanner = Scanner::new(text);
    let mut pos = 0;
    while let Some(start) = scanner.find_start(pos) {
        let Some(end) = scanner.find_end(start.open + 1) else {
            debug!(offset = start.open, "unterminated inline taglet");
            break;
        };

        builder.push_plain(&text[pos..start.open]);
        builder.push(taglet_token(start.name, &text[start.body..end], resolver));
        pos = end + 1;
    }
    builder.push_plain(&text[pos..]);

    builder.build()
}

/// Tokenize text that may be absent
pub fn tokenize_opt<R>(text: Option<&str>, resolver: &R) -> Comment
where
    R: LinkResolver + ?Sized,
{
    text.map_or_else(Comment::new, |text| tokenize(text, resolver))
}

fn taglet_token<R>(name: &str, body: &str, resolver: &R) -> Token
where
    R: LinkResolver + ?Sized,
{
    match Taglet::from_name(name) {
        Taglet::Code => Token::code(body),
        Taglet::Literal => Token::literal(body),
        taglet @ (Taglet::Link | Taglet::LinkPlain) => {
            let info = LinkInfo::parse(body);
            let is_code = taglet == Taglet::Link;
            match resolver.resolve(info.target) {
                Some(href) => {
                    let token = if is_code {
                        Token::code(info.text)
                    } else {
                        Token::plain(info.text)
                    };
                    token.with_href(href)
                }
                None => {
                    debug!(link_target = info.target, "unresolved link target");
                    Token::unresolved(info.text, is_code)
                }
            }
        }
        Taglet::Unknown => {
            warn!(taglet = name, "unrecognized inline taglet");
            Token::plain(body)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn resolver() -> HashMap<String, String> {
        HashMap::from([("pkg.Foo".to_string(), "pkg_Foo.html".to_string())])
    }

    fn texts(comment: &Comment) -> Vec<&str> {
        comment.iter().map(Token::text).collect()
    }

    #[test]
    fn test_empty_input() {
        assert!(tokenize("", &resolver()).is_empty());
        assert!(tokenize_opt(None, &resolver()).is_empty());
    }

    #[test]
    fn test_plain_text_only() {
        let comment = tokenize("Just some words.", &resolver());
        assert_eq!(comment.len(), 1);
        assert!(comment.tokens()[0].is_plain());
        assert_eq!(comment.tokens()[0].text(), "Just some words.");
    }

    #[test]
    fn test_code_taglet() {
        let comment = tokenize("Call {@code run()} now", &resolver());
        assert_eq!(texts(&comment), vec!["Call ", "run()", " now"]);
        assert!(comment.tokens()[1].is_code());
        assert!(comment.tokens()[0].is_plain());
    }

    #[test]
    fn test_literal_taglet() {
        let comment = tokenize("{@literal <b>}", &resolver());
        assert_eq!(comment.len(), 1);
        assert!(comment.tokens()[0].is_literal());
        assert_eq!(comment.tokens()[0].text(), "<b>");
    }

    #[test]
    fn test_resolved_link_with_custom_text() {
        let comment = tokenize("{@link pkg.Foo custom text}", &resolver());
        let token = &comment.tokens()[0];
        assert_eq!(token.text(), "custom text");
        assert_eq!(token.href(), Some("pkg_Foo.html"));
        assert!(token.is_code());
        assert!(!token.is_unresolved_link());
    }

    #[test]
    fn test_unresolved_link() {
        let comment = tokenize("{@link pkg.Bar}", &resolver());
        assert_eq!(comment.len(), 1);
        let token = &comment.tokens()[0];
        assert_eq!(token.text(), "pkg.Bar");
        assert!(token.is_unresolved_link());
        assert_eq!(token.href(), None);
    }

    #[test]
    fn test_unresolved_linkplain_with_empty_text_is_kept() {
        let comment = tokenize("a {@linkplain pkg.Bar } b", &resolver());
        assert_eq!(texts(&comment), vec!["a ", "", " b"]);
        let token = &comment.tokens()[1];
        assert!(token.is_unresolved_link());
        assert!(!token.is_code());
        assert_eq!(token.href(), None);

        let comment = tokenize("a {@linkplain pkg.Foo } b", &resolver());
        assert_eq!(texts(&comment), vec!["a ", "", " b"]);
        assert_eq!(comment.tokens()[1].href(), Some("pkg_Foo.html"));
    }

    #[test]
    fn test_linkplain_is_not_code() {
        let comment = tokenize("see {@linkplain pkg.Foo the foo}", &resolver());
        let token = &comment.tokens()[1];
        assert!(token.is_plain());
        assert_eq!(token.href(), Some("pkg_Foo.html"));
        assert_eq!(token.text(), "the foo");
    }

    #[test]
    fn test_unknown_taglet_emits_body() {
        let comment = tokenize("a {@see Other} b", &resolver());
        assert_eq!(texts(&comment), vec!["a ", "Other", " b"]);
        assert!(comment.iter().all(Token::is_plain));
    }

    #[test]
    fn test_nested_code_taglet() {
        let comment = tokenize("{@code a{@code b}c}", &resolver());
        assert_eq!(comment.len(), 1);
        assert!(comment.tokens()[0].is_code());
        assert_eq!(comment.tokens()[0].text(), "a{@code b}c");
    }

    #[test]
    fn test_link_with_nested_code() {
        let comment = tokenize("{@link pkg.Foo {@code Foo}} done", &resolver());
        assert_eq!(texts(&comment), vec!["{@code Foo}", " done"]);
        assert_eq!(comment.tokens()[0].href(), Some("pkg_Foo.html"));
    }

    #[test]
    fn test_unterminated_nested_taglet_degrades_remainder() {
        let comment = tokenize("{@link a {@code b}", &resolver());
        assert_eq!(comment.len(), 1);
        assert!(comment.tokens()[0].is_plain());
        assert_eq!(comment.tokens()[0].text(), "{@link a {@code b}");
    }

    #[test]
    fn test_unterminated_taglet_keeps_prefix_once() {
        let comment = tokenize("x {@code y {@code z} w} {@code open", &resolver());
        assert_eq!(texts(&comment), vec!["x ", "y {@code z} w", " {@code open"]);
    }

    #[test]
    fn test_unterminated_without_any_brace() {
        let comment = tokenize("before {@code never closed", &resolver());
        assert_eq!(comment.len(), 1);
        assert_eq!(comment.text(), "before {@code never closed");
    }

    #[test]
    fn test_adjacent_taglets() {
        let comment = tokenize("{@code a}{@code b}", &resolver());
        assert_eq!(texts(&comment), vec!["a", "b"]);
    }

    #[test]
    fn test_tag_start_requires_name_and_space() {
        let comment = tokenize("{@} {@ code} {x}", &resolver());
        assert_eq!(comment.len(), 1);
        assert_eq!(comment.tokens()[0].text(), "{@} {@ code} {x}");
    }

    #[test]
    fn test_newline_after_tag_name() {
        let comment = tokenize("{@code\nvalue}", &resolver());
        assert_eq!(comment.tokens()[0].text(), "value");
        assert!(comment.tokens()[0].is_code());
    }

    #[test]
    fn test_multibyte_text_around_taglets() {
        let comment = tokenize("café {@code naïve} über", &resolver());
        assert_eq!(texts(&comment), vec!["café ", "naïve", " über"]);
    }

    #[test]
    fn test_retokenizing_plain_text_is_stable() {
        let comment = tokenize("a {@code b} {@link pkg.Foo c} d", &resolver());
        let flattened = comment.text();
        let again = tokenize(&flattened, &resolver());
        assert_eq!(again.len(), 1);
        assert_eq!(again.tokens()[0].text(), flattened);
    }

    #[test]
    fn test_link_info_parse() {
        let info = LinkInfo::parse("pkg.Foo");
        assert_eq!(info.target, "pkg.Foo");
        assert_eq!(info.text, "pkg.Foo");

        let info = LinkInfo::parse("pkg.Foo#bar the bar method");
        assert_eq!(info.target, "pkg.Foo#bar");
        assert_eq!(info.text, "the bar method");

        let info = LinkInfo::parse("pkg.Foo\ttabbed");
        assert_eq!(info.target, "pkg.Foo");
        assert_eq!(info.text, "tabbed");
    }
}
