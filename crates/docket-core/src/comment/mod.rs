//! Comment model and inline markup processing
//!
//! A [`Comment`] is the unit every component of this crate produces: an
//! ordered sequence of [`Token`]s that concatenate to the rendered text.
//! Tokens carry only semantic flags; escaping and markup are left to the
//! renderer that consumes them.

mod source;
mod summary;
mod taglet;

pub use source::{extract_comment_string, marker_description, Marker, StringPosition};
pub use summary::{block_description, summarize, summary_comment};
pub use taglet::{tokenize, tokenize_opt, LinkInfo};

use std::fmt;

use serde::{Deserialize, Serialize};

/// Presentation style of a token
///
/// Exactly one style applies to a token; a hyperlink may accompany any of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TokenStyle {
    /// Ordinary prose
    #[default]
    Plain,
    /// Fixed-width code span
    Code,
    /// Text that must be escaped verbatim and never linked
    Literal,
}

/// An atomic unit of formatted comment output
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawToken", into = "RawToken")]
pub struct Token {
    text: String,
    style: TokenStyle,
    href: Option<String>,
    unresolved_link: bool,
}

impl Token {
    fn new(text: impl Into<String>, style: TokenStyle) -> Self {
        Self {
            text: text.into(),
            style,
            href: None,
            unresolved_link: false,
        }
    }

    /// Create a plain text token
    #[must_use]
    pub fn plain(text: impl Into<String>) -> Self {
        Self::new(text, TokenStyle::Plain)
    }

    /// Create a code token
    #[must_use]
    pub fn code(text: impl Into<String>) -> Self {
        Self::new(text, TokenStyle::Code)
    }

    /// Create a literal token
    #[must_use]
    pub fn literal(text: impl Into<String>) -> Self {
        Self::new(text, TokenStyle::Literal)
    }

    /// Create a plain hyperlink token
    #[must_use]
    pub fn link(text: impl Into<String>, href: impl Into<String>) -> Self {
        Self::plain(text).with_href(href)
    }

    /// Create a token for a link target that could not be resolved
    #[must_use]
    pub fn unresolved(text: impl Into<String>, is_code: bool) -> Self {
        let style = if is_code {
            TokenStyle::Code
        } else {
            TokenStyle::Plain
        };
        Self {
            unresolved_link: true,
            ..Self::new(text, style)
        }
    }

    /// Attach a hyperlink destination
    #[must_use]
    pub fn with_href(mut self, href: impl Into<String>) -> Self {
        self.href = Some(href.into());
        self.unresolved_link = false;
        self
    }

    /// The token's text content
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The token's presentation style
    #[must_use]
    pub const fn style(&self) -> TokenStyle {
        self.style
    }

    /// The link destination, if this token is a hyperlink
    #[must_use]
    pub fn href(&self) -> Option<&str> {
        self.href.as_deref()
    }

    #[must_use]
    pub const fn is_code(&self) -> bool {
        matches!(self.style, TokenStyle::Code)
    }

    #[must_use]
    pub const fn is_literal(&self) -> bool {
        matches!(self.style, TokenStyle::Literal)
    }

    #[must_use]
    pub const fn is_plain(&self) -> bool {
        matches!(self.style, TokenStyle::Plain)
    }

    #[must_use]
    pub const fn is_link(&self) -> bool {
        self.href.is_some()
    }

    /// True when a `{@link}` target could not be resolved
    #[must_use]
    pub const fn is_unresolved_link(&self) -> bool {
        self.unresolved_link
    }
}

/// Wire form of a token, as consumed by renderers
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawToken {
    text: String,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    is_code: bool,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    is_literal: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    href: Option<String>,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    unresolved_link: bool,
}

impl From<Token> for RawToken {
    fn from(token: Token) -> Self {
        Self {
            is_code: token.is_code(),
            is_literal: token.is_literal(),
            text: token.text,
            href: token.href,
            unresolved_link: token.unresolved_link,
        }
    }
}

impl TryFrom<RawToken> for Token {
    type Error = String;

    fn try_from(raw: RawToken) -> Result<Self, Self::Error> {
        let style = match (raw.is_code, raw.is_literal) {
            (false, false) => TokenStyle::Plain,
            (true, false) => TokenStyle::Code,
            (false, true) => TokenStyle::Literal,
            (true, true) => {
                return Err(format!(
                    "token {:?} cannot be both code and literal",
                    raw.text
                ))
            }
        };
        Ok(Self {
            text: raw.text,
            style,
            href: raw.href,
            unresolved_link: raw.unresolved_link,
        })
    }
}

/// An ordered, possibly empty, immutable sequence of tokens
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Comment {
    #[serde(rename = "token", default)]
    tokens: Vec<Token>,
}

impl Comment {
    /// Create an empty comment
    #[must_use]
    pub const fn new() -> Self {
        Self { tokens: Vec::new() }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    #[must_use]
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Token> {
        self.tokens.iter()
    }

    /// Concatenation of every token's text, ignoring style and links
    #[must_use]
    pub fn text(&self) -> String {
        self.tokens.iter().map(Token::text).collect()
    }

    /// Serialize the token stream for a renderer
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

impl From<Vec<Token>> for Comment {
    fn from(tokens: Vec<Token>) -> Self {
        Self { tokens }
    }
}

impl IntoIterator for Comment {
    type Item = Token;
    type IntoIter = std::vec::IntoIter<Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.into_iter()
    }
}

impl<'a> IntoIterator for &'a Comment {
    type Item = &'a Token;
    type IntoIter = std::slice::Iter<'a, Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}

impl fmt::Display for Comment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for token in &self.tokens {
            f.write_str(token.text())?;
        }
        Ok(())
    }
}

/// Accumulates tokens for a comment under construction
///
/// Plain and literal tokens with empty text are dropped unless they carry a
/// link or an unresolved-link marker.
#[derive(Debug, Default)]
pub(crate) struct CommentBuilder {
    tokens: Vec<Token>,
}

impl CommentBuilder {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, token: Token) {
        if token.text.is_empty()
            && !token.is_code()
            && !token.is_link()
            && !token.is_unresolved_link()
        {
            return;
        }
        self.tokens.push(token);
    }

    pub(crate) fn push_plain(&mut self, text: &str) {
        self.push(Token::plain(text));
    }

    pub(crate) fn build(self) -> Comment {
        Comment {
            tokens: self.tokens,
        }
    }
}
