//! Token accumulation shared by the type formatters

use crate::comment::{Comment, CommentBuilder, Token};

/// Collects rendered type text, splitting it into literal runs and links
///
/// Unlinked text accumulates in a buffer that is flushed as a single literal
/// token whenever a link is written, so tokens keep left-to-right order.
#[derive(Debug, Default)]
pub(super) struct LinkedText {
    builder: CommentBuilder,
    current: String,
}

impl LinkedText {
    pub(super) fn new() -> Self {
        Self::default()
    }

    pub(super) fn text(&mut self, text: &str) {
        self.current.push_str(text);
    }

    pub(super) fn link(&mut self, text: &str, href: String) {
        self.flush();
        self.builder.push(Token::link(text, href));
    }

    fn flush(&mut self) {
        if !self.current.is_empty() {
            self.builder
                .push(Token::literal(std::mem::take(&mut self.current)));
        }
    }

    pub(super) fn finish(mut self) -> Comment {
        self.flush();
        self.builder.build()
    }
}
