//! Docket Core - Comment processing engine for the Docket documentation generator
//!
//! This crate provides the pieces that turn documentation input into a
//! cross-referenced token stream ready for rendering:
//! - Comment: Token and comment model shared by every component
//! - Taglet tokenizer: Splits `{@code}` / `{@link}` / `{@literal}` markup into tokens
//! - Summary: First-sentence extraction
//! - Types: Type expression trees and their linked textual rendering
//! - Link: The resolver seam plus a registry-backed resolver
//! - Config: TOML configuration for link resolution

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Comment model, inline taglet tokenizer and summary extraction
pub mod comment;

/// Type expression model and formatters
pub mod types;

/// Link resolution - maps symbol names to documentation destinations
pub mod link;

/// Configuration loading
pub mod config;

pub use comment::{
    block_description, summarize, summary_comment, tokenize, tokenize_opt, Comment, LinkInfo,
    Token, TokenStyle,
};
pub use config::{ConfigError, DocketConfig};
pub use link::{LinkResolver, SymbolIndex, SymbolKind};
pub use types::{format, format_expr, format_opt, FormatError, TypeExpr, TypeNode};
