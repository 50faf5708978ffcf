//! Type formatter errors
//!
//! Both variants mean the caller broke the formatter's contract; malformed
//! user documentation never produces them.

use thiserror::Error;

/// Fatal type formatting error
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    #[error("cannot render internal placeholder type: {0}")]
    UnsupportedType(&'static str),

    #[error("no external link for native type `{0}`")]
    MissingNativeLink(&'static str),
}
