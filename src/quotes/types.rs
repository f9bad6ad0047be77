//! Quote Data Types
//!
//! The stored record, the create input and the error taxonomy shared by the
//! store and the service.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Identifier of a quote within one store.
///
/// Issued in increasing order starting at 1 and never reused. `0` marks an
/// unset or invalid identifier.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(transparent)]
pub struct QuoteId(pub u64);

impl QuoteId {
    pub fn is_valid(&self) -> bool {
        self.0 != 0
    }
}

impl fmt::Display for QuoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A stored quote. Records are never edited, only deleted as a whole.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct QuoteRecord {
    pub id: QuoteId,
    pub author: String,
    pub text: String,
}

/// Body of a create request. Missing fields decode as empty strings and are
/// caught by `validate`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct NewQuote {
    pub author: String,
    #[serde(alias = "quote")]
    pub text: String,
}

impl NewQuote {
    pub fn new(author: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            author: author.into(),
            text: text.into(),
        }
    }

    /// Checks the author, then the text. Only the first failure is reported.
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_author(&self.author)?;
        validate_text(&self.text)?;
        Ok(())
    }
}

pub fn validate_author(author: &str) -> Result<(), ValidationError> {
    if author.is_empty() {
        return Err(ValidationError::EmptyAuthor);
    }
    Ok(())
}

pub fn validate_text(text: &str) -> Result<(), ValidationError> {
    if text.is_empty() {
        return Err(ValidationError::EmptyText);
    }
    Ok(())
}

pub fn validate_id(id: QuoteId) -> Result<(), ValidationError> {
    if !id.is_valid() {
        return Err(ValidationError::ZeroId);
    }
    Ok(())
}

/// Input rejected before the store is touched.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("author cannot be empty")]
    EmptyAuthor,

    #[error("quote cannot be empty")]
    EmptyText,

    #[error("id cannot be zero")]
    ZeroId,
}

/// Every failure a quote operation can report. None of them are fatal.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuoteError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("no quotes to retrieve")]
    EmptyStore,

    #[error("no quote with specified id")]
    NotFound,

    #[error("space limit exceeded")]
    CapacityExceeded,
}
