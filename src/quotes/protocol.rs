//! Quotes HTTP Protocol
//!
//! Defines the API endpoints and the JSON envelopes returned to clients.
//!
//! Every envelope carries an `ok` flag. Failures add a human-readable `message`;
//! successes add the payload. Absent optional fields are left out of the JSON.

use super::types::{QuoteError, QuoteId, QuoteRecord};
use serde::{Deserialize, Serialize};

// --- API Endpoints ---

/// Create (POST) and list (GET) quotes.
pub const ENDPOINT_QUOTES: &str = "/quotes";
/// Draw a single random quote.
pub const ENDPOINT_RANDOM: &str = "/quotes/random";
/// Delete a quote by identifier.
pub const ENDPOINT_QUOTE_BY_ID: &str = "/quotes/:id";

// --- Transport-level messages ---

pub const MSG_BAD_REQUEST: &str = "incorrect request format";
pub const MSG_BAD_ID: &str = "id should be a non-negative number";

// --- Data Transfer Objects ---

/// Query string accepted by the list endpoint. Other parameters are ignored.
#[derive(Debug, Default, PartialEq)]
pub struct ListQuotesParams {
    pub author: Option<String>,
}

/// Built from raw query pairs. A repeated `author` keeps its first value.
impl From<Vec<(String, String)>> for ListQuotesParams {
    fn from(pairs: Vec<(String, String)>) -> Self {
        let author = pairs
            .into_iter()
            .find(|(key, _)| key == "author")
            .map(|(_, value)| value);
        Self { author }
    }
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct CreateQuoteResponse {
    pub ok: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<QuoteId>,
}

impl CreateQuoteResponse {
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            message: Some(message.into()),
            id: None,
        }
    }
}

impl From<Result<QuoteId, QuoteError>> for CreateQuoteResponse {
    fn from(result: Result<QuoteId, QuoteError>) -> Self {
        match result {
            Ok(id) => Self {
                ok: true,
                message: None,
                id: Some(id),
            },
            Err(e) => Self::failure(e.to_string()),
        }
    }
}

/// Listing never fails, so there is no message field.
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct ListQuotesResponse {
    pub ok: bool,
    pub quotes: Vec<QuoteRecord>,
}

impl From<Vec<QuoteRecord>> for ListQuotesResponse {
    fn from(quotes: Vec<QuoteRecord>) -> Self {
        Self { ok: true, quotes }
    }
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct RandomQuoteResponse {
    pub ok: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quote: Option<QuoteRecord>,
}

impl From<Result<QuoteRecord, QuoteError>> for RandomQuoteResponse {
    fn from(result: Result<QuoteRecord, QuoteError>) -> Self {
        match result {
            Ok(quote) => Self {
                ok: true,
                message: None,
                quote: Some(quote),
            },
            Err(e) => Self {
                ok: false,
                message: Some(e.to_string()),
                quote: None,
            },
        }
    }
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct DeleteQuoteResponse {
    pub ok: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl DeleteQuoteResponse {
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            message: Some(message.into()),
        }
    }
}

impl From<Result<(), QuoteError>> for DeleteQuoteResponse {
    fn from(result: Result<(), QuoteError>) -> Self {
        match result {
            Ok(()) => Self {
                ok: true,
                message: None,
            },
            Err(e) => Self::failure(e.to_string()),
        }
    }
}
