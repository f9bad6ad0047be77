//! Quote Storage Module
//!
//! Owns the quote collection and the identifier counter.
//!
//! ## Core Concepts
//! - **Capability**: `QuotesStore` is the interface the service layer depends on, so the
//!   service can run against the real store or a test double.
//! - **Serialization**: `MemoryQuotesStore` funnels every operation through a single mutex.
//!   Each call is synchronous, does no I/O and holds the lock for its whole duration.
//! - **Identifiers**: allocated from a monotonically increasing counter and never reused,
//!   even after deletion.

pub mod memory;


use crate::quotes::types::{QuoteError, QuoteId, QuoteRecord};

/// Storage primitives for quotes.
///
/// Content is not validated here; callers check author and text first.
pub trait QuotesStore: Send + Sync {
    /// Stores a new record and returns its freshly issued identifier.
    fn create(&self, author: String, text: String) -> Result<QuoteId, QuoteError>;

    /// Every current record, in no particular order.
    fn get_all(&self) -> Vec<QuoteRecord>;

    /// Records whose author equals `author` exactly (case-sensitive).
    fn get_by_author(&self, author: &str) -> Vec<QuoteRecord>;

    /// One record drawn uniformly at random.
    fn get_random(&self) -> Result<QuoteRecord, QuoteError>;

    fn delete(&self, id: QuoteId) -> Result<(), QuoteError>;
}
