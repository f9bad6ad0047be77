use super::types::{NewQuote, QuoteError, QuoteId, QuoteRecord, validate_author, validate_id};
use crate::storage::QuotesStore;

use std::sync::Arc;

/// Validates requests and forwards them to the store.
///
/// Holds no state of its own besides the store handle. Store errors are
/// returned as-is.
pub struct QuotesService {
    store: Arc<dyn QuotesStore>,
}

impl QuotesService {
    pub fn new(store: Arc<dyn QuotesStore>) -> Arc<Self> {
        Arc::new(Self { store })
    }

    pub fn create(&self, quote: NewQuote) -> Result<QuoteId, QuoteError> {
        quote.validate()?;

        let id = self.store.create(quote.author, quote.text)?;
        tracing::info!("Created quote {}", id);
        Ok(id)
    }

    /// Lists quotes, filtered by `author` when a non-empty one is given.
    pub fn get(&self, author: Option<&str>) -> Vec<QuoteRecord> {
        match author {
            Some(author) if validate_author(author).is_ok() => self.store.get_by_author(author),
            _ => self.store.get_all(),
        }
    }

    pub fn get_random(&self) -> Result<QuoteRecord, QuoteError> {
        self.store.get_random()
    }

    pub fn delete(&self, id: QuoteId) -> Result<(), QuoteError> {
        validate_id(id)?;

        self.store.delete(id)?;
        tracing::info!("Deleted quote {}", id);
        Ok(())
    }
}
