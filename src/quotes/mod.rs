//! Quotes Service Module
//!
//! Everything above the store: input validation, response shaping and the HTTP surface.
//!
//! ## Request Flow
//! 1. **Decode**: `handlers` turns the HTTP request into a `NewQuote`, an author filter or an id.
//! 2. **Validate**: `QuotesService` rejects empty authors, empty texts and zero ids before
//!    touching the store.
//! 3. **Delegate**: Valid requests go to the `QuotesStore`; its errors are passed through unchanged.
//! 4. **Encode**: The `Result` is folded into an `{ok, message | payload}` envelope from `protocol`.
//!
//! ## Submodules
//! - **`types`**: The quote record, the create input and the error taxonomy.
//! - **`service`**: Validation and delegation to the store.
//! - **`protocol`**: Endpoint paths and JSON envelopes.
//! - **`handlers`**: Axum handlers and the router.

pub mod handlers;
pub mod protocol;
pub mod service;
pub mod types;
