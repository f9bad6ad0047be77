//! Quotes Service Library
//!
//! An HTTP service for author-attributed quotes held in process memory.
//! It serves as the foundation for the binary executable (`main.rs`).
//!
//! ## Architecture Modules
//! - **`storage`**: The quote store. A single mutex serializes every read and write, and
//!   identifiers come from a counter that never goes backwards.
//! - **`quotes`**: The service layer (validation and response shaping) and its HTTP
//!   surface: create, list/filter by author, random pick and delete.
//! - **`config`**: Command-line and environment configuration for the server.

pub mod config;
pub mod quotes;
pub mod storage;
