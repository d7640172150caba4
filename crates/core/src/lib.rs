//! Domain primitives shared by the store and the HTTP layer.
//!
//! Nothing in this crate performs I/O: it holds the id/timestamp aliases,
//! the domain error type, and the field rules applied to account and note
//! requests before anything touches the store.

pub mod accounts;
pub mod error;
pub mod notes;
pub mod search;
pub mod types;
