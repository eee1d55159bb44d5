//! Domain types for the dashboard field service.
//!
//! This crate is I/O-free: it defines the field record entity, the input
//! DTO submitted by clients, and the error contract surfaced by storage
//! backends. The HTTP layer and the registry both depend on it.

pub mod error;
pub mod field;
pub mod types;
