//! In-process storage for dashboard field records.
//!
//! The HTTP layer only ever talks to the [`FieldStore`] trait, so a
//! persistent backend can replace [`InMemoryRegistry`] without touching
//! the handlers.

mod memory;
mod store;

pub use memory::InMemoryRegistry;
pub use store::FieldStore;
