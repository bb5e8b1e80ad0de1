//! In-memory backing for graphtest assertions.
//!
//! [`EntityStore`] holds the entities a test has saved, keyed by entity type
//! and id. [`InMemoryHost`] answers the assertion primitives against that
//! store the way the harness runtime does, logging and recording every
//! failure so a test report can show why an assertion did not hold.

pub mod entity;
pub mod error;
pub mod host;
pub mod store;

pub use entity::{Entity, StoreValue};
pub use error::StoreError;
pub use host::{AssertionFailure, HostPrimitive, InMemoryHost};
pub use store::EntityStore;
