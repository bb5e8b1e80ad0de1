//! Assertion helpers for subgraph tests.
//!
//! [`Assert`] is a dispatch table: every assertion converts its operands,
//! calls one primitive on the injected host (see [`AssertHost`]) and turns a
//! `false` answer into an [`AssertionError`] tagged with the assertion kind.
//! The host owns the real comparison and the entity store; this crate owns
//! nothing but the routing.

pub mod assert;
pub mod config;
pub mod error;
pub mod host;
pub mod logging;

#[cfg(any(test, feature = "mocks"))]
pub mod mocks;

pub use assert::Assert;
pub use config::{ConfigError, HarnessConfig};
pub use error::{AssertResult, AssertionError, AssertionKind};
pub use host::{AssertHost, EntityCounter};

/// Re-export the value types so callers need a single import
pub use graphtest_values::{Address, BigInt, Bytes, Tuple, Value, ValueKind};
