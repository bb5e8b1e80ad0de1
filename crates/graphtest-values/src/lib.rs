//! Typed operands for graphtest assertions.
//!
//! Everything an assertion compares is first converted into a [`Value`], the
//! tagged union the host's equality primitive understands. The operand types
//! in this crate (`Address`, `Bytes`, `BigInt`, `Tuple`) follow the layout the
//! subgraph runtime uses for them, so a value built here compares the same way
//! it would on the host.

pub mod address;
pub mod big_int;
pub mod bytes;
pub mod error;
pub mod value;

pub use address::Address;
pub use big_int::BigInt;
pub use bytes::Bytes;
pub use error::ValueError;
pub use value::{Tuple, Value, ValueKind};
