//! Shared fixtures for store-backed assertion tests.

use std::sync::Arc;

use graphtest_store::{Entity, EntityStore, InMemoryHost};
use graphtest_values::{Address, BigInt};

pub const GRAVATAR: &str = "Gravatar";
pub const TOKEN: &str = "Token";

pub fn owner() -> Address {
    Address::from_hex_string("0x89205a3a3b2a69de6dbf7f01ed13b2108b2c43e7").expect("valid address")
}

/// A host holding two gravatars and no tokens.
pub fn seeded_host() -> Arc<InMemoryHost> {
    let store = Arc::new(EntityStore::new());
    store
        .set(
            GRAVATAR,
            "0x0",
            Entity::new()
                .with("owner", owner())
                .with("displayName", "Gravatar 0")
                .with("imageUrl", "https://example.com/0.png")
                .with("balance", BigInt::from_i64(1_000_000_000_000)),
        )
        .expect("seed gravatar 0");
    store
        .set(
            GRAVATAR,
            "0x1",
            Entity::new()
                .with("owner", owner())
                .with("displayName", "Gravatar 1")
                .with("tags", vec!["a", "b"]),
        )
        .expect("seed gravatar 1");

    Arc::new(InMemoryHost::new(store))
}
