//! Capabilities the assertion layer needs from its host.
//!
//! In a running test harness these are provided by the runtime embedding the
//! subgraph; in unit tests they are provided by a mock or by the in-memory
//! host of `graphtest-store`. Every primitive answers with a plain success
//! flag. Reporting the details of a failure (and the caller's message, for
//! the `_with_message` variants) is the host's job.

use std::sync::Arc;

use graphtest_values::Value;

/// Comparison primitives, one plain / with-message pair per assertion kind
pub trait AssertHost {
    /// Checks that field `field_name` of entity `entity_type`/`id` renders as `expected`.
    fn field_equals(&self, entity_type: &str, id: &str, field_name: &str, expected: &str) -> bool;

    fn field_equals_with_message(
        &self,
        entity_type: &str,
        id: &str,
        field_name: &str,
        expected: &str,
        message: &str,
    ) -> bool;

    /// Checks that two values are equal in both kind and payload.
    fn equals(&self, expected: &Value, actual: &Value) -> bool;

    fn equals_with_message(&self, expected: &Value, actual: &Value, message: &str) -> bool;

    /// Checks that no entity `entity_type`/`id` is stored.
    fn not_in_store(&self, entity_type: &str, id: &str) -> bool;

    fn not_in_store_with_message(&self, entity_type: &str, id: &str, message: &str) -> bool;
}

/// Entity count lookup backing `entity_count`
pub trait EntityCounter {
    fn count_entities(&self, entity_type: &str) -> i32;
}

macro_rules! forward_host {
    ($($wrapper:ty),*) => {$(
        impl<T: AssertHost + ?Sized> AssertHost for $wrapper {
            fn field_equals(&self, entity_type: &str, id: &str, field_name: &str, expected: &str) -> bool {
                (**self).field_equals(entity_type, id, field_name, expected)
            }

            fn field_equals_with_message(
                &self,
                entity_type: &str,
                id: &str,
                field_name: &str,
                expected: &str,
                message: &str,
            ) -> bool {
                (**self).field_equals_with_message(entity_type, id, field_name, expected, message)
            }

            fn equals(&self, expected: &Value, actual: &Value) -> bool {
                (**self).equals(expected, actual)
            }

            fn equals_with_message(&self, expected: &Value, actual: &Value, message: &str) -> bool {
                (**self).equals_with_message(expected, actual, message)
            }

            fn not_in_store(&self, entity_type: &str, id: &str) -> bool {
                (**self).not_in_store(entity_type, id)
            }

            fn not_in_store_with_message(&self, entity_type: &str, id: &str, message: &str) -> bool {
                (**self).not_in_store_with_message(entity_type, id, message)
            }
        }

        impl<T: EntityCounter + ?Sized> EntityCounter for $wrapper {
            fn count_entities(&self, entity_type: &str) -> i32 {
                (**self).count_entities(entity_type)
            }
        }
    )*};
}

forward_host!(&T, Box<T>, Arc<T>);
