//! Mock host for testing code that drives assertions.

use mockall::mock;

use graphtest_values::Value;

use crate::host::{AssertHost, EntityCounter};

// Generate the mock implementation
mock! {
    pub Host {}

    impl AssertHost for Host {
        fn field_equals(&self, entity_type: &str, id: &str, field_name: &str, expected: &str) -> bool;
        fn field_equals_with_message(
            &self,
            entity_type: &str,
            id: &str,
            field_name: &str,
            expected: &str,
            message: &str,
        ) -> bool;
        fn equals(&self, expected: &Value, actual: &Value) -> bool;
        fn equals_with_message(&self, expected: &Value, actual: &Value, message: &str) -> bool;
        fn not_in_store(&self, entity_type: &str, id: &str) -> bool;
        fn not_in_store_with_message(&self, entity_type: &str, id: &str, message: &str) -> bool;
    }

    impl EntityCounter for Host {
        fn count_entities(&self, entity_type: &str) -> i32;
    }
}

/// Creates a mock host whose value equality behaves like the real one.
///
/// Store primitives and the entity count have no default; tests set the
/// expectations they need.
pub fn create_mock_host() -> MockHost {
    let mut mock = MockHost::new();

    mock.expect_equals()
        .returning(|expected, actual| expected == actual);

    mock.expect_equals_with_message()
        .returning(|expected, actual, _| expected == actual);

    mock
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_host_default_behavior() {
        let mock = create_mock_host();

        assert!(mock.equals(&Value::from_i32(1), &Value::from_i32(1)));
        assert!(!mock.equals(&Value::from_i32(1), &Value::from_i32(2)));
        assert!(!mock.equals_with_message(&Value::from_i32(1), &Value::from_string("1"), "kinds differ"));
    }

    #[test]
    fn test_mock_host_custom_behavior() {
        let mut mock = MockHost::new();

        mock.expect_count_entities()
            .returning(|entity_type| if entity_type == "Token" { 3 } else { 0 });

        assert_eq!(mock.count_entities("Token"), 3);
        assert_eq!(mock.count_entities("Pair"), 0);
    }
}
