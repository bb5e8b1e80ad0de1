//! The assertion dispatch table.

use tracing::{debug, warn};

use graphtest_values::{Address, BigInt, Bytes, Tuple, Value};

use crate::error::{AssertResult, AssertionError, AssertionKind};
use crate::host::{AssertHost, EntityCounter};

/// Treats an empty message exactly like no message.
fn routed(message: Option<&str>) -> Option<&str> {
    message.filter(|m| !m.is_empty())
}

/// Assertion entry points bound to a host.
///
/// `Assert` keeps no state of its own. Each method makes exactly one host
/// call and maps its answer to `Ok(())` or an [`AssertionError`].
#[derive(Debug, Clone)]
pub struct Assert<H> {
    host: H,
}

impl<H> Assert<H> {
    pub fn new(host: H) -> Self {
        Self { host }
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn into_host(self) -> H {
        self.host
    }
}

impl<H: AssertHost> Assert<H> {
    fn conclude(&self, kind: AssertionKind, success: bool, message: Option<&str>) -> AssertResult {
        if success {
            return Ok(());
        }
        warn!(assertion = %kind, message = ?message, "Assertion failed");
        Err(AssertionError::new(kind, message))
    }

    /// Routes a value comparison to `equals` or `equals_with_message`.
    fn compare(
        &self,
        kind: AssertionKind,
        expected: &Value,
        actual: &Value,
        message: Option<&str>,
    ) -> AssertResult {
        let message = routed(message);
        debug!(assertion = %kind, with_message = message.is_some(), "Dispatching value comparison");

        let success = match message {
            None => self.host.equals(expected, actual),
            Some(message) => self.host.equals_with_message(expected, actual, message),
        };
        self.conclude(kind, success, message)
    }

    /// Asserts that a stored entity's field renders as `expected`.
    ///
    /// # Arguments
    ///
    /// * `entity_type` - Entity type name, e.g. `"Gravatar"`
    /// * `id` - Entity id
    /// * `field_name` - Field to read
    /// * `expected` - Expected value in its string form
    /// * `message` - Optional text the host reports on failure
    ///
    /// # Returns
    ///
    /// * `Ok(())` - If the host confirms the field value
    /// * `Err(AssertionError)` - With kind [`AssertionKind::FieldEquals`] otherwise
    pub fn field_equals(
        &self,
        entity_type: &str,
        id: &str,
        field_name: &str,
        expected: &str,
        message: Option<&str>,
    ) -> AssertResult {
        let message = routed(message);
        debug!(entity_type, id, field_name, with_message = message.is_some(), "Dispatching fieldEquals");

        let success = match message {
            None => self.host.field_equals(entity_type, id, field_name, expected),
            Some(message) => self
                .host
                .field_equals_with_message(entity_type, id, field_name, expected, message),
        };
        self.conclude(AssertionKind::FieldEquals, success, message)
    }

    /// Asserts that two already-converted values are equal.
    pub fn equals(&self, expected: &Value, actual: &Value, message: Option<&str>) -> AssertResult {
        self.compare(AssertionKind::Equals, expected, actual, message)
    }

    /// Asserts that no entity with the given type and id is stored.
    ///
    /// # Returns
    ///
    /// * `Ok(())` - If the entity is absent
    /// * `Err(AssertionError)` - With kind [`AssertionKind::NotInStore`] if it exists
    pub fn not_in_store(&self, entity_type: &str, id: &str, message: Option<&str>) -> AssertResult {
        let message = routed(message);
        debug!(entity_type, id, with_message = message.is_some(), "Dispatching notInStore");

        let success = match message {
            None => self.host.not_in_store(entity_type, id),
            Some(message) => self.host.not_in_store_with_message(entity_type, id, message),
        };
        self.conclude(AssertionKind::NotInStore, success, message)
    }

    pub fn address_equals(&self, expected: Address, actual: Address, message: Option<&str>) -> AssertResult {
        self.compare(
            AssertionKind::AddressEquals,
            &Value::from_address(expected),
            &Value::from_address(actual),
            message,
        )
    }

    pub fn bytes_equals(&self, expected: &Bytes, actual: &Bytes, message: Option<&str>) -> AssertResult {
        self.compare(
            AssertionKind::BytesEquals,
            &Value::from_bytes(expected.clone()),
            &Value::from_bytes(actual.clone()),
            message,
        )
    }

    pub fn i32_equals(&self, expected: i32, actual: i32, message: Option<&str>) -> AssertResult {
        self.compare(
            AssertionKind::I32Equals,
            &Value::from_i32(expected),
            &Value::from_i32(actual),
            message,
        )
    }

    /// Compares two big integers as signed values.
    pub fn big_int_equals(&self, expected: &BigInt, actual: &BigInt, message: Option<&str>) -> AssertResult {
        self.compare(
            AssertionKind::BigIntEquals,
            &Value::from_signed_big_int(expected.clone()),
            &Value::from_signed_big_int(actual.clone()),
            message,
        )
    }

    pub fn boolean_equals(&self, expected: bool, actual: bool, message: Option<&str>) -> AssertResult {
        self.compare(
            AssertionKind::BooleanEquals,
            &Value::from_boolean(expected),
            &Value::from_boolean(actual),
            message,
        )
    }

    pub fn string_equals(&self, expected: &str, actual: &str, message: Option<&str>) -> AssertResult {
        self.compare(
            AssertionKind::StringEquals,
            &Value::from_string(expected),
            &Value::from_string(actual),
            message,
        )
    }

    /// Compares two arrays element by element; both are wrapped as `Array` values.
    pub fn array_equals(&self, expected: &[Value], actual: &[Value], message: Option<&str>) -> AssertResult {
        self.compare(
            AssertionKind::ArrayEquals,
            &Value::from_array(expected.to_vec()),
            &Value::from_array(actual.to_vec()),
            message,
        )
    }

    pub fn tuple_equals(&self, expected: &Tuple, actual: &Tuple, message: Option<&str>) -> AssertResult {
        self.compare(
            AssertionKind::TupleEquals,
            &Value::from_tuple(expected.clone()),
            &Value::from_tuple(actual.clone()),
            message,
        )
    }

    pub fn assert_true(&self, value: bool, message: Option<&str>) -> AssertResult {
        self.compare(
            AssertionKind::AssertTrue,
            &Value::from_boolean(true),
            &Value::from_boolean(value),
            message,
        )
    }

    /// Succeeds iff `value` is `None`.
    pub fn assert_null<T>(&self, value: &Option<T>, message: Option<&str>) -> AssertResult {
        self.compare(
            AssertionKind::AssertNull,
            &Value::from_boolean(true),
            &Value::from_boolean(value.is_none()),
            message,
        )
    }

    /// Succeeds iff `value` is `Some`.
    pub fn assert_not_null<T>(&self, value: &Option<T>, message: Option<&str>) -> AssertResult {
        self.compare(
            AssertionKind::AssertNotNull,
            &Value::from_boolean(true),
            &Value::from_boolean(value.is_some()),
            message,
        )
    }
}

impl<H: AssertHost + EntityCounter> Assert<H> {
    /// Asserts that the host stores exactly `expected` entities of `entity_type`.
    ///
    /// The count is looked up first, then both numbers are compared through
    /// the host's value equality like any other `i32` pair.
    pub fn entity_count(&self, entity_type: &str, expected: i32, message: Option<&str>) -> AssertResult {
        let actual = self.host.count_entities(entity_type);
        debug!(entity_type, expected, actual, "Counted entities");

        self.compare(
            AssertionKind::EntityCount,
            &Value::from_i32(expected),
            &Value::from_i32(actual),
            message,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mocks::{create_mock_host, MockHost};
    use assert_matches::assert_matches;
    use mockall::predicate::*;

    fn failing_equals() -> MockHost {
        let mut host = MockHost::new();
        host.expect_equals().returning(|_, _| false);
        host.expect_equals_with_message().returning(|_, _, _| false);
        host
    }

    #[test]
    fn routed_treats_empty_as_absent() {
        assert_eq!(routed(None), None);
        assert_eq!(routed(Some("")), None);
        assert_eq!(routed(Some("why")), Some("why"));
    }

    #[test_log::test]
    fn field_equals_without_message_uses_plain_primitive() {
        let mut host = MockHost::new();
        host.expect_field_equals()
            .with(eq("Gravatar"), eq("0x1"), eq("displayName"), eq("First"))
            .times(1)
            .returning(|_, _, _, _| true);
        host.expect_field_equals_with_message().never();

        let assert = Assert::new(host);
        assert!(assert.field_equals("Gravatar", "0x1", "displayName", "First", None).is_ok());
    }

    #[test]
    fn field_equals_with_message_forwards_exact_text() {
        let mut host = MockHost::new();
        host.expect_field_equals().never();
        host.expect_field_equals_with_message()
            .with(eq("Gravatar"), eq("0x1"), eq("displayName"), eq("First"), eq("name mismatch"))
            .times(1)
            .returning(|_, _, _, _, _| false);

        let assert = Assert::new(host);
        let err = assert
            .field_equals("Gravatar", "0x1", "displayName", "First", Some("name mismatch"))
            .unwrap_err();
        assert_eq!(err.kind(), AssertionKind::FieldEquals);
        assert_eq!(err.to_string(), "Assertion Error");
        assert_eq!(err.message(), Some("name mismatch"));
    }

    #[test]
    fn empty_message_routes_to_plain_primitive() {
        let mut host = MockHost::new();
        host.expect_not_in_store()
            .with(eq("Token"), eq("1"))
            .times(1)
            .returning(|_, _| true);
        host.expect_not_in_store_with_message().never();

        let assert = Assert::new(host);
        assert!(assert.not_in_store("Token", "1", Some("")).is_ok());
    }

    #[test]
    fn empty_message_failure_carries_no_message() {
        let assert = Assert::new(failing_equals());
        let err = assert.string_equals("a", "b", Some("")).unwrap_err();
        assert_eq!(err.message(), None);
    }

    #[test]
    fn not_in_store_with_message() {
        let mut host = MockHost::new();
        host.expect_not_in_store_with_message()
            .with(eq("Token"), eq("1"), eq("should be gone"))
            .times(1)
            .returning(|_, _, _| false);

        let assert = Assert::new(host);
        let err = assert.not_in_store("Token", "1", Some("should be gone")).unwrap_err();
        assert_eq!(err.kind(), AssertionKind::NotInStore);
    }

    #[test]
    fn typed_wrappers_convert_operands() {
        let address = Address::new([1; 20]);
        let bytes = Bytes::from_slice(&[1, 2, 3]);
        let big = BigInt::from_i64(1 << 40);
        let tuple = Tuple::new(vec![Value::from_i32(1), Value::from_string("x")]);
        let array = vec![Value::from_boolean(true)];

        let mut host = MockHost::new();
        host.expect_equals()
            .with(eq(Value::from_address(address)), eq(Value::from_address(address)))
            .times(1)
            .returning(|_, _| true);
        host.expect_equals()
            .with(eq(Value::from_bytes(bytes.clone())), eq(Value::from_bytes(bytes.clone())))
            .times(1)
            .returning(|_, _| true);
        host.expect_equals()
            .with(eq(Value::from_i32(3)), eq(Value::from_i32(4)))
            .times(1)
            .returning(|_, _| true);
        host.expect_equals()
            .with(eq(Value::Int(big.clone())), eq(Value::Int(big.clone())))
            .times(1)
            .returning(|_, _| true);
        host.expect_equals()
            .with(eq(Value::Bool(false)), eq(Value::Bool(true)))
            .times(1)
            .returning(|_, _| true);
        host.expect_equals()
            .with(eq(Value::from_string("a")), eq(Value::from_string("b")))
            .times(1)
            .returning(|_, _| true);
        host.expect_equals()
            .with(eq(Value::Array(array.clone())), eq(Value::Array(array.clone())))
            .times(1)
            .returning(|_, _| true);
        host.expect_equals()
            .with(eq(Value::Tuple(tuple.clone())), eq(Value::Tuple(tuple.clone())))
            .times(1)
            .returning(|_, _| true);

        let assert = Assert::new(host);
        assert!(assert.address_equals(address, address, None).is_ok());
        assert!(assert.bytes_equals(&bytes, &bytes, None).is_ok());
        assert!(assert.i32_equals(3, 4, None).is_ok());
        assert!(assert.big_int_equals(&big, &big, None).is_ok());
        assert!(assert.boolean_equals(false, true, None).is_ok());
        assert!(assert.string_equals("a", "b", None).is_ok());
        assert!(assert.array_equals(&array, &array, None).is_ok());
        assert!(assert.tuple_equals(&tuple, &tuple, None).is_ok());
    }

    #[test]
    fn each_kind_reports_its_failure_text() {
        let assert = Assert::new(failing_equals());
        let tuple = Tuple::default();

        let cases = vec![
            (assert.equals(&Value::from_i32(1), &Value::from_i32(2), None), "Assertion Error"),
            (assert.address_equals(Address::ZERO, Address::ZERO, None), "Assertion Error"),
            (assert.bytes_equals(&Bytes::new(), &Bytes::new(), None), "Assertion Error"),
            (assert.i32_equals(1, 2, None), "Assertion Error"),
            (assert.big_int_equals(&BigInt::zero(), &BigInt::zero(), None), "Assertion Error"),
            (assert.boolean_equals(true, false, None), "booleanEquals Assertion Error"),
            (assert.string_equals("a", "b", None), "stringEquals Assertion Error"),
            (assert.array_equals(&[], &[], None), "arrayEquals Assertion Error"),
            (assert.tuple_equals(&tuple, &tuple, Some("tuples")), "tupleEquals Assertion Error"),
            (assert.assert_true(false, None), "assertTrue Assertion Error"),
            (assert.assert_null(&Some(1), None), "assertNull Assertion Error"),
            (assert.assert_not_null::<i32>(&None, None), "assertNotNull Assertion Error"),
        ];

        for (result, text) in cases {
            let err = result.unwrap_err();
            assert_eq!(err.to_string(), text, "unexpected text for {}", err.kind());
        }
    }

    #[test]
    fn null_checks_compare_true_with_presence() {
        let mut host = MockHost::new();
        host.expect_equals()
            .with(eq(Value::Bool(true)), eq(Value::Bool(true)))
            .times(2)
            .returning(|_, _| true);
        host.expect_equals()
            .with(eq(Value::Bool(true)), eq(Value::Bool(false)))
            .times(2)
            .returning(|_, _| false);

        let assert = Assert::new(host);
        assert!(assert.assert_null::<u8>(&None, None).is_ok());
        assert!(assert.assert_not_null(&Some("x"), None).is_ok());
        assert_matches!(
            assert.assert_null(&Some("x"), None),
            Err(e) if e.kind() == AssertionKind::AssertNull
        );
        assert_matches!(
            assert.assert_not_null::<u8>(&None, None),
            Err(e) if e.kind() == AssertionKind::AssertNotNull
        );
    }

    #[test]
    fn assert_true_routes_message() {
        let mut host = MockHost::new();
        host.expect_equals().never();
        host.expect_equals_with_message()
            .with(eq(Value::Bool(true)), eq(Value::Bool(true)), eq("must hold"))
            .times(1)
            .returning(|_, _, _| true);

        let assert = Assert::new(host);
        assert!(assert.assert_true(true, Some("must hold")).is_ok());
    }

    #[test]
    fn entity_count_compares_lookup_result() {
        let mut host = create_mock_host();
        host.expect_count_entities()
            .with(eq("Token"))
            .returning(|_| 0);

        let assert = Assert::new(host);
        assert!(assert.entity_count("Token", 0, Some("no tokens yet")).is_ok());

        let err = assert.entity_count("Token", 2, None).unwrap_err();
        assert_eq!(err.kind(), AssertionKind::EntityCount);
        assert_eq!(err.to_string(), "entityCount Assertion Error");
    }

    #[test]
    fn works_through_a_borrowed_host() {
        let host = create_mock_host();
        let assert = Assert::new(&host);
        assert!(assert.string_equals("same", "same", None).is_ok());
        assert!(assert.string_equals("same", "other", None).is_err());
    }
}
