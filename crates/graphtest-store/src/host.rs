//! A host that answers assertion primitives from an [`EntityStore`].

use std::fmt;
use std::sync::Arc;

use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use tracing::{debug, error};

use graphtest_assert::{AssertHost, EntityCounter, HarnessConfig};
use graphtest_values::Value;

use crate::error::StoreResult;
use crate::store::EntityStore;

/// Which host primitive produced a failure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum HostPrimitive {
    FieldEquals,
    Equals,
    NotInStore,
}

impl fmt::Display for HostPrimitive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            HostPrimitive::FieldEquals => "fieldEquals",
            HostPrimitive::Equals => "equals",
            HostPrimitive::NotInStore => "notInStore",
        };
        f.write_str(name)
    }
}

/// One failed primitive call, as reported to the test author
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssertionFailure {
    pub primitive: HostPrimitive,
    /// What did not hold
    pub detail: String,
    /// Custom message passed to a `_with_message` primitive
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// In-memory implementation of the assertion host
#[derive(Debug)]
pub struct InMemoryHost {
    store: Arc<EntityStore>,
    config: HarnessConfig,
    failures: Mutex<Vec<AssertionFailure>>,
}

impl Default for InMemoryHost {
    fn default() -> Self {
        Self::new(Arc::new(EntityStore::new()))
    }
}

impl InMemoryHost {
    /// Create a host over `store` with the default configuration
    pub fn new(store: Arc<EntityStore>) -> Self {
        Self::with_config(store, HarnessConfig::default())
    }

    pub fn with_config(store: Arc<EntityStore>, config: HarnessConfig) -> Self {
        Self {
            store,
            config,
            failures: Mutex::new(Vec::new()),
        }
    }

    pub fn store(&self) -> &EntityStore {
        &self.store
    }

    pub fn config(&self) -> &HarnessConfig {
        &self.config
    }

    /// Failures recorded so far.
    pub fn failures(&self) -> Vec<AssertionFailure> {
        self.failures.lock().clone()
    }

    /// Drains the failure log.
    pub fn take_failures(&self) -> Vec<AssertionFailure> {
        std::mem::take(&mut *self.failures.lock())
    }

    pub fn failures_json(&self) -> StoreResult<String> {
        Ok(serde_json::to_string_pretty(&*self.failures.lock())?)
    }

    /// Turns a check result into the primitive's answer, reporting failures.
    fn report(&self, primitive: HostPrimitive, outcome: Result<(), String>, message: Option<&str>) -> bool {
        let detail = match outcome {
            Ok(()) => {
                debug!(primitive = %primitive, "Host check passed");
                return true;
            }
            Err(detail) => detail,
        };

        match message {
            Some(message) => error!(primitive = %primitive, %message, "{}", detail),
            None => error!(primitive = %primitive, "{}", detail),
        }

        if self.config.record_failures {
            self.failures.lock().push(AssertionFailure {
                primitive,
                detail,
                message: message.map(str::to_string),
            });
        }
        false
    }

    fn check_field(&self, entity_type: &str, id: &str, field_name: &str, expected: &str) -> Result<(), String> {
        let entity = self
            .store
            .get(entity_type, id)
            .ok_or_else(|| format!("No entity with type '{}' and id '{}'", entity_type, id))?;

        let value = entity.get(field_name).ok_or_else(|| {
            format!(
                "Field '{}' not found on entity '{}' with id '{}'",
                field_name, entity_type, id
            )
        })?;

        let actual = value.to_string();
        if actual != expected {
            return Err(format!(
                "Expected field '{}' to equal '{}', but was '{}' instead.",
                field_name, expected, actual
            ));
        }
        Ok(())
    }

    fn check_equals(expected: &Value, actual: &Value) -> Result<(), String> {
        if expected != actual {
            return Err(format!(
                "Expected value was '{}' but actual value was '{}'",
                expected, actual
            ));
        }
        Ok(())
    }

    fn check_absent(&self, entity_type: &str, id: &str) -> Result<(), String> {
        if self.store.contains(entity_type, id) {
            return Err(format!(
                "Value for entity type: '{}' and id: '{}' exists.",
                entity_type, id
            ));
        }
        Ok(())
    }
}

impl AssertHost for InMemoryHost {
    fn field_equals(&self, entity_type: &str, id: &str, field_name: &str, expected: &str) -> bool {
        let outcome = self.check_field(entity_type, id, field_name, expected);
        self.report(HostPrimitive::FieldEquals, outcome, None)
    }

    fn field_equals_with_message(
        &self,
        entity_type: &str,
        id: &str,
        field_name: &str,
        expected: &str,
        message: &str,
    ) -> bool {
        let outcome = self.check_field(entity_type, id, field_name, expected);
        self.report(HostPrimitive::FieldEquals, outcome, Some(message))
    }

    fn equals(&self, expected: &Value, actual: &Value) -> bool {
        self.report(HostPrimitive::Equals, Self::check_equals(expected, actual), None)
    }

    fn equals_with_message(&self, expected: &Value, actual: &Value, message: &str) -> bool {
        self.report(HostPrimitive::Equals, Self::check_equals(expected, actual), Some(message))
    }

    fn not_in_store(&self, entity_type: &str, id: &str) -> bool {
        let outcome = self.check_absent(entity_type, id);
        self.report(HostPrimitive::NotInStore, outcome, None)
    }

    fn not_in_store_with_message(&self, entity_type: &str, id: &str, message: &str) -> bool {
        let outcome = self.check_absent(entity_type, id);
        self.report(HostPrimitive::NotInStore, outcome, Some(message))
    }
}

impl EntityCounter for InMemoryHost {
    fn count_entities(&self, entity_type: &str) -> i32 {
        i32::try_from(self.store.count(entity_type)).unwrap_or(i32::MAX)
    }
}
