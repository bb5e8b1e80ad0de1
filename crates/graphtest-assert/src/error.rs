use std::fmt;

use thiserror::Error;

/// Identifies which assertion failed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AssertionKind {
    FieldEquals,
    Equals,
    NotInStore,
    AddressEquals,
    BytesEquals,
    I32Equals,
    BigIntEquals,
    BooleanEquals,
    StringEquals,
    ArrayEquals,
    TupleEquals,
    AssertTrue,
    AssertNull,
    AssertNotNull,
    EntityCount,
}

impl AssertionKind {
    /// Name of the assertion as test authors call it.
    pub fn name(&self) -> &'static str {
        match self {
            AssertionKind::FieldEquals => "fieldEquals",
            AssertionKind::Equals => "equals",
            AssertionKind::NotInStore => "notInStore",
            AssertionKind::AddressEquals => "addressEquals",
            AssertionKind::BytesEquals => "bytesEquals",
            AssertionKind::I32Equals => "i32Equals",
            AssertionKind::BigIntEquals => "bigIntEquals",
            AssertionKind::BooleanEquals => "booleanEquals",
            AssertionKind::StringEquals => "stringEquals",
            AssertionKind::ArrayEquals => "arrayEquals",
            AssertionKind::TupleEquals => "tupleEquals",
            AssertionKind::AssertTrue => "assertTrue",
            AssertionKind::AssertNull => "assertNull",
            AssertionKind::AssertNotNull => "assertNotNull",
            AssertionKind::EntityCount => "entityCount",
        }
    }

    /// Fixed text carried by a failure of this kind.
    ///
    /// The store, generic and numeric/byte assertions share one generic
    /// string; the remaining kinds prefix it with their own name.
    pub fn failure_text(&self) -> &'static str {
        match self {
            AssertionKind::FieldEquals
            | AssertionKind::Equals
            | AssertionKind::NotInStore
            | AssertionKind::AddressEquals
            | AssertionKind::BytesEquals
            | AssertionKind::I32Equals
            | AssertionKind::BigIntEquals => "Assertion Error",
            AssertionKind::BooleanEquals => "booleanEquals Assertion Error",
            AssertionKind::StringEquals => "stringEquals Assertion Error",
            AssertionKind::ArrayEquals => "arrayEquals Assertion Error",
            AssertionKind::TupleEquals => "tupleEquals Assertion Error",
            AssertionKind::AssertTrue => "assertTrue Assertion Error",
            AssertionKind::AssertNull => "assertNull Assertion Error",
            AssertionKind::AssertNotNull => "assertNotNull Assertion Error",
            AssertionKind::EntityCount => "entityCount Assertion Error",
        }
    }
}

impl fmt::Display for AssertionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Raised when the host reports that an asserted condition does not hold.
///
/// `Display` is always the kind's fixed failure text. A custom message given
/// by the caller was already handed to the host for reporting; it is kept
/// here for programmatic access but is not part of the rendered text.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{}", .kind.failure_text())]
pub struct AssertionError {
    kind: AssertionKind,
    message: Option<String>,
}

impl AssertionError {
    pub fn new(kind: AssertionKind, message: Option<&str>) -> Self {
        Self {
            kind,
            message: message.map(str::to_string),
        }
    }

    pub fn kind(&self) -> AssertionKind {
        self.kind
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}

/// Result of a single assertion
pub type AssertResult = Result<(), AssertionError>;
