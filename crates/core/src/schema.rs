//! Request payload shaping: field presence and primitive coercion only.
//!
//! A payload is the decoded JSON object of a request body. Each entity
//! pulls its declared fields out of the payload through the `required_*` /
//! `optional_*` readers below, which either yield the coerced value or a
//! [`FieldViolation`]. Entities collect every violation of a payload into a
//! single [`ValidationError`] rather than stopping at the first one.
//!
//! Nothing here looks at the *content* of a value: empty strings, negative
//! identifiers and malformed e-mail addresses all pass. Business rules and
//! referential checks belong to later layers.

use std::fmt;

use serde_json::Value;

/// Raw field-name → value mapping taken from a request body.
pub type Payload = serde_json::Map<String, Value>;

/// Location reported when the payload itself is not a JSON object.
pub const BODY_FIELD: &str = "body";

// ---------------------------------------------------------------------------
// Violation types
// ---------------------------------------------------------------------------

/// Primitive type a field is declared with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrimitiveType {
    String,
    Integer,
    Object,
}

impl PrimitiveType {
    pub fn as_str(self) -> &'static str {
        match self {
            PrimitiveType::String => "string",
            PrimitiveType::Integer => "integer",
            PrimitiveType::Object => "object",
        }
    }
}

impl fmt::Display for PrimitiveType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Why a single field was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViolationKind {
    /// A mandatory field is absent from the payload.
    MissingRequiredField,
    /// The value is present but cannot be converted to the declared type.
    TypeCoercionFailure { expected: PrimitiveType },
}

impl ViolationKind {
    /// Stable machine-readable code, used in API error details.
    pub fn code(self) -> &'static str {
        match self {
            ViolationKind::MissingRequiredField => "missing_required_field",
            ViolationKind::TypeCoercionFailure { .. } => "type_coercion_failure",
        }
    }
}

/// A single field-level violation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldViolation {
    pub field: &'static str,
    pub kind: ViolationKind,
}

impl FieldViolation {
    pub fn missing(field: &'static str) -> Self {
        Self {
            field,
            kind: ViolationKind::MissingRequiredField,
        }
    }

    pub fn type_mismatch(field: &'static str, expected: PrimitiveType) -> Self {
        Self {
            field,
            kind: ViolationKind::TypeCoercionFailure { expected },
        }
    }

    /// Human-readable description without the field name.
    pub fn message(&self) -> String {
        match self.kind {
            ViolationKind::MissingRequiredField => "field required".to_string(),
            ViolationKind::TypeCoercionFailure { expected } => {
                format!("input should be a valid {expected}")
            }
        }
    }
}

impl fmt::Display for FieldViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message())
    }
}

/// All violations found while shaping one payload into `entity`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    entity: &'static str,
    violations: Vec<FieldViolation>,
}

impl ValidationError {
    /// Build an error from per-field outcomes, skipping the fields that passed.
    ///
    /// Callers only reach for this once a field is known to have failed.
    pub fn from_outcomes<I>(entity: &'static str, outcomes: I) -> Self
    where
        I: IntoIterator<Item = Option<FieldViolation>>,
    {
        Self {
            entity,
            violations: outcomes.into_iter().flatten().collect(),
        }
    }

    /// Name of the record type that failed to build.
    pub fn entity(&self) -> &'static str {
        self.entity
    }

    /// Violations in field-declaration order.
    pub fn violations(&self) -> &[FieldViolation] {
        &self.violations
    }

    /// Kind of the violation reported for `field`, if any.
    pub fn kind_of(&self, field: &str) -> Option<ViolationKind> {
        self.violations
            .iter()
            .find(|v| v.field == field)
            .map(|v| v.kind)
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let count = self.violations.len();
        let noun = if count == 1 { "error" } else { "errors" };
        write!(f, "{count} validation {noun} for {}", self.entity)?;
        for violation in &self.violations {
            write!(f, "; {violation}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationError {}

// ---------------------------------------------------------------------------
// Entity construction
// ---------------------------------------------------------------------------

/// A record that can be shaped from a raw request payload.
pub trait FromPayload: Sized {
    /// Record name reported in [`ValidationError::entity`].
    const ENTITY: &'static str;

    /// Shape `payload` into `Self`, reporting every failing field.
    fn from_payload(payload: &Payload) -> Result<Self, ValidationError>;

    /// Like [`FromPayload::from_payload`], for a body that may not be an object.
    fn from_json(value: &Value) -> Result<Self, ValidationError> {
        match value.as_object() {
            Some(payload) => Self::from_payload(payload),
            None => Err(ValidationError {
                entity: Self::ENTITY,
                violations: vec![FieldViolation::type_mismatch(
                    BODY_FIELD,
                    PrimitiveType::Object,
                )],
            }),
        }
    }
}

// ---------------------------------------------------------------------------
// Field readers
// ---------------------------------------------------------------------------

/// Read a mandatory string field. Any string content is accepted unchanged.
pub fn required_str(payload: &Payload, field: &'static str) -> Result<String, FieldViolation> {
    match payload.get(field) {
        None => Err(FieldViolation::missing(field)),
        Some(value) => {
            coerce_str(value).ok_or(FieldViolation::type_mismatch(field, PrimitiveType::String))
        }
    }
}

/// Read an optional string field. Absent and `null` both yield `None`.
pub fn optional_str(
    payload: &Payload,
    field: &'static str,
) -> Result<Option<String>, FieldViolation> {
    match payload.get(field) {
        None | Some(Value::Null) => Ok(None),
        Some(value) => coerce_str(value)
            .map(Some)
            .ok_or(FieldViolation::type_mismatch(field, PrimitiveType::String)),
    }
}

/// Read a string field that falls back to `default` only when absent.
///
/// Unlike [`optional_str`], an explicit `null` is a type failure.
pub fn str_or_default(
    payload: &Payload,
    field: &'static str,
    default: &str,
) -> Result<String, FieldViolation> {
    match payload.get(field) {
        None => Ok(default.to_owned()),
        Some(value) => {
            coerce_str(value).ok_or(FieldViolation::type_mismatch(field, PrimitiveType::String))
        }
    }
}

/// Read a mandatory integer field. Zero and negative values are accepted.
pub fn required_int(payload: &Payload, field: &'static str) -> Result<i64, FieldViolation> {
    match payload.get(field) {
        None => Err(FieldViolation::missing(field)),
        Some(value) => {
            coerce_int(value).ok_or(FieldViolation::type_mismatch(field, PrimitiveType::Integer))
        }
    }
}

/// Read an optional integer field. Absent and `null` both yield `None`.
pub fn optional_int(payload: &Payload, field: &'static str) -> Result<Option<i64>, FieldViolation> {
    match payload.get(field) {
        None | Some(Value::Null) => Ok(None),
        Some(value) => coerce_int(value)
            .map(Some)
            .ok_or(FieldViolation::type_mismatch(field, PrimitiveType::Integer)),
    }
}

/// Strings are taken verbatim; no other JSON type converts to a string.
fn coerce_str(value: &Value) -> Option<String> {
    value.as_str().map(str::to_owned)
}

/// Integers accept whole JSON numbers and numeric strings within `i64`.
///
/// Booleans are rejected even though JSON tooling sometimes treats them as
/// 0/1. Floats must have no fractional part.
fn coerce_int(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().and_then(whole_f64_to_i64)),
        Value::String(s) => s.trim().parse::<i64>().ok(),
        _ => None,
    }
}

fn whole_f64_to_i64(f: f64) -> Option<i64> {
    // i64::MAX as f64 rounds up to 2^63, hence the strict upper bound.
    let in_range = f >= i64::MIN as f64 && f < i64::MAX as f64;
    (f.fract() == 0.0 && in_range).then_some(f as i64)
}
