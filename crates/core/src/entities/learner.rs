//! Learner create record.

use crate::schema::{self, FromPayload, Payload, ValidationError};

/// Request record for registering a learner.
///
/// `email` is opaque text: no format or emptiness check is applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LearnerCreate {
    pub name: String,
    pub email: String,
}

impl LearnerCreate {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
        }
    }
}

impl FromPayload for LearnerCreate {
    const ENTITY: &'static str = "LearnerCreate";

    fn from_payload(payload: &Payload) -> Result<Self, ValidationError> {
        let name = schema::required_str(payload, "name");
        let email = schema::required_str(payload, "email");

        match (name, email) {
            (Ok(name), Ok(email)) => Ok(Self { name, email }),
            (name, email) => Err(ValidationError::from_outcomes(
                Self::ENTITY,
                [name.err(), email.err()],
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{PrimitiveType, ViolationKind};
    use serde_json::json;

    fn learner(name: &str, email: &str) -> LearnerCreate {
        LearnerCreate::from_json(&json!({ "name": name, "email": email })).unwrap()
    }

    #[test]
    fn name_empty_string_is_accepted() {
        assert_eq!(learner("", "test@example.com").name, "");
    }

    #[test]
    fn email_empty_string_is_accepted() {
        assert_eq!(learner("Test User", "").email, "");
    }

    #[test]
    fn both_fields_empty_is_accepted() {
        assert_eq!(learner("", ""), LearnerCreate::new("", ""));
    }

    #[test]
    fn email_format_is_not_checked() {
        for email in [
            "invalid-email",
            "user+tag@example.com",
            "user@mail.sub.example.com",
            "@@",
        ] {
            assert_eq!(learner("Test", email).email, email);
        }
    }

    #[test]
    fn name_with_unicode_round_trips() {
        assert_eq!(
            learner("Іван Петренко", "ivan@example.com").name,
            "Іван Петренко"
        );
    }

    #[test]
    fn very_long_name_is_accepted() {
        let long_name = "C".repeat(500);
        assert_eq!(learner(&long_name, "test@example.com").name.len(), 500);
    }

    #[test]
    fn missing_email_is_rejected() {
        let err = LearnerCreate::from_json(&json!({ "name": "No Mail" })).unwrap_err();
        assert_eq!(err.entity(), "LearnerCreate");
        assert_eq!(err.kind_of("email"), Some(ViolationKind::MissingRequiredField));
        assert_eq!(err.kind_of("name"), None);
    }

    #[test]
    fn missing_both_fields_reports_both() {
        let err = LearnerCreate::from_json(&json!({})).unwrap_err();
        assert_eq!(err.violations().len(), 2);
    }

    #[test]
    fn numeric_name_is_not_coerced_to_string() {
        let err = LearnerCreate::from_json(&json!({ "name": 42, "email": "" })).unwrap_err();
        assert_eq!(
            err.kind_of("name"),
            Some(ViolationKind::TypeCoercionFailure {
                expected: PrimitiveType::String
            })
        );
    }

    #[test]
    fn null_name_and_email_are_type_failures_not_missing() {
        let err =
            LearnerCreate::from_json(&json!({ "name": null, "email": null })).unwrap_err();
        let string_failure = Some(ViolationKind::TypeCoercionFailure {
            expected: PrimitiveType::String,
        });
        assert_eq!(err.kind_of("name"), string_failure);
        assert_eq!(err.kind_of("email"), string_failure);
        assert_eq!(err.violations().len(), 2);
    }
}
