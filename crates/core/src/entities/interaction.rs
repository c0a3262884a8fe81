//! Interaction log create record.

use crate::schema::{self, FromPayload, Payload, ValidationError};
use crate::types::DbId;

/// Request record for logging a learner's interaction with an item.
///
/// Both ids are taken as-is; whether they reference existing rows is
/// decided by the store's foreign keys.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InteractionLogCreate {
    pub learner_id: DbId,
    pub item_id: DbId,
    /// Free-form interaction label such as `"view"` or `"attempt"`.
    pub kind: String,
}

impl InteractionLogCreate {
    pub fn new(learner_id: DbId, item_id: DbId, kind: impl Into<String>) -> Self {
        Self {
            learner_id,
            item_id,
            kind: kind.into(),
        }
    }
}

impl FromPayload for InteractionLogCreate {
    const ENTITY: &'static str = "InteractionLogCreate";

    fn from_payload(payload: &Payload) -> Result<Self, ValidationError> {
        let learner_id = schema::required_int(payload, "learner_id");
        let item_id = schema::required_int(payload, "item_id");
        let kind = schema::required_str(payload, "kind");

        match (learner_id, item_id, kind) {
            (Ok(learner_id), Ok(item_id), Ok(kind)) => Ok(Self {
                learner_id,
                item_id,
                kind,
            }),
            (learner_id, item_id, kind) => Err(ValidationError::from_outcomes(
                Self::ENTITY,
                [learner_id.err(), item_id.err(), kind.err()],
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{PrimitiveType, ViolationKind};
    use serde_json::json;

    fn interaction(learner_id: i64, item_id: i64, kind: &str) -> InteractionLogCreate {
        InteractionLogCreate::from_json(
            &json!({ "learner_id": learner_id, "item_id": item_id, "kind": kind }),
        )
        .unwrap()
    }

    #[test]
    fn kind_empty_string_is_accepted() {
        assert_eq!(interaction(1, 1, "").kind, "");
    }

    #[test]
    fn zero_ids_are_accepted() {
        assert_eq!(interaction(0, 1, "attempt").learner_id, 0);
        assert_eq!(interaction(1, 0, "attempt").item_id, 0);
    }

    #[test]
    fn negative_ids_are_accepted() {
        assert_eq!(interaction(-1, 1, "attempt").learner_id, -1);
        assert_eq!(interaction(1, -1, "attempt").item_id, -1);
    }

    #[test]
    fn all_degenerate_values_together_are_accepted() {
        assert_eq!(
            interaction(-1, -1, ""),
            InteractionLogCreate::new(-1, -1, "")
        );
    }

    #[test]
    fn kind_with_spaces_and_markup_round_trips() {
        assert_eq!(interaction(1, 1, "view attempt").kind, "view attempt");
        assert_eq!(interaction(1, 1, "attempt<1>").kind, "attempt<1>");
    }

    #[test]
    fn large_ids_are_accepted() {
        let max = i64::from(i32::MAX);
        assert_eq!(interaction(max, 1, "attempt").learner_id, max);
        assert_eq!(interaction(1, max, "attempt").item_id, max);
    }

    #[test]
    fn non_numeric_learner_id_is_rejected() {
        let err = InteractionLogCreate::from_json(
            &json!({ "learner_id": "abc", "item_id": 1, "kind": "view" }),
        )
        .unwrap_err();
        assert_eq!(err.entity(), "InteractionLogCreate");
        assert_eq!(
            err.kind_of("learner_id"),
            Some(ViolationKind::TypeCoercionFailure {
                expected: PrimitiveType::Integer
            })
        );
    }

    #[test]
    fn missing_item_id_and_kind_are_both_reported() {
        let err = InteractionLogCreate::from_json(&json!({ "learner_id": 1 })).unwrap_err();
        assert_eq!(err.kind_of("item_id"), Some(ViolationKind::MissingRequiredField));
        assert_eq!(err.kind_of("kind"), Some(ViolationKind::MissingRequiredField));
        assert_eq!(err.violations().len(), 2);
    }

    #[test]
    fn null_required_fields_are_type_failures_not_missing() {
        let err = InteractionLogCreate::from_json(
            &json!({ "learner_id": null, "item_id": null, "kind": null }),
        )
        .unwrap_err();
        let integer_failure = Some(ViolationKind::TypeCoercionFailure {
            expected: PrimitiveType::Integer,
        });
        assert_eq!(err.kind_of("learner_id"), integer_failure);
        assert_eq!(err.kind_of("item_id"), integer_failure);
        assert_eq!(
            err.kind_of("kind"),
            Some(ViolationKind::TypeCoercionFailure {
                expected: PrimitiveType::String
            })
        );
    }
}
