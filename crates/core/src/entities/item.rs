//! Item create/update records.

use crate::schema::{self, FromPayload, Payload, ValidationError};
use crate::types::DbId;

/// Request record for creating an item.
///
/// `parent_id` is not checked against existing items; the store rejects
/// dangling references.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemCreate {
    pub title: String,
    pub parent_id: Option<DbId>,
    /// Defaults to the empty string when omitted.
    pub description: String,
}

impl ItemCreate {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            parent_id: None,
            description: String::new(),
        }
    }

    pub fn with_parent_id(mut self, parent_id: DbId) -> Self {
        self.parent_id = Some(parent_id);
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}

impl FromPayload for ItemCreate {
    const ENTITY: &'static str = "ItemCreate";

    fn from_payload(payload: &Payload) -> Result<Self, ValidationError> {
        let title = schema::required_str(payload, "title");
        let parent_id = schema::optional_int(payload, "parent_id");
        let description = schema::str_or_default(payload, "description", "");

        match (title, parent_id, description) {
            (Ok(title), Ok(parent_id), Ok(description)) => Ok(Self {
                title,
                parent_id,
                description,
            }),
            (title, parent_id, description) => Err(ValidationError::from_outcomes(
                Self::ENTITY,
                [title.err(), parent_id.err(), description.err()],
            )),
        }
    }
}

/// Request record for updating an item. Absent fields are left unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemUpdate {
    pub title: Option<String>,
    pub description: Option<String>,
}

impl ItemUpdate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// True when the update would not change any column.
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.description.is_none()
    }
}

impl FromPayload for ItemUpdate {
    const ENTITY: &'static str = "ItemUpdate";

    fn from_payload(payload: &Payload) -> Result<Self, ValidationError> {
        let title = schema::optional_str(payload, "title");
        let description = schema::optional_str(payload, "description");

        match (title, description) {
            (Ok(title), Ok(description)) => Ok(Self { title, description }),
            (title, description) => Err(ValidationError::from_outcomes(
                Self::ENTITY,
                [title.err(), description.err()],
            )),
        }
    }
}
