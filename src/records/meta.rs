//! Change log entries and dataset-level descriptions.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::validate::{generate_id, required};
use crate::error::ValidationError;
use crate::time::ical_now;

/// One recorded change to a field of some record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Metadata {
    pub id: String,
    pub resource_id: String,
    /// Correlates entries written by the same import or API call.
    pub call_id: String,
    pub resource_type: String,
    pub last_action_date: DateTime<Utc>,
    pub last_action_type: String,
    pub field_name: String,
    pub previous_value: String,
    pub replacement_value: String,
    pub updated_by: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Metadata {
    /// Records a change, stamping `last_action_date` with the creation instant.
    ///
    /// `previous_value` and `replacement_value` may be empty, since a change
    /// can set or clear a field.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        resource_id: impl Into<String>,
        call_id: impl Into<String>,
        resource_type: impl Into<String>,
        last_action_type: impl Into<String>,
        field_name: impl Into<String>,
        previous_value: impl Into<String>,
        replacement_value: impl Into<String>,
        updated_by: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let now = ical_now();
        Ok(Self {
            resource_id: required("resource_id", resource_id.into())?,
            call_id: call_id.into(),
            resource_type: required("resource_type", resource_type.into())?,
            last_action_type: required("last_action_type", last_action_type.into())?,
            field_name: required("field_name", field_name.into())?,
            previous_value: previous_value.into(),
            replacement_value: replacement_value.into(),
            updated_by: required("updated_by", updated_by.into())?,
            last_action_date: now,
            id: generate_id()?,
            created_at: Some(now),
            updated_at: None,
        })
    }
}

/// Describes a table of the dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetaTableDescription {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub character_set: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default)]
pub struct MetaTableDescriptionOptions {
    pub name: Option<String>,
    pub language: Option<String>,
    pub character_set: Option<String>,
}

impl MetaTableDescription {
    pub fn new(opts: MetaTableDescriptionOptions) -> Result<Self, ValidationError> {
        Ok(Self {
            name: opts.name,
            language: opts.language,
            character_set: opts.character_set,
            id: generate_id()?,
            created_at: Some(ical_now()),
            updated_at: None,
        })
    }
}
