//! Classification vocabularies and the attributes that apply them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::validate::{generate_id, optional_reference, reference, required};
use crate::error::ValidationError;
use crate::time::ical_now;

/// A published classification scheme.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Taxonomy {
    pub id: String,
    pub name: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uri: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default)]
pub struct TaxonomyOptions {
    pub uri: Option<String>,
    pub version: Option<String>,
}

impl Taxonomy {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        opts: TaxonomyOptions,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            name: required("name", name.into())?,
            description: required("description", description.into())?,
            uri: opts.uri,
            version: opts.version,
            id: generate_id()?,
            created_at: Some(ical_now()),
            updated_at: None,
        })
    }
}

/// One term of a taxonomy; terms nest through `parent_id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaxonomyTerm {
    pub id: String,
    pub name: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub taxonomy_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    /// Free-text name of the taxonomy, for terms without a `taxonomy_id`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub taxonomy: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub term_uri: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default)]
pub struct TaxonomyTermOptions {
    pub taxonomy_id: Option<String>,
    pub parent_id: Option<String>,
    pub code: Option<String>,
    pub taxonomy: Option<String>,
    pub language: Option<String>,
    pub term_uri: Option<String>,
}

impl TaxonomyTerm {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        opts: TaxonomyTermOptions,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            name: required("name", name.into())?,
            description: required("description", description.into())?,
            taxonomy_id: optional_reference("taxonomy_id", opts.taxonomy_id)?,
            parent_id: optional_reference("parent_id", opts.parent_id)?,
            code: opts.code,
            taxonomy: opts.taxonomy,
            language: opts.language,
            term_uri: opts.term_uri,
            id: generate_id()?,
            created_at: Some(ical_now()),
            updated_at: None,
        })
    }
}

/// Applies a taxonomy term to any other record.
///
/// `link_id` names the tagged record and `link_entity` its table. The link
/// target is not checked for format since it may point at any record kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Attribute {
    pub id: String,
    pub taxonomy_term_id: String,
    pub link_id: String,
    pub link_entity: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default)]
pub struct AttributeOptions {
    pub link_type: Option<String>,
    pub value: Option<String>,
    pub label: Option<String>,
}

impl Attribute {
    pub fn new(
        taxonomy_term_id: impl Into<String>,
        link_id: impl Into<String>,
        link_entity: impl Into<String>,
        opts: AttributeOptions,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            taxonomy_term_id: reference("taxonomy_term_id", taxonomy_term_id.into())?,
            link_id: required("link_id", link_id.into())?,
            link_entity: required("link_entity", link_entity.into())?,
            link_type: opts.link_type,
            value: opts.value,
            label: opts.label,
            id: generate_id()?,
            created_at: Some(ical_now()),
            updated_at: None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TERM: &str = "44444444-4444-4444-8444-444444444444";

    #[test]
    fn term_parent_must_be_uuid() {
        let result = TaxonomyTerm::new(
            "Food",
            "Food assistance",
            TaxonomyTermOptions {
                parent_id: Some("food-root".into()),
                ..Default::default()
            },
        );
        assert_eq!(
            result,
            Err(ValidationError::InvalidReference { field: "parent_id" })
        );
    }

    #[test]
    fn attribute_links_any_record() {
        let attr = Attribute::new(TERM, "svc-legacy-17", "service", AttributeOptions::default())
            .expect("valid attribute");
        assert_eq!(attr.link_id, "svc-legacy-17");
        assert_eq!(attr.taxonomy_term_id, TERM);
    }

    #[test]
    fn attribute_requires_link_entity() {
        let result = Attribute::new(TERM, "svc-1", "", AttributeOptions::default());
        assert_eq!(result, Err(ValidationError::MissingField("link_entity")));
    }

    #[test]
    fn taxonomy_requires_description() {
        let result = Taxonomy::new("Open Eligibility", "", TaxonomyOptions::default());
        assert_eq!(result, Err(ValidationError::MissingField("description")));
    }
}
