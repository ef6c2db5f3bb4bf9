//! Organizations and the records that hang directly off them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::validate::{generate_id, optional_reference, reference, required};
use crate::error::ValidationError;
use crate::time::ical_now;

/// An organization providing services.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Organization {
    pub id: String,
    pub name: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_organization_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alternate_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub legal_status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uri: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year_incorporated: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Optional fields accepted by [`Organization::new`].
#[derive(Debug, Clone, Default)]
pub struct OrganizationOptions {
    pub parent_organization_id: Option<String>,
    pub alternate_name: Option<String>,
    pub email: Option<String>,
    pub legal_status: Option<String>,
    pub logo: Option<String>,
    pub tax_id: Option<String>,
    pub tax_status: Option<String>,
    pub uri: Option<String>,
    pub website: Option<String>,
    pub year_incorporated: Option<i32>,
}

impl Organization {
    /// Creates an organization with a fresh id.
    ///
    /// # Errors
    ///
    /// - [`ValidationError::MissingField`] for a blank `name` or `description`
    /// - [`ValidationError::InvalidReference`] if `parent_organization_id` is not a UUIDv4
    ///
    /// ```rust
    /// use hsds_types::{Organization, OrganizationOptions};
    ///
    /// let org = Organization::new(
    ///     "Eastside Food Bank",
    ///     "Weekly grocery distribution",
    ///     OrganizationOptions {
    ///         website: Some("https://eastside.example.org".into()),
    ///         ..Default::default()
    ///     },
    /// )
    /// .unwrap();
    /// assert!(org.created_at.is_some());
    /// ```
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        opts: OrganizationOptions,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            name: required("name", name.into())?,
            description: required("description", description.into())?,
            parent_organization_id: optional_reference(
                "parent_organization_id",
                opts.parent_organization_id,
            )?,
            alternate_name: opts.alternate_name,
            email: opts.email,
            legal_status: opts.legal_status,
            logo: opts.logo,
            tax_id: opts.tax_id,
            tax_status: opts.tax_status,
            uri: opts.uri,
            website: opts.website,
            year_incorporated: opts.year_incorporated,
            id: generate_id()?,
            created_at: Some(ical_now()),
            updated_at: None,
        })
    }
}

/// An external identifier (charity number, registry id) of an organization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrganizationIdentifier {
    pub id: String,
    pub organization_id: String,
    pub identifier_type: String,
    pub identifier: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identifier_scheme: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default)]
pub struct OrganizationIdentifierOptions {
    pub identifier_scheme: Option<String>,
}

impl OrganizationIdentifier {
    pub fn new(
        organization_id: impl Into<String>,
        identifier_type: impl Into<String>,
        identifier: impl Into<String>,
        opts: OrganizationIdentifierOptions,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            organization_id: reference("organization_id", organization_id.into())?,
            identifier_type: required("identifier_type", identifier_type.into())?,
            identifier: required("identifier", identifier.into())?,
            identifier_scheme: opts.identifier_scheme,
            id: generate_id()?,
            created_at: Some(ical_now()),
            updated_at: None,
        })
    }
}

/// A link to a web resource of an organization or service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Url {
    pub id: String,
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organization_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default)]
pub struct UrlOptions {
    pub organization_id: Option<String>,
    pub service_id: Option<String>,
    pub label: Option<String>,
}

impl Url {
    pub fn new(url: impl Into<String>, opts: UrlOptions) -> Result<Self, ValidationError> {
        Ok(Self {
            url: required("url", url.into())?,
            organization_id: optional_reference("organization_id", opts.organization_id)?,
            service_id: optional_reference("service_id", opts.service_id)?,
            label: opts.label,
            id: generate_id()?,
            created_at: Some(ical_now()),
            updated_at: None,
        })
    }
}

/// A source of funding for an organization or service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Funding {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organization_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default)]
pub struct FundingOptions {
    pub organization_id: Option<String>,
    pub service_id: Option<String>,
    pub source: Option<String>,
}

impl Funding {
    pub fn new(opts: FundingOptions) -> Result<Self, ValidationError> {
        Ok(Self {
            organization_id: optional_reference("organization_id", opts.organization_id)?,
            service_id: optional_reference("service_id", opts.service_id)?,
            source: opts.source,
            id: generate_id()?,
            created_at: Some(ical_now()),
            updated_at: None,
        })
    }
}

/// A unit of measure for service capacity (beds, meals, appointments).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Unit {
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scheme: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identifier: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uri: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default)]
pub struct UnitOptions {
    pub scheme: Option<String>,
    pub identifier: Option<String>,
    pub uri: Option<String>,
}

impl Unit {
    pub fn new(name: impl Into<String>, opts: UnitOptions) -> Result<Self, ValidationError> {
        Ok(Self {
            name: required("name", name.into())?,
            scheme: opts.scheme,
            identifier: opts.identifier,
            uri: opts.uri,
            id: generate_id()?,
            created_at: Some(ical_now()),
            updated_at: None,
        })
    }
}

/// A group of related services run by one organization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Program {
    pub id: String,
    pub organization_id: String,
    pub name: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alternate_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default)]
pub struct ProgramOptions {
    pub alternate_name: Option<String>,
}

impl Program {
    pub fn new(
        organization_id: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
        opts: ProgramOptions,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            organization_id: reference("organization_id", organization_id.into())?,
            name: required("name", name.into())?,
            description: required("description", description.into())?,
            alternate_name: opts.alternate_name,
            id: generate_id()?,
            created_at: Some(ical_now()),
            updated_at: None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ORG: &str = "11111111-1111-4111-8111-111111111111";

    #[test]
    fn organization_rejects_bad_parent() {
        let result = Organization::new(
            "Shelter",
            "Overnight beds",
            OrganizationOptions {
                parent_organization_id: Some("parent-1".into()),
                ..Default::default()
            },
        );
        assert_eq!(
            result,
            Err(ValidationError::InvalidReference {
                field: "parent_organization_id"
            })
        );
    }

    #[test]
    fn organization_requires_name() {
        let result = Organization::new("", "desc", OrganizationOptions::default());
        assert_eq!(result, Err(ValidationError::MissingField("name")));
    }

    #[test]
    fn program_requires_uuid_organization() {
        let result = Program::new("org-1", "Meals", "Hot meals", ProgramOptions::default());
        assert!(matches!(
            result,
            Err(ValidationError::InvalidReference {
                field: "organization_id"
            })
        ));

        let program = Program::new(ORG, "Meals", "Hot meals", ProgramOptions::default())
            .expect("valid program");
        assert_eq!(program.organization_id, ORG);
        assert_ne!(program.id, ORG);
    }

    #[test]
    fn optional_fields_omitted_from_json() {
        let unit = Unit::new("beds", UnitOptions::default()).expect("valid unit");
        let value = serde_json::to_value(&unit).expect("serializes");
        assert!(value.get("scheme").is_none());
        assert!(value.get("updated_at").is_none());
        assert_eq!(value["name"], "beds");
    }

    #[test]
    fn url_checks_both_references() {
        let result = Url::new(
            "https://example.org",
            UrlOptions {
                organization_id: Some(ORG.into()),
                service_id: Some("svc".into()),
                ..Default::default()
            },
        );
        assert_eq!(
            result,
            Err(ValidationError::InvalidReference { field: "service_id" })
        );
    }
}
