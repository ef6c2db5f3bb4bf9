//! Services and the records describing where, how much and for whom they run.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::enums::{ExtentType, ServiceStatus};
use super::validate::{generate_id, optional_reference, reference, required};
use crate::error::ValidationError;
use crate::time::ical_now;

/// A service offered by an organization.
///
/// `assured_date` and `last_modified` are timestamp fields; when decoding,
/// any of the accepted layouts is normalized before conversion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Service {
    pub id: String,
    pub organization_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub program_id: Option<String>,
    pub name: String,
    pub status: ServiceStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alternate_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interpretation_services: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub application_process: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fees_description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wait_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fees: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accreditations: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub eligibility_description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minimum_age: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maximum_age: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assured_date: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assurer_email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub licenses: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alert: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_modified: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Optional fields accepted by [`Service::new`].
#[derive(Debug, Clone, Default)]
pub struct ServiceOptions {
    pub program_id: Option<String>,
    pub alternate_name: Option<String>,
    pub description: Option<String>,
    pub url: Option<String>,
    pub email: Option<String>,
    pub interpretation_services: Option<String>,
    pub application_process: Option<String>,
    pub fees_description: Option<String>,
    pub wait_time: Option<String>,
    pub fees: Option<String>,
    pub accreditations: Option<String>,
    pub eligibility_description: Option<String>,
    pub minimum_age: Option<f64>,
    pub maximum_age: Option<f64>,
    pub assured_date: Option<DateTime<Utc>>,
    pub assurer_email: Option<String>,
    pub licenses: Option<String>,
    pub alert: Option<String>,
    pub last_modified: Option<DateTime<Utc>>,
}

impl Service {
    /// Creates a service owned by `organization_id`.
    ///
    /// # Errors
    ///
    /// - [`ValidationError::InvalidReference`] if `organization_id` or a supplied
    ///   `program_id` is not a UUIDv4
    /// - [`ValidationError::MissingField`] for a blank `name`
    pub fn new(
        organization_id: impl Into<String>,
        name: impl Into<String>,
        status: ServiceStatus,
        opts: ServiceOptions,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            organization_id: reference("organization_id", organization_id.into())?,
            program_id: optional_reference("program_id", opts.program_id)?,
            name: required("name", name.into())?,
            status,
            alternate_name: opts.alternate_name,
            description: opts.description,
            url: opts.url,
            email: opts.email,
            interpretation_services: opts.interpretation_services,
            application_process: opts.application_process,
            fees_description: opts.fees_description,
            wait_time: opts.wait_time,
            fees: opts.fees,
            accreditations: opts.accreditations,
            eligibility_description: opts.eligibility_description,
            minimum_age: opts.minimum_age,
            maximum_age: opts.maximum_age,
            assured_date: opts.assured_date,
            assurer_email: opts.assurer_email,
            licenses: opts.licenses,
            alert: opts.alert,
            last_modified: opts.last_modified,
            id: generate_id()?,
            created_at: Some(ical_now()),
            updated_at: None,
        })
    }
}

/// The geographic area a service covers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceArea {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_at_location_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extent: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extent_type: Option<ExtentType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uri: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default)]
pub struct ServiceAreaOptions {
    pub service_id: Option<String>,
    pub service_at_location_id: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub extent: Option<String>,
    pub extent_type: Option<ExtentType>,
    pub uri: Option<String>,
}

impl ServiceArea {
    pub fn new(opts: ServiceAreaOptions) -> Result<Self, ValidationError> {
        Ok(Self {
            service_id: optional_reference("service_id", opts.service_id)?,
            service_at_location_id: optional_reference(
                "service_at_location_id",
                opts.service_at_location_id,
            )?,
            name: opts.name,
            description: opts.description,
            extent: opts.extent,
            extent_type: opts.extent_type,
            uri: opts.uri,
            id: generate_id()?,
            created_at: Some(ical_now()),
            updated_at: None,
        })
    }
}

/// Links a service to a location where it is delivered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceAtLocation {
    pub id: String,
    pub service_id: String,
    pub location_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default)]
pub struct ServiceAtLocationOptions {
    pub description: Option<String>,
}

impl ServiceAtLocation {
    pub fn new(
        service_id: impl Into<String>,
        location_id: impl Into<String>,
        opts: ServiceAtLocationOptions,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            service_id: reference("service_id", service_id.into())?,
            location_id: reference("location_id", location_id.into())?,
            description: opts.description,
            id: generate_id()?,
            created_at: Some(ical_now()),
            updated_at: None,
        })
    }
}

/// Current availability of a service, counted in some [`Unit`](super::Unit).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceCapacity {
    pub id: String,
    pub service_id: String,
    pub unit_id: String,
    pub available: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maximum: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// When `available` was last counted.
    pub updated: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default)]
pub struct ServiceCapacityOptions {
    pub maximum: Option<f64>,
    pub description: Option<String>,
}

impl ServiceCapacity {
    /// Records `available` units for a service; `updated` is stamped with now.
    pub fn new(
        service_id: impl Into<String>,
        unit_id: impl Into<String>,
        available: f64,
        opts: ServiceCapacityOptions,
    ) -> Result<Self, ValidationError> {
        let now = ical_now();
        Ok(Self {
            service_id: reference("service_id", service_id.into())?,
            unit_id: reference("unit_id", unit_id.into())?,
            available,
            maximum: opts.maximum,
            description: opts.description,
            updated: now,
            id: generate_id()?,
            created_at: Some(now),
            updated_at: None,
        })
    }
}

/// A price option for a service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostOption {
    pub id: String,
    pub service_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub valid_from: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub valid_to: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub option: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount_description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default)]
pub struct CostOptionOptions {
    pub valid_from: Option<DateTime<Utc>>,
    pub valid_to: Option<DateTime<Utc>>,
    pub option: Option<String>,
    pub currency: Option<String>,
    pub amount: Option<f64>,
    pub amount_description: Option<String>,
}

impl CostOption {
    pub fn new(
        service_id: impl Into<String>,
        opts: CostOptionOptions,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            service_id: reference("service_id", service_id.into())?,
            valid_from: opts.valid_from,
            valid_to: opts.valid_to,
            option: opts.option,
            currency: opts.currency,
            amount: opts.amount,
            amount_description: opts.amount_description,
            id: generate_id()?,
            created_at: Some(ical_now()),
            updated_at: None,
        })
    }
}

/// A document a client must bring to use a service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequiredDocument {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uri: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default)]
pub struct RequiredDocumentOptions {
    pub service_id: Option<String>,
    pub document: Option<String>,
    pub uri: Option<String>,
}

impl RequiredDocument {
    pub fn new(opts: RequiredDocumentOptions) -> Result<Self, ValidationError> {
        Ok(Self {
            service_id: optional_reference("service_id", opts.service_id)?,
            document: opts.document,
            uri: opts.uri,
            id: generate_id()?,
            created_at: Some(ical_now()),
            updated_at: None,
        })
    }
}
