//! Physical and virtual places, plus the ways to reach them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::enums::{AddressType, LocationType};
use super::validate::{generate_id, optional_reference, required};
use crate::error::ValidationError;
use crate::time::ical_now;

/// A place where services are delivered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub id: String,
    pub location_type: LocationType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organization_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alternate_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transportation: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_identifier: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_identifier_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default)]
pub struct LocationOptions {
    pub organization_id: Option<String>,
    pub url: Option<String>,
    pub name: Option<String>,
    pub alternate_name: Option<String>,
    pub description: Option<String>,
    pub transportation: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub external_identifier: Option<String>,
    pub external_identifier_type: Option<String>,
}

impl Location {
    pub fn new(location_type: LocationType, opts: LocationOptions) -> Result<Self, ValidationError> {
        Ok(Self {
            location_type,
            organization_id: optional_reference("organization_id", opts.organization_id)?,
            url: opts.url,
            name: opts.name,
            alternate_name: opts.alternate_name,
            description: opts.description,
            transportation: opts.transportation,
            latitude: opts.latitude,
            longitude: opts.longitude,
            external_identifier: opts.external_identifier,
            external_identifier_type: opts.external_identifier_type,
            id: generate_id()?,
            created_at: Some(ical_now()),
            updated_at: None,
        })
    }
}

/// A postal or physical address of a location.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Address {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attention: Option<String>,
    pub address_1: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address_2: Option<String>,
    pub city: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    pub state_province: String,
    pub postal_code: String,
    /// ISO 3166-1 alpha-2.
    pub country: String,
    pub address_type: AddressType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default)]
pub struct AddressOptions {
    pub location_id: Option<String>,
    pub attention: Option<String>,
    pub address_2: Option<String>,
    pub region: Option<String>,
}

impl Address {
    /// Creates an address.
    ///
    /// # Errors
    ///
    /// - [`ValidationError::MissingField`] for any blank required line
    /// - [`ValidationError::InvalidCountryCode`] unless `country` is exactly two
    ///   ASCII letters; digits and punctuation are rejected (`US` passes, `1A`
    ///   and `U.` do not)
    /// - [`ValidationError::InvalidReference`] for a malformed `location_id`
    pub fn new(
        address_1: impl Into<String>,
        city: impl Into<String>,
        state_province: impl Into<String>,
        postal_code: impl Into<String>,
        country: impl Into<String>,
        address_type: AddressType,
        opts: AddressOptions,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            address_1: required("address_1", address_1.into())?,
            city: required("city", city.into())?,
            state_province: required("state_province", state_province.into())?,
            postal_code: required("postal_code", postal_code.into())?,
            country: country_code(country.into())?,
            address_type,
            location_id: optional_reference("location_id", opts.location_id)?,
            attention: opts.attention,
            address_2: opts.address_2,
            region: opts.region,
            id: generate_id()?,
            created_at: Some(ical_now()),
            updated_at: None,
        })
    }
}

fn country_code(value: String) -> Result<String, ValidationError> {
    if value.len() == 2 && value.bytes().all(|b| b.is_ascii_alphabetic()) {
        Ok(value)
    } else {
        Err(ValidationError::InvalidCountryCode(value))
    }
}

/// Accessibility provisions at a location.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Accessibility {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default)]
pub struct AccessibilityOptions {
    pub location_id: Option<String>,
    pub description: Option<String>,
    pub details: Option<String>,
    pub url: Option<String>,
}

impl Accessibility {
    pub fn new(opts: AccessibilityOptions) -> Result<Self, ValidationError> {
        Ok(Self {
            location_id: optional_reference("location_id", opts.location_id)?,
            description: opts.description,
            details: opts.details,
            url: opts.url,
            id: generate_id()?,
            created_at: Some(ical_now()),
            updated_at: None,
        })
    }
}

/// A language spoken at a service, location or phone line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Language {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default)]
pub struct LanguageOptions {
    pub service_id: Option<String>,
    pub location_id: Option<String>,
    pub phone_id: Option<String>,
    pub name: Option<String>,
    pub code: Option<String>,
    pub note: Option<String>,
}

impl Language {
    pub fn new(opts: LanguageOptions) -> Result<Self, ValidationError> {
        Ok(Self {
            service_id: optional_reference("service_id", opts.service_id)?,
            location_id: optional_reference("location_id", opts.location_id)?,
            phone_id: optional_reference("phone_id", opts.phone_id)?,
            name: opts.name,
            code: opts.code,
            note: opts.note,
            id: generate_id()?,
            created_at: Some(ical_now()),
            updated_at: None,
        })
    }
}

/// A phone number, attached to whichever records it serves.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Phone {
    pub id: String,
    pub number: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organization_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_at_location_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<f64>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub phone_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default)]
pub struct PhoneOptions {
    pub location_id: Option<String>,
    pub service_id: Option<String>,
    pub organization_id: Option<String>,
    pub contact_id: Option<String>,
    pub service_at_location_id: Option<String>,
    pub extension: Option<f64>,
    pub phone_type: Option<String>,
    pub description: Option<String>,
}

impl Phone {
    pub fn new(number: impl Into<String>, opts: PhoneOptions) -> Result<Self, ValidationError> {
        Ok(Self {
            number: required("number", number.into())?,
            location_id: optional_reference("location_id", opts.location_id)?,
            service_id: optional_reference("service_id", opts.service_id)?,
            organization_id: optional_reference("organization_id", opts.organization_id)?,
            contact_id: optional_reference("contact_id", opts.contact_id)?,
            service_at_location_id: optional_reference(
                "service_at_location_id",
                opts.service_at_location_id,
            )?,
            extension: opts.extension,
            phone_type: opts.phone_type,
            description: opts.description,
            id: generate_id()?,
            created_at: Some(ical_now()),
            updated_at: None,
        })
    }
}

/// A named person or role to contact.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contact {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organization_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_at_location_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default)]
pub struct ContactOptions {
    pub organization_id: Option<String>,
    pub service_id: Option<String>,
    pub service_at_location_id: Option<String>,
    pub location_id: Option<String>,
    pub name: Option<String>,
    pub title: Option<String>,
    pub department: Option<String>,
    pub email: Option<String>,
}

impl Contact {
    pub fn new(opts: ContactOptions) -> Result<Self, ValidationError> {
        Ok(Self {
            organization_id: optional_reference("organization_id", opts.organization_id)?,
            service_id: optional_reference("service_id", opts.service_id)?,
            service_at_location_id: optional_reference(
                "service_at_location_id",
                opts.service_at_location_id,
            )?,
            location_id: optional_reference("location_id", opts.location_id)?,
            name: opts.name,
            title: opts.title,
            department: opts.department,
            email: opts.email,
            id: generate_id()?,
            created_at: Some(ical_now()),
            updated_at: None,
        })
    }
}
