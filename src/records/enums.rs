//! Enumerated vocabularies of the dataset, with their wire spellings.

use serde::{Deserialize, Serialize};

/// Kind of postal address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AddressType {
    Physical,
    Postal,
    Virtual,
}

/// Kind of location.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LocationType {
    Physical,
    Postal,
    Virtual,
}

/// RFC 5545 `FREQ` values supported by schedules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ScheduleFreq {
    Weekly,
    Monthly,
}

/// RFC 5545 `WKST` values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ScheduleWkst {
    Mo,
    Tu,
    We,
    Th,
    Fr,
    Sa,
    Su,
}

/// Operational status of a service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ServiceStatus {
    #[serde(rename = "active")]
    Active,
    #[serde(rename = "inactive")]
    Inactive,
    #[serde(rename = "defunct")]
    Defunct,
    #[serde(rename = "temporarily closed")]
    TemporarilyClosed,
}

/// Encoding of a service area's `extent`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExtentType {
    GeoJson,
    TopoJson,
    Kml,
    Text,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn wire_spellings() {
        assert_eq!(
            serde_json::to_value(ServiceStatus::TemporarilyClosed).ok(),
            Some(json!("temporarily closed"))
        );
        assert_eq!(serde_json::to_value(ScheduleWkst::Mo).ok(), Some(json!("MO")));
        assert_eq!(serde_json::to_value(ScheduleFreq::Monthly).ok(), Some(json!("MONTHLY")));
        assert_eq!(serde_json::to_value(ExtentType::GeoJson).ok(), Some(json!("geojson")));
        assert_eq!(serde_json::to_value(AddressType::Postal).ok(), Some(json!("postal")));
    }

    #[test]
    fn unknown_values_rejected() {
        assert!(serde_json::from_value::<LocationType>(json!("orbital")).is_err());
        assert!(serde_json::from_value::<ServiceStatus>(json!("Active")).is_err());
    }
}
