//! Opening hours expressed with RFC 5545 recurrence fields.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::enums::{ScheduleFreq, ScheduleWkst};
use super::validate::{generate_id, optional_reference};
use crate::error::ValidationError;
use crate::time::ical_now;

/// When a service or location is open.
///
/// `opens_at` and `closes_at` carry a time of day. Sources usually send them
/// as `HH:MM:SS`, which decodes to that time on `0000-01-01` UTC.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Schedule {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_at_location_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub valid_from: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub valid_to: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dtstart: Option<DateTime<Utc>>,
    /// Offset from UTC in hours.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timezone: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub until: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wkst: Option<ScheduleWkst>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub freq: Option<ScheduleFreq>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interval: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub byday: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub byweekno: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bymonthday: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub byyearday: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opens_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub closes_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schedule_link: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attending_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default)]
pub struct ScheduleOptions {
    pub service_id: Option<String>,
    pub location_id: Option<String>,
    pub service_at_location_id: Option<String>,
    pub valid_from: Option<DateTime<Utc>>,
    pub valid_to: Option<DateTime<Utc>>,
    pub dtstart: Option<DateTime<Utc>>,
    pub timezone: Option<f64>,
    pub until: Option<DateTime<Utc>>,
    pub count: Option<i32>,
    pub wkst: Option<ScheduleWkst>,
    pub freq: Option<ScheduleFreq>,
    pub interval: Option<i32>,
    pub byday: Option<String>,
    pub byweekno: Option<String>,
    pub bymonthday: Option<String>,
    pub byyearday: Option<String>,
    pub description: Option<String>,
    pub opens_at: Option<DateTime<Utc>>,
    pub closes_at: Option<DateTime<Utc>>,
    pub schedule_link: Option<String>,
    pub attending_type: Option<String>,
    pub notes: Option<String>,
}

impl Schedule {
    /// Creates a schedule; every supplied owner reference must be a UUIDv4.
    ///
    /// ```rust
    /// use hsds_types::{Schedule, ScheduleFreq, ScheduleOptions, ScheduleWkst};
    ///
    /// let schedule = Schedule::new(ScheduleOptions {
    ///     freq: Some(ScheduleFreq::Weekly),
    ///     wkst: Some(ScheduleWkst::Mo),
    ///     byday: Some("MO,WE,FR".into()),
    ///     ..Default::default()
    /// })
    /// .unwrap();
    /// assert_eq!(schedule.byday.as_deref(), Some("MO,WE,FR"));
    /// ```
    pub fn new(opts: ScheduleOptions) -> Result<Self, ValidationError> {
        Ok(Self {
            service_id: optional_reference("service_id", opts.service_id)?,
            location_id: optional_reference("location_id", opts.location_id)?,
            service_at_location_id: optional_reference(
                "service_at_location_id",
                opts.service_at_location_id,
            )?,
            valid_from: opts.valid_from,
            valid_to: opts.valid_to,
            dtstart: opts.dtstart,
            timezone: opts.timezone,
            until: opts.until,
            count: opts.count,
            wkst: opts.wkst,
            freq: opts.freq,
            interval: opts.interval,
            byday: opts.byday,
            byweekno: opts.byweekno,
            bymonthday: opts.bymonthday,
            byyearday: opts.byyearday,
            description: opts.description,
            opens_at: opts.opens_at,
            closes_at: opts.closes_at,
            schedule_link: opts.schedule_link,
            attending_type: opts.attending_type,
            notes: opts.notes,
            id: generate_id()?,
            created_at: Some(ical_now()),
            updated_at: None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::resolve;

    #[test]
    fn rejects_bad_service_at_location() {
        let result = Schedule::new(ScheduleOptions {
            service_at_location_id: Some("sal-1".into()),
            ..Default::default()
        });
        assert_eq!(
            result,
            Err(ValidationError::InvalidReference {
                field: "service_at_location_id"
            })
        );
    }

    #[test]
    fn enums_serialize_uppercase() {
        let schedule = Schedule::new(ScheduleOptions {
            freq: Some(ScheduleFreq::Monthly),
            wkst: Some(ScheduleWkst::Su),
            opens_at: resolve("09:30:00"),
            ..Default::default()
        })
        .expect("valid schedule");
        let value = serde_json::to_value(&schedule).expect("serializes");
        assert_eq!(value["freq"], "MONTHLY");
        assert_eq!(value["wkst"], "SU");
        assert_eq!(value["opens_at"], "0000-01-01T09:30:00Z");
    }
}
