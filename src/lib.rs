//! Typed records for the Human Services Data Specification (HSDS), with
//! tolerant and deduplicating JSON decoding.
//!
//! Exports from databases and APIs rarely agree on how timestamps look. One
//! page says `2024-03-28T15:00:00Z`, the next `2024-03-28 15:00:00.000000+00`,
//! and a schedule table says `09:00:00`. This crate accepts all of them for
//! fields it knows to be timestamps, converts the records into strongly typed
//! structs, and merges paginated responses into one set keyed by record id.
//!
//! # Modules
//!
//! | Module      | Purpose                                                         |
//! |-------------|-----------------------------------------------------------------|
//! | [`time`]    | Ordered candidate layouts, resolution to UTC, iCalendar stamps  |
//! | decode      | [`Decoder`], [`decode_one`], [`decode_merged`], [`Identified`]  |
//! | config      | [`DecodeConfig`] and YAML loading                               |
//! | records     | All dataset record types and their validating constructors     |
//! | [`ids`]     | UUIDv4 generation and validation                                |
//!
//! # Quick Start
//!
//! ```rust
//! use hsds_types::{decode_merged, Service, ServiceStatus};
//!
//! let page_one = br#"[{
//!     "id": "11111111-1111-4111-8111-111111111111",
//!     "organization_id": "22222222-2222-4222-8222-222222222222",
//!     "name": "Pantry",
//!     "status": "active",
//!     "created_at": "2024-03-28T15:00:00Z"
//! }]"#;
//! let page_two = br#"[{
//!     "id": "11111111-1111-4111-8111-111111111111",
//!     "organization_id": "22222222-2222-4222-8222-222222222222",
//!     "name": "Pantry",
//!     "status": "temporarily closed",
//!     "created_at": "2024-03-28 15:00:00.000000+00"
//! }]"#;
//!
//! let services: Vec<Service> = decode_merged(&[&page_one[..], &page_two[..]])?;
//! assert_eq!(services.len(), 1);
//! assert_eq!(services[0].status, ServiceStatus::TemporarilyClosed);
//! # Ok::<(), hsds_types::DecodeError>(())
//! ```
//!
//! # Logging
//!
//! The crate emits [`tracing`] events (`decode_success`, `decode_failure`,
//! `decode_merged_success`, `buffer_skipped`) and installs no subscriber.

pub mod ids;
pub mod time;

mod config;
mod decode;
mod error;
mod records;

pub use config::{ConfigError, ConfigLoadError, DecodeConfig, MergePolicy};
pub use decode::{Decoder, Identified, decode_merged, decode_one, merge_by_identity};
pub use error::{DecodeError, DecodeStage, TimeParseError, ValidationError};
pub use records::*;
