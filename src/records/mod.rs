//! Typed records of the human-services dataset.
//!
//! Every record has a string `id` and optional `created_at`/`updated_at`
//! stamps. Records built through their `new` constructors get a fresh UUIDv4
//! id, a second-resolution `created_at`, and have had their required fields
//! and foreign keys checked. Records produced by decoding are taken as-is.
//!
//! | Domain       | Records                                                                 |
//! |--------------|-------------------------------------------------------------------------|
//! | organization | `Organization`, `OrganizationIdentifier`, `Program`, `Funding`, `Url`, `Unit` |
//! | service      | `Service`, `ServiceArea`, `ServiceAtLocation`, `ServiceCapacity`, `CostOption`, `RequiredDocument` |
//! | location     | `Location`, `Address`, `Accessibility`, `Language`, `Phone`, `Contact`  |
//! | schedule     | `Schedule`                                                              |
//! | taxonomy     | `Taxonomy`, `TaxonomyTerm`, `Attribute`                                 |
//! | meta         | `Metadata`, `MetaTableDescription`                                      |

mod enums;
mod location;
mod meta;
mod organization;
mod schedule;
mod service;
mod taxonomy;
mod validate;

pub use enums::{AddressType, ExtentType, LocationType, ScheduleFreq, ScheduleWkst, ServiceStatus};
pub use location::{
    Accessibility, AccessibilityOptions, Address, AddressOptions, Contact, ContactOptions,
    Language, LanguageOptions, Location, LocationOptions, Phone, PhoneOptions,
};
pub use meta::{MetaTableDescription, MetaTableDescriptionOptions, Metadata};
pub use organization::{
    Funding, FundingOptions, Organization, OrganizationIdentifier, OrganizationIdentifierOptions,
    OrganizationOptions, Program, ProgramOptions, Unit, UnitOptions, Url, UrlOptions,
};
pub use schedule::{Schedule, ScheduleOptions};
pub use service::{
    CostOption, CostOptionOptions, RequiredDocument, RequiredDocumentOptions, Service,
    ServiceArea, ServiceAreaOptions, ServiceAtLocation, ServiceAtLocationOptions,
    ServiceCapacity, ServiceCapacityOptions, ServiceOptions,
};
pub use taxonomy::{
    Attribute, AttributeOptions, Taxonomy, TaxonomyOptions, TaxonomyTerm, TaxonomyTermOptions,
};

use crate::decode::Identified;

macro_rules! identified_by_id {
    ($($record:ty),+ $(,)?) => {
        $(
            impl Identified for $record {
                fn identity(&self) -> &str {
                    &self.id
                }
            }
        )+
    };
}

identified_by_id!(
    Organization,
    OrganizationIdentifier,
    Program,
    Funding,
    Url,
    Unit,
    Service,
    ServiceArea,
    ServiceAtLocation,
    ServiceCapacity,
    CostOption,
    RequiredDocument,
    Location,
    Address,
    Accessibility,
    Language,
    Phone,
    Contact,
    Schedule,
    Taxonomy,
    TaxonomyTerm,
    Attribute,
    Metadata,
    MetaTableDescription,
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_is_the_id_field() {
        let unit = Unit::new("meals", UnitOptions::default()).expect("valid unit");
        assert_eq!(unit.identity(), unit.id);

        let taxonomy = Taxonomy::new("AIRS", "211 taxonomy", TaxonomyOptions::default())
            .expect("valid taxonomy");
        assert_eq!(taxonomy.identity(), taxonomy.id.as_str());
    }
}
