use hsds_types::ids::validate_uuid_v4;
use hsds_types::{
    Address, AddressOptions, AddressType, Attribute, AttributeOptions, CostOption,
    CostOptionOptions, Language, LanguageOptions, Location, LocationOptions, LocationType,
    Metadata, Organization, OrganizationIdentifier, OrganizationOptions, Phone, PhoneOptions,
    Program, ProgramOptions, Service, ServiceAtLocation, ServiceCapacity, ServiceOptions,
    ServiceStatus, Taxonomy, TaxonomyOptions, TaxonomyTerm, TaxonomyTermOptions, Unit,
    UnitOptions, ValidationError, decode_one,
};

/// Builds a small connected graph of records the way an importer would.
#[test]
fn constructed_graph_references_resolve() {
    let org = Organization::new("Eastside Mutual Aid", "Neighborhood support", OrganizationOptions::default())
        .expect("organization");
    let program = Program::new(&org.id, "Food", "Food programs", ProgramOptions::default())
        .expect("program");
    let service = Service::new(
        &org.id,
        "Pantry",
        ServiceStatus::Active,
        ServiceOptions {
            program_id: Some(program.id.clone()),
            ..Default::default()
        },
    )
    .expect("service");
    let location = Location::new(
        LocationType::Physical,
        LocationOptions {
            organization_id: Some(org.id.clone()),
            latitude: Some(47.61),
            longitude: Some(-122.33),
            ..Default::default()
        },
    )
    .expect("location");
    let link = ServiceAtLocation::new(&service.id, &location.id, Default::default())
        .expect("service at location");
    let unit = Unit::new("bags", UnitOptions::default()).expect("unit");
    let capacity = ServiceCapacity::new(&service.id, &unit.id, 40.0, Default::default())
        .expect("capacity");

    for id in [&org.id, &program.id, &service.id, &location.id, &link.id, &capacity.id] {
        assert!(validate_uuid_v4(id), "{id} is not a UUIDv4");
    }
    assert_eq!(link.service_id, service.id);
    assert_eq!(service.program_id.as_deref(), Some(program.id.as_str()));
}

#[test]
fn every_constructor_rejects_malformed_required_reference() {
    let bad = "not-a-uuid";
    let good = "11111111-1111-4111-8111-111111111111";

    let failures: Vec<ValidationError> = vec![
        OrganizationIdentifier::new(bad, "EIN", "12-3456789", Default::default()).unwrap_err(),
        Program::new(bad, "n", "d", ProgramOptions::default()).unwrap_err(),
        Service::new(bad, "n", ServiceStatus::Active, Default::default()).unwrap_err(),
        ServiceAtLocation::new(good, bad, Default::default()).unwrap_err(),
        ServiceCapacity::new(good, bad, 1.0, Default::default()).unwrap_err(),
        CostOption::new(bad, CostOptionOptions::default()).unwrap_err(),
        Attribute::new(bad, "link", "service", AttributeOptions::default()).unwrap_err(),
    ];

    for err in failures {
        assert!(
            matches!(err, ValidationError::InvalidReference { .. }),
            "unexpected {err:?}"
        );
        assert!(err.to_string().ends_with("must be UUIDv4"));
    }
}

#[test]
fn optional_references_checked_only_when_present() {
    assert!(Language::new(LanguageOptions::default()).is_ok());
    assert!(Phone::new("555-0100", PhoneOptions::default()).is_ok());
    assert!(TaxonomyTerm::new("Food", "Food", TaxonomyTermOptions::default()).is_ok());

    let err = Language::new(LanguageOptions {
        phone_id: Some("phone-1".into()),
        ..Default::default()
    })
    .unwrap_err();
    assert_eq!(err.to_string(), "invalid phone_id format: must be UUIDv4");
}

#[test]
fn blank_required_fields_are_reported_by_name() {
    let err = Address::new(
        "12 Main St",
        "Springfield",
        "IL",
        "",
        "US",
        AddressType::Physical,
        AddressOptions::default(),
    )
    .unwrap_err();
    assert_eq!(err.to_string(), "postal_code is required");

    let err = Taxonomy::new("  ", "desc", TaxonomyOptions::default()).unwrap_err();
    assert_eq!(err, ValidationError::MissingField("name"));
}

#[test]
fn created_at_is_whole_seconds() {
    let entry = Metadata::new(
        "11111111-1111-4111-8111-111111111111",
        "call-1",
        "organization",
        "update",
        "name",
        "Old",
        "New",
        "admin",
    )
    .expect("metadata");
    let created = entry.created_at.expect("stamped");
    assert_eq!(created.timestamp_subsec_nanos(), 0);
    assert_eq!(created, entry.last_action_date);
}

#[test]
fn constructed_records_decode_back_unchanged() {
    let org = Organization::new(
        "Eastside Mutual Aid",
        "Neighborhood support",
        OrganizationOptions {
            email: Some("hello@eastside.example.org".into()),
            year_incorporated: Some(2011),
            ..Default::default()
        },
    )
    .expect("organization");

    let raw = serde_json::to_vec(&vec![org.clone()]).expect("serializes");
    let decoded: Vec<Organization> = decode_one(&raw).expect("decodes");
    assert_eq!(decoded, vec![org]);
}
