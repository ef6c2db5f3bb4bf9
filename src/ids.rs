//! UUIDv4 identifiers for records and their foreign keys.

use uuid::{Uuid, Version};

/// Generates a fresh random UUIDv4 in its hyphenated lowercase form.
pub fn new_uuid_v4() -> String {
    Uuid::new_v4().to_string()
}

/// Returns `true` if `value` parses as a UUID and its version is 4.
///
/// ```rust
/// use hsds_types::ids::validate_uuid_v4;
///
/// assert!(validate_uuid_v4("11111111-1111-4111-8111-111111111111"));
/// assert!(!validate_uuid_v4("11111111-1111-1111-8111-111111111111"));
/// assert!(!validate_uuid_v4("org-1"));
/// ```
pub fn validate_uuid_v4(value: &str) -> bool {
    Uuid::parse_str(value)
        .map(|id| id.get_version() == Some(Version::Random))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_ids_are_v4() {
        let id = new_uuid_v4();
        assert_eq!(id.len(), 36);
        assert!(validate_uuid_v4(&id));
    }

    #[test]
    fn generated_ids_are_unique() {
        assert_ne!(new_uuid_v4(), new_uuid_v4());
    }

    #[test]
    fn other_versions_rejected() {
        // v1 and v5 shaped identifiers
        assert!(!validate_uuid_v4("6ba7b810-9dad-11d1-80b4-00c04fd430c8"));
        assert!(!validate_uuid_v4("886313e1-3b8a-5372-9b90-0c9aee199e5d"));
        assert!(!validate_uuid_v4(""));
        assert!(!validate_uuid_v4("not-a-uuid"));
    }

    #[test]
    fn uppercase_and_simple_forms_accepted() {
        assert!(validate_uuid_v4("11111111-1111-4111-8111-111111111111".to_uppercase().as_str()));
        assert!(validate_uuid_v4("11111111111141118111111111111111"));
    }
}
