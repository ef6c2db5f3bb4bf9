//! Field checks shared by the record constructors.

use crate::error::ValidationError;
use crate::ids::{new_uuid_v4, validate_uuid_v4};

/// Rejects empty or whitespace-only values for required fields.
pub(crate) fn required(field: &'static str, value: String) -> Result<String, ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::MissingField(field));
    }
    Ok(value)
}

/// Requires `value` to be a UUIDv4 foreign key.
pub(crate) fn reference(field: &'static str, value: String) -> Result<String, ValidationError> {
    if !validate_uuid_v4(&value) {
        return Err(ValidationError::InvalidReference { field });
    }
    Ok(value)
}

/// Like [`reference`], for optional foreign keys; `None` passes.
pub(crate) fn optional_reference(
    field: &'static str,
    value: Option<String>,
) -> Result<Option<String>, ValidationError> {
    value.map(|v| reference(field, v)).transpose()
}

/// Generates the identifier of a new record.
pub(crate) fn generate_id() -> Result<String, ValidationError> {
    let id = new_uuid_v4();
    if !validate_uuid_v4(&id) {
        return Err(ValidationError::IdGeneration);
    }
    Ok(id)
}

#[cfg(test)]
mod tests {
    use super::*;

    const ORG: &str = "11111111-1111-4111-8111-111111111111";

    #[test]
    fn required_rejects_blank() {
        assert_eq!(
            required("name", "  \t".into()),
            Err(ValidationError::MissingField("name"))
        );
        assert_eq!(required("name", " Food Bank ".into()).as_deref(), Ok(" Food Bank "));
    }

    #[test]
    fn optional_reference_passes_none() {
        assert_eq!(optional_reference("service_id", None), Ok(None));
        assert_eq!(
            optional_reference("service_id", Some(ORG.into())),
            Ok(Some(ORG.to_string()))
        );
        assert_eq!(
            optional_reference("service_id", Some("svc-1".into())),
            Err(ValidationError::InvalidReference { field: "service_id" })
        );
    }

    #[test]
    fn generated_ids_validate() {
        let id = generate_id().expect("uuid generation");
        assert!(validate_uuid_v4(&id));
    }
}
