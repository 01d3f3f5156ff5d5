use buildings_sdk::models::{BuildingFields, BuildingForm};

use super::error::DomainError;
use super::fields::BuildingFormFields;

/// Check that all five writable fields are present and non-empty.
///
/// Fields are checked in form order and the first missing one is reported.
/// Numeric convertibility is left to the repository so that callers can tell
/// an invalid number apart from a duplicate building code.
///
/// # Errors
/// Returns `DomainError::MissingField` for an absent or empty field.
pub fn validate(form: &BuildingForm) -> Result<BuildingFields, DomainError> {
    Ok(BuildingFields {
        name: required(BuildingFormFields::NAME, form.name.as_deref())?,
        address: required(BuildingFormFields::ADDRESS, form.address.as_deref())?,
        floors: required(BuildingFormFields::FLOORS, form.floors.as_deref())?,
        year_built: required(BuildingFormFields::YEAR_BUILT, form.year_built.as_deref())?,
        building_code: required(
            BuildingFormFields::BUILDING_CODE,
            form.building_code.as_deref(),
        )?,
    })
}

fn required(field: &'static str, value: Option<&str>) -> Result<String, DomainError> {
    match value {
        Some(v) if !v.is_empty() => Ok(v.to_owned()),
        _ => Err(DomainError::missing_field(field)),
    }
}
