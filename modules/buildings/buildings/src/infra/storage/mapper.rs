use buildings_sdk::models::{Building, BuildingFields};
use sea_orm::{ActiveValue, DbErr, SqlErr};

use super::entity;
use crate::domain::error::DomainError;
use crate::domain::fields::BuildingFormFields;

impl From<entity::Model> for Building {
    fn from(entity: entity::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            address: entity.address,
            floors: entity.floors,
            year_built: entity.year_built,
            building_code: entity.building_code,
        }
    }
}

/// Parse an integer form value. Surrounding whitespace and a leading sign
/// are accepted.
pub(super) fn parse_integer(field: &'static str, raw: &str) -> Result<i64, DomainError> {
    raw.trim()
        .parse()
        .map_err(|_| DomainError::invalid_number(field))
}

/// Set every writable column of `model` from `fields`.
pub(super) fn apply_fields(
    model: &mut entity::ActiveModel,
    fields: &BuildingFields,
) -> Result<(), DomainError> {
    let floors = parse_integer(BuildingFormFields::FLOORS, &fields.floors)?;
    let year_built = parse_integer(BuildingFormFields::YEAR_BUILT, &fields.year_built)?;

    model.name = ActiveValue::Set(fields.name.clone());
    model.address = ActiveValue::Set(fields.address.clone());
    model.floors = ActiveValue::Set(floors);
    model.year_built = ActiveValue::Set(year_built);
    model.building_code = ActiveValue::Set(fields.building_code.clone());
    Ok(())
}

/// New row for `fields`; the id is left to the store.
pub(super) fn new_active_model(fields: &BuildingFields) -> Result<entity::ActiveModel, DomainError> {
    let mut model = entity::ActiveModel {
        id: ActiveValue::NotSet,
        name: ActiveValue::NotSet,
        address: ActiveValue::NotSet,
        floors: ActiveValue::NotSet,
        year_built: ActiveValue::NotSet,
        building_code: ActiveValue::NotSet,
    };
    apply_fields(&mut model, fields)?;
    Ok(model)
}

/// Map a failed insert/update, turning a `building_code` uniqueness
/// violation into `DuplicateKey`.
pub(super) fn write_error(err: DbErr, code: &str) -> DomainError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(detail)) => {
            tracing::debug!(%detail, code, "Unique constraint violated");
            DomainError::duplicate_key(code)
        }
        _ => err.into(),
    }
}
