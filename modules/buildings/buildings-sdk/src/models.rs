/// A stored building record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Building {
    pub id: i64,
    pub name: String,
    pub address: String,
    pub floors: i64,
    pub year_built: i64,
    pub building_code: String,
}

/// Raw form submission. Every field may be absent or empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildingForm {
    pub name: Option<String>,
    pub address: Option<String>,
    pub floors: Option<String>,
    pub year_built: Option<String>,
    pub building_code: Option<String>,
}

/// Writable fields after presence validation.
///
/// `floors` and `year_built` are kept as submitted; integer conversion
/// happens at the storage boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildingFields {
    pub name: String,
    pub address: String,
    pub floors: String,
    pub year_built: String,
    pub building_code: String,
}

impl BuildingFields {
    /// Writable fields of an existing record, in submitted form.
    #[must_use]
    pub fn from_building(building: &Building) -> Self {
        Self {
            name: building.name.clone(),
            address: building.address.clone(),
            floors: building.floors.to_string(),
            year_built: building.year_built.to_string(),
            building_code: building.building_code.clone(),
        }
    }
}

impl From<BuildingFields> for BuildingForm {
    fn from(fields: BuildingFields) -> Self {
        Self {
            name: Some(fields.name),
            address: Some(fields.address),
            floors: Some(fields.floors),
            year_built: Some(fields.year_built),
            building_code: Some(fields.building_code),
        }
    }
}
