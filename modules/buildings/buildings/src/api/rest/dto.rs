use buildings_sdk::models::BuildingForm;
use serde::Deserialize;

/// URL-encoded body of the create and update forms.
#[derive(Debug, Default, Deserialize)]
pub struct BuildingFormRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub floors: Option<String>,
    #[serde(default)]
    pub year_built: Option<String>,
    #[serde(default)]
    pub building_code: Option<String>,
}

impl From<BuildingFormRequest> for BuildingForm {
    fn from(req: BuildingFormRequest) -> Self {
        Self {
            name: req.name,
            address: req.address,
            floors: req.floors,
            year_built: req.year_built,
            building_code: req.building_code,
        }
    }
}
