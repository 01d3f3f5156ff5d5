/// Form field names, shared by the validator, the storage mapper and the views.
pub struct BuildingFormFields;

impl BuildingFormFields {
    pub const NAME: &'static str = "name";
    pub const ADDRESS: &'static str = "address";
    pub const FLOORS: &'static str = "floors";
    pub const YEAR_BUILT: &'static str = "year_built";
    pub const BUILDING_CODE: &'static str = "building_code";
}
