//! Buildings SDK
//!
//! Plain record and form types shared by the buildings module and its callers.

pub mod models;

pub use models::{Building, BuildingFields, BuildingForm};
