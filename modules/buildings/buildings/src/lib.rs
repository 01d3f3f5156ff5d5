//! Buildings Module Implementation
//!
//! Create, list, view, update and delete building records stored in a single
//! SQLite table, served as HTML forms. Record types live in `buildings-sdk`
//! and are re-exported here.

pub use buildings_sdk::{Building, BuildingFields, BuildingForm};

pub mod module;
pub use module::BuildingsModule;

#[doc(hidden)]
pub mod api;
#[doc(hidden)]
pub mod config;
#[doc(hidden)]
pub mod domain;
#[doc(hidden)]
pub mod infra;
