pub mod error;
pub mod fields;
pub mod repo;
pub mod service;
pub mod validator;
