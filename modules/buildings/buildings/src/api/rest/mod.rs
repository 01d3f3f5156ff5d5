pub mod dto;
pub mod error;
pub mod handlers;
pub mod id;
pub mod notice;
pub mod response;
pub mod routes;
pub mod views;
