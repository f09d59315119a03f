//! HTTP handlers for the mock test service.

pub mod generate;
pub mod health;
