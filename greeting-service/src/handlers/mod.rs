//! HTTP handlers for greeting-service.
//!
//! The service has a single handler; every path and method routes to it.

pub mod greet;

pub use greet::greet;
