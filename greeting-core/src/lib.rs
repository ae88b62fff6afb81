//! greeting-core: Shared logic and infrastructure for the greeting smoke-test
//! services.
pub mod config;
pub mod error;
pub mod greeting;
pub mod observability;
