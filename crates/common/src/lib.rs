//! Shared types for the PulseCheck health check service.

pub mod health;

pub use health::{DEPLOY_VERSION, HealthStatus, STATUS_OK};
