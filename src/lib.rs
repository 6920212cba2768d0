//! envsync - Puppet environment reconciliation for Foreman/Satellite
//!
//! Keeps the Puppet environments registered in a Satellite instance in
//! sync with a declared list, talking to Satellite exclusively through
//! the hammer CLI. Protected environments are never deleted by
//! reconciliation, and environments that still have hosts assigned are
//! refused (reported, not failed) unless migrated explicitly with
//! force-delete.

pub mod config;
pub mod desired;
pub mod domain;
pub mod engine;
pub mod error;
pub mod infrastructure;
pub mod ui;

// Re-exports for convenience
pub use config::SyncConfig;
pub use domain::{ManagementClient, ReconcilePlan, Refusal, RefusalRecord};
pub use engine::SyncEngine;
pub use error::{EnvsyncError, EnvsyncResult};
pub use infrastructure::HammerClient;
