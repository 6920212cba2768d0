//! Domain layer
//!
//! Pure reconciliation logic plus the port the engine uses to talk to the
//! external management system. Nothing in here performs I/O.

pub mod guard;
pub mod plan;
pub mod ports;
pub mod refusal;

pub use guard::check_protected;
pub use plan::ReconcilePlan;
pub use ports::ManagementClient;
pub use refusal::{Refusal, RefusalRecord};
