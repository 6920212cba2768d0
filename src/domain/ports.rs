//! Management client port
//!
//! Abstracts the external infrastructure-management system. The engine only
//! ever talks to Foreman/Satellite through this trait, which keeps the
//! reconciliation logic testable with an in-memory client and keeps the
//! hammer serialization format out of the domain.

use crate::error::EnvsyncResult;

/// Operations the engine needs from the external management system.
///
/// Every call is a blocking round trip; failures surface as
/// `EnvsyncError::ExternalCommand`. No retries are attempted here.
pub trait ManagementClient {
    /// List registered Puppet environment names, optionally scoped to a
    /// location and organization.
    fn list_environments(
        &self,
        location_id: Option<u64>,
        organization_id: Option<u64>,
    ) -> EnvsyncResult<Vec<String>>;

    /// Create a Puppet environment.
    fn create_environment(
        &self,
        name: &str,
        location_id: Option<u64>,
        organization_id: Option<u64>,
    ) -> EnvsyncResult<()>;

    /// Delete a Puppet environment by name.
    fn delete_environment(&self, name: &str) -> EnvsyncResult<()>;

    /// List host names matching a hammer search query.
    fn list_hosts(
        &self,
        search: &str,
        location_id: Option<u64>,
        organization_id: Option<u64>,
    ) -> EnvsyncResult<Vec<String>>;

    /// Move a host to a different Puppet environment.
    fn reassign_host(&self, host: &str, environment: &str) -> EnvsyncResult<()>;
}
