//! Sync engine
//!
//! Orchestrates one reconciliation run: snapshot the current environments,
//! diff against the desired set, run the protection guard, then create and
//! delete through the management client. Also hosts the force-delete path,
//! which bypasses the diff entirely.
//!
//! A run is synchronous and sequential. External failures abort fail-fast
//! with no rollback of mutations already issued; the external system stays
//! the source of truth for what actually happened.

use std::collections::BTreeSet;

use crate::config::SyncConfig;
use crate::domain::{check_protected, ManagementClient, ReconcilePlan, RefusalRecord};
use crate::error::{EnvsyncError, EnvsyncResult};
use crate::ui::Reporter;

/// Engine binding a management client to one run's configuration
pub struct SyncEngine<'a, C: ManagementClient> {
    client: &'a C,
    config: SyncConfig,
    reporter: Reporter,
}

impl<'a, C: ManagementClient> SyncEngine<'a, C> {
    pub fn new(client: &'a C, config: SyncConfig) -> Self {
        let reporter = Reporter::new(config.verbose);
        Self {
            client,
            config,
            reporter,
        }
    }

    /// Reconcile the registered environments against `desired`.
    ///
    /// Returns the refusals collected while processing the remove-set;
    /// refusals are reported as warnings but never fail the run.
    pub fn sync(&self, desired: &BTreeSet<String>) -> EnvsyncResult<RefusalRecord> {
        if desired.is_empty() {
            return Err(EnvsyncError::InvalidInput(
                "desired environment set is empty".to_string(),
            ));
        }

        let current: BTreeSet<String> = self
            .client
            .list_environments(self.config.location_id, self.config.organization_id)?
            .into_iter()
            .collect();

        let plan = ReconcilePlan::compute(desired, &current, &self.config.never_add_environments);

        // Checked before any mutating call so a guard violation leaves the
        // external system untouched.
        if let Err(err) = check_protected(&plan.to_remove, &self.config.protected_environments) {
            self.reporter.warn_protected(&self.config.protected_environments);
            return Err(err);
        }

        self.add_environments(&plan.to_add)?;
        let refusals = self.remove_environments(&plan.to_remove)?;

        if !refusals.is_empty() {
            self.reporter.warn_refusals(&refusals);
        }

        Ok(refusals)
    }

    fn add_environments(&self, to_add: &BTreeSet<String>) -> EnvsyncResult<()> {
        for environment in to_add {
            self.reporter
                .progress(&format!("Creating {} environment", environment));
            self.client.create_environment(
                environment,
                self.config.location_id,
                self.config.organization_id,
            )?;
        }
        Ok(())
    }

    /// Delete each environment in the remove-set, deferring any that still
    /// have hosts assigned. One stuck environment never blocks the rest;
    /// a failed delete of an empty environment is fatal.
    fn remove_environments(&self, to_remove: &BTreeSet<String>) -> EnvsyncResult<RefusalRecord> {
        let mut refusals = RefusalRecord::default();

        for environment in to_remove {
            let hosts = self.list_member_hosts(environment)?;
            if !hosts.is_empty() {
                refusals.push(environment.clone(), hosts);
                continue;
            }

            self.reporter
                .progress(&format!("Deleting {} environment", environment));
            self.client.delete_environment(environment)?;
        }

        Ok(refusals)
    }

    /// Move every host off `source` to `replacement`, then delete `source`.
    ///
    /// This is an operator-invoked override: the protection guard is not
    /// consulted, and any reassignment failure aborts before the delete is
    /// issued.
    pub fn force_delete(&self, source: &str, replacement: &str) -> EnvsyncResult<()> {
        let hosts = self.list_member_hosts(source)?;

        for host in &hosts {
            self.reporter.progress(&format!(
                "Updating {} to use {} environment instead of {}",
                host, replacement, source
            ));
            self.client.reassign_host(host, replacement)?;
        }

        self.reporter
            .progress(&format!("Deleting {} environment", source));
        self.client.delete_environment(source)
    }

    fn list_member_hosts(&self, environment: &str) -> EnvsyncResult<Vec<String>> {
        self.client.list_hosts(
            &format!("environment = {}", environment),
            self.config.location_id,
            self.config.organization_id,
        )
    }
}
