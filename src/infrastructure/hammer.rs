//! Hammer client
//!
//! Implements the `ManagementClient` port by shelling out to the hammer
//! CLI with `--output yaml`. Arguments are built as structured vectors,
//! never concatenated strings, and the YAML output is parsed into typed
//! records so the rest of the crate never sees hammer's serialization
//! format.

use std::path::PathBuf;
use std::process::{Command, Stdio};

use serde::Deserialize;

use crate::domain::ManagementClient;
use crate::error::{EnvsyncError, EnvsyncResult};

/// One record from hammer's YAML list output. Hammer capitalizes its
/// column names; everything except `Name` is ignored.
#[derive(Debug, Deserialize)]
struct NamedRecord {
    #[serde(rename = "Name")]
    name: String,
}

/// Extract the `Name` field from each record in a hammer YAML listing.
///
/// An empty listing may arrive as no output at all, an empty sequence, or
/// a null document; all of these mean zero records.
fn parse_names(yaml: &str) -> EnvsyncResult<Vec<String>> {
    if yaml.trim().is_empty() {
        return Ok(Vec::new());
    }
    let records: Option<Vec<NamedRecord>> = serde_yaml_ng::from_str(yaml)?;
    Ok(records
        .unwrap_or_default()
        .into_iter()
        .map(|record| record.name)
        .collect())
}

fn push_scope_args(args: &mut Vec<String>, location_id: Option<u64>, organization_id: Option<u64>) {
    if let Some(loc) = location_id {
        args.push("--location-id".to_string());
        args.push(loc.to_string());
    }
    if let Some(org) = organization_id {
        args.push("--organization-id".to_string());
        args.push(org.to_string());
    }
}

fn list_environments_args(location_id: Option<u64>, organization_id: Option<u64>) -> Vec<String> {
    let mut args = vec!["puppet-environment".to_string(), "list".to_string()];
    push_scope_args(&mut args, location_id, organization_id);
    args
}

// Create takes the plural --location-ids/--organization-ids flags, unlike
// list and host operations.
fn create_environment_args(
    name: &str,
    location_id: Option<u64>,
    organization_id: Option<u64>,
) -> Vec<String> {
    let mut args = vec![
        "puppet-environment".to_string(),
        "create".to_string(),
        "--name".to_string(),
        name.to_string(),
    ];
    if let Some(loc) = location_id {
        args.push("--location-ids".to_string());
        args.push(loc.to_string());
    }
    if let Some(org) = organization_id {
        args.push("--organization-ids".to_string());
        args.push(org.to_string());
    }
    args
}

fn delete_environment_args(name: &str) -> Vec<String> {
    vec![
        "puppet-environment".to_string(),
        "delete".to_string(),
        "--name".to_string(),
        name.to_string(),
    ]
}

fn list_hosts_args(
    search: &str,
    location_id: Option<u64>,
    organization_id: Option<u64>,
) -> Vec<String> {
    let mut args = vec![
        "host".to_string(),
        "list".to_string(),
        "--search".to_string(),
        search.to_string(),
    ];
    push_scope_args(&mut args, location_id, organization_id);
    args
}

fn reassign_host_args(host: &str, environment: &str) -> Vec<String> {
    vec![
        "host".to_string(),
        "update".to_string(),
        "--name".to_string(),
        host.to_string(),
        "--puppet-environment".to_string(),
        environment.to_string(),
    ]
}

/// Management client backed by the hammer CLI
pub struct HammerClient {
    hammer_path: PathBuf,
}

impl HammerClient {
    /// Client using `hammer` from `$PATH`
    pub fn new() -> Self {
        Self::with_path("hammer")
    }

    /// Client using an explicit hammer binary path
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            hammer_path: path.into(),
        }
    }

    /// Run one hammer subcommand and return its stdout.
    ///
    /// `description` is the human-readable subcommand name carried into
    /// the error when hammer exits non-zero.
    fn run(&self, description: &str, args: &[String]) -> EnvsyncResult<String> {
        let output = Command::new(&self.hammer_path)
            .arg("--output")
            .arg("yaml")
            .args(args)
            .stdin(Stdio::null())
            .output()?;

        if !output.status.success() {
            return Err(EnvsyncError::ExternalCommand {
                command: description.to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

impl Default for HammerClient {
    fn default() -> Self {
        Self::new()
    }
}

impl ManagementClient for HammerClient {
    fn list_environments(
        &self,
        location_id: Option<u64>,
        organization_id: Option<u64>,
    ) -> EnvsyncResult<Vec<String>> {
        let args = list_environments_args(location_id, organization_id);
        let stdout = self.run("puppet-environment list", &args)?;
        parse_names(&stdout)
    }

    fn create_environment(
        &self,
        name: &str,
        location_id: Option<u64>,
        organization_id: Option<u64>,
    ) -> EnvsyncResult<()> {
        let args = create_environment_args(name, location_id, organization_id);
        self.run("puppet-environment create", &args)?;
        Ok(())
    }

    fn delete_environment(&self, name: &str) -> EnvsyncResult<()> {
        let args = delete_environment_args(name);
        self.run("puppet-environment delete", &args)?;
        Ok(())
    }

    fn list_hosts(
        &self,
        search: &str,
        location_id: Option<u64>,
        organization_id: Option<u64>,
    ) -> EnvsyncResult<Vec<String>> {
        let args = list_hosts_args(search, location_id, organization_id);
        let stdout = self.run("host list", &args)?;
        parse_names(&stdout)
    }

    fn reassign_host(&self, host: &str, environment: &str) -> EnvsyncResult<()> {
        let args = reassign_host_args(host, environment);
        self.run("host update", &args)?;
        Ok(())
    }
}
