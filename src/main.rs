//! envsync CLI - Puppet environment reconciliation for Foreman/Satellite
//!
//! Usage: envsync <COMMAND>
//!
//! Commands:
//!   sync          Reconcile registered environments against a desired list
//!   force-delete  Move hosts off an environment, then delete it

use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};

use envsync::{desired, HammerClient, SyncConfig, SyncEngine};

/// envsync - keep Satellite Puppet environments in sync with a desired list
#[derive(Parser, Debug)]
#[command(name = "envsync")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Options shared by every hammer-backed command
#[derive(Args, Debug)]
struct HammerOpts {
    /// Foreman location id to scope operations to
    #[arg(long)]
    location_id: Option<u64>,

    /// Foreman organization id to scope operations to
    #[arg(long)]
    organization_id: Option<u64>,

    /// Path to the hammer binary
    #[arg(long, default_value = "hammer")]
    hammer_path: PathBuf,

    /// Print per-operation progress messages
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Reconcile registered Puppet environments against a desired list
    Sync {
        /// Path to a YAML file containing the desired environments
        #[arg(short, long, conflicts_with = "environments", required_unless_present = "environments")]
        file: Option<PathBuf>,

        /// Desired environments, separated by commas
        #[arg(short, long, value_delimiter = ',', value_name = "x,y,z")]
        environments: Option<Vec<String>>,

        /// Environment that must never be removed (repeatable)
        #[arg(long = "protected", value_name = "NAME")]
        protected: Option<Vec<String>>,

        /// Environment that must never be created (repeatable)
        #[arg(long = "never-add", value_name = "NAME")]
        never_add: Option<Vec<String>>,

        #[command(flatten)]
        opts: HammerOpts,
    },

    /// Move all hosts off an environment to a replacement, then delete it
    ForceDelete {
        /// Environment to delete
        #[arg(short, long)]
        environment: String,

        /// Environment to move displaced hosts to
        #[arg(short, long)]
        replacement: String,

        #[command(flatten)]
        opts: HammerOpts,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Sync {
            file,
            environments,
            protected,
            never_add,
            opts,
        } => cmd_sync(file, environments, protected, never_add, opts),
        Commands::ForceDelete {
            environment,
            replacement,
            opts,
        } => cmd_force_delete(&environment, &replacement, opts),
    }
}

fn build_config(opts: &HammerOpts) -> SyncConfig {
    SyncConfig {
        location_id: opts.location_id,
        organization_id: opts.organization_id,
        verbose: opts.verbose,
        ..SyncConfig::default()
    }
}

fn cmd_sync(
    file: Option<PathBuf>,
    environments: Option<Vec<String>>,
    protected: Option<Vec<String>>,
    never_add: Option<Vec<String>>,
    opts: HammerOpts,
) -> Result<()> {
    let desired = match (&file, &environments) {
        (Some(path), None) => desired::from_file(path)?,
        (None, Some(list)) => desired::from_list(list)?,
        // clap enforces exactly one of the two
        _ => anyhow::bail!("provide either a YAML file or a list of environments, not both"),
    };

    let mut config = build_config(&opts);
    if let Some(protected) = protected {
        config.protected_environments = protected.into_iter().collect();
    }
    if let Some(never_add) = never_add {
        config.never_add_environments = never_add.into_iter().collect();
    }

    let client = HammerClient::with_path(opts.hammer_path);
    let engine = SyncEngine::new(&client, config);
    engine.sync(&desired)?;

    Ok(())
}

fn cmd_force_delete(environment: &str, replacement: &str, opts: HammerOpts) -> Result<()> {
    let config = build_config(&opts);
    let client = HammerClient::with_path(opts.hammer_path);
    let engine = SyncEngine::new(&client, config);
    engine.force_delete(environment, replacement)?;

    Ok(())
}
