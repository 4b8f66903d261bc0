//! `raindocs build` command implementation.

use std::path::PathBuf;

use clap::Args;
use raindocs_config::{CliSettings, Config};
use raindocs_site::Site;

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the build command.
#[derive(Args)]
pub(crate) struct BuildArgs {
    /// Path to configuration file (default: auto-discover raindocs.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Navigation fragment directory (overrides config).
    #[arg(short, long)]
    nav_dir: Option<PathBuf>,

    /// Manifest output file (overrides config).
    #[arg(short, long)]
    out: Option<PathBuf>,

    /// Enable verbose output (show per-fragment loading logs).
    #[arg(short, long)]
    pub(crate) verbose: bool,
}

impl BuildArgs {
    /// Execute the build command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration, fragment loading, or manifest
    /// writing fails.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let cli_settings = CliSettings {
            nav_dir: self.nav_dir,
            out_file: self.out,
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;

        match &config.config_path {
            Some(path) => output.info(&format!("Config: {}", path.display())),
            None => output.warning("No raindocs.toml found; using built-in defaults"),
        }
        output.info(&format!(
            "Navigation directory: {}",
            config.site_resolved.nav_dir.display()
        ));

        let site = Site::load(&config)?;
        site.write_manifest(&config.site_resolved.out_file)?;

        output.success(&format!(
            "Manifest written to {} ({} routes, {} entries)",
            config.site_resolved.out_file.display(),
            site.sidebar().len(),
            site.sidebar().node_count()
        ));
        Ok(())
    }
}
