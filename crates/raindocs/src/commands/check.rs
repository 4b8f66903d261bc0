//! `raindocs check` command implementation.

use std::path::PathBuf;

use clap::Args;
use raindocs_config::{CliSettings, Config};
use raindocs_site::Site;

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the check command.
#[derive(Args)]
pub(crate) struct CheckArgs {
    /// Path to configuration file (default: auto-discover raindocs.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Navigation fragment directory (overrides config).
    #[arg(short, long)]
    nav_dir: Option<PathBuf>,

    /// Enable verbose output (show per-fragment loading logs).
    #[arg(short, long)]
    pub(crate) verbose: bool,
}

impl CheckArgs {
    /// Execute the check command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration or any navigation fragment is
    /// invalid.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let cli_settings = CliSettings {
            nav_dir: self.nav_dir,
            out_file: None,
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

        output.info(&format!(
            "Routes: {} ({} navigation entries)",
            site.sidebar().len(),
            site.sidebar().node_count()
        ));
        output.info(&format!("Theme components: {}", site.theme().len()));
        let spans = site.markdown().table_spans;
        output.info(&format!(
            "Table spans: rowspan={}, colspan={}",
            spans.rowspan, spans.colspan
        ));

        output.success("Configuration OK");
        Ok(())
    }
}
