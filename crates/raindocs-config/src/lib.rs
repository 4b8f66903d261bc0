//! Configuration management for raindocs.
//!
//! Parses `raindocs.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories.
//!
//! CLI settings can be applied during load via [`CliSettings`].
//!
//! ## Environment Variable Expansion
//!
//! String configuration values support environment variable expansion:
//!
//! - `${VAR}` - expands to the value of VAR, errors if unset
//! - `${VAR:-default}` - expands to VAR if set, otherwise uses default
//!
//! Expanded fields:
//! - `site.title`
//! - `site.nav_dir`
//! - `site.out_file`

mod expand;

use serde::Deserialize;
use std::path::{Path, PathBuf};

use raindocs_theme::{ComponentEntry, MarkdownOptions, TableSpanOptions};

/// CLI settings that override configuration file values.
///
/// All fields are optional. Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override navigation fragment directory.
    pub nav_dir: Option<PathBuf>,
    /// Override manifest output file.
    pub out_file: Option<PathBuf>,
}

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "raindocs.toml";

/// Application configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Site configuration (paths are relative strings from TOML).
    site: SiteSectionRaw,
    /// Route-to-fragment mappings, in display order.
    pub routes: Vec<RouteConfig>,
    /// Markdown plugin configuration.
    markdown: MarkdownSection,
    /// Theme extension configuration.
    theme: ThemeSection,

    /// Resolved site configuration (set after loading).
    #[serde(skip)]
    pub site_resolved: SiteConfig,
    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self::default_with_base(Path::new("."))
    }
}

/// Raw site configuration as parsed from TOML (paths as strings).
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct SiteSectionRaw {
    title: Option<String>,
    nav_dir: Option<String>,
    out_file: Option<String>,
}

/// Resolved site configuration with absolute paths.
#[derive(Debug)]
pub struct SiteConfig {
    /// Site title.
    pub title: String,
    /// Directory holding navigation fragment files.
    pub nav_dir: PathBuf,
    /// File the site manifest is written to.
    pub out_file: PathBuf,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "Documentation".to_owned(),
            nav_dir: PathBuf::from("nav"),
            out_file: PathBuf::from("manifest.json"),
        }
    }
}

/// One route mapping: a route key and the fragments composing its tree.
#[derive(Debug, Deserialize)]
pub struct RouteConfig {
    /// Route key (URL-path prefix), e.g. `/docs/rainy/`.
    pub route: String,
    /// Fragment names, in display order.
    #[serde(default)]
    pub fragments: Vec<String>,
}

/// Markdown plugin configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct MarkdownSection {
    table_spans: TableSpanOptions,
}

/// Theme extension configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ThemeSection {
    components: Vec<ComponentEntry>,
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
    /// Environment variable error during expansion.
    #[error("Environment variable error in {field}: {message}")]
    EnvVar {
        /// Config field path (e.g., "`site.nav_dir`").
        field: String,
        /// Error message (e.g., "${`RAINDOCS_NAV`} not set").
        message: String,
    },
}

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for `raindocs.toml` in current directory and
    /// parents.
    ///
    /// CLI settings are applied after loading and path resolution, allowing
    /// CLI arguments to take precedence over config file values.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist or parsing
    /// fails.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)?
        } else if let Some(discovered) = Self::discover_config() {
            Self::load_from_file(&discovered)?
        } else {
            Self::default_with_cwd()
        };

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
        }

        Ok(config)
    }

    /// Markdown options for the site manifest.
    #[must_use]
    pub fn markdown_options(&self) -> MarkdownOptions {
        MarkdownOptions::default().with_table_spans(self.markdown.table_spans)
    }

    /// Theme components registered on top of the built-in set.
    #[must_use]
    pub fn theme_components(&self) -> &[ComponentEntry] {
        &self.theme.components
    }

    /// Apply CLI settings to the configuration.
    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(nav_dir) = &settings.nav_dir {
            self.site_resolved.nav_dir.clone_from(nav_dir);
        }
        if let Some(out_file) = &settings.out_file {
            self.site_resolved.out_file.clone_from(out_file);
        }
    }

    /// Search for config file in current directory and parents.
    fn discover_config() -> Option<PathBuf> {
        let mut current = std::env::current_dir().ok()?;
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    /// Create default config with paths relative to current working
    /// directory.
    fn default_with_cwd() -> Self {
        let cwd = std::env::current_dir().unwrap_or_default();
        Self::default_with_base(&cwd)
    }

    /// Create default config with paths relative to given base directory.
    fn default_with_base(base: &Path) -> Self {
        Self {
            site: SiteSectionRaw::default(),
            routes: Vec::new(),
            markdown: MarkdownSection::default(),
            theme: ThemeSection::default(),
            site_resolved: SiteConfig {
                title: "Documentation".to_owned(),
                nav_dir: base.join("nav"),
                out_file: base.join("manifest.json"),
            },
            config_path: None,
        }
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;

        // Expand environment variables before path resolution
        config.expand_env_vars()?;

        let config_dir = path.parent().unwrap_or(Path::new("."));
        config.resolve_paths(config_dir);
        config.config_path = Some(path.to_path_buf());

        // Validate configuration after loading and resolution
        config.validate()?;

        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// Checks that all required fields are properly set and that the route
    /// and fragment references are internally consistent. Called
    /// automatically after loading from file.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any validation fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.validate_site()?;
        self.validate_routes()?;
        self.validate_theme()?;
        Ok(())
    }

    /// Validate the site section.
    fn validate_site(&self) -> Result<(), ConfigError> {
        if self.site_resolved.title.is_empty() {
            return Err(ConfigError::Validation(
                "site.title cannot be empty".to_owned(),
            ));
        }
        if let Some(nav_dir) = &self.site.nav_dir
            && nav_dir.is_empty()
        {
            return Err(ConfigError::Validation(
                "site.nav_dir cannot be empty".to_owned(),
            ));
        }
        if let Some(out_file) = &self.site.out_file
            && out_file.is_empty()
        {
            return Err(ConfigError::Validation(
                "site.out_file cannot be empty".to_owned(),
            ));
        }
        Ok(())
    }

    /// Validate route keys and fragment references.
    ///
    /// A fragment may appear in exactly one route: reuse across routes
    /// would share one subtree between two navigation trees, and repeats
    /// within a route are authoring mistakes.
    fn validate_routes(&self) -> Result<(), ConfigError> {
        let mut seen_routes: Vec<&str> = Vec::new();
        let mut seen_fragments: Vec<(&str, &str)> = Vec::new();

        for (index, route) in self.routes.iter().enumerate() {
            if !route.route.starts_with('/') {
                return Err(ConfigError::Validation(format!(
                    "routes[{index}]: route '{}' must start with '/'",
                    route.route
                )));
            }
            if seen_routes.contains(&route.route.as_str()) {
                return Err(ConfigError::Validation(format!(
                    "duplicate route '{}' in [[routes]]",
                    route.route
                )));
            }
            seen_routes.push(&route.route);

            if route.fragments.is_empty() {
                return Err(ConfigError::Validation(format!(
                    "route '{}' must list at least one fragment",
                    route.route
                )));
            }
            for name in &route.fragments {
                if name.is_empty() {
                    return Err(ConfigError::Validation(format!(
                        "route '{}' has an empty fragment name",
                        route.route
                    )));
                }
                if let Some((_, first_route)) = seen_fragments
                    .iter()
                    .find(|(fragment, _)| *fragment == name.as_str())
                {
                    let message = if *first_route == route.route {
                        format!(
                            "route '{}' lists fragment '{name}' more than once",
                            route.route
                        )
                    } else {
                        format!(
                            "fragment '{name}' is referenced by both '{first_route}' and '{}'",
                            route.route
                        )
                    };
                    return Err(ConfigError::Validation(message));
                }
                seen_fragments.push((name, &route.route));
            }
        }

        Ok(())
    }

    /// Validate additional theme components.
    fn validate_theme(&self) -> Result<(), ConfigError> {
        for (index, component) in self.theme.components.iter().enumerate() {
            if component.name.is_empty() {
                return Err(ConfigError::Validation(format!(
                    "theme.components[{index}].name cannot be empty"
                )));
            }
            if component.source.is_empty() {
                return Err(ConfigError::Validation(format!(
                    "theme.components[{index}] ('{}') has an empty source",
                    component.name
                )));
            }
        }
        Ok(())
    }

    /// Expand environment variable references in configuration strings.
    fn expand_env_vars(&mut self) -> Result<(), ConfigError> {
        if let Some(ref title) = self.site.title {
            self.site.title = Some(expand::expand_env(title, "site.title")?);
        }
        if let Some(ref nav_dir) = self.site.nav_dir {
            self.site.nav_dir = Some(expand::expand_env(nav_dir, "site.nav_dir")?);
        }
        if let Some(ref out_file) = self.site.out_file {
            self.site.out_file = Some(expand::expand_env(out_file, "site.out_file")?);
        }
        Ok(())
    }

    /// Resolve relative paths to absolute paths based on config directory.
    fn resolve_paths(&mut self, config_dir: &Path) {
        let resolve = |path: Option<&str>, default: &str| config_dir.join(path.unwrap_or(default));

        self.site_resolved = SiteConfig {
            title: self
                .site
                .title
                .clone()
                .unwrap_or_else(|| "Documentation".to_owned()),
            nav_dir: resolve(self.site.nav_dir.as_deref(), "nav"),
            out_file: resolve(self.site.out_file.as_deref(), "manifest.json"),
        };
    }
}
