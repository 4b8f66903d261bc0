//! Composed documentation site.
//!
//! [`Site`] ties the pieces of a documentation site together: the resolved
//! navigation sidebar, the theme component registry, and the markdown plugin
//! options. [`Site::load`] is the single entry point that takes a validated
//! configuration and produces a site ready for manifest generation.
//!
//! # Example
//!
//! ```ignore
//! use raindocs_config::Config;
//! use raindocs_site::Site;
//!
//! let config = Config::load(None, None)?;
//! let site = Site::load(&config)?;
//! site.write_manifest(&config.site_resolved.out_file)?;
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use raindocs_config::Config;
use raindocs_nav::{NavError, Sidebar};
use raindocs_theme::{ComponentRegistry, MarkdownOptions, ThemeError};

use crate::loader::load_sidebar;
use crate::manifest::SiteManifest;

/// Errors that can occur while composing or writing a site.
#[derive(Debug, thiserror::Error)]
pub enum SiteError {
    /// A route references a fragment file that does not exist.
    #[error("Fragment '{name}' not found: {}", .path.display())]
    FragmentNotFound { name: String, path: PathBuf },

    /// A fragment file is not valid TOML.
    #[error("Fragment '{name}': {message}")]
    FragmentParse { name: String, message: String },

    /// Filesystem error reading fragments or writing the manifest.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Navigation shape or link resolution error.
    #[error("{0}")]
    Nav(#[from] NavError),

    /// Theme component registration error.
    #[error("{0}")]
    Theme(#[from] ThemeError),

    /// Manifest serialization error.
    #[error("Manifest serialization error: {0}")]
    Manifest(#[from] serde_json::Error),
}

/// A fully composed documentation site.
///
/// The sidebar held here is resolved: every leaf link is absolute and ready
/// for the rendering layer.
#[derive(Debug, Clone)]
pub struct Site {
    title: String,
    sidebar: Sidebar,
    theme: ComponentRegistry,
    markdown: MarkdownOptions,
}

impl Site {
    /// Loads and composes a site from configuration.
    ///
    /// Reads every referenced fragment under the configured navigation
    /// directory, composes the sidebar, resolves links against group bases,
    /// and registers configured theme components on top of the built-in set.
    ///
    /// # Errors
    ///
    /// Returns an error when a fragment is missing or malformed, a relative
    /// link has no enclosing base, or a theme component clashes with an
    /// existing registration.
    pub fn load(config: &Config) -> Result<Self, SiteError> {
        let sidebar = load_sidebar(config)?.resolved()?;

        let mut theme = ComponentRegistry::builtin();
        for entry in config.theme_components() {
            theme.register(entry.clone())?;
        }

        tracing::debug!(
            routes = sidebar.len(),
            nodes = sidebar.node_count(),
            components = theme.len(),
            "Site composed"
        );

        Ok(Self {
            title: config.site_resolved.title.clone(),
            sidebar,
            theme,
            markdown: config.markdown_options(),
        })
    }

    /// Site title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Resolved navigation sidebar.
    #[must_use]
    pub fn sidebar(&self) -> &Sidebar {
        &self.sidebar
    }

    /// Theme component registry, built-ins plus configured extras.
    #[must_use]
    pub fn theme(&self) -> &ComponentRegistry {
        &self.theme
    }

    /// Markdown plugin options.
    #[must_use]
    pub fn markdown(&self) -> MarkdownOptions {
        self.markdown
    }

    /// Serializable manifest view of this site.
    #[must_use]
    pub fn manifest(&self) -> SiteManifest<'_> {
        SiteManifest::new(self)
    }

    /// Writes the site manifest as pretty-printed JSON.
    ///
    /// Creates parent directories as needed. The output ends with a trailing
    /// newline so downstream tooling can treat it as a text file.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or any filesystem operation fails.
    pub fn write_manifest(&self, path: &Path) -> Result<(), SiteError> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        let json = self.manifest().to_json_pretty()?;
        fs::write(path, json)?;

        tracing::debug!(path = %path.display(), "Manifest written");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::Path;

    use pretty_assertions::assert_eq;
    use static_assertions::assert_impl_all;

    use super::*;

    assert_impl_all!(Site: Clone, Send, Sync);
    assert_impl_all!(SiteError: Send, Sync);

    fn create_test_dir() -> tempfile::TempDir {
        tempfile::tempdir().unwrap()
    }

    fn write_site_fixture(dir: &Path) -> std::path::PathBuf {
        let nav_dir = dir.join("nav");
        fs::create_dir(&nav_dir).unwrap();
        fs::write(
            nav_dir.join("core.toml"),
            r#"
[[nav]]
text = "Overview"
link = "/core/overview"

[[nav]]
text = "Containers"
base = "/core/containers/"

[[nav.items]]
text = "any"
link = "any"
"#,
        )
        .unwrap();

        let config_path = dir.join("raindocs.toml");
        fs::write(
            &config_path,
            r#"
[site]
title = "rainy-toolkit"

[[routes]]
route = "/core/"
fragments = ["core"]

[[theme.components]]
name = "CustomBadge"
source = "components/CustomBadge.vue"
"#,
        )
        .unwrap();
        config_path
    }

    #[test]
    fn test_site_load_resolves_links_and_registers_components() {
        let temp_dir = create_test_dir();
        let config_path = write_site_fixture(temp_dir.path());

        let config = Config::load(Some(config_path.as_path()), None).unwrap();
        let site = Site::load(&config).unwrap();

        assert_eq!(site.title(), "rainy-toolkit");
        assert_eq!(site.sidebar().len(), 1);

        // Relative leaf resolved against the enclosing base.
        let group = site.sidebar().routes()[0].items()[1].as_group().unwrap();
        let leaf = group.items[0].as_leaf().unwrap();
        assert_eq!(leaf.link, "/core/containers/any");

        // Built-ins plus the configured extra.
        assert!(site.theme().get("DeclarationTable").is_some());
        assert!(site.theme().get("CustomBadge").is_some());
    }

    #[test]
    fn test_site_load_fails_on_unresolvable_relative_link() {
        let temp_dir = create_test_dir();
        let nav_dir = temp_dir.path().join("nav");
        fs::create_dir(&nav_dir).unwrap();
        fs::write(
            nav_dir.join("loose.toml"),
            "[[nav]]\ntext = \"Dangling\"\nlink = \"dangling\"\n",
        )
        .unwrap();
        let config_path = temp_dir.path().join("raindocs.toml");
        fs::write(
            &config_path,
            "[[routes]]\nroute = \"/x/\"\nfragments = [\"loose\"]\n",
        )
        .unwrap();

        let config = Config::load(Some(config_path.as_path()), None).unwrap();
        let result = Site::load(&config);

        match result {
            Err(SiteError::Nav(e)) => {
                assert!(e.to_string().contains("Dangling"), "unexpected: {e}");
            }
            other => panic!("Expected Nav error, got {other:?}"),
        }
    }

    #[test]
    fn test_site_load_rejects_component_clashing_with_builtin() {
        let temp_dir = create_test_dir();
        let config_path = temp_dir.path().join("raindocs.toml");
        fs::write(
            &config_path,
            r#"
[[theme.components]]
name = "DeclarationTable"
source = "components/Custom.vue"
"#,
        )
        .unwrap();

        let config = Config::load(Some(config_path.as_path()), None).unwrap();
        let result = Site::load(&config);

        assert!(matches!(
            result,
            Err(SiteError::Theme(ThemeError::DuplicateComponent(_)))
        ));
    }

    #[test]
    fn test_write_manifest_creates_parent_directories() {
        let temp_dir = create_test_dir();
        let config_path = write_site_fixture(temp_dir.path());

        let config = Config::load(Some(config_path.as_path()), None).unwrap();
        let site = Site::load(&config).unwrap();

        let out_file = temp_dir.path().join("build/out/manifest.json");
        site.write_manifest(&out_file).unwrap();

        let written = fs::read_to_string(&out_file).unwrap();
        assert!(written.ends_with('\n'));
        assert!(written.contains("\"navigation\""));
    }

    #[test]
    fn test_site_load_with_default_config_is_empty() {
        let config = Config::default();
        let site = Site::load(&config).unwrap();

        assert!(site.sidebar().is_empty());
        assert_eq!(site.theme().len(), ComponentRegistry::builtin().len());
        assert!(site.markdown().table_spans.rowspan);
    }
}
