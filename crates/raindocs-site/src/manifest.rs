//! Site manifest serialization.
//!
//! The manifest is the JSON contract between this tool and the rendering
//! framework: resolved navigation per route, the theme component table, and
//! markdown plugin options. Field names follow the consumer's conventions,
//! so the markdown section uses camelCase keys.

use serde::Serialize;

use crate::site::Site;

/// Borrowed, serializable view of a [`Site`].
#[derive(Debug, Serialize)]
pub struct SiteManifest<'a> {
    /// Site title.
    title: &'a str,
    /// Resolved sidebar, one entry per route in configuration order.
    navigation: &'a raindocs_nav::Sidebar,
    /// Theme component registry.
    theme: &'a raindocs_theme::ComponentRegistry,
    /// Markdown plugin options.
    markdown: raindocs_theme::MarkdownOptions,
}

impl<'a> SiteManifest<'a> {
    pub(crate) fn new(site: &'a Site) -> Self {
        Self {
            title: site.title(),
            navigation: site.sidebar(),
            theme: site.theme(),
            markdown: site.markdown(),
        }
    }

    /// Pretty-printed JSON with a trailing newline.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        let mut json = serde_json::to_string_pretty(self)?;
        json.push('\n');
        Ok(json)
    }
}
