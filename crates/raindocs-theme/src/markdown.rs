//! Markdown renderer plugin options.
//!
//! The markdown pipeline itself belongs to the rendering framework; the
//! only wiring raindocs owns is the configuration passed to the table
//! span plugin, which lets table cells span rows and columns. The
//! options are pass-through values carried in the site manifest.

use serde::{Deserialize, Serialize};

/// Options for the table span plugin.
///
/// Both spans are enabled by default; authors disable them from site
/// config when a theme cannot render merged cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableSpanOptions {
    /// Allow cells to span multiple rows.
    pub rowspan: bool,
    /// Allow cells to span multiple columns.
    pub colspan: bool,
}

impl Default for TableSpanOptions {
    fn default() -> Self {
        Self {
            rowspan: true,
            colspan: true,
        }
    }
}

/// Markdown options carried in the site manifest.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct MarkdownOptions {
    /// Table span plugin configuration.
    #[serde(rename = "tableSpans")]
    pub table_spans: TableSpanOptions,
}

impl MarkdownOptions {
    /// Options with the given table span configuration.
    #[must_use]
    pub fn with_table_spans(mut self, table_spans: TableSpanOptions) -> Self {
        self.table_spans = table_spans;
        self
    }
}
