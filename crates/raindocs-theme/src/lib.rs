//! Theme extension surface for raindocs.
//!
//! Two small tables the rendering framework consumes as-is: the
//! [`ComponentRegistry`] naming the custom UI components available to
//! pages, and [`MarkdownOptions`] configuring the table span plugin.
//! Neither involves rendering logic; raindocs validates the tables and
//! ships them in the site manifest.

pub(crate) mod markdown;
pub(crate) mod registry;

pub use markdown::{MarkdownOptions, TableSpanOptions};
pub use registry::{ComponentEntry, ComponentRegistry, ThemeError};
