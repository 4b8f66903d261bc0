//! Site composition and manifest generation for raindocs.
//!
//! This crate provides:
//! - **Fragments**: [`Fragment`] parsing and validation of navigation files
//! - **Composition**: [`Site::load`] wiring fragments, theme, and markdown
//!   options from configuration
//! - **Manifest**: [`SiteManifest`] JSON output for the rendering framework
//!
//! # Composing a site
//!
//! ```ignore
//! use raindocs_config::Config;
//! use raindocs_site::Site;
//!
//! let config = Config::load(None, None)?;
//! let site = Site::load(&config)?;
//! site.write_manifest(&config.site_resolved.out_file)?;
//! ```

pub(crate) mod fragment;
pub(crate) mod loader;
pub(crate) mod manifest;
pub(crate) mod site;

pub use fragment::Fragment;
pub use manifest::SiteManifest;
pub use site::{Site, SiteError};
