//! Fragment loading from the navigation directory.
//!
//! Reads the fragment files referenced by the configured routes and composes
//! them into a [`Sidebar`]. Fragment files are looked up as
//! `<nav_dir>/<name>.toml`, concatenated per route in configuration order, and
//! never shared between routes.

use std::fs;
use std::path::Path;

use raindocs_config::Config;
use raindocs_nav::{RouteEntry, Sidebar, SidebarBuilder};

use crate::fragment::Fragment;
use crate::site::SiteError;

/// Builds the unresolved sidebar from the routes in `config`.
///
/// Every fragment a route references must exist and validate; fragment files
/// present on disk but referenced by no route are logged and skipped.
pub(crate) fn load_sidebar(config: &Config) -> Result<Sidebar, SiteError> {
    let nav_dir = &config.site_resolved.nav_dir;
    let mut builder = SidebarBuilder::new();
    let mut referenced: Vec<&str> = Vec::new();

    for route in &config.routes {
        let mut items = Vec::new();
        for name in &route.fragments {
            let fragment = read_fragment(nav_dir, name)?;
            tracing::debug!(
                fragment = %name,
                route = %route.route,
                nodes = fragment.node_count(),
                "Loaded navigation fragment"
            );
            items.extend(fragment.into_nodes());
            referenced.push(name.as_str());
        }
        builder.push_route(RouteEntry::new(route.route.as_str(), items)?)?;
    }

    warn_unreferenced(nav_dir, &referenced);

    Ok(builder.build())
}

/// Reads and validates a single fragment file.
fn read_fragment(nav_dir: &Path, name: &str) -> Result<Fragment, SiteError> {
    let path = nav_dir.join(format!("{name}.toml"));
    if !path.exists() {
        return Err(SiteError::FragmentNotFound {
            name: name.to_owned(),
            path,
        });
    }

    let content = fs::read_to_string(&path)?;
    Fragment::from_toml(name, &content)
}

/// Logs fragment files that no route references.
///
/// An unreferenced fragment is not an error; it is usually a file kept around
/// while a section is being rewritten.
fn warn_unreferenced(nav_dir: &Path, referenced: &[&str]) {
    let Ok(entries) = fs::read_dir(nav_dir) else {
        return;
    };

    for entry in entries.filter_map(Result::ok) {
        let path = entry.path();
        if path.extension().is_some_and(|e| e == "toml")
            && let Some(stem) = path.file_stem().and_then(|s| s.to_str())
            && !referenced.contains(&stem)
        {
            tracing::warn!(
                fragment = %stem,
                path = %path.display(),
                "Fragment file not referenced by any route"
            );
        }
    }
}
