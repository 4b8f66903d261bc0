//! Navigation fragments.
//!
//! A fragment is a single TOML file in the navigation directory holding an
//! ordered list of `[[nav]]` entries. Fragments are parsed permissively and
//! then validated into typed navigation nodes, so that shape errors carry the
//! fragment name and the path of the offending entry.

use raindocs_nav::{NavNode, NodePath, RawNode, validate_nodes};
use serde::Deserialize;

use crate::site::SiteError;

/// On-disk shape of a fragment file.
#[derive(Debug, Deserialize)]
struct FragmentFile {
    /// Navigation entries in authored order.
    #[serde(default)]
    nav: Vec<RawNode>,
}

/// A named, validated list of navigation nodes.
#[derive(Debug, Clone)]
pub struct Fragment {
    name: String,
    nodes: Vec<NavNode>,
}

impl Fragment {
    /// Parses and validates a fragment from TOML content.
    ///
    /// The fragment name roots every error path, so a bad entry reports as
    /// `core > Containers > ...` rather than an anonymous index.
    pub fn from_toml(name: impl Into<String>, content: &str) -> Result<Self, SiteError> {
        let name = name.into();
        let file: FragmentFile = toml::from_str(content).map_err(|e| SiteError::FragmentParse {
            name: name.clone(),
            message: e.to_string(),
        })?;

        let origin = NodePath::root(name.as_str());
        let nodes = validate_nodes(file.nav, &origin)?;

        Ok(Self { name, nodes })
    }

    /// Fragment name, i.e. the file stem it was loaded from.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Validated navigation nodes in authored order.
    #[must_use]
    pub fn nodes(&self) -> &[NavNode] {
        &self.nodes
    }

    /// Consumes the fragment, returning its nodes for route composition.
    #[must_use]
    pub fn into_nodes(self) -> Vec<NavNode> {
        self.nodes
    }

    /// Total number of nodes, counting group descendants.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.iter().map(NavNode::count).sum()
    }
}
