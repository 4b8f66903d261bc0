//! Error types for navigation construction and link resolution.

use std::fmt;

/// Breadcrumb of node labels from an origin (route key or fragment name)
/// down to one node, used to pinpoint authoring errors.
///
/// A node with empty display text shows as its zero-based position among
/// its siblings (e.g. `#2`) so the path stays usable for diagnosis.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NodePath {
    segments: Vec<String>,
}

impl NodePath {
    /// Path rooted at a named origin, e.g. a route key or fragment name.
    #[must_use]
    pub fn root(origin: impl Into<String>) -> Self {
        Self {
            segments: vec![origin.into()],
        }
    }

    /// Path extended by one child step.
    #[must_use]
    pub fn child(&self, text: &str, index: usize) -> Self {
        let mut segments = self.segments.clone();
        if text.is_empty() {
            segments.push(format!("#{index}"));
        } else {
            segments.push(text.to_owned());
        }
        Self { segments }
    }
}

impl fmt::Display for NodePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.segments.is_empty() {
            return f.write_str("<root>");
        }
        f.write_str(&self.segments.join(" > "))
    }
}

/// Error raised while validating navigation input or resolving links.
///
/// Every variant is a configuration-authoring error detected while the
/// navigation is assembled; the site build fails closed on any of them.
#[derive(Debug, thiserror::Error)]
pub enum NavError {
    /// Node declares both a link and child items.
    #[error("Navigation node '{path}' has both a link and child items")]
    BothLinkAndItems {
        /// Label path of the offending node.
        path: NodePath,
    },
    /// Node declares neither a link nor child items.
    #[error("Navigation node '{path}' has neither a link nor child items")]
    NeitherLinkNorItems {
        /// Label path of the offending node.
        path: NodePath,
    },
    /// `collapsed` set on a leaf node.
    #[error("Navigation node '{path}' is a leaf; 'collapsed' applies only to groups")]
    CollapsedOnLeaf {
        /// Label path of the offending node.
        path: NodePath,
    },
    /// `base` set on a leaf node.
    #[error("Navigation node '{path}' is a leaf; 'base' applies only to groups")]
    BaseOnLeaf {
        /// Label path of the offending node.
        path: NodePath,
    },
    /// Group base does not start with `/`.
    #[error("Navigation node '{path}' has base '{base}' which does not start with '/'")]
    RelativeBase {
        /// Label path of the offending group.
        path: NodePath,
        /// The rejected base value.
        base: String,
    },
    /// Route key registered more than once.
    #[error("Duplicate route key '{route}'")]
    DuplicateRoute {
        /// The repeated route key.
        route: String,
    },
    /// Route key does not start with `/`.
    #[error("Route key '{route}' does not start with '/'")]
    InvalidRouteKey {
        /// The rejected route key.
        route: String,
    },
    /// Relative leaf link with no enclosing base to resolve against.
    #[error("Navigation node '{path}' has relative link '{link}' and no enclosing base")]
    UnresolvableLink {
        /// Label path of the offending leaf.
        path: NodePath,
        /// The raw relative link.
        link: String,
    },
}
