//! Navigation node model.
//!
//! A navigation tree is built from [`NavNode`] values: a node is either a
//! [`NavLeaf`] (display text plus a link) or a [`NavGroup`] (display text
//! plus ordered child nodes, optionally collapsible and optionally scoped
//! under a base path). The two shapes are mutually exclusive by
//! construction.
//!
//! Authored input arrives as [`RawNode`] values, which mirror the node
//! fields permissively so serde can parse whatever was written. The raw
//! form is converted into the typed tree by [`validate_nodes`], which
//! rejects malformed nodes with the offending label path instead of
//! letting them reach the rendering framework.
//!
//! # Example
//!
//! ```
//! use raindocs_nav::{NavGroup, NavNode};
//!
//! let group = NavGroup::new(
//!     "containers",
//!     vec![
//!         NavNode::leaf("any", "any"),
//!         NavNode::leaf("optional", "optional"),
//!     ],
//! )
//! .with_base("/docs/rainy/containers/");
//!
//! let node = NavNode::from(group);
//! assert_eq!(node.text(), "containers");
//! assert_eq!(node.count(), 3);
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{NavError, NodePath};

/// Terminal navigation entry: display text plus a link target.
///
/// The link may be site-absolute (starting with `/`) or relative, in which
/// case the nearest enclosing group base resolves it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NavLeaf {
    /// Display text.
    pub text: String,
    /// Link target.
    pub link: String,
}

/// Internal navigation entry: display text plus ordered child nodes.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NavGroup {
    /// Display text.
    pub text: String,
    /// Child nodes, in display order.
    pub items: Vec<NavNode>,
    /// Initial collapse state. Advisory for the rendering framework;
    /// carries no structural meaning.
    #[serde(skip_serializing_if = "is_false")]
    pub collapsed: bool,
    /// URL-path prefix prepended to relative descendant links.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base: Option<String>,
}

impl NavGroup {
    /// Create a group with default collapse state and no base.
    #[must_use]
    pub fn new(text: impl Into<String>, items: Vec<NavNode>) -> Self {
        Self {
            text: text.into(),
            items,
            collapsed: false,
            base: None,
        }
    }

    /// Set the initial collapse state.
    #[must_use]
    pub fn collapsed(mut self, collapsed: bool) -> Self {
        self.collapsed = collapsed;
        self
    }

    /// Scope relative descendant links under a URL-path prefix.
    #[must_use]
    pub fn with_base(mut self, base: impl Into<String>) -> Self {
        self.base = Some(base.into());
        self
    }
}

/// One node of a navigation tree: exactly a leaf or exactly a group.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum NavNode {
    /// Terminal entry with a link.
    Leaf(NavLeaf),
    /// Entry with child nodes.
    Group(NavGroup),
}

impl NavNode {
    /// Create a leaf node.
    #[must_use]
    pub fn leaf(text: impl Into<String>, link: impl Into<String>) -> Self {
        Self::Leaf(NavLeaf {
            text: text.into(),
            link: link.into(),
        })
    }

    /// Create a group node with default collapse state and no base.
    #[must_use]
    pub fn group(text: impl Into<String>, items: Vec<NavNode>) -> Self {
        Self::Group(NavGroup::new(text, items))
    }

    /// Display text of the node.
    #[must_use]
    pub fn text(&self) -> &str {
        match self {
            Self::Leaf(leaf) => &leaf.text,
            Self::Group(group) => &group.text,
        }
    }

    /// Leaf view of the node, if it is one.
    #[must_use]
    pub fn as_leaf(&self) -> Option<&NavLeaf> {
        match self {
            Self::Leaf(leaf) => Some(leaf),
            Self::Group(_) => None,
        }
    }

    /// Group view of the node, if it is one.
    #[must_use]
    pub fn as_group(&self) -> Option<&NavGroup> {
        match self {
            Self::Leaf(_) => None,
            Self::Group(group) => Some(group),
        }
    }

    /// Total number of nodes in this subtree, the node itself included.
    #[must_use]
    pub fn count(&self) -> usize {
        match self {
            Self::Leaf(_) => 1,
            Self::Group(group) => 1 + group.items.iter().map(NavNode::count).sum::<usize>(),
        }
    }

    /// Convert one raw node into a typed node.
    ///
    /// `path` is the label path of the node itself (origin plus the node's
    /// own step); child paths are derived from it.
    ///
    /// # Errors
    ///
    /// Returns [`NavError`] if the node has both or neither of
    /// `link`/`items`, carries group-only fields on a leaf, or declares a
    /// base that does not start with `/`. The error names `path`.
    pub fn from_raw(raw: RawNode, path: NodePath) -> Result<Self, NavError> {
        match (raw.link, raw.items) {
            (Some(_), Some(_)) => Err(NavError::BothLinkAndItems { path }),
            (None, None) => Err(NavError::NeitherLinkNorItems { path }),
            (Some(link), None) => {
                if raw.collapsed.is_some() {
                    return Err(NavError::CollapsedOnLeaf { path });
                }
                if raw.base.is_some() {
                    return Err(NavError::BaseOnLeaf { path });
                }
                Ok(Self::Leaf(NavLeaf {
                    text: raw.text,
                    link,
                }))
            }
            (None, Some(items)) => {
                if let Some(base) = &raw.base
                    && !base.starts_with('/')
                {
                    return Err(NavError::RelativeBase {
                        base: base.clone(),
                        path,
                    });
                }
                let items = validate_nodes(items, &path)?;
                Ok(Self::Group(NavGroup {
                    text: raw.text,
                    items,
                    collapsed: raw.collapsed.unwrap_or(false),
                    base: raw.base,
                }))
            }
        }
    }
}

impl From<NavLeaf> for NavNode {
    fn from(leaf: NavLeaf) -> Self {
        Self::Leaf(leaf)
    }
}

impl From<NavGroup> for NavNode {
    fn from(group: NavGroup) -> Self {
        Self::Group(group)
    }
}

/// Navigation node as authored, before validation.
///
/// All fields are optional at this stage so a parse never hides an
/// authoring mistake; [`validate_nodes`] decides what is actually legal.
/// Typed trees serialize back into this shape, with default-valued fields
/// omitted, so a serialized tree re-parses into an identical one.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawNode {
    /// Display text.
    #[serde(default)]
    pub text: String,
    /// Link target (leaf nodes).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    /// Child nodes (group nodes).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub items: Option<Vec<RawNode>>,
    /// Initial collapse state (group nodes).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub collapsed: Option<bool>,
    /// URL-path prefix for relative descendant links (group nodes).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base: Option<String>,
}

/// Convert an ordered sequence of raw nodes into typed nodes.
///
/// `origin` names where the sequence came from (route key or fragment
/// name) and roots the label paths reported on error. Input order is
/// preserved.
///
/// # Errors
///
/// Returns the first [`NavError`] encountered, in document order.
pub fn validate_nodes(raw: Vec<RawNode>, origin: &NodePath) -> Result<Vec<NavNode>, NavError> {
    raw.into_iter()
        .enumerate()
        .map(|(index, node)| {
            let path = origin.child(&node.text, index);
            NavNode::from_raw(node, path)
        })
        .collect()
}

fn is_false(value: &bool) -> bool {
    !value
}
