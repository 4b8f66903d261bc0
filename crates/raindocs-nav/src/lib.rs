//! Navigation tree model and link resolution for raindocs.
//!
//! The sidebar of a documentation site is a route-keyed collection of
//! navigation trees: each URL-path prefix (route key) owns an ordered
//! list of nodes, and each node is either a leaf (text + link) or a
//! group (text + ordered children), optionally collapsible and
//! optionally scoped under a base path that absolutizes relative
//! descendant links.
//!
//! Everything here is pure data transformation: trees are validated and
//! resolved once at build time and immutable afterwards. Authoring
//! mistakes (a node that is both leaf and group, a duplicate route key,
//! a relative link with nothing to resolve it) are rejected eagerly with
//! the offending node's label path, never passed on to the rendering
//! framework.
//!
//! # Architecture
//!
//! - [`NavNode`] / [`NavLeaf`] / [`NavGroup`]: the typed tree
//! - [`RawNode`] + [`validate_nodes`]: permissive parse form and its
//!   validation into the typed tree
//! - [`RouteEntry`] / [`Sidebar`] / [`SidebarBuilder`]: the route-keyed
//!   mapping with eager duplicate detection
//! - [`resolve_link`] / [`Sidebar::resolved`]: base-path resolution

pub(crate) mod error;
pub(crate) mod node;
pub(crate) mod resolve;
pub(crate) mod route;

pub use error::{NavError, NodePath};
pub use node::{NavGroup, NavLeaf, NavNode, RawNode, validate_nodes};
pub use resolve::resolve_link;
pub use route::{RawRouteEntry, RouteEntry, Sidebar, SidebarBuilder};
