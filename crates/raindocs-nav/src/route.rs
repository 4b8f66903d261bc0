//! Route-keyed navigation mapping.
//!
//! A [`Sidebar`] maps URL-path-prefix route keys to independent top-level
//! navigation trees, so different sections of the site can show entirely
//! different menus. Entries keep their authored order; route keys are
//! unique, enforced eagerly by [`SidebarBuilder`] rather than by silently
//! letting a later entry win.

use serde::{Deserialize, Serialize};

use crate::error::NavError;
use crate::node::{NavNode, RawNode, validate_nodes};

/// One route key together with its top-level navigation nodes.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RouteEntry {
    route: String,
    items: Vec<NavNode>,
}

impl RouteEntry {
    /// Associate a route key with an ordered list of top-level nodes.
    ///
    /// # Errors
    ///
    /// Returns [`NavError::InvalidRouteKey`] if the key does not start
    /// with `/`.
    pub fn new(route: impl Into<String>, items: Vec<NavNode>) -> Result<Self, NavError> {
        let route = route.into();
        if !route.starts_with('/') {
            return Err(NavError::InvalidRouteKey { route });
        }
        Ok(Self { route, items })
    }

    /// Entry from parts already known to be valid.
    pub(crate) fn from_parts(route: String, items: Vec<NavNode>) -> Self {
        Self { route, items }
    }

    /// The route key (URL-path prefix).
    #[must_use]
    pub fn route(&self) -> &str {
        &self.route
    }

    /// Top-level nodes, in display order.
    #[must_use]
    pub fn items(&self) -> &[NavNode] {
        &self.items
    }

    /// Total number of nodes under this route.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.items.iter().map(NavNode::count).sum()
    }
}

/// Route entry as authored, before node validation.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct RawRouteEntry {
    /// Route key (URL-path prefix).
    #[serde(default)]
    pub route: String,
    /// Top-level raw nodes.
    #[serde(default)]
    pub items: Vec<RawNode>,
}

/// The complete site navigation: route entries in authored order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Sidebar {
    routes: Vec<RouteEntry>,
}

impl Sidebar {
    /// Build a sidebar from raw route entries, validating every node.
    ///
    /// This is the parse half of the round trip: a serialized [`Sidebar`]
    /// re-parses through here into an identical value.
    ///
    /// # Errors
    ///
    /// Returns the first [`NavError`] raised by node validation, route key
    /// checks, or a duplicate route key.
    pub fn from_raw(entries: Vec<RawRouteEntry>) -> Result<Self, NavError> {
        let mut builder = SidebarBuilder::new();
        for entry in entries {
            let origin = crate::error::NodePath::root(entry.route.as_str());
            let items = validate_nodes(entry.items, &origin)?;
            builder.push_route(RouteEntry::new(entry.route, items)?)?;
        }
        Ok(builder.build())
    }

    /// Sidebar from entries already known to be unique and valid.
    pub(crate) fn from_routes(routes: Vec<RouteEntry>) -> Self {
        Self { routes }
    }

    /// All route entries, in authored order.
    #[must_use]
    pub fn routes(&self) -> &[RouteEntry] {
        &self.routes
    }

    /// Entry whose route key equals `key` exactly.
    #[must_use]
    pub fn route(&self, key: &str) -> Option<&RouteEntry> {
        self.routes.iter().find(|entry| entry.route == key)
    }

    /// Entry that applies to a page path: the longest route key that is a
    /// prefix of `page_path`. This is how the rendering framework picks
    /// which tree to show for the page being rendered.
    #[must_use]
    pub fn route_for_page(&self, page_path: &str) -> Option<&RouteEntry> {
        self.routes
            .iter()
            .filter(|entry| page_path.starts_with(&entry.route))
            .max_by_key(|entry| entry.route.len())
    }

    /// Number of route entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    /// Whether there are no route entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// Total number of nodes across all routes.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.routes.iter().map(RouteEntry::node_count).sum()
    }
}

/// Merges route entries into a [`Sidebar`], rejecting duplicate keys.
#[derive(Debug, Default)]
pub struct SidebarBuilder {
    routes: Vec<RouteEntry>,
}

impl SidebarBuilder {
    /// Create an empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a route entry, keeping insertion order.
    ///
    /// # Errors
    ///
    /// Returns [`NavError::DuplicateRoute`] if an entry with the same
    /// route key was already added. Last-write-wins is deliberately not
    /// offered.
    pub fn push_route(&mut self, entry: RouteEntry) -> Result<(), NavError> {
        if self.routes.iter().any(|existing| existing.route == entry.route) {
            return Err(NavError::DuplicateRoute { route: entry.route });
        }
        self.routes.push(entry);
        Ok(())
    }

    /// Finish and return the composed sidebar.
    #[must_use]
    pub fn build(self) -> Sidebar {
        Sidebar {
            routes: self.routes,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::NavNode;
    use pretty_assertions::assert_eq;
    use static_assertions::assert_impl_all;

    assert_impl_all!(Sidebar: Clone, Send, Sync);

    fn entry(route: &str, texts: &[&str]) -> RouteEntry {
        let items = texts
            .iter()
            .map(|text| NavNode::leaf(*text, format!("/{text}")))
            .collect();
        RouteEntry::new(route, items).unwrap()
    }

    // RouteEntry

    #[test]
    fn test_route_entry_stores_key_and_items() {
        let entry = entry("/docs/rainy/", &["core", "meta"]);

        assert_eq!(entry.route(), "/docs/rainy/");
        assert_eq!(entry.items().len(), 2);
        assert_eq!(entry.node_count(), 2);
    }

    #[test]
    fn test_route_entry_rejects_key_without_leading_slash() {
        let err = RouteEntry::new("docs/rainy/", Vec::new()).unwrap_err();

        assert!(
            matches!(err, NavError::InvalidRouteKey { .. }),
            "Expected InvalidRouteKey, got {err:?}"
        );
        assert!(err.to_string().contains("docs/rainy/"));
    }

    #[test]
    fn test_route_entry_root_key_is_valid() {
        let entry = RouteEntry::new("/", Vec::new()).unwrap();

        assert_eq!(entry.route(), "/");
    }

    // SidebarBuilder

    #[test]
    fn test_builder_preserves_insertion_order() {
        let mut builder = SidebarBuilder::new();
        builder.push_route(entry("/", &["home"])).unwrap();
        builder.push_route(entry("/changelog/", &["log"])).unwrap();
        builder.push_route(entry("/docs/rainy/", &["core"])).unwrap();

        let sidebar = builder.build();

        let keys: Vec<_> = sidebar.routes().iter().map(RouteEntry::route).collect();
        assert_eq!(keys, vec!["/", "/changelog/", "/docs/rainy/"]);
    }

    #[test]
    fn test_builder_rejects_duplicate_route_key() {
        let mut builder = SidebarBuilder::new();
        builder.push_route(entry("/docs/rainy/", &["core"])).unwrap();

        let err = builder
            .push_route(entry("/docs/rainy/", &["meta"]))
            .unwrap_err();

        assert!(
            matches!(err, NavError::DuplicateRoute { .. }),
            "Expected DuplicateRoute, got {err:?}"
        );
    }

    #[test]
    fn test_builder_keeps_earlier_entry_after_duplicate() {
        let mut builder = SidebarBuilder::new();
        builder.push_route(entry("/docs/rainy/", &["core"])).unwrap();
        let _ = builder.push_route(entry("/docs/rainy/", &["meta"]));

        let sidebar = builder.build();

        assert_eq!(sidebar.len(), 1);
        let kept = sidebar.route("/docs/rainy/").unwrap();
        assert_eq!(kept.items()[0].text(), "core");
    }

    #[test]
    fn test_empty_builder_builds_empty_sidebar() {
        let sidebar = SidebarBuilder::new().build();

        assert!(sidebar.is_empty());
        assert_eq!(sidebar.node_count(), 0);
    }

    // Lookup

    #[test]
    fn test_route_lookup_is_exact() {
        let mut builder = SidebarBuilder::new();
        builder.push_route(entry("/docs/rainy/", &["core"])).unwrap();
        let sidebar = builder.build();

        assert!(sidebar.route("/docs/rainy/").is_some());
        assert!(sidebar.route("/docs/").is_none());
        assert!(sidebar.route("/docs/rainy/core").is_none());
    }

    #[test]
    fn test_route_for_page_picks_longest_prefix() {
        let mut builder = SidebarBuilder::new();
        builder.push_route(entry("/", &["home"])).unwrap();
        builder.push_route(entry("/docs/", &["docs"])).unwrap();
        builder.push_route(entry("/docs/rainy/", &["core"])).unwrap();
        let sidebar = builder.build();

        let matched = sidebar.route_for_page("/docs/rainy/containers/any").unwrap();
        assert_eq!(matched.route(), "/docs/rainy/");

        let matched = sidebar.route_for_page("/docs/other").unwrap();
        assert_eq!(matched.route(), "/docs/");

        let matched = sidebar.route_for_page("/about").unwrap();
        assert_eq!(matched.route(), "/");
    }

    #[test]
    fn test_route_for_page_without_match_returns_none() {
        let mut builder = SidebarBuilder::new();
        builder.push_route(entry("/docs/", &["docs"])).unwrap();
        let sidebar = builder.build();

        assert!(sidebar.route_for_page("/changelog/v1").is_none());
    }

    // Raw parsing and round trip

    #[test]
    fn test_from_raw_validates_nodes_per_route() {
        let entries = vec![RawRouteEntry {
            route: "/docs/rainy/".to_owned(),
            items: vec![RawNode {
                text: "core".to_owned(),
                link: Some("core".to_owned()),
                ..RawNode::default()
            }],
        }];

        let sidebar = Sidebar::from_raw(entries).unwrap();

        assert_eq!(sidebar.len(), 1);
        assert_eq!(sidebar.node_count(), 1);
    }

    #[test]
    fn test_from_raw_rejects_duplicate_routes() {
        let entries = vec![
            RawRouteEntry {
                route: "/".to_owned(),
                items: Vec::new(),
            },
            RawRouteEntry {
                route: "/".to_owned(),
                items: Vec::new(),
            },
        ];

        let err = Sidebar::from_raw(entries).unwrap_err();

        assert!(
            matches!(err, NavError::DuplicateRoute { .. }),
            "Expected DuplicateRoute, got {err:?}"
        );
    }

    #[test]
    fn test_from_raw_error_path_is_rooted_at_route() {
        let entries = vec![RawRouteEntry {
            route: "/docs/rainy/".to_owned(),
            items: vec![RawNode {
                text: "broken".to_owned(),
                ..RawNode::default()
            }],
        }];

        let err = Sidebar::from_raw(entries).unwrap_err();

        assert!(
            err.to_string().contains("/docs/rainy/ > broken"),
            "Unexpected path in: {err}"
        );
    }

    #[test]
    fn test_sidebar_round_trip_preserves_everything() {
        let mut builder = SidebarBuilder::new();
        builder
            .push_route(
                RouteEntry::new(
                    "/docs/rainy/",
                    vec![NavNode::Group(
                        crate::node::NavGroup::new(
                            "containers",
                            vec![
                                NavNode::leaf("any", "any"),
                                NavNode::leaf("optional", "optional"),
                            ],
                        )
                        .collapsed(true)
                        .with_base("/docs/rainy/containers/"),
                    )],
                )
                .unwrap(),
            )
            .unwrap();
        builder
            .push_route(entry("/changelog/", &["v1", "v2"]))
            .unwrap();
        let sidebar = builder.build();

        let json = serde_json::to_string(&sidebar).unwrap();
        let reparsed: Vec<RawRouteEntry> = serde_json::from_str(&json).unwrap();
        let rebuilt = Sidebar::from_raw(reparsed).unwrap();

        assert_eq!(rebuilt, sidebar);
    }

    #[test]
    fn test_sidebar_serializes_as_entry_array() {
        let mut builder = SidebarBuilder::new();
        builder.push_route(entry("/docs/", &["core"])).unwrap();
        let sidebar = builder.build();

        let json = serde_json::to_value(&sidebar).unwrap();

        assert!(json.is_array());
        assert_eq!(json[0]["route"], "/docs/");
        assert_eq!(json[0]["items"][0]["text"], "core");
    }
}
