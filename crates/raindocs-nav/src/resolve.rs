//! Link resolution against enclosing base paths.
//!
//! A leaf link is either site-absolute (starts with `/`) or relative to
//! the nearest enclosing group that declares a `base`. Resolution rewrites
//! every relative link to its absolute form; a relative link with no
//! enclosing base fails the build rather than reach the rendering
//! framework as a dead menu entry.

use crate::error::{NavError, NodePath};
use crate::node::{NavGroup, NavLeaf, NavNode};
use crate::route::{RouteEntry, Sidebar};

/// Compute the effective link for a leaf.
///
/// `ancestor_bases` holds the bases of enclosing groups that declare one,
/// outermost first; the innermost wins and replaces, never concatenates
/// with, the outer ones. An already-absolute link passes through
/// untouched, which makes resolution idempotent. Returns `None` for a
/// relative link with no enclosing base.
#[must_use]
pub fn resolve_link<S: AsRef<str>>(link: &str, ancestor_bases: &[S]) -> Option<String> {
    if link.starts_with('/') {
        return Some(link.to_owned());
    }
    let base = ancestor_bases.last()?.as_ref();
    if base.ends_with('/') {
        Some(format!("{base}{link}"))
    } else {
        Some(format!("{base}/{link}"))
    }
}

impl Sidebar {
    /// Copy of the sidebar with every leaf link rewritten to its absolute
    /// form.
    ///
    /// Group bases are kept, so resolving an already-resolved sidebar
    /// returns an identical value.
    ///
    /// # Errors
    ///
    /// Returns [`NavError::UnresolvableLink`] for a relative link with no
    /// enclosing base, or [`NavError::RelativeBase`] for a group base that
    /// does not start with `/`. Both name the offending node's label path.
    pub fn resolved(&self) -> Result<Self, NavError> {
        let routes = self
            .routes()
            .iter()
            .map(|entry| {
                let origin = NodePath::root(entry.route());
                let items = resolve_items(entry.items(), &origin, &mut Vec::new())?;
                Ok(RouteEntry::from_parts(entry.route().to_owned(), items))
            })
            .collect::<Result<Vec<_>, NavError>>()?;
        Ok(Self::from_routes(routes))
    }
}

/// Resolve one sibling list, tracking the enclosing base stack.
fn resolve_items(
    items: &[NavNode],
    parent: &NodePath,
    bases: &mut Vec<String>,
) -> Result<Vec<NavNode>, NavError> {
    items
        .iter()
        .enumerate()
        .map(|(index, node)| {
            let path = parent.child(node.text(), index);
            match node {
                NavNode::Leaf(leaf) => {
                    let link = resolve_link(&leaf.link, bases).ok_or_else(|| {
                        NavError::UnresolvableLink {
                            path: path.clone(),
                            link: leaf.link.clone(),
                        }
                    })?;
                    Ok(NavNode::Leaf(NavLeaf {
                        text: leaf.text.clone(),
                        link,
                    }))
                }
                NavNode::Group(group) => {
                    let pushed = match &group.base {
                        Some(base) if !base.starts_with('/') => {
                            return Err(NavError::RelativeBase {
                                path,
                                base: base.clone(),
                            });
                        }
                        Some(base) => {
                            bases.push(base.clone());
                            true
                        }
                        None => false,
                    };
                    let items = resolve_items(&group.items, &path, bases);
                    if pushed {
                        bases.pop();
                    }
                    let items = items?;
                    Ok(NavNode::Group(NavGroup {
                        text: group.text.clone(),
                        items,
                        collapsed: group.collapsed,
                        base: group.base.clone(),
                    }))
                }
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::route::SidebarBuilder;
    use pretty_assertions::assert_eq;

    fn sidebar_with(items: Vec<NavNode>) -> Sidebar {
        let mut builder = SidebarBuilder::new();
        builder
            .push_route(RouteEntry::new("/docs/rainy/", items).unwrap())
            .unwrap();
        builder.build()
    }

    // resolve_link

    #[test]
    fn test_absolute_link_passes_through() {
        let resolved = resolve_link("/docs/rainy/core", &["/ignored/"]).unwrap();

        assert_eq!(resolved, "/docs/rainy/core");
    }

    #[test]
    fn test_relative_link_joins_enclosing_base() {
        let resolved = resolve_link("y", &["/docs/x/"]).unwrap();

        assert_eq!(resolved, "/docs/x/y");
    }

    #[test]
    fn test_innermost_base_wins() {
        let resolved = resolve_link("c", &["/a/", "/a/b/"]).unwrap();

        assert_eq!(resolved, "/a/b/c");
    }

    #[test]
    fn test_base_without_trailing_slash_gains_separator() {
        let resolved = resolve_link("iterator", &["/docs/rainy/utility"]).unwrap();

        assert_eq!(resolved, "/docs/rainy/utility/iterator");
    }

    #[test]
    fn test_relative_link_without_base_is_unresolvable() {
        assert_eq!(resolve_link("core", &[] as &[&str]), None);
    }

    #[test]
    fn test_resolve_is_idempotent() {
        let once = resolve_link("y", &["/docs/x/"]).unwrap();
        let twice = resolve_link(&once, &["/docs/x/"]).unwrap();

        assert_eq!(twice, once);
    }

    // Sidebar::resolved

    #[test]
    fn test_resolved_rewrites_relative_links_under_base() {
        let sidebar = sidebar_with(vec![NavNode::Group(
            NavGroup::new(
                "containers",
                vec![
                    NavNode::leaf("any", "any"),
                    NavNode::leaf("optional", "optional"),
                ],
            )
            .with_base("/docs/rainy/containers/"),
        )]);

        let resolved = sidebar.resolved().unwrap();

        let group = resolved.routes()[0].items()[0].as_group().unwrap();
        let links: Vec<_> = group
            .items
            .iter()
            .map(|node| node.as_leaf().unwrap().link.as_str())
            .collect();
        assert_eq!(
            links,
            vec!["/docs/rainy/containers/any", "/docs/rainy/containers/optional"]
        );
    }

    #[test]
    fn test_resolved_inner_base_shadows_outer() {
        let inner = NavGroup::new("b", vec![NavNode::leaf("c", "c")]).with_base("/a/b/");
        let outer = NavGroup::new("a", vec![inner.into()]).with_base("/a/");
        let sidebar = sidebar_with(vec![outer.into()]);

        let resolved = sidebar.resolved().unwrap();

        let outer = resolved.routes()[0].items()[0].as_group().unwrap();
        let inner = outer.items[0].as_group().unwrap();
        assert_eq!(inner.items[0].as_leaf().unwrap().link, "/a/b/c");
    }

    #[test]
    fn test_resolved_base_stack_pops_after_group() {
        let scoped = NavGroup::new("scoped", vec![NavNode::leaf("in", "in")]).with_base("/inner/");
        let outer = NavGroup::new(
            "outer",
            vec![scoped.into(), NavNode::leaf("after", "after")],
        )
        .with_base("/outer/");
        let sidebar = sidebar_with(vec![outer.into()]);

        let resolved = sidebar.resolved().unwrap();

        let outer = resolved.routes()[0].items()[0].as_group().unwrap();
        let scoped = outer.items[0].as_group().unwrap();
        assert_eq!(scoped.items[0].as_leaf().unwrap().link, "/inner/in");
        assert_eq!(outer.items[1].as_leaf().unwrap().link, "/outer/after");
    }

    #[test]
    fn test_resolved_sibling_group_does_not_leak_base() {
        let scoped = NavGroup::new("scoped", vec![NavNode::leaf("in", "in")]).with_base("/inner/");
        let plain = NavNode::group("plain", vec![NavNode::leaf("out", "/out")]);
        let sidebar = sidebar_with(vec![scoped.into(), plain]);

        let resolved = sidebar.resolved().unwrap();

        let plain = resolved.routes()[0].items()[1].as_group().unwrap();
        assert_eq!(plain.items[0].as_leaf().unwrap().link, "/out");
    }

    #[test]
    fn test_resolved_absolute_link_ignores_base() {
        let group = NavGroup::new("group", vec![NavNode::leaf("abs", "/elsewhere")])
            .with_base("/docs/rainy/");
        let sidebar = sidebar_with(vec![group.into()]);

        let resolved = sidebar.resolved().unwrap();

        let group = resolved.routes()[0].items()[0].as_group().unwrap();
        assert_eq!(group.items[0].as_leaf().unwrap().link, "/elsewhere");
    }

    #[test]
    fn test_resolved_fails_on_relative_link_without_base() {
        let sidebar = sidebar_with(vec![NavNode::leaf("core", "core")]);

        let err = sidebar.resolved().unwrap_err();

        assert!(
            matches!(err, NavError::UnresolvableLink { .. }),
            "Expected UnresolvableLink, got {err:?}"
        );
        assert!(err.to_string().contains("/docs/rainy/ > core"));
    }

    #[test]
    fn test_resolved_fails_on_relative_base() {
        let group = NavGroup::new("group", vec![NavNode::leaf("x", "x")]).with_base("relative/");
        let sidebar = sidebar_with(vec![group.into()]);

        let err = sidebar.resolved().unwrap_err();

        assert!(
            matches!(err, NavError::RelativeBase { .. }),
            "Expected RelativeBase, got {err:?}"
        );
    }

    #[test]
    fn test_resolved_is_idempotent_on_trees() {
        let group = NavGroup::new("containers", vec![NavNode::leaf("any", "any")])
            .collapsed(true)
            .with_base("/docs/rainy/containers/");
        let sidebar = sidebar_with(vec![group.into()]);

        let once = sidebar.resolved().unwrap();
        let twice = once.resolved().unwrap();

        assert_eq!(twice, once);
    }

    #[test]
    fn test_resolved_preserves_order_and_metadata() {
        let group = NavGroup::new(
            "text",
            vec![
                NavNode::leaf("char_traits", "char-traits"),
                NavNode::leaf("format_wrapper", "format-wrapper"),
            ],
        )
        .collapsed(true)
        .with_base("/docs/rainy/text/");
        let sidebar = sidebar_with(vec![group.into()]);

        let resolved = sidebar.resolved().unwrap();

        let group = resolved.routes()[0].items()[0].as_group().unwrap();
        assert!(group.collapsed);
        assert_eq!(group.base.as_deref(), Some("/docs/rainy/text/"));
        let texts: Vec<_> = group.items.iter().map(NavNode::text).collect();
        assert_eq!(texts, vec!["char_traits", "format_wrapper"]);
    }
}
