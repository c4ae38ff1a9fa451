/*
 * Copyright 2025 Atlas Dashboards Contributors
 *
 * Licensed under either of
 *
 * * Apache License, Version 2.0
 *   (http://www.apache.org/licenses/LICENSE-2.0)
 * * MIT license
 *   (http://opensource.org/licenses/MIT)
 *
 * at your option.
 */

//! Route definition wrapping.
//!
//! [`RouteDef`] is the raw, author-facing route definition. [`RouteDef::wrap`]
//! normalizes it into an immutable [`RouteDescriptor`], resolving a relative
//! path against an optional parent path. Pure data transformation, no I/O.

use crate::descriptor::{PageProps, PermissionCheck, RouteDescriptor, Visibility};

/// Join a child path segment onto a parent path.
///
/// Exactly one trailing slash is stripped from the parent if present, then
/// the two parts are concatenated. No slash is ever inserted and no interior
/// de-duplication happens: a child segment missing its leading slash comes
/// out visibly wrong (space-joined) so the misconfigured definition is
/// caught by eye instead of being silently repaired.
pub fn join_url_part(parent: &str, child: &str) -> String {
    let base = parent.strip_suffix('/').unwrap_or(parent);
    if child.starts_with('/') {
        format!("{base}{child}")
    } else {
        format!("{base} {child}")
    }
}

/// Raw route definition as written in a route table.
pub struct RouteDef<C> {
    pub path: String,
    pub title: String,
    pub visibility: Visibility,
    pub permission: PermissionCheck,
    pub navbar: bool,
    pub page: C,
    pub default_props: PageProps,
    /// Parent path this definition's `path` is relative to, if any.
    pub parent: Option<String>,
}

impl<C> RouteDef<C> {
    /// Minimal definition; everything else defaults to the most permissive
    /// choice and can be set with the builder methods below.
    pub fn new(path: impl Into<String>, title: impl Into<String>, page: C) -> Self {
        Self {
            path: path.into(),
            title: title.into(),
            visibility: Visibility::Any,
            permission: PermissionCheck::NoCheck,
            navbar: false,
            page,
            default_props: PageProps::default(),
            parent: None,
        }
    }

    pub fn visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = visibility;
        self
    }

    pub fn permission(mut self, permission: PermissionCheck) -> Self {
        self.permission = permission;
        self
    }

    pub fn navbar(mut self) -> Self {
        self.navbar = true;
        self
    }

    pub fn default_props(mut self, props: PageProps) -> Self {
        self.default_props = props;
        self
    }

    pub fn parent(mut self, parent: impl Into<String>) -> Self {
        self.parent = Some(parent.into());
        self
    }

    /// Normalize into an immutable descriptor, resolving `path` against
    /// `parent` when one is set.
    pub fn wrap(self) -> RouteDescriptor<C> {
        let path = match &self.parent {
            Some(parent) => join_url_part(parent, &self.path),
            None => self.path,
        };
        RouteDescriptor {
            path,
            title: self.title,
            visibility: self.visibility,
            permission: self.permission,
            navbar: self.navbar,
            page: self.page,
            default_props: self.default_props,
        }
    }
}
