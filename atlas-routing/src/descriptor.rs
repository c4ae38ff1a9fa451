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

//! Route descriptors and the session context they are matched against.
//!
//! A [`RouteDescriptor`] is a normalized, immutable record describing one
//! navigable page. Descriptors are built once at startup (via
//! [`crate::wrap::RouteDef::wrap`]) and never mutated afterwards. The
//! matcher reads them together with a [`SessionContext`] that the caller
//! passes in explicitly — there is no ambient session state in this crate.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

/// Authentication-state precondition for a route being reachable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    /// Only reachable with a valid session.
    RequiresAuth,
    /// Only reachable without a session (login and friends).
    RequiresNoAuth,
    /// Reachable either way.
    Any,
}

/// The currently selected domain object (e.g. a project), held in
/// session-scoped state by the UI and used to default path parameters and
/// to scope permission checks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActiveEntity {
    pub id: String,
}

impl ActiveEntity {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}

/// Snapshot of the session state a matching decision is made against.
///
/// Built fresh by the caller for every match; the matcher never caches it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SessionContext {
    pub authenticated: bool,
    pub active_entity: Option<ActiveEntity>,
}

/// Signature of a route permission predicate.
///
/// The first argument is the active entity (if any), the second is the
/// skip flag computed by the matcher when the link targets a different
/// entity than the active one. The predicate is always invoked when
/// present, skip flag included, so the bypass decision stays inside the
/// predicate itself.
pub type PermissionFn = Arc<dyn Fn(Option<&ActiveEntity>, bool) -> bool + Send + Sync>;

/// Optional permission capability on a route, evaluated uniformly.
#[derive(Clone)]
pub enum PermissionCheck {
    /// Always permitted.
    NoCheck,
    /// Permitted iff the predicate returns `true`.
    Check(PermissionFn),
}

impl PermissionCheck {
    /// Wrap a predicate closure.
    pub fn check<F>(predicate: F) -> Self
    where
        F: Fn(Option<&ActiveEntity>, bool) -> bool + Send + Sync + 'static,
    {
        Self::Check(Arc::new(predicate))
    }

    /// Evaluate the capability. `NoCheck` is always permitted; `Check`
    /// invokes its predicate unconditionally.
    pub fn allows(&self, active_entity: Option<&ActiveEntity>, skip: bool) -> bool {
        match self {
            Self::NoCheck => true,
            Self::Check(predicate) => predicate(active_entity, skip),
        }
    }
}

impl fmt::Debug for PermissionCheck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoCheck => write!(f, "NoCheck"),
            Self::Check(_) => write!(f, "Check(..)"),
        }
    }
}

impl PartialEq for PermissionCheck {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::NoCheck, Self::NoCheck) => true,
            (Self::Check(a), Self::Check(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}

/// Default props handed to a page at render time, merged with whatever
/// overrides the caller supplies (override keys win).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PageProps(BTreeMap<String, String>);

impl PageProps {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Merge `overrides` over `self`; keys in `overrides` take precedence.
    pub fn merged(&self, overrides: &PageProps) -> PageProps {
        let mut out = self.0.clone();
        for (k, v) in &overrides.0 {
            out.insert(k.clone(), v.clone());
        }
        PageProps(out)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for PageProps {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

/// Normalized, immutable record describing one navigable page.
///
/// `C` is the page handle type — the UI crate instantiates it with its
/// lazily-resolved page reference so this crate stays wasm-free.
///
/// Uniqueness of `path` across a route table is a caller responsibility;
/// duplicate paths make route matching ambiguous and nothing here detects
/// that.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteDescriptor<C> {
    pub(crate) path: String,
    pub title: String,
    pub visibility: Visibility,
    pub permission: PermissionCheck,
    /// Whether the route appears in primary navigation chrome.
    pub navbar: bool,
    pub page: C,
    pub default_props: PageProps,
}

impl<C> RouteDescriptor<C> {
    /// The effective URL path template. Fixed at construction time.
    pub fn path(&self) -> &str {
        &self.path
    }
}
