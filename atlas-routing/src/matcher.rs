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

//! The route matcher.
//!
//! Given a descriptor, a session snapshot and a set of path attributes,
//! [`matched_link`] decides whether the route is navigable right now and,
//! if so, produces the concrete link target plus a display label.
//!
//! `Ok(None)` is the normal "do not render this link" outcome, not an
//! error. The only error case is a path parameter that ends up with no
//! value, which propagates from template resolution untouched.

use std::collections::BTreeMap;

use crate::descriptor::{RouteDescriptor, SessionContext, Visibility};
use crate::path::{self, PathError};

/// Path parameter name auto-filled from the active entity.
pub const ENTITY_PARAM: &str = "entity_id";

/// A navigable link produced by the matcher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchedLink {
    /// Concrete link target with all parameters substituted.
    pub to: String,
    /// Display label; the route title unless the caller overrode it.
    pub label: String,
}

/// Decide whether `route` is navigable for `session` and resolve the link.
///
/// Pure function of its inputs, re-evaluated on every call. The decision
/// procedure, in order:
///
/// 1. visibility gates against the authentication state;
/// 2. the skip flag is computed — set exactly when the link targets a
///    different entity than the active one, since permission checks are
///    scoped to the active entity;
/// 3. for auth-only routes a present permission predicate is invoked with
///    that flag (never short-circuited) and may veto the link;
/// 4. the target is resolved with the active entity's id as the default
///    `entity_id`, explicit attrs winning over it.
pub fn matched_link<C>(
    route: &RouteDescriptor<C>,
    session: &SessionContext,
    attrs: &BTreeMap<String, String>,
    label_override: Option<&str>,
) -> Result<Option<MatchedLink>, PathError> {
    match route.visibility {
        Visibility::RequiresNoAuth if session.authenticated => return Ok(None),
        Visibility::RequiresAuth if !session.authenticated => return Ok(None),
        _ => {}
    }

    let active = session.active_entity.as_ref();
    let skip_permission_check = match (active, attrs.get(ENTITY_PARAM)) {
        (Some(active), Some(target)) => active.id != *target,
        _ => false,
    };

    if route.visibility == Visibility::RequiresAuth
        && !route.permission.allows(active, skip_permission_check)
    {
        return Ok(None);
    }

    let mut params: BTreeMap<String, String> = BTreeMap::new();
    if let Some(active) = active {
        params.insert(ENTITY_PARAM.to_string(), active.id.clone());
    }
    for (k, v) in attrs {
        params.insert(k.clone(), v.clone());
    }

    let to = path::resolve(route.path(), &params)?;
    let label = label_override.unwrap_or(&route.title).to_string();
    Ok(Some(MatchedLink { to, label }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptor::{ActiveEntity, PermissionCheck, Visibility};
    use crate::wrap::RouteDef;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::Arc;

    fn attrs(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn session(authenticated: bool, entity: Option<&str>) -> SessionContext {
        SessionContext {
            authenticated,
            active_entity: entity.map(ActiveEntity::new),
        }
    }

    fn route(visibility: Visibility) -> RouteDescriptor<()> {
        RouteDef::new("/projects/:entity_id", "Project", ())
            .visibility(visibility)
            .wrap()
    }

    #[test]
    fn requires_no_auth_hidden_when_authenticated() {
        let login = RouteDef::new("/login", "Sign in", ())
            .visibility(Visibility::RequiresNoAuth)
            .wrap();
        let out = matched_link(&login, &session(true, None), &attrs(&[]), None).unwrap();
        assert_eq!(out, None);
        let out = matched_link(&login, &session(false, None), &attrs(&[]), None).unwrap();
        assert_eq!(
            out,
            Some(MatchedLink {
                to: "/login".to_string(),
                label: "Sign in".to_string(),
            })
        );
    }

    #[test]
    fn requires_auth_hidden_when_anonymous() {
        let out = matched_link(
            &route(Visibility::RequiresAuth),
            &session(false, Some("p1")),
            &attrs(&[]),
            None,
        )
        .unwrap();
        assert_eq!(out, None);
    }

    #[test]
    fn entity_id_defaults_from_active_entity() {
        let out = matched_link(
            &route(Visibility::Any),
            &session(true, Some("p1")),
            &attrs(&[]),
            None,
        )
        .unwrap()
        .unwrap();
        assert_eq!(out.to, "/projects/p1");
        assert_eq!(out.label, "Project");
    }

    #[test]
    fn explicit_attrs_override_active_entity() {
        let out = matched_link(
            &route(Visibility::Any),
            &session(true, Some("p1")),
            &attrs(&[("entity_id", "p2")]),
            None,
        )
        .unwrap()
        .unwrap();
        assert_eq!(out.to, "/projects/p2");
    }

    #[test]
    fn label_override_wins_over_title() {
        let out = matched_link(
            &route(Visibility::Any),
            &session(true, Some("p1")),
            &attrs(&[]),
            Some("Open project"),
        )
        .unwrap()
        .unwrap();
        assert_eq!(out.label, "Open project");
    }

    #[test]
    fn missing_param_propagates() {
        let err = matched_link(
            &route(Visibility::Any),
            &session(true, None),
            &attrs(&[]),
            None,
        )
        .unwrap_err();
        assert_eq!(err, PathError::MissingParam("entity_id".to_string()));
    }

    #[test]
    fn cross_entity_link_sets_skip_flag_but_still_invokes_predicate() {
        let invoked = Arc::new(AtomicBool::new(false));
        let seen_skip = Arc::new(AtomicBool::new(false));
        let permission = {
            let invoked = invoked.clone();
            let seen_skip = seen_skip.clone();
            PermissionCheck::check(move |_, skip| {
                invoked.store(true, Ordering::SeqCst);
                seen_skip.store(skip, Ordering::SeqCst);
                true
            })
        };
        let guarded = RouteDef::new("/projects/:entity_id", "Project", ())
            .visibility(Visibility::RequiresAuth)
            .permission(permission)
            .wrap();

        // Active entity A, link targets B: the flag is set and the
        // predicate is still called with it.
        let out = matched_link(
            &guarded,
            &session(true, Some("A")),
            &attrs(&[("entity_id", "B")]),
            None,
        )
        .unwrap()
        .unwrap();
        assert_eq!(out.to, "/projects/B");
        assert!(invoked.load(Ordering::SeqCst));
        assert!(seen_skip.load(Ordering::SeqCst));

        // Same entity: flag stays clear.
        let _ = matched_link(
            &guarded,
            &session(true, Some("A")),
            &attrs(&[("entity_id", "A")]),
            None,
        )
        .unwrap();
        assert!(!seen_skip.load(Ordering::SeqCst));
    }

    #[test]
    fn failing_predicate_hides_the_route() {
        let guarded = RouteDef::new("/manage/stats", "Stats", ())
            .visibility(Visibility::RequiresAuth)
            .permission(PermissionCheck::check(|entity, skip| {
                skip || entity.is_some()
            }))
            .wrap();
        let out = matched_link(&guarded, &session(true, None), &attrs(&[]), None).unwrap();
        assert_eq!(out, None);
        let out = matched_link(&guarded, &session(true, Some("p1")), &attrs(&[]), None).unwrap();
        assert!(out.is_some());
    }

    #[test]
    fn permission_is_not_consulted_for_public_routes() {
        let invoked = Arc::new(AtomicBool::new(false));
        let permission = {
            let invoked = invoked.clone();
            PermissionCheck::check(move |_, _| {
                invoked.store(true, Ordering::SeqCst);
                false
            })
        };
        let public = RouteDef::new("/about", "About", ())
            .visibility(Visibility::Any)
            .permission(permission)
            .wrap();
        let out = matched_link(&public, &session(true, None), &attrs(&[]), None).unwrap();
        assert!(out.is_some());
        assert!(!invoked.load(Ordering::SeqCst));
    }
}
