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

//! Application route definitions.
//!
//! Two views of the same navigation structure live here. The [`Route`]
//! enum is what `yew-router` matches the current URL against; the route
//! table is the descriptor form the matcher, the navbar and the page
//! renderer consume. The manager pages are defined relative to a shared
//! `/manage` parent and composed at table construction time.
//!
//! Paths must stay unique across the table — nothing enforces it, and a
//! duplicate makes matching ambiguous.

use enum_display::EnumDisplay;
use once_cell::sync::Lazy;
use yew::prelude::*;
use yew_router::prelude::*;

use atlas_routing::{PageProps, PermissionCheck, RouteDef, RouteDescriptor, Visibility};

use crate::components::page_view::PageView;
use crate::pages::loader::PageRef;

#[derive(Clone, Routable, PartialEq, Debug, EnumDisplay)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/login")]
    Login,
    #[at("/projects")]
    Projects,
    #[at("/projects/:entity_id")]
    Project { entity_id: String },
    #[at("/manage/stats")]
    ManagerStats,
    #[at("/manage/projects/:entity_id")]
    ManagerProject { entity_id: String },
    #[not_found]
    #[at("/404")]
    NotFound,
}

/// Descriptor type used across the UI: page handles are [`PageRef`]s.
pub type AppRoute = RouteDescriptor<PageRef>;

const MANAGE_PARENT: &str = "/manage";

static ROUTE_TABLE: Lazy<Vec<AppRoute>> = Lazy::new(|| {
    vec![
        RouteDef::new("/", "Atlas", PageRef::Home).navbar().wrap(),
        RouteDef::new("/login", "Sign in", PageRef::Login)
            .visibility(Visibility::RequiresNoAuth)
            .navbar()
            .wrap(),
        RouteDef::new("/projects", "Projects", PageRef::Projects)
            .navbar()
            .wrap(),
        RouteDef::new("/projects/:entity_id", "Project", PageRef::Project).wrap(),
        RouteDef::new("/stats", "Manager stats", PageRef::ManagerStats)
            .parent(MANAGE_PARENT)
            .visibility(Visibility::RequiresAuth)
            .permission(PermissionCheck::check(|entity, skip| {
                // Stats are scoped to the selected project; a cross-entity
                // link (skip set) is allowed through unchanged.
                skip || entity.is_some()
            }))
            .navbar()
            .wrap(),
        RouteDef::new("/projects/:entity_id", "Manage project", PageRef::ManagerProject)
            .parent(MANAGE_PARENT)
            .visibility(Visibility::RequiresAuth)
            .permission(PermissionCheck::check(|entity, skip| {
                skip || entity.is_some()
            }))
            .wrap(),
        RouteDef::new("*", "Not found", PageRef::NotFound).wrap(),
    ]
});

/// The full route table, built once at startup.
pub fn route_table() -> &'static [AppRoute] {
    &ROUTE_TABLE
}

/// Descriptor for a given page.
pub fn descriptor(page: PageRef) -> &'static AppRoute {
    ROUTE_TABLE
        .iter()
        .find(|route| route.page == page)
        .expect("every page has a route table entry")
}

/// Map the matched [`Route`] to its page, rendered through [`PageView`].
pub fn switch(route: Route) -> Html {
    match route {
        Route::Home => page(PageRef::Home, PageProps::default()),
        Route::Login => page(PageRef::Login, PageProps::default()),
        Route::Projects => page(PageRef::Projects, PageProps::default()),
        Route::Project { entity_id } => page(
            PageRef::Project,
            PageProps::new().with("entity_id", entity_id),
        ),
        Route::ManagerStats => page(PageRef::ManagerStats, PageProps::default()),
        Route::ManagerProject { entity_id } => page(
            PageRef::ManagerProject,
            PageProps::new().with("entity_id", entity_id),
        ),
        Route::NotFound => page(PageRef::NotFound, PageProps::default()),
    }
}

fn page(page: PageRef, overrides: PageProps) -> Html {
    let route = descriptor(page);
    // Keyed per route so navigating remounts the renderer; its resolution
    // and failure state belong to one page only.
    html! { <PageView key={route.path().to_string()} {route} {overrides} /> }
}
