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

//! Routing core for the Atlas dashboards.
//!
//! This crate carries the framework-independent half of the navigation
//! mechanism: immutable route descriptors, the definition-to-descriptor
//! wrapper, the matcher that decides whether a route is navigable for a
//! given session, path-template resolution, and the query-string codec
//! used by the URL state sync hook in the UI crate.
//!
//! Nothing in here touches the DOM, so the whole crate is testable with
//! plain `cargo test`.

pub mod descriptor;
pub mod matcher;
pub mod path;
pub mod query;
pub mod wrap;

pub use descriptor::{
    ActiveEntity, PageProps, PermissionCheck, RouteDescriptor, SessionContext, Visibility,
};
pub use matcher::{matched_link, MatchedLink, ENTITY_PARAM};
pub use path::PathError;
pub use wrap::{join_url_part, RouteDef};
