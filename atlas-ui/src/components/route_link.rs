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

//! Matcher-driven link component.
//!
//! Renders an anchor only when the route matcher says the target is
//! navigable for the current session; otherwise renders nothing. A path
//! resolution error (missing parameter) is logged and also renders
//! nothing — no validation is added on top of the matcher.

use std::collections::BTreeMap;
use yew::prelude::*;
use yew_router::prelude::*;

use atlas_routing::matched_link;

use crate::context::{session_context, ActiveEntityCtx, SessionCtx};
use crate::pages::loader::PageRef;
use crate::routing::{descriptor, Route};

#[derive(Properties, PartialEq, Clone)]
pub struct RouteLinkProps {
    pub page: PageRef,
    /// Path parameter values; explicit values win over the active entity.
    #[prop_or_default]
    pub attrs: BTreeMap<String, String>,
    /// Label override; defaults to the route title.
    #[prop_or_default]
    pub label: Option<AttrValue>,
    #[prop_or_default]
    pub classes: Classes,
}

#[function_component(RouteLink)]
pub fn route_link(props: &RouteLinkProps) -> Html {
    let session =
        use_context::<SessionCtx>().expect("Session context provider is missing – this is a bug");
    let active_entity = use_context::<ActiveEntityCtx>()
        .expect("Active entity context provider is missing – this is a bug");
    let navigator = use_navigator().expect("Navigator context missing");

    let ctx = session_context(&session, &active_entity);
    let route = descriptor(props.page);

    match matched_link(route, &ctx, &props.attrs, props.label.as_deref()) {
        Ok(Some(link)) => {
            let onclick = {
                let to = link.to.clone();
                Callback::from(move |e: MouseEvent| {
                    e.prevent_default();
                    if let Some(route) = Route::recognize(&to) {
                        navigator.push(&route);
                    }
                })
            };
            html! {
                <a class={props.classes.clone()} href={link.to.clone()} {onclick}>
                    { link.label }
                </a>
            }
        }
        Ok(None) => html! {},
        Err(e) => {
            log::error!("link for {} not generated: {e}", route.path());
            html! {}
        }
    }
}
