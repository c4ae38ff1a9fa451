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

//! Primary navigation chrome.
//!
//! Iterates the navbar-visible entries of the route table; each entry goes
//! through the matcher via [`RouteLink`], so links the current session
//! cannot navigate to simply do not appear.

use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::route_link::RouteLink;
use crate::context::{clear_username_from_storage, ActiveEntityCtx, Session, SessionCtx};
use crate::routing::{route_table, Route};

#[function_component(NavBar)]
pub fn nav_bar() -> Html {
    let session =
        use_context::<SessionCtx>().expect("Session context provider is missing – this is a bug");
    let active_entity = use_context::<ActiveEntityCtx>()
        .expect("Active entity context provider is missing – this is a bug");
    let navigator = use_navigator().expect("Navigator context missing");

    let on_logout = {
        let session = session.clone();
        let active_entity = active_entity.clone();
        Callback::from(move |_: MouseEvent| {
            clear_username_from_storage();
            active_entity.set(None);
            session.set(Session::default());
            navigator.push(&Route::Home);
        })
    };

    html! {
        <div class="top-bar">
            <nav class="top-bar-links">
                {
                    for route_table().iter().filter(|route| route.navbar).map(|route| {
                        html! { <RouteLink page={route.page} classes={classes!("nav-link")} /> }
                    })
                }
            </nav>
            <div class="top-bar-session">
                {
                    if session.authenticated {
                        html! {
                            <>
                                <span class="username">
                                    { session.username.clone().unwrap_or_default() }
                                </span>
                                <button class="button logout-btn" onclick={on_logout}>
                                    { "Sign out" }
                                </button>
                            </>
                        }
                    } else {
                        html! {}
                    }
                }
            </div>
        </div>
    }
}
