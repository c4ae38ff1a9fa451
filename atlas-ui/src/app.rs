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

//! Application root: context providers, router and route switch.

use yew::prelude::*;
use yew_router::prelude::*;

use atlas_routing::ActiveEntity;

use crate::components::nav_bar::NavBar;
use crate::context::{load_username_from_storage, ActiveEntityCtx, Session, SessionCtx};
use crate::routing::{switch, Route};

#[function_component(App)]
pub fn app() -> Html {
    // A persisted username counts as a signed-in session until logout.
    let session = use_state(|| match load_username_from_storage() {
        Some(username) => Session::signed_in(username),
        None => Session::default(),
    });
    let active_entity = use_state(|| None::<ActiveEntity>);

    html! {
        <ContextProvider<SessionCtx> context={session.clone()}>
            <ContextProvider<ActiveEntityCtx> context={active_entity.clone()}>
                <BrowserRouter>
                    <NavBar />
                    <Switch<Route> render={switch} />
                </BrowserRouter>
            </ContextProvider<ActiveEntityCtx>>
        </ContextProvider<SessionCtx>>
    }
}
