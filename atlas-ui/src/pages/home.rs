// SPDX-License-Identifier: MIT OR Apache-2.0

use yew::prelude::*;

use crate::components::route_link::RouteLink;
use crate::pages::loader::PageRef;

#[function_component(Home)]
pub fn home() -> Html {
    html! {
        <div class="hero-container">
            <div>
                <h1>{ "Atlas" }</h1>
                <p>{ "Community mapping dashboards: follow project progress, \
                      contribute, and manage your campaigns." }</p>
            </div>
            <div class="hero-links">
                <RouteLink page={PageRef::Projects} label="Browse projects" />
                <RouteLink page={PageRef::ManagerStats} label="Manager dashboard" />
                <RouteLink page={PageRef::Login} />
            </div>
        </div>
    }
}
