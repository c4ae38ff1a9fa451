// SPDX-License-Identifier: MIT OR Apache-2.0

use yew::prelude::*;

use crate::components::route_link::RouteLink;
use crate::pages::loader::PageRef;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div class="not-found-page">
            <h1>{ "404" }</h1>
            <RouteLink page={PageRef::Home} label="Back to the start" />
        </div>
    }
}
