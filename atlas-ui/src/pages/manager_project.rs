// SPDX-License-Identifier: MIT OR Apache-2.0

//! Per-project management page.

use yew::prelude::*;

use crate::components::route_link::RouteLink;
use crate::model::project_by_id;
use crate::pages::loader::PageRef;

#[derive(Properties, PartialEq, Clone)]
pub struct ManagerProjectProps {
    pub entity_id: String,
}

#[function_component(ManagerProject)]
pub fn manager_project(props: &ManagerProjectProps) -> Html {
    let Some(project) = project_by_id(&props.entity_id) else {
        return html! {
            <div class="manager-project-page">
                <h1>{ "Unknown project" }</h1>
                <p>{ format!("No project with id {}", props.entity_id) }</p>
            </div>
        };
    };

    let remaining = 100u32.saturating_sub(u32::from(project.progress_pct));

    html! {
        <div class="manager-project-page">
            <h1>{ format!("Manage: {}", project.name) }</h1>
            <ul class="manage-summary">
                <li>{ format!("Contributors: {}", project.contributors) }</li>
                <li>{ format!("Remaining work: {remaining}%") }</li>
            </ul>
            <RouteLink page={PageRef::ManagerStats} label="All campaign stats" />
        </div>
    }
}
