// SPDX-License-Identifier: MIT OR Apache-2.0

//! Manager dashboard: aggregate numbers across all campaigns.

use yew::prelude::*;

use crate::model::all_projects;

#[function_component(ManagerStats)]
pub fn manager_stats() -> Html {
    let projects = all_projects();
    let total_contributors: u32 = projects.iter().map(|p| p.contributors).sum();
    let finished = projects.iter().filter(|p| p.progress_pct >= 95).count();

    html! {
        <div class="manager-stats-page">
            <h1>{ "Manager stats" }</h1>
            <ul class="stats-summary">
                <li>{ format!("{} active projects", projects.len()) }</li>
                <li>{ format!("{total_contributors} contributors overall") }</li>
                <li>{ format!("{finished} projects effectively complete") }</li>
            </ul>
        </div>
    }
}
