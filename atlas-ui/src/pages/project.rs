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

//! Project detail page.
//!
//! Opening a project makes it the active entity, which from then on
//! defaults the `entity_id` parameter of generated links and scopes the
//! manager permission checks.

use std::collections::BTreeMap;
use yew::prelude::*;

use atlas_routing::ActiveEntity;

use crate::components::route_link::RouteLink;
use crate::context::ActiveEntityCtx;
use crate::model::project_by_id;
use crate::pages::loader::PageRef;

#[derive(Properties, PartialEq, Clone)]
pub struct ProjectPageProps {
    pub entity_id: String,
}

#[function_component(ProjectPage)]
pub fn project_page(props: &ProjectPageProps) -> Html {
    let active_entity = use_context::<ActiveEntityCtx>()
        .expect("Active entity context provider is missing – this is a bug");

    {
        let active_entity = active_entity.clone();
        use_effect_with(props.entity_id.clone(), move |entity_id| {
            active_entity.set(Some(ActiveEntity::new(entity_id.clone())));
            || ()
        });
    }

    let Some(project) = project_by_id(&props.entity_id) else {
        return html! {
            <div class="project-page">
                <h1>{ "Unknown project" }</h1>
                <p>{ format!("No project with id {}", props.entity_id) }</p>
            </div>
        };
    };

    let manage_attrs: BTreeMap<String, String> =
        [("entity_id".to_string(), project.id.clone())]
            .into_iter()
            .collect();

    html! {
        <div class="project-page">
            <h1>{ &project.name }</h1>
            <p class="project-topic">{ format!("Topic: {}", project.topic) }</p>
            <p class="project-progress">
                { format!("{}% mapped by {} contributors", project.progress_pct, project.contributors) }
            </p>
            <div class="project-actions">
                <RouteLink page={PageRef::Projects} label="Back to projects" />
                <RouteLink
                    page={PageRef::ManagerProject}
                    attrs={manage_attrs}
                    label="Manage this project"
                />
            </div>
        </div>
    }
}
