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

//! Page handles and their asynchronous resolution.
//!
//! A [`PageRef`] is the lazily-resolved page reference a route descriptor
//! carries. Resolution is an explicit async step with a visible pending
//! state in the renderer; today every page ships in this bundle so the
//! future completes immediately, but callers only ever see the async seam,
//! so a page can move to dynamic loading without touching them.

use anyhow::{anyhow, Result};
use std::rc::Rc;
use yew::prelude::*;

use atlas_routing::PageProps;

use crate::pages::home::Home;
use crate::pages::login::Login;
use crate::pages::manager_project::ManagerProject;
use crate::pages::manager_stats::ManagerStats;
use crate::pages::not_found::NotFound;
use crate::pages::project::ProjectPage;
use crate::pages::projects::Projects;

/// Reference to a page implementation, resolved on demand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageRef {
    Home,
    Login,
    Projects,
    Project,
    ManagerStats,
    ManagerProject,
    NotFound,
}

type RenderFn = Rc<dyn Fn(&PageProps) -> Result<Html>>;

/// A resolved page: a render function over the merged props.
///
/// Rendering returns `Err` instead of panicking when the props it needs
/// are missing, so the renderer's failure containment can take over.
#[derive(Clone)]
pub struct ResolvedPage {
    render: RenderFn,
}

impl ResolvedPage {
    fn new(render: impl Fn(&PageProps) -> Result<Html> + 'static) -> Self {
        Self {
            render: Rc::new(render),
        }
    }

    pub fn render(&self, props: &PageProps) -> Result<Html> {
        (self.render)(props)
    }
}

impl PartialEq for ResolvedPage {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.render, &other.render)
    }
}

fn required<'p>(props: &'p PageProps, key: &str) -> Result<&'p str> {
    props
        .get(key)
        .ok_or_else(|| anyhow!("page requires the `{key}` prop"))
}

impl PageRef {
    /// Resolve the page implementation this handle refers to.
    pub async fn resolve(self) -> ResolvedPage {
        match self {
            Self::Home => ResolvedPage::new(|_| Ok(html! { <Home /> })),
            Self::Login => ResolvedPage::new(|_| Ok(html! { <Login /> })),
            Self::Projects => ResolvedPage::new(|_| Ok(html! { <Projects /> })),
            Self::Project => ResolvedPage::new(|props| {
                let entity_id = required(props, "entity_id")?.to_string();
                Ok(html! { <ProjectPage {entity_id} /> })
            }),
            Self::ManagerStats => ResolvedPage::new(|_| Ok(html! { <ManagerStats /> })),
            Self::ManagerProject => ResolvedPage::new(|props| {
                let entity_id = required(props, "entity_id")?.to_string();
                Ok(html! { <ManagerProject {entity_id} /> })
            }),
            Self::NotFound => ResolvedPage::new(|_| Ok(html! { <NotFound /> })),
        }
    }
}
