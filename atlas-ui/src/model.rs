// SPDX-License-Identifier: MIT OR Apache-2.0

//! Project model and the bundled demo dataset.
//!
//! The dashboards render against a static dataset shipped with the bundle;
//! the types are serde-derived so a backend listing endpoint can replace
//! the embedded JSON without touching the pages.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    pub name: String,
    pub topic: String,
    pub contributors: u32,
    pub progress_pct: u8,
}

static PROJECTS: Lazy<Vec<Project>> = Lazy::new(|| {
    serde_json::from_str(include_str!("demo_projects.json")).expect("bundled project data parses")
});

pub fn all_projects() -> &'static [Project] {
    &PROJECTS
}

pub fn project_by_id(id: &str) -> Option<&'static Project> {
    PROJECTS.iter().find(|p| p.id == id)
}
