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

//! Community dashboard: the project list.
//!
//! The search box feeds the filter through the trailing debounce so
//! keystrokes inside the quiescence window cause exactly one downstream
//! update. Page number and sort order are mirrored into the query string
//! (replace semantics), so the view is shareable and reloads land on the
//! same slice.

use std::collections::BTreeMap;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::components::route_link::RouteLink;
use crate::constants::{DEBOUNCE_MS, PAGE_SIZE};
use crate::hooks::{use_debounced_value, use_query_state};
use crate::model::{all_projects, Project};
use crate::pages::loader::PageRef;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Name,
    Contributors,
}

impl SortKey {
    fn as_query_value(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Contributors => "contributors",
        }
    }

    fn from_query_value(value: &str) -> Self {
        match value {
            "contributors" => Self::Contributors,
            _ => Self::Name,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListParams {
    pub page: usize,
    pub sort: SortKey,
}

fn decode_params(pairs: &[(String, String)]) -> ListParams {
    let find = |key: &str| pairs.iter().find(|(k, _)| k == key).map(|(_, v)| v.as_str());
    ListParams {
        page: find("page").and_then(|v| v.parse().ok()).unwrap_or(1),
        sort: find("sort").map(SortKey::from_query_value).unwrap_or(SortKey::Name),
    }
}

fn encode_params(params: &ListParams) -> Vec<(String, Option<String>)> {
    vec![
        ("page".to_string(), Some(params.page.to_string())),
        (
            "sort".to_string(),
            Some(params.sort.as_query_value().to_string()),
        ),
    ]
}

fn visible_projects(filter: &str, sort: SortKey, page: usize) -> (Vec<&'static Project>, usize) {
    let filter = filter.to_lowercase();
    let mut projects: Vec<&Project> = all_projects()
        .iter()
        .filter(|p| {
            filter.is_empty()
                || p.name.to_lowercase().contains(&filter)
                || p.topic.to_lowercase().contains(&filter)
        })
        .collect();
    match sort {
        SortKey::Name => projects.sort_by(|a, b| a.name.cmp(&b.name)),
        SortKey::Contributors => projects.sort_by(|a, b| b.contributors.cmp(&a.contributors)),
    }
    let pages = projects.len().div_ceil(PAGE_SIZE).max(1);
    let page = page.clamp(1, pages);
    let start = (page - 1) * PAGE_SIZE;
    let slice = projects
        .into_iter()
        .skip(start)
        .take(PAGE_SIZE)
        .collect();
    (slice, pages)
}

#[function_component(Projects)]
pub fn projects() -> Html {
    let search = use_state(String::new);
    let filter = use_debounced_value((*search).clone(), DEBOUNCE_MS);
    let (params, set_params) = use_query_state(decode_params, encode_params);

    let oninput = {
        let search = search.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            search.set(input.value());
        })
    };

    let (slice, total_pages) = visible_projects(&filter, params.sort, params.page);

    // Changing the sort resets to the first page.
    let on_sort = {
        let set_params = set_params.clone();
        Callback::from(move |sort: SortKey| {
            set_params.emit(ListParams { page: 1, sort });
        })
    };

    let prev = {
        let params = params.clone();
        let set_params = set_params.clone();
        Callback::from(move |_: MouseEvent| {
            set_params.emit(ListParams {
                page: params.page.saturating_sub(1).max(1),
                sort: params.sort,
            });
        })
    };
    let next = {
        let params = params.clone();
        let set_params = set_params.clone();
        Callback::from(move |_: MouseEvent| {
            set_params.emit(ListParams {
                page: (params.page + 1).min(total_pages),
                sort: params.sort,
            });
        })
    };

    html! {
        <div class="projects-page">
            <h1>{ "Projects" }</h1>
            <div class="projects-controls">
                <input
                    id="project-search"
                    type="text"
                    placeholder="Filter by name or topic"
                    {oninput}
                />
                <button
                    class="sort-by-name"
                    onclick={on_sort.reform(|_| SortKey::Name)}
                >
                    { "Sort by name" }
                </button>
                <button
                    class="sort-by-contributors"
                    onclick={on_sort.reform(|_| SortKey::Contributors)}
                >
                    { "Sort by contributors" }
                </button>
            </div>
            <ul class="projects-list">
                {
                    for slice.iter().map(|project| {
                        let attrs: BTreeMap<String, String> =
                            [("entity_id".to_string(), project.id.clone())]
                                .into_iter()
                                .collect();
                        html! {
                            <li key={project.id.clone()}>
                                <RouteLink
                                    page={PageRef::Project}
                                    {attrs}
                                    label={project.name.clone()}
                                />
                                <span class="project-meta">
                                    { format!("{} · {} contributors · {}% mapped",
                                        project.topic, project.contributors, project.progress_pct) }
                                </span>
                            </li>
                        }
                    })
                }
            </ul>
            <div class="projects-pager">
                <button class="pager-prev" disabled={params.page <= 1} onclick={prev}>
                    { "Previous" }
                </button>
                <span>{ format!("Page {} of {}", params.page.min(total_pages), total_pages) }</span>
                <button
                    class="pager-next"
                    disabled={params.page >= total_pages}
                    onclick={next}
                >
                    { "Next" }
                </button>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::all_projects;

    #[test]
    fn dataset_spans_more_than_one_page() {
        assert!(all_projects().len() > PAGE_SIZE, "second page unreachable");
    }

    #[test]
    fn empty_filter_result_still_has_one_page() {
        let (slice, pages) = visible_projects("zzz-no-such-project", SortKey::Name, 1);
        assert!(slice.is_empty());
        assert_eq!(pages, 1);
    }

    #[test]
    fn filter_matches_topic_case_insensitively() {
        let (slice, _) = visible_projects("FLOOD", SortKey::Name, 1);
        assert!(!slice.is_empty());
        assert!(slice
            .iter()
            .all(|p| p.topic.contains("flood") || p.name.to_lowercase().contains("flood")));
    }

    #[test]
    fn sort_by_contributors_is_descending() {
        let (slice, _) = visible_projects("", SortKey::Contributors, 1);
        for pair in slice.windows(2) {
            assert!(pair[0].contributors >= pair[1].contributors);
        }
    }

    #[test]
    fn pagination_slices_and_counts_pages() {
        let total = all_projects().len();
        let (first, pages) = visible_projects("", SortKey::Name, 1);
        assert_eq!(first.len(), PAGE_SIZE);
        assert_eq!(pages, total.div_ceil(PAGE_SIZE));
        let (last, _) = visible_projects("", SortKey::Name, pages);
        assert_eq!(last.len(), total - (pages - 1) * PAGE_SIZE);
    }

    #[test]
    fn out_of_range_page_clamps_to_last() {
        let (_, pages) = visible_projects("", SortKey::Name, 1);
        let (clamped, _) = visible_projects("", SortKey::Name, 99);
        let (last, _) = visible_projects("", SortKey::Name, pages);
        assert_eq!(clamped, last);
        // Page 0 clamps up to the first page.
        let (zero, _) = visible_projects("", SortKey::Name, 0);
        let (first, _) = visible_projects("", SortKey::Name, 1);
        assert_eq!(zero, first);
    }
}
