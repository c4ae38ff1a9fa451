// Copyright 2025 Atlas Dashboards Contributors
// Licensed under MIT OR Apache-2.0
//
// Integration tests for the URL state sync hook: replace semantics and
// preservation of unrelated query keys.

#![cfg(all(target_arch = "wasm32", not(target_os = "wasi")))]

mod support;

use std::time::Duration;

use support::{cleanup, create_mount_point, current_query, history_length, set_query};
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use yew::platform::time::sleep;
use yew::prelude::*;

use atlas_ui::hooks::use_query_state;

wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

#[derive(Debug, Clone, PartialEq, Eq)]
struct PageState {
    page: u32,
}

#[function_component(QueryHarness)]
fn query_harness() -> Html {
    let (state, set_state) = use_query_state(
        |pairs| PageState {
            page: pairs
                .iter()
                .find(|(k, _)| k == "page")
                .and_then(|(_, v)| v.parse().ok())
                .unwrap_or(1),
        },
        |state: &PageState| vec![("page".to_string(), Some(state.page.to_string()))],
    );

    let onclick = set_state.reform(|_: MouseEvent| PageState { page: 2 });

    html! {
        <div>
            <span id="page">{ state.page }</span>
            <button id="advance" {onclick}>{ "advance" }</button>
        </div>
    }
}

fn click(mount: &web_sys::Element, selector: &str) {
    mount
        .query_selector(selector)
        .unwrap()
        .unwrap()
        .dyn_into::<web_sys::HtmlElement>()
        .unwrap()
        .click();
}

#[wasm_bindgen_test]
async fn initial_state_decodes_from_query() {
    set_query("page=5");

    let mount = create_mount_point();
    yew::Renderer::<QueryHarness>::with_root(mount.clone()).render();
    sleep(Duration::ZERO).await;

    let page = mount
        .query_selector("#page")
        .unwrap()
        .unwrap()
        .text_content()
        .unwrap();
    assert_eq!(page, "5");

    cleanup(&mount);
    set_query("");
}

#[wasm_bindgen_test]
async fn setter_merges_and_replaces() {
    set_query("sort=name");
    let history_before = history_length();

    let mount = create_mount_point();
    yew::Renderer::<QueryHarness>::with_root(mount.clone()).render();
    sleep(Duration::ZERO).await;

    click(&mount, "#advance");
    sleep(Duration::ZERO).await;

    let query = current_query();
    assert!(query.contains("page=2"), "updated key missing: {query}");
    assert!(query.contains("sort=name"), "existing key dropped: {query}");
    assert_eq!(
        history_length(),
        history_before,
        "setter must replace, not push"
    );

    let page = mount
        .query_selector("#page")
        .unwrap()
        .unwrap()
        .text_content()
        .unwrap();
    assert_eq!(page, "2", "state should reflect the update");

    cleanup(&mount);
    set_query("");
}
