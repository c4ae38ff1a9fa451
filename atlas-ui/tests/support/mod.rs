// Copyright 2025 Atlas Dashboards Contributors
// Licensed under MIT OR Apache-2.0
//
// Shared test harness for atlas-ui component tests.
//
// Provides mount/cleanup helpers and URL manipulation so individual test
// files stay focused on assertions rather than boilerplate.
//
// Each test file that does `mod support;` compiles its own copy, so not every
// function is used in every compilation unit.
#![allow(dead_code)]

use wasm_bindgen::JsValue;

/// Create a fresh `<div>`, attach it to `<body>`, and return it.
pub fn create_mount_point() -> web_sys::Element {
    let document = gloo_utils::document();
    let div = document.create_element("div").unwrap();
    document.body().unwrap().append_child(&div).unwrap();
    div
}

/// Remove the mount-point from `<body>` so subsequent tests start clean.
pub fn cleanup(mount: &web_sys::Element) {
    gloo_utils::document()
        .body()
        .unwrap()
        .remove_child(mount)
        .ok();
}

/// Replace the current URL's query string (no history entry added).
/// Pass `""` to clear it.
pub fn set_query(query: &str) {
    let window = gloo_utils::window();
    let path = window.location().pathname().unwrap();
    let url = if query.is_empty() {
        path
    } else {
        format!("{path}?{query}")
    };
    window
        .history()
        .unwrap()
        .replace_state_with_url(&JsValue::NULL, "", Some(&url))
        .unwrap();
}

/// The current query string, without the leading `?`.
pub fn current_query() -> String {
    let search = gloo_utils::window().location().search().unwrap();
    search.strip_prefix('?').unwrap_or(&search).to_string()
}

/// Number of entries in the session history.
pub fn history_length() -> u32 {
    gloo_utils::window().history().unwrap().length().unwrap()
}
