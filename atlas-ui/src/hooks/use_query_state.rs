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

//! State mirrored into the URL query string.
//!
//! On mount the state is derived once from the current query parameters
//! via the caller's decode function. Every update through the returned
//! setter re-reads the live query string — never a captured copy — merges
//! the encoded pairs into it (a `None` value drops its key, untouched keys
//! survive) and replaces the current history entry, so no back-navigation
//! entry accumulates. Parsing defaults and value validity are entirely the
//! caller's concern.

use wasm_bindgen::JsValue;
use yew::prelude::*;

use atlas_routing::query;

/// Current `location.search`, empty string when unavailable.
fn current_search() -> String {
    gloo_utils::window()
        .location()
        .search()
        .unwrap_or_default()
}

fn replace_query(merged: &str) {
    let window = gloo_utils::window();
    let location = window.location();
    let path = location.pathname().unwrap_or_else(|_| "/".to_string());
    let url = if merged.is_empty() {
        path
    } else {
        format!("{path}?{merged}")
    };
    match window.history() {
        Ok(history) => {
            if let Err(e) = history.replace_state_with_url(&JsValue::NULL, "", Some(&url)) {
                log::warn!("history.replaceState failed: {e:?}");
            }
        }
        Err(e) => log::warn!("history unavailable: {e:?}"),
    }
}

/// Bidirectional sync between a piece of state and the query string.
///
/// `decode` maps the current query pairs to the initial state; `encode`
/// maps a new state to the pairs to merge back in.
#[hook]
pub fn use_query_state<T, D, E>(decode: D, encode: E) -> (T, Callback<T>)
where
    T: Clone + 'static,
    D: Fn(&[(String, String)]) -> T + 'static,
    E: Fn(&T) -> Vec<(String, Option<String>)> + 'static,
{
    let state = use_state(|| decode(&query::parse(&current_search())));

    let setter = {
        let state = state.clone();
        Callback::from(move |next: T| {
            let merged = query::merge(&current_search(), encode(&next));
            replace_query(&merged);
            state.set(next);
        })
    };

    ((*state).clone(), setter)
}
