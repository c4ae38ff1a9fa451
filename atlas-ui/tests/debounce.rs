// Copyright 2025 Atlas Dashboards Contributors
// Licensed under MIT OR Apache-2.0
//
// Integration test for the trailing debounce hook, driven through a small
// harness component with real browser timers.

#![cfg(all(target_arch = "wasm32", not(target_os = "wasi")))]

mod support;

use std::time::Duration;

use support::{cleanup, create_mount_point};
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use yew::platform::time::sleep;
use yew::prelude::*;

use atlas_ui::hooks::use_debounced_value;

wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

const WINDOW_MS: u32 = 80;

#[function_component(DebounceHarness)]
fn debounce_harness() -> Html {
    let raw = use_state(String::new);
    let debounced = use_debounced_value((*raw).clone(), WINDOW_MS);

    let set = |value: &'static str| {
        let raw = raw.clone();
        Callback::from(move |_: MouseEvent| raw.set(value.to_string()))
    };

    html! {
        <div>
            <button id="set-a" onclick={set("a")}>{ "a" }</button>
            <button id="set-b" onclick={set("b")}>{ "b" }</button>
            <button id="set-c" onclick={set("c")}>{ "c" }</button>
            <span id="debounced">{ debounced }</span>
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

fn debounced_text(mount: &web_sys::Element) -> String {
    mount
        .query_selector("#debounced")
        .unwrap()
        .unwrap()
        .text_content()
        .unwrap_or_default()
}

#[wasm_bindgen_test]
async fn rapid_inputs_produce_one_trailing_update() {
    let mount = create_mount_point();
    yew::Renderer::<DebounceHarness>::with_root(mount.clone()).render();
    sleep(Duration::ZERO).await;

    // Three changes inside the window.
    click(&mount, "#set-a");
    sleep(Duration::from_millis(10)).await;
    click(&mount, "#set-b");
    sleep(Duration::from_millis(10)).await;
    click(&mount, "#set-c");
    sleep(Duration::from_millis(10)).await;

    // Still inside the window: nothing propagated yet, and in particular
    // no leading-edge firing of "a".
    assert_eq!(debounced_text(&mount), "", "no update before quiescence");

    // Let the window elapse after the final input.
    sleep(Duration::from_millis(u64::from(WINDOW_MS) + 60)).await;
    assert_eq!(
        debounced_text(&mount),
        "c",
        "only the final value propagates"
    );

    cleanup(&mount);
}

#[wasm_bindgen_test]
async fn stable_input_propagates_after_window() {
    let mount = create_mount_point();
    yew::Renderer::<DebounceHarness>::with_root(mount.clone()).render();
    sleep(Duration::ZERO).await;

    click(&mount, "#set-b");
    sleep(Duration::from_millis(u64::from(WINDOW_MS) + 60)).await;
    assert_eq!(debounced_text(&mount), "b");

    cleanup(&mount);
}
