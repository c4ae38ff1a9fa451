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

//! Trailing debounce for a changing value.

use gloo_timers::callback::Timeout;
use yew::prelude::*;

/// Returns a copy of `value` that only updates once the input has been
/// stable for `delay_ms`. Trailing edge only — the first change starts the
/// window, every further change within it cancels the pending update and
/// restarts it.
#[hook]
pub fn use_debounced_value<T>(value: T, delay_ms: u32) -> T
where
    T: Clone + PartialEq + 'static,
{
    let debounced = use_state(|| value.clone());

    {
        let debounced = debounced.clone();
        use_effect_with(value, move |value| {
            let value = value.clone();
            let timeout = Timeout::new(delay_ms, move || debounced.set(value));
            // Dropping the timeout cancels the pending update when the
            // input changes again before the window elapses.
            move || drop(timeout)
        });
    }

    (*debounced).clone()
}
