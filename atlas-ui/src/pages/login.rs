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

//! Sign-in page.
//!
//! Only reachable while signed out (the route is requires-no-auth). The
//! username is kept as a controlled value so re-renders do not wipe what
//! the visitor is typing, and persisted to localStorage on success so it
//! survives page reloads.

use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::context::{
    is_valid_username, load_username_from_storage, save_username_to_storage, Session, SessionCtx,
};
use crate::routing::Route;

#[function_component(Login)]
pub fn login() -> Html {
    let session =
        use_context::<SessionCtx>().expect("Session context provider is missing – this is a bug");
    let navigator = use_navigator().expect("Navigator context missing");

    let error_state = use_state(|| None as Option<String>);
    let input_value_state = use_state(|| load_username_from_storage().unwrap_or_default());

    let oninput = {
        let input_value_state = input_value_state.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            input_value_state.set(input.value());
        })
    };

    let onsubmit = {
        let session = session.clone();
        let error_state = error_state.clone();
        let input_value_state = input_value_state.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let username = (*input_value_state).trim().to_string();
            if !is_valid_username(&username) {
                error_state.set(Some(
                    "Usernames may only contain letters, numbers and underscores.".to_string(),
                ));
                return;
            }
            save_username_to_storage(&username);
            session.set(Session::signed_in(username));
            navigator.push(&Route::Projects);
        })
    };

    if session.authenticated {
        return html! {
            <div class="login-page">
                <p>{ "You are already signed in." }</p>
            </div>
        };
    }

    html! {
        <div class="login-page">
            <h1>{ "Sign in" }</h1>
            <form {onsubmit}>
                <input
                    id="username"
                    type="text"
                    placeholder="Username"
                    value={(*input_value_state).clone()}
                    {oninput}
                />
                <input type="submit" value="Sign in" />
            </form>
            {
                if let Some(error) = &*error_state {
                    html! { <p class="login-error">{ error }</p> }
                } else {
                    html! {}
                }
            }
        </div>
    }
}
