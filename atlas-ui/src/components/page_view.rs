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

//! Generic page renderer.
//!
//! Sets the document title from the route, resolves the page handle
//! asynchronously (pending fallback shown meanwhile), merges default and
//! override props, and contains render failures: the first `Err` from the
//! page's render function is logged and replaced with static fallback
//! content. The `ok -> failed` flag is per mount and never transitions
//! back; only a remount gets a fresh attempt.

use yew::prelude::*;

use atlas_routing::PageProps;

use crate::constants::RENDER_FAILURE_TEXT;
use crate::pages::loader::ResolvedPage;
use crate::routing::AppRoute;

#[derive(Properties, PartialEq, Clone)]
pub struct PageViewProps {
    pub route: &'static AppRoute,
    /// Caller props, merged over the route's defaults (caller keys win).
    #[prop_or_default]
    pub overrides: PageProps,
}

#[function_component(PageView)]
pub fn page_view(props: &PageViewProps) -> Html {
    let resolved = use_state(|| None::<ResolvedPage>);
    let failed = use_state(|| false);

    // Document title follows the route title. Last write wins across
    // mounted pages; nothing ever reverts it.
    {
        let title = props.route.title.clone();
        use_effect_with(title, move |title| {
            gloo_utils::document().set_title(title);
            || ()
        });
    }

    // Explicit async resolution of the page handle. A changed handle also
    // clears the previous page and its failure flag, so a stale resolved
    // page is never rendered against the new route's props.
    {
        let resolved = resolved.clone();
        let failed = failed.clone();
        let page = props.route.page;
        use_effect_with(page, move |page| {
            let page = *page;
            failed.set(false);
            resolved.set(None);
            wasm_bindgen_futures::spawn_local(async move {
                resolved.set(Some(page.resolve().await));
            });
            || ()
        });
    }

    if *failed {
        return failure_fallback();
    }

    match &*resolved {
        None => html! {
            <div class="page-pending">{ "Loading…" }</div>
        },
        Some(page) => {
            let merged = props.route.default_props.merged(&props.overrides);
            match page.render(&merged) {
                Ok(content) => content,
                Err(e) => {
                    log::error!("page render failed for {}: {e:?}", props.route.path());
                    // Flip once; the next render takes the fallback branch
                    // and the page is never retried on this mount.
                    failed.set(true);
                    failure_fallback()
                }
            }
        }
    }
}

fn failure_fallback() -> Html {
    html! {
        <div class="page-error">
            <h1>{ "Oops" }</h1>
            <p>{ RENDER_FAILURE_TEXT }</p>
        </div>
    }
}
