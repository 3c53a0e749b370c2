//! Route guard for signed-in-only pages.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::auth::use_auth;

/// Renders `children` only while a session is active; anonymous
/// visitors are redirected to `/signin`.
#[component]
pub fn Protected(children: ChildrenFn) -> impl IntoView {
    let auth = use_auth();
    let navigate = use_navigate();

    Effect::new(move || {
        if !auth.is_authenticated() {
            navigate("/signin", NavigateOptions::default());
        }
    });

    view! {
        {move || {
            if auth.is_authenticated() {
                children().into_any()
            } else {
                ().into_any()
            }
        }}
    }
}
