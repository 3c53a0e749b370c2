//! Top navigation bar.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::state::auth::use_auth;

/// Site-wide nav. Shows a sign-in link for anonymous visitors and the
/// signed-in email with a sign-out button otherwise.
#[component]
pub fn Header() -> impl IntoView {
    let auth = use_auth();

    view! {
        <header class="header">
            <div class="logo">
                <A href="/">"Reelist"</A>
            </div>

            <nav class="nav">
                <A href="/">"Home"</A>
                <A href="/popular">"Popular"</A>
                <A href="/search">"Search"</A>
                <A href="/wishlist">"Wishlist"</A>
                {move || match auth.current_identity() {
                    Some(email) => view! {
                        <button
                            type="button"
                            class="nav-signout"
                            on:click=move |_| auth.logout()
                        >
                            {format!("Sign Out ({email})")}
                        </button>
                    }
                        .into_any(),
                    None => view! { <A href="/signin">"Sign In"</A> }.into_any(),
                }}
            </nav>
        </header>
    }
}
