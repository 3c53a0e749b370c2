//! Bookmarked movies.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::wishlist::{WishlistItem, use_wishlist};
use crate::util::poster;

#[component]
pub fn WishlistPage() -> impl IntoView {
    let wishlist = use_wishlist();

    view! {
        <div class="wishlist-page">
            <h1>"My Wishlist"</h1>

            <Show
                when=move || !wishlist.is_empty()
                fallback=|| {
                    view! {
                        <p class="wishlist-empty">
                            "Nothing bookmarked yet. Star a movie you like and it will show up here."
                        </p>
                    }
                }
            >
                <div class="movie-grid">
                    <For each=move || wishlist.items() key=|item| item.id let:item>
                        <WishlistCard item/>
                    </For>
                </div>
            </Show>
        </div>
    }
}

/// Card for an already-bookmarked movie; the button removes instead of
/// toggling a star.
#[component]
fn WishlistCard(item: WishlistItem) -> impl IntoView {
    let wishlist = use_wishlist();
    let navigate = use_navigate();

    let id = item.id;
    let poster_url = poster::card_poster(item.poster_path.as_deref());
    let title = item.title.clone();
    let rating = format!("★ {:.1}", item.vote_average);
    let release = item.release_date.clone();

    let open_detail = move |_| navigate(&format!("/movie/{id}"), NavigateOptions::default());
    let on_remove = move |ev: leptos::ev::MouseEvent| {
        ev.stop_propagation();
        wishlist.toggle(item.clone());
    };

    view! {
        <div class="movie-card" role="button" tabindex="0" on:click=open_detail>
            {match poster_url {
                Some(url) => view! { <img src=url alt=title.clone()/> }.into_any(),
                None => view! { <div class="movie-card-placeholder">"No Image"</div> }.into_any(),
            }}

            <div class="movie-card-info">
                <div class="movie-card-title">{title.clone()}</div>
                <div class="movie-card-meta">
                    <span>{rating}</span>
                    <span>{release}</span>
                </div>
                <button type="button" class="wishlist-remove-btn" on:click=on_remove>
                    "Remove"
                </button>
            </div>
        </div>
    }
}
