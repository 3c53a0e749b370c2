//! Shared movie card used by every grid and row.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::types::Movie;
use crate::state::wishlist::{WishlistItem, use_wishlist};
use crate::util::poster;

/// Poster card with title, rating, release date and a wishlist star.
/// Clicking the card (or pressing Enter on it) opens the detail page;
/// the star only toggles the bookmark.
#[component]
pub fn MovieCard(movie: Movie) -> impl IntoView {
    let wishlist = use_wishlist();
    let navigate = use_navigate();

    let id = movie.id;
    let item = WishlistItem::from(&movie);

    let wished = move || wishlist.is_member(id);
    let on_toggle = move |ev: leptos::ev::MouseEvent| {
        ev.stop_propagation();
        wishlist.toggle(item.clone());
    };
    let open_detail = {
        let navigate = navigate.clone();
        move |_| navigate(&format!("/movie/{id}"), NavigateOptions::default())
    };
    let open_detail_key = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Enter" {
            navigate(&format!("/movie/{id}"), NavigateOptions::default());
        }
    };

    let poster_url = poster::card_poster(movie.poster_path.as_deref());
    let title = movie.title;
    let rating = format!("★ {:.1}", movie.vote_average);
    let release = movie.release_date;

    view! {
        <div
            class="movie-card"
            class=("is-wish", wished)
            role="button"
            tabindex="0"
            on:click=open_detail
            on:keydown=open_detail_key
        >
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
            </div>

            <button type="button" class="movie-card-wish-btn" on:click=on_toggle>
                {move || if wished() { "★" } else { "☆" }}
            </button>
        </div>
    }
}
