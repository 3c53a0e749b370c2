//! Detail page for a single movie.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::net::api;
use crate::net::types::Movie;
use crate::state::wishlist::{WishlistItem, use_wishlist};
use crate::util::poster;

#[component]
pub fn MovieDetailPage() -> impl IntoView {
    let params = use_params_map();
    let movie_id = Signal::derive(move || {
        params
            .get()
            .get("id")
            .and_then(|raw| raw.parse::<u64>().ok())
    });

    // A route id that is not a positive integer never reaches the
    // network; the resource resolves to `None` and renders as an error.
    let movie = LocalResource::new(move || {
        let id = movie_id.get();
        async move {
            match id {
                Some(id) => Some(api::fetch_movie_detail(id).await),
                None => None,
            }
        }
    });

    view! {
        <div class="detail-page">
            <Suspense fallback=move || {
                view! { <div class="page-status">"Loading..."</div> }
            }>
                {move || {
                    movie
                        .get()
                        .map(|loaded| match loaded {
                            Some(Ok(movie)) => view! { <DetailBody movie/> }.into_any(),
                            Some(Err(e)) => view! {
                                <div class="page-status error">
                                    {format!("Could not load this movie: {e}")}
                                </div>
                            }
                                .into_any(),
                            None => view! {
                                <div class="page-status error">"Not a valid movie id."</div>
                            }
                                .into_any(),
                        })
                }}
            </Suspense>
        </div>
    }
}

#[component]
fn DetailBody(movie: Movie) -> impl IntoView {
    let wishlist = use_wishlist();

    let id = movie.id;
    let item = WishlistItem::from(&movie);
    let wished = move || wishlist.is_member(id);
    let on_toggle = move |_| wishlist.toggle(item.clone());

    let hero_style = poster::backdrop(movie.backdrop_path.as_deref())
        .map(|url| format!("background-image: url('{url}');"))
        .unwrap_or_default();
    let poster_url = poster::detail_poster(movie.poster_path.as_deref());
    let title = movie.title;
    let rating = format!("★ {:.1}", movie.vote_average);
    let release = if movie.release_date.is_empty() {
        "Unknown release date".to_owned()
    } else {
        movie.release_date
    };
    let overview = if movie.overview.trim().is_empty() {
        "No overview available.".to_owned()
    } else {
        movie.overview
    };

    view! {
        <div class="detail-hero" style=hero_style>
            <div class="detail-hero-overlay"></div>

            <div class="detail-content">
                <div class="detail-poster">
                    {match poster_url {
                        Some(url) => view! { <img src=url alt=title.clone()/> }.into_any(),
                        None => view! { <div class="movie-card-placeholder">"No Image"</div> }
                            .into_any(),
                    }}
                </div>

                <div>
                    <h1 class="detail-title">{title.clone()}</h1>

                    <div class="detail-meta">
                        <span>{rating}</span>
                        <span>{release}</span>
                    </div>

                    <p class="detail-overview">{overview}</p>

                    <button
                        type="button"
                        class="detail-wish-btn"
                        class=("on", wished)
                        on:click=on_toggle
                    >
                        {move || if wished() { "Remove from wishlist" } else { "Add to wishlist" }}
                    </button>
                </div>
            </div>
        </div>
    }
}
