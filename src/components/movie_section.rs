//! Titled horizontal row for one standing catalog list.

use leptos::prelude::*;

use crate::components::movie_card::MovieCard;
use crate::net::api::{self, ListKind};

/// Fetches the first page of `kind` on mount and renders it as a
/// scrollable row of cards.
#[component]
pub fn MovieSection(title: &'static str, kind: ListKind) -> impl IntoView {
    let movies = LocalResource::new(move || api::fetch_list(kind, 1));

    view! {
        <section class="movie-section">
            <h2 class="movie-section-title">{title}</h2>

            <Suspense fallback=move || {
                view! { <div class="movie-section-status">"Loading..."</div> }
            }>
                {move || {
                    movies
                        .get()
                        .map(|result| match result {
                            Ok(page) => view! {
                                <div class="movie-row">
                                    {page
                                        .results
                                        .into_iter()
                                        .map(|movie| view! { <MovieCard movie/> })
                                        .collect::<Vec<_>>()}
                                </div>
                            }
                                .into_any(),
                            Err(e) => view! {
                                <div class="movie-section-status error">
                                    {format!("Could not load movies: {e}")}
                                </div>
                            }
                                .into_any(),
                        })
                }}
            </Suspense>
        </section>
    }
}
