//! Paginated grid of popular movies.

use leptos::prelude::*;

use crate::components::movie_card::MovieCard;
use crate::components::page_hero::PageHero;
use crate::components::pagination::Pagination;
use crate::net::api::{self, ListKind};

#[component]
pub fn PopularPage() -> impl IntoView {
    let page = RwSignal::new(1_u32);
    let movies = LocalResource::new(move || api::fetch_list(ListKind::Popular, page.get()));

    let total_pages = Signal::derive(move || {
        movies
            .get()
            .and_then(Result::ok)
            .map(|result| result.total_pages)
    });
    let busy = Signal::derive(move || movies.get().is_none());
    let on_page = Callback::new(move |next: u32| page.set(next));

    view! {
        <div class="popular-page">
            <PageHero
                title="Popular Movies"
                subtitle="What the catalog ranks most popular right now."
            />

            <Suspense fallback=move || {
                view! { <div class="page-status">"Loading..."</div> }
            }>
                {move || {
                    movies
                        .get()
                        .map(|result| match result {
                            Ok(data) => view! {
                                <div class="movie-grid">
                                    {data
                                        .results
                                        .into_iter()
                                        .map(|movie| view! { <MovieCard movie/> })
                                        .collect::<Vec<_>>()}
                                </div>
                            }
                                .into_any(),
                            Err(e) => view! {
                                <div class="page-status error">
                                    {format!("Could not load popular movies: {e}")}
                                </div>
                            }
                                .into_any(),
                        })
                }}
            </Suspense>

            <Pagination page=page total_pages=total_pages busy=busy on_page=on_page/>
        </div>
    }
}
