//! Text-query search with a client-side rating filter and sort.

#[cfg(test)]
#[path = "search_test.rs"]
mod search_test;

use leptos::prelude::*;

use crate::components::movie_card::MovieCard;
use crate::components::page_hero::PageHero;
use crate::components::pagination::Pagination;
use crate::net::api;
use crate::net::types::Movie;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum SortKind {
    /// Catalog order, as returned.
    Popularity,
    /// Highest rating first.
    Rating,
    /// Most recent release first.
    Latest,
}

impl SortKind {
    fn from_value(value: &str) -> Self {
        match value {
            "rating" => Self::Rating,
            "latest" => Self::Latest,
            _ => Self::Popularity,
        }
    }

    fn value(self) -> &'static str {
        match self {
            Self::Popularity => "popularity",
            Self::Rating => "rating",
            Self::Latest => "latest",
        }
    }
}

/// Apply the minimum-rating filter and the selected sort to one fetched
/// page. Runs client-side; the query sent to the catalog is unchanged.
fn refine(movies: &[Movie], min_rating: u8, sort: SortKind) -> Vec<Movie> {
    let floor = f64::from(min_rating);
    let mut list: Vec<Movie> = movies
        .iter()
        .filter(|m| m.vote_average >= floor)
        .cloned()
        .collect();
    match sort {
        SortKind::Popularity => {}
        SortKind::Rating => list.sort_by(|a, b| {
            b.vote_average
                .partial_cmp(&a.vote_average)
                .unwrap_or(std::cmp::Ordering::Equal)
        }),
        // ISO dates sort correctly as strings.
        SortKind::Latest => list.sort_by(|a, b| b.release_date.cmp(&a.release_date)),
    }
    list
}

#[component]
pub fn SearchPage() -> impl IntoView {
    let query = RwSignal::new(String::new());
    // The executed query; `None` until the first submit.
    let submitted = RwSignal::new(None::<String>);
    let page = RwSignal::new(1_u32);
    let min_rating = RwSignal::new(0_u8);
    let sort = RwSignal::new(SortKind::Popularity);
    let input_error = RwSignal::new(None::<String>);

    let results = LocalResource::new(move || {
        let executed = submitted.get();
        let page = page.get();
        async move {
            match executed {
                Some(q) => Some(api::search_movies(&q, page).await),
                None => None,
            }
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        input_error.set(None);
        let trimmed = query.get().trim().to_owned();
        if trimmed.is_empty() {
            input_error.set(Some("Enter a search term.".to_owned()));
            return;
        }
        page.set(1);
        submitted.set(Some(trimmed));
    };

    let total_pages = Signal::derive(move || {
        results
            .get()
            .flatten()
            .and_then(Result::ok)
            .map(|data| data.total_pages)
    });
    let busy = Signal::derive(move || results.get().is_none());
    let on_page = Callback::new(move |next: u32| page.set(next));

    view! {
        <div class="search-page">
            <PageHero title="Search" subtitle="Find any movie in the catalog."/>

            <form class="search-form" on:submit=on_submit>
                <input
                    class="search-input"
                    type="text"
                    placeholder="Search for a movie"
                    prop:value=move || query.get()
                    on:input=move |ev| query.set(event_target_value(&ev))
                />
                <button class="search-button" type="submit">
                    "Search"
                </button>
            </form>

            <div class="search-filters">
                <label>
                    "Minimum rating"
                    <select
                        prop:value=move || min_rating.get().to_string()
                        on:change=move |ev| {
                            min_rating.set(event_target_value(&ev).parse().unwrap_or(0));
                        }
                    >
                        <option value="0">"Any"</option>
                        <option value="6">"6+"</option>
                        <option value="7">"7+"</option>
                        <option value="8">"8+"</option>
                    </select>
                </label>

                <label>
                    "Sort"
                    <select
                        prop:value=move || sort.get().value()
                        on:change=move |ev| {
                            sort.set(SortKind::from_value(&event_target_value(&ev)));
                        }
                    >
                        <option value="popularity">"Default"</option>
                        <option value="rating">"By rating"</option>
                        <option value="latest">"Newest first"</option>
                    </select>
                </label>

                <button
                    type="button"
                    class="filter-reset-btn"
                    on:click=move |_| {
                        min_rating.set(0);
                        sort.set(SortKind::Popularity);
                    }
                >
                    "Reset"
                </button>
            </div>

            {move || input_error.get().map(|msg| view! { <div class="page-status error">{msg}</div> })}

            <Suspense fallback=move || {
                view! { <div class="page-status">"Searching..."</div> }
            }>
                {move || {
                    results
                        .get()
                        .flatten()
                        .map(|result| match result {
                            Ok(data) => {
                                let visible = refine(&data.results, min_rating.get(), sort.get());
                                if visible.is_empty() {
                                    view! { <div class="page-status">"No results."</div> }
                                        .into_any()
                                } else {
                                    view! {
                                        <div class="movie-grid">
                                            {visible
                                                .into_iter()
                                                .map(|movie| view! { <MovieCard movie/> })
                                                .collect::<Vec<_>>()}
                                        </div>
                                        <Pagination
                                            page=page
                                            total_pages=total_pages
                                            busy=busy
                                            on_page=on_page
                                        />
                                    }
                                        .into_any()
                                }
                            }
                            Err(e) => view! {
                                <div class="page-status error">
                                    {format!("Search failed: {e}")}
                                </div>
                            }
                                .into_any(),
                        })
                }}
            </Suspense>
        </div>
    }
}
