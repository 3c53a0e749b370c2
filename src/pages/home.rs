//! Home page: hero plus the four standing catalog rows.

use leptos::prelude::*;

use crate::components::movie_section::MovieSection;
use crate::components::page_hero::PageHero;
use crate::net::api::ListKind;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="home-page">
            <div class="home-hero">
                <div class="home-hero-content">
                    <h1>"Reelist"</h1>
                    <p>"Discover what everyone is watching right now."</p>
                </div>
            </div>

            <PageHero
                title="Home"
                subtitle="Now playing, popular, top rated and upcoming movies at a glance."
            />

            <MovieSection title="Popular" kind=ListKind::Popular/>
            <MovieSection title="Now Playing" kind=ListKind::NowPlaying/>
            <MovieSection title="Top Rated" kind=ListKind::TopRated/>
            <MovieSection title="Upcoming" kind=ListKind::Upcoming/>
        </div>
    }
}
