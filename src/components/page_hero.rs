//! Title/subtitle banner shown at the top of a page.

use leptos::prelude::*;

#[component]
pub fn PageHero(title: &'static str, subtitle: &'static str) -> impl IntoView {
    view! {
        <div class="page-hero">
            <h1>{title}</h1>
            <p class="page-hero-subtitle">{subtitle}</p>
        </div>
    }
}
