//! Prev / "page / total" / next control row.

use leptos::prelude::*;

/// Pagination controls. `total_pages` may be unknown (`None`), in which
/// case forward navigation stays enabled until the catalog says
/// otherwise.
#[component]
pub fn Pagination(
    #[prop(into)] page: Signal<u32>,
    #[prop(into)] total_pages: Signal<Option<u32>>,
    #[prop(into)] busy: Signal<bool>,
    on_page: Callback<u32>,
) -> impl IntoView {
    let can_prev = move || page.get() > 1 && !busy.get();
    let can_next = move || total_pages.get().is_none_or(|total| page.get() < total) && !busy.get();

    view! {
        <div class="pagination">
            <button
                type="button"
                class="page-btn"
                disabled=move || !can_prev()
                on:click=move |_| on_page.run(page.get() - 1)
            >
                "Prev"
            </button>

            <span class="page-info">
                {move || match total_pages.get() {
                    Some(total) => format!("{} / {total}", page.get()),
                    None => page.get().to_string(),
                }}
            </span>

            <button
                type="button"
                class="page-btn"
                disabled=move || !can_next()
                on:click=move |_| on_page.run(page.get() + 1)
            >
                "Next"
            </button>
        </div>
    }
}
