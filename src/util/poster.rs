//! TMDB image URL builders.
//!
//! Catalog rows carry relative image paths (`/abc.jpg`) or nothing;
//! these helpers pick the rendition size per surface and map an absent
//! path to `None` so callers can render a placeholder.

#[cfg(test)]
#[path = "poster_test.rs"]
mod poster_test;

const IMG_BASE: &str = "https://image.tmdb.org/t/p";

/// `w300` poster URL for grid and row cards.
#[must_use]
pub fn card_poster(path: Option<&str>) -> Option<String> {
    path.map(|p| format!("{IMG_BASE}/w300{p}"))
}

/// `w500` poster URL for the detail page.
#[must_use]
pub fn detail_poster(path: Option<&str>) -> Option<String> {
    path.map(|p| format!("{IMG_BASE}/w500{p}"))
}

/// Full-resolution backdrop URL for the detail hero.
#[must_use]
pub fn backdrop(path: Option<&str>) -> Option<String> {
    path.map(|p| format!("{IMG_BASE}/original{p}"))
}
