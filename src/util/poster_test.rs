use super::*;

#[test]
fn card_poster_uses_the_w300_rendition() {
    assert_eq!(
        card_poster(Some("/abc.jpg")).as_deref(),
        Some("https://image.tmdb.org/t/p/w300/abc.jpg")
    );
}

#[test]
fn detail_poster_uses_the_w500_rendition() {
    assert_eq!(
        detail_poster(Some("/abc.jpg")).as_deref(),
        Some("https://image.tmdb.org/t/p/w500/abc.jpg")
    );
}

#[test]
fn backdrop_uses_the_original_rendition() {
    assert_eq!(
        backdrop(Some("/abc.jpg")).as_deref(),
        Some("https://image.tmdb.org/t/p/original/abc.jpg")
    );
}

#[test]
fn absent_paths_stay_absent() {
    assert_eq!(card_poster(None), None);
    assert_eq!(detail_poster(None), None);
    assert_eq!(backdrop(None), None);
}
