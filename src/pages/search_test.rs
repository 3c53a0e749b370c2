use super::*;
use crate::net::types::Movie;

fn movie(id: u64, rating: f64, release: &str) -> Movie {
    Movie {
        id,
        title: format!("Movie {id}"),
        overview: String::new(),
        poster_path: None,
        backdrop_path: None,
        vote_average: rating,
        release_date: release.to_owned(),
    }
}

fn ids(movies: &[Movie]) -> Vec<u64> {
    movies.iter().map(|m| m.id).collect()
}

// --- refine: filter ---

#[test]
fn zero_floor_keeps_everything() {
    let movies = vec![movie(1, 2.0, "2020-01-01"), movie(2, 9.0, "2021-01-01")];
    assert_eq!(ids(&refine(&movies, 0, SortKind::Popularity)), vec![1, 2]);
}

#[test]
fn floor_drops_lower_rated_movies() {
    let movies = vec![
        movie(1, 5.9, "2020-01-01"),
        movie(2, 6.0, "2021-01-01"),
        movie(3, 8.2, "2022-01-01"),
    ];
    assert_eq!(ids(&refine(&movies, 6, SortKind::Popularity)), vec![2, 3]);
}

#[test]
fn floor_can_drop_everything() {
    let movies = vec![movie(1, 5.0, "2020-01-01")];
    assert!(refine(&movies, 8, SortKind::Popularity).is_empty());
}

// --- refine: sort ---

#[test]
fn popularity_keeps_catalog_order() {
    let movies = vec![
        movie(1, 5.0, "2022-01-01"),
        movie(2, 9.0, "2020-01-01"),
        movie(3, 7.0, "2021-01-01"),
    ];
    assert_eq!(ids(&refine(&movies, 0, SortKind::Popularity)), vec![1, 2, 3]);
}

#[test]
fn rating_sorts_highest_first() {
    let movies = vec![
        movie(1, 5.0, "2022-01-01"),
        movie(2, 9.0, "2020-01-01"),
        movie(3, 7.0, "2021-01-01"),
    ];
    assert_eq!(ids(&refine(&movies, 0, SortKind::Rating)), vec![2, 3, 1]);
}

#[test]
fn latest_sorts_newest_release_first() {
    let movies = vec![
        movie(1, 5.0, "2020-06-15"),
        movie(2, 9.0, "2023-01-01"),
        movie(3, 7.0, "2021-12-31"),
    ];
    assert_eq!(ids(&refine(&movies, 0, SortKind::Latest)), vec![2, 3, 1]);
}

#[test]
fn filter_applies_before_sort() {
    let movies = vec![
        movie(1, 9.5, "2020-01-01"),
        movie(2, 3.0, "2024-01-01"),
        movie(3, 7.0, "2022-01-01"),
    ];
    assert_eq!(ids(&refine(&movies, 6, SortKind::Latest)), vec![3, 1]);
}

// --- SortKind values ---

#[test]
fn sort_kind_round_trips_through_its_value() {
    for kind in [SortKind::Popularity, SortKind::Rating, SortKind::Latest] {
        assert_eq!(SortKind::from_value(kind.value()), kind);
    }
}

#[test]
fn unknown_sort_value_falls_back_to_popularity() {
    assert_eq!(SortKind::from_value("nonsense"), SortKind::Popularity);
}
