//! REST helpers for the movie catalog.
//!
//! Client-side (wasm): real HTTP calls via `gloo-net`. Anywhere else:
//! inert stubs, since the catalog is only reachable from a browser.
//!
//! ERROR HANDLING
//! ==============
//! Every call returns `Result<_, ApiError>` so a failed fetch degrades
//! the page that issued it without crashing the app. This is the only
//! layer that surfaces errors; the state stores never do.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use thiserror::Error;

use super::types::{Movie, MoviePage};

const BASE_URL: &str = "https://api.themoviedb.org/3";
/// Result language for every catalog request.
const LANGUAGE: &str = "en-US";
/// Compile-time API key; `None` when the build did not provide one.
const API_KEY: Option<&str> = option_env!("TMDB_API_KEY");

/// Failures crossing the catalog boundary.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum ApiError {
    #[error("TMDB_API_KEY was not set at build time")]
    MissingKey,
    #[error("request failed: {0}")]
    Request(String),
    #[error("catalog returned HTTP {0}")]
    Status(u16),
    #[error("undecodable catalog payload: {0}")]
    Decode(String),
    /// Only produced outside a browser environment.
    #[error("catalog requests need a browser environment")]
    Unsupported,
}

/// The four standing catalog lists.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ListKind {
    Popular,
    NowPlaying,
    TopRated,
    Upcoming,
}

impl ListKind {
    #[must_use]
    pub fn path(self) -> &'static str {
        match self {
            Self::Popular => "/movie/popular",
            Self::NowPlaying => "/movie/now_playing",
            Self::TopRated => "/movie/top_rated",
            Self::Upcoming => "/movie/upcoming",
        }
    }
}

/// Log the API key status once at startup, so a missing key is obvious
/// before the first failed request.
pub fn log_key_status() {
    if API_KEY.is_none() {
        leptos::logging::warn!("TMDB_API_KEY is not set; catalog requests will fail");
    }
}

/// One page of a standing catalog list.
///
/// # Errors
///
/// Returns an [`ApiError`] when the request, the response status or the
/// payload decode fails.
pub async fn fetch_list(kind: ListKind, page: u32) -> Result<MoviePage, ApiError> {
    request(kind.path(), &[("page", page.to_string())]).await
}

/// One page of a text-query search.
///
/// # Errors
///
/// Same failure surface as [`fetch_list`].
pub async fn search_movies(query: &str, page: u32) -> Result<MoviePage, ApiError> {
    request(
        "/search/movie",
        &[("query", query.to_owned()), ("page", page.to_string())],
    )
    .await
}

/// Detail lookup for a single movie id.
///
/// # Errors
///
/// Same failure surface as [`fetch_list`]; an unknown id comes back as
/// an HTTP status error.
pub async fn fetch_movie_detail(id: u64) -> Result<Movie, ApiError> {
    request(&format!("/movie/{id}"), &[]).await
}

async fn request<T>(path: &str, extra: &[(&str, String)]) -> Result<T, ApiError>
where
    T: serde::de::DeserializeOwned,
{
    #[cfg(target_arch = "wasm32")]
    {
        let key = API_KEY.ok_or(ApiError::MissingKey)?;
        let url = format!("{BASE_URL}{path}");
        let mut pairs: Vec<(&str, &str)> = vec![("api_key", key), ("language", LANGUAGE)];
        for (name, value) in extra {
            pairs.push((*name, value.as_str()));
        }

        let resp = gloo_net::http::Request::get(&url)
            .query(pairs)
            .send()
            .await
            .map_err(|e| ApiError::Request(e.to_string()))?;
        if !resp.ok() {
            return Err(ApiError::Status(resp.status()));
        }
        resp.json::<T>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = (path, extra);
        Err(ApiError::Unsupported)
    }
}
