//! # reelist
//!
//! Leptos + WASM movie discovery client. Lists, searches and paginates a
//! TMDB-compatible catalog and lets a locally registered user bookmark
//! movies. There is no backend of its own: the catalog is a read-only
//! remote API, accounts and bookmarks live in browser `localStorage`.
//!
//! This crate contains pages, components, the client-side state stores
//! with their persistence primitives, and the catalog HTTP client.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;
