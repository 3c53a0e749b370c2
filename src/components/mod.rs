//! Reusable view components.

pub mod header;
pub mod movie_card;
pub mod movie_section;
pub mod page_hero;
pub mod pagination;
pub mod protected;
