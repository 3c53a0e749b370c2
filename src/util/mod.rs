//! Small presentation helpers shared by pages and components.

pub mod poster;
