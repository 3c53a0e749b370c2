//! Client-side state stores and their persistence primitives.
//!
//! DESIGN
//! ======
//! Two stores own all durable client state: `auth` (registered accounts
//! and the sign-in session) and `wishlist` (bookmarked movies). Both are
//! built on `cell::StorageCell`, a typed write-through slot over the
//! `storage::StorageBackend` boundary, and announce mutations through
//! the `subscribe` observer seam. The stores never talk to each other;
//! the wishlist is per browser profile, not per account.

pub mod auth;
pub mod cell;
pub mod storage;
pub mod subscribe;
pub mod wishlist;
