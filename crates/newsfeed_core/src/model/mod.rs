//! Domain model for the news feed.
//!
//! # Responsibility
//! - Define the immutable catalog record (`NewsItem`).
//! - Define the session-local filter selections (`FilterState`).
//!
//! # Invariants
//! - `NewsItem` values are never mutated after the catalog is loaded.
//! - `FilterState` is the only mutable state in the engine.

pub mod filter_state;
pub mod news;
