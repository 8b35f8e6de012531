//! Core domain logic for the news feed.
//! This crate is the single source of truth for filtering invariants.

pub mod catalog;
pub mod config;
pub mod display;
pub mod filter;
pub mod logging;
pub mod model;
pub mod service;

pub use catalog::{collect_tag_vocabulary, Catalog, CatalogError, DateFilterOption};
pub use config::{FeedConfig, ReferenceDate};
pub use filter::filter_news;
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::filter_state::{CategorySelection, DateWindow, FilterState};
pub use model::news::{NewsId, NewsItem};
pub use service::feed_service::FeedSession;
pub use service::view::{FeedItemView, FeedView, TagChip};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
