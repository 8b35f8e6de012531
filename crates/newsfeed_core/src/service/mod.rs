//! Core use-case services.
//!
//! # Responsibility
//! - Turn user actions into filter-state transitions.
//! - Keep UI/FFI layers decoupled from filtering details.

pub mod feed_service;
pub mod view;
