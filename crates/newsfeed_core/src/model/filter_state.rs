//! Session-local filter selections.
//!
//! # Responsibility
//! - Model the three user-controlled filter dimensions.
//! - Provide the toggle/reset primitives used by the feed session.
//!
//! # Invariants
//! - The default state applies no filtering on any dimension.
//! - `tags` has set semantics: no duplicates, order irrelevant.
//! - Mutating one dimension never touches the others.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Category dimension of the filter.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CategorySelection {
    /// The "all" sentinel: no category constraint.
    #[default]
    All,
    /// Only items of this exact category name.
    Only(String),
}

impl CategorySelection {
    /// Returns the selected category name, `None` for the all sentinel.
    pub fn name(&self) -> Option<&str> {
        match self {
            Self::All => None,
            Self::Only(name) => Some(name.as_str()),
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, Self::All)
    }
}

/// Relative date window, evaluated against the configured reference date.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DateWindow {
    /// No date constraint.
    #[default]
    All,
    /// Same calendar day as the reference date.
    Today,
    /// Up to 7 days before the reference date.
    Week,
    /// Up to 30 days before the reference date.
    Month,
}

impl DateWindow {
    /// Every window in presentation order.
    pub const ALL_WINDOWS: [DateWindow; 4] = [Self::All, Self::Today, Self::Week, Self::Month];

    /// Parses a wire value (`all|today|week|month`).
    ///
    /// Returns `None` for unknown values; callers decide how to degrade.
    pub fn from_value(value: &str) -> Option<Self> {
        match value.trim() {
            "all" => Some(Self::All),
            "today" => Some(Self::Today),
            "week" => Some(Self::Week),
            "month" => Some(Self::Month),
            _ => None,
        }
    }

    /// Stable wire value.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Today => "today",
            Self::Week => "week",
            Self::Month => "month",
        }
    }

    /// Maximum item age in whole days, `None` when unbounded.
    pub fn max_age_days(&self) -> Option<i64> {
        match self {
            Self::All => None,
            Self::Today => Some(0),
            Self::Week => Some(7),
            Self::Month => Some(30),
        }
    }
}

/// Current user selections across all filter dimensions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FilterState {
    pub category: CategorySelection,
    pub date_window: DateWindow,
    pub tags: BTreeSet<String>,
}

impl FilterState {
    /// Returns whether no dimension constrains the feed.
    pub fn is_default(&self) -> bool {
        self.category.is_all() && self.date_window == DateWindow::All && self.tags.is_empty()
    }

    /// Flips membership of `tag` and returns whether it is now selected.
    pub fn toggle_tag(&mut self, tag: &str) -> bool {
        if self.tags.remove(tag) {
            false
        } else {
            self.tags.insert(tag.to_string());
            true
        }
    }

    /// Restores the no-filtering defaults, whatever the prior state.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
