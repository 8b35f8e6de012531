//! Per-dimension match predicates.
//!
//! Each predicate is independent; `matches_all` is their logical AND.

use crate::model::filter_state::{CategorySelection, DateWindow, FilterState};
use crate::model::news::NewsItem;
use chrono::NaiveDate;
use std::collections::BTreeSet;

/// True for the all sentinel or an exact category name match.
pub fn category_matches(selection: &CategorySelection, item: &NewsItem) -> bool {
    match selection {
        CategorySelection::All => true,
        CategorySelection::Only(name) => item.category == *name,
    }
}

/// Whole days from `date` to `reference_date`; negative for future dates.
pub fn days_between(reference_date: NaiveDate, date: NaiveDate) -> i64 {
    (reference_date - date).num_days()
}

/// True when the item age falls inside `window`.
///
/// Relative windows are bounded below by zero: items dated after the
/// reference date never match `today`, `week` or `month`.
pub fn date_matches(window: DateWindow, reference_date: NaiveDate, date: NaiveDate) -> bool {
    match window.max_age_days() {
        None => true,
        Some(max_age) => {
            let age = days_between(reference_date, date);
            (0..=max_age).contains(&age)
        }
    }
}

/// True when nothing is selected or the item carries any selected tag.
pub fn tags_match(selected: &BTreeSet<String>, item: &NewsItem) -> bool {
    selected.is_empty() || item.tags.iter().any(|tag| selected.contains(tag))
}

/// Logical AND of the category, date and tag predicates.
pub fn matches_all(state: &FilterState, reference_date: NaiveDate, item: &NewsItem) -> bool {
    category_matches(&state.category, item)
        && date_matches(state.date_window, reference_date, item.date)
        && tags_match(&state.tags, item)
}
