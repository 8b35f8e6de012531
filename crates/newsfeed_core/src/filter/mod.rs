//! Feed filtering.
//!
//! # Responsibility
//! - Compose the per-dimension predicates into one feed filter.
//!
//! # Invariants
//! - Filtering is a pure function of (items, state, reference date).
//! - Output keeps catalog order; items are removed, never reordered.

pub mod predicates;

use crate::model::filter_state::FilterState;
use crate::model::news::NewsItem;
use chrono::NaiveDate;

/// Returns the items visible under `state`, in catalog order.
pub fn filter_news<'a>(
    items: &'a [NewsItem],
    state: &FilterState,
    reference_date: NaiveDate,
) -> Vec<&'a NewsItem> {
    items
        .iter()
        .filter(|item| predicates::matches_all(state, reference_date, item))
        .collect()
}

/// Same as [`filter_news`], but yields catalog positions.
pub fn visible_indices(
    items: &[NewsItem],
    state: &FilterState,
    reference_date: NaiveDate,
) -> Vec<usize> {
    items
        .iter()
        .enumerate()
        .filter(|(_, item)| predicates::matches_all(state, reference_date, item))
        .map(|(index, _)| index)
        .collect()
}
