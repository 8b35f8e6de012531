//! Read models handed to the presentation layer.

use crate::model::filter_state::DateWindow;
use crate::model::news::NewsId;
use chrono::NaiveDate;
use serde::Serialize;

/// One tag of the vocabulary with its selection flag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TagChip {
    pub tag: String,
    pub selected: bool,
}

/// One visible news card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FeedItemView {
    pub id: NewsId,
    pub title: String,
    pub description: String,
    pub category: String,
    pub date: NaiveDate,
    /// Long `ru-RU` form, e.g. `30 октября 2025 г.`.
    pub date_label: String,
    pub tags: Vec<String>,
    pub image: String,
}

/// Snapshot of everything the feed page renders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FeedView {
    /// Category label; the all-category label when unconstrained.
    pub selected_category: String,
    pub selected_date_filter: DateWindow,
    pub tags: Vec<TagChip>,
    /// Visible items in catalog order.
    pub items: Vec<FeedItemView>,
    pub result_count: usize,
    /// Counter line, e.g. `Найдено новостей: 6`.
    pub summary: String,
    /// Drives the empty-state block.
    pub is_empty: bool,
    /// Drives visibility of the reset action.
    pub has_active_filters: bool,
    pub reference_date: NaiveDate,
}
