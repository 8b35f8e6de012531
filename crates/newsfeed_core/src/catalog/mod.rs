//! Immutable news catalog and its startup configuration.
//!
//! # Responsibility
//! - Load and validate the catalog seed (items + category/date enumerations).
//! - Derive the tag vocabulary once per catalog.
//!
//! # Invariants
//! - A `Catalog` is never mutated after construction.
//! - `all_tags` lists each distinct tag once, in first-occurrence order.
//!
//! # See also
//! - crate::service::feed_service for the session that filters a catalog.

pub mod error;
mod seed;

pub use error::CatalogError;
pub(crate) use seed::parse_iso_date;

use crate::model::filter_state::DateWindow;
use crate::model::news::{NewsId, NewsItem};
use chrono::NaiveDate;
use log::info;
use std::collections::HashSet;

/// One selectable date window with its display label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateFilterOption {
    pub window: DateWindow,
    /// Display label, e.g. `Неделя`.
    pub label: String,
}

/// Validated, immutable catalog plus its enumerations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    items: Vec<NewsItem>,
    categories: Vec<String>,
    all_category_label: String,
    date_filters: Vec<DateFilterOption>,
    seed_reference_date: NaiveDate,
    all_tags: Vec<String>,
}

impl Catalog {
    /// Loads the seed compiled into this crate.
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_seed_json(seed::BUILTIN_SEED_JSON)
    }

    /// Loads and validates a seed document.
    ///
    /// # Errors
    /// - `CatalogError::Parse` when the document shape is wrong.
    /// - Other variants when an item or enumeration violates catalog invariants.
    pub fn from_seed_json(json: &str) -> Result<Self, CatalogError> {
        let seed = seed::parse_seed(json)?;
        let all_tags = collect_tag_vocabulary(&seed.items);

        info!(
            "event=catalog_load module=catalog status=ok items={} categories={} tags={} reference_date={}",
            seed.items.len(),
            seed.categories.len(),
            all_tags.len(),
            seed.reference_date
        );

        Ok(Self {
            items: seed.items,
            categories: seed.categories,
            all_category_label: seed.all_category_label,
            date_filters: seed.date_filters,
            seed_reference_date: seed.reference_date,
            all_tags,
        })
    }

    /// Items in catalog order.
    pub fn items(&self) -> &[NewsItem] {
        &self.items
    }

    pub fn get(&self, id: NewsId) -> Option<&NewsItem> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Real categories in declared order (sentinel excluded).
    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    /// Display label of the "all" sentinel, e.g. `Все`.
    pub fn all_category_label(&self) -> &str {
        &self.all_category_label
    }

    /// Category choices as shown to the user: sentinel first, then categories.
    pub fn category_options(&self) -> Vec<&str> {
        std::iter::once(self.all_category_label.as_str())
            .chain(self.categories.iter().map(String::as_str))
            .collect()
    }

    pub fn has_category(&self, name: &str) -> bool {
        self.categories.iter().any(|category| category == name)
    }

    pub fn date_filters(&self) -> &[DateFilterOption] {
        &self.date_filters
    }

    /// Display label for `window`; falls back to its wire value.
    pub fn date_filter_label(&self, window: DateWindow) -> &str {
        self.date_filters
            .iter()
            .find(|option| option.window == window)
            .map(|option| option.label.as_str())
            .unwrap_or_else(|| window.as_str())
    }

    /// Reference date declared by the seed.
    pub fn seed_reference_date(&self) -> NaiveDate {
        self.seed_reference_date
    }

    /// Tag vocabulary in first-occurrence order.
    pub fn all_tags(&self) -> &[String] {
        &self.all_tags
    }
}

/// Collects every distinct tag once, scanning items front-to-back and each
/// item's tags in their given order.
pub fn collect_tag_vocabulary(items: &[NewsItem]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut vocabulary = Vec::new();
    for tag in items.iter().flat_map(|item| item.tags.iter()) {
        if seen.insert(tag.as_str()) {
            vocabulary.push(tag.clone());
        }
    }
    vocabulary
}

#[cfg(test)]
mod tests {
    use super::collect_tag_vocabulary;
    use crate::model::news::NewsItem;
    use chrono::NaiveDate;

    fn item(id: i64, tags: &[&str]) -> NewsItem {
        NewsItem {
            id,
            title: format!("item {id}"),
            description: String::new(),
            category: "Спорт".to_string(),
            date: NaiveDate::from_ymd_opt(2025, 10, 1).expect("valid date"),
            tags: tags.iter().map(|tag| tag.to_string()).collect(),
            image: String::new(),
        }
    }

    #[test]
    fn vocabulary_keeps_first_occurrence_order() {
        let items = vec![
            item(1, &["b", "a"]),
            item(2, &["c", "a", "b"]),
            item(3, &["d", "d"]),
        ];
        assert_eq!(collect_tag_vocabulary(&items), vec!["b", "a", "c", "d"]);
    }

    #[test]
    fn vocabulary_of_empty_catalog_is_empty() {
        assert!(collect_tag_vocabulary(&[]).is_empty());
    }
}
