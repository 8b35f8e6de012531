//! Embedded catalog seed and its validation.
//!
//! # Responsibility
//! - Carry the build-time catalog document (`data/catalog.json`).
//! - Decode the raw seed shape and enforce catalog invariants.
//!
//! # Invariants
//! - Validation rejects the whole seed on the first violation.
//! - Item and category order from the document is preserved.

use crate::catalog::error::CatalogError;
use crate::catalog::DateFilterOption;
use crate::model::filter_state::DateWindow;
use crate::model::news::{NewsId, NewsItem};
use chrono::NaiveDate;
use serde::Deserialize;
use std::collections::BTreeSet;

pub(crate) const BUILTIN_SEED_JSON: &str = include_str!("../../data/catalog.json");
const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Deserialize)]
struct RawSeed {
    reference_date: String,
    all_category_label: String,
    categories: Vec<String>,
    date_filters: Vec<RawDateFilter>,
    news: Vec<RawNewsItem>,
}

#[derive(Debug, Deserialize)]
struct RawDateFilter {
    value: String,
    label: String,
}

#[derive(Debug, Deserialize)]
struct RawNewsItem {
    id: NewsId,
    title: String,
    description: String,
    category: String,
    date: String,
    #[serde(default)]
    tags: Vec<String>,
    #[serde(default)]
    image: String,
}

/// Validated seed contents, ready to become a `Catalog`.
#[derive(Debug)]
pub(crate) struct ValidatedSeed {
    pub reference_date: NaiveDate,
    pub all_category_label: String,
    pub categories: Vec<String>,
    pub date_filters: Vec<DateFilterOption>,
    pub items: Vec<NewsItem>,
}

pub(crate) fn parse_seed(json: &str) -> Result<ValidatedSeed, CatalogError> {
    let raw: RawSeed = serde_json::from_str(json)?;

    let reference_date = parse_iso_date(raw.reference_date.as_str())
        .ok_or_else(|| CatalogError::InvalidReferenceDate(raw.reference_date.clone()))?;

    let all_category_label = raw.all_category_label.trim().to_string();
    let categories = validate_categories(&raw.categories, all_category_label.as_str())?;

    let mut date_filters = Vec::with_capacity(raw.date_filters.len());
    for filter in raw.date_filters {
        let window = DateWindow::from_value(filter.value.as_str())
            .ok_or_else(|| CatalogError::UnknownDateFilter(filter.value.clone()))?;
        date_filters.push(DateFilterOption {
            window,
            label: filter.label,
        });
    }

    let mut seen_ids = BTreeSet::new();
    let mut items = Vec::with_capacity(raw.news.len());
    for item in raw.news {
        if !seen_ids.insert(item.id) {
            return Err(CatalogError::DuplicateId(item.id));
        }
        if item.title.trim().is_empty() {
            return Err(CatalogError::EmptyTitle(item.id));
        }
        if !categories.contains(&item.category) {
            return Err(CatalogError::UnknownCategory {
                id: item.id,
                category: item.category,
            });
        }
        let date = parse_iso_date(item.date.as_str()).ok_or_else(|| CatalogError::InvalidDate {
            id: item.id,
            value: item.date.clone(),
        })?;

        items.push(NewsItem {
            id: item.id,
            title: item.title,
            description: item.description,
            category: item.category,
            date,
            tags: item.tags,
            image: item.image,
        });
    }

    Ok(ValidatedSeed {
        reference_date,
        all_category_label,
        categories,
        date_filters,
        items,
    })
}

pub(crate) fn parse_iso_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), ISO_DATE_FORMAT).ok()
}

fn validate_categories(raw: &[String], sentinel: &str) -> Result<Vec<String>, CatalogError> {
    let mut dedup = BTreeSet::new();
    let mut categories = Vec::with_capacity(raw.len());
    for name in raw {
        let normalized = name.trim();
        if normalized.is_empty() {
            return Err(CatalogError::EmptyCategory);
        }
        if normalized == sentinel {
            return Err(CatalogError::SentinelCollision(normalized.to_string()));
        }
        if !dedup.insert(normalized) {
            return Err(CatalogError::DuplicateCategory(normalized.to_string()));
        }
        categories.push(normalized.to_string());
    }
    Ok(categories)
}
