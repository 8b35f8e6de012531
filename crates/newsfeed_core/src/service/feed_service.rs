//! Feed session use-case service.
//!
//! # Responsibility
//! - Own the filter state of one browsing session.
//! - Expose the four mutation entry points and the derived feed outputs.
//! - Memoize the visible set per (state, reference date).
//!
//! # Invariants
//! - No mutation can fail; unknown category/date values fail open.
//! - The visible set is recomputed only when state or reference date changes.
//! - Outputs preserve catalog order.

use crate::catalog::{Catalog, CatalogError};
use crate::config::FeedConfig;
use crate::display::{format_date_ru, result_summary};
use crate::filter::{filter_news, visible_indices};
use crate::model::filter_state::{CategorySelection, DateWindow, FilterState};
use crate::model::news::NewsItem;
use crate::service::view::{FeedItemView, FeedView, TagChip};
use chrono::NaiveDate;
use log::{debug, warn};

/// Wire alias accepted for the all-category sentinel besides its label.
const ALL_CATEGORY_ALIAS: &str = "all";

#[derive(Debug, Clone)]
struct VisibleCache {
    state: FilterState,
    reference_date: NaiveDate,
    indices: Vec<usize>,
}

/// One user's browsing session over an immutable catalog.
#[derive(Debug, Clone)]
pub struct FeedSession {
    catalog: Catalog,
    config: FeedConfig,
    state: FilterState,
    cache: VisibleCache,
}

impl FeedSession {
    /// Starts a session with no-filtering defaults.
    pub fn new(catalog: Catalog, config: FeedConfig) -> Self {
        let state = FilterState::default();
        let reference_date = config.reference.resolve();
        let indices = visible_indices(catalog.items(), &state, reference_date);
        Self {
            catalog,
            config,
            cache: VisibleCache {
                state: state.clone(),
                reference_date,
                indices,
            },
            state,
        }
    }

    /// Starts a session over the embedded seed and its reference date.
    pub fn with_builtin_catalog() -> Result<Self, CatalogError> {
        let catalog = Catalog::builtin()?;
        let config = FeedConfig::from_catalog(&catalog);
        Ok(Self::new(catalog, config))
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn config(&self) -> &FeedConfig {
        &self.config
    }

    pub fn state(&self) -> &FilterState {
        &self.state
    }

    /// Date relative windows are currently measured from.
    pub fn reference_date(&self) -> NaiveDate {
        self.config.reference.resolve()
    }

    /// Selects a category by display name.
    ///
    /// Declared categories win over the `all` alias. The all-category label
    /// (or `all`) clears the constraint. Unknown names fail open to the all
    /// sentinel.
    pub fn set_category(&mut self, raw: &str) {
        let value = raw.trim();
        let selection = if self.catalog.has_category(value) {
            CategorySelection::Only(value.to_string())
        } else if value == self.catalog.all_category_label()
            || value.eq_ignore_ascii_case(ALL_CATEGORY_ALIAS)
        {
            CategorySelection::All
        } else {
            warn!(
                "event=filter_fail_open module=feed dimension=category value={}",
                value
            );
            CategorySelection::All
        };

        debug!(
            "event=filter_changed module=feed dimension=category value={}",
            selection.name().unwrap_or(ALL_CATEGORY_ALIAS)
        );
        let mut next = self.state.clone();
        next.category = selection;
        self.apply(next);
    }

    /// Selects a date window by wire value (`all|today|week|month`).
    ///
    /// Unknown values fail open to `all`.
    pub fn set_date_filter(&mut self, raw: &str) {
        let window = DateWindow::from_value(raw).unwrap_or_else(|| {
            warn!(
                "event=filter_fail_open module=feed dimension=date value={}",
                raw.trim()
            );
            DateWindow::All
        });
        self.set_date_window(window);
    }

    pub fn set_date_window(&mut self, window: DateWindow) {
        debug!(
            "event=filter_changed module=feed dimension=date value={}",
            window.as_str()
        );
        let mut next = self.state.clone();
        next.date_window = window;
        self.apply(next);
    }

    /// Adds `tag` to the selection, or removes it when already selected.
    ///
    /// Returns whether the tag is selected afterwards.
    pub fn toggle_tag(&mut self, tag: &str) -> bool {
        let mut next = self.state.clone();
        let selected = next.toggle_tag(tag);
        debug!(
            "event=filter_changed module=feed dimension=tag selected={} selected_count={}",
            selected,
            next.tags.len()
        );
        self.apply(next);
        selected
    }

    /// Clears every filter dimension.
    pub fn reset(&mut self) {
        debug!("event=filter_reset module=feed");
        let mut next = self.state.clone();
        next.reset();
        self.apply(next);
    }

    /// Items visible under the current state, in catalog order.
    pub fn filtered_news(&self) -> Vec<&NewsItem> {
        let reference_date = self.reference_date();
        if reference_date != self.cache.reference_date {
            // Live reference date moved past the cached day.
            return filter_news(self.catalog.items(), &self.state, reference_date);
        }
        let items = self.catalog.items();
        self.cache
            .indices
            .iter()
            .filter_map(|&index| items.get(index))
            .collect()
    }

    pub fn result_count(&self) -> usize {
        if self.reference_date() == self.cache.reference_date {
            self.cache.indices.len()
        } else {
            self.filtered_news().len()
        }
    }

    /// Whether the empty-state path should be rendered.
    pub fn is_empty(&self) -> bool {
        self.result_count() == 0
    }

    /// Tag vocabulary in first-occurrence order.
    pub fn all_tags(&self) -> &[String] {
        self.catalog.all_tags()
    }

    /// Whether any dimension differs from the defaults.
    pub fn has_active_filters(&self) -> bool {
        !self.state.is_default()
    }

    /// Tag vocabulary annotated with current selection.
    pub fn tag_chips(&self) -> Vec<TagChip> {
        self.catalog
            .all_tags()
            .iter()
            .map(|tag| TagChip {
                tag: tag.clone(),
                selected: self.state.tags.contains(tag),
            })
            .collect()
    }

    /// Builds the complete read model for the presentation layer.
    pub fn view(&self) -> FeedView {
        let items = self
            .filtered_news()
            .into_iter()
            .map(|item| FeedItemView {
                id: item.id,
                title: item.title.clone(),
                description: item.description.clone(),
                category: item.category.clone(),
                date: item.date,
                date_label: format_date_ru(item.date),
                tags: item.tags.clone(),
                image: item.image.clone(),
            })
            .collect::<Vec<_>>();
        let result_count = items.len();

        FeedView {
            selected_category: self
                .state
                .category
                .name()
                .unwrap_or_else(|| self.catalog.all_category_label())
                .to_string(),
            selected_date_filter: self.state.date_window,
            tags: self.tag_chips(),
            summary: result_summary(result_count),
            is_empty: result_count == 0,
            has_active_filters: self.has_active_filters(),
            reference_date: self.reference_date(),
            result_count,
            items,
        }
    }

    fn apply(&mut self, next: FilterState) {
        let reference_date = self.reference_date();
        self.state = next;
        if self.cache.state == self.state && self.cache.reference_date == reference_date {
            return;
        }

        let indices = visible_indices(self.catalog.items(), &self.state, reference_date);
        debug!(
            "event=feed_recomputed module=feed visible={} total={}",
            indices.len(),
            self.catalog.len()
        );
        self.cache = VisibleCache {
            state: self.state.clone(),
            reference_date,
            indices,
        };
    }
}

#[cfg(test)]
mod tests {
    use super::FeedSession;
    use crate::catalog::Catalog;
    use crate::config::{FeedConfig, ReferenceDate};
    use chrono::NaiveDate;

    fn session_at(day: u32) -> FeedSession {
        let catalog = Catalog::builtin().expect("builtin catalog");
        let reference = NaiveDate::from_ymd_opt(2025, 10, day).expect("valid october date");
        FeedSession::new(
            catalog,
            FeedConfig {
                reference: ReferenceDate::Fixed(reference),
            },
        )
    }

    #[test]
    fn stale_cache_day_is_bypassed() {
        let mut session = session_at(31);
        session.set_date_filter("today");
        assert_eq!(session.result_count(), 0);

        // Simulate a cache built on the previous day.
        session.cache.reference_date = NaiveDate::from_ymd_opt(2025, 10, 30).expect("valid date");
        session.cache.indices = vec![0, 1];

        assert!(session.filtered_news().is_empty());
        assert_eq!(session.result_count(), 0);
        assert!(session.is_empty());
    }

    #[test]
    fn mutation_refreshes_stale_cache() {
        let mut session = session_at(30);
        session.cache.reference_date = NaiveDate::from_ymd_opt(2025, 10, 1).expect("valid date");

        session.set_date_filter("today");
        assert_eq!(session.cache.reference_date, session.reference_date());
        assert_eq!(session.cache.indices, vec![0]);
        assert_eq!(session.result_count(), 1);
    }
}
