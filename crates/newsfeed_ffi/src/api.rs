//! FFI use-case API for Flutter-facing calls.
//!
//! # Responsibility
//! - Expose the feed session to Dart via FRB as plain DTOs.
//! - Forward user actions (category, date window, tag, reset) to core.
//!
//! # Invariants
//! - Exported functions must not panic across FFI boundary.
//! - One feed session per process; every call sees the latest state.

use log::warn;
use newsfeed_core::{
    core_version as core_version_inner, init_logging as init_logging_inner, ping as ping_inner,
    Catalog, FeedConfig, FeedSession, FeedView,
};
use std::sync::{Mutex, MutexGuard, OnceLock};

const REFERENCE_DATE_ENV: &str = "NEWSFEED_REFERENCE_DATE";
static FEED_SESSION: OnceLock<Result<Mutex<FeedSession>, String>> = OnceLock::new();

/// Minimal health-check API for FRB smoke integration.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory path where rolling logs are written.
///
/// # FFI contract
/// - Safe to call repeatedly with the same `level + log_dir`.
/// - Never panics; returns empty string on success and error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err,
    }
}

/// One tag chip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedTag {
    pub tag: String,
    pub selected: bool,
}

/// One visible news card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedCard {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub category: String,
    /// ISO `YYYY-MM-DD`.
    pub date: String,
    /// Long `ru-RU` date, e.g. `30 октября 2025 г.`.
    pub date_label: String,
    pub tags: Vec<String>,
    pub image: String,
}

/// Feed snapshot envelope returned by every feed call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedSnapshot {
    /// Whether the session is available.
    pub ok: bool,
    /// Diagnostics message; empty on success.
    pub message: String,
    pub selected_category: String,
    /// Wire value (`all|today|week|month`).
    pub selected_date_filter: String,
    pub tags: Vec<FeedTag>,
    pub cards: Vec<FeedCard>,
    pub result_count: u32,
    pub summary: String,
    pub is_empty: bool,
    pub has_active_filters: bool,
}

impl FeedSnapshot {
    fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            message: message.into(),
            selected_category: String::new(),
            selected_date_filter: String::new(),
            tags: Vec::new(),
            cards: Vec::new(),
            result_count: 0,
            summary: String::new(),
            is_empty: true,
            has_active_filters: false,
        }
    }
}

impl From<FeedView> for FeedSnapshot {
    fn from(view: FeedView) -> Self {
        Self {
            ok: true,
            message: String::new(),
            selected_category: view.selected_category,
            selected_date_filter: view.selected_date_filter.as_str().to_string(),
            tags: view
                .tags
                .into_iter()
                .map(|chip| FeedTag {
                    tag: chip.tag,
                    selected: chip.selected,
                })
                .collect(),
            cards: view
                .items
                .into_iter()
                .map(|item| FeedCard {
                    id: item.id,
                    title: item.title,
                    description: item.description,
                    category: item.category,
                    date: item.date.format("%Y-%m-%d").to_string(),
                    date_label: item.date_label,
                    tags: item.tags,
                    image: item.image,
                })
                .collect(),
            result_count: u32::try_from(view.result_count).unwrap_or(u32::MAX),
            summary: view.summary,
            is_empty: view.is_empty,
            has_active_filters: view.has_active_filters,
        }
    }
}

/// Selectable option with display label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedOption {
    /// Value passed back to the setter.
    pub value: String,
    pub label: String,
}

/// Static filter choices for building the filter bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedOptions {
    pub ok: bool,
    pub message: String,
    /// All-category sentinel first, then categories.
    pub categories: Vec<FeedOption>,
    pub date_filters: Vec<FeedOption>,
}

/// Returns the current feed without changing it.
#[flutter_rust_bridge::frb(sync)]
pub fn feed_snapshot() -> FeedSnapshot {
    with_session(|_| {})
}

/// Selects a category by its display name; unknown names clear the filter.
#[flutter_rust_bridge::frb(sync)]
pub fn feed_set_category(category: String) -> FeedSnapshot {
    with_session(|session| session.set_category(category.as_str()))
}

/// Selects a date window (`all|today|week|month`); unknown values clear it.
#[flutter_rust_bridge::frb(sync)]
pub fn feed_set_date_filter(value: String) -> FeedSnapshot {
    with_session(|session| session.set_date_filter(value.as_str()))
}

/// Toggles one tag in the multi-select.
#[flutter_rust_bridge::frb(sync)]
pub fn feed_toggle_tag(tag: String) -> FeedSnapshot {
    with_session(|session| {
        session.toggle_tag(tag.as_str());
    })
}

/// Clears all filters.
#[flutter_rust_bridge::frb(sync)]
pub fn feed_reset() -> FeedSnapshot {
    with_session(FeedSession::reset)
}

/// Returns the category and date-filter choices with display labels.
#[flutter_rust_bridge::frb(sync)]
pub fn feed_catalog_options() -> FeedOptions {
    let session = match lock_session() {
        Ok(session) => session,
        Err(message) => {
            return FeedOptions {
                ok: false,
                message,
                categories: Vec::new(),
                date_filters: Vec::new(),
            };
        }
    };
    let catalog = session.catalog();

    FeedOptions {
        ok: true,
        message: String::new(),
        categories: catalog
            .category_options()
            .into_iter()
            .map(|name| FeedOption {
                value: name.to_string(),
                label: name.to_string(),
            })
            .collect(),
        date_filters: catalog
            .date_filters()
            .iter()
            .map(|option| FeedOption {
                value: option.window.as_str().to_string(),
                label: option.label.clone(),
            })
            .collect(),
    }
}

fn with_session(action: impl FnOnce(&mut FeedSession)) -> FeedSnapshot {
    match lock_session() {
        Ok(mut session) => {
            action(&mut session);
            session.view().into()
        }
        Err(message) => FeedSnapshot::failure(message),
    }
}

fn lock_session() -> Result<MutexGuard<'static, FeedSession>, String> {
    let session = FEED_SESSION
        .get_or_init(|| build_session().map(Mutex::new))
        .as_ref()
        .map_err(|err| format!("feed session unavailable: {err}"))?;
    // A panic while holding the lock leaves the state itself consistent.
    Ok(session
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner()))
}

fn build_session() -> Result<FeedSession, String> {
    let catalog = Catalog::builtin().map_err(|err| err.to_string())?;
    let config = resolve_config(&catalog, std::env::var(REFERENCE_DATE_ENV).ok().as_deref());
    Ok(FeedSession::new(catalog, config))
}

/// Applies the env override; unusable values keep the seed reference date.
fn resolve_config(catalog: &Catalog, raw_override: Option<&str>) -> FeedConfig {
    let default = FeedConfig::from_catalog(catalog);
    default
        .with_reference_override(raw_override)
        .unwrap_or_else(|err| {
            warn!(
                "event=config_fallback module=ffi key={} reason={}",
                REFERENCE_DATE_ENV, err
            );
            default
        })
}

#[cfg(test)]
mod tests {
    use super::{
        core_version, feed_catalog_options, feed_reset, feed_set_category, feed_set_date_filter,
        feed_snapshot, feed_toggle_tag, init_logging, ping, resolve_config,
    };
    use newsfeed_core::{Catalog, ReferenceDate};
    use std::sync::Mutex;

    // Feed calls share one process-wide session.
    static SESSION_GUARD: Mutex<()> = Mutex::new(());

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }

    #[test]
    fn init_logging_rejects_empty_log_dir() {
        let error = init_logging("info".to_string(), String::new());
        assert!(!error.is_empty());
    }

    #[test]
    fn init_logging_rejects_unsupported_level() {
        let error = init_logging("verbose".to_string(), "/tmp/newsfeed-logs".to_string());
        assert!(error.contains("unsupported log level"));
    }

    #[test]
    fn category_then_reset_round_trip() {
        let _guard = SESSION_GUARD.lock().unwrap_or_else(|p| p.into_inner());
        feed_reset();

        let filtered = feed_set_category("Технологии".to_string());
        assert!(filtered.ok, "{}", filtered.message);
        assert_eq!(filtered.result_count, 2);
        assert_eq!(
            filtered.cards.iter().map(|card| card.id).collect::<Vec<_>>(),
            vec![1, 5]
        );
        assert!(filtered.has_active_filters);
        assert_eq!(filtered.cards[0].date, "2025-10-30");

        let reset = feed_reset();
        assert_eq!(reset.selected_category, "Все");
        assert_eq!(reset.result_count, 6);
        assert!(!reset.has_active_filters);
        assert_eq!(feed_snapshot(), reset);
    }

    #[test]
    fn today_filter_reports_empty_state() {
        let _guard = SESSION_GUARD.lock().unwrap_or_else(|p| p.into_inner());
        feed_reset();

        let snapshot = feed_set_date_filter("today".to_string());
        assert_eq!(snapshot.selected_date_filter, "today");
        assert!(snapshot.is_empty);
        assert!(snapshot.cards.is_empty());
        feed_reset();
    }

    #[test]
    fn toggle_tag_marks_chip_selected() {
        let _guard = SESSION_GUARD.lock().unwrap_or_else(|p| p.into_inner());
        feed_reset();

        let snapshot = feed_toggle_tag("спорт".to_string());
        assert_eq!(snapshot.result_count, 1);
        assert!(snapshot
            .tags
            .iter()
            .any(|chip| chip.tag == "спорт" && chip.selected));

        let cleared = feed_toggle_tag("спорт".to_string());
        assert_eq!(cleared.result_count, 6);
        assert!(cleared.tags.iter().all(|chip| !chip.selected));
    }

    #[test]
    fn catalog_options_list_sentinel_first() {
        let options = feed_catalog_options();
        assert!(options.ok, "{}", options.message);
        assert_eq!(options.categories[0].value, "Все");
        assert_eq!(options.categories.len(), 5);
        assert_eq!(options.date_filters[2].value, "week");
        assert_eq!(options.date_filters[2].label, "Неделя");
    }

    #[test]
    fn invalid_reference_override_falls_back_to_seed() {
        let catalog = Catalog::builtin().expect("builtin catalog");
        let seed = catalog.seed_reference_date();

        let config = resolve_config(&catalog, Some("not-a-date"));
        assert_eq!(config.reference, ReferenceDate::Fixed(seed));

        let live = resolve_config(&catalog, Some("today"));
        assert_eq!(live.reference, ReferenceDate::Today);
    }
}
