//! Engine configuration.
//!
//! # Responsibility
//! - Decide which date relative windows are measured from.
//! - Parse reference-date overrides coming from env/CLI.
//!
//! # Invariants
//! - Parsing overrides never panics; invalid input is reported, not guessed.

use crate::catalog::{parse_iso_date, Catalog, CatalogError};
use chrono::{Local, NaiveDate};

/// Keyword selecting live mode in reference-date overrides.
pub const LIVE_REFERENCE_KEYWORD: &str = "today";

/// Date that `today`/`week`/`month` windows are computed against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReferenceDate {
    /// Fixed date, used with static demo catalogs.
    Fixed(NaiveDate),
    /// Current local calendar date, re-read on every resolution.
    Today,
}

impl ReferenceDate {
    /// Parses `YYYY-MM-DD` or `today`.
    pub fn parse(raw: &str) -> Result<Self, CatalogError> {
        let trimmed = raw.trim();
        if trimmed.eq_ignore_ascii_case(LIVE_REFERENCE_KEYWORD) {
            return Ok(Self::Today);
        }
        parse_iso_date(trimmed)
            .map(Self::Fixed)
            .ok_or_else(|| CatalogError::InvalidReferenceDate(trimmed.to_string()))
    }

    pub fn resolve(&self) -> NaiveDate {
        match self {
            Self::Fixed(date) => *date,
            Self::Today => Local::now().date_naive(),
        }
    }
}

/// Runtime knobs of one feed session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeedConfig {
    pub reference: ReferenceDate,
}

impl FeedConfig {
    /// Uses the reference date declared by the catalog seed.
    pub fn from_catalog(catalog: &Catalog) -> Self {
        Self {
            reference: ReferenceDate::Fixed(catalog.seed_reference_date()),
        }
    }

    /// Measures windows from the current local date.
    pub fn live() -> Self {
        Self {
            reference: ReferenceDate::Today,
        }
    }

    /// Applies an optional textual override on top of the catalog default.
    ///
    /// Blank overrides keep the default.
    ///
    /// # Errors
    /// - `CatalogError::InvalidReferenceDate` when the override does not parse.
    pub fn with_reference_override(self, raw: Option<&str>) -> Result<Self, CatalogError> {
        match raw.map(str::trim).filter(|value| !value.is_empty()) {
            Some(value) => Ok(Self {
                reference: ReferenceDate::parse(value)?,
            }),
            None => Ok(self),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{FeedConfig, ReferenceDate};
    use crate::catalog::{Catalog, CatalogError};
    use chrono::NaiveDate;

    #[test]
    fn parse_accepts_iso_dates_and_live_keyword() {
        assert_eq!(
            ReferenceDate::parse(" 2025-10-31 ").expect("iso date should parse"),
            ReferenceDate::Fixed(NaiveDate::from_ymd_opt(2025, 10, 31).expect("valid date"))
        );
        assert_eq!(
            ReferenceDate::parse("TODAY").expect("keyword should parse"),
            ReferenceDate::Today
        );
    }

    #[test]
    fn parse_rejects_garbage() {
        let err = ReferenceDate::parse("yesterday").expect_err("garbage must be rejected");
        assert!(matches!(err, CatalogError::InvalidReferenceDate(value) if value == "yesterday"));
    }

    #[test]
    fn blank_override_keeps_catalog_default() {
        let catalog = Catalog::builtin().expect("builtin catalog");
        let config = FeedConfig::from_catalog(&catalog);
        assert_eq!(
            config
                .with_reference_override(Some("   "))
                .expect("blank override is ignored"),
            config
        );
        assert_eq!(
            config
                .with_reference_override(None)
                .expect("missing override is ignored"),
            config
        );
    }
}
