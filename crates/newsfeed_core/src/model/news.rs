//! News item domain model.
//!
//! # Responsibility
//! - Define the canonical record rendered by the feed.
//!
//! # Invariants
//! - `id` is unique across one catalog.
//! - `category` is one of the catalog's declared categories.
//! - `tags` keep their seeded order; duplicates across items are allowed.
//!
//! # See also
//! - crate::catalog for load-time validation of these invariants.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Stable integer identifier of one news item.
pub type NewsId = i64;

/// Canonical, immutable news record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewsItem {
    /// Unique within the catalog.
    pub id: NewsId,
    pub title: String,
    pub description: String,
    /// Display name of the category, e.g. `Технологии`.
    pub category: String,
    /// Publication date, serialized as ISO `YYYY-MM-DD`.
    pub date: NaiveDate,
    /// Free-text tags in seeded order.
    pub tags: Vec<String>,
    /// Image reference (path or URL), rendered as-is by the presentation.
    pub image: String,
}
