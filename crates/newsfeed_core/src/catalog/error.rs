use crate::model::news::NewsId;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Load-time failure of the catalog seed or its configuration.
#[derive(Debug)]
pub enum CatalogError {
    /// Seed document is not valid JSON or does not match the seed shape.
    Parse(serde_json::Error),
    /// Two items share one id.
    DuplicateId(NewsId),
    /// Item references a category that the seed does not declare.
    UnknownCategory { id: NewsId, category: String },
    /// Item date is not an ISO `YYYY-MM-DD` calendar date.
    InvalidDate { id: NewsId, value: String },
    /// Item title is blank.
    EmptyTitle(NewsId),
    /// A declared category name is blank.
    EmptyCategory,
    /// A category is declared twice.
    DuplicateCategory(String),
    /// The all-sentinel label equals a real category name.
    SentinelCollision(String),
    /// A declared date filter value is not `all|today|week|month`.
    UnknownDateFilter(String),
    /// Reference date is neither an ISO date nor `today`.
    InvalidReferenceDate(String),
}

impl Display for CatalogError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(err) => write!(f, "invalid catalog seed: {err}"),
            Self::DuplicateId(id) => write!(f, "duplicate news id: {id}"),
            Self::UnknownCategory { id, category } => {
                write!(f, "news {id} has undeclared category `{category}`")
            }
            Self::InvalidDate { id, value } => {
                write!(f, "news {id} has invalid date `{value}`; expected YYYY-MM-DD")
            }
            Self::EmptyTitle(id) => write!(f, "news {id} has an empty title"),
            Self::EmptyCategory => write!(f, "category names cannot be empty"),
            Self::DuplicateCategory(name) => write!(f, "duplicate category: `{name}`"),
            Self::SentinelCollision(name) => {
                write!(f, "all-category label `{name}` collides with a real category")
            }
            Self::UnknownDateFilter(value) => write!(
                f,
                "unsupported date filter `{value}`; expected all|today|week|month"
            ),
            Self::InvalidReferenceDate(value) => write!(
                f,
                "invalid reference date `{value}`; expected YYYY-MM-DD or `today`"
            ),
        }
    }
}

impl Error for CatalogError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Parse(err) => Some(err),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for CatalogError {
    fn from(value: serde_json::Error) -> Self {
        Self::Parse(value)
    }
}
