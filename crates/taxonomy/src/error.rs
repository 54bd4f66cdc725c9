use thiserror::Error;

use crate::{Category, Center};

/// Result type for registry lookups
pub type Result<T> = std::result::Result<T, TaxonomyError>;

/// Errors raised when input falls outside the fixed taxonomy
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TaxonomyError {
    /// Identifier outside 1..=9 (or not a number at all)
    #[error("Invalid category: {0} (expected 1-9)")]
    InvalidCategory(String),

    /// Center name that is not gut, heart or head
    #[error("Invalid center: {0} (expected gut, heart or head)")]
    InvalidCenter(String),

    /// A category was placed under a center it does not belong to
    #[error("Category {category} belongs to the {actual} center, not {expected}")]
    CenterMismatch {
        category: Category,
        expected: Center,
        actual: Center,
    },
}

impl TaxonomyError {
    /// Create an invalid category error
    pub fn invalid_category(value: impl ToString) -> Self {
        Self::InvalidCategory(value.to_string())
    }

    /// Create an invalid center error
    pub fn invalid_center(value: impl Into<String>) -> Self {
        Self::InvalidCenter(value.into())
    }
}
