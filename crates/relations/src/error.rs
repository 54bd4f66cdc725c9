use ennea_taxonomy::TaxonomyError;
use thiserror::Error;

use crate::pair::CategoryPair;

pub type Result<T> = std::result::Result<T, RelationsError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RelationsError {
    /// The compatibility result handed to the synthesizer describes another pair
    #[error("Compatibility result is for pair {actual}, expected {expected}")]
    PairMismatch {
        expected: CategoryPair,
        actual: CategoryPair,
    },

    #[error("Invalid scoring configuration: {0}")]
    InvalidConfig(String),

    #[error(transparent)]
    Taxonomy(#[from] TaxonomyError),
}
