//! # Ennea Relations
//!
//! Pairwise compatibility, relational insight synthesis and tritype composition.
//!
//! ## Architecture
//!
//! ```text
//! (a, b) ──> CompatibilityCalculator ──> CompatibilityResult
//!                  │                         │ score, band, shared groups,
//!              ScoringConfig                 │ growth / stress links, wing flag
//!                                            ▼
//! (a, b) ──────────────────────────────> Synthesizer ──> InsightArtifact
//!                                            │
//!                          PairTables ───────┤ curated archetype / interaction / advice
//!                    CategoryProfiles ───────┘ templates when no curated entry exists
//!
//! TritypeSelection + lead ──> TritypeComposer ──> TritypeResult
//! ```
//!
//! Every curated table is a [`SymmetricTable`]: an entry authored as `"8-2"` is found for
//! both `(2, 8)` and `(8, 2)`, and a pair authored in both orientations is refused at load
//! time. A missing curated entry is never an error.
//!
//! ## Example
//!
//! ```rust
//! use ennea_relations::{CompatibilityCalculator, PairTables, Synthesizer};
//! use ennea_taxonomy::{Category, CategoryProfiles};
//!
//! let profiles = CategoryProfiles::bundled();
//! let tables = PairTables::bundled();
//! let calculator = CompatibilityCalculator::new(tables.scoring()).unwrap();
//!
//! let compat = calculator.compatibility(Category::Seven, Category::One);
//! assert_eq!(compat.score, 6);
//!
//! let insight = Synthesizer::new(&profiles, &tables)
//!     .synthesize(Category::Seven, Category::One, &compat)
//!     .unwrap();
//! assert_eq!(insight.archetype.name, "Moderate");
//! ```

mod compat;
mod config;
mod error;
mod pair;
mod synth;
mod tables;
mod tritype;

pub use compat::{CompatibilityBand, CompatibilityCalculator, CompatibilityResult, DirectedLink};
pub use config::{ScoringConfig, SCORE_CEILING};
pub use error::{RelationsError, Result};
pub use pair::{CategoryPair, DuplicatePair, SymmetricTable};
pub use synth::{
    Archetype, InsightArtifact, Narrative, Source, StressPhase, StressStep, Synthesizer,
};
pub use tables::{CuratedArchetype, PairTables};
pub use tritype::{TritypeComposer, TritypeResult, TritypeSelection};
