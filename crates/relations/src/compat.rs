use std::fmt;

use ennea_taxonomy::{shared_groups, Category, GroupLabel};
use serde::{Deserialize, Serialize};

use crate::config::ScoringConfig;
use crate::error::{RelationsError, Result};
use crate::pair::CategoryPair;

/// A growth or stress line running from one category to another.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DirectedLink {
    pub from: Category,
    pub to: Category,
}

/// Qualitative tier of a compatibility score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum CompatibilityBand {
    Difficult,
    Challenging,
    Moderate,
    Good,
    Excellent,
}

impl CompatibilityBand {
    /// ≥9 Excellent, ≥7 Good, ≥5 Moderate, ≥3 Challenging, otherwise Difficult.
    pub fn from_score(score: u8) -> Self {
        match score {
            9..=u8::MAX => Self::Excellent,
            7..=8 => Self::Good,
            5..=6 => Self::Moderate,
            3..=4 => Self::Challenging,
            _ => Self::Difficult,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Excellent => "Excellent",
            Self::Good => "Good",
            Self::Moderate => "Moderate",
            Self::Challenging => "Challenging",
            Self::Difficult => "Difficult",
        }
    }
}

impl fmt::Display for CompatibilityBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Structural relationship between two categories.
///
/// Every field is expressed against the normalized pair or in absolute direction, so the
/// result of `compatibility(a, b)` equals that of `compatibility(b, a)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompatibilityResult {
    pub pair: CategoryPair,
    pub score: u8,
    pub band: CompatibilityBand,
    /// Group labels both categories carry, in partition order
    pub shared_groups: Vec<GroupLabel>,
    /// Set when one category's integration target is the other
    pub integration_link: Option<DirectedLink>,
    /// Set when one category's disintegration target is the other
    pub disintegration_link: Option<DirectedLink>,
    pub wing_neighbors: bool,
}

/// Pairwise compatibility over the fixed registry.
#[derive(Debug, Clone, Copy, Default)]
pub struct CompatibilityCalculator {
    config: ScoringConfig,
}

impl CompatibilityCalculator {
    pub fn new(config: ScoringConfig) -> Result<Self> {
        config.validate().map_err(RelationsError::InvalidConfig)?;
        Ok(Self { config })
    }

    /// Score and describe the unordered pair `{a, b}`.
    ///
    /// `a == b` is allowed: all three partitions are shared and no line connects a
    /// category to itself.
    pub fn compatibility(&self, a: Category, b: Category) -> CompatibilityResult {
        let pair = CategoryPair::new(a, b);
        let shared = shared_groups(pair.low(), pair.high());
        let integration_link = line_between(pair, Category::integration_target);
        let disintegration_link = line_between(pair, Category::disintegration_target);
        let wing_neighbors = pair.low().is_wing(pair.high());

        let cfg = &self.config;
        let mut raw = u32::from(cfg.base) + shared.len() as u32 * u32::from(cfg.shared_group_bonus);
        if integration_link.is_some() {
            raw += u32::from(cfg.growth_line_bonus);
        }
        if wing_neighbors {
            raw += u32::from(cfg.wing_bonus);
        }
        let score = raw.clamp(u32::from(cfg.min_score), u32::from(cfg.max_score)) as u8;

        log::debug!(
            "compatibility {pair}: score {score} (shared {}, growth {}, wing {wing_neighbors})",
            shared.len(),
            integration_link.is_some(),
        );

        CompatibilityResult {
            pair,
            score,
            band: CompatibilityBand::from_score(score),
            shared_groups: shared,
            integration_link,
            disintegration_link,
            wing_neighbors,
        }
    }

    /// [`compatibility`](Self::compatibility) for raw identifiers.
    ///
    /// # Errors
    /// `RelationsError::Taxonomy(InvalidCategory)` if either id is outside `1..=9`.
    pub fn compatibility_ids(&self, a: u8, b: u8) -> Result<CompatibilityResult> {
        Ok(self.compatibility(Category::new(a)?, Category::new(b)?))
    }
}

/// Check both directions of `target` across the pair, low side first.
fn line_between(pair: CategoryPair, target: fn(Category) -> Category) -> Option<DirectedLink> {
    let (low, high) = (pair.low(), pair.high());
    if target(low) == high {
        Some(DirectedLink { from: low, to: high })
    } else if target(high) == low {
        Some(DirectedLink { from: high, to: low })
    } else {
        None
    }
}
