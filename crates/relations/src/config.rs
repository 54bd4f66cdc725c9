use serde::{Deserialize, Serialize};

/// Highest score the band thresholds are defined against
pub const SCORE_CEILING: u8 = 10;

/// Weights of the pairwise compatibility score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScoringConfig {
    /// Starting score for every pair
    pub base: u8,

    /// Added once per partition in which both categories share a group
    pub shared_group_bonus: u8,

    /// Added when either category's integration target is the other
    pub growth_line_bonus: u8,

    /// Added when the two categories sit next to each other on the circle
    pub wing_bonus: u8,

    /// Lower clamp
    pub min_score: u8,

    /// Upper clamp
    pub max_score: u8,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            base: 3,
            shared_group_bonus: 1,
            growth_line_bonus: 2,
            wing_bonus: 1,
            min_score: 1,
            max_score: SCORE_CEILING,
        }
    }
}

impl ScoringConfig {
    /// Score only from the partitions, no line or wing bonuses.
    pub fn groups_only() -> Self {
        Self {
            growth_line_bonus: 0,
            wing_bonus: 0,
            ..Default::default()
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.min_score == 0 {
            return Err("min_score must be >= 1".to_string());
        }

        if self.max_score > SCORE_CEILING {
            return Err(format!(
                "max_score ({}) cannot exceed {SCORE_CEILING}",
                self.max_score
            ));
        }

        if self.min_score > self.max_score {
            return Err(format!(
                "min_score ({}) cannot exceed max_score ({})",
                self.min_score, self.max_score
            ));
        }

        Ok(())
    }
}
