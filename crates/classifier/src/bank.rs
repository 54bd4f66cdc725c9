use std::collections::HashSet;
use std::path::Path;

use anyhow::{anyhow, bail, Context, Result};
use ennea_taxonomy::Category;
use serde::{Deserialize, Serialize};

use crate::answers::MAX_ANSWER;
use crate::instinct::Instinct;

const BUILTIN_QUESTIONS: &str = include_str!("../../../data/questions.json");

/// Stage-1 question: feeds one category accumulator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PrimaryQuestion {
    pub id: String,
    pub text: String,
    pub category: Category,
    #[serde(default = "default_weight")]
    pub weight: u32,
}

/// Stage-2 question: asked only when `primary` won stage 1, feeds the `wing` accumulator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WingQuestion {
    pub id: String,
    pub text: String,
    pub primary: Category,
    pub wing: Category,
    #[serde(default = "default_weight")]
    pub weight: u32,
}

/// Stage-3 question: feeds one instinct accumulator regardless of category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StackQuestion {
    pub id: String,
    pub text: String,
    pub instinct: Instinct,
    #[serde(default = "default_weight")]
    pub weight: u32,
}

fn default_weight() -> u32 {
    1
}

/// The question -> target weight tables for all three stages.
///
/// Reference data: the classifier never hardcodes which question counts toward what.
#[derive(Debug, Clone)]
pub struct QuestionBank {
    primary: Vec<PrimaryQuestion>,
    wing: Vec<WingQuestion>,
    stack: Vec<StackQuestion>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawQuestionBank {
    #[serde(default)]
    schema_version: Option<u32>,
    primary: Vec<PrimaryQuestion>,
    wing: Vec<WingQuestion>,
    stack: Vec<StackQuestion>,
}

impl QuestionBank {
    /// Question bank compiled into the binary.
    pub fn bundled() -> Self {
        Self::from_bytes(BUILTIN_QUESTIONS.as_bytes()).expect("bundled question bank must parse")
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let bytes = std::fs::read(path)
            .with_context(|| format!("Failed to read question bank {}", path.display()))?;
        Self::from_bytes(&bytes)
            .with_context(|| format!("Invalid question bank in {}", path.display()))
    }

    /// Parse JSON, falling back to TOML.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let raw: RawQuestionBank = ennea_taxonomy::parse_json_or_toml(bytes)?;
        if let Some(version) = raw.schema_version {
            if version != 1 {
                bail!("questions.schema_version {version} is not supported (expected 1)");
            }
        }
        let bank = Self {
            primary: raw.primary,
            wing: raw.wing,
            stack: raw.stack,
        };
        bank.validate()?;
        log::debug!(
            "loaded question bank: {} primary, {} wing, {} stack",
            bank.primary.len(),
            bank.wing.len(),
            bank.stack.len()
        );
        Ok(bank)
    }

    pub fn primary_questions(&self) -> &[PrimaryQuestion] {
        &self.primary
    }

    /// Every wing question in the bank, for all primaries.
    pub fn wing_questions(&self) -> &[WingQuestion] {
        &self.wing
    }

    /// Only the wing questions asked once `primary` is known.
    pub fn wing_questions_for(&self, primary: Category) -> impl Iterator<Item = &WingQuestion> {
        self.wing.iter().filter(move |q| q.primary == primary)
    }

    pub fn stack_questions(&self) -> &[StackQuestion] {
        &self.stack
    }

    /// Largest weight among stage-1 questions.
    pub fn max_primary_weight(&self) -> u32 {
        self.primary.iter().map(|q| q.weight).max().unwrap_or(1)
    }

    fn validate(&self) -> Result<()> {
        let mut ids = HashSet::new();
        let all_ids = self
            .primary
            .iter()
            .map(|q| (q.id.as_str(), q.weight))
            .chain(self.wing.iter().map(|q| (q.id.as_str(), q.weight)))
            .chain(self.stack.iter().map(|q| (q.id.as_str(), q.weight)));
        for (id, weight) in all_ids {
            if id.trim().is_empty() {
                bail!("question ids must not be empty");
            }
            if !ids.insert(id) {
                bail!("question id '{id}' is used more than once");
            }
            if weight == 0 {
                bail!("question '{id}' has weight 0 (expected >= 1)");
            }
        }

        let stages = [
            ("primary", self.primary.iter().map(|q| q.weight).collect::<Vec<_>>()),
            ("wing", self.wing.iter().map(|q| q.weight).collect()),
            ("stack", self.stack.iter().map(|q| q.weight).collect()),
        ];
        for (stage, weights) in stages {
            let max_weight = weights.iter().copied().max().unwrap_or(1);
            if stage_ceiling(weights.len(), max_weight).is_none() {
                bail!(
                    "{stage} question weights are too large: {} questions x {MAX_ANSWER} x \
                     weight {max_weight} does not fit in a score",
                    weights.len()
                );
            }
        }

        for category in Category::ALL {
            if !self.primary.iter().any(|q| q.category == category) {
                bail!("no primary question scores category {category}");
            }
        }

        for q in &self.wing {
            if !q.primary.is_wing(q.wing) {
                let (low, high) = q.primary.wings();
                return Err(anyhow!(
                    "wing question '{}' targets {} which is not a wing of {} (expected {} or {})",
                    q.id,
                    q.wing,
                    q.primary,
                    low,
                    high
                ));
            }
        }
        for primary in Category::ALL {
            let (low, high) = primary.wings();
            for wing in [low, high] {
                if !self.wing_questions_for(primary).any(|q| q.wing == wing) {
                    bail!("no wing question for {primary}w{wing}");
                }
            }
        }

        for instinct in Instinct::ALL {
            if !self.stack.iter().any(|q| q.instinct == instinct) {
                bail!("no stack question scores instinct {instinct}");
            }
        }

        Ok(())
    }
}

/// `questions × MAX_ANSWER × max_weight`, the largest total a stage can accumulate.
///
/// `None` when it overflows `u32`. Every accumulator of a stage is bounded by this value,
/// so a bank whose stages all have a ceiling scores without overflow.
fn stage_ceiling(questions: usize, max_weight: u32) -> Option<u32> {
    u32::try_from(questions)
        .ok()?
        .checked_mul(MAX_ANSWER as u32)?
        .checked_mul(max_weight)
}

impl Default for QuestionBank {
    fn default() -> Self {
        Self::bundled()
    }
}
