use std::fmt;

use ennea_taxonomy::Category;
use serde::{Deserialize, Serialize};

use crate::answers::{AnswerSet, MAX_ANSWER};
use crate::bank::QuestionBank;
use crate::error::{ClassifierError, Result};
use crate::instinct::Instinct;

/// Which questionnaire stage to score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// Stage 1: all nine category accumulators
    Primary,
    /// Stage 2: the two wing accumulators of an already chosen primary
    Wing(Category),
    /// Stage 3: the three instinct accumulators
    Stack,
}

impl Stage {
    pub fn kind(self) -> StageKind {
        match self {
            Self::Primary => StageKind::Primary,
            Self::Wing(_) => StageKind::Wing,
            Self::Stack => StageKind::Stack,
        }
    }
}

/// Stage without its parameters, for error reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StageKind {
    Primary,
    Wing,
    Stack,
}

impl fmt::Display for StageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Primary => "primary",
            Self::Wing => "wing",
            Self::Stack => "stack",
        })
    }
}

/// Accumulated scores of one stage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "stage", rename_all = "snake_case")]
pub enum ScoreVector {
    Primary(CategoryScores),
    Wing(WingScores),
    Stack(StackScores),
}

/// Stage-1 accumulators plus the ceiling used for confidence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryScores {
    scores: [u32; 9],
    total_possible: u32,
}

impl CategoryScores {
    pub fn new(scores: [u32; 9], total_possible: u32) -> Self {
        Self {
            scores,
            total_possible,
        }
    }

    pub fn get(&self, category: Category) -> u32 {
        self.scores[category.index()]
    }

    pub fn iter(&self) -> impl Iterator<Item = (Category, u32)> + '_ {
        Category::ALL.into_iter().map(|c| (c, self.get(c)))
    }

    /// `questions × 5 × max weight` for the stage.
    pub fn total_possible(&self) -> u32 {
        self.total_possible
    }

    /// Highest scoring category. Ties go to the lowest numeric identifier.
    pub fn top(&self) -> (Category, u32) {
        let mut best = (Category::One, self.scores[0]);
        for (category, score) in self.iter().skip(1) {
            if score > best.1 {
                best = (category, score);
            }
        }
        best
    }

    pub fn confidence(&self) -> u8 {
        confidence(self.top().1, self.total_possible)
    }
}

/// `min(100, round(top / (total_possible / 9) × 100))`.
///
/// A perfectly lopsided stage saturates at 100; a flat stage lands at
/// `round(answer / 5 × 100)` for the uniform answer value.
pub fn confidence(top: u32, total_possible: u32) -> u8 {
    if total_possible == 0 {
        return 0;
    }
    let share = f64::from(top) / (f64::from(total_possible) / 9.0) * 100.0;
    share.round().min(100.0) as u8
}

/// Stage-2 accumulators for the two wings of `primary`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WingScores {
    pub primary: Category,
    pub low: u32,
    pub high: u32,
}

impl WingScores {
    /// The wing with the higher score; a tie keeps the low wing.
    pub fn chosen(&self) -> Category {
        let (low, high) = self.primary.wings();
        if self.high > self.low {
            high
        } else {
            low
        }
    }
}

/// Stage-3 accumulators, indexed by [`Instinct::index`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StackScores {
    scores: [u32; 3],
}

impl StackScores {
    pub fn new(scores: [u32; 3]) -> Self {
        Self { scores }
    }

    pub fn get(&self, instinct: Instinct) -> u32 {
        self.scores[instinct.index()]
    }

    /// Instincts sorted by descending score; ties keep the canonical sp, so, sx order.
    pub fn ranked(&self) -> [Instinct; 3] {
        let mut order = Instinct::ALL;
        order.sort_by(|a, b| self.get(*b).cmp(&self.get(*a)));
        order
    }
}

/// Score one stage of `answers` against `bank`.
///
/// Every question of the stage must be answered and every recorded answer must be on the
/// 1-5 scale. Answers to questions outside the stage are ignored.
pub fn score_stage(bank: &QuestionBank, stage: Stage, answers: &AnswerSet) -> Result<ScoreVector> {
    match stage {
        Stage::Primary => score_primary(bank, answers).map(ScoreVector::Primary),
        Stage::Wing(primary) => score_wing(bank, primary, answers).map(ScoreVector::Wing),
        Stage::Stack => score_stack(bank, answers).map(ScoreVector::Stack),
    }
}

pub fn score_primary(bank: &QuestionBank, answers: &AnswerSet) -> Result<CategoryScores> {
    let questions = bank
        .primary_questions()
        .iter()
        .map(|q| (q.id.as_str(), q.weight, q.category));
    let mut scores = [0u32; 9];
    let mut count = 0u32;
    for (category, points) in tally(StageKind::Primary, answers, questions)? {
        scores[category.index()] += points;
        count += 1;
    }
    let total_possible = count * MAX_ANSWER as u32 * bank.max_primary_weight();
    Ok(CategoryScores::new(scores, total_possible))
}

pub fn score_wing(
    bank: &QuestionBank,
    primary: Category,
    answers: &AnswerSet,
) -> Result<WingScores> {
    let questions = bank
        .wing_questions_for(primary)
        .map(|q| (q.id.as_str(), q.weight, q.wing));
    let (low_wing, _) = primary.wings();
    let mut scores = WingScores {
        primary,
        low: 0,
        high: 0,
    };
    for (wing, points) in tally(StageKind::Wing, answers, questions)? {
        if wing == low_wing {
            scores.low += points;
        } else {
            scores.high += points;
        }
    }
    Ok(scores)
}

pub fn score_stack(bank: &QuestionBank, answers: &AnswerSet) -> Result<StackScores> {
    let questions = bank
        .stack_questions()
        .iter()
        .map(|q| (q.id.as_str(), q.weight, q.instinct));
    let mut scores = [0u32; 3];
    for (instinct, points) in tally(StageKind::Stack, answers, questions)? {
        scores[instinct.index()] += points;
    }
    Ok(StackScores::new(scores))
}

/// Pair each stage question's target with `answer × weight`.
fn tally<'q, K>(
    kind: StageKind,
    answers: &AnswerSet,
    questions: impl Iterator<Item = (&'q str, u32, K)>,
) -> Result<Vec<(K, u32)>> {
    answers.check_range()?;

    let mut contributions = Vec::new();
    let mut missing = Vec::new();
    let mut known = 0usize;
    for (id, weight, target) in questions {
        match answers.get(id) {
            // range already checked, the cast cannot truncate
            Some(value) => {
                contributions.push((target, value as u32 * weight));
                known += 1;
            }
            None => missing.push(id.to_string()),
        }
    }

    if !missing.is_empty() {
        return Err(ClassifierError::incomplete(kind, missing));
    }

    let ignored = answers.len().saturating_sub(known);
    if ignored > 0 {
        log::debug!("{kind} stage ignored {ignored} answers for questions outside the stage");
    }
    Ok(contributions)
}
