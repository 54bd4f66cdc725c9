use std::fmt;

use ennea_taxonomy::Category;
use serde::{Deserialize, Serialize};

use crate::answers::{AnswerSet, StageAnswers};
use crate::bank::QuestionBank;
use crate::error::Result;
use crate::instinct::{stack_code, Instinct};
use crate::scoring::{
    self, score_stage, CategoryScores, ScoreVector, Stage, StackScores, WingScores,
};

/// A primary category together with the wing it leans toward, written `4w5`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WingVariant {
    pub primary: Category,
    pub wing: Category,
}

impl WingVariant {
    pub fn code(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for WingVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}w{}", self.primary, self.wing)
    }
}

/// Outcome of one completed questionnaire run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassificationResult {
    pub primary: Category,
    pub wing: WingVariant,
    /// Instincts from dominant to repressed
    pub secondary_stack: [Instinct; 3],
    /// 0-100
    pub confidence: u8,
    /// Stage-1 accumulators, kept for display
    pub scores: CategoryScores,
}

impl ClassificationResult {
    /// Instinctual stack written the conventional way, e.g. `sp/so/sx`.
    pub fn stack_code(&self) -> String {
        stack_code(&self.secondary_stack)
    }
}

/// Stateless scorer over a borrowed [`QuestionBank`].
#[derive(Debug, Clone, Copy)]
pub struct Classifier<'a> {
    bank: &'a QuestionBank,
}

impl<'a> Classifier<'a> {
    pub fn new(bank: &'a QuestionBank) -> Self {
        Self { bank }
    }

    /// Score a single stage; see [`score_stage`].
    pub fn score_stage(&self, stage: Stage, answers: &AnswerSet) -> Result<ScoreVector> {
        score_stage(self.bank, stage, answers)
    }

    pub fn score_primary(&self, answers: &AnswerSet) -> Result<CategoryScores> {
        scoring::score_primary(self.bank, answers)
    }

    pub fn score_wing(&self, primary: Category, answers: &AnswerSet) -> Result<WingScores> {
        scoring::score_wing(self.bank, primary, answers)
    }

    pub fn score_stack(&self, answers: &AnswerSet) -> Result<StackScores> {
        scoring::score_stack(self.bank, answers)
    }

    /// Run all three stages. Fails on the first stage with bad or missing answers.
    pub fn classify(&self, answers: &StageAnswers) -> Result<ClassificationResult> {
        let scores = self.score_primary(&answers.primary)?;
        let (primary, top) = scores.top();
        let confidence = scores.confidence();

        let wing_scores = self.score_wing(primary, &answers.wing)?;
        let wing = WingVariant {
            primary,
            wing: wing_scores.chosen(),
        };

        let secondary_stack = self.score_stack(&answers.stack)?.ranked();

        log::debug!(
            "classified {wing} (top score {top}/{}, wing {}:{}), stack {}, \
             confidence {confidence}%",
            scores.total_possible(),
            wing_scores.low,
            wing_scores.high,
            stack_code(&secondary_stack),
        );

        Ok(ClassificationResult {
            primary,
            wing,
            secondary_stack,
            confidence,
            scores,
        })
    }
}
