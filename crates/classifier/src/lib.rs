//! # Ennea Classifier
//!
//! Turns the answers of a three-stage questionnaire into a classification.
//!
//! ## Pipeline
//!
//! ```text
//! StageAnswers
//!     │
//!     ├──> Stage 1: primary questions → 9 category accumulators
//!     │      ├─ highest score wins (ties → lowest id)
//!     │      └─ confidence = min(100, round(top / (ceiling / 9) × 100))
//!     │
//!     ├──> Stage 2: the winner's wing questions → 2 accumulators
//!     │      └─ higher wing wins (ties → low wing)
//!     │
//!     └──> Stage 3: stack questions → sp / so / sx accumulators
//!            └─ sorted descending (ties → sp, so, sx)
//! ```
//!
//! Which question scores what lives in a [`QuestionBank`], loaded from the bundled dataset
//! or a user JSON/TOML file. The classifier itself keeps no state between calls.
//!
//! ## Example
//!
//! ```rust
//! use ennea_classifier::{AnswerSet, Classifier, QuestionBank, Stage, ScoreVector};
//!
//! let bank = QuestionBank::bundled();
//! let answers: AnswerSet = bank
//!     .stack_questions()
//!     .iter()
//!     .map(|q| (q.id.clone(), 3))
//!     .collect();
//!
//! let classifier = Classifier::new(&bank);
//! let ScoreVector::Stack(scores) = classifier.score_stage(Stage::Stack, &answers).unwrap() else {
//!     unreachable!()
//! };
//! println!("stack: {:?}", scores.ranked());
//! ```

mod answers;
mod bank;
mod classify;
mod error;
mod instinct;
mod scoring;

pub use answers::{AnswerSet, StageAnswers, MAX_ANSWER, MIN_ANSWER};
pub use bank::{PrimaryQuestion, QuestionBank, StackQuestion, WingQuestion};
pub use classify::{ClassificationResult, Classifier, WingVariant};
pub use error::{ClassifierError, Result};
pub use instinct::{stack_code, Instinct};
pub use scoring::{
    confidence, score_primary, score_stack, score_stage, score_wing, CategoryScores, ScoreVector,
    StackScores, Stage, StageKind, WingScores,
};
