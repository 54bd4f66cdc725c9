use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{ClassifierError, Result};

/// Lowest value on the response scale
pub const MIN_ANSWER: i64 = 1;

/// Highest value on the response scale
pub const MAX_ANSWER: i64 = 5;

/// Question id -> response, as recorded by whatever front end collected it.
///
/// Values are stored unchecked so that out-of-range input survives deserialization and is
/// reported as `InvalidAnswer` by the scorer instead of a generic parse failure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnswerSet {
    answers: BTreeMap<String, i64>,
}

impl AnswerSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record (or overwrite) the response to `question`.
    pub fn record(&mut self, question: impl Into<String>, value: i64) {
        self.answers.insert(question.into(), value);
    }

    /// Builder-style variant of [`AnswerSet::record`].
    pub fn with(mut self, question: impl Into<String>, value: i64) -> Self {
        self.record(question, value);
        self
    }

    pub fn get(&self, question: &str) -> Option<i64> {
        self.answers.get(question).copied()
    }

    pub fn len(&self) -> usize {
        self.answers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, i64)> {
        self.answers.iter().map(|(k, v)| (k.as_str(), *v))
    }

    /// First recorded response outside the scale, in question-id order.
    pub(crate) fn check_range(&self) -> Result<()> {
        match self
            .answers
            .iter()
            .find(|(_, value)| !(MIN_ANSWER..=MAX_ANSWER).contains(*value))
        {
            Some((question, value)) => Err(ClassifierError::invalid_answer(question, *value)),
            None => Ok(()),
        }
    }
}

impl<K: Into<String>> FromIterator<(K, i64)> for AnswerSet {
    fn from_iter<I: IntoIterator<Item = (K, i64)>>(iter: I) -> Self {
        Self {
            answers: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}

/// Answers for all three stages of one questionnaire run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StageAnswers {
    #[serde(default)]
    pub primary: AnswerSet,
    #[serde(default)]
    pub wing: AnswerSet,
    #[serde(default)]
    pub stack: AnswerSet,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn range_check_reports_first_offender() {
        let answers = AnswerSet::new().with("b", 6).with("a", 0).with("c", 3);
        assert_eq!(
            answers.check_range(),
            Err(ClassifierError::invalid_answer("a", 0))
        );
    }

    #[test]
    fn in_range_values_pass() {
        let answers: AnswerSet = (1..=5).map(|v| (format!("q{v}"), v)).collect();
        assert_eq!(answers.len(), 5);
        assert!(answers.check_range().is_ok());
    }

    #[test]
    fn deserializes_flat_map() {
        let stages: StageAnswers =
            serde_json::from_str(r#"{"primary": {"p1": 4}, "stack": {"s1": 9}}"#).unwrap();
        assert_eq!(stages.primary.get("p1"), Some(4));
        assert!(stages.wing.is_empty());
        assert_eq!(stages.stack.get("s1"), Some(9));
    }
}
