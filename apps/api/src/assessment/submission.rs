//! Boundary validation for client-submitted payloads.
//!
//! Raw tallies arrive as loosely-typed JSON maps. They are turned into a
//! [`TestTally`] here, before anything reaches the scorers, which only ever
//! see validated data.

use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::assessment::question_bank::{Category, QUESTIONS_PER_CATEGORY};
use crate::errors::AssessmentError;

/// Per-category count of correctly answered questions. Every value is in `0..=10`
/// and every key is a known category.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct TestTally(BTreeMap<Category, u8>);

impl TestTally {
    /// Validates a raw client tally. Rejects unknown keys and any value that is
    /// not an integer in `0..=10`.
    pub fn from_raw(raw: &HashMap<String, Value>) -> Result<Self, AssessmentError> {
        let mut counts = BTreeMap::new();

        for (key, value) in raw {
            let category: Category = key.parse().map_err(|_| {
                AssessmentError::InvalidSubmission(format!("unrecognized category '{key}'"))
            })?;

            let count = value
                .as_u64()
                .filter(|n| *n <= QUESTIONS_PER_CATEGORY as u64)
                .ok_or_else(|| {
                    AssessmentError::InvalidSubmission(format!(
                        "'{key}' must be an integer between 0 and {QUESTIONS_PER_CATEGORY}, got {value}"
                    ))
                })?;

            counts.insert(category, count as u8);
        }

        Ok(TestTally(counts))
    }

    /// Builds a tally from already-graded counts.
    pub fn from_counts<I>(counts: I) -> Result<Self, AssessmentError>
    where
        I: IntoIterator<Item = (Category, u8)>,
    {
        let mut tally = BTreeMap::new();
        for (category, count) in counts {
            if count as usize > QUESTIONS_PER_CATEGORY {
                return Err(AssessmentError::InvalidSubmission(format!(
                    "'{category}' count {count} exceeds {QUESTIONS_PER_CATEGORY}"
                )));
            }
            tally.insert(category, count);
        }
        Ok(TestTally(tally))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn total(&self) -> u32 {
        self.0.values().map(|&n| u32::from(n)).sum()
    }

    /// Both domain categories present. Inflates the sum the test scorer divides by 3.
    pub fn has_both_domains(&self) -> bool {
        self.0.contains_key(&Category::ItDomain) && self.0.contains_key(&Category::NonItDomain)
    }
}

/// One captured interview answer. `null` and a missing key are both treated as absent;
/// an explicit empty string is kept as-is.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterviewResponse {
    #[serde(default)]
    pub question: Option<String>,
    #[serde(default)]
    pub answer: Option<String>,
}

#[cfg(test)]
impl InterviewResponse {
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: Some(question.into()),
            answer: Some(answer.into()),
        }
    }
}
