use serde::{Deserialize, Serialize};

use crate::assessment::submission::TestTally;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssessmentType {
    Test,
    #[default]
    Interview,
}

impl AssessmentType {
    /// `"test"` selects the knowledge test; every other value falls through to the interview.
    pub fn from_param(param: Option<&str>) -> Self {
        match param {
            Some("test") => AssessmentType::Test,
            _ => AssessmentType::Interview,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AssessmentType::Test => "test",
            AssessmentType::Interview => "interview",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoredInterviewItem {
    pub question: String,
    pub answer: String,
    pub score: u32,
}

/// Category→count mapping for the test; ordered item list for the interview.
/// Downstream rendering depends on this shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ResultDetails {
    Test(TestTally),
    Interview(Vec<ScoredInterviewItem>),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResultView {
    pub assessment_type: AssessmentType,
    pub percentage: u32, // 0 – 100
    pub details: ResultDetails,
    pub scorer_backend: String,
}
