//! Test Scorer: turns a validated category tally into a percentage.
//!
//! `percentage = floor(sum / 3)`: three categories of ten questions, a 30-point
//! raw maximum mapped coarsely onto 0–100. Integer truncation, never rounding.

use crate::assessment::models::{AssessmentType, ResultDetails, ResultView};
use crate::assessment::submission::TestTally;

/// Categories a single sitting covers: aptitude, verbal and one domain.
pub const TEST_CATEGORY_DIVISOR: u32 = 3;

pub const TEST_SCORER_BACKEND: &str = "tally";

/// Scores a tally. A missing or empty tally means "not taken yet" and yields 0.
pub fn score_test(tally: Option<&TestTally>) -> ResultView {
    let tally = tally.cloned().unwrap_or_default();

    if tally.has_both_domains() {
        tracing::warn!(
            total = tally.total(),
            "Tally carries both domain categories; percentage will be inflated"
        );
    }

    let percentage = if tally.is_empty() {
        0
    } else {
        tally.total() / TEST_CATEGORY_DIVISOR
    };

    ResultView {
        assessment_type: AssessmentType::Test,
        percentage,
        details: ResultDetails::Test(tally),
        scorer_backend: TEST_SCORER_BACKEND.to_string(),
    }
}
