//! Result Aggregator: picks the scorer for an assessment type and returns one `ResultView`.

use tracing::info;

use crate::assessment::interview_scoring::{score_interview, ResponseScorer};
use crate::assessment::models::{AssessmentType, ResultView};
use crate::assessment::session_store::SessionStore;
use crate::assessment::test_scoring::score_test;

/// A principal with no session, or no submission for the requested stage,
/// gets a zero-valued view rather than an error.
pub async fn get_results(
    store: &SessionStore,
    scorer: &dyn ResponseScorer,
    principal_id: &str,
    assessment_type: AssessmentType,
) -> ResultView {
    let session = store.snapshot(principal_id).await;

    let view = match assessment_type {
        AssessmentType::Test => score_test(session.as_ref().and_then(|s| s.test_raw_scores.as_ref())),
        AssessmentType::Interview => {
            let responses = session
                .as_ref()
                .and_then(|s| s.interview_raw_responses.as_deref())
                .unwrap_or_default();
            score_interview(scorer, responses)
        }
    };

    info!(
        principal = principal_id,
        assessment_type = assessment_type.as_str(),
        percentage = view.percentage,
        has_session = session.is_some(),
        "Results computed"
    );

    view
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assessment::interview_scoring::KeywordResponseScorer;
    use crate::assessment::models::ResultDetails;
    use crate::assessment::question_bank::Category;
    use crate::assessment::submission::{InterviewResponse, TestTally};

    #[tokio::test]
    async fn test_dispatches_to_test_scorer() {
        let store = SessionStore::new();
        store.begin("alice").await;
        let tally = TestTally::from_counts([
            (Category::Aptitude, 8),
            (Category::Verbal, 6),
            (Category::ItDomain, 4),
        ])
        .unwrap();
        store.record_test_submission("alice", tally).await;

        let view = get_results(&store, &KeywordResponseScorer, "alice", AssessmentType::Test).await;
        assert_eq!(view.assessment_type, AssessmentType::Test);
        assert_eq!(view.percentage, 6);
    }

    #[tokio::test]
    async fn test_dispatches_to_interview_scorer() {
        let store = SessionStore::new();
        store
            .record_interview_submission("alice", vec![InterviewResponse::new("Q", "")])
            .await;

        let view =
            get_results(&store, &KeywordResponseScorer, "alice", AssessmentType::Interview).await;
        assert_eq!(view.assessment_type, AssessmentType::Interview);
        assert_eq!(view.percentage, 2);
    }

    #[tokio::test]
    async fn test_no_session_degrades_to_zero() {
        let store = SessionStore::new();

        let test = get_results(&store, &KeywordResponseScorer, "ghost", AssessmentType::Test).await;
        assert_eq!(test.percentage, 0);
        assert_eq!(test.details, ResultDetails::Test(TestTally::default()));

        let interview =
            get_results(&store, &KeywordResponseScorer, "ghost", AssessmentType::Interview).await;
        assert_eq!(interview.percentage, 0);
        assert_eq!(interview.details, ResultDetails::Interview(vec![]));
    }

    #[tokio::test]
    async fn test_repeated_reads_are_identical() {
        let store = SessionStore::new();
        store
            .record_interview_submission(
                "alice",
                vec![
                    InterviewResponse::new("Q1", "I learned a lot on that project"),
                    InterviewResponse::default(),
                ],
            )
            .await;

        let first =
            get_results(&store, &KeywordResponseScorer, "alice", AssessmentType::Interview).await;
        let second =
            get_results(&store, &KeywordResponseScorer, "alice", AssessmentType::Interview).await;
        assert_eq!(first, second);

        let tally = TestTally::from_counts([
            (Category::Aptitude, 7),
            (Category::Verbal, 5),
            (Category::NonItDomain, 9),
        ])
        .unwrap();
        store.record_test_submission("alice", tally).await;

        let first = get_results(&store, &KeywordResponseScorer, "alice", AssessmentType::Test).await;
        let second = get_results(&store, &KeywordResponseScorer, "alice", AssessmentType::Test).await;
        assert_eq!(first, second);
        assert_eq!(first.percentage, 7);
    }

    #[tokio::test]
    async fn test_write_is_visible_to_next_read() {
        let store = SessionStore::new();
        store.begin("alice").await;
        let before = get_results(&store, &KeywordResponseScorer, "alice", AssessmentType::Test).await;
        assert_eq!(before.percentage, 0);

        let tally = TestTally::from_counts([(Category::Aptitude, 10), (Category::Verbal, 10)]).unwrap();
        store.record_test_submission("alice", tally).await;
        let after = get_results(&store, &KeywordResponseScorer, "alice", AssessmentType::Test).await;
        assert_eq!(after.percentage, 6);
    }
}
