//! Interview Response Scoring: pluggable, trait-based scorer for free-text answers.
//!
//! Default: `KeywordResponseScorer` (deterministic length + keyword heuristic).
//!
//! `AppState` holds an `Arc<dyn ResponseScorer>`.

use crate::assessment::models::{AssessmentType, ResultDetails, ResultView, ScoredInterviewItem};
use crate::assessment::submission::InterviewResponse;

// ────────────────────────────────────────────────────────────────────────────
// Scoring constants
// ────────────────────────────────────────────────────────────────────────────

/// Answers with more whitespace-delimited tokens than this earn the long-answer points.
pub const LENGTH_TOKEN_THRESHOLD: usize = 10;
pub const LONG_ANSWER_POINTS: u32 = 5;
pub const SHORT_ANSWER_POINTS: u32 = 2;

/// Each distinct keyword found is worth one point, up to this cap.
pub const KEYWORD_POINTS_CAP: u32 = 5;
pub const INTERVIEW_KEYWORDS: [&str; 7] = [
    "experience",
    "skill",
    "team",
    "project",
    "learned",
    "challenge",
    "goal",
];

/// Upper bound on the interview percentage. A clamp, not a normalization.
pub const PERCENTAGE_CAP: u32 = 100;

pub const MISSING_QUESTION_TEXT: &str = "N/A";
pub const MISSING_ANSWER_TEXT: &str = "No response captured.";

// ────────────────────────────────────────────────────────────────────────────
// Trait definition
// ────────────────────────────────────────────────────────────────────────────

/// Scores one answer. Implement this to swap heuristics without touching the
/// aggregator or handlers.
pub trait ResponseScorer: Send + Sync {
    fn score_item(&self, answer: &str) -> u32;

    /// Backend label surfaced in results, for transparency.
    fn backend(&self) -> &str;
}

/// Length + keyword heuristic. Case-insensitive on the answer text.
///
/// Algorithm:
/// 1. More than 10 tokens → 5 points, otherwise 2
/// 2. One point per distinct keyword found as a substring, capped at 5
/// 3. Item score = 1 + 2, always within 2..=10
pub struct KeywordResponseScorer;

impl ResponseScorer for KeywordResponseScorer {
    fn score_item(&self, answer: &str) -> u32 {
        let answer = answer.to_lowercase();
        length_points(&answer) + keyword_points(&answer)
    }

    fn backend(&self) -> &str {
        "keyword"
    }
}

/// Unicode whitespace plus the ASCII file/group/record/unit separators (U+001C..=U+001F).
fn is_token_separator(c: char) -> bool {
    c.is_whitespace() || ('\x1c'..='\x1f').contains(&c)
}

fn token_count(answer: &str) -> usize {
    answer
        .split(is_token_separator)
        .filter(|token| !token.is_empty())
        .count()
}

fn length_points(answer: &str) -> u32 {
    if token_count(answer) > LENGTH_TOKEN_THRESHOLD {
        LONG_ANSWER_POINTS
    } else {
        SHORT_ANSWER_POINTS
    }
}

fn keyword_points(answer_lower: &str) -> u32 {
    let hits = INTERVIEW_KEYWORDS
        .iter()
        .filter(|keyword| answer_lower.contains(*keyword))
        .count() as u32;
    hits.min(KEYWORD_POINTS_CAP)
}

// ────────────────────────────────────────────────────────────────────────────
// Sequence scoring
// ────────────────────────────────────────────────────────────────────────────

/// Scores every response in order. Total over any input, including an empty one.
///
/// Only an absent answer gets the "No response captured." fallback in `details`;
/// an explicit empty string is echoed back as-is and still scores.
pub fn score_interview(scorer: &dyn ResponseScorer, responses: &[InterviewResponse]) -> ResultView {
    let mut total: u64 = 0;
    let mut items = Vec::with_capacity(responses.len());

    for response in responses {
        let score = scorer.score_item(response.answer.as_deref().unwrap_or_default());
        total += u64::from(score);

        items.push(ScoredInterviewItem {
            question: response
                .question
                .clone()
                .unwrap_or_else(|| MISSING_QUESTION_TEXT.to_string()),
            answer: response
                .answer
                .clone()
                .unwrap_or_else(|| MISSING_ANSWER_TEXT.to_string()),
            score,
        });
    }

    let percentage = total.min(u64::from(PERCENTAGE_CAP)) as u32;

    ResultView {
        assessment_type: AssessmentType::Interview,
        percentage,
        details: ResultDetails::Interview(items),
        scorer_backend: scorer.backend().to_string(),
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn items(view: &ResultView) -> &[ScoredInterviewItem] {
        match &view.details {
            ResultDetails::Interview(items) => items,
            other => panic!("expected interview details, got {other:?}"),
        }
    }

    #[test]
    fn test_long_answer_with_six_keywords_scores_ten() {
        let responses = vec![InterviewResponse::new(
            "Tell me about yourself.",
            "I have experience leading a team project and I learned a lot from every challenge and goal I set for myself over the years working hard",
        )];
        let view = score_interview(&KeywordResponseScorer, &responses);
        assert_eq!(items(&view)[0].score, 10);
        assert_eq!(view.percentage, 10);
    }

    #[test]
    fn test_empty_answer_scores_two_and_is_echoed() {
        let responses = vec![InterviewResponse::new("Q", "")];
        let view = score_interview(&KeywordResponseScorer, &responses);
        assert_eq!(view.percentage, 2);
        assert_eq!(items(&view)[0].answer, "");
    }

    #[test]
    fn test_absent_fields_use_fallback_text() {
        let view = score_interview(&KeywordResponseScorer, &[InterviewResponse::default()]);
        let item = &items(&view)[0];
        assert_eq!(item.question, "N/A");
        assert_eq!(item.answer, "No response captured.");
        assert_eq!(item.score, 2);
    }

    #[test]
    fn test_exactly_ten_tokens_is_short() {
        let answer = "one two three four five six seven eight nine ten";
        assert_eq!(KeywordResponseScorer.score_item(answer), SHORT_ANSWER_POINTS);
        let eleven = format!("{answer} eleven");
        assert_eq!(KeywordResponseScorer.score_item(&eleven), LONG_ANSWER_POINTS);
    }

    #[test]
    fn test_keywords_count_once_and_ignore_case() {
        assert_eq!(KeywordResponseScorer.score_item("TEAM team Team"), 3);
        // substring match: "teamwork" and "skills" both count
        assert_eq!(KeywordResponseScorer.score_item("Teamwork skills"), 4);
    }

    #[test]
    fn test_whitespace_runs_do_not_add_tokens() {
        let answer = "a  b\t\tc\n\nd e f g h i j";
        assert_eq!(KeywordResponseScorer.score_item(answer), SHORT_ANSWER_POINTS);
    }

    #[test]
    fn test_separator_controls_split_tokens() {
        let unit_separated = "a\x1fb\x1fc\x1fd\x1fe\x1ff\x1fg\x1fh\x1fi\x1fj\x1fk";
        assert_eq!(token_count(unit_separated), 11);
        assert_eq!(KeywordResponseScorer.score_item(unit_separated), LONG_ANSWER_POINTS);

        let mixed = "a\x1cb\x1dc\x1ed\u{a0}e\u{2003}f g\x1f\x1fh";
        assert_eq!(token_count(mixed), 8);
        assert_eq!(token_count("\x1f \x1c"), 0);
    }

    #[test]
    fn test_item_scores_stay_within_two_and_ten() {
        let answers = [
            "",
            "goal",
            "experience skill team project learned challenge goal",
            "experience skill team project learned challenge goal plus many more words here now",
            "a b c d e f g h i j k l m n o p",
        ];
        for answer in answers {
            let score = KeywordResponseScorer.score_item(answer);
            assert!((2..=10).contains(&score), "'{answer}' scored {score}");
        }
    }

    #[test]
    fn test_pathological_input_is_clamped_to_100() {
        let answer = "experience skill team project learned challenge goal and a few more words";
        let responses = vec![InterviewResponse::new("Q", answer); 1000];
        let view = score_interview(&KeywordResponseScorer, &responses);
        assert_eq!(view.percentage, 100);
        assert!(items(&view).iter().all(|item| item.score == 10));
    }

    #[test]
    fn test_empty_sequence_scores_zero() {
        let view = score_interview(&KeywordResponseScorer, &[]);
        assert_eq!(view.percentage, 0);
        assert!(items(&view).is_empty());
        assert_eq!(view.scorer_backend, "keyword");
    }

    #[test]
    fn test_item_order_is_preserved() {
        let responses = vec![
            InterviewResponse::new("First", "short"),
            InterviewResponse::new("Second", "my goal"),
        ];
        let view = score_interview(&KeywordResponseScorer, &responses);
        let questions: Vec<&str> = items(&view).iter().map(|i| i.question.as_str()).collect();
        assert_eq!(questions, vec!["First", "Second"]);
        assert_eq!(view.percentage, 5);
    }
}
