//! Axum route handlers for the Assessment API.

use std::collections::{BTreeMap, HashMap};

use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    http::StatusCode,
    Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::warn;
use uuid::Uuid;

use crate::assessment::aggregator::get_results;
use crate::assessment::models::{AssessmentType, ResultView};
use crate::assessment::question_bank::{self, Category, PublicQuestion, Track};
use crate::assessment::session_store::{AssessmentSession, Selection};
use crate::assessment::submission::{InterviewResponse, TestTally};
use crate::auth::Principal;
use crate::errors::{AppError, AssessmentError};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct SessionSummary {
    pub session_id: Uuid,
    pub principal_id: String,
    pub selection: Option<Selection>,
    pub track: Track,
    pub started_at: DateTime<Utc>,
    pub test_submitted: bool,
    pub interview_submitted: bool,
}

impl From<AssessmentSession> for SessionSummary {
    fn from(session: AssessmentSession) -> Self {
        Self {
            track: session.track(),
            session_id: session.session_id,
            principal_id: session.principal_id,
            selection: session.selection,
            started_at: session.started_at,
            test_submitted: session.test_raw_scores.is_some(),
            interview_submitted: session.interview_raw_responses.is_some(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct SelectionRequest {
    pub domain: String,
    #[serde(default, alias = "job_role")]
    pub role: String,
    #[serde(default, alias = "level")]
    pub difficulty: String,
}

#[derive(Debug, Serialize)]
pub struct SubmissionAck {
    pub status: &'static str,
    pub results_url: String,
}

impl SubmissionAck {
    fn success(assessment_type: AssessmentType) -> Self {
        Self {
            status: "success",
            results_url: format!("/api/v1/results?type={}", assessment_type.as_str()),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct InterviewSubmission {
    #[serde(default)]
    pub responses: Option<Vec<InterviewResponse>>,
}

#[derive(Debug, Serialize)]
pub struct InterviewQuestionsResponse {
    pub questions: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct ResultsQuery {
    #[serde(rename = "type")]
    pub assessment_type: Option<String>,
}

// ────────────────────────────────────────────────────────────────────────────
// Session lifecycle
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/session
pub async fn handle_begin_session(
    State(state): State<AppState>,
    Principal(principal): Principal,
) -> (StatusCode, Json<SessionSummary>) {
    let session = state.sessions.begin(&principal).await;
    (StatusCode::CREATED, Json(session.into()))
}

/// GET /api/v1/session
pub async fn handle_get_session(
    State(state): State<AppState>,
    Principal(principal): Principal,
) -> Result<Json<SessionSummary>, AppError> {
    let session = state
        .sessions
        .snapshot(&principal)
        .await
        .ok_or_else(|| AppError::NotFound(format!("No session for '{principal}'")))?;
    Ok(Json(session.into()))
}

/// DELETE /api/v1/session
pub async fn handle_end_session(
    State(state): State<AppState>,
    Principal(principal): Principal,
) -> StatusCode {
    state.sessions.end(&principal).await;
    StatusCode::NO_CONTENT
}

/// PUT /api/v1/session/selection
pub async fn handle_set_selection(
    State(state): State<AppState>,
    Principal(principal): Principal,
    payload: Result<Json<SelectionRequest>, JsonRejection>,
) -> Result<Json<SessionSummary>, AppError> {
    let Json(request) = payload.map_err(|r| AppError::Validation(r.body_text()))?;
    if request.domain.trim().is_empty() {
        return Err(AppError::Validation("domain cannot be empty".to_string()));
    }

    let selection = Selection {
        domain: request.domain.trim().to_string(),
        role: request.role.trim().to_string(),
        difficulty: request.difficulty.trim().to_string(),
    };
    let session = state.sessions.set_selection(&principal, selection).await;
    Ok(Json(session.into()))
}

// ────────────────────────────────────────────────────────────────────────────
// Question bank
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/questions
pub async fn handle_list_questions(
    _principal: Principal,
) -> Json<BTreeMap<Category, Vec<PublicQuestion>>> {
    Json(public_questions_for(question_bank::categories()))
}

/// GET /api/v1/questions/:category
pub async fn handle_category_questions(
    _principal: Principal,
    Path(category): Path<String>,
) -> Result<Json<Vec<PublicQuestion>>, AppError> {
    let category: Category = category.parse()?;
    Ok(Json(question_bank::public_questions(category)))
}

/// GET /api/v1/test/questions
///
/// The three categories for the principal's track: aptitude, verbal and one domain.
pub async fn handle_test_questions(
    State(state): State<AppState>,
    Principal(principal): Principal,
) -> Json<BTreeMap<Category, Vec<PublicQuestion>>> {
    let track = state
        .sessions
        .snapshot(&principal)
        .await
        .map(|s| s.track())
        .unwrap_or_default();
    Json(public_questions_for(&question_bank::categories_for_track(track)))
}

fn public_questions_for(categories: &[Category]) -> BTreeMap<Category, Vec<PublicQuestion>> {
    categories
        .iter()
        .map(|&c| (c, question_bank::public_questions(c)))
        .collect()
}

// ────────────────────────────────────────────────────────────────────────────
// Submissions
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/test/submit
///
/// Accepts a client-graded tally, e.g. `{"aptitude": 8, "verbal": 6, "it_domain": 4}`.
pub async fn handle_submit_test(
    State(state): State<AppState>,
    Principal(principal): Principal,
    payload: Result<Json<HashMap<String, Value>>, JsonRejection>,
) -> Result<Json<SubmissionAck>, AppError> {
    let Json(raw) = payload?;
    let tally = TestTally::from_raw(&raw).inspect_err(|e| {
        warn!(principal = %principal, "Rejected test submission: {e}");
    })?;

    state.sessions.record_test_submission(&principal, tally).await;
    Ok(Json(SubmissionAck::success(AssessmentType::Test)))
}

/// POST /api/v1/test/answers
///
/// Grades selected options server-side, e.g. `{"verbal": ["Delicate", "Tiny", ...]}`,
/// then records the resulting tally.
pub async fn handle_submit_answers(
    State(state): State<AppState>,
    Principal(principal): Principal,
    payload: Result<Json<HashMap<String, Vec<String>>>, JsonRejection>,
) -> Result<Json<SubmissionAck>, AppError> {
    let Json(answers) = payload?;
    let graded = answers
        .iter()
        .map(|(key, selected)| -> Result<(Category, u8), AssessmentError> {
            let category: Category = key.parse().map_err(|_| {
                AssessmentError::InvalidSubmission(format!("unrecognized category '{key}'"))
            })?;
            Ok((category, question_bank::grade(category, selected)))
        })
        .collect::<Result<Vec<_>, _>>()
        .and_then(TestTally::from_counts)
        .inspect_err(|e| {
            warn!(principal = %principal, "Rejected answer sheet: {e}");
        })?;

    state.sessions.record_test_submission(&principal, graded).await;
    Ok(Json(SubmissionAck::success(AssessmentType::Test)))
}

/// GET /api/v1/interview/questions
pub async fn handle_interview_questions(
    State(state): State<AppState>,
    _principal: Principal,
) -> Json<InterviewQuestionsResponse> {
    Json(InterviewQuestionsResponse {
        questions: state.config.interview_questions.clone(),
    })
}

/// POST /api/v1/interview/submit
pub async fn handle_submit_interview(
    State(state): State<AppState>,
    Principal(principal): Principal,
    payload: Result<Json<InterviewSubmission>, JsonRejection>,
) -> Result<Json<SubmissionAck>, AppError> {
    let Json(submission) = payload?;
    state
        .sessions
        .record_interview_submission(&principal, submission.responses.unwrap_or_default())
        .await;
    Ok(Json(SubmissionAck::success(AssessmentType::Interview)))
}

// ────────────────────────────────────────────────────────────────────────────
// Results
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/results?type=test|interview
///
/// Defaults to the interview when `type` is omitted.
pub async fn handle_results(
    State(state): State<AppState>,
    Principal(principal): Principal,
    Query(query): Query<ResultsQuery>,
) -> Json<ResultView> {
    let assessment_type = AssessmentType::from_param(query.assessment_type.as_deref());
    let view = get_results(
        &state.sessions,
        state.response_scorer.as_ref(),
        &principal,
        assessment_type,
    )
    .await;
    Json(view)
}
