pub mod health;

use axum::{
    routing::{get, post, put},
    Router,
};

use crate::assessment::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Session lifecycle
        .route(
            "/api/v1/session",
            post(handlers::handle_begin_session)
                .get(handlers::handle_get_session)
                .delete(handlers::handle_end_session),
        )
        .route(
            "/api/v1/session/selection",
            put(handlers::handle_set_selection),
        )
        // Question bank
        .route("/api/v1/questions", get(handlers::handle_list_questions))
        .route(
            "/api/v1/questions/:category",
            get(handlers::handle_category_questions),
        )
        // Knowledge test
        .route("/api/v1/test/questions", get(handlers::handle_test_questions))
        .route("/api/v1/test/submit", post(handlers::handle_submit_test))
        .route("/api/v1/test/answers", post(handlers::handle_submit_answers))
        // Mock interview
        .route(
            "/api/v1/interview/questions",
            get(handlers::handle_interview_questions),
        )
        .route(
            "/api/v1/interview/submit",
            post(handlers::handle_submit_interview),
        )
        // Unified results
        .route("/api/v1/results", get(handlers::handle_results))
        .with_state(state)
}
