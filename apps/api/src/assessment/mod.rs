// Assessment scoring core: question bank, per-principal session state,
// test and interview scorers, and the unified result aggregator.
// Handlers are the only part that knows about HTTP.

pub mod aggregator;
pub mod handlers;
pub mod interview_scoring;
pub mod models;
pub mod question_bank;
pub mod session_store;
pub mod submission;
pub mod test_scoring;
