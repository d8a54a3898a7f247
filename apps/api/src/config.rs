use anyhow::{Context, Result};

/// Interview prompts used when `INTERVIEW_QUESTIONS` is unset or blank.
pub const DEFAULT_INTERVIEW_QUESTIONS: &[&str] =
    &["Tell me about yourself.", "What are your strengths?"];

/// Sessions older than this are swept when `SESSION_TTL_SECS` is unset.
pub const DEFAULT_SESSION_TTL_SECS: u64 = 24 * 60 * 60;

/// Application configuration loaded from environment variables.
/// Every variable is optional; the service has no external backing stores.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Prompts served to the mock interview room. Never empty.
    pub interview_questions: Vec<String>,
    /// Maximum session age, measured from `started_at`.
    pub session_ttl_secs: u64,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            interview_questions: parse_interview_questions(
                std::env::var("INTERVIEW_QUESTIONS").ok().as_deref(),
            ),
            session_ttl_secs: std::env::var("SESSION_TTL_SECS")
                .unwrap_or_else(|_| DEFAULT_SESSION_TTL_SECS.to_string())
                .parse::<u64>()
                .context("SESSION_TTL_SECS must be a whole number of seconds")?,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 8080,
            rust_log: "info".to_string(),
            interview_questions: default_interview_questions(),
            session_ttl_secs: DEFAULT_SESSION_TTL_SECS,
        }
    }
}

/// Splits a `|`-separated prompt list, dropping blank entries.
/// Falls back to the defaults so the interview room is never empty.
fn parse_interview_questions(raw: Option<&str>) -> Vec<String> {
    let parsed: Vec<String> = raw
        .unwrap_or_default()
        .split('|')
        .map(str::trim)
        .filter(|q| !q.is_empty())
        .map(str::to_string)
        .collect();

    if parsed.is_empty() {
        default_interview_questions()
    } else {
        parsed
    }
}

fn default_interview_questions() -> Vec<String> {
    DEFAULT_INTERVIEW_QUESTIONS
        .iter()
        .map(|q| q.to_string())
        .collect()
}
