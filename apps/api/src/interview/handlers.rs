//! Axum route handlers for question generation and interview evaluation.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::interview::models::{
    non_blank, GenerateQuestionsInput, GeneratedQuestion, InterviewEvaluation, SessionContext,
    StoredQuestion,
};
use crate::prompts::{build_generic_job_description, Locale};
use crate::state::AppState;

const DEFAULT_NUM_QUESTIONS: u32 = 5;
const MAX_NUM_QUESTIONS: u32 = 50;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateQuestionsRequest {
    /// Optional; a generic description is synthesised when absent.
    pub jd_text: Option<String>,
    pub level: String,
    pub industry: String,
    pub stack: Option<String>,
    pub position: Option<String>,
    pub num_questions: Option<u32>,
    pub language: Option<String>,
    pub ai_provider: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionResponse {
    #[serde(flatten)]
    pub question: GeneratedQuestion,
    /// Minutes allowed for the answer.
    pub time_limit: u32,
}

#[derive(Debug, Serialize)]
pub struct GenerateQuestionsResponse {
    pub questions: Vec<QuestionResponse>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InterviewSummaryRequest {
    pub session: SessionContext,
    pub questions: Vec<StoredQuestion>,
    pub language: Option<String>,
    pub ai_provider: Option<String>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/questions/generate
pub async fn handle_generate_questions(
    State(state): State<AppState>,
    Json(request): Json<GenerateQuestionsRequest>,
) -> Result<Json<GenerateQuestionsResponse>, AppError> {
    let input = generation_input(request)?;

    let questions = state.ai.generate_questions(&input).await?;

    Ok(Json(GenerateQuestionsResponse {
        questions: questions
            .into_iter()
            .map(|question| QuestionResponse {
                time_limit: question.question_type.time_limit_minutes(),
                question,
            })
            .collect(),
    }))
}

/// POST /api/v1/interview-summary
///
/// Scores a finished session. Unparsable model output degrades to a zero-score
/// evaluation rather than an error.
pub async fn handle_interview_summary(
    State(state): State<AppState>,
    Json(request): Json<InterviewSummaryRequest>,
) -> Result<Json<InterviewEvaluation>, AppError> {
    if request.questions.is_empty() {
        return Err(AppError::Validation(
            "questions cannot be empty".to_string(),
        ));
    }
    require_field("session.level", &request.session.level)?;
    require_field("session.industry", &request.session.industry)?;

    let locale = Locale::from_code(request.language.as_deref());
    let evaluation = state
        .ai
        .evaluate_session(
            locale,
            &request.session,
            &request.questions,
            request.ai_provider.as_deref(),
        )
        .await?;

    Ok(Json(evaluation))
}

/// Validates the request and fills in defaults, including the generic job
/// description when none was supplied.
fn generation_input(request: GenerateQuestionsRequest) -> Result<GenerateQuestionsInput, AppError> {
    require_field("level", &request.level)?;
    require_field("industry", &request.industry)?;

    let num_questions = request.num_questions.unwrap_or(DEFAULT_NUM_QUESTIONS);
    if !(1..=MAX_NUM_QUESTIONS).contains(&num_questions) {
        return Err(AppError::Validation(format!(
            "numQuestions must be between 1 and {MAX_NUM_QUESTIONS}"
        )));
    }

    let locale = Locale::from_code(request.language.as_deref());
    let jd_text = match non_blank(request.jd_text.as_deref()) {
        Some(text) => text.to_string(),
        None => build_generic_job_description(
            locale,
            request.level.trim(),
            request.industry.trim(),
            request.stack.as_deref(),
            request.position.as_deref(),
            num_questions,
        ),
    };

    Ok(GenerateQuestionsInput {
        jd_text,
        level: request.level.trim().to_string(),
        industry: request.industry.trim().to_string(),
        stack: request.stack,
        position: request.position,
        num_questions,
        locale: Some(locale.code().to_string()),
        provider_alias: request.ai_provider,
    })
}

fn require_field(name: &str, value: &str) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::Validation(format!("{name} cannot be empty")));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interview::models::{Difficulty, QuestionType};

    fn request(body: serde_json::Value) -> GenerateQuestionsRequest {
        serde_json::from_value(body).unwrap()
    }

    #[test]
    fn test_generation_input_defaults() {
        let input = generation_input(request(serde_json::json!({
            "jdText": "Rust backend engineer",
            "level": " SENIOR ",
            "industry": "IT"
        })))
        .unwrap();

        assert_eq!(input.num_questions, 5);
        assert_eq!(input.level, "SENIOR");
        assert_eq!(input.jd_text, "Rust backend engineer");
        assert_eq!(input.locale.as_deref(), Some("vi"));
        assert!(input.provider_alias.is_none());
    }

    #[test]
    fn test_missing_jd_uses_generic_description() {
        let input = generation_input(request(serde_json::json!({
            "jdText": "   ",
            "level": "JUNIOR",
            "industry": "IT",
            "stack": "Go",
            "numQuestions": 3,
            "language": "en"
        })))
        .unwrap();

        let expected =
            build_generic_job_description(Locale::English, "JUNIOR", "IT", Some("Go"), None, 3);
        assert_eq!(input.jd_text, expected);
        assert_eq!(input.locale.as_deref(), Some("en"));
    }

    #[test]
    fn test_num_questions_bounds() {
        for n in [0, 51] {
            let result = generation_input(request(serde_json::json!({
                "level": "JUNIOR",
                "industry": "IT",
                "numQuestions": n
            })));
            assert!(matches!(result, Err(AppError::Validation(_))), "n = {n}");
        }
    }

    #[test]
    fn test_blank_level_rejected() {
        let result = generation_input(request(serde_json::json!({
            "level": "",
            "industry": "IT"
        })));
        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[test]
    fn test_question_response_flattens_with_time_limit() {
        let response = QuestionResponse {
            question: GeneratedQuestion {
                question_text: "Walk through a recent incident".to_string(),
                expected_answer: String::new(),
                difficulty: Difficulty::Hard,
                question_type: QuestionType::Video,
            },
            time_limit: QuestionType::Video.time_limit_minutes(),
        };
        let value = serde_json::to_value(&response).unwrap();

        assert_eq!(value["questionText"], "Walk through a recent incident");
        assert_eq!(value["difficulty"], "HARD");
        assert_eq!(value["questionType"], "VIDEO");
        assert_eq!(value["timeLimit"], 5);
    }
}
