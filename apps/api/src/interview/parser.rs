//! Decoding of raw model replies. Models wrap JSON in markdown fences often
//! enough that every reply goes through `strip_code_fence` first.

use serde_json::Value;
use tracing::warn;

use crate::interview::models::GeneratedQuestion;
use crate::interview::AiError;

/// Loosely-typed evaluation reply, before reconciliation against the stored
/// questions. Fields the model got wrong are kept as "absent" rather than
/// failing the whole reply.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AiEvaluationPayload {
    pub overall_score: Option<f64>,
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
    pub recommendations: Vec<String>,
    /// `None` when `detailedFeedback` is missing or not a list.
    pub detailed_feedback: Option<Vec<FeedbackEntry>>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FeedbackEntry {
    pub question_id: Option<String>,
    pub question_text: Option<String>,
    pub score: Option<f64>,
    pub feedback: Option<String>,
}

/// Returns the interior of a leading ```` ``` ```` / ```` ```json ```` fence, up
/// to the first closing fence. Unfenced text is only trimmed.
pub fn strip_code_fence(raw: &str) -> &str {
    let trimmed = raw.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };

    let rest = match rest.split_once('\n') {
        Some((tag, body)) if tag.trim().chars().all(|c| c.is_ascii_alphanumeric()) => body,
        _ => rest.strip_prefix("json").unwrap_or(rest),
    };

    match rest.find("```") {
        Some(end) => rest[..end].trim(),
        None => rest.trim(),
    }
}

/// Accepts either a bare array or `{"questions": [...]}`. Anything else,
/// including a single malformed element, yields an empty list.
pub fn parse_questions(raw: &str) -> Vec<GeneratedQuestion> {
    let value: Value = match serde_json::from_str(strip_code_fence(raw)) {
        Ok(v) => v,
        Err(e) => {
            warn!("Question reply is not valid JSON: {e}");
            return Vec::new();
        }
    };

    let items = match value {
        Value::Array(items) => items,
        Value::Object(mut obj) => match obj.remove("questions") {
            Some(Value::Array(items)) => items,
            _ => {
                warn!("Question reply object has no `questions` array");
                return Vec::new();
            }
        },
        _ => return Vec::new(),
    };

    serde_json::from_value(Value::Array(items)).unwrap_or_else(|e| {
        warn!("Question reply has malformed entries: {e}");
        Vec::new()
    })
}

/// An empty generation is a failure, never an empty success.
pub fn validate_questions(
    questions: Vec<GeneratedQuestion>,
) -> Result<Vec<GeneratedQuestion>, AiError> {
    if questions.is_empty() {
        return Err(AiError::EmptyGeneration);
    }
    Ok(questions)
}

/// `None` only when the reply is not JSON. Valid JSON that is not an object
/// decodes to an empty payload, so every question gets the no-feedback entry.
pub fn parse_evaluation(raw: &str) -> Option<AiEvaluationPayload> {
    let value: Value = match serde_json::from_str(strip_code_fence(raw)) {
        Ok(v) => v,
        Err(e) => {
            warn!("Evaluation reply is not valid JSON: {e}");
            return None;
        }
    };
    let Some(obj) = value.as_object() else {
        warn!("Evaluation reply is JSON but not an object");
        return Some(AiEvaluationPayload::default());
    };

    Some(AiEvaluationPayload {
        overall_score: obj.get("overallScore").and_then(as_number),
        strengths: string_list(obj.get("strengths")),
        weaknesses: string_list(obj.get("weaknesses")),
        recommendations: string_list(obj.get("recommendations")),
        detailed_feedback: obj
            .get("detailedFeedback")
            .and_then(Value::as_array)
            .map(|entries| entries.iter().map(feedback_entry).collect()),
    })
}

fn feedback_entry(value: &Value) -> FeedbackEntry {
    FeedbackEntry {
        question_id: value.get("questionId").and_then(as_text),
        question_text: value.get("questionText").and_then(as_text),
        score: value.get("score").and_then(as_number),
        feedback: value.get("feedback").and_then(as_text),
    }
}

fn string_list(value: Option<&Value>) -> Vec<String> {
    value
        .and_then(Value::as_array)
        .map(|items| items.iter().filter_map(as_text).collect())
        .unwrap_or_default()
}

/// Models return ids as numbers as often as strings.
fn as_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

fn as_number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}
