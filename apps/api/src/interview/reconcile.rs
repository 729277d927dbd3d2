//! Aligns the model's per-question feedback with the questions actually asked.
//!
//! The model may reorder, drop, renumber or paraphrase entries, so every stored
//! question is matched independently: by id, then by exact question text, then
//! by position. The result always has exactly one feedback entry per question.

use crate::interview::models::{InterviewEvaluation, QuestionFeedback, StoredQuestion};
use crate::interview::parser::{AiEvaluationPayload, FeedbackEntry};

pub const NO_SPECIFIC_FEEDBACK: &str = "No specific feedback";
pub const NO_FEEDBACK_PROVIDED: &str = "No feedback provided";
pub const COULD_NOT_EVALUATE: &str = "Could not evaluate answer";

/// Finds the feedback entry for the question at `index`.
pub fn match_feedback<'a>(
    index: usize,
    question: &StoredQuestion,
    entries: &'a [FeedbackEntry],
) -> Option<&'a FeedbackEntry> {
    entries
        .iter()
        .find(|e| e.question_id.as_deref().map(str::trim) == Some(question.id.trim()))
        .or_else(|| {
            entries.iter().find(|e| {
                e.question_text.as_deref().map(str::trim) == Some(question.question_text.trim())
            })
        })
        .or_else(|| entries.get(index))
}

/// Scores in (0, 10] are taken as a ten-point scale. Everything is rounded and
/// clamped to 0–100.
pub fn normalize_score(raw: f64) -> u32 {
    if !raw.is_finite() {
        return 0;
    }
    let scaled = if raw > 0.0 && raw <= 10.0 { raw * 10.0 } else { raw };
    scaled.round().clamp(0.0, 100.0) as u32
}

/// Rounded mean of the per-question scores; 0 when there are none.
pub fn overall_score(feedback: &[QuestionFeedback]) -> u32 {
    if feedback.is_empty() {
        return 0;
    }
    let total: u32 = feedback.iter().map(|f| f.score).sum();
    (f64::from(total) / feedback.len() as f64).round() as u32
}

/// Builds the final evaluation. The model's own `overallScore` is ignored in
/// favour of the mean of the reconciled scores.
pub fn reconcile(questions: &[StoredQuestion], payload: &AiEvaluationPayload) -> InterviewEvaluation {
    let detailed_feedback: Vec<QuestionFeedback> = match &payload.detailed_feedback {
        Some(entries) => questions
            .iter()
            .enumerate()
            .map(|(index, question)| match match_feedback(index, question, entries) {
                Some(entry) => QuestionFeedback {
                    question_id: question.id.clone(),
                    score: entry.score.map(normalize_score).unwrap_or(0),
                    feedback: entry
                        .feedback
                        .as_deref()
                        .map(str::trim)
                        .filter(|f| !f.is_empty())
                        .unwrap_or(NO_SPECIFIC_FEEDBACK)
                        .to_string(),
                },
                None => placeholder(question, NO_SPECIFIC_FEEDBACK),
            })
            .collect(),
        None => questions
            .iter()
            .map(|q| placeholder(q, NO_FEEDBACK_PROVIDED))
            .collect(),
    };

    InterviewEvaluation {
        overall_score: overall_score(&detailed_feedback),
        strengths: payload.strengths.clone(),
        weaknesses: payload.weaknesses.clone(),
        recommendations: payload.recommendations.clone(),
        detailed_feedback,
    }
}

/// Result used when the reply could not be decoded at all.
pub fn degraded_evaluation(questions: &[StoredQuestion]) -> InterviewEvaluation {
    InterviewEvaluation {
        overall_score: 0,
        strengths: Vec::new(),
        weaknesses: Vec::new(),
        recommendations: Vec::new(),
        detailed_feedback: questions
            .iter()
            .map(|q| placeholder(q, COULD_NOT_EVALUATE))
            .collect(),
    }
}

fn placeholder(question: &StoredQuestion, feedback: &str) -> QuestionFeedback {
    QuestionFeedback {
        question_id: question.id.clone(),
        score: 0,
        feedback: feedback.to_string(),
    }
}
