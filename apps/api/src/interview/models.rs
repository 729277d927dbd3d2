use serde::{Deserialize, Serialize};

pub const NO_EXPECTED_ANSWER: &str = "No expected answer provided";
pub const NO_CANDIDATE_ANSWER: &str = "No answer provided";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Difficulty {
    #[serde(alias = "easy", alias = "Easy")]
    Easy,
    #[serde(alias = "medium", alias = "Medium")]
    Medium,
    #[serde(alias = "hard", alias = "Hard")]
    Hard,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum QuestionType {
    #[default]
    #[serde(alias = "text", alias = "Text")]
    Text,
    #[serde(alias = "video", alias = "Video")]
    Video,
}

impl QuestionType {
    /// Answer time allowed per question, in minutes.
    pub fn time_limit_minutes(self) -> u32 {
        match self {
            QuestionType::Text => 3,
            QuestionType::Video => 5,
        }
    }
}

/// One interview question as returned by the model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedQuestion {
    pub question_text: String,
    #[serde(default)]
    pub expected_answer: String,
    pub difficulty: Difficulty,
    #[serde(default)]
    pub question_type: QuestionType,
}

/// Everything a provider needs to generate questions.
#[derive(Debug, Clone, Default)]
pub struct GenerateQuestionsInput {
    pub jd_text: String,
    pub level: String,
    pub industry: String,
    pub stack: Option<String>,
    pub position: Option<String>,
    pub num_questions: u32,
    pub locale: Option<String>,
    pub provider_alias: Option<String>,
}

/// A fully built evaluation prompt plus routing hints.
#[derive(Debug, Clone, Default)]
pub struct EvaluateInterviewInput {
    pub prompt: String,
    pub locale: Option<String>,
    pub provider_alias: Option<String>,
}

/// Session metadata shown to the model ahead of the answers.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionContext {
    pub level: String,
    pub industry: String,
    pub stack: Option<String>,
    pub position: Option<String>,
}

/// A question record from the caller's store, with the candidate's answer if any.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredQuestion {
    pub id: String,
    pub question_text: String,
    pub expected_answer: Option<String>,
    pub candidate_answer: Option<String>,
    pub difficulty: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct QuestionAnswerPair {
    pub question_id: String,
    pub question_text: String,
    pub expected_answer: String,
    pub candidate_answer: String,
    pub difficulty: String,
}

impl From<&StoredQuestion> for QuestionAnswerPair {
    fn from(q: &StoredQuestion) -> Self {
        Self {
            question_id: q.id.clone(),
            question_text: q.question_text.clone(),
            expected_answer: non_blank(q.expected_answer.as_deref())
                .unwrap_or(NO_EXPECTED_ANSWER)
                .to_string(),
            candidate_answer: non_blank(q.candidate_answer.as_deref())
                .unwrap_or(NO_CANDIDATE_ANSWER)
                .to_string(),
            difficulty: q.difficulty.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionFeedback {
    pub question_id: String,
    /// 0 – 100
    pub score: u32,
    pub feedback: String,
}

/// Final evaluation document. `detailed_feedback` always has one entry per
/// stored question.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InterviewEvaluation {
    /// 0 – 100
    pub overall_score: u32,
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
    pub recommendations: Vec<String>,
    pub detailed_feedback: Vec<QuestionFeedback>,
}

pub(crate) fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}
