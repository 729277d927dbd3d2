// Locale-specific prompt templates and the builders that assemble them.
// Each locale module only supplies strings; assembly lives in builder.rs.

pub mod builder;
pub mod english;
pub mod generic_jd;
pub mod vietnamese;

pub use builder::{build_evaluation_prompt, build_question_prompt};
pub use generic_jd::build_generic_job_description;

/// The two supported prompt/response dialects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Locale {
    English,
    #[default]
    Vietnamese,
}

impl Locale {
    /// `"en"` selects English; anything else, including no code, selects the default.
    pub fn from_code(code: Option<&str>) -> Self {
        match code.map(|c| c.trim().to_ascii_lowercase()).as_deref() {
            Some("en") => Locale::English,
            Some("vi") => Locale::Vietnamese,
            _ => Locale::default(),
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            Locale::English => "en",
            Locale::Vietnamese => "vi",
        }
    }
}

/// Strings for the question-generation prompt.
pub struct QuestionTemplate {
    pub system_role: &'static str,
    pub job_description_label: &'static str,
    pub interview_details_label: &'static str,
    pub industry_label: &'static str,
    pub level_label: &'static str,
    pub stack_label: &'static str,
    pub position_label: &'static str,
    pub num_questions_label: &'static str,
    pub requirements_label: &'static str,
    pub requirements: &'static [&'static str],
    pub stack_requirement: fn(&str) -> String,
    /// Exact reply shape the parser expects back.
    pub json_format_instruction: &'static str,
    pub question_text_label: &'static str,
    pub expected_answer_label: &'static str,
}

/// Strings for the answer-evaluation prompt.
pub struct EvaluationTemplate {
    pub system_role: &'static str,
    pub interview_details_label: &'static str,
    pub level_label: &'static str,
    pub industry_label: &'static str,
    pub stack_label: &'static str,
    pub position_label: &'static str,
    pub question_label: &'static str,
    pub expected_answer_label: &'static str,
    pub candidate_answer_label: &'static str,
    pub difficulty_label: &'static str,
    pub requirements_label: &'static str,
    pub requirements: &'static [&'static str],
    pub json_format_instruction: &'static str,
    pub overall_score_label: &'static str,
    pub strengths_label: &'static str,
    pub weaknesses_label: &'static str,
    pub recommendations_label: &'static str,
    pub detailed_feedback_label: &'static str,
}

pub struct Templates {
    pub question: QuestionTemplate,
    pub evaluation: EvaluationTemplate,
}

pub fn for_locale(locale: Locale) -> &'static Templates {
    match locale {
        Locale::English => &english::TEMPLATES,
        Locale::Vietnamese => &vietnamese::TEMPLATES,
    }
}
