//! Prompt assembly. Section order is fixed; locales only change the strings.

use crate::interview::models::{
    non_blank, GenerateQuestionsInput, QuestionAnswerPair, SessionContext,
};
use crate::prompts::{for_locale, Locale, QuestionTemplate};

/// Builds the question-generation prompt in the input's locale.
///
/// Sections: system role, job description, interview details (omitted when the
/// JD already states industry, level, stack and position), requirement bullets,
/// stack instruction (only with a stack), JSON format, field-name hint.
pub fn build_question_prompt(input: &GenerateQuestionsInput) -> String {
    let template = &for_locale(Locale::from_code(input.locale.as_deref())).question;
    let jd_text = strip_redundant_header(&input.jd_text, template);

    let mut sections: Vec<String> = vec![
        template.system_role.to_string(),
        format!("{}: {}", template.job_description_label, jd_text),
    ];

    if !jd_covers_interview_details(jd_text, input) {
        sections.push(interview_details_block(template, input));
    }

    sections.push(format!(
        "{}:\n{}",
        template.requirements_label,
        bullet_list(template.requirements)
    ));

    if let Some(stack) = non_blank(input.stack.as_deref()) {
        sections.push((template.stack_requirement)(stack));
    }

    sections.push(template.json_format_instruction.to_string());
    sections.push(format!(
        "{} and {}:",
        template.question_text_label, template.expected_answer_label
    ));

    sections.join("\n\n")
}

/// Builds the evaluation prompt: session metadata, one numbered block per
/// question/answer pair, evaluation requirements, JSON format, field-name hint.
pub fn build_evaluation_prompt(
    locale: Locale,
    pairs: &[QuestionAnswerPair],
    session: &SessionContext,
) -> String {
    let template = &for_locale(locale).evaluation;

    let mut details = vec![
        format!("- {}: {}", template.level_label, session.level),
        format!("- {}: {}", template.industry_label, session.industry),
    ];
    if let Some(stack) = non_blank(session.stack.as_deref()) {
        details.push(format!("- {}: {}", template.stack_label, stack));
    }
    if let Some(position) = non_blank(session.position.as_deref()) {
        details.push(format!("- {}: {}", template.position_label, position));
    }

    let mut sections: Vec<String> = vec![
        template.system_role.to_string(),
        format!("{}:\n{}", template.interview_details_label, details.join("\n")),
    ];

    for (index, pair) in pairs.iter().enumerate() {
        sections.push(format!(
            "{} {}: {}\n{}: {}\n{}: {}\n{}: {}",
            template.question_label,
            index + 1,
            pair.question_text,
            template.expected_answer_label,
            pair.expected_answer,
            template.candidate_answer_label,
            pair.candidate_answer,
            template.difficulty_label,
            pair.difficulty,
        ));
    }

    sections.push(format!(
        "{}:\n{}",
        template.requirements_label,
        bullet_list(template.requirements)
    ));
    sections.push(template.json_format_instruction.to_string());
    sections.push(format!(
        "{}, {}, {}, {}, and {}:",
        template.overall_score_label,
        template.strengths_label,
        template.weaknesses_label,
        template.recommendations_label,
        template.detailed_feedback_label,
    ));

    sections.join("\n\n")
}

/// Drops a system-role preamble and a following "<JD label>:" that a caller
/// may already have prepended, so the header is not repeated.
fn strip_redundant_header<'a>(jd_text: &'a str, template: &QuestionTemplate) -> &'a str {
    let Some(rest) = jd_text.strip_prefix(template.system_role) else {
        return jd_text.trim();
    };
    let rest = rest.trim();

    strip_prefix_ignore_case(rest, template.job_description_label)
        .and_then(|after| after.trim_start().strip_prefix(':'))
        .map(str::trim)
        .unwrap_or(rest)
}

fn strip_prefix_ignore_case<'a>(text: &'a str, prefix: &str) -> Option<&'a str> {
    let mut chars = text.char_indices();
    for expected in prefix.chars() {
        let (_, actual) = chars.next()?;
        if !actual.to_lowercase().eq(expected.to_lowercase()) {
            return None;
        }
    }
    let consumed = chars.next().map(|(i, _)| i).unwrap_or(text.len());
    Some(&text[consumed..])
}

/// True only when industry, level, stack and position are all supplied and
/// all already appear in the JD text.
fn jd_covers_interview_details(jd_text: &str, input: &GenerateQuestionsInput) -> bool {
    let jd_lower = jd_text.to_lowercase();
    let mentions = |value: Option<&str>| {
        non_blank(value).is_some_and(|v| jd_lower.contains(&v.to_lowercase()))
    };

    mentions(Some(input.industry.as_str()))
        && mentions(Some(input.level.as_str()))
        && mentions(input.stack.as_deref())
        && mentions(input.position.as_deref())
}

fn interview_details_block(template: &QuestionTemplate, input: &GenerateQuestionsInput) -> String {
    let mut lines = vec![
        format!("{}:", template.interview_details_label),
        format!("- {}: {}", template.industry_label, input.industry),
        format!("- {}: {}", template.level_label, input.level),
    ];
    if let Some(stack) = non_blank(input.stack.as_deref()) {
        lines.push(format!("- {}: {}", template.stack_label, stack));
    }
    if let Some(position) = non_blank(input.position.as_deref()) {
        lines.push(format!("- {}: {}", template.position_label, position));
    }
    lines.push(format!(
        "- {}: {}",
        template.num_questions_label, input.num_questions
    ));
    lines.join("\n")
}

fn bullet_list(items: &[&str]) -> String {
    items
        .iter()
        .map(|item| format!("- {item}"))
        .collect::<Vec<_>>()
        .join("\n")
}
