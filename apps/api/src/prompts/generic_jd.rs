//! Stand-in job description for sessions created without one.

use crate::interview::models::non_blank;
use crate::prompts::Locale;

/// Synthesises a job description from the session parameters. IT sessions get
/// technical focus areas; every other industry gets professional ones.
pub fn build_generic_job_description(
    locale: Locale,
    level: &str,
    industry: &str,
    stack: Option<&str>,
    position: Option<&str>,
    num_questions: u32,
) -> String {
    let is_it = industry.trim().eq_ignore_ascii_case("IT");
    let stack = non_blank(stack);
    let position = non_blank(position);

    match locale {
        Locale::English => english(level, industry, stack, position, num_questions, is_it),
        Locale::Vietnamese => vietnamese(level, industry, stack, position, num_questions, is_it),
    }
}

fn english(
    level: &str,
    industry: &str,
    stack: Option<&str>,
    position: Option<&str>,
    num_questions: u32,
    is_it: bool,
) -> String {
    let position = position.unwrap_or(if is_it { "developer" } else { "professional" });
    let specialization = match stack {
        Some(stack) if is_it => format!(" specializing in {stack}"),
        _ => String::new(),
    };
    let focus = if is_it {
        format!(
            "- {} technical skills and knowledge\n\
             - Problem-solving and system design (for senior levels)\n\
             - Code quality, testing, and debugging\n\
             - Relevant frameworks, tools, and technologies",
            stack.unwrap_or("General")
        )
    } else {
        "- Industry-specific professional skills and knowledge\n\
         - Problem-solving and strategic thinking\n\
         - Best practices and compliance (if applicable)\n\
         - Relevant tools and methodologies"
            .to_string()
    };

    format!(
        "Generate {num_questions} interview questions for a {level} level {position} position{specialization} in the {industry} industry.\n\n\
         Focus on:\n\
         {focus}\n\
         - Core competencies for {level} level\n\
         - Behavioral questions related to team collaboration and leadership\n\n\
         Provide questions with varying difficulty levels appropriate for {level} level candidates in {industry}."
    )
}

fn vietnamese(
    level: &str,
    industry: &str,
    stack: Option<&str>,
    position: Option<&str>,
    num_questions: u32,
    is_it: bool,
) -> String {
    let position = position.unwrap_or(if is_it { "developer" } else { "chuyên viên" });
    let specialization = match stack {
        Some(stack) if is_it => format!(" chuyên về {stack}"),
        _ => String::new(),
    };
    let focus = if is_it {
        format!(
            "- Kỹ năng và kiến thức kỹ thuật về {}\n\
             - Giải quyết vấn đề và thiết kế hệ thống (cho cấp độ senior)\n\
             - Chất lượng code, testing và debugging\n\
             - Các framework, công cụ và công nghệ liên quan",
            stack.unwrap_or("Tổng quát")
        )
    } else {
        "- Kỹ năng chuyên môn đặc thù của ngành\n\
         - Giải quyết vấn đề và tư duy chiến lược\n\
         - Thực tiễn tốt nhất và tuân thủ quy định (nếu có)\n\
         - Công cụ và phương pháp liên quan"
            .to_string()
    };

    format!(
        "Tạo {num_questions} câu hỏi phỏng vấn cho vị trí {position} cấp độ {level}{specialization} trong ngành {industry}.\n\n\
         Tập trung vào:\n\
         {focus}\n\
         - Năng lực cốt lõi cho cấp độ {level}\n\
         - Câu hỏi về hành vi liên quan đến làm việc nhóm và lãnh đạo\n\n\
         Cung cấp các câu hỏi với mức độ khó khác nhau phù hợp cho ứng viên cấp độ {level} trong ngành {industry}."
    )
}
