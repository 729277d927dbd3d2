use crate::prompts::{EvaluationTemplate, QuestionTemplate, Templates};

fn stack_requirement(stack: &str) -> String {
    format!("Focus on {stack}-specific technologies and best practices")
}

pub static TEMPLATES: Templates = Templates {
    question: QuestionTemplate {
        system_role: "You are an expert interviewer. Based on the detailed job description below, \
            create appropriate interview questions:",
        job_description_label: "Detailed Job Description",
        interview_details_label: "Interview Requirements",
        industry_label: "Industry",
        level_label: "Level",
        stack_label: "Technology Stack",
        position_label: "Position",
        num_questions_label: "Number of questions",
        requirements_label: "Question Creation Requirements",
        requirements: &[
            "Analyze the Detailed Job Description carefully to identify specific technical requirements",
            "Create questions appropriate for the position, level, and required technology",
            "Generate diverse questions covering technical skills, problem-solving, and practical experience",
            "Include a mix of difficulty levels (EASY, MEDIUM, HARD)",
            "ALL questions must be TEXT type only (no VIDEO questions for now)",
            "Provide expected/model answers for each question",
            "Prioritize topics and technologies explicitly mentioned in the job description",
        ],
        stack_requirement,
        json_format_instruction: r#"Return the response in JSON format with a "questions" array containing objects with structure: {questionText: "question content", expectedAnswer: "detailed expected answer", difficulty: "EASY | MEDIUM | HARD", questionType: "TEXT"}. Example: {"questions":[{"questionText":"Question content","expectedAnswer":"Detailed answer","difficulty":"MEDIUM","questionType":"TEXT"}]}"#,
        question_text_label: "questionText",
        expected_answer_label: "expectedAnswer",
    },
    evaluation: EvaluationTemplate {
        system_role: "You are an expert technical interviewer. Evaluate the following mock interview answers.",
        interview_details_label: "Mock Interview Details",
        level_label: "Level",
        industry_label: "Industry",
        stack_label: "Stack",
        position_label: "Position",
        question_label: "Question",
        expected_answer_label: "Expected Answer",
        candidate_answer_label: "Candidate's Answer",
        difficulty_label: "Difficulty",
        requirements_label: "Evaluation Requirements",
        requirements: &[
            "Analyze technical accuracy and completeness of responses",
            "Assess communication skills and clarity of explanations",
            "Evaluate problem-solving approach and methodology",
            "Provide constructive feedback for improvement",
            r#"MUST assign score 0 if the answer is "No answer", "I don't know", or meaningless."#,
            "Assign a score (0-100) for EACH question. Be strict and fair.",
            "Provide detailed, educational `expectedAnswer` and `feedback` to help the candidate learn.",
        ],
        json_format_instruction: r#"Return ONLY valid JSON (no markdown formatting, no ```json wrapper). Example: {"overallScore": 85, "strengths": ["Strong PHP knowledge"], "weaknesses": ["Weak on security"], "recommendations": ["Study CSRF"], "detailedFeedback": [{"questionText": "What is DI?", "score": 80, "feedback": "Explanation lacked depth. DI is a design pattern that..."}]}"#,
        overall_score_label: "overallScore",
        strengths_label: "strengths",
        weaknesses_label: "weaknesses",
        recommendations_label: "recommendations",
        detailed_feedback_label: "detailedFeedback",
    },
};
