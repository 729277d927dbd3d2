use crate::prompts::{EvaluationTemplate, QuestionTemplate, Templates};

fn stack_requirement(stack: &str) -> String {
    format!("Tập trung vào công nghệ và thực tiễn tốt nhất của {stack}")
}

pub static TEMPLATES: Templates = Templates {
    question: QuestionTemplate {
        system_role: "Bạn là một chuyên gia phỏng vấn. Dựa trên mô tả công việc chi tiết dưới đây, \
            hãy tạo các câu hỏi phỏng vấn phù hợp:",
        job_description_label: "Mô tả công việc chi tiết",
        interview_details_label: "Yêu cầu phỏng vấn",
        industry_label: "Ngành",
        level_label: "Cấp độ",
        stack_label: "Công nghệ",
        position_label: "Vị trí",
        num_questions_label: "Số lượng câu hỏi",
        requirements_label: "Yêu cầu tạo câu hỏi",
        requirements: &[
            "Phân tích kỹ Mô tả công việc chi tiết để xác định các yêu cầu kỹ thuật cụ thể",
            "Tạo câu hỏi phù hợp với vị trí, cấp độ và công nghệ yêu cầu",
            "Tạo các câu hỏi đa dạng bao gồm kỹ năng kỹ thuật, giải quyết vấn đề và kinh nghiệm thực tế",
            "Bao gồm các mức độ khó khác nhau (EASY, MEDIUM, HARD)",
            "TẤT CẢ câu hỏi phải là loại TEXT (tạm thời không có câu hỏi VIDEO)",
            "Cung cấp câu trả lời mẫu chi tiết cho mỗi câu hỏi",
            "Ưu tiên các chủ đề và công nghệ được đề cập rõ ràng trong mô tả công việc",
        ],
        stack_requirement,
        json_format_instruction: r#"TRẢ LỜI BẰNG TIẾNG VIỆT. Trả về kết quả theo định dạng JSON với mảng "questions" chứa các đối tượng có cấu trúc: {questionText: "nội dung câu hỏi", expectedAnswer: "câu trả lời mẫu chi tiết", difficulty: "EASY | MEDIUM | HARD", questionType: "TEXT"}. Ví dụ: {"questions":[{"questionText":"Nội dung câu hỏi 1","expectedAnswer":"Câu trả lời chi tiết","difficulty":"MEDIUM","questionType":"TEXT"}]}"#,
        question_text_label: "questionText",
        expected_answer_label: "expectedAnswer",
    },
    evaluation: EvaluationTemplate {
        system_role: "Bạn là một chuyên gia phỏng vấn kỹ thuật. Đánh giá các câu trả lời phỏng vấn thử sau đây.",
        interview_details_label: "Thông tin phỏng vấn thử",
        level_label: "Cấp độ",
        industry_label: "Ngành",
        stack_label: "Stack",
        position_label: "Vị trí",
        question_label: "Câu hỏi",
        expected_answer_label: "Câu trả lời mẫu",
        candidate_answer_label: "Câu trả lời của ứng viên",
        difficulty_label: "Độ khó",
        requirements_label: "Yêu cầu đánh giá",
        requirements: &[
            "Phân tích độ chính xác kỹ thuật và sự đầy đủ của câu trả lời",
            "Đánh giá kỹ năng giao tiếp và sự rõ ràng trong giải thích",
            "Xem xét cách tiếp cận giải quyết vấn đề và phương pháp luận",
            "Cung cấp phản hồi mang tính xây dựng để cải thiện",
            r#"BẮT BUỘC cho điểm 0 nếu câu trả lời là "Không", "Không biết", "No answer", hoặc vô nghĩa."#,
            "Chấm điểm (0-100) cho TỪNG câu hỏi. Điểm số cần khắt khe và công bằng.",
            r#"Cung cấp "expectedAnswer" và "feedback" thật chi tiết, như một bài học ngắn để ứng viên học hỏi kiến thức."#,
        ],
        json_format_instruction: r#"TRẢ VỀ CHỈ ĐỊNH DẠNG JSON HỢP LỆ (không dùng markdown, không bọc trong ```json). Ví dụ: {"overallScore": 85, "strengths": ["Giỏi PHP"], "weaknesses": ["Yếu bảo mật"], "recommendations": ["Học thêm về CSRF"], "detailedFeedback": [{"questionText": "DI là gì?", "score": 80, "feedback": "Giải thích chưa sâu. DI là pattern giúp giảm sự phụ thuộc..."}]}"#,
        overall_score_label: "overallScore",
        strengths_label: "strengths",
        weaknesses_label: "weaknesses",
        recommendations_label: "recommendations",
        detailed_feedback_label: "detailedFeedback",
    },
};
