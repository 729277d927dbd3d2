// System messages sent alongside the user prompt by vendors whose wire
// format carries one (OpenAI, Grok).

/// System message for question generation.
pub const GENERATION_SYSTEM: &str =
    "You are an expert technical interviewer. Always respond with valid JSON only.";

/// System message for answer evaluation.
pub const EVALUATION_SYSTEM: &str = "You are an expert technical interviewer. \
    Evaluate the following mock interview answers and respond with valid JSON only.";
