// Prompt template for interview question generation.

/// Question generation prompt template. Replace `{role}` before sending.
pub const QUESTION_PROMPT_TEMPLATE: &str = "Generate 10 interview questions for a {role}.
Categorize them into easy, medium, and hard.
Format:
Easy:
- Q1
- Q2
- Q3
Medium:
- Q4
- Q5
- Q6
- Q7
Hard:
- Q8
- Q9
- Q10";

/// Builds the generation prompt for `role`. The role is embedded verbatim;
/// an empty role still yields a well-formed prompt.
pub fn build_question_prompt(role: &str) -> String {
    QUESTION_PROMPT_TEMPLATE.replacen("{role}", role, 1)
}
