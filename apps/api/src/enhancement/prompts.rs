// Prompt text for LLM-backed section enhancement.

/// Section enhancement prompt. Replace `{job_description}`, `{section_title}`
/// and `{section_content}` before sending.
pub const ENHANCE_SECTION_PROMPT_TEMPLATE: &str = "\
Enhance this resume section based on the job description, making it more impactful \
and aligned with the job requirements. Keep the response concise and professional:
Job Description: {job_description}
Section ({section_title}): {section_content}";

/// Extra instruction for a redo, so the model does not repeat its first answer.
pub const REDO_INSTRUCTION: &str = "\n\nThis is a second attempt. \
Offer a noticeably different phrasing from a typical first draft.";
