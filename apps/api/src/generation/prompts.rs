// All LLM prompt constants for the Generation module.
// The system prompt lives in llm_client::prompts (cross-cutting house style).

use crate::generation::generator::GenerateRequest;

/// Generation prompt template.
/// Replace: {content_type}, {topic}, {tone}, {audience}, {keywords}
pub const GENERATION_PROMPT_TEMPLATE: &str = r#"Create a {content_type} about {topic}.
Tone: {tone}
Target audience: {audience}
Keywords to include: {keywords}

Make it engaging and professional."#;

/// Fills the generation template from a validated request.
/// Empty audience/keywords are passed through as-is — the model copes and
/// stripping the lines would change prompt shape between requests.
pub fn build_generation_prompt(request: &GenerateRequest) -> String {
    GENERATION_PROMPT_TEMPLATE
        .replace("{content_type}", request.content_type.label())
        .replace("{topic}", &request.topic)
        .replace("{tone}", request.tone.label())
        .replace("{audience}", &request.audience)
        .replace("{keywords}", &request.keywords)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generation::generator::{ContentType, Tone};

    fn make_request() -> GenerateRequest {
        GenerateRequest {
            content_type: ContentType::Blog,
            topic: "AI in healthcare".to_string(),
            tone: Tone::Professional,
            audience: "Tech professionals".to_string(),
            keywords: "artificial intelligence, diagnosis".to_string(),
        }
    }

    #[test]
    fn test_prompt_contains_all_request_fields() {
        let prompt = build_generation_prompt(&make_request());
        assert!(prompt.contains("blog post"));
        assert!(prompt.contains("AI in healthcare"));
        assert!(prompt.contains("Tone: professional"));
        assert!(prompt.contains("Target audience: Tech professionals"));
        assert!(prompt.contains("artificial intelligence, diagnosis"));
    }

    #[test]
    fn test_no_placeholders_survive() {
        let prompt = build_generation_prompt(&make_request());
        assert!(!prompt.contains('{'), "unreplaced placeholder in: {prompt}");
        assert!(!prompt.contains('}'));
    }

    #[test]
    fn test_empty_optional_fields_keep_prompt_shape() {
        let mut request = make_request();
        request.audience = String::new();
        request.keywords = String::new();
        let prompt = build_generation_prompt(&request);
        assert!(prompt.contains("Target audience: \n"));
        assert!(prompt.contains("Keywords to include: \n"));
    }
}
