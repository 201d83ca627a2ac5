//! LLM-backed enhancement. Every call goes through `llm_client`.

use async_trait::async_trait;
use tracing::{debug, error};

use crate::enhancement::prompts::{ENHANCE_SECTION_PROMPT_TEMPLATE, REDO_INSTRUCTION};
use crate::enhancement::service::{EnhancementFailure, EnhancementPass, EnhancementService};
use crate::llm_client::{LlmClient, LlmError};
use crate::models::Section;

#[derive(Clone)]
pub struct LlmEnhancer {
    llm: LlmClient,
}

impl LlmEnhancer {
    pub fn new(llm: LlmClient) -> Self {
        Self { llm }
    }
}

#[async_trait]
impl EnhancementService for LlmEnhancer {
    async fn enhance_section(
        &self,
        section: &Section,
        job_description: &str,
        pass: EnhancementPass,
    ) -> Result<String, EnhancementFailure> {
        let prompt = build_prompt(section, job_description, pass);
        debug!("Enhancing section '{}' ({:?} pass)", section.id, pass);

        match self.llm.complete(&prompt).await {
            Ok(text) => Ok(text),
            Err(LlmError::EmptyContent) => Err(EnhancementFailure::Empty(section.id.clone())),
            Err(e) => {
                error!("Enhancement of section '{}' failed: {e}", section.id);
                Err(EnhancementFailure::Service(e.to_string()))
            }
        }
    }
}

fn build_prompt(section: &Section, job_description: &str, pass: EnhancementPass) -> String {
    let mut prompt = ENHANCE_SECTION_PROMPT_TEMPLATE
        .replace("{job_description}", job_description)
        .replace("{section_title}", &section.title)
        .replace("{section_content}", &section.content);
    if pass == EnhancementPass::Redo {
        prompt.push_str(REDO_INSTRUCTION);
    }
    prompt
}

#[cfg(test)]
mod tests {
    use super::*;

    fn skills() -> Section {
        Section {
            id: "skills".to_string(),
            title: "Skills".to_string(),
            content: "Rust, Postgres".to_string(),
            enhanced: String::new(),
        }
    }

    #[test]
    fn test_prompt_includes_job_description_and_content() {
        let prompt = build_prompt(&skills(), "Senior Rust engineer", EnhancementPass::Initial);

        assert!(prompt.starts_with("Enhance this resume section"));
        assert!(prompt.contains("Job Description: Senior Rust engineer"));
        assert!(prompt.contains("Section (Skills): Rust, Postgres"));
        assert!(!prompt.contains('{'));
        assert!(!prompt.contains(REDO_INSTRUCTION));
    }

    #[test]
    fn test_redo_prompt_asks_for_new_phrasing() {
        let prompt = build_prompt(&skills(), "", EnhancementPass::Redo);
        assert!(prompt.ends_with(REDO_INSTRUCTION));
    }

    #[tokio::test]
    async fn test_unreachable_backend_is_a_service_failure() {
        // Port 9 (discard) on localhost is closed in test environments.
        let llm = LlmClient::with_url("key".to_string(), "http://127.0.0.1:9/v1".to_string())
            .unwrap();
        let enhancer = LlmEnhancer::new(llm);

        let err = enhancer
            .enhance_section(&skills(), "", EnhancementPass::Initial)
            .await
            .unwrap_err();
        assert!(matches!(err, EnhancementFailure::Service(_)));
    }
}
