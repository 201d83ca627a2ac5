//! The enhancement capability: turn one section's raw text into improved text.
//!
//! The workflow only ever sees `dyn EnhancementService`, so the simulated
//! implementation and the LLM-backed one are interchangeable.

use std::time::Duration;

use async_trait::async_trait;
use serde::Serialize;
use thiserror::Error;

use crate::models::Section;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EnhancementPass {
    /// Part of the all-sections pass.
    Initial,
    /// A single-section redo after the first pass.
    Redo,
}

#[derive(Debug, Error)]
pub enum EnhancementFailure {
    #[error("enhancement service error: {0}")]
    Service(String),

    #[error("enhancement service returned no text for section '{0}'")]
    Empty(String),
}

#[async_trait]
pub trait EnhancementService: Send + Sync {
    async fn enhance_section(
        &self,
        section: &Section,
        job_description: &str,
        pass: EnhancementPass,
    ) -> Result<String, EnhancementFailure>;

    /// Enhances a whole list as one initial pass, returning `(id, text)` in
    /// list order. Stops at the first failure.
    async fn enhance_sections(
        &self,
        sections: &[Section],
        job_description: &str,
    ) -> Result<Vec<(String, String)>, EnhancementFailure> {
        let mut results = Vec::with_capacity(sections.len());
        for section in sections {
            let text = self
                .enhance_section(section, job_description, EnhancementPass::Initial)
                .await?;
            results.push((section.id.clone(), text));
        }
        Ok(results)
    }
}

pub const DEFAULT_INITIAL_DELAY: Duration = Duration::from_millis(2000);
pub const DEFAULT_REDO_DELAY: Duration = Duration::from_millis(1000);

/// Stand-in for a real enhancement backend: waits, then returns a fixed
/// placeholder derived from the section title. Ignores the job description.
///
/// An all-sections pass waits `initial_delay` once, however many sections
/// it covers.
#[derive(Debug, Clone)]
pub struct SimulatedEnhancer {
    initial_delay: Duration,
    redo_delay: Duration,
}

impl Default for SimulatedEnhancer {
    fn default() -> Self {
        Self::new(DEFAULT_INITIAL_DELAY, DEFAULT_REDO_DELAY)
    }
}

impl SimulatedEnhancer {
    pub fn new(initial_delay: Duration, redo_delay: Duration) -> Self {
        Self {
            initial_delay,
            redo_delay,
        }
    }

    pub fn placeholder(section: &Section, pass: EnhancementPass) -> String {
        match pass {
            EnhancementPass::Initial => format!("Enhanced {} content", section.title),
            EnhancementPass::Redo => format!("Re-enhanced {} content", section.title),
        }
    }
}

#[async_trait]
impl EnhancementService for SimulatedEnhancer {
    async fn enhance_section(
        &self,
        section: &Section,
        _job_description: &str,
        pass: EnhancementPass,
    ) -> Result<String, EnhancementFailure> {
        let delay = match pass {
            EnhancementPass::Initial => self.initial_delay,
            EnhancementPass::Redo => self.redo_delay,
        };
        tokio::time::sleep(delay).await;
        Ok(Self::placeholder(section, pass))
    }

    async fn enhance_sections(
        &self,
        sections: &[Section],
        _job_description: &str,
    ) -> Result<Vec<(String, String)>, EnhancementFailure> {
        tokio::time::sleep(self.initial_delay).await;
        Ok(sections
            .iter()
            .map(|s| (s.id.clone(), Self::placeholder(s, EnhancementPass::Initial)))
            .collect())
    }
}
