// Section enhancement: the service capability, its simulated and LLM-backed
// implementations, and the workflow that applies results to a session.
// All LLM calls go through llm_client.

pub mod handlers;
pub mod llm;
pub mod orchestrator;
pub mod prompts;
pub mod service;

pub use llm::LlmEnhancer;
pub use service::{EnhancementFailure, EnhancementService, SimulatedEnhancer};
