//! Content Generation — pluggable, trait-based generator behind the endpoint.
//!
//! Default: `LlmContentGenerator` (Claude via `llm_client`). The trait seam
//! exists so tests and future backends can swap in without touching the
//! handler or router.
//!
//! `AppState` holds an `Arc<dyn ContentGenerator>`, installed at startup.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::AppError;
use crate::generation::prompts::build_generation_prompt;
use crate::llm_client::prompts::CONTENT_WRITER_SYSTEM;
use crate::llm_client::LlmClient;

// ────────────────────────────────────────────────────────────────────────────
// Request model
// ────────────────────────────────────────────────────────────────────────────

/// The content formats the suite produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentType {
    Blog,
    Social,
    Email,
}

impl ContentType {
    /// Human-readable label used in the generation prompt.
    pub fn label(&self) -> &'static str {
        match self {
            ContentType::Blog => "blog post",
            ContentType::Social => "social media post",
            ContentType::Email => "email",
        }
    }
}

/// Writing tones the frontend offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    Professional,
    Casual,
    Friendly,
    Authoritative,
    Conversational,
}

impl Tone {
    pub fn label(&self) -> &'static str {
        match self {
            Tone::Professional => "professional",
            Tone::Casual => "casual",
            Tone::Friendly => "friendly",
            Tone::Authoritative => "authoritative",
            Tone::Conversational => "conversational",
        }
    }
}

/// Request body for content generation, camelCase on the wire.
/// `audience` and `keywords` may be empty — they are passed to the prompt
/// as-is and `keywords` doubles as the density spec for analysis.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateRequest {
    pub content_type: ContentType,
    pub topic: String,
    pub tone: Tone,
    #[serde(default)]
    pub audience: String,
    #[serde(default)]
    pub keywords: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Trait definition
// ────────────────────────────────────────────────────────────────────────────

/// The content generator trait. Implement this to swap backends without
/// touching the endpoint or handler code.
///
/// Carried in `AppState` as `Arc<dyn ContentGenerator>`.
#[async_trait]
pub trait ContentGenerator: Send + Sync {
    async fn generate(&self, request: &GenerateRequest) -> Result<String, AppError>;
}

// ────────────────────────────────────────────────────────────────────────────
// LlmContentGenerator — default implementation
// ────────────────────────────────────────────────────────────────────────────

/// Generates content with a single Claude call per request.
pub struct LlmContentGenerator {
    llm: LlmClient,
}

impl LlmContentGenerator {
    pub fn new(llm: LlmClient) -> Self {
        Self { llm }
    }
}

#[async_trait]
impl ContentGenerator for LlmContentGenerator {
    async fn generate(&self, request: &GenerateRequest) -> Result<String, AppError> {
        let prompt = build_generation_prompt(request);
        info!(
            "Generating {} about '{}' (tone: {})",
            request.content_type.label(),
            request.topic,
            request.tone.label()
        );

        self.llm
            .call_text(&prompt, CONTENT_WRITER_SYSTEM)
            .await
            .map_err(|e| AppError::Llm(e.to_string()))
    }
}
