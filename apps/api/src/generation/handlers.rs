//! Axum route handlers for the Generation API.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::analysis::{analyze_content, suggestions, ContentMetrics};
use crate::errors::AppError;
use crate::generation::generator::GenerateRequest;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

/// SEO analysis block returned with every generation: the raw metrics plus
/// derived improvement hints.
#[derive(Debug, Serialize)]
pub struct AnalysisReport {
    #[serde(flatten)]
    pub metrics: ContentMetrics,
    pub suggestions: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct GenerateResponse {
    pub content: String,
    pub analysis: AnalysisReport,
}

/// Request body for metrics-only analysis of existing text.
#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    pub text: String,
    #[serde(default)]
    pub keywords: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/generate
///
/// Full pipeline: build prompt → LLM generate → analyze the result.
/// The analysis runs on whatever the model returned, keywords taken from the
/// request's comma-separated `keywords` field.
pub async fn handle_generate(
    State(state): State<AppState>,
    Json(request): Json<GenerateRequest>,
) -> Result<Json<GenerateResponse>, AppError> {
    if request.topic.trim().is_empty() {
        return Err(AppError::Validation("topic cannot be empty".to_string()));
    }

    let content = state.generator.generate(&request).await?;

    let metrics = analyze_content(&content, &request.keywords);
    let hints = suggestions(&metrics, &request.keywords);
    info!(
        "Generated {} words (readability {}, keyword density {}%)",
        metrics.word_count, metrics.readability, metrics.keyword_density
    );

    Ok(Json(GenerateResponse {
        content,
        analysis: AnalysisReport {
            metrics,
            suggestions: hints,
        },
    }))
}

/// POST /api/v1/analyze
///
/// Metrics for caller-supplied text, no LLM round trip. Useful for re-scoring
/// after manual edits in the editor.
pub async fn handle_analyze(
    Json(request): Json<AnalyzeRequest>,
) -> Result<Json<AnalysisReport>, AppError> {
    let metrics = analyze_content(&request.text, &request.keywords);
    let hints = suggestions(&metrics, &request.keywords);

    Ok(Json(AnalysisReport {
        metrics,
        suggestions: hints,
    }))
}
