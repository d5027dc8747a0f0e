use axum::{extract::State, Json};
use serde::Deserialize;

use crate::analysis::analyzer::analyze;
use crate::analysis::rubric::{RoleLevel, Rubric};
use crate::analysis::scorecard::ScorecardResponse;
use crate::errors::AppError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeRequest {
    /// Required; checked explicitly so the caller gets the input-validation
    /// envelope rather than a body-rejection.
    #[serde(default)]
    pub resume_text: Option<String>,
    #[serde(default)]
    pub candidate_name: Option<String>,
    #[serde(default, alias = "targetLevel")]
    pub target_position: Option<RoleLevel>,
    /// Full rubric override; the built-in rubric applies when omitted.
    #[serde(default)]
    pub role_requirements: Option<Rubric>,
}

/// POST /api/v1/analyze
pub async fn handle_analyze(
    State(state): State<AppState>,
    Json(req): Json<AnalyzeRequest>,
) -> Result<Json<ScorecardResponse>, AppError> {
    // An absent credential means the service is unusable — a hard failure,
    // never a silent fallback.
    let backend = state
        .llm
        .as_ref()
        .ok_or_else(|| AppError::Configuration("GROQ_API_KEY not configured".to_string()))?;

    let rubric_override = match req.role_requirements {
        Some(rubric) => {
            rubric
                .validate()
                .map_err(|e| AppError::Validation(format!("roleRequirements: {e}")))?;
            Some(rubric)
        }
        None => None,
    };
    let rubric = rubric_override.as_ref().unwrap_or(state.rubric.as_ref());

    let card = analyze(
        backend.as_ref(),
        rubric,
        req.resume_text.as_deref().unwrap_or(""),
        req.candidate_name.as_deref(),
        req.target_position,
    )
    .await?;

    Ok(Json(card.into()))
}
