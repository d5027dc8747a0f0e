//! Response Validator — strict decode of the LLM's returned scorecard.
//!
//! Policy: reject wholesale, never repair. A wrong-length skills array is not
//! truncated or padded because that would silently corrupt the positional
//! binding between entries and named competencies. Any `ResponseError` sends
//! the caller to the fallback scorer.

use serde::Deserialize;
use thiserror::Error;

use crate::analysis::policy;
use crate::analysis::rubric::{RoleLevel, Rubric};
use crate::analysis::scorecard::{
    Evidence, LevelMatch, RecommendedLevel, Scorecard, SkillAssessment,
};
use crate::llm_client::strip_json_fences;

#[derive(Debug, Error)]
pub enum ResponseError {
    #[error("response is not valid JSON: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("'{level}' skills array has {got} entries, rubric defines {expected}")]
    SkillCountMismatch {
        level: &'static str,
        expected: usize,
        got: usize,
    },

    #[error("{field} score {value} is outside 0-100")]
    ScoreOutOfRange { field: &'static str, value: u8 },
}

/// Raw wire shape as the LLM returns it. Closed-set fields (`Evidence`,
/// `RecommendedLevel`) reject unknown values at decode; everything else is
/// checked semantically below. Extra fields are tolerated.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawAnalysis {
    #[serde(default)]
    extracted_name: Option<String>,
    #[serde(default)]
    extracted_email: Option<String>,
    overall_score: u8,
    recommended_level: RecommendedLevel,
    summary: String,
    role_matches: RawRoleMatches,
    recommendation: String,
    #[serde(default)]
    key_strengths: Vec<String>,
    #[serde(default)]
    gaps: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct RawRoleMatches {
    senior: RawLevelMatch,
    lead: RawLevelMatch,
    principal: RawLevelMatch,
}

#[derive(Debug, Deserialize)]
struct RawLevelMatch {
    score: u8,
    skills: Vec<Evidence>,
}

/// Validates the raw LLM text against the rubric and returns the paired
/// domain scorecard. No transformation beyond the pairing happens here.
pub fn validate_response(raw_text: &str, rubric: &Rubric) -> Result<Scorecard, ResponseError> {
    let raw: RawAnalysis = serde_json::from_str(strip_json_fences(raw_text))?;

    if !policy::valid_score(raw.overall_score) {
        return Err(ResponseError::ScoreOutOfRange {
            field: "overall",
            value: raw.overall_score,
        });
    }

    let senior = pair_level(RoleLevel::Senior, raw.role_matches.senior, rubric)?;
    let lead = pair_level(RoleLevel::Lead, raw.role_matches.lead, rubric)?;
    let principal = pair_level(RoleLevel::Principal, raw.role_matches.principal, rubric)?;

    Ok(Scorecard {
        extracted_name: raw.extracted_name,
        extracted_email: raw.extracted_email,
        overall_score: raw.overall_score,
        recommended_level: raw.recommended_level,
        summary: raw.summary,
        senior,
        lead,
        principal,
        recommendation: raw.recommendation,
        key_strengths: raw.key_strengths,
        gaps: raw.gaps,
    })
}

/// Checks one level's score and cardinality, then binds each evidence entry
/// to its competency by position.
fn pair_level(
    level: RoleLevel,
    raw: RawLevelMatch,
    rubric: &Rubric,
) -> Result<LevelMatch, ResponseError> {
    if !policy::valid_score(raw.score) {
        return Err(ResponseError::ScoreOutOfRange {
            field: level.key(),
            value: raw.score,
        });
    }

    let expected = rubric.skill_count(level);
    if raw.skills.len() != expected {
        return Err(ResponseError::SkillCountMismatch {
            level: level.key(),
            expected,
            got: raw.skills.len(),
        });
    }

    let skills = rubric
        .level(level)
        .skills
        .iter()
        .zip(raw.skills)
        .map(|(competency, evidence)| SkillAssessment {
            competency: competency.name.clone(),
            evidence,
        })
        .collect();

    Ok(LevelMatch {
        score: raw.score,
        skills,
    })
}
