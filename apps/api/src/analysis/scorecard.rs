#![allow(dead_code)]

//! Scorecard — the structured result of one resume analysis.
//!
//! Internally every evidence entry stays paired with its competency name
//! (`SkillAssessment`), so the positional binding between the rubric and the
//! skills array is explicit in code. The wire types at the bottom flatten the
//! pairs back to the bare evidence arrays the API contract promises.

use serde::{Deserialize, Serialize};

use crate::analysis::rubric::RoleLevel;

/// How clearly a competency is demonstrated. Ordinal: none < partial < strong.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Evidence {
    None,
    Partial,
    Strong,
}

/// Hiring recommendation tier. Ordered so tier comparisons read naturally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum RecommendedLevel {
    #[serde(rename = "Below Senior")]
    BelowSenior,
    Senior,
    Lead,
    Principal,
}

impl RecommendedLevel {
    /// Display form, identical to the wire value.
    pub fn label(self) -> &'static str {
        match self {
            RecommendedLevel::BelowSenior => "Below Senior",
            RecommendedLevel::Senior => "Senior",
            RecommendedLevel::Lead => "Lead",
            RecommendedLevel::Principal => "Principal",
        }
    }
}

/// One competency with its assessed evidence level.
#[derive(Debug, Clone, PartialEq)]
pub struct SkillAssessment {
    pub competency: String,
    pub evidence: Evidence,
}

/// Per-level result: a 0-100 score and one assessment per rubric competency,
/// in rubric order.
#[derive(Debug, Clone, PartialEq)]
pub struct LevelMatch {
    pub score: u8,
    pub skills: Vec<SkillAssessment>,
}

/// The complete analysis result. Constructed fresh per request and returned
/// by value; persistence belongs to the caller.
#[derive(Debug, Clone, PartialEq)]
pub struct Scorecard {
    pub extracted_name: Option<String>,
    pub extracted_email: Option<String>,
    pub overall_score: u8,
    pub recommended_level: RecommendedLevel,
    pub summary: String,
    pub senior: LevelMatch,
    pub lead: LevelMatch,
    pub principal: LevelMatch,
    pub recommendation: String,
    pub key_strengths: Vec<String>,
    pub gaps: Vec<String>,
}

impl Scorecard {
    pub fn level(&self, level: RoleLevel) -> &LevelMatch {
        match level {
            RoleLevel::Senior => &self.senior,
            RoleLevel::Lead => &self.lead,
            RoleLevel::Principal => &self.principal,
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Wire types — serialization boundary
// ────────────────────────────────────────────────────────────────────────────

/// Scorecard as serialized to API callers.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScorecardResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extracted_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extracted_email: Option<String>,
    pub overall_score: u8,
    pub recommended_level: RecommendedLevel,
    pub summary: String,
    pub role_matches: RoleMatchesWire,
    pub recommendation: String,
    pub key_strengths: Vec<String>,
    pub gaps: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct RoleMatchesWire {
    pub senior: LevelMatchWire,
    pub lead: LevelMatchWire,
    pub principal: LevelMatchWire,
}

#[derive(Debug, Clone, Serialize)]
pub struct LevelMatchWire {
    pub score: u8,
    /// Bare evidence array, positionally bound to the rubric's competency
    /// order for the level.
    pub skills: Vec<Evidence>,
}

impl From<LevelMatch> for LevelMatchWire {
    fn from(m: LevelMatch) -> Self {
        LevelMatchWire {
            score: m.score,
            skills: m.skills.into_iter().map(|s| s.evidence).collect(),
        }
    }
}

impl From<Scorecard> for ScorecardResponse {
    fn from(card: Scorecard) -> Self {
        ScorecardResponse {
            extracted_name: card.extracted_name,
            extracted_email: card.extracted_email,
            overall_score: card.overall_score,
            recommended_level: card.recommended_level,
            summary: card.summary,
            role_matches: RoleMatchesWire {
                senior: card.senior.into(),
                lead: card.lead.into(),
                principal: card.principal.into(),
            },
            recommendation: card.recommendation,
            key_strengths: card.key_strengths,
            gaps: card.gaps,
        }
    }
}
