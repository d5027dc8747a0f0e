//! Fallback Scorer — deterministic keyword heuristic for when the LLM path
//! fails, times out, or returns something unusable.
//!
//! Purely local: no network, no randomness, never fails. Coarse by design —
//! each level's skills array is filled uniformly from its driving category
//! score, because no per-competency semantic matching is available here.
//! Output still satisfies every scorecard invariant, including array lengths
//! read from the rubric.

use crate::analysis::policy::{self, Category};
use crate::analysis::rubric::{RoleLevel, Rubric};
use crate::analysis::scorecard::{Evidence, LevelMatch, Scorecard, SkillAssessment};

/// Produces a best-effort scorecard from keyword matching alone.
pub fn fallback_scorecard(resume_text: &str, rubric: &Rubric) -> Scorecard {
    let text = resume_text.to_lowercase();

    let technical = category_score(&text, Category::Technical);
    let leadership = category_score(&text, Category::Leadership);
    let strategic = category_score(&text, Category::Strategic);

    let overall =
        ((technical as u32 + leadership as u32 + strategic as u32) as f64 / 3.0).round() as u8;

    let recommended_level = policy::recommend_level(overall, leadership, strategic);

    let fill_level = |level: RoleLevel| -> LevelMatch {
        let score = match policy::driving_category(level) {
            Category::Technical => technical,
            Category::Leadership => leadership,
            Category::Strategic => strategic,
        };
        let evidence = if score > policy::PARTIAL_FILL_THRESHOLD {
            Evidence::Partial
        } else {
            Evidence::None
        };
        LevelMatch {
            score,
            skills: rubric
                .level(level)
                .skills
                .iter()
                .map(|competency| SkillAssessment {
                    competency: competency.name.clone(),
                    evidence,
                })
                .collect(),
        }
    };

    Scorecard {
        extracted_name: None,
        extracted_email: None,
        overall_score: overall,
        recommended_level,
        summary: "Automated analysis based on keyword matching. Manual review recommended."
            .to_string(),
        senior: fill_level(RoleLevel::Senior),
        lead: fill_level(RoleLevel::Lead),
        principal: fill_level(RoleLevel::Principal),
        recommendation: format!(
            "Consider for {} role pending technical interview",
            recommended_level.label()
        ),
        key_strengths: vec![],
        gaps: vec!["Full AI analysis unavailable - manual review needed".to_string()],
    }
}

/// One hit per category keyword present as a substring, scaled by the
/// category weight, clamped to 100.
fn category_score(lowercased_text: &str, category: Category) -> u8 {
    let hits = category
        .keywords()
        .iter()
        .filter(|kw| lowercased_text.contains(*kw))
        .count() as u32;

    hits.saturating_mul(category.weight()).min(policy::MAX_SCORE as u32) as u8
}
