#![allow(dead_code)]

//! Scoring Policy — shared constants and rules for both scoring paths.
//!
//! The response validator's sanity checks and the fallback scorer both read
//! from here; neither carries its own copy of a threshold or weight. The
//! numbers below are the tuning surface of the fallback heuristic, not
//! incidental values — recalibrations happen here and nowhere else.

use crate::analysis::rubric::RoleLevel;
use crate::analysis::scorecard::RecommendedLevel;

/// Scores are integers in [0, 100].
pub const MAX_SCORE: u8 = 100;

/// Fallback keyword categories. Each maps to the role tier whose signal it
/// carries: technical → Senior, leadership → Lead, strategic → Principal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Technical,
    Leadership,
    Strategic,
}

/// Match terms per category, lowercase. One hit per term whose substring
/// appears in the lowercased resume text.
const TECHNICAL_KEYWORDS: &[&str] = &[
    "pscad",
    "pss/e",
    "psse",
    "power systems",
    "grid",
    "renewable",
    "solar",
    "wind",
    "bess",
];

const LEADERSHIP_KEYWORDS: &[&str] = &[
    "lead",
    "manager",
    "mentor",
    "team",
    "project lead",
    "senior",
];

const STRATEGIC_KEYWORDS: &[&str] = &[
    "director",
    "principal",
    "strategy",
    "business development",
    "advisory",
];

impl Category {
    pub const ALL: [Category; 3] = [Category::Technical, Category::Leadership, Category::Strategic];

    pub fn keywords(self) -> &'static [&'static str] {
        match self {
            Category::Technical => TECHNICAL_KEYWORDS,
            Category::Leadership => LEADERSHIP_KEYWORDS,
            Category::Strategic => STRATEGIC_KEYWORDS,
        }
    }

    /// Per-hit score weight. Shorter keyword lists get heavier weights so
    /// each category can still saturate.
    pub fn weight(self) -> u32 {
        match self {
            Category::Technical => 12,
            Category::Leadership => 15,
            Category::Strategic => 20,
        }
    }
}

/// The category whose score drives a level's uniform skill fill in fallback
/// mode.
pub fn driving_category(level: RoleLevel) -> Category {
    match level {
        RoleLevel::Senior => Category::Technical,
        RoleLevel::Lead => Category::Leadership,
        RoleLevel::Principal => Category::Strategic,
    }
}

/// Category score above which fallback fills a level's skills as "partial"
/// rather than "none".
pub const PARTIAL_FILL_THRESHOLD: u8 = 50;

pub const PRINCIPAL_MIN_OVERALL: u8 = 70;
pub const PRINCIPAL_MIN_STRATEGIC: u8 = 40;
pub const LEAD_MIN_OVERALL: u8 = 60;
pub const LEAD_MIN_LEADERSHIP: u8 = 40;
pub const SENIOR_MIN_OVERALL: u8 = 40;

/// Descending threshold ladder for the recommendation tier. Both gates of a
/// tier are necessary: a high overall score alone never unlocks a leadership
/// tier without the matching category signal. This mirrors the rubric's
/// cumulative-inclusion structure — each tier is checked only after the tier
/// above it fails.
pub fn recommend_level(overall: u8, leadership: u8, strategic: u8) -> RecommendedLevel {
    if overall >= PRINCIPAL_MIN_OVERALL && strategic >= PRINCIPAL_MIN_STRATEGIC {
        RecommendedLevel::Principal
    } else if overall >= LEAD_MIN_OVERALL && leadership >= LEAD_MIN_LEADERSHIP {
        RecommendedLevel::Lead
    } else if overall >= SENIOR_MIN_OVERALL {
        RecommendedLevel::Senior
    } else {
        RecommendedLevel::BelowSenior
    }
}

pub fn valid_score(score: u8) -> bool {
    score <= MAX_SCORE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_principal_requires_both_gates() {
        assert_eq!(recommend_level(85, 80, 60), RecommendedLevel::Principal);
        // High overall without strategic signal falls through Principal.
        assert_ne!(recommend_level(85, 80, 20), RecommendedLevel::Principal);
    }

    #[test]
    fn test_lead_requires_leadership_signal() {
        assert_eq!(recommend_level(65, 50, 0), RecommendedLevel::Lead);
        // overall=70 with zero leadership must NOT yield Lead.
        assert_eq!(recommend_level(70, 0, 0), RecommendedLevel::Senior);
    }

    #[test]
    fn test_strategic_only_profile_does_not_skip_tiers() {
        // Strategic signal present but overall below the Principal bar:
        // falls through to whatever the lower gates support.
        assert_eq!(recommend_level(45, 0, 100), RecommendedLevel::Senior);
        assert_eq!(recommend_level(30, 0, 100), RecommendedLevel::BelowSenior);
    }

    #[test]
    fn test_senior_gate_is_overall_only() {
        assert_eq!(recommend_level(40, 0, 0), RecommendedLevel::Senior);
        assert_eq!(recommend_level(39, 0, 0), RecommendedLevel::BelowSenior);
    }

    #[test]
    fn test_threshold_boundaries_exact() {
        assert_eq!(recommend_level(70, 0, 40), RecommendedLevel::Principal);
        assert_eq!(recommend_level(69, 100, 100), RecommendedLevel::Lead);
        assert_eq!(recommend_level(60, 40, 0), RecommendedLevel::Lead);
        assert_eq!(recommend_level(60, 39, 0), RecommendedLevel::Senior);
    }

    #[test]
    fn test_driving_categories() {
        assert_eq!(driving_category(RoleLevel::Senior), Category::Technical);
        assert_eq!(driving_category(RoleLevel::Lead), Category::Leadership);
        assert_eq!(driving_category(RoleLevel::Principal), Category::Strategic);
    }

    #[test]
    fn test_category_keywords_are_lowercase() {
        for category in Category::ALL {
            for kw in category.keywords() {
                assert_eq!(*kw, kw.to_lowercase(), "keyword '{kw}' must be lowercase");
            }
        }
    }

    #[test]
    fn test_valid_score_bounds() {
        assert!(valid_score(0));
        assert!(valid_score(100));
        assert!(!valid_score(101));
    }
}
