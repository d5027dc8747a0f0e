//! Rubric Model — role levels, their ordered competency lists, and keyword hints.
//!
//! Pure data. The built-in rubric covers grid connection engineering roles at
//! three levels; callers may supply their own rubric in the analyze request
//! (same JSON shape) to score against different requirements. Malformed rubric
//! data is rejected up front — at startup for the built-in rubric, at request
//! time for caller-supplied ones — never mid-analysis.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Closed set of assessable role levels, ordered junior-most first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoleLevel {
    Senior,
    Lead,
    Principal,
}

impl RoleLevel {
    pub const ALL: [RoleLevel; 3] = [RoleLevel::Senior, RoleLevel::Lead, RoleLevel::Principal];

    /// JSON object key used for this level in `roleMatches`.
    pub fn key(self) -> &'static str {
        match self {
            RoleLevel::Senior => "senior",
            RoleLevel::Lead => "lead",
            RoleLevel::Principal => "principal",
        }
    }
}

/// A single named skill/behavior assessed for one role level.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Competency {
    pub name: String,
    /// Match terms for the keyword (fallback) path. The LLM path scores
    /// against `name` only.
    #[serde(default)]
    pub keywords: Vec<String>,
}

/// Requirements for one role level. Competency order is significant: the
/// scorecard's skills array is positionally bound to it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LevelRequirements {
    pub title: String,
    pub focus: String,
    /// Cumulative semantics: this level presupposes every competency of the
    /// level below it (Lead = Senior + Lead-specific, and so on).
    #[serde(default)]
    pub includes_previous: bool,
    pub skills: Vec<Competency>,
}

/// Domain keyword hints usable by any matching strategy, grouped the way the
/// hiring team groups them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeywordHints {
    pub technical: Vec<String>,
    pub regulatory: Vec<String>,
    pub experience: Vec<String>,
}

/// The full rubric: one `LevelRequirements` per role level plus global hints.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Rubric {
    pub senior: LevelRequirements,
    pub lead: LevelRequirements,
    pub principal: LevelRequirements,
    /// Caller-supplied rubrics usually omit this; the built-in hints apply.
    #[serde(default = "default_hints")]
    pub keyword_hints: KeywordHints,
}

#[derive(Debug, Error)]
pub enum RubricError {
    #[error("level '{0}' has no competencies")]
    EmptyLevel(&'static str),

    #[error("level '{level}' competency {index} has an empty name")]
    UnnamedCompetency { level: &'static str, index: usize },
}

impl Rubric {
    pub fn level(&self, level: RoleLevel) -> &LevelRequirements {
        match level {
            RoleLevel::Senior => &self.senior,
            RoleLevel::Lead => &self.lead,
            RoleLevel::Principal => &self.principal,
        }
    }

    /// Competency count for a level. All skills-array cardinality checks read
    /// this — the counts are never hard-coded elsewhere.
    pub fn skill_count(&self, level: RoleLevel) -> usize {
        self.level(level).skills.len()
    }

    pub fn validate(&self) -> Result<(), RubricError> {
        for level in RoleLevel::ALL {
            let reqs = self.level(level);
            if reqs.skills.is_empty() {
                return Err(RubricError::EmptyLevel(level.key()));
            }
            for (index, skill) in reqs.skills.iter().enumerate() {
                if skill.name.trim().is_empty() {
                    return Err(RubricError::UnnamedCompetency {
                        level: level.key(),
                        index,
                    });
                }
            }
        }
        Ok(())
    }
}

fn competency(name: &str, keywords: &[&str]) -> Competency {
    Competency {
        name: name.to_string(),
        keywords: keywords.iter().map(|k| k.to_string()).collect(),
    }
}

fn default_hints() -> KeywordHints {
    KeywordHints {
        technical: [
            "power systems",
            "renewable energy",
            "solar",
            "wind",
            "BESS",
            "battery",
            "hydro",
            "grid connection",
            "grid integration",
            "inverter",
            "GFL",
            "GFM",
            "grid-following",
            "grid-forming",
            "PPC",
            "plant controller",
            "LVRT",
            "HVRT",
            "fault ride through",
            "FRT",
            "SCR",
            "system strength",
            "weak grid",
            "harmonics",
            "oscillation",
            "power flow",
            "short circuit",
            "stability",
            "transient",
            "voltage",
            "frequency",
            "Python",
            "scripting",
            "automation",
        ]
        .iter()
        .map(|k| k.to_string())
        .collect(),
        regulatory: [
            "NER",
            "National Electricity Rules",
            "S5.2.5",
            "GPS",
            "generator performance",
            "AEMO",
            "NSP",
            "commissioning",
            "energisation",
        ]
        .iter()
        .map(|k| k.to_string())
        .collect(),
        experience: [
            "utility",
            "developer",
            "OEM",
            "consultant",
            "consultancy",
            "Australia",
            "NEM",
            "National Energy Market",
        ]
        .iter()
        .map(|k| k.to_string())
        .collect(),
    }
}

/// The shipped rubric for grid connection engineering roles.
pub fn default_rubric() -> Rubric {
    Rubric {
        senior: LevelRequirements {
            title: "Senior Engineer".to_string(),
            focus: "Technical Delivery".to_string(),
            includes_previous: false,
            skills: vec![
                competency(
                    "Independent study delivery (R1/R2)",
                    &[
                        "R1",
                        "R2",
                        "DMAT",
                        "DMNT",
                        "grid connection studies",
                        "connection studies",
                    ],
                ),
                competency(
                    "Strong in 1-2 modelling tools (PSCAD, PSS/E)",
                    &["PSCAD", "PSS/E", "PSSE", "PSS\\E", "DIgSILENT", "PowerFactory"],
                ),
                competency(
                    "EMT & RMS simulation execution",
                    &[
                        "EMT",
                        "RMS",
                        "electromagnetic transient",
                        "transient simulation",
                        "dynamic simulation",
                    ],
                ),
                competency(
                    "Grid code compliance assessment",
                    &[
                        "NER",
                        "grid code",
                        "S5.2",
                        "compliance",
                        "GPS",
                        "generator performance standard",
                    ],
                ),
                competency(
                    "Model validation & tuning",
                    &[
                        "model validation",
                        "model tuning",
                        "parameter tuning",
                        "validation testing",
                    ],
                ),
                competency(
                    "Technical report writing",
                    &[
                        "technical reports",
                        "study reports",
                        "documentation",
                        "report writing",
                    ],
                ),
                competency(
                    "Developing client communication",
                    &["client communication", "stakeholder", "presentation"],
                ),
                competency(
                    "Contributes to team knowledge",
                    &["knowledge sharing", "mentoring", "training"],
                ),
            ],
        },
        lead: LevelRequirements {
            title: "Lead Engineer".to_string(),
            focus: "Technical Leadership".to_string(),
            includes_previous: true,
            skills: vec![
                competency(
                    "Mentors and develops engineers",
                    &["mentor", "coaching", "developing engineers", "team development"],
                ),
                competency(
                    "Project leadership & oversight",
                    &[
                        "project lead",
                        "project manager",
                        "leading projects",
                        "project oversight",
                    ],
                ),
                competency(
                    "Direct NSP/AEMO engagement",
                    &[
                        "NSP",
                        "AEMO",
                        "network service provider",
                        "Australian Energy Market Operator",
                        "Transgrid",
                        "Powerlink",
                        "ElectraNet",
                        "AusNet",
                    ],
                ),
                competency(
                    "Project budget management",
                    &["budget", "cost management", "financial", "project costing"],
                ),
                competency(
                    "Client relationship ownership",
                    &["client relationship", "account management", "client management"],
                ),
                competency(
                    "Technical review & QA sign-off",
                    &[
                        "technical review",
                        "QA",
                        "quality assurance",
                        "peer review",
                        "sign-off",
                    ],
                ),
                competency(
                    "Scope definition & proposal input",
                    &["scope", "proposal", "tender", "bid", "quotation"],
                ),
                competency(
                    "Multi-project coordination",
                    &["multi-project", "portfolio", "multiple projects", "program"],
                ),
                competency(
                    "Technical risk assessment",
                    &["risk assessment", "technical risk", "risk management"],
                ),
            ],
        },
        principal: LevelRequirements {
            title: "Principal Engineer".to_string(),
            focus: "Strategic Leadership".to_string(),
            includes_previous: true,
            skills: vec![
                competency(
                    "Strategic oversight across projects",
                    &[
                        "strategic",
                        "oversight",
                        "portfolio management",
                        "program management",
                    ],
                ),
                competency(
                    "Business development & growth",
                    &["business development", "BD", "sales", "growth", "new business"],
                ),
                competency(
                    "Senior client advisory",
                    &["advisory", "consultant", "senior advisor", "strategic advice"],
                ),
                competency(
                    "Team capacity & capability planning",
                    &[
                        "capacity planning",
                        "capability",
                        "resource planning",
                        "workforce planning",
                    ],
                ),
                competency(
                    "Guides Leads on complex decisions",
                    &[
                        "guidance",
                        "decision making",
                        "complex decisions",
                        "technical direction",
                    ],
                ),
                competency(
                    "Industry thought leadership",
                    &[
                        "thought leadership",
                        "industry",
                        "conference",
                        "publication",
                        "speaking",
                    ],
                ),
                competency(
                    "Proposal strategy & pricing oversight",
                    &["pricing", "proposal strategy", "commercial", "win strategy"],
                ),
                competency(
                    "Market positioning & service offering",
                    &["market", "service offering", "positioning", "competitive"],
                ),
            ],
        },
        keyword_hints: default_hints(),
    }
}
