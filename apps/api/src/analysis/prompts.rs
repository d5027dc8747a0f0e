//! Prompt construction for resume analysis.
//!
//! The system instruction carries the full assessment guide and scoring
//! rules; the user prompt carries the (truncated) resume plus the exact JSON
//! contract the response must satisfy. Skill names and array cardinalities
//! are read live from the rubric so the contract tracks rubric changes.

use crate::analysis::rubric::{RoleLevel, Rubric};

/// Resume excerpt budget, in characters. Bounds request cost and latency.
pub const MAX_RESUME_CHARS: usize = 8000;

/// Assessment guide embedded in the system instruction. Defines every
/// competency's strong/partial criteria and the global scoring rules.
pub const ASSESSMENT_GUIDE: &str = r#"
Vysus Group provides specialist engineering consultancy for renewable energy grid connections in Australia's National Electricity Market (NEM). Engineers perform grid connection studies for solar, wind, and BESS projects, ensuring compliance with the National Electricity Rules (NER) and generator performance standards (GPS).

ROLE LEVEL DEFINITIONS:

SENIOR ENGINEER (Technical Delivery) — Can independently deliver R1 and R2 grid connection studies end-to-end.
Required competencies with scoring criteria:
1. Independent R1/R2 study delivery — Strong: led/completed R1/R2, DMAT, DMNT, grid connection studies. Partial: assisted on studies or related power systems analysis.
2. Proficiency in PSCAD and/or PSS/E — Strong: explicitly names PSCAD or PSS/E with project context. Partial: DIgSILENT, PowerFactory, ETAP, or generic simulation.
3. EMT & RMS simulation execution — Strong: describes running EMT or RMS simulations and interpreting results. Partial: general power systems simulation without specifying EMT/RMS.
4. Grid code compliance assessment — Strong: references NER, S5.2, GPS, generator performance standards. Partial: general compliance or regulatory work.
5. Model validation & tuning — Strong: validating/tuning generator or inverter models against test data. Partial: general model development or testing.
6. Technical report writing — Strong: writing study reports, technical documentation. Partial: general engineering report writing.
7. Client communication — Strong: presenting to or communicating with clients/stakeholders. Partial: general communication skills.
8. Team knowledge contribution — Strong: mentoring juniors, knowledge sharing, training activities. Partial: general teamwork.

LEAD ENGINEER (Technical Leadership) — All Senior competencies PLUS leads projects and develops people.
Additional competencies:
1. Mentors and develops engineers — Strong: explicitly describes mentoring, coaching, developing team. Partial: working with junior staff.
2. Project leadership & oversight — Strong: named as project lead/manager with deliverable accountability. Partial: general team lead or coordination.
3. Direct NSP/AEMO engagement — Strong: names specific NSPs (Transgrid, Powerlink, ElectraNet, AusNet) or AEMO. Partial: general utility or regulator engagement.
4. Project budget management — Strong: managing budgets, cost control, financial forecasting. Partial: commercial awareness.
5. Client relationship ownership — Strong: primary client contact, account management. Partial: regular client interaction.
6. Technical review & QA sign-off — Strong: reviews and approves others' technical work. Partial: participates in peer review.
7. Scope definition & proposal input — Strong: writes proposals, tenders, scope documents. Partial: aware of proposal processes.
8. Multi-project coordination — Strong: manages multiple concurrent projects. Partial: works on multiple projects.
9. Technical risk assessment — Strong: identifies and manages technical risks. Partial: general risk awareness.

PRINCIPAL ENGINEER (Strategic Leadership) — All Lead competencies PLUS strategic oversight and business growth.
Additional competencies:
1. Strategic oversight across projects — Strong: portfolio/program management, strategic direction. Partial: large project oversight.
2. Business development & growth — Strong: wins new work, client pipeline, revenue targets. Partial: supports BD activities.
3. Senior client advisory — Strong: strategic guidance to senior stakeholders. Partial: project-level advisory.
4. Team capacity & capability planning — Strong: plans team growth, capability gaps, recruitment. Partial: identifies skills needs.
5. Guides Leads on complex decisions — Strong: technical direction to other leads/seniors. Partial: independent complex decisions.
6. Industry thought leadership — Strong: conference presentations, publications, working groups. Partial: industry awareness.
7. Proposal strategy & pricing oversight — Strong: win strategy, pricing decisions. Partial: proposal contribution.
8. Market positioning & service offering — Strong: shapes service offerings, market opportunities. Partial: market understanding.

SCORING RULES:
- "strong": Resume explicitly demonstrates the competency with specific examples, project names, tools named, or outcomes.
- "partial": Related experience that suggests capability but does not directly confirm the exact competency.
- "none": No evidence in resume. Do NOT infer or assume. When in doubt, mark "none".
- Role score (0-100) = percentage of competencies at strong/partial. Weight "strong" more than "partial".
- Level recommendation: Senior needs majority of Senior skills (especially items 1-5). Lead needs Senior PLUS leadership skills. Principal needs Lead PLUS strategic/BD skills. Below Senior = no simulation tool or grid connection study experience.
- Power systems experience in non-renewable sectors is "partial" for renewable-specific competencies.
- International (non-Australian NEM) experience is valid but NER/AEMO/NSP knowledge may need development.
- Software tool proficiency must be explicitly named — do not assume from general simulation experience.
"#;

const SYSTEM_PREAMBLE: &str = "You are an expert technical recruiter specializing in power systems \
    engineering for the renewable energy sector at Vysus Group. You analyze resumes against \
    specific role requirements and provide detailed, consistent skill matching analysis. You must \
    strictly follow the assessment guide provided and never infer skills not explicitly stated in \
    the resume. Always respond with valid JSON.";

/// Full system instruction: recruiter persona plus the assessment guide.
pub fn analysis_system() -> String {
    format!("{SYSTEM_PREAMBLE}\n\nASSESSMENT GUIDE:\n{ASSESSMENT_GUIDE}")
}

/// Builds the user prompt for one analysis request.
///
/// The caller is responsible for rejecting empty resume text before this
/// point; prompt construction itself is pure and infallible.
pub fn build_analysis_prompt(
    resume_text: &str,
    candidate_name: Option<&str>,
    target: Option<RoleLevel>,
    rubric: &Rubric,
) -> String {
    let excerpt = truncate_chars(resume_text, MAX_RESUME_CHARS);

    let skill_names = |level: RoleLevel| -> String {
        rubric
            .level(level)
            .skills
            .iter()
            .map(|s| s.name.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    };

    let senior_count = rubric.skill_count(RoleLevel::Senior);
    let lead_count = rubric.skill_count(RoleLevel::Lead);
    let principal_count = rubric.skill_count(RoleLevel::Principal);

    let target_label = match target {
        Some(level) => format!("{} Engineer", capitalize(level.key())),
        None => "Unspecified".to_string(),
    };

    let hints = &rubric.keyword_hints;

    format!(
        r#"Analyze this resume against Vysus Group's power systems engineer role requirements. Use the Assessment Guide provided in the system message for scoring criteria and competency definitions.

CANDIDATE: {candidate}
TARGET POSITION: {target_label}

RESUME CONTENT:
{excerpt}

SKILL NAMES FOR EACH ROLE (match skills array to these in order):

SENIOR ENGINEER ({senior_count} skills):
{senior_skills}

LEAD ENGINEER ({lead_count} additional skills beyond Senior):
{lead_skills}

PRINCIPAL ENGINEER ({principal_count} additional skills beyond Lead):
{principal_skills}

KEY KEYWORDS TO LOOK FOR:
- Technical: {technical}
- Regulatory: {regulatory}
- Experience: {experience}

Return a JSON object with this exact structure:
{{
  "extractedName": "<full name from resume>",
  "extractedEmail": "<email from resume, or null>",
  "overallScore": <number 0-100>,
  "recommendedLevel": "<Senior|Lead|Principal|Below Senior>",
  "summary": "<2-3 sentence summary of candidate's fit for Vysus, referencing specific evidence from the resume>",
  "roleMatches": {{
    "senior": {{
      "score": <number 0-100>,
      "skills": ["strong"|"partial"|"none", ...] // exactly {senior_count} values, one per Senior skill in order
    }},
    "lead": {{
      "score": <number 0-100>,
      "skills": ["strong"|"partial"|"none", ...] // exactly {lead_count} values, one per Lead skill in order
    }},
    "principal": {{
      "score": <number 0-100>,
      "skills": ["strong"|"partial"|"none", ...] // exactly {principal_count} values, one per Principal skill in order
    }}
  }},
  "recommendation": "<one line hiring recommendation>",
  "keyStrengths": ["<specific strength with evidence from resume>", ...],
  "gaps": ["<specific gap relevant to target position>", ...]
}}

CRITICAL RULES:
- Follow the Assessment Guide scoring criteria strictly for strong/partial/none decisions.
- ONLY base analysis on information explicitly stated in the resume text.
- Do NOT infer, assume, or fabricate skills not clearly mentioned.
- Senior skills array must have exactly {senior_count} entries, Lead exactly {lead_count}, Principal exactly {principal_count}.
- When in doubt between partial and none, mark "none".
- Reference specific resume content in the summary and strengths.
- International experience is valid but note if Australian NEM knowledge may need development.
- Software tools must be explicitly named — do not assume from general descriptions."#,
        candidate = candidate_name.unwrap_or("Unknown"),
        senior_skills = skill_names(RoleLevel::Senior),
        lead_skills = skill_names(RoleLevel::Lead),
        principal_skills = skill_names(RoleLevel::Principal),
        technical = hints.technical.join(", "),
        regulatory = hints.regulatory.join(", "),
        experience = hints.experience.join(", "),
    )
}

/// Truncates to at most `max` characters, never splitting a code point.
fn truncate_chars(text: &str, max: usize) -> &str {
    match text.char_indices().nth(max) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::rubric::default_rubric;

    #[test]
    fn test_prompt_embeds_live_cardinalities() {
        let rubric = default_rubric();
        let prompt = build_analysis_prompt("PSCAD studies", None, Some(RoleLevel::Lead), &rubric);
        assert!(prompt.contains("exactly 8 entries, Lead exactly 9, Principal exactly 8"));
        assert!(prompt.contains("SENIOR ENGINEER (8 skills)"));
        assert!(prompt.contains("LEAD ENGINEER (9 additional skills beyond Senior)"));
    }

    #[test]
    fn test_prompt_cardinalities_follow_custom_rubric() {
        let mut rubric = default_rubric();
        rubric.lead.skills.truncate(4);
        let prompt = build_analysis_prompt("resume", None, None, &rubric);
        assert!(prompt.contains("Lead exactly 4"));
        assert!(prompt.contains("LEAD ENGINEER (4 additional skills beyond Senior)"));
    }

    #[test]
    fn test_prompt_lists_skill_names_from_rubric() {
        let rubric = default_rubric();
        let prompt = build_analysis_prompt("resume", None, None, &rubric);
        assert!(prompt.contains("Independent study delivery (R1/R2)"));
        assert!(prompt.contains("Direct NSP/AEMO engagement"));
        assert!(prompt.contains("Industry thought leadership"));
    }

    #[test]
    fn test_prompt_candidate_and_target_lines() {
        let rubric = default_rubric();
        let prompt = build_analysis_prompt(
            "resume",
            Some("Jane Doe"),
            Some(RoleLevel::Principal),
            &rubric,
        );
        assert!(prompt.contains("CANDIDATE: Jane Doe"));
        assert!(prompt.contains("TARGET POSITION: Principal Engineer"));

        let prompt = build_analysis_prompt("resume", None, None, &rubric);
        assert!(prompt.contains("CANDIDATE: Unknown"));
        assert!(prompt.contains("TARGET POSITION: Unspecified"));
    }

    #[test]
    fn test_resume_truncated_to_budget() {
        let rubric = default_rubric();
        let long_resume = "x".repeat(MAX_RESUME_CHARS + 500);
        let prompt = build_analysis_prompt(&long_resume, None, None, &rubric);
        assert!(prompt.contains(&"x".repeat(MAX_RESUME_CHARS)));
        assert!(!prompt.contains(&"x".repeat(MAX_RESUME_CHARS + 1)));
    }

    #[test]
    fn test_truncation_is_char_boundary_safe() {
        // Multibyte text must not panic at the cut point.
        let text = "é".repeat(MAX_RESUME_CHARS + 10);
        assert_eq!(truncate_chars(&text, MAX_RESUME_CHARS).chars().count(), MAX_RESUME_CHARS);
    }

    #[test]
    fn test_truncate_shorter_input_unchanged() {
        assert_eq!(truncate_chars("short", MAX_RESUME_CHARS), "short");
    }

    #[test]
    fn test_system_instruction_carries_guide() {
        let system = analysis_system();
        assert!(system.contains("ASSESSMENT GUIDE:"));
        assert!(system.contains("When in doubt, mark \"none\""));
        assert!(system.contains("never infer skills"));
    }
}
