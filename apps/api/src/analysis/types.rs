//! Typed result shapes for the three analysis variants.
//!
//! The model's JSON is decoded into these structs instead of being passed
//! around as dynamic values; every field a response may omit has its default
//! declared here, in one place, rather than at render time. The static
//! fallback payloads for the variants that mask parse failures live here too.

use serde::{Deserialize, Serialize};

// ────────────────────────────────────────────────────────────────────────────
// ATS analysis
// ────────────────────────────────────────────────────────────────────────────

/// One ATS compatibility issue with its suggested fix.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AtsIssue {
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub fix: String,
}

/// ATS compatibility report: a 0-100 score plus issues with fixes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AtsResult {
    #[serde(default)]
    pub score: u32,
    #[serde(default)]
    pub issues: Vec<AtsIssue>,
}

impl AtsResult {
    /// The canned report substituted when the model's response cannot be
    /// parsed. The ATS tool always shows *some* result.
    pub fn fallback() -> Self {
        Self {
            score: 65,
            issues: vec![
                AtsIssue {
                    category: "Keywords".to_string(),
                    description: "Missing key skills like 'Python'.".to_string(),
                    fix: "Incorporate relevant keywords from the job description naturally into your resume.".to_string(),
                },
                AtsIssue {
                    category: "Structure".to_string(),
                    description: "Possible tables or graphics detected.".to_string(),
                    fix: "Convert to simple text-based formatting for better ATS parsing.".to_string(),
                },
                AtsIssue {
                    category: "Experience".to_string(),
                    description: "Lacks quantifiable achievements.".to_string(),
                    fix: "Include metrics, e.g., 'increased sales by 20%' to demonstrate impact.".to_string(),
                },
                AtsIssue {
                    category: "Length".to_string(),
                    description: "Resume exceeds optimal length.".to_string(),
                    fix: "Condense to 1-2 pages by prioritizing recent and relevant experience.".to_string(),
                },
            ],
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Resume review
// ────────────────────────────────────────────────────────────────────────────

/// One titled observation in a resume review.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReviewItem {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
}

/// Resume review: humorous mistakes plus serious recruiter takes.
///
/// No fallback constructor on purpose. When the model's review cannot be
/// parsed the pipeline surfaces an error instead of fabricating commentary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReviewResult {
    #[serde(default)]
    pub mistakes: Vec<ReviewItem>,
    #[serde(default)]
    pub recruiter_thoughts: Vec<ReviewItem>,
}

// ────────────────────────────────────────────────────────────────────────────
// Cover letter
// ────────────────────────────────────────────────────────────────────────────

/// A generated cover letter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoverLetterResult {
    /// Defaults to a short placeholder when the model's JSON parses but lacks
    /// the key.
    #[serde(default = "missing_cover_letter")]
    pub cover_letter: String,
}

fn missing_cover_letter() -> String {
    "Dear Hiring Manager,\n\n[Generated content placeholder]\n\nBest regards,\nYour Name"
        .to_string()
}

impl CoverLetterResult {
    /// The bracketed template substituted when the model's response cannot be
    /// parsed. Placeholders like `[Position]` are rendered verbatim for the
    /// user to fill in.
    pub fn fallback() -> Self {
        Self {
            cover_letter: "Dear Hiring Manager,

I am excited to apply for the [Position] role at [Company], as advertised. With my background in [Key Skill from Resume], I have consistently delivered [Achievement], and I am eager to bring this expertise to your innovative team.

In my previous role at [Company from Resume], I [Specific Experience], resulting in [Impact]. This experience has equipped me with the skills to [Relevance to JD], aligning perfectly with your requirements for [JD Requirement].

I am passionate about [Industry/Topic from JD] and would welcome the opportunity to discuss how my unique blend of skills can contribute to [Company]'s success.

Thank you for considering my application. I look forward to the possibility of speaking with you soon.

Best regards,
[Your Name]"
                .to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_ats_result_defaults_for_missing_keys() {
        let result: AtsResult = serde_json::from_value(json!({})).unwrap();
        assert_eq!(result.score, 0);
        assert!(result.issues.is_empty());
    }

    #[test]
    fn test_ats_issue_defaults_for_partial_entry() {
        let result: AtsResult =
            serde_json::from_value(json!({"score": 70, "issues": [{"category": "Keywords"}]}))
                .unwrap();
        assert_eq!(result.issues[0].category, "Keywords");
        assert_eq!(result.issues[0].description, "");
        assert_eq!(result.issues[0].fix, "");
    }

    #[test]
    fn test_ats_fallback_is_score_65_with_four_issues() {
        let fallback = AtsResult::fallback();
        assert_eq!(fallback.score, 65);
        assert_eq!(fallback.issues.len(), 4);
    }

    #[test]
    fn test_review_result_defaults_to_empty_lists() {
        let result: ReviewResult = serde_json::from_value(json!({})).unwrap();
        assert!(result.mistakes.is_empty());
        assert!(result.recruiter_thoughts.is_empty());
    }

    #[test]
    fn test_cover_letter_missing_key_uses_placeholder() {
        let result: CoverLetterResult = serde_json::from_value(json!({})).unwrap();
        assert!(result.cover_letter.contains("[Generated content placeholder]"));
    }

    #[test]
    fn test_cover_letter_fallback_keeps_bracketed_placeholders() {
        let fallback = CoverLetterResult::fallback();
        assert!(fallback.cover_letter.contains("[Position]"));
        assert!(fallback.cover_letter.contains("[Company]"));
        assert!(fallback.cover_letter.contains("[Your Name]"));
    }
}
