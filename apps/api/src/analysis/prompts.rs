//! LLM prompt builders for the three analysis variants.
//!
//! Each prompt instructs the model to output ONLY a JSON object with a
//! documented shape. Inputs are embedded in a single formatting pass after a
//! silent, character-based cutoff, so an oversized paste cannot blow up the
//! request and placeholder-looking text inside an input stays literal.

/// Maximum characters of job description embedded in a prompt.
pub const JOB_DESCRIPTION_MAX_CHARS: usize = 2000;
/// Maximum characters of resume text embedded in a prompt.
pub const RESUME_MAX_CHARS: usize = 4000;

pub fn build_ats_prompt(job_description: &str, resume_text: &str) -> String {
    format!(
        r#"You are an ATS (Applicant Tracking System) expert and resume optimizer. Analyze the resume against the job description and provide a compatibility score (0-100) and 4-6 key issues with fixes.

Criteria:
- Keywords: Match job-specific terms (skills, tools, qualifications).
- Structure: ATS-friendly format (no tables/graphics, clear sections).
- Content: Relevance, quantifiable achievements, gaps in experience.
- Length/Formatting: 1-2 pages, standard fonts, consistent.

Output ONLY valid JSON: {{
    "score": integer (0-100),
    "issues": [
        {{
            "category": "str (e.g., Keywords)",
            "description": "str (brief issue)",
            "fix": "str (actionable fix)"
        }}
    ]
}}

Job Description: {job_description}
Resume: {resume}
"#,
        job_description = truncate_chars(job_description, JOB_DESCRIPTION_MAX_CHARS),
        resume = truncate_chars(resume_text, RESUME_MAX_CHARS),
    )
}

pub fn build_review_prompt(resume_text: &str) -> String {
    format!(
        r#"You are a witty resume reviewer with a troll/humorous edge, but also provide serious recruiter insights. Analyze the resume for 4-6 common mistakes (typos, gaps, vague language, etc.) and what a recruiter might think (pros/cons).

For mistakes: Humorous, exaggerated descriptions.
For recruiter thoughts: Realistic, balanced perspectives.

Output ONLY valid JSON: {{
    "mistakes": [
        {{
            "title": "str (e.g., 'Typos Galore')",
            "description": "str (funny troll commentary)"
        }}
    ],
    "recruiter_thoughts": [
        {{
            "title": "str (e.g., 'Strong Technical Skills')",
            "description": "str (recruiter's view)"
        }}
    ]
}}

Resume: {resume}
"#,
        resume = truncate_chars(resume_text, RESUME_MAX_CHARS),
    )
}

pub fn build_cover_letter_prompt(job_description: &str, resume_text: &str) -> String {
    format!(
        r#"You are a professional cover letter writer. Generate a compelling, 3-4 paragraph cover letter based on the resume and job description. Tailor it to highlight relevant experience, skills, and enthusiasm for the role. Use a professional tone.

Output ONLY valid JSON: {{
    "cover_letter": "full cover letter text (str)"
}}

Job Description: {job_description}
Resume: {resume}
"#,
        job_description = truncate_chars(job_description, JOB_DESCRIPTION_MAX_CHARS),
        resume = truncate_chars(resume_text, RESUME_MAX_CHARS),
    )
}

/// Cuts `s` after `max` characters. Character-based, not word-boundary aware.
fn truncate_chars(s: &str, max: usize) -> &str {
    match s.char_indices().nth(max) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}
