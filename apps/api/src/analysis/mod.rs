//! Analysis pipeline — one component driving all three resume tools.
//!
//! Flow per request: build the variant's prompt → single model call → dig the
//! JSON object out of the raw text → apply the variant's fallback policy.
//! The three tools differ only in prompt and in how critical it is to show a
//! result when the model's output cannot be parsed, so the policy is a single
//! match here rather than three parallel code paths.

pub mod handlers;
pub mod parser;
pub mod prompts;
pub mod types;

use serde::{de::DeserializeOwned, Serialize};
use tracing::warn;

use crate::errors::AppError;
use crate::llm_client::ModelClient;
use types::{AtsResult, CoverLetterResult, ReviewResult};

/// The three analysis modes, discriminated by the form's `form_type` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variant {
    Ats,
    Review,
    CoverLetter,
}

impl Variant {
    /// Maps the submitted `form_type` value. Unknown values are rejected at
    /// the handler as validation errors.
    pub fn from_form_type(form_type: &str) -> Option<Self> {
        match form_type {
            "ats" => Some(Variant::Ats),
            "resume" => Some(Variant::Review),
            "cover" => Some(Variant::CoverLetter),
            _ => None,
        }
    }

    /// The ATS and cover-letter tools analyze the resume against a posting;
    /// the review tool takes the resume alone.
    pub fn requires_job_description(&self) -> bool {
        matches!(self, Variant::Ats | Variant::CoverLetter)
    }
}

/// Shape-specific decoded output handed to the presentation layer.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum AnalysisResult {
    Ats(AtsResult),
    Review(ReviewResult),
    CoverLetter(CoverLetterResult),
}

/// Runs one analysis end to end: prompt → model → parse → fallback policy.
///
/// A transport-level model failure (after the client's own retries) is always
/// surfaced as an error; the static fallbacks only mask *parse* failures.
pub async fn run_analysis(
    model: &dyn ModelClient,
    variant: Variant,
    job_description: Option<&str>,
    resume_text: &str,
) -> Result<AnalysisResult, AppError> {
    let job_description = job_description.unwrap_or_default();
    let prompt = match variant {
        Variant::Ats => prompts::build_ats_prompt(job_description, resume_text),
        Variant::Review => prompts::build_review_prompt(resume_text),
        Variant::CoverLetter => prompts::build_cover_letter_prompt(job_description, resume_text),
    };

    let raw = model
        .generate(&prompt)
        .await
        .map_err(|e| AppError::Llm(e.to_string()))?;

    resolve(variant, &raw)
}

/// Applies the per-variant fallback policy to the model's raw text.
///
/// - ATS: canned score-65 report on parse failure — always show something.
/// - Review: parse failure propagates; fabricated humor is worse than an
///   honest error.
/// - Cover letter: bracketed template on parse failure.
fn resolve(variant: Variant, raw: &str) -> Result<AnalysisResult, AppError> {
    let parsed = parser::extract_json(raw);
    match variant {
        Variant::Ats => Ok(AnalysisResult::Ats(
            parsed
                .and_then(decode::<AtsResult>)
                .unwrap_or_else(AtsResult::fallback),
        )),
        Variant::Review => parsed
            .and_then(decode::<ReviewResult>)
            .map(AnalysisResult::Review)
            .ok_or(AppError::FeedbackUnavailable),
        Variant::CoverLetter => Ok(AnalysisResult::CoverLetter(
            parsed
                .and_then(decode::<CoverLetterResult>)
                .unwrap_or_else(CoverLetterResult::fallback),
        )),
    }
}

/// A decoded JSON value that does not fit the variant's typed shape counts as
/// a parse failure and goes through the same fallback policy.
fn decode<T: DeserializeOwned>(value: serde_json::Value) -> Option<T> {
    match serde_json::from_value(value) {
        Ok(typed) => Some(typed),
        Err(e) => {
            warn!("Model JSON did not match the expected shape: {e}");
            None
        }
    }
}
