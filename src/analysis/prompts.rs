// src/analysis/prompts.rs
//! Prompt templates for the two analysis modes. Construction is pure string
//! interpolation of the field name, its skills vocabulary, and the submitted
//! texts; the model does all scoring.

use super::types::{AnalysisMode, AnalysisRequest, Field};

/// System and user messages for one chat-completion call.
pub struct PromptPair {
    pub system: String,
    pub user: String,
}

pub fn build_prompts(request: &AnalysisRequest) -> PromptPair {
    match request.mode {
        AnalysisMode::CvOnly => build_cv_only_prompts(request.field, &request.cv_content),
        AnalysisMode::Comparison => build_comparison_prompts(
            request.field,
            &request.cv_content,
            request.job_description.as_deref().unwrap_or_default(),
        ),
    }
}

pub fn build_cv_only_prompts(field: Field, cv_content: &str) -> PromptPair {
    let skills = field.skill_set();

    let system = format!(
        r#"You are an expert CV analyzer specializing in {field}. Your task is to analyze a CV and determine if the candidate is suitable for a career in {field}.

Evaluate based on:
1. Relevant skills and experience for {field}
2. Educational background
3. Career progression and growth
4. Project experience and achievements

Provide your analysis in JSON format:
{{
  "suitable": "yes" | "no" | "maybe",
  "assessment": "Detailed explanation of your decision",
  "hardSkills": ["missing hard skill 1", "missing hard skill 2"],
  "softSkills": ["missing soft skill 1", "missing soft skill 2"],
  "recommendations": ["recommendation 1", "recommendation 2"]
}}

Key skills for {field}:
Hard Skills: {hard}
Soft Skills: {soft}"#,
        field = field,
        hard = skills.hard_skills_line(),
        soft = skills.soft_skills_line(),
    );

    let user = format!("Analyze this CV for suitability in {}:\n\n{}", field, cv_content);

    PromptPair { system, user }
}

pub fn build_comparison_prompts(field: Field, cv_content: &str, job_description: &str) -> PromptPair {
    let skills = field.skill_set();

    let system = format!(
        r#"You are an expert ATS (Applicant Tracking System) analyzer specializing in {field}. Your task is to compare a CV with a job description and provide an ATS compatibility score and detailed feedback.

Evaluate based on:
1. Keyword matching between CV and job description
2. Relevant skills and experience
3. Qualifications and requirements match
4. Industry-specific terminology

Provide your analysis in JSON format:
{{
  "atsScore": number (0-100),
  "assessment": "Detailed explanation of the match",
  "hardSkills": ["missing hard skill 1", "missing hard skill 2"],
  "softSkills": ["missing soft skill 1", "missing soft skill 2"],
  "recommendations": ["recommendation 1", "recommendation 2"]
}}

Key skills for {field}:
Hard Skills: {hard}
Soft Skills: {soft}"#,
        field = field,
        hard = skills.hard_skills_line(),
        soft = skills.soft_skills_line(),
    );

    let user = format!(
        "Compare this CV with the job description and calculate ATS score:\n\nCV:\n{}\n\nJob Description:\n{}",
        cv_content, job_description
    );

    PromptPair { system, user }
}
