// src/web/handlers.rs
use crate::analysis::{AnalysisMode, AnalysisRequest, CvAnalyzer, Field};
use crate::web::types::{AnalyzeCvRequest, ErrorResponse, HealthResponse};
use anyhow::{Context, Result};
use rocket::http::Status;
use rocket::response::status::Custom;
use rocket::serde::json::Json;
use rocket::State;
use tracing::{error, info};

/// Check the raw body and build a typed analysis request. Runs before any
/// outbound traffic; an unknown field or mode never reaches the gateway.
pub fn validate_request(body: &AnalyzeCvRequest) -> Result<AnalysisRequest> {
    let cv_content = body
        .cv_content
        .as_deref()
        .filter(|content| !content.trim().is_empty());
    let field = body.field.as_deref().filter(|field| !field.is_empty());
    let mode = body.mode.as_deref().filter(|mode| !mode.is_empty());

    let (cv_content, field, mode) = match (cv_content, field, mode) {
        (Some(cv_content), Some(field), Some(mode)) => (cv_content, field, mode),
        _ => anyhow::bail!("Missing required parameters"),
    };

    Ok(AnalysisRequest {
        cv_content: cv_content.to_string(),
        job_description: body.job_description.clone(),
        field: field.parse::<Field>()?,
        mode: mode.parse::<AnalysisMode>()?,
    })
}

pub async fn analyze_cv_handler(
    body: String,
    analyzer: &State<CvAnalyzer>,
) -> Result<Json<serde_json::Value>, Custom<Json<ErrorResponse>>> {
    // Parse here rather than in a data guard so a malformed body lands in the
    // same 500 {error} shape as every other failure.
    let parsed: AnalyzeCvRequest = serde_json::from_str(&body)
        .context("Invalid request body")
        .map_err(|e| internal_error(&e))?;

    let request = validate_request(&parsed).map_err(|e| internal_error(&e))?;

    info!(
        "Analyzing CV: field={}, mode={:?}",
        request.field, request.mode
    );

    // One outbound call; the model's JSON comes back unmodified.
    let result = analyzer
        .analyze(&request)
        .await
        .map_err(|e| internal_error(&e))?;

    Ok(Json(result))
}

pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        service: "cvscope".to_string(),
    })
}

fn internal_error(e: &anyhow::Error) -> Custom<Json<ErrorResponse>> {
    error!("Error in analyze-cv handler: {}", e);
    Custom(
        Status::InternalServerError,
        Json(ErrorResponse::new(e.to_string())),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn body(
        cv_content: Option<&str>,
        job_description: Option<&str>,
        field: Option<&str>,
        mode: Option<&str>,
    ) -> AnalyzeCvRequest {
        AnalyzeCvRequest {
            cv_content: cv_content.map(str::to_string),
            job_description: job_description.map(str::to_string),
            field: field.map(str::to_string),
            mode: mode.map(str::to_string),
        }
    }

    #[test]
    fn test_valid_cv_only_request() {
        let request =
            validate_request(&body(Some("cv text"), None, Some("hr"), Some("cv-only"))).unwrap();
        assert_eq!(request.field, Field::Hr);
        assert_eq!(request.mode, AnalysisMode::CvOnly);
        assert!(request.job_description.is_none());
    }

    #[test]
    fn test_valid_comparison_request() {
        let request = validate_request(&body(
            Some("cv text"),
            Some("jd text"),
            Some("economics"),
            Some("comparison"),
        ))
        .unwrap();
        assert_eq!(request.mode, AnalysisMode::Comparison);
        assert_eq!(request.job_description.as_deref(), Some("jd text"));
    }

    #[test]
    fn test_missing_parameters_rejected() {
        let err = validate_request(&body(None, None, Some("hr"), Some("cv-only"))).unwrap_err();
        assert_eq!(err.to_string(), "Missing required parameters");

        assert!(validate_request(&body(Some("cv"), None, None, Some("cv-only"))).is_err());
        assert!(validate_request(&body(Some("cv"), None, Some("hr"), None)).is_err());
    }

    #[test]
    fn test_blank_cv_content_counts_as_missing() {
        let err =
            validate_request(&body(Some("   "), None, Some("hr"), Some("cv-only"))).unwrap_err();
        assert_eq!(err.to_string(), "Missing required parameters");
    }

    #[test]
    fn test_unknown_field_rejected() {
        let err =
            validate_request(&body(Some("cv"), None, Some("astrology"), Some("cv-only")))
                .unwrap_err();
        assert!(err.to_string().contains("Invalid field"));
    }

    #[test]
    fn test_unknown_mode_rejected() {
        let err =
            validate_request(&body(Some("cv"), None, Some("hr"), Some("bulk"))).unwrap_err();
        assert!(err.to_string().contains("Invalid mode"));
    }

    #[test]
    fn test_all_six_fields_accepted() {
        for key in ["data-analysis", "economics", "hr", "politics", "statistics", "pr"] {
            assert!(
                validate_request(&body(Some("cv"), None, Some(key), Some("cv-only"))).is_ok(),
                "field {} should validate",
                key
            );
        }
    }
}
