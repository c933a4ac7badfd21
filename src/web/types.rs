// src/web/types.rs
use rocket::serde::{Deserialize, Serialize};

/// Raw analysis request body. All fields optional at the wire level so a
/// missing parameter surfaces as the generic 500 error shape instead of a
/// framework 400.
#[derive(Debug, Deserialize)]
#[serde(crate = "rocket::serde", rename_all = "camelCase")]
pub struct AnalyzeCvRequest {
    pub cv_content: Option<String>,
    pub job_description: Option<String>,
    pub field: Option<String>,
    pub mode: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(crate = "rocket::serde")]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: String) -> Self {
        Self { error }
    }
}

#[derive(Serialize)]
#[serde(crate = "rocket::serde")]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
}
