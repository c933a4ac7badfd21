// src/analysis/analyzer.rs
use super::prompts::build_prompts;
use super::types::{
    AnalysisRequest, ChatCompletionRequest, ChatCompletionResponse, ChatMessage, ResponseFormat,
};
use anyhow::{Context, Result};
use reqwest::Client;
use std::env;
use tracing::{error, info};

/// Stateless client for the chat-completion gateway. One outbound call per
/// analysis, no retry, no streaming.
pub struct CvAnalyzer {
    client: Client,
    gateway_url: String,
    model: String,
}

impl CvAnalyzer {
    pub fn new(gateway_url: String, model: String) -> Result<Self> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(60))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            gateway_url,
            model,
        })
    }

    /// Send the composed prompts to the gateway and return the model's JSON
    /// payload unmodified. No schema validation beyond parse success.
    pub async fn analyze(&self, request: &AnalysisRequest) -> Result<serde_json::Value> {
        // Read the credential per invocation so a missing key surfaces as a
        // request-time configuration error, not a boot failure.
        let api_key =
            env::var("AI_GATEWAY_API_KEY").context("AI_GATEWAY_API_KEY not configured")?;

        let prompts = build_prompts(request);

        let body = ChatCompletionRequest {
            model: self.model.clone(),
            messages: vec![
                ChatMessage::system(prompts.system),
                ChatMessage::user(prompts.user),
            ],
            response_format: ResponseFormat::json_object(),
        };

        info!(
            "Requesting {:?} analysis for field {} from {}",
            request.mode, request.field, self.gateway_url
        );

        let response = self
            .client
            .post(format!("{}/v1/chat/completions", self.gateway_url))
            .bearer_auth(&api_key)
            .json(&body)
            .send()
            .await
            .context("Failed to send request to AI gateway")?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            error!("AI gateway error {}: {}", status.as_u16(), error_text);
            return Err(gateway_error(status));
        }

        let completion: ChatCompletionResponse = response
            .json()
            .await
            .context("Failed to parse AI gateway response")?;

        extract_analysis(completion)
    }
}

/// Error relayed to the caller on a non-success gateway status. Carries the
/// numeric status code only; the raw upstream body stays in the logs.
fn gateway_error(status: reqwest::StatusCode) -> anyhow::Error {
    anyhow::anyhow!("AI gateway error: {}", status.as_u16())
}

/// Pull the first choice's message content out of the completion and parse it
/// as JSON.
fn extract_analysis(completion: ChatCompletionResponse) -> Result<serde_json::Value> {
    let content = completion
        .choices
        .into_iter()
        .next()
        .map(|choice| choice.message.content)
        .context("AI gateway response contained no choices")?;

    serde_json::from_str(&content).context("Model output was not valid JSON")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::types::{Choice, ChoiceMessage};

    fn completion_with(content: &str) -> ChatCompletionResponse {
        ChatCompletionResponse {
            choices: vec![Choice {
                message: ChoiceMessage {
                    content: content.to_string(),
                },
            }],
        }
    }

    #[test]
    fn test_extract_analysis_passes_json_through_unmodified() {
        let content = r#"{"suitable":"maybe","assessment":"Solid base","hardSkills":["Payroll"],"softSkills":[],"recommendations":["Add HRIS experience"]}"#;
        let value = extract_analysis(completion_with(content)).unwrap();
        assert_eq!(value, serde_json::from_str::<serde_json::Value>(content).unwrap());
    }

    #[test]
    fn test_extract_analysis_keeps_unexpected_shapes() {
        // The handler relays whatever valid JSON the model produced.
        let value = extract_analysis(completion_with(r#"{"unexpected":true}"#)).unwrap();
        assert_eq!(value["unexpected"], true);
    }

    #[test]
    fn test_extract_analysis_rejects_empty_choices() {
        let completion = ChatCompletionResponse { choices: vec![] };
        assert!(extract_analysis(completion).is_err());
    }

    #[test]
    fn test_gateway_error_embeds_status_code() {
        let err = gateway_error(reqwest::StatusCode::TOO_MANY_REQUESTS);
        assert_eq!(err.to_string(), "AI gateway error: 429");
    }

    #[test]
    fn test_extract_analysis_rejects_non_json_content() {
        let result = extract_analysis(completion_with("the model rambled instead"));
        assert!(result.is_err());
    }
}
