// src/analysis/types.rs
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The six career fields the service knows how to assess.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    DataAnalysis,
    Economics,
    Hr,
    Politics,
    Statistics,
    Pr,
}

impl Field {
    pub const ALL: [Field; 6] = [
        Field::DataAnalysis,
        Field::Economics,
        Field::Hr,
        Field::Politics,
        Field::Statistics,
        Field::Pr,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            Field::DataAnalysis => "data-analysis",
            Field::Economics => "economics",
            Field::Hr => "hr",
            Field::Politics => "politics",
            Field::Statistics => "statistics",
            Field::Pr => "pr",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Field {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "data-analysis" => Ok(Field::DataAnalysis),
            "economics" => Ok(Field::Economics),
            "hr" => Ok(Field::Hr),
            "politics" => Ok(Field::Politics),
            "statistics" => Ok(Field::Statistics),
            "pr" => Ok(Field::Pr),
            _ => anyhow::bail!("Invalid field specified: {}", s),
        }
    }
}

/// Request variant: standalone suitability check or CV-vs-job-description scoring.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnalysisMode {
    CvOnly,
    Comparison,
}

impl FromStr for AnalysisMode {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "cv-only" => Ok(AnalysisMode::CvOnly),
            "comparison" => Ok(AnalysisMode::Comparison),
            _ => anyhow::bail!("Invalid mode specified: {}", s),
        }
    }
}

/// Validated analysis input, built by the handler from the raw request body.
#[derive(Debug, Clone)]
pub struct AnalysisRequest {
    pub cv_content: String,
    pub job_description: Option<String>,
    pub field: Field,
    pub mode: AnalysisMode,
}

// Chat-completion wire types

#[derive(Debug, Serialize)]
pub struct ChatCompletionRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    pub response_format: ResponseFormat,
}

#[derive(Debug, Serialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: String) -> Self {
        Self {
            role: "system".to_string(),
            content,
        }
    }

    pub fn user(content: String) -> Self {
        Self {
            role: "user".to_string(),
            content,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ResponseFormat {
    #[serde(rename = "type")]
    pub format_type: String,
}

impl ResponseFormat {
    pub fn json_object() -> Self {
        Self {
            format_type: "json_object".to_string(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ChatCompletionResponse {
    pub choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
pub struct Choice {
    pub message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
pub struct ChoiceMessage {
    pub content: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_parse_known_keys() {
        assert_eq!("data-analysis".parse::<Field>().unwrap(), Field::DataAnalysis);
        assert_eq!("hr".parse::<Field>().unwrap(), Field::Hr);
        assert_eq!("pr".parse::<Field>().unwrap(), Field::Pr);
    }

    #[test]
    fn test_field_parse_rejects_unknown() {
        assert!("finance".parse::<Field>().is_err());
        assert!("".parse::<Field>().is_err());
        assert!("HR".parse::<Field>().is_err());
    }

    #[test]
    fn test_field_display_round_trips() {
        for field in Field::ALL {
            assert_eq!(field.to_string().parse::<Field>().unwrap(), field);
        }
    }

    #[test]
    fn test_mode_parse() {
        assert_eq!("cv-only".parse::<AnalysisMode>().unwrap(), AnalysisMode::CvOnly);
        assert_eq!(
            "comparison".parse::<AnalysisMode>().unwrap(),
            AnalysisMode::Comparison
        );
        assert!("batch".parse::<AnalysisMode>().is_err());
    }

    #[test]
    fn test_chat_request_wire_shape() {
        let request = ChatCompletionRequest {
            model: "google/gemini-2.5-flash".to_string(),
            messages: vec![
                ChatMessage::system("sys".to_string()),
                ChatMessage::user("usr".to_string()),
            ],
            response_format: ResponseFormat::json_object(),
        };

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["model"], "google/gemini-2.5-flash");
        assert_eq!(value["messages"][0]["role"], "system");
        assert_eq!(value["messages"][1]["role"], "user");
        assert_eq!(value["response_format"]["type"], "json_object");
    }

    #[test]
    fn test_chat_response_parse() {
        let body = r#"{"choices":[{"message":{"content":"{\"suitable\":\"yes\"}"}}]}"#;
        let response: ChatCompletionResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.choices[0].message.content, "{\"suitable\":\"yes\"}");
    }
}
