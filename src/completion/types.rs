//! Wire types for the chat-completion API
//!
//! Response fields are all optional so that a missing field becomes a named
//! `PayloadError` instead of a generic decode failure.

use serde::{Deserialize, Serialize};

use crate::error::PayloadError;
use crate::syllabus::Prompt;

#[derive(Debug, Serialize)]
pub(super) struct ChatRequest<'a> {
    pub(super) model: &'a str,
    pub(super) messages: [ChatMessage<'a>; 2],
    pub(super) max_tokens: u32,
    pub(super) temperature: f32,
}

#[derive(Debug, Serialize)]
pub(super) struct ChatMessage<'a> {
    pub(super) role: &'static str,
    pub(super) content: &'a str,
}

impl<'a> ChatRequest<'a> {
    pub(super) fn new(model: &'a str, prompt: &'a Prompt, max_tokens: u32, temperature: f32) -> Self {
        Self {
            model,
            messages: [
                ChatMessage {
                    role: "system",
                    content: prompt.system,
                },
                ChatMessage {
                    role: "user",
                    content: &prompt.user,
                },
            ],
            max_tokens,
            temperature,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(super) struct ChatResponse {
    #[serde(default)]
    choices: Option<Vec<Choice>>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    #[serde(default)]
    message: Option<ChoiceMessage>,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

/// Error envelope returned alongside non-2xx statuses
#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
}

impl ChatResponse {
    /// Decode a success body and extract the first choice's text unchanged
    pub(super) fn extract_content(body: &str) -> Result<String, PayloadError> {
        let response: ChatResponse = serde_json::from_str(body)
            .map_err(|e| PayloadError::Malformed(format!("invalid JSON body: {e}")))?;

        let choices = response.choices.unwrap_or_default();
        let first = choices.into_iter().next().ok_or(PayloadError::NoChoices)?;
        let message = first
            .message
            .ok_or_else(|| PayloadError::Malformed("'message' missing from first choice".into()))?;
        let content = message
            .content
            .ok_or_else(|| PayloadError::Malformed("'content' missing from message".into()))?;

        if content.trim().is_empty() {
            return Err(PayloadError::EmptyContent);
        }
        Ok(content)
    }
}

/// Pull `error.message` out of an error body, if it has one
pub(super) fn upstream_error_message(body: &str) -> Option<String> {
    serde_json::from_str::<ErrorEnvelope>(body)
        .ok()
        .map(|envelope| envelope.error.message)
        .filter(|message| !message.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_first_choice_verbatim() {
        let body = r###"{"id":"gen-1","choices":[{"index":0,"message":{"role":"assistant","content":"  # Physics\n\n## Week 1  \n"}},{"message":{"content":"second"}}]}"###;
        assert_eq!(
            ChatResponse::extract_content(body).unwrap(),
            "  # Physics\n\n## Week 1  \n"
        );
    }

    #[test]
    fn missing_or_empty_choices() {
        assert_eq!(
            ChatResponse::extract_content(r#"{"id":"x"}"#),
            Err(PayloadError::NoChoices)
        );
        assert_eq!(
            ChatResponse::extract_content(r#"{"choices":[]}"#),
            Err(PayloadError::NoChoices)
        );
        assert_eq!(
            ChatResponse::extract_content(r#"{"choices":null}"#),
            Err(PayloadError::NoChoices)
        );
    }

    #[test]
    fn missing_nested_fields_are_malformed() {
        assert!(matches!(
            ChatResponse::extract_content(r#"{"choices":[{"index":0}]}"#),
            Err(PayloadError::Malformed(_))
        ));
        assert!(matches!(
            ChatResponse::extract_content(r#"{"choices":[{"message":{"role":"assistant"}}]}"#),
            Err(PayloadError::Malformed(_))
        ));
        assert!(matches!(
            ChatResponse::extract_content("<html>bad gateway</html>"),
            Err(PayloadError::Malformed(_))
        ));
    }

    #[test]
    fn blank_content_is_empty() {
        assert_eq!(
            ChatResponse::extract_content(r#"{"choices":[{"message":{"content":"  \n"}}]}"#),
            Err(PayloadError::EmptyContent)
        );
    }

    #[test]
    fn request_serializes_two_messages() {
        let prompt = Prompt {
            system: "sys",
            user: "usr".to_string(),
        };
        let request = ChatRequest::new("openai/gpt-3.5-turbo", &prompt, 2000, 0.7);
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["model"], "openai/gpt-3.5-turbo");
        assert_eq!(value["max_tokens"], 2000);
        assert_eq!(value["messages"][0]["role"], "system");
        assert_eq!(value["messages"][0]["content"], "sys");
        assert_eq!(value["messages"][1]["role"], "user");
        assert_eq!(value["messages"][1]["content"], "usr");
        let temperature = value["temperature"].as_f64().unwrap();
        assert!((temperature - 0.7).abs() < 1e-6);
    }

    #[test]
    fn upstream_message_is_optional() {
        assert_eq!(
            upstream_error_message(r#"{"error":{"message":"Rate limit exceeded","code":429}}"#),
            Some("Rate limit exceeded".to_string())
        );
        assert_eq!(upstream_error_message("Internal Server Error"), None);
        assert_eq!(upstream_error_message(r#"{"error":{"message":""}}"#), None);
    }
}
