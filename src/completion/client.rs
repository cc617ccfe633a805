use std::time::Instant;

use crate::consts::{
    DEFAULT_APP_TITLE, DEFAULT_ENDPOINT, DEFAULT_MAX_TOKENS, DEFAULT_MODEL, DEFAULT_REFERER,
    DEFAULT_TEMPERATURE,
};
use crate::error::{CompletionError, PayloadError};
use crate::syllabus::Prompt;
use crate::utils::debug_log;

use super::CompletionBackend;
use super::types::{ChatRequest, ChatResponse, upstream_error_message};

/// Everything needed to address the chat-completion endpoint
#[derive(Debug, Clone)]
pub(crate) struct ClientSettings {
    pub(crate) endpoint: String,
    pub(crate) api_key: String,
    pub(crate) model: String,
    pub(crate) max_tokens: u32,
    pub(crate) temperature: f32,
    pub(crate) referer: String,
    pub(crate) app_title: String,
}

impl ClientSettings {
    pub(crate) fn with_api_key(api_key: impl Into<String>) -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            api_key: api_key.into(),
            model: DEFAULT_MODEL.to_string(),
            max_tokens: DEFAULT_MAX_TOKENS,
            temperature: DEFAULT_TEMPERATURE,
            referer: DEFAULT_REFERER.to_string(),
            app_title: DEFAULT_APP_TITLE.to_string(),
        }
    }
}

/// Blocking OpenRouter chat-completion client.
///
/// One call per `complete`, no retries. Timeouts are whatever `ureq`
/// defaults to; non-2xx statuses come back as responses so the body can be
/// inspected for an upstream error message.
pub(crate) struct OpenRouterClient {
    agent: ureq::Agent,
    settings: ClientSettings,
}

impl OpenRouterClient {
    pub(crate) fn new(settings: ClientSettings) -> Self {
        let agent: ureq::Agent = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .build()
            .into();
        Self { agent, settings }
    }

    pub(crate) fn settings(&self) -> &ClientSettings {
        &self.settings
    }
}

impl CompletionBackend for OpenRouterClient {
    fn name(&self) -> &'static str {
        "OpenRouter"
    }

    fn complete(&self, prompt: &Prompt) -> Result<String, CompletionError> {
        let settings = &self.settings;
        let body = ChatRequest::new(
            &settings.model,
            prompt,
            settings.max_tokens,
            settings.temperature,
        );
        debug_log(format_args!(
            "POST {} model={} prompt_chars={}",
            settings.endpoint,
            settings.model,
            prompt.size()
        ));

        let start = Instant::now();
        let mut response = self
            .agent
            .post(&settings.endpoint)
            .header("Authorization", &format!("Bearer {}", settings.api_key))
            .header("Content-Type", "application/json")
            .header("HTTP-Referer", &settings.referer)
            .header("X-Title", &settings.app_title)
            .send_json(&body)
            .map_err(classify_transport_error)?;

        let status = response.status().as_u16();
        let bytes = response
            .body_mut()
            .read_to_vec()
            .map_err(classify_transport_error)?;
        debug_log(format_args!(
            "HTTP {status} ({} bytes) in {:.0}ms",
            bytes.len(),
            start.elapsed().as_secs_f64() * 1000.0
        ));

        if !(200..300).contains(&status) {
            return Err(CompletionError::Status {
                code: status,
                detail: upstream_error_message(&String::from_utf8_lossy(&bytes)),
            });
        }

        let text = String::from_utf8(bytes)
            .map_err(|e| PayloadError::Malformed(format!("body is not UTF-8: {e}")))?;
        Ok(ChatResponse::extract_content(&text)?)
    }
}

fn classify_transport_error(err: ureq::Error) -> CompletionError {
    match err {
        ureq::Error::StatusCode(code) => CompletionError::Status { code, detail: None },
        ureq::Error::Json(e) => CompletionError::Unknown(e.to_string()),
        other => CompletionError::Network(other.to_string()),
    }
}
