//! Model Gateway — delivers a composed conversation to the external
//! completion service and returns the raw reply, unaltered.
//!
//! The gateway validates only the envelope shape (a reply field must
//! exist); what the reply *says* is the extractor's concern. It performs
//! no retries and no caching — those policies belong to callers.

use std::future::Future;

use serde::{Deserialize, Serialize};

use crate::models::{Conversation, ConversationMessage};

/// The gateway could not obtain a usable reply.
#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    #[error("Completion service credential is not configured")]
    MissingCredential,
    #[error("Transport failure: {0}")]
    Transport(String),
    #[error("Completion service returned status {status}: {body}")]
    Upstream { status: u16, body: String },
    #[error("Malformed service envelope: {0}")]
    MalformedEnvelope(String),
}

/// Capability flags for a completion call.
#[derive(Debug, Clone, Copy, Default)]
pub struct CompletionOptions {
    /// Ask the service to attach an extended reasoning trace.
    pub reasoning: bool,
}

/// The assistant's raw reply plus passthrough metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionReply {
    pub content: String,
    pub reasoning_details: Option<serde_json::Value>,
}

/// Boundary trait for the completion service, so tests can substitute
/// a mock for the network client.
pub trait CompletionClient: Send + Sync {
    fn complete(
        &self,
        model: &str,
        conversation: &[ConversationMessage],
        options: CompletionOptions,
    ) -> impl Future<Output = Result<CompletionReply, GatewayError>> + Send;
}

// ═══════════════════════════════════════════════════════════
// Wire types
// ═══════════════════════════════════════════════════════════

#[derive(Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: &'a [ConversationMessage],
    #[serde(skip_serializing_if = "Option::is_none")]
    reasoning: Option<ReasoningFlag>,
}

#[derive(Serialize)]
struct ReasoningFlag {
    enabled: bool,
}

#[derive(Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ReplyMessage,
}

#[derive(Deserialize)]
struct ReplyMessage {
    content: Option<String>,
    #[serde(default)]
    reasoning_details: Option<serde_json::Value>,
}

/// Pull the reply out of a service response body, checking only that the
/// expected envelope fields exist.
fn parse_envelope(body: &str) -> Result<CompletionReply, GatewayError> {
    let parsed: ChatCompletionResponse = serde_json::from_str(body)
        .map_err(|e| GatewayError::MalformedEnvelope(e.to_string()))?;
    let choice = parsed
        .choices
        .into_iter()
        .next()
        .ok_or_else(|| GatewayError::MalformedEnvelope("no choices in response".into()))?;
    let content = choice
        .message
        .content
        .ok_or_else(|| GatewayError::MalformedEnvelope("missing reply content".into()))?;
    Ok(CompletionReply {
        content,
        reasoning_details: choice.message.reasoning_details,
    })
}

// ═══════════════════════════════════════════════════════════
// OpenRouter client
// ═══════════════════════════════════════════════════════════

/// HTTPS client for an OpenRouter-compatible chat-completions service.
pub struct OpenRouterClient {
    http: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
}

impl OpenRouterClient {
    pub fn new(base_url: &str, api_key: Option<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl CompletionClient for OpenRouterClient {
    async fn complete(
        &self,
        model: &str,
        conversation: &[ConversationMessage],
        options: CompletionOptions,
    ) -> Result<CompletionReply, GatewayError> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or(GatewayError::MissingCredential)?;

        let body = ChatCompletionRequest {
            model,
            messages: conversation,
            reasoning: options.reasoning.then_some(ReasoningFlag { enabled: true }),
        };

        let response = self
            .http
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(api_key)
            .header("HTTP-Referer", crate::config::HTTP_REFERER)
            .header("X-Title", crate::config::APP_NAME)
            .json(&body)
            .send()
            .await
            .map_err(|e| GatewayError::Transport(e.to_string()))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| GatewayError::Transport(e.to_string()))?;

        if !status.is_success() {
            return Err(GatewayError::Upstream {
                status: status.as_u16(),
                body: text,
            });
        }

        parse_envelope(&text)
    }
}

// ═══════════════════════════════════════════════════════════
// Mock client
// ═══════════════════════════════════════════════════════════

/// Mock completion client for tests — returns a configured reply (or
/// failure) and records the last request for assertions.
pub struct MockCompletionClient {
    outcome: MockOutcome,
    last_request: std::sync::Mutex<Option<RecordedRequest>>,
}

enum MockOutcome {
    Reply {
        content: String,
        reasoning_details: Option<serde_json::Value>,
    },
    Upstream {
        status: u16,
        body: String,
    },
}

#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub model: String,
    pub conversation: Conversation,
    pub reasoning: bool,
}

impl MockCompletionClient {
    pub fn replying(content: &str) -> Self {
        Self {
            outcome: MockOutcome::Reply {
                content: content.to_string(),
                reasoning_details: None,
            },
            last_request: std::sync::Mutex::new(None),
        }
    }

    pub fn with_reasoning_details(mut self, details: serde_json::Value) -> Self {
        if let MockOutcome::Reply { reasoning_details, .. } = &mut self.outcome {
            *reasoning_details = Some(details);
        }
        self
    }

    pub fn failing(status: u16, body: &str) -> Self {
        Self {
            outcome: MockOutcome::Upstream {
                status,
                body: body.to_string(),
            },
            last_request: std::sync::Mutex::new(None),
        }
    }

    /// The most recent request this mock served, if any.
    pub fn last_request(&self) -> Option<RecordedRequest> {
        self.last_request.lock().ok()?.clone()
    }
}

impl CompletionClient for MockCompletionClient {
    async fn complete(
        &self,
        model: &str,
        conversation: &[ConversationMessage],
        options: CompletionOptions,
    ) -> Result<CompletionReply, GatewayError> {
        if let Ok(mut last) = self.last_request.lock() {
            *last = Some(RecordedRequest {
                model: model.to_string(),
                conversation: conversation.to_vec(),
                reasoning: options.reasoning,
            });
        }
        match &self.outcome {
            MockOutcome::Reply { content, reasoning_details } => Ok(CompletionReply {
                content: content.clone(),
                reasoning_details: reasoning_details.clone(),
            }),
            MockOutcome::Upstream { status, body } => Err(GatewayError::Upstream {
                status: *status,
                body: body.clone(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_body_shape_with_reasoning() {
        let conversation = vec![ConversationMessage::user("hi")];
        let body = ChatCompletionRequest {
            model: "x-ai/grok-4.1-fast:free",
            messages: &conversation,
            reasoning: Some(ReasoningFlag { enabled: true }),
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["model"], "x-ai/grok-4.1-fast:free");
        assert_eq!(json["messages"][0]["content"], "hi");
        assert_eq!(json["reasoning"]["enabled"], true);
    }

    #[test]
    fn request_body_omits_reasoning_when_disabled() {
        let conversation = vec![ConversationMessage::user("hi")];
        let body = ChatCompletionRequest {
            model: "m",
            messages: &conversation,
            reasoning: None,
        };
        let json = serde_json::to_value(&body).unwrap();
        assert!(json.get("reasoning").is_none());
    }

    #[test]
    fn parse_envelope_returns_reply_unaltered() {
        let reply = parse_envelope(
            r#"{"choices":[{"message":{"content":"raw text, not inspected","reasoning_details":{"t":1}}}]}"#,
        )
        .unwrap();
        assert_eq!(reply.content, "raw text, not inspected");
        assert_eq!(reply.reasoning_details, Some(serde_json::json!({"t":1})));
    }

    #[test]
    fn parse_envelope_rejects_missing_choices() {
        let err = parse_envelope(r#"{"choices":[]}"#).unwrap_err();
        assert!(matches!(err, GatewayError::MalformedEnvelope(_)));
    }

    #[test]
    fn parse_envelope_rejects_missing_content() {
        let err = parse_envelope(r#"{"choices":[{"message":{}}]}"#).unwrap_err();
        assert!(matches!(err, GatewayError::MalformedEnvelope(_)));
    }

    #[test]
    fn parse_envelope_rejects_non_json() {
        assert!(matches!(
            parse_envelope("<html>gateway timeout</html>"),
            Err(GatewayError::MalformedEnvelope(_))
        ));
    }

    #[test]
    fn client_trims_trailing_slash() {
        let client = OpenRouterClient::new("https://openrouter.ai/api/v1/", None);
        assert_eq!(client.base_url(), "https://openrouter.ai/api/v1");
    }

    #[tokio::test]
    async fn missing_credential_fails_before_any_call() {
        let client = OpenRouterClient::new("http://127.0.0.1:1", None);
        let err = client
            .complete("m", &[ConversationMessage::user("hi")], CompletionOptions::default())
            .await
            .unwrap_err();
        assert!(matches!(err, GatewayError::MissingCredential));
    }

    #[tokio::test]
    async fn mock_records_request_and_replies() {
        let mock = MockCompletionClient::replying("hello")
            .with_reasoning_details(serde_json::json!({"steps": 2}));
        let conversation = vec![ConversationMessage::user("question")];

        let reply = mock
            .complete("test-model", &conversation, CompletionOptions { reasoning: true })
            .await
            .unwrap();
        assert_eq!(reply.content, "hello");
        assert_eq!(reply.reasoning_details, Some(serde_json::json!({"steps": 2})));

        let recorded = mock.last_request().unwrap();
        assert_eq!(recorded.model, "test-model");
        assert_eq!(recorded.conversation.len(), 1);
        assert!(recorded.reasoning);
    }

    #[tokio::test]
    async fn mock_surfaces_upstream_failure() {
        let mock = MockCompletionClient::failing(429, "rate limited");
        let err = mock
            .complete("m", &[], CompletionOptions::default())
            .await
            .unwrap_err();
        match err {
            GatewayError::Upstream { status, body } => {
                assert_eq!(status, 429);
                assert_eq!(body, "rate limited");
            }
            other => panic!("expected upstream error, got {other:?}"),
        }
    }
}
