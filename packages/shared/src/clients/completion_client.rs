use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::clients::config::CompletionConfig;
use crate::clients::errors::completion_client_errors::CompletionClientError;

#[cfg(test)]
use mockall::automock;

/// A text-completion backend: one user prompt in, the first choice's text out.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait CompletionClient: Send + Sync {
    async fn complete(&self, prompt: &str) -> Result<String, CompletionClientError>;
}

#[derive(Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    max_tokens: u32,
    temperature: f32,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
    #[serde(default)]
    usage: Option<Usage>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Deserialize)]
struct ChatChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

#[derive(Deserialize)]
struct Usage {
    #[serde(default)]
    prompt_tokens: u32,
    #[serde(default)]
    completion_tokens: u32,
}

/// Client for an OpenAI-compatible `/chat/completions` endpoint.
pub struct OpenAiCompletionClient {
    config: CompletionConfig,
    client: reqwest::Client,
}

impl OpenAiCompletionClient {
    pub fn new(config: CompletionConfig) -> Result<Self, CompletionClientError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| CompletionClientError::Transport(e.to_string()))?;

        Ok(Self { config, client })
    }
}

#[async_trait]
impl CompletionClient for OpenAiCompletionClient {
    async fn complete(&self, prompt: &str) -> Result<String, CompletionClientError> {
        let url = format!("{}/chat/completions", self.config.base_url);
        let request = ChatCompletionRequest {
            model: &self.config.model,
            messages: vec![ChatMessage {
                role: "user",
                content: prompt,
            }],
            max_tokens: self.config.max_tokens,
            temperature: self.config.temperature,
        };

        debug!(
            "Sending completion request: model={}, prompt_len={}",
            self.config.model,
            prompt.len()
        );

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.config.api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let body: String = body.chars().take(500).collect();
            return Err(CompletionClientError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let body: ChatCompletionResponse = response.json().await?;
        if let Some(usage) = &body.usage {
            info!(
                "Completion usage: prompt_tokens={}, completion_tokens={}",
                usage.prompt_tokens, usage.completion_tokens
            );
        }

        body.choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content.unwrap_or_default())
            .ok_or(CompletionClientError::EmptyResponse)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::time::Duration;
    use wiremock::matchers::{bearer_token, body_partial_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn config_for(server: &MockServer) -> CompletionConfig {
        let mut config = CompletionConfig::new("sk-test");
        config.base_url = server.uri();
        config
    }

    fn completion_body(content: &str) -> serde_json::Value {
        json!({
            "id": "chatcmpl-1",
            "object": "chat.completion",
            "choices": [
                {"index": 0, "message": {"role": "assistant", "content": content}, "finish_reason": "stop"}
            ],
            "usage": {"prompt_tokens": 120, "completion_tokens": 18, "total_tokens": 138}
        })
    }

    #[tokio::test]
    async fn test_complete_sends_expected_request() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .and(bearer_token("sk-test"))
            .and(body_partial_json(json!({
                "model": "gpt-4o",
                "messages": [{"role": "user", "content": "your move"}],
                "max_tokens": 100
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(completion_body("e4")))
            .expect(1)
            .mount(&server)
            .await;

        let client = OpenAiCompletionClient::new(config_for(&server)).unwrap();
        let text = client.complete("your move").await.unwrap();

        assert_eq!(text, "e4");
    }

    #[tokio::test]
    async fn test_complete_sends_configured_temperature() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(body_partial_json(json!({"temperature": 0.5})))
            .respond_with(ResponseTemplate::new(200).set_body_json(completion_body("ok")))
            .expect(1)
            .mount(&server)
            .await;

        let mut config = config_for(&server);
        config.temperature = 0.5;
        let client = OpenAiCompletionClient::new(config).unwrap();

        assert_eq!(client.complete("prompt").await.unwrap(), "ok");
    }

    #[tokio::test]
    async fn test_complete_reads_only_first_choice() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "choices": [
                    {"message": {"role": "assistant", "content": "first"}},
                    {"message": {"role": "assistant", "content": "second"}}
                ]
            })))
            .mount(&server)
            .await;

        let client = OpenAiCompletionClient::new(config_for(&server)).unwrap();
        assert_eq!(client.complete("prompt").await.unwrap(), "first");
    }

    #[tokio::test]
    async fn test_error_status_is_reported() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(
                ResponseTemplate::new(401).set_body_json(json!({"error": {"message": "bad key"}})),
            )
            .mount(&server)
            .await;

        let client = OpenAiCompletionClient::new(config_for(&server)).unwrap();
        let err = client.complete("prompt").await.unwrap_err();

        match err {
            CompletionClientError::Status { status, body } => {
                assert_eq!(status, 401);
                assert!(body.contains("bad key"));
            }
            other => panic!("Expected Status error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_no_choices_is_empty_response() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"choices": []})))
            .mount(&server)
            .await;

        let client = OpenAiCompletionClient::new(config_for(&server)).unwrap();
        let err = client.complete("prompt").await.unwrap_err();
        assert!(matches!(err, CompletionClientError::EmptyResponse));
    }

    #[tokio::test]
    async fn test_malformed_body_is_invalid_response() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&server)
            .await;

        let client = OpenAiCompletionClient::new(config_for(&server)).unwrap();
        let err = client.complete("prompt").await.unwrap_err();
        assert!(matches!(err, CompletionClientError::InvalidResponse(_)));
    }

    #[tokio::test]
    async fn test_slow_service_times_out() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(completion_body("late"))
                    .set_delay(Duration::from_secs(5)),
            )
            .mount(&server)
            .await;

        let mut config = config_for(&server);
        config.timeout = Duration::from_millis(200);
        let client = OpenAiCompletionClient::new(config).unwrap();

        let err = client.complete("prompt").await.unwrap_err();
        assert!(matches!(err, CompletionClientError::Timeout));
    }

    #[tokio::test]
    async fn test_unreachable_service_is_transport_error() {
        let mut config = CompletionConfig::new("sk-test");
        config.base_url = "http://127.0.0.1:1".to_string();
        let client = OpenAiCompletionClient::new(config).unwrap();

        let err = client.complete("prompt").await.unwrap_err();
        assert!(matches!(err, CompletionClientError::Transport(_)));
    }
}
