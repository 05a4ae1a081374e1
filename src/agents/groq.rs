use async_trait::async_trait;
use rig::completion::CompletionModel;
use rig::message::AssistantContent;
use rig::providers::groq;
use serde_json::{Value, json};
use tracing::{debug, error};

use crate::agents::{CompletionError, CompletionRequest, CompletionService, ModelProfile};

/// Groq chat completions, via rig's provider client
pub struct GroqCompletion {
    client: groq::Client,
}

impl GroqCompletion {
    pub fn new(api_key: &str) -> Self {
        Self {
            client: groq::Client::new(api_key),
        }
    }

    pub fn with_base_url(api_key: &str, base_url: &str) -> Self {
        Self {
            client: groq::Client::from_url(api_key, base_url),
        }
    }
}

/// Raw request parameters merged into the provider payload.
/// `max_tokens` is carried here too since not every rig provider forwards it.
pub fn request_params(profile: &ModelProfile) -> Value {
    let mut params = json!({ "max_tokens": profile.max_tokens });
    if profile.json_output {
        params["response_format"] = json!({ "type": "json_object" });
    }
    params
}

#[async_trait]
impl CompletionService for GroqCompletion {
    async fn complete(&self, request: CompletionRequest) -> Result<String, CompletionError> {
        let CompletionRequest { prompt, profile } = request;
        debug!(
            "Calling Groq model {} (max_tokens={}, json={})",
            profile.model, profile.max_tokens, profile.json_output
        );

        // No preamble: the request carries the user message only.
        let response = self
            .client
            .completion_model(&profile.model)
            .completion_request(prompt)
            .max_tokens(profile.max_tokens)
            .additional_params(request_params(&profile))
            .send()
            .await
            .map_err(|e| {
                error!("Groq call to {} failed: {}", profile.model, e);
                CompletionError(e.to_string())
            })?;

        let parts: Vec<&str> = response
            .choice
            .iter()
            .filter_map(|content| match content {
                AssistantContent::Text(text) => Some(text.text.as_str()),
                _ => None,
            })
            .collect();

        if parts.is_empty() {
            error!("Groq response from {} carried no text", profile.model);
            return Err(CompletionError(
                "Provider response contained no text".to_string(),
            ));
        }
        Ok(parts.concat())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    const GROQ_REPLY: &str = r#"{
        "id": "chatcmpl-1",
        "object": "chat.completion",
        "created": 1700000000,
        "model": "llama-3.1-8b-instant",
        "choices": [{
            "index": 0,
            "message": {"role": "assistant", "content": "{\"is_topic\": true, \"reason\": \"ok\"}"},
            "logprobs": null,
            "finish_reason": "stop"
        }],
        "usage": {"prompt_tokens": 10, "completion_tokens": 5, "total_tokens": 15}
    }"#;

    /// Accept one HTTP request, answer it with `GROQ_REPLY`, return the request body
    async fn capture_one_request(listener: TcpListener) -> Value {
        let (mut socket, _) = listener.accept().await.unwrap();
        let mut buf = Vec::new();
        let mut chunk = [0u8; 4096];

        let body_start = loop {
            let n = socket.read(&mut chunk).await.unwrap();
            assert!(n > 0, "connection closed before headers");
            buf.extend_from_slice(&chunk[..n]);
            if let Some(pos) = buf.windows(4).position(|w| w == b"\r\n\r\n") {
                break pos + 4;
            }
        };

        let headers = String::from_utf8_lossy(&buf[..body_start]).to_lowercase();
        let content_length: usize = headers
            .lines()
            .find_map(|line| line.strip_prefix("content-length:"))
            .map(|v| v.trim().parse().unwrap())
            .unwrap();

        while buf.len() < body_start + content_length {
            let n = socket.read(&mut chunk).await.unwrap();
            assert!(n > 0, "connection closed before body");
            buf.extend_from_slice(&chunk[..n]);
        }

        let response = format!(
            "HTTP/1.1 200 OK\r\ncontent-type: application/json\r\n\
             content-length: {}\r\nconnection: close\r\n\r\n{}",
            GROQ_REPLY.len(),
            GROQ_REPLY
        );
        socket.write_all(response.as_bytes()).await.unwrap();
        socket.shutdown().await.unwrap();

        serde_json::from_slice(&buf[body_start..body_start + content_length]).unwrap()
    }

    #[test]
    fn test_request_params_json_profile() {
        let params = request_params(&ModelProfile::classifier("llama-3.1-8b-instant"));
        assert_eq!(
            params,
            json!({ "max_tokens": 150, "response_format": { "type": "json_object" } })
        );
    }

    #[test]
    fn test_request_params_text_profile() {
        let params = request_params(&ModelProfile::planner("llama-3.3-70b-versatile"));
        assert_eq!(params, json!({ "max_tokens": 1024 }));
        assert!(params.get("response_format").is_none());
    }

    #[tokio::test]
    async fn test_sends_only_the_user_message() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let base_url = format!("http://{}", listener.local_addr().unwrap());
        let server = tokio::spawn(capture_one_request(listener));

        let groq = GroqCompletion::with_base_url("gsk_test", &base_url);
        let text = groq
            .complete(CompletionRequest::new(
                "Quantum Physics".to_string(),
                ModelProfile::classifier("llama-3.1-8b-instant"),
            ))
            .await
            .unwrap();
        assert_eq!(text, r#"{"is_topic": true, "reason": "ok"}"#);

        let body = server.await.unwrap();
        assert_eq!(
            body["messages"],
            json!([{ "role": "user", "content": "Quantum Physics" }])
        );
        assert_eq!(body["model"], "llama-3.1-8b-instant");
        assert_eq!(body["max_tokens"], 150);
        assert_eq!(body["response_format"], json!({ "type": "json_object" }));
    }
}
