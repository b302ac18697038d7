use anyhow::{bail, Result};
use async_trait::async_trait;
use clawchat_core::{LlmProvider, LlmRequest, LlmResponse};

/// A provider that answers locally: a fixed reply, a fixed failure, or an
/// echo of the user's message.
pub struct MockProvider {
    name: String,
    fixed_response: Option<String>,
    failure: Option<String>,
}

impl MockProvider {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fixed_response: None,
            failure: None,
        }
    }

    pub fn with_response(mut self, response: impl Into<String>) -> Self {
        self.fixed_response = Some(response.into());
        self
    }

    /// Makes every completion fail with the given message.
    pub fn failing(mut self, message: impl Into<String>) -> Self {
        self.failure = Some(message.into());
        self
    }
}

#[async_trait]
impl LlmProvider for MockProvider {
    fn name(&self) -> &str {
        &self.name
    }

    async fn complete(&self, req: &LlmRequest) -> Result<LlmResponse> {
        if let Some(message) = &self.failure {
            bail!("{message}");
        }
        let content = self
            .fixed_response
            .clone()
            .unwrap_or_else(|| format!("You said: **{}**", req.user_prompt));
        Ok(LlmResponse {
            content,
            provider: self.name.clone(),
            model: "mock".to_string(),
            tokens_used: 0,
            latency_ms: 0,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(prompt: &str) -> LlmRequest {
        LlmRequest {
            model: "any".into(),
            system_prompt: String::new(),
            user_prompt: prompt.into(),
            max_tokens: 64,
            temperature: 0.0,
        }
    }

    #[tokio::test]
    async fn test_echo_by_default() {
        let provider = MockProvider::new("mock");
        let response = provider.complete(&request("hi")).await.unwrap();
        assert_eq!(response.content, "You said: **hi**");
        assert_eq!(response.provider, "mock");
    }

    #[tokio::test]
    async fn test_fixed_response() {
        let provider = MockProvider::new("mock").with_response("* a\n* b");
        let response = provider.complete(&request("ignored")).await.unwrap();
        assert_eq!(response.content, "* a\n* b");
    }

    #[tokio::test]
    async fn test_failing() {
        let provider = MockProvider::new("mock").failing("model overloaded");
        let err = provider.complete(&request("hi")).await.unwrap_err();
        assert_eq!(err.to_string(), "model overloaded");
    }
}
