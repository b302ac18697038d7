use std::sync::Arc;

use clawchat_client::{ChatClient, SubmitOutcome, TranscriptController, TranscriptView};
use clawchat_core::{LlmProvider, Message, Sender};
use clawchat_gateway::{GatewayState, ReplySettings, serve};
use clawchat_providers::MockProvider;
use serde_json::{Value, json};
use tokio::net::TcpListener;

fn settings() -> ReplySettings {
    ReplySettings {
        model: "mock".into(),
        system_prompt: String::new(),
        max_tokens: 64,
        temperature: 0.0,
    }
}

/// Starts a gateway on a free local port and returns its base URL.
async fn spawn_gateway(provider: MockProvider) -> String {
    let provider: Arc<dyn LlmProvider> = Arc::new(provider);
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(serve(listener, GatewayState::new(provider, settings())));
    format!("http://{addr}")
}

#[tokio::test]
async fn test_chat_returns_reply() {
    let base = spawn_gateway(MockProvider::new("mock").with_response("**Hi** there")).await;
    let res = reqwest::Client::new()
        .post(format!("{base}/api/chat"))
        .json(&json!({"message": "hello"}))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 200);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body, json!({"reply": "**Hi** there"}));
}

#[tokio::test]
async fn test_blank_message_is_bad_request() {
    let base = spawn_gateway(MockProvider::new("mock")).await;
    let res = reqwest::Client::new()
        .post(format!("{base}/api/chat"))
        .json(&json!({"message": "   "}))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 400);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["message"], "Message is required");
}

#[tokio::test]
async fn test_malformed_body_is_bad_request() {
    let base = spawn_gateway(MockProvider::new("mock")).await;
    let res = reqwest::Client::new()
        .post(format!("{base}/api/chat"))
        .header("content-type", "application/json")
        .body("{\"msg\": 1}")
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 400);
}

#[tokio::test]
async fn test_provider_failure_is_bad_gateway_with_reply() {
    let base = spawn_gateway(MockProvider::new("mock").failing("upstream 503")).await;
    let res = reqwest::Client::new()
        .post(format!("{base}/api/chat"))
        .json(&json!({"message": "hello"}))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 502);
    let body: Value = res.json().await.unwrap();
    assert!(body["reply"].as_str().unwrap().starts_with("Sorry"));
    assert!(!body.to_string().contains("upstream 503"));
}

#[tokio::test]
async fn test_format_endpoint() {
    let base = spawn_gateway(MockProvider::new("mock")).await;
    let body: Value = reqwest::Client::new()
        .post(format!("{base}/api/format"))
        .json(&json!({"text": "* a\n* b"}))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(body["html"], "<ul><li>a</li><br><li>b</li></ul>");
}

#[tokio::test]
async fn test_health_and_index() {
    let base = spawn_gateway(MockProvider::new("mock")).await;
    let client = reqwest::Client::new();

    let health: Value = client
        .get(format!("{base}/api/health"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(health["status"], "ok");
    assert_eq!(health["provider"], "mock");

    let page = client.get(&base).send().await.unwrap().text().await.unwrap();
    assert!(page.contains("id=\"chat-form\""));
}

#[derive(Default)]
struct CountingView {
    rendered: usize,
}

impl TranscriptView for CountingView {
    fn render(&mut self, _message: &Message) {
        self.rendered += 1;
    }

    fn scroll_to_latest(&mut self) {}
}

#[tokio::test]
async fn test_controller_end_to_end() {
    let base = spawn_gateway(MockProvider::new("mock").with_response("Steps:\n- `build`\n- **ship**")).await;
    let mut controller = TranscriptController::new(ChatClient::new(&base), CountingView::default());

    let mut input = "how do I release?".to_string();
    assert_eq!(controller.submit(&mut input).await, SubmitOutcome::Replied);

    let bot = controller.transcript().last().unwrap();
    assert_eq!(bot.sender(), Sender::Bot);
    assert_eq!(
        bot.text(),
        "Steps:<br><ul><li><code>build</code></li><br><li><strong>ship</strong></li></ul>"
    );
    assert_eq!(controller.view().rendered, 2);
}

#[tokio::test]
async fn test_controller_shows_gateway_error() {
    let base = spawn_gateway(MockProvider::new("mock").failing("boom")).await;
    let mut controller = TranscriptController::new(ChatClient::new(&base), CountingView::default());

    let mut input = "hello".to_string();
    assert_eq!(controller.submit(&mut input).await, SubmitOutcome::Failed);

    let bot = controller.transcript().last().unwrap();
    assert!(bot.text().starts_with("Error: Sorry, I couldn&#39;t get a reply"));
}
