//! Tests for the Telegram channel and the swallow-failures notifier

use homework_status_monitor::{
    NotificationChannel, Notifier, SendResult, TelegramChannel, TelegramConfig,
};
use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn channel_against(server: &MockServer) -> TelegramChannel {
    let config = TelegramConfig::new("123:abc", "1440537501").with_api_base(server.uri());
    TelegramChannel::new(config).unwrap()
}

#[tokio::test]
async fn send_posts_chat_id_and_text() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/bot123:abc/sendMessage"))
        .and(body_json(json!({
            "chat_id": "1440537501",
            "text": "Изменился статус проверки работы \"hw1\". Работа взята на проверку ревьюером.",
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"ok": true})))
        .expect(1)
        .mount(&server)
        .await;

    let channel = channel_against(&server);
    let result = channel
        .send("Изменился статус проверки работы \"hw1\". Работа взята на проверку ревьюером.")
        .await
        .unwrap();

    assert_eq!(result, SendResult::Sent);
}

#[tokio::test]
async fn api_rejection_maps_to_failed() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/bot123:abc/sendMessage"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "ok": false,
            "description": "Bad Request: chat not found",
        })))
        .mount(&server)
        .await;

    let channel = channel_against(&server);
    let result = channel.send("привет").await.unwrap();

    assert_eq!(
        result,
        SendResult::Failed("Bad Request: chat not found".to_string())
    );
}

#[tokio::test]
async fn notifier_swallows_unreachable_channel() {
    // Connection refused must surface as a Failed result, never a panic
    // or a propagated error
    let server = MockServer::start().await;
    let channel = channel_against(&server);
    drop(server);

    let notifier = Notifier::new(Box::new(channel));
    let result = notifier.notify("привет").await;

    assert!(matches!(result, SendResult::Failed(_)));
}
