use mockito::Matcher;
use pingrelay::core::models::DeliveryCredentials;
use pingrelay::errors::TransportError;
use pingrelay::telegram::{MessageTransport, TelegramClient};
use serde_json::json;

const TOKEN: &str = "123456:test-token";

fn credentials() -> DeliveryCredentials {
    DeliveryCredentials::new(TOKEN, "-1001234567890")
}

#[tokio::test]
async fn test_send_message_posts_chat_id_and_text() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/bot123456:test-token/sendMessage")
        .match_body(Matcher::Json(json!({
            "chat_id": "-1001234567890",
            "text": "Disk usage at 91%",
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(json!({"ok": true, "result": {"message_id": 7}}).to_string())
        .expect(1)
        .create_async()
        .await;

    let client = TelegramClient::new(server.url());
    client
        .send_message("Disk usage at 91%", &credentials())
        .await
        .unwrap();

    mock.assert_async().await;
}

#[tokio::test]
async fn test_send_message_includes_parse_mode_when_configured() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/bot123456:test-token/sendMessage")
        .match_body(Matcher::PartialJson(json!({
            "parse_mode": "HTML",
            "disable_web_page_preview": true,
        })))
        .with_status(200)
        .with_body(r#"{"ok":true}"#)
        .create_async()
        .await;

    let client = TelegramClient::new(server.url()).with_parse_mode(Some("HTML".to_string()));
    client.send_message("<b>up</b>", &credentials()).await.unwrap();

    mock.assert_async().await;
}

#[tokio::test]
async fn test_send_part_omits_parse_mode() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/bot123456:test-token/sendMessage")
        .match_body(Matcher::Json(json!({
            "chat_id": "-1001234567890",
            "text": "Part 1/2:\n\n<b>unclosed",
        })))
        .with_status(200)
        .with_body(r#"{"ok":true}"#)
        .expect(1)
        .create_async()
        .await;

    let client = TelegramClient::new(server.url()).with_parse_mode(Some("HTML".to_string()));
    client
        .send_part("Part 1/2:\n\n<b>unclosed", &credentials())
        .await
        .unwrap();

    mock.assert_async().await;
}

#[tokio::test]
async fn test_api_rejection_surfaces_description() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", "/bot123456:test-token/sendMessage")
        .with_status(400)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "ok": false,
                "error_code": 400,
                "description": "Bad Request: chat not found"
            })
            .to_string(),
        )
        .create_async()
        .await;

    let client = TelegramClient::new(server.url());
    let err = client.send_message("hi", &credentials()).await.unwrap_err();

    match err {
        TransportError::Api(description) => {
            assert_eq!(description, "Bad Request: chat not found");
        }
        other => panic!("Expected Api error, got: {other:?}"),
    }
}

#[tokio::test]
async fn test_non_json_error_reports_status() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", "/bot123456:test-token/sendMessage")
        .with_status(502)
        .with_body("<html>Bad Gateway</html>")
        .create_async()
        .await;

    let client = TelegramClient::new(server.url());
    let err = client.send_message("hi", &credentials()).await.unwrap_err();

    assert!(matches!(err, TransportError::Api(ref msg) if msg == "HTTP 502"));
}

#[tokio::test]
async fn test_malformed_success_body_is_invalid_response() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", "/bot123456:test-token/sendMessage")
        .with_status(200)
        .with_body("not json")
        .create_async()
        .await;

    let client = TelegramClient::new(server.url());
    let err = client.send_message("hi", &credentials()).await.unwrap_err();

    assert!(matches!(err, TransportError::InvalidResponse(_)));
}

#[tokio::test]
async fn test_network_error_does_not_leak_token() {
    // Nothing listens on port 1.
    let client = TelegramClient::new("http://127.0.0.1:1");
    let err = client.send_message("hi", &credentials()).await.unwrap_err();

    assert!(matches!(err, TransportError::Http(_)));
    assert!(!err.to_string().contains(TOKEN));
}
