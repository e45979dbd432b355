// Lookup client tests.

use super::*;
use crate::config::{API_ERROR_FALLBACK, PLACEHOLDER_API_KEY};
use httptest::{matchers::*, responders::*, Expectation, Server};
use serde_json::json;
use std::time::Duration;

const API_PATH: &str = "/v1/dnslookup";
const TEST_KEY: &str = "test-key";

fn test_client(server: &Server, api_key: Option<&str>) -> DnsLookupClient {
    DnsLookupClient::new(ApiConfig {
        api_key: api_key.map(str::to_string),
        endpoint: server.url(API_PATH).to_string(),
        timeout: Duration::from_secs(5),
    })
    .expect("Failed to create lookup client")
}

fn ok_body() -> serde_json::Value {
    json!({
        "status": "ok",
        "error": null,
        "data": {
            "domain": "example.com",
            "records": {
                "A": ["93.184.216.34"],
                "AAAA": [],
                "MX": [
                    {"exchange": "mail2.example.com", "priority": 20},
                    {"exchange": "mail1.example.com", "priority": 10}
                ],
                "TXT": ["v=spf1 -all"],
                "CNAME": [],
                "NS": ["a.iana-servers.net", "b.iana-servers.net"]
            }
        }
    })
}

#[test]
fn test_build_request_url_encodes_domain() {
    let url = build_request_url("https://api.apiverve.com/v1/dnslookup", "exa mple.com").unwrap();
    assert_eq!(
        url.as_str(),
        "https://api.apiverve.com/v1/dnslookup?domain=exa+mple.com"
    );
}

#[test]
fn test_build_request_url_rejects_relative_endpoint() {
    assert!(build_request_url("not a url", "example.com").is_err());
}

#[tokio::test]
async fn test_lookup_success_sends_key_and_normalized_domain() {
    let server = Server::run();
    server.expect(
        Expectation::matching(all_of![
            request::method_path("GET", API_PATH),
            request::query(url_decoded(contains(("domain", "example.com")))),
            request::headers(contains(("x-api-key", TEST_KEY))),
        ])
        .respond_with(json_encoded(ok_body())),
    );

    let client = test_client(&server, Some(TEST_KEY));
    let records = client
        .lookup("  HTTPS://Example.com/some/path ")
        .await
        .expect("lookup should succeed");

    assert_eq!(records.a, vec!["93.184.216.34"]);
    assert!(records.aaaa.is_empty());
    assert_eq!(records.mx.len(), 2);
    // API order is kept, not sorted by priority
    assert_eq!(records.mx[0].exchange, "mail2.example.com");
    assert_eq!(records.mx[0].priority, 20);
    assert_eq!(records.ns.len(), 2);
}

#[tokio::test]
async fn test_lookup_without_key_makes_no_request() {
    // No expectations: any request reaching the server fails verification
    let mut server = Server::run();
    let client = test_client(&server, None);

    for _ in 0..3 {
        let result = client.lookup("example.com").await;
        assert!(matches!(result, Err(LookupError::Configuration)));
    }
    server.verify_and_clear();
}

#[tokio::test]
async fn test_lookup_with_placeholder_or_blank_key_makes_no_request() {
    let mut server = Server::run();
    for key in [PLACEHOLDER_API_KEY, "", "   "] {
        let client = test_client(&server, Some(key));
        let result = client.lookup("example.com").await;
        assert!(
            matches!(result, Err(LookupError::Configuration)),
            "key {:?} should be rejected",
            key
        );
    }
    server.verify_and_clear();
}

#[tokio::test]
async fn test_lookup_api_error_message() {
    let server = Server::run();
    server.expect(
        Expectation::matching(request::method_path("GET", API_PATH)).respond_with(
            status_code(401)
                .insert_header("Content-Type", "application/json")
                .body(r#"{"status":"error","error":"Invalid API key","data":null}"#),
        ),
    );

    let client = test_client(&server, Some(TEST_KEY));
    match client.lookup("example.com").await {
        Err(LookupError::Api(msg)) => assert_eq!(msg, "Invalid API key"),
        other => panic!("expected Api error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_lookup_api_error_without_message_uses_fallback() {
    let server = Server::run();
    server.expect(
        Expectation::matching(request::method_path("GET", API_PATH))
            .respond_with(json_encoded(json!({"status": "error", "error": ""}))),
    );

    let client = test_client(&server, Some(TEST_KEY));
    match client.lookup("example.com").await {
        Err(LookupError::Api(msg)) => {
            assert_eq!(msg, API_ERROR_FALLBACK);
            assert!(!msg.is_empty());
        }
        other => panic!("expected Api error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_lookup_non_json_body_is_decode_error() {
    let server = Server::run();
    server.expect(
        Expectation::matching(request::method_path("GET", API_PATH))
            .respond_with(status_code(502).body("<html>Bad Gateway</html>")),
    );

    let client = test_client(&server, Some(TEST_KEY));
    let result = client.lookup("example.com").await;
    assert!(matches!(result, Err(LookupError::Decode(_))));
}

#[tokio::test]
async fn test_lookup_array_body_is_decode_error() {
    let server = Server::run();
    server.expect(
        Expectation::matching(request::method_path("GET", API_PATH))
            .times(2)
            .respond_with(json_encoded(json!(["ok"]))),
    );

    let client = test_client(&server, Some(TEST_KEY));
    for _ in 0..2 {
        let result = client.lookup("example.com").await;
        assert!(
            matches!(result, Err(LookupError::Decode(_))),
            "expected Decode error, got {:?}",
            result
        );
    }
}

#[tokio::test]
async fn test_lookup_truncated_body_is_response_read_error() {
    use tokio::io::{AsyncReadExt, AsyncWriteExt};

    // httptest always sends complete bodies, so a bare listener cuts this one short
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let server = tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let mut request = Vec::new();
        let mut buf = [0u8; 1024];
        while !request.windows(4).any(|w| w == b"\r\n\r\n") {
            let n = socket.read(&mut buf).await.unwrap();
            if n == 0 {
                break;
            }
            request.extend_from_slice(&buf[..n]);
        }
        socket
            .write_all(
                b"HTTP/1.1 200 OK\r\nContent-Type: application/json\r\nContent-Length: 500\r\n\r\n{\"status\":\"ok\"",
            )
            .await
            .unwrap();
        socket.flush().await.unwrap();
        socket.shutdown().await.unwrap();
    });

    let client = DnsLookupClient::new(ApiConfig {
        api_key: Some(TEST_KEY.to_string()),
        endpoint: format!("http://{addr}{API_PATH}"),
        timeout: Duration::from_secs(5),
    })
    .unwrap();

    let result = client.lookup("example.com").await;
    assert!(
        matches!(result, Err(LookupError::ResponseRead(_))),
        "expected ResponseRead error, got {:?}",
        result
    );
    assert_eq!(result.unwrap_err().as_str(), "response_read");
    server.await.unwrap();
}

#[tokio::test]
async fn test_lookup_ok_status_without_records_is_empty() {
    let server = Server::run();
    server.expect(
        Expectation::matching(request::method_path("GET", API_PATH)).respond_with(json_encoded(
            json!({"status": "ok", "data": {"domain": "empty.example", "records": {}}, "extra": 1}),
        )),
    );

    let client = test_client(&server, Some(TEST_KEY));
    let records = client.lookup("empty.example").await.unwrap();
    assert!(records.is_empty());
}

#[tokio::test]
async fn test_lookup_connection_refused_is_transport_error() {
    let client = DnsLookupClient::new(ApiConfig {
        api_key: Some(TEST_KEY.to_string()),
        // Port 1 (tcpmux) is essentially never listening
        endpoint: "http://127.0.0.1:1/v1/dnslookup".to_string(),
        timeout: Duration::from_secs(5),
    })
    .unwrap();

    match client.lookup("example.com").await {
        Err(LookupError::Transport { context, .. }) => assert_eq!(context, "API request failed"),
        other => panic!("expected Transport error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_lookup_invalid_endpoint_is_transport_error() {
    let client = DnsLookupClient::new(ApiConfig {
        api_key: Some(TEST_KEY.to_string()),
        endpoint: "::not a url::".to_string(),
        ..Default::default()
    })
    .unwrap();

    match client.lookup("example.com").await {
        Err(LookupError::Transport { context, .. }) => {
            assert_eq!(context, "Failed to create request")
        }
        other => panic!("expected Transport error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_lookup_through_trait_object_matches_inherent_call() {
    let server = Server::run();
    server.expect(
        Expectation::matching(request::method_path("GET", API_PATH))
            .times(2)
            .respond_with(json_encoded(ok_body())),
    );

    let client = test_client(&server, Some(TEST_KEY));
    let direct = client.lookup("example.com").await.unwrap();
    let via_trait = RecordLookup::lookup(&client, "example.com").await.unwrap();
    assert_eq!(direct, via_trait);
}
