//! `HttpTransport` against a mock server.

use ledgerkeep::transport::{HttpTransport, Transport, TransportError};
use ledgerkeep::HttpRequest;
use mockito::{Matcher, Server};
use serde_json::json;
use tokio_test::{assert_err, assert_ok};

#[tokio::test]
async fn get_sends_query_and_headers_and_returns_body() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/api/transactions")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("limit".into(), "10".into()),
            Matcher::UrlEncoded("account_id".into(), "hdfc".into()),
        ]))
        .match_header("authorization", "Basic YWxpY2U6czNjcmV0")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_header("X-Total-Count", "42")
        .with_body(r#"{"data":[]}"#)
        .create_async()
        .await;

    let transport = HttpTransport::new().unwrap();
    let request = HttpRequest::get(format!("{}/api/transactions", server.url()))
        .with_query("limit", "10")
        .with_query("account_id", "hdfc")
        .with_header("Authorization", "Basic YWxpY2U6czNjcmV0");

    let response = assert_ok!(transport.send(request).await);

    mock.assert_async().await;
    assert_eq!(response.status, 200);
    assert_eq!(response.header("x-total-count"), Some("42"));
    assert_eq!(response.body, r#"{"data":[]}"#);
}

#[tokio::test]
async fn json_body_is_sent_on_writes() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/api/accounts")
        .match_body(Matcher::Json(json!({"id": "cash", "name": "Cash"})))
        .with_status(201)
        .create_async()
        .await;

    let transport = HttpTransport::new().unwrap();
    let response = transport
        .send(
            HttpRequest::post(format!("{}/api/accounts", server.url()))
                .with_json(json!({"id": "cash", "name": "Cash"})),
        )
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(response.status, 201);
}

#[tokio::test]
async fn non_success_status_keeps_the_body() {
    let mut server = Server::new_async().await;
    let body = r#"{"error":{"custom_code":"ACCOUNT_IS_IN_USE"}}"#;
    server
        .mock("DELETE", "/api/accounts/hdfc")
        .with_status(409)
        .with_header("content-type", "application/json")
        .with_body(body)
        .create_async()
        .await;

    let transport = HttpTransport::new().unwrap();
    let err = assert_err!(
        transport
            .send(HttpRequest::delete(format!("{}/api/accounts/hdfc", server.url())))
            .await
    );

    match err {
        TransportError::Status { status, url, body: got } => {
            assert_eq!(status, 409);
            assert!(url.ends_with("/api/accounts/hdfc"));
            assert_eq!(got, body);
        }
        other => panic!("expected status error, got {other:?}"),
    }
}

#[tokio::test]
async fn unreachable_host_is_an_http_error() {
    let transport = HttpTransport::with_client(reqwest::Client::new());
    let err = assert_err!(
        transport
            .send(HttpRequest::get("http://127.0.0.1:1/api/accounts"))
            .await
    );
    assert!(matches!(err, TransportError::Http(_)));
}

#[tokio::test]
async fn repeated_response_headers_are_all_kept() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/api/accounts")
        .with_status(200)
        .with_header("set-cookie", "a=1")
        .with_header("set-cookie", "b=2")
        .with_body(r#"{"data":[]}"#)
        .create_async()
        .await;

    let transport = HttpTransport::new().unwrap();
    let response = assert_ok!(
        transport
            .send(HttpRequest::get(format!("{}/api/accounts", server.url())))
            .await
    );

    assert_eq!(response.header_values("set-cookie"), ["a=1", "b=2"]);
    assert_eq!(response.header("Set-Cookie"), Some("a=1"));
}
