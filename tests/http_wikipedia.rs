// HTTP tests for the Wikipedia client against a local canned server.
//
// Each test binds a listener on 127.0.0.1, answers the first request with a
// fixed response (or never answers), and checks how the client maps it.

use std::time::Duration;

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};

use trustguard::error::FetchError;
use trustguard::reference::fetcher;
use trustguard::reference::rate_limiter::RateLimiter;
use trustguard::reference::traits::ReferenceSource;
use trustguard::reference::wikipedia::WikipediaClient;

/// Read one request head off the socket.
async fn read_request(stream: &mut TcpStream) {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 1024];
    while !buf.windows(4).any(|w| w == b"\r\n\r\n") {
        match stream.read(&mut chunk).await {
            Ok(0) | Err(_) => return,
            Ok(n) => buf.extend_from_slice(&chunk[..n]),
        }
    }
}

/// Serve `response` verbatim to the first connection. Returns the API URL.
async fn canned_server(response: String) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        let (mut stream, _) = listener.accept().await.unwrap();
        read_request(&mut stream).await;
        stream.write_all(response.as_bytes()).await.unwrap();
        stream.shutdown().await.ok();
    });
    format!("http://{addr}/w/api.php")
}

/// Accept the first connection and never answer it.
async fn silent_server() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        let (mut stream, _) = listener.accept().await.unwrap();
        read_request(&mut stream).await;
        tokio::time::sleep(Duration::from_secs(5)).await;
        drop(stream);
    });
    format!("http://{addr}/w/api.php")
}

fn http_response(status_line: &str, body: &str) -> String {
    format!(
        "HTTP/1.1 {status_line}\r\nContent-Type: text/plain\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
        body.len()
    )
}

fn client(api_url: &str, timeout: Duration) -> WikipediaClient {
    WikipediaClient::new(api_url, "trustguard-test", timeout, RateLimiter::unlimited()).unwrap()
}

#[tokio::test]
async fn non_success_status_maps_to_status_error() {
    let url = canned_server(http_response("503 Service Unavailable", "unavailable")).await;
    let client = client(&url, Duration::from_secs(5));

    let err = client.search("Eiffel Tower").await.unwrap_err();
    match err {
        FetchError::Status { status, body } => {
            assert_eq!(status, 503);
            assert_eq!(body, "unavailable");
        }
        other => panic!("expected status error, got {other:?}"),
    }
}

#[tokio::test]
async fn non_json_body_maps_to_decode_error() {
    let url = canned_server(http_response("200 OK", "not json")).await;
    let client = client(&url, Duration::from_secs(5));

    let err = client.summary("Eiffel Tower", 2).await.unwrap_err();
    assert!(matches!(err, FetchError::Decode(_)), "got {err:?}");
}

#[tokio::test]
async fn search_hits_come_back_over_http() {
    let body = r#"{"batchcomplete":true,"query":{"search":[{"ns":0,"title":"Eiffel Tower"}]}}"#;
    let url = canned_server(http_response("200 OK", body)).await;
    let client = client(&url, Duration::from_secs(5));

    let titles = client.search("Eiffel Tower").await.unwrap();
    assert_eq!(titles, vec!["Eiffel Tower".to_string()]);
}

#[tokio::test]
async fn timeout_becomes_error_reference() {
    let url = silent_server().await;
    let client = client(&url, Duration::from_millis(100));

    let reference = fetcher::fetch(&client, "The Eiffel Tower is in Paris.", 2).await;
    assert_eq!(reference.title, "Error");
    assert!(
        reference.snippet.contains("Wikipedia fetch failed"),
        "got {:?}",
        reference.snippet
    );
}
