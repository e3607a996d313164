// SPDX-License-Identifier: MPL-2.0
//! Exercises `ApodClient` against a minimal local HTTP responder.

use apod_explorer::apod::{ApodClient, MediaType, RecentCount};
use apod_explorer::error::Error;
use std::io::{BufRead, BufReader, Write};
use std::net::TcpListener;
use std::sync::mpsc::{self, Receiver};
use std::thread;

/// Serves one canned response per connection, in order, and reports each
/// request line through the returned channel.
fn serve(responses: Vec<(u16, &'static str, String)>) -> (String, Receiver<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind local listener");
    let addr = listener.local_addr().expect("local addr");
    let (tx, rx) = mpsc::channel();

    thread::spawn(move || {
        for (status, reason, body) in responses {
            let Ok((stream, _)) = listener.accept() else {
                return;
            };
            let mut reader = BufReader::new(stream);
            let mut request_line = String::new();
            if reader.read_line(&mut request_line).is_err() {
                return;
            }
            // Drain headers
            let mut line = String::new();
            while reader.read_line(&mut line).is_ok() && line != "\r\n" && !line.is_empty() {
                line.clear();
            }
            let _ = tx.send(request_line.trim_end().to_string());

            let mut stream = reader.into_inner();
            let response = format!(
                "HTTP/1.1 {status} {reason}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            let _ = stream.write_all(response.as_bytes());
        }
    });

    (format!("http://{addr}"), rx)
}

fn record_json(date: &str, media_type: &str) -> String {
    format!(
        r#"{{"date":"{date}","title":"Picture {date}","explanation":"Text.","media_type":"{media_type}","url":"https://apod.example/{date}","service_version":"v1"}}"#
    )
}

#[tokio::test]
async fn today_parses_record() {
    let (base, requests) = serve(vec![(200, "OK", record_json("2026-10-18", "image"))]);
    let client = ApodClient::new(base).expect("client");

    let record = client.today().await.expect("today record");
    assert_eq!(record.title, "Picture 2026-10-18");
    assert_eq!(record.media_type, MediaType::Image);
    assert_eq!(
        requests.recv().expect("request seen"),
        "GET /api/apod/today HTTP/1.1"
    );
}

#[tokio::test]
async fn by_date_sends_iso_date() {
    let (base, requests) = serve(vec![(200, "OK", record_json("2000-01-05", "video"))]);
    let client = ApodClient::new(format!("{base}/")).expect("client");

    let record = client
        .by_date("2000-01-05".parse().expect("date"))
        .await
        .expect("dated record");
    assert!(record.is_video());
    assert_eq!(
        requests.recv().expect("request seen"),
        "GET /api/apod?date=2000-01-05 HTTP/1.1"
    );
}

#[tokio::test]
async fn recent_requests_count_and_keeps_order() {
    let body = format!(
        "[{},{},{}]",
        record_json("2026-10-18", "image"),
        record_json("2026-10-17", "video"),
        record_json("2026-10-16", "image")
    );
    let (base, requests) = serve(vec![(200, "OK", body)]);
    let client = ApodClient::new(base).expect("client");

    let records = client.recent(RecentCount::Five).await.expect("recent records");
    let dates: Vec<_> = records.iter().map(|r| r.date.to_string()).collect();
    assert_eq!(dates, vec!["2026-10-18", "2026-10-17", "2026-10-16"]);
    assert_eq!(
        requests.recv().expect("request seen"),
        "GET /api/apod/recent?count=5 HTTP/1.1"
    );
}

#[tokio::test]
async fn recent_normalizes_single_object() {
    let (base, _requests) = serve(vec![(200, "OK", record_json("2026-10-18", "image"))]);
    let client = ApodClient::new(base).expect("client");

    let records = client.recent(RecentCount::Ten).await.expect("recent records");
    assert_eq!(records.len(), 1);
}

#[tokio::test]
async fn non_success_status_reports_reason() {
    let (base, _requests) = serve(vec![(404, "Not Found", r#"{"error":"missing"}"#.to_string())]);
    let client = ApodClient::new(base).expect("client");

    let err = client.today().await.expect_err("404 must fail");
    assert_eq!(err.user_message(), "Failed to fetch: Not Found");
}

#[tokio::test]
async fn malformed_body_is_a_parse_error() {
    let (base, _requests) = serve(vec![(200, "OK", r#"{"date":"2026-10-18"}"#.to_string())]);
    let client = ApodClient::new(base).expect("client");

    let err = client.today().await.expect_err("incomplete record must fail");
    assert!(matches!(err, Error::Parse(_)));
}

#[tokio::test]
async fn unreachable_backend_is_a_network_error() {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let addr = listener.local_addr().expect("local addr");
    drop(listener);

    let client = ApodClient::new(format!("http://{addr}")).expect("client");
    let err = client.today().await.expect_err("nothing listens");
    assert!(matches!(err, Error::Network(_)));
}
