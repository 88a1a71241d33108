//! Integration tests for the survey pipeline.
//!
//! These tests verify the library API using a mock HTTP server; they make no
//! real network requests. Failure targets use a connection-refused port or a
//! socket that accepts and then never responds (to force the fetch timeout).

use std::path::Path;
use std::time::Duration;

use httptest::{matchers::*, responders::*, Expectation, Server};
use tempfile::TempDir;

use site_survey::{run_survey, Config};

const PAGE: &str = r#"<html><head>
    <title>Test Title</title>
    <meta name="description" content="Test Description">
    </head><body>
    <p>one</p><p>two</p><p>three</p>
    <a href="https://secure.example.com">secure</a>
    <a href="http://plain.example.com">plain</a>
    </body></html>"#;

fn test_config(targets: Vec<String>, output: &Path) -> Config {
    Config {
        targets,
        output: output.to_path_buf(),
        fetch_timeout: Duration::from_millis(500),
        put_timeout: Duration::from_secs(2),
        user_agent: "site_survey-test/1.0".to_string(),
        ..Default::default()
    }
}

fn read_rows(path: &Path) -> Vec<Vec<String>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .from_path(path)
        .unwrap();
    reader
        .records()
        .map(|r| r.unwrap().iter().map(str::to_string).collect())
        .collect()
}

/// A local socket that accepts connections but never answers, so the
/// client-side fetch timeout is what fails the request.
async fn silent_server() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        loop {
            let Ok((socket, _)) = listener.accept().await else {
                break;
            };
            // Hold the connection open without responding.
            tokio::spawn(async move {
                let _socket = socket;
                tokio::time::sleep(Duration::from_secs(30)).await;
            });
        }
    });
    format!("http://{}/", addr)
}

#[tokio::test]
async fn test_end_to_end_success_and_timeout() {
    let server = Server::run();
    server.expect(
        Expectation::matching(request::method_path("GET", "/"))
            .respond_with(status_code(200).body(PAGE)),
    );
    let good = format!("http://{}/", server.addr());
    let slow = silent_server().await;

    let dir = TempDir::new().unwrap();
    let output = dir.path().join("website_info.csv");
    let config = test_config(vec![good.clone(), slow.clone()], &output);

    let report = run_survey(config).await.expect("run should succeed");
    assert_eq!(report.total_targets, 2);
    assert_eq!(report.successful, 1);
    assert_eq!(report.failed, 1);
    assert_eq!(report.lost_records, 0);

    let rows = read_rows(&output);
    assert_eq!(rows.len(), 3); // header + 2 data rows

    let success_row = rows[1..].iter().find(|r| r[0] == good).unwrap();
    assert_eq!(success_row[1], "Test Title");
    assert_eq!(success_row[2], "Test Description");
    assert_eq!(success_row[3], "3");
    assert_eq!(success_row[4], "1");
    assert_eq!(success_row[5], "https://secure.example.com");
    assert_eq!(success_row[6], "");

    let failure_row = rows[1..].iter().find(|r| r[0] == slow).unwrap();
    for field in &failure_row[1..6] {
        assert!(field.is_empty(), "metadata field should be empty: {field:?}");
    }
    assert!(!failure_row[6].is_empty(), "Error field should be populated");
}

#[tokio::test]
async fn test_row_count_matches_targets_regardless_of_completion_order() {
    let server = Server::run();
    for path in ["/a", "/b", "/c"] {
        server.expect(
            Expectation::matching(request::method_path("GET", path))
                .respond_with(status_code(200).body(PAGE)),
        );
    }

    // Mix of fast successes and immediate connection failures so completion
    // order differs from dispatch order.
    let targets: Vec<String> = vec![
        format!("http://{}/a", server.addr()),
        "http://127.0.0.1:1/".to_string(),
        format!("http://{}/b", server.addr()),
        "http://127.0.0.1:1/again".to_string(),
        format!("http://{}/c", server.addr()),
        "http://127.0.0.1:1/more".to_string(),
    ];

    let dir = TempDir::new().unwrap();
    let output = dir.path().join("out.csv");
    let report = run_survey(test_config(targets.clone(), &output))
        .await
        .unwrap();

    assert_eq!(report.total_targets, 6);
    assert_eq!(report.successful, 3);
    assert_eq!(report.failed, 3);

    let rows = read_rows(&output);
    assert_eq!(rows.len(), targets.len() + 1);

    // Every dispatched target appears exactly once, whatever the drain order.
    let mut urls: Vec<String> = rows[1..].iter().map(|r| r[0].clone()).collect();
    let mut expected = targets;
    urls.sort();
    expected.sort();
    assert_eq!(urls, expected);
}

#[tokio::test]
async fn test_non_2xx_status_produces_failure_row() {
    let server = Server::run();
    server.expect(
        Expectation::matching(request::method_path("GET", "/missing"))
            .respond_with(status_code(404)),
    );
    let url = format!("http://{}/missing", server.addr());

    let dir = TempDir::new().unwrap();
    let output = dir.path().join("out.csv");
    let report = run_survey(test_config(vec![url], &output)).await.unwrap();
    assert_eq!(report.successful, 0);
    assert_eq!(report.failed, 1);

    let rows = read_rows(&output);
    assert!(rows[1][6].contains("404"));
}

#[tokio::test]
async fn test_undersized_channel_loses_records_but_run_still_completes() {
    let server = Server::run();
    server.expect(
        Expectation::matching(request::method_path("GET", "/"))
            .times(3)
            .respond_with(status_code(200).body(PAGE)),
    );
    let url = format!("http://{}/", server.addr());

    let dir = TempDir::new().unwrap();
    let output = dir.path().join("out.csv");
    let mut config = test_config(vec![url.clone(), url.clone(), url], &output);
    // One slot and a short put bound: only one record fits before the
    // collector starts draining after join-all.
    config.channel_capacity = Some(1);
    config.put_timeout = Duration::from_millis(100);

    let report = run_survey(config).await.expect("lost records are logged, not fatal");
    assert_eq!(report.total_targets, 3);
    assert_eq!(report.lost_records, 2);

    let rows = read_rows(&output);
    assert_eq!(rows.len(), 2); // header + the one delivered record
}

#[tokio::test]
async fn test_fail_on_lost_record_fails_the_run() {
    let server = Server::run();
    server.expect(
        Expectation::matching(request::method_path("GET", "/"))
            .times(3)
            .respond_with(status_code(200).body(PAGE)),
    );
    let url = format!("http://{}/", server.addr());

    let dir = TempDir::new().unwrap();
    let output = dir.path().join("out.csv");
    let mut config = test_config(vec![url.clone(), url.clone(), url], &output);
    config.channel_capacity = Some(1);
    config.put_timeout = Duration::from_millis(100);
    config.fail_on_lost_record = true;

    let err = run_survey(config).await.expect_err("lost records should fail the run");
    assert!(err.to_string().contains("lost"));

    // The CSV for the delivered records is still written before the failure.
    assert!(output.exists());
}

#[tokio::test]
async fn test_unwritable_output_path_is_an_error_not_a_panic() {
    let server = Server::run();
    server.expect(
        Expectation::matching(request::method_path("GET", "/"))
            .respond_with(status_code(200).body(PAGE)),
    );
    let url = format!("http://{}/", server.addr());

    let config = test_config(vec![url], Path::new("/nonexistent-dir/out.csv"));
    let result = run_survey(config).await;
    assert!(result.is_err());
}
