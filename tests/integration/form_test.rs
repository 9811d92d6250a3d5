// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::http::StatusCode;
use axum_test::TestServer;
use digestr::presentation::routes;
use serde::Serialize;

use super::helpers::mock_summarizer::MockSummarizer;

#[derive(Serialize)]
struct FormInput<'a> {
    text: &'a str,
}

fn server(mock: &std::sync::Arc<MockSummarizer>) -> TestServer {
    TestServer::new(routes::form_routes(mock.use_case("form"))).unwrap()
}

#[tokio::test]
async fn form_page_renders_input_and_button() {
    let mock = MockSummarizer::returning("unused");

    let response = server(&mock).get("/").await;

    response.assert_status_ok();
    let page = response.text();
    assert!(page.contains("<textarea"));
    assert!(page.contains("Enter your text here"));
    assert!(page.contains("Summarize</button>"));
    assert!(mock.calls().is_empty());
}

/// 空输入只显示警告，不调用模型
#[tokio::test]
async fn empty_submission_shows_warning() {
    let mock = MockSummarizer::returning("unused");

    let response = server(&mock).post("/").form(&FormInput { text: "" }).await;

    response.assert_status_ok();
    let page = response.text();
    assert!(page.contains("Please enter some text."));
    assert!(!page.contains("Summary:"));
    assert!(mock.calls().is_empty());
}

#[tokio::test]
async fn whitespace_submission_shows_warning() {
    let mock = MockSummarizer::returning("unused");

    let response = server(&mock)
        .post("/")
        .form(&FormInput { text: "  \n " })
        .await;

    assert!(response.text().contains("Please enter some text."));
    assert!(mock.calls().is_empty());
}

/// 非空输入显示模型输出，并使用固定长度边界
#[tokio::test]
async fn submission_renders_summary_with_fixed_bounds() {
    let mock = MockSummarizer::returning("A fox jumps over a dog.");

    let response = server(&mock)
        .post("/")
        .form(&FormInput {
            text: "The quick brown fox jumps over the lazy dog.",
        })
        .await;

    response.assert_status_ok();
    let page = response.text();
    assert!(page.contains("<h2>Summary:</h2><p>A fox jumps over a dog.</p>"));
    assert!(page.contains("Word Count: 9"));
    assert!(!page.contains("Please enter some text."));

    let calls = mock.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].max_length, 100);
    assert_eq!(calls[0].min_length, 30);
    assert!(!calls[0].do_sample);
}

#[tokio::test]
async fn summarizer_failure_renders_error_notice() {
    let mock = MockSummarizer::failing();

    let response = server(&mock)
        .post("/")
        .form(&FormInput { text: "short" })
        .await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    let page = response.text();
    assert!(page.contains(r#"class="error""#));
    assert!(!page.contains("Summary:"));
}
