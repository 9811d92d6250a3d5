// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use digestr::config::settings::SummarizerSettings;
use digestr::domain::models::summarization::SummarizationRequest;
use digestr::domain::services::summarizer::{Summarizer, SummarizerError};
use digestr::infrastructure::summarizer::huggingface::HuggingFaceSummarizer;
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const MODEL: &str = "facebook/bart-large-cnn";

fn summarizer(server: &MockServer, api_key: Option<&str>) -> HuggingFaceSummarizer {
    HuggingFaceSummarizer::new(&SummarizerSettings {
        model: MODEL.to_string(),
        api_base_url: server.uri(),
        api_key: api_key.map(str::to_string),
    })
    .unwrap()
}

#[tokio::test]
async fn sends_inference_payload_and_parses_candidates() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/facebook/bart-large-cnn"))
        .and(header("authorization", "Bearer hf_test"))
        .and(body_json(json!({
            "inputs": "Some long article.",
            "parameters": { "max_length": 100, "min_length": 30, "do_sample": false }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "summary_text": "Short article." }
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let candidates = summarizer(&server, Some("hf_test"))
        .summarize(&SummarizationRequest::new("Some long article."))
        .await
        .unwrap();

    assert_eq!(candidates.len(), 1);
    assert_eq!(candidates[0].summary_text, "Short article.");
}

#[tokio::test]
async fn upstream_error_body_is_surfaced() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(503).set_body_json(json!({ "error": "Model is currently loading" })),
        )
        .mount(&server)
        .await;

    let err = summarizer(&server, None)
        .summarize(&SummarizationRequest::new("text"))
        .await
        .unwrap_err();

    match err {
        SummarizerError::Upstream { status, message } => {
            assert_eq!(status, 503);
            assert_eq!(message, "Model is currently loading");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn unexpected_body_is_invalid_response() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "generated_text": "x" })))
        .mount(&server)
        .await;

    let err = summarizer(&server, None)
        .summarize(&SummarizationRequest::new("text"))
        .await
        .unwrap_err();

    assert!(matches!(err, SummarizerError::InvalidResponse(_)));
}
