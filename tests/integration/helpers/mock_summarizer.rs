// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use async_trait::async_trait;
use digestr::application::use_cases::summarize_use_case::SummarizeUseCase;
use digestr::domain::models::summarization::{SummarizationRequest, SummaryCandidate};
use digestr::domain::services::summarizer::{Summarizer, SummarizerError};
use std::sync::{Arc, Mutex};

/// 记录调用参数并返回固定结果的摘要模型
pub struct MockSummarizer {
    calls: Mutex<Vec<SummarizationRequest>>,
    summary: Option<String>,
}

impl MockSummarizer {
    pub fn returning(summary: &str) -> Arc<Self> {
        Arc::new(Self {
            calls: Mutex::new(Vec::new()),
            summary: Some(summary.to_string()),
        })
    }

    pub fn failing() -> Arc<Self> {
        Arc::new(Self {
            calls: Mutex::new(Vec::new()),
            summary: None,
        })
    }

    pub fn calls(&self) -> Vec<SummarizationRequest> {
        self.calls.lock().unwrap().clone()
    }

    pub fn use_case(self: &Arc<Self>, frontend: &'static str) -> Arc<SummarizeUseCase> {
        Arc::new(SummarizeUseCase::new(self.clone(), frontend))
    }
}

#[async_trait]
impl Summarizer for MockSummarizer {
    async fn summarize(
        &self,
        request: &SummarizationRequest,
    ) -> Result<Vec<SummaryCandidate>, SummarizerError> {
        self.calls.lock().unwrap().push(request.clone());
        match &self.summary {
            Some(summary) => Ok(vec![SummaryCandidate {
                summary_text: summary.clone(),
            }]),
            None => Err(SummarizerError::Upstream {
                status: 400,
                message: "min_length is larger than max_length".to_string(),
            }),
        }
    }
}
