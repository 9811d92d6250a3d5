// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::models::summarization::{SummarizationRequest, SummaryCandidate};

/// 摘要模型错误类型
#[derive(Error, Debug)]
pub enum SummarizerError {
    #[error("Summarizer request failed: {0}")]
    Transport(String),

    #[error("Summarizer returned error: {status} - {message}")]
    Upstream { status: u16, message: String },

    #[error("Invalid response format from summarizer: {0}")]
    InvalidResponse(String),

    #[error("Summarizer returned no candidates")]
    NoCandidates,
}

/// 外部摘要能力
///
/// 给定文本和长度边界，返回一个或多个候选摘要。
/// 实现必须可在多个请求间共享，进程启动时构建一次。
#[async_trait]
pub trait Summarizer: Send + Sync {
    async fn summarize(
        &self,
        request: &SummarizationRequest,
    ) -> Result<Vec<SummaryCandidate>, SummarizerError>;
}
