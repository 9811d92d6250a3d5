// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::sync::Arc;
use std::time::Instant;

use tracing::{debug, error};

use crate::domain::models::summarization::SummarizationRequest;
use crate::domain::services::summarizer::{Summarizer, SummarizerError};
use crate::infrastructure::metrics;

/// 摘要用例
///
/// 持有进程级共享的摘要模型句柄，把单次请求转交给模型并取第一个候选结果
pub struct SummarizeUseCase {
    summarizer: Arc<dyn Summarizer>,
    frontend: &'static str,
}

impl SummarizeUseCase {
    /// 创建摘要用例
    ///
    /// # 参数
    ///
    /// * `summarizer` - 启动时构建好的摘要模型句柄
    /// * `frontend` - 调用方前端名称，用于指标标签
    pub fn new(summarizer: Arc<dyn Summarizer>, frontend: &'static str) -> Self {
        Self {
            summarizer,
            frontend,
        }
    }

    /// 生成摘要
    ///
    /// # 返回值
    ///
    /// * `Ok(String)` - 第一个候选摘要的文本
    /// * `Err(SummarizerError)` - 模型调用失败或没有返回候选结果
    pub async fn execute(&self, request: SummarizationRequest) -> Result<String, SummarizerError> {
        let started = Instant::now();
        metrics::record_request(self.frontend);
        debug!(
            frontend = self.frontend,
            chars = request.text.len(),
            max_length = request.max_length,
            min_length = request.min_length,
            "Summarizing text"
        );

        let result = self
            .summarizer
            .summarize(&request)
            .await
            .and_then(|candidates| {
                candidates
                    .into_iter()
                    .next()
                    .map(|candidate| candidate.summary_text)
                    .ok_or(SummarizerError::NoCandidates)
            });

        metrics::record_duration(self.frontend, started.elapsed());
        if let Err(e) = &result {
            metrics::record_failure(self.frontend);
            error!(frontend = self.frontend, error = %e, "Summarization failed");
        }

        result
    }
}
