// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, info};

use crate::config::settings::SummarizerSettings;
use crate::domain::models::summarization::{SummarizationRequest, SummaryCandidate};
use crate::domain::services::summarizer::{Summarizer, SummarizerError};

#[derive(Debug, Serialize)]
struct InferenceRequest<'a> {
    inputs: &'a str,
    parameters: InferenceParameters,
}

#[derive(Debug, Serialize)]
struct InferenceParameters {
    max_length: u32,
    min_length: u32,
    do_sample: bool,
}

/// Hugging Face 推理服务摘要实现
///
/// # 功能
///
/// 通过推理服务的 `summarization` 任务调用预训练模型（默认 `facebook/bart-large-cnn`）。
/// 实例在进程启动时构建一次，内部的 HTTP 连接池被所有请求共享。
///
/// # 配置
///
/// - `summarizer.model` - 模型名称
/// - `summarizer.api_base_url` - 推理服务基础URL
/// - `summarizer.api_key` - 可选的访问令牌
pub struct HuggingFaceSummarizer {
    client: reqwest::Client,
    endpoint: String,
}

impl HuggingFaceSummarizer {
    /// 根据配置构建摘要模型句柄
    ///
    /// # 错误
    /// * 访问令牌包含非法字符时返回错误
    /// * HTTP 客户端构建失败时返回错误
    pub fn new(settings: &SummarizerSettings) -> Result<Self, SummarizerError> {
        let mut headers = HeaderMap::new();
        if let Some(api_key) = settings.api_key.as_deref().filter(|k| !k.is_empty()) {
            let mut value = HeaderValue::from_str(&format!("Bearer {}", api_key))
                .map_err(|e| SummarizerError::Transport(format!("invalid api key: {}", e)))?;
            value.set_sensitive(true);
            headers.insert(AUTHORIZATION, value);
        }

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .map_err(|e| SummarizerError::Transport(e.to_string()))?;

        let endpoint = format!(
            "{}/{}",
            settings.api_base_url.trim_end_matches('/'),
            settings.model.trim_start_matches('/')
        );
        info!("Summarization model endpoint: {}", endpoint);

        Ok(Self { client, endpoint })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl Summarizer for HuggingFaceSummarizer {
    async fn summarize(
        &self,
        request: &SummarizationRequest,
    ) -> Result<Vec<SummaryCandidate>, SummarizerError> {
        let body = InferenceRequest {
            inputs: &request.text,
            parameters: InferenceParameters {
                max_length: request.max_length,
                min_length: request.min_length,
                do_sample: request.do_sample,
            },
        };

        let response = self
            .client
            .post(&self.endpoint)
            .json(&body)
            .send()
            .await
            .map_err(|e| SummarizerError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(SummarizerError::Upstream {
                status: status.as_u16(),
                message: upstream_message(&error_text),
            });
        }

        let candidates: Vec<SummaryCandidate> = response
            .json()
            .await
            .map_err(|e| SummarizerError::InvalidResponse(e.to_string()))?;
        debug!(candidates = candidates.len(), "Summarizer responded");

        Ok(candidates)
    }
}

/// 优先取上游 `{"error": "..."}` 中的信息，否则原样返回响应体
fn upstream_message(body: &str) -> String {
    serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|v| v.get("error").and_then(Value::as_str).map(str::to_string))
        .unwrap_or_else(|| body.trim().to_string())
}
