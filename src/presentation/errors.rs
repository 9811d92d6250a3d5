// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use tracing::warn;

use crate::domain::services::summarizer::SummarizerError;

/// 应用错误类型
///
/// 封装 HTTP 层可能出现的错误，统一转换为 `{"error": "..."}` 响应。
///
/// 校验失败在 `into_response` 中以 warn 级别记录；模型调用失败已由
/// `SummarizeUseCase::execute` 以 error 级别记录，这里不再重复。
#[derive(Error, Debug)]
pub enum AppError {
    /// 请求体格式或字段校验失败，在调用模型之前拒绝
    #[error("{0}")]
    Validation(String),

    /// 外部摘要模型调用失败
    #[error(transparent)]
    Summarizer(#[from] SummarizerError),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::Summarizer(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        if let AppError::Validation(message) = &self {
            warn!("Rejected request: {}", message);
        }

        let body = Json(json!({ "error": self.to_string() }));
        (status, body).into_response()
    }
}
