// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::{extract::Extension, Json};
use std::sync::Arc;

use crate::application::dto::summarize_request::{SummarizeRequestDto, SummarizeResponseDto};
use crate::application::use_cases::summarize_use_case::SummarizeUseCase;
use crate::presentation::errors::AppError;
use crate::presentation::extractors::validated_json::ValidatedJson;

/// 摘要接口
///
/// `POST /summarize`，返回 `{"summary": "..."}`。
/// 请求体校验失败时返回 422，模型调用失败时返回 500。
pub async fn summarize(
    Extension(use_case): Extension<Arc<SummarizeUseCase>>,
    ValidatedJson(payload): ValidatedJson<SummarizeRequestDto>,
) -> Result<Json<SummarizeResponseDto>, AppError> {
    let summary = use_case.execute(payload.into()).await?;
    Ok(Json(SummarizeResponseDto { summary }))
}
