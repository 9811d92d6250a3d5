// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::domain::models::summarization::{
    SummarizationRequest, DEFAULT_MAX_LENGTH, DEFAULT_MIN_LENGTH,
};

/// 摘要请求DTO
///
/// `POST /summarize` 的请求体，缺省字段使用默认长度边界
#[derive(Debug, Clone, Deserialize, Serialize, Validate)]
#[validate(schema(function = "validate_bounds"))]
pub struct SummarizeRequestDto {
    /// 待摘要文本（必填）
    #[validate(custom(function = "validate_not_blank"))]
    pub text: String,

    /// 摘要长度上限，默认 100
    #[serde(default = "default_max_length")]
    #[validate(range(min = 1))]
    pub max_length: u32,

    /// 摘要长度下限，默认 30
    #[serde(default = "default_min_length")]
    #[validate(range(min = 1))]
    pub min_length: u32,
}

/// 摘要响应DTO
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SummarizeResponseDto {
    pub summary: String,
}

impl From<SummarizeRequestDto> for SummarizationRequest {
    fn from(dto: SummarizeRequestDto) -> Self {
        SummarizationRequest::with_bounds(dto.text, dto.max_length, dto.min_length)
    }
}

fn default_max_length() -> u32 {
    DEFAULT_MAX_LENGTH
}

fn default_min_length() -> u32 {
    DEFAULT_MIN_LENGTH
}

fn validate_not_blank(text: &str) -> Result<(), ValidationError> {
    if text.trim().is_empty() {
        let mut err = ValidationError::new("blank");
        err.message = Some("text cannot be empty".into());
        return Err(err);
    }
    Ok(())
}

fn validate_bounds(dto: &SummarizeRequestDto) -> Result<(), ValidationError> {
    if dto.min_length > dto.max_length {
        let mut err = ValidationError::new("bounds");
        err.message = Some("min_length must not exceed max_length".into());
        return Err(err);
    }
    Ok(())
}
