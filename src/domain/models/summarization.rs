// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};

/// 默认摘要最大长度
pub const DEFAULT_MAX_LENGTH: u32 = 100;
/// 默认摘要最小长度
pub const DEFAULT_MIN_LENGTH: u32 = 30;

/// 摘要请求实体
///
/// 由调用方输入构造，交给摘要模型消费一次后即丢弃。
/// 请求之间相互独立，不做持久化或缓存。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummarizationRequest {
    /// 待摘要的原始文本
    pub text: String,
    /// 生成摘要的长度上限
    pub max_length: u32,
    /// 生成摘要的长度下限
    pub min_length: u32,
    /// 是否采样解码，两个前端都固定为 false
    pub do_sample: bool,
}

impl SummarizationRequest {
    /// 使用默认长度边界创建请求
    pub fn new(text: impl Into<String>) -> Self {
        Self::with_bounds(text, DEFAULT_MAX_LENGTH, DEFAULT_MIN_LENGTH)
    }

    /// 使用指定长度边界创建请求
    pub fn with_bounds(text: impl Into<String>, max_length: u32, min_length: u32) -> Self {
        Self {
            text: text.into(),
            max_length,
            min_length,
            do_sample: false,
        }
    }
}

/// 摘要候选结果
///
/// 模型一次生成的输出，`summary_text` 即最终返回给调用方的内容
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryCandidate {
    pub summary_text: String,
}
