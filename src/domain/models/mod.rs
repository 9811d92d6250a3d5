// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域模型模块
///
/// 定义摘要请求（SummarizationRequest）和候选摘要（SummaryCandidate）。
/// 所有实体都只存在于单次请求内。
pub mod summarization;
