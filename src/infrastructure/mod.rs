// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 基础设施层模块
///
/// 负责与外部系统的交互，包含的子模块：
/// - 指标（metrics）：Prometheus 导出器与摘要请求指标
/// - 摘要模型（summarizer）：领域层 `Summarizer` 接口的具体实现
pub mod metrics;
pub mod summarizer;
