// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域服务模块
///
/// - 摘要服务（summarizer）：外部预训练摘要模型的抽象，
///   具体实现位于基础设施层
pub mod summarizer;
