// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域层模块
///
/// 该模块包含系统的核心概念，包括：
/// - 领域模型（models）：摘要请求与候选结果
/// - 服务（services）：外部摘要能力的抽象接口
///
/// 领域层不依赖于任何外部实现，模型推理细节由基础设施层提供。
pub mod models;
pub mod services;
