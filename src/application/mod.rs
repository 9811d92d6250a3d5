// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 应用程序模块
///
/// 包含请求DTO和摘要用例，负责把前端输入转交给领域层的摘要能力
pub mod dto;
pub mod use_cases;
