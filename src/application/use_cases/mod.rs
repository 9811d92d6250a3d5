// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 用例模块
///
/// 两个前端共享同一个摘要用例
pub mod summarize_use_case;
