// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 请求处理器模块
///
/// - summarize_handler：JSON 摘要接口
/// - form_handler：交互式表单页面
pub mod form_handler;
pub mod summarize_handler;
