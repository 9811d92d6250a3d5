// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 应用程序模块
///
/// 包含请求DTO与摘要用例
pub mod application;

/// 配置模块
///
/// 处理应用程序的配置设置和环境变量
pub mod config;

/// 领域模块
///
/// 包含摘要请求实体和摘要模型接口
pub mod domain;

/// 基础设施模块
///
/// 提供外部摘要模型和指标导出的具体实现
pub mod infrastructure;

/// 表示层模块
///
/// 处理HTTP请求和响应，包括路由、处理器、提取器和页面渲染
pub mod presentation;

/// 工具模块
///
/// 提供日志初始化和文本辅助函数
pub mod utils;
