// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::application::use_cases::summarize_use_case::SummarizeUseCase;
use crate::presentation::handlers::{form_handler, summarize_handler};
use axum::{
    routing::{get, post},
    Extension, Router,
};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// 创建摘要 API 路由
///
/// 允许任意来源、方法和请求头的跨域访问
///
/// # 返回值
///
/// 返回配置好的路由
pub fn api_routes(use_case: Arc<SummarizeUseCase>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health_check))
        .route("/v1/version", get(version))
        .route("/summarize", post(summarize_handler::summarize))
        .layer(Extension(use_case))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

/// 创建交互式表单路由
pub fn form_routes(use_case: Arc<SummarizeUseCase>) -> Router {
    Router::new()
        .route(
            "/",
            get(form_handler::show_form).post(form_handler::submit_form),
        )
        .route("/health", get(health_check))
        .layer(Extension(use_case))
        .layer(TraceLayer::new_for_http())
}

/// 健康检查端点
///
/// # 返回值
///
/// 返回"OK"字符串
pub async fn health_check() -> &'static str {
    "OK"
}

/// 版本信息端点
///
/// # 返回值
///
/// 返回应用版本号
pub async fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
