// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::sync::Arc;

use digestr::application::use_cases::summarize_use_case::SummarizeUseCase;
use digestr::config::settings::Settings;
use digestr::domain::services::summarizer::Summarizer;
use digestr::infrastructure::metrics;
use digestr::infrastructure::summarizer::huggingface::HuggingFaceSummarizer;
use digestr::presentation::routes;
use digestr::utils::telemetry;
use tokio::net::TcpListener;
use tracing::info;

/// 主函数
///
/// 摘要 API 服务入口：加载配置、构建一次模型句柄并启动 HTTP 服务
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Initialize logging
    telemetry::init_telemetry();
    info!("Starting digestr API...");

    // 2. Load configuration
    let settings = Settings::new()?;
    info!("Configuration loaded");

    metrics::init_metrics(&settings.metrics);

    // 3. Load summarization model once, shared by every request
    let summarizer: Arc<dyn Summarizer> =
        Arc::new(HuggingFaceSummarizer::new(&settings.summarizer)?);
    let use_case = Arc::new(SummarizeUseCase::new(summarizer, "api"));
    info!("Summarizer initialized with model {}", settings.summarizer.model);

    // 4. Start HTTP server
    let app = routes::api_routes(use_case);

    let addr = settings.server.bind_address();
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
