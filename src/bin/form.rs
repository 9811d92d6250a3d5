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

/// 交互式表单入口
///
/// 独立进程，自行构建模型句柄，不与 API 服务通信
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    telemetry::init_telemetry();
    info!("Starting digestr form...");

    let settings = Settings::new()?;
    metrics::init_metrics(&settings.metrics);

    let summarizer: Arc<dyn Summarizer> =
        Arc::new(HuggingFaceSummarizer::new(&settings.summarizer)?);
    let use_case = Arc::new(SummarizeUseCase::new(summarizer, "form"));

    let app = routes::form_routes(use_case);

    let addr = settings.form.bind_address();
    let listener = TcpListener::bind(&addr).await?;
    info!("Form available at http://{}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
