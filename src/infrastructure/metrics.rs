// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::net::SocketAddr;
use std::time::Duration;

use metrics_exporter_prometheus::PrometheusBuilder;
use tracing::{info, warn};

use crate::config::settings::MetricsSettings;

const REQUESTS_TOTAL: &str = "summarize_requests_total";
const FAILURES_TOTAL: &str = "summarize_failures_total";
const DURATION_SECONDS: &str = "summarize_duration_seconds";

/// 初始化 Prometheus 指标导出器
///
/// 未启用时不安装 recorder，指标宏调用变为空操作
pub fn init_metrics(settings: &MetricsSettings) {
    if !settings.enabled {
        info!("Metrics exporter disabled");
        return;
    }

    let addr: SocketAddr = match settings.listen_addr.parse() {
        Ok(addr) => addr,
        Err(e) => {
            warn!("Invalid metrics address {}: {}", settings.listen_addr, e);
            return;
        }
    };

    // Ignore error if address is already in use (for development/testing)
    if let Err(e) = PrometheusBuilder::new().with_http_listener(addr).install() {
        warn!(
            "Failed to install Prometheus recorder: {}. This might happen if the port is already in use.",
            e
        );
        return;
    }

    info!("Metrics exporter listening on {}", addr);
}

pub fn record_request(frontend: &'static str) {
    ::metrics::counter!(REQUESTS_TOTAL, "frontend" => frontend).increment(1);
}

pub fn record_failure(frontend: &'static str) {
    ::metrics::counter!(FAILURES_TOTAL, "frontend" => frontend).increment(1);
}

pub fn record_duration(frontend: &'static str, elapsed: Duration) {
    ::metrics::histogram!(DURATION_SECONDS, "frontend" => frontend).record(elapsed.as_secs_f64());
}
