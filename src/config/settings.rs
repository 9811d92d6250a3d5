// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::net::SocketAddr;

/// 应用程序配置设置
///
/// 包含 HTTP 服务、表单页面、摘要模型和指标导出等所有配置项
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// HTTP API 服务配置
    pub server: ServerSettings,
    /// 交互式表单服务配置
    pub form: ServerSettings,
    /// 摘要模型配置
    pub summarizer: SummarizerSettings,
    /// 指标导出配置
    pub metrics: MetricsSettings,
}

/// 服务器配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    /// 服务器监听主机地址
    pub host: String,
    /// 服务器监听端口
    pub port: u16,
}

impl ServerSettings {
    /// 监听地址，格式为 `host:port`
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// 摘要模型配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct SummarizerSettings {
    /// 模型名称
    pub model: String,
    /// 推理服务基础URL，模型名称拼接在其后
    pub api_base_url: String,
    /// 推理服务访问令牌
    pub api_key: Option<String>,
}

/// 指标导出配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct MetricsSettings {
    /// 是否启用 Prometheus 导出
    pub enabled: bool,
    /// 导出器监听地址
    pub listen_addr: String,
}

impl Settings {
    /// 创建新的配置实例
    ///
    /// 依次加载内置默认值、`config/default`、`config/{APP_ENVIRONMENT}`
    /// 以及 `DIGESTR__` 前缀的环境变量
    ///
    /// # Returns
    ///
    /// * `Ok(Settings)` - 成功加载并校验的配置
    /// * `Err(ConfigError)` - 配置加载或校验失败
    pub fn new() -> Result<Self, ConfigError> {
        let env = std::env::var("APP_ENVIRONMENT").unwrap_or_else(|_| "default".to_string());
        let builder = Self::defaults()?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", env)).required(false))
            .add_source(Environment::with_prefix("DIGESTR").separator("__"));

        let settings: Settings = builder.build()?.try_deserialize()?;
        settings.validate()?;
        Ok(settings)
    }

    /// 仅由内置默认值构建的配置
    pub fn from_defaults() -> Result<Self, ConfigError> {
        let settings: Settings = Self::defaults()?.build()?.try_deserialize()?;
        settings.validate()?;
        Ok(settings)
    }

    fn defaults() -> Result<config::ConfigBuilder<config::builder::DefaultState>, ConfigError> {
        Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 8000)?
            .set_default("form.host", "0.0.0.0")?
            .set_default("form.port", 8501)?
            .set_default("summarizer.model", "facebook/bart-large-cnn")?
            .set_default(
                "summarizer.api_base_url",
                "https://api-inference.huggingface.co/models",
            )?
            .set_default("metrics.enabled", false)?
            .set_default("metrics.listen_addr", "0.0.0.0:9000")
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 || self.form.port == 0 {
            return Err(ConfigError::Message(
                "server.port and form.port must be non-zero".to_string(),
            ));
        }

        if self.summarizer.model.trim().is_empty() {
            return Err(ConfigError::Message(
                "summarizer.model cannot be empty".to_string(),
            ));
        }

        url::Url::parse(&self.summarizer.api_base_url).map_err(|e| {
            ConfigError::Message(format!("summarizer.api_base_url is invalid: {}", e))
        })?;

        if self.metrics.enabled {
            self.metrics.listen_addr.parse::<SocketAddr>().map_err(|e| {
                ConfigError::Message(format!("metrics.listen_addr is invalid: {}", e))
            })?;
        }

        Ok(())
    }
}
