// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 配置设置测试模块
///
/// 确保环境变量能够覆盖内置默认值
#[cfg(test)]
mod tests {
    use digestr::config::settings::Settings;

    #[test]
    fn test_environment_overrides_defaults() {
        std::env::set_var("DIGESTR__SUMMARIZER__MODEL", "sshleifer/distilbart-cnn-12-6");

        let settings = Settings::new();
        std::env::remove_var("DIGESTR__SUMMARIZER__MODEL");

        let settings = settings.expect("configuration should load");
        assert_eq!(settings.summarizer.model, "sshleifer/distilbart-cnn-12-6");
        assert_eq!(settings.server.port, 8000);
    }
}
