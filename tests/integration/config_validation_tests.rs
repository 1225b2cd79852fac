//! Configuration loading and validation tests

#[cfg(test)]
mod tests {
    use print_advisor::config::{Config, DEFAULT_CONFIG_PATH};
    use print_advisor::utils::error::AdvisorError;
    use std::collections::HashMap;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_config(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[tokio::test]
    async fn test_example_config_loads() {
        let example = std::fs::read_to_string(format!("{}.example", DEFAULT_CONFIG_PATH)).unwrap();
        let file = write_config(&example);

        let config = Config::from_file(file.path()).await.unwrap();
        assert_eq!(config.server.port, 8000);
        assert!(config.anthropic.api_key().is_none());
    }

    #[tokio::test]
    async fn test_partial_file_keeps_defaults() {
        let file = write_config("analysis:\n  max_tokens: 2000\n");

        let config = Config::from_file(file.path()).await.unwrap();
        assert_eq!(config.analysis.max_tokens, 2000);
        assert_eq!(config.server, Config::default().server);
        assert_eq!(config.anthropic.request_timeout, 60);
    }

    #[tokio::test]
    async fn test_zero_timeout_rejected() {
        let file = write_config("anthropic:\n  request_timeout: 0\n");

        let err = Config::from_file(file.path()).await.unwrap_err();
        assert!(matches!(err, AdvisorError::Config(_)));
        assert!(err.to_string().contains("timeout"));
    }

    #[tokio::test]
    async fn test_empty_model_rejected() {
        let file = write_config("analysis:\n  model: \"\"\n");
        assert!(Config::from_file(file.path()).await.is_err());
    }

    #[tokio::test]
    async fn test_malformed_yaml_rejected() {
        let file = write_config("server: [unclosed\n");

        let err = Config::from_file(file.path()).await.unwrap_err();
        assert!(err.to_string().contains("Failed to parse config"));
    }

    #[test]
    fn test_environment_overrides_file_values() {
        let vars: HashMap<&str, &str> = HashMap::from([
            ("ADVISOR_HOST", "127.0.0.1"),
            ("ADVISOR_CATALOG_PATH", "/srv/catalog.json"),
            ("ANTHROPIC_BASE_URL", "http://localhost:9999"),
            ("ANTHROPIC_TIMEOUT", "15"),
        ]);

        let mut config = Config::default();
        config
            .apply_env(|key| vars.get(key).map(|v| v.to_string()))
            .unwrap();

        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(
            config.analysis.catalog_path.as_deref(),
            Some("/srv/catalog.json")
        );
        assert_eq!(config.anthropic.base_url, "http://localhost:9999");
        assert_eq!(config.anthropic.request_timeout, 15);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_missing_key_is_not_a_startup_error() {
        let mut config = Config::default();
        config.apply_env(|_| None).unwrap();

        assert!(config.anthropic.api_key().is_none());
        assert!(config.validate().is_ok());
    }
}
