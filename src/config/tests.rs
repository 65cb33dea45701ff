#[cfg(test)]
mod config_tests {
    use crate::config::{
        default_factory_url, default_log_level, default_service_name, default_service_url,
        default_timeout, Config, ConfigError, ObservabilityConfig, ServiceConfig,
    };
    use std::env;
    use std::sync::Mutex;
    use std::time::Duration;

    // Tests below mutate process-wide environment variables
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    #[test]
    fn test_service_config_defaults() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        env::remove_var("PIZZA_SERVICE_URL");
        env::remove_var("PIZZA_FACTORY_URL");
        env::remove_var("PIZZA_REQUEST_TIMEOUT_SECONDS");

        let config = ServiceConfig::from_env().unwrap();

        assert_eq!(config.service_url, "http://localhost:3000");
        assert_eq!(config.factory_url, "https://pizza-factory.cs329.click");
        assert_eq!(config.request_timeout_seconds, 30);
    }

    #[test]
    fn test_service_config_from_env() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        env::set_var("PIZZA_SERVICE_URL", "https://pizza-service.example.com");
        env::set_var("PIZZA_FACTORY_URL", "https://factory.example.com");

        let config = ServiceConfig::from_env().unwrap();

        assert_eq!(config.service_url, "https://pizza-service.example.com");
        assert_eq!(config.factory_url, "https://factory.example.com");

        // Clean up
        env::remove_var("PIZZA_SERVICE_URL");
        env::remove_var("PIZZA_FACTORY_URL");
    }

    #[test]
    fn test_observability_config_from_env() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        env::set_var("PIZZA_SERVICE_NAME", "test-client");
        env::set_var("PIZZA_LOG_LEVEL", "debug");

        let config = ObservabilityConfig::from_env().unwrap();

        assert_eq!(config.service_name, "test-client");
        assert_eq!(config.log_level, "debug");

        // Clean up
        env::remove_var("PIZZA_SERVICE_NAME");
        env::remove_var("PIZZA_LOG_LEVEL");
    }

    #[test]
    fn test_request_timeout() {
        let config = ServiceConfig {
            service_url: "http://localhost:3000".to_string(),
            factory_url: "http://localhost:4000".to_string(),
            request_timeout_seconds: 45,
        };

        assert_eq!(config.request_timeout(), Duration::from_secs(45));
    }

    #[test]
    fn test_validation_rejects_non_http_url() {
        let config = Config {
            service: ServiceConfig {
                service_url: "ftp://pizza".to_string(),
                factory_url: "http://localhost:4000".to_string(),
                request_timeout_seconds: 30,
            },
            observability: ObservabilityConfig {
                service_name: "pizza-client".to_string(),
                log_level: "info".to_string(),
                enable_json_logging: false,
            },
        };

        match config.validate() {
            Err(ConfigError::ValidationError { message }) => {
                assert!(message.contains("service_url"));
            }
            other => panic!("Expected validation error, got {:?}", other.is_ok()),
        }
    }

    #[test]
    fn test_validation_rejects_zero_timeout() {
        let config = Config {
            service: ServiceConfig {
                service_url: "http://localhost:3000".to_string(),
                factory_url: "http://localhost:4000".to_string(),
                request_timeout_seconds: 0,
            },
            observability: ObservabilityConfig {
                service_name: "pizza-client".to_string(),
                log_level: "info".to_string(),
                enable_json_logging: false,
            },
        };

        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_error_display() {
        let error = ConfigError::ValidationError {
            message: "Invalid configuration".to_string(),
        };
        assert_eq!(error.to_string(), "Validation error: Invalid configuration");

        let error = ConfigError::LoadError {
            message: "bad env".to_string(),
        };
        assert_eq!(error.to_string(), "Configuration loading error: bad env");
    }

    #[test]
    fn test_default_values() {
        assert_eq!(default_service_url(), "http://localhost:3000");
        assert_eq!(default_factory_url(), "https://pizza-factory.cs329.click");
        assert_eq!(default_timeout(), 30);
        assert_eq!(default_service_name(), "pizza-client");
        assert_eq!(default_log_level(), "info");
    }
}
