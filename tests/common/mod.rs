use std::sync::Arc;

use pizza_client::{HttpPizzaService, MemoryTokenStore, ServiceConfig, TokenStore};
use wiremock::MockServer;

/// A client wired against a mocked backend, with its token store exposed so
/// tests can observe token side effects.
pub struct TestEnvironment {
    pub server: MockServer,
    pub service: HttpPizzaService,
    pub tokens: Arc<MemoryTokenStore>,
}

impl TestEnvironment {
    pub async fn new() -> Self {
        let server = MockServer::start().await;
        let tokens = Arc::new(MemoryTokenStore::new());
        let config = ServiceConfig {
            service_url: server.uri(),
            factory_url: server.uri(),
            request_timeout_seconds: 5,
        };
        let service = HttpPizzaService::with_token_store(&config, tokens.clone())
            .expect("Failed to build client");

        Self {
            server,
            service,
            tokens,
        }
    }

    /// Start out already authenticated
    pub async fn with_token(token: &str) -> Self {
        let env = Self::new().await;
        env.tokens.put(token).await;
        env
    }
}
