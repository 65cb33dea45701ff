pub mod config;
pub mod models;
pub mod observability;
pub mod services;

pub use config::{Config, ConfigError, ObservabilityConfig, ServiceConfig};
pub use models::{ApiError, ApiResult};
pub use observability::init_tracing;
pub use services::{
    FileTokenStore, HttpPizzaService, MemoryTokenStore, PizzaService, TokenStore,
};
