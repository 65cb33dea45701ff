// Services module - the remote contract and its HTTP implementation

pub mod http_pizza_service;
pub mod pizza_service;
pub mod token_store;

pub use http_pizza_service::HttpPizzaService;
pub use pizza_service::PizzaService;
pub use token_store::{FileTokenStore, MemoryTokenStore, TokenStore};
