use async_trait::async_trait;
use reqwest::header;
use serde::de::DeserializeOwned;
use serde_json::json;
use std::sync::Arc;
use tracing::{debug, instrument, warn};

use crate::config::ServiceConfig;
use crate::models::{
    ApiError, ApiResult, AuthResponse, DocTarget, Endpoints, Franchise, FranchiseList, JwtPayload,
    Menu, Order, OrderHistory, OrderResponse, Store, User, UserList,
};
use crate::services::{MemoryTokenStore, PizzaService, TokenStore};

/// The sole `PizzaService` implementation: one HTTP call per operation,
/// bearer auth from the token store, uniform error normalization.
pub struct HttpPizzaService {
    client: reqwest::Client,
    service_url: String,
    factory_url: String,
    tokens: Arc<dyn TokenStore>,
}

impl HttpPizzaService {
    /// Build a client with process-local token storage
    pub fn new(config: &ServiceConfig) -> ApiResult<Self> {
        Self::with_token_store(config, Arc::new(MemoryTokenStore::new()))
    }

    /// Build a client over an explicit token store
    pub fn with_token_store(
        config: &ServiceConfig,
        tokens: Arc<dyn TokenStore>,
    ) -> ApiResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.request_timeout())
            .build()?;

        Ok(Self {
            client,
            service_url: config.service_url.trim_end_matches('/').to_string(),
            factory_url: config.factory_url.trim_end_matches('/').to_string(),
            tokens,
        })
    }

    /// The token store backing this client
    pub fn token_store(&self) -> Arc<dyn TokenStore> {
        self.tokens.clone()
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.service_url, path)
    }

    fn factory_endpoint(&self, path: &str) -> String {
        format!("{}{}", self.factory_url, path)
    }

    /// Issue one request. Success with a JSON content-type parses the body;
    /// success without one yields `None` (no-content responses). Failure
    /// yields the status code plus the body's `message` when one can be
    /// extracted, else the status text.
    async fn dispatch<T: DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
    ) -> ApiResult<Option<T>> {
        let mut request = request.header(header::CONTENT_TYPE, "application/json");

        if let Some(token) = self.tokens.get().await {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;
        let status = response.status();

        if status.is_success() {
            let is_json = response
                .headers()
                .get(header::CONTENT_TYPE)
                .and_then(|value| value.to_str().ok())
                .map(|value| value.contains("application/json"))
                .unwrap_or(false);

            if is_json {
                Ok(Some(response.json::<T>().await?))
            } else {
                Ok(None)
            }
        } else {
            let status_text = status.canonical_reason().unwrap_or("").to_string();
            let message = match response.json::<serde_json::Value>().await {
                Ok(body) => body
                    .get("message")
                    .and_then(|message| message.as_str())
                    .map(str::to_string)
                    .unwrap_or(status_text),
                Err(_) => status_text,
            };
            Err(ApiError::new(status.as_u16(), message))
        }
    }

    /// Like `dispatch`, for operations whose success always carries a body
    async fn dispatch_json<T: DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
    ) -> ApiResult<T> {
        self.dispatch(request)
            .await?
            .ok_or_else(|| ApiError::transport("response carried no JSON body"))
    }
}

fn require_user_id(user: &User) -> ApiResult<&str> {
    user.id
        .as_deref()
        .ok_or_else(|| ApiError::new(400, "user id is required"))
}

fn require_id(id: Option<i64>, what: &str) -> ApiResult<i64> {
    id.ok_or_else(|| ApiError::new(400, format!("{} id is required", what)))
}

#[async_trait]
impl PizzaService for HttpPizzaService {
    #[instrument(skip(self, password), fields(email = %email))]
    async fn login(&self, email: &str, password: &str) -> ApiResult<User> {
        let auth: AuthResponse = self
            .dispatch_json(
                self.client
                    .put(self.endpoint("/api/auth"))
                    .json(&json!({ "email": email, "password": password })),
            )
            .await?;

        // Persist before handing the user back so follow-up calls carry it
        self.tokens.put(&auth.token).await;
        debug!("Login succeeded, token persisted");
        Ok(auth.user)
    }

    #[instrument(skip(self, password), fields(email = %email))]
    async fn register(&self, name: &str, email: &str, password: &str) -> ApiResult<User> {
        let auth: AuthResponse = self
            .dispatch_json(
                self.client
                    .post(self.endpoint("/api/auth"))
                    .json(&json!({ "name": name, "email": email, "password": password })),
            )
            .await?;

        self.tokens.put(&auth.token).await;
        debug!("Registration succeeded, token persisted");
        Ok(auth.user)
    }

    #[instrument(skip(self))]
    async fn logout(&self) -> ApiResult<()> {
        let result: ApiResult<Option<serde_json::Value>> = self
            .dispatch(self.client.delete(self.endpoint("/api/auth")))
            .await;

        if let Err(e) = result {
            warn!(code = e.code, message = %e.message, "Logout call failed, clearing token anyway");
        }

        self.tokens.clear().await;
        Ok(())
    }

    #[instrument(skip(self))]
    async fn current_user(&self) -> ApiResult<Option<User>> {
        if self.tokens.get().await.is_none() {
            return Ok(None);
        }

        match self
            .dispatch_json::<User>(self.client.get(self.endpoint("/api/user/me")))
            .await
        {
            Ok(user) => Ok(Some(user)),
            Err(e) => {
                debug!(code = e.code, "Stored token rejected, clearing it");
                self.tokens.clear().await;
                Ok(None)
            }
        }
    }

    #[instrument(skip(self, user), fields(user_id = ?user.id))]
    async fn update_user(&self, user: &User) -> ApiResult<User> {
        let id = require_user_id(user)?;
        let auth: AuthResponse = self
            .dispatch_json(
                self.client
                    .put(self.endpoint(&format!("/api/user/{}", id)))
                    .json(user),
            )
            .await?;

        // The backend rotates the token on profile changes
        self.tokens.put(&auth.token).await;
        Ok(auth.user)
    }

    #[instrument(skip(self, user), fields(user_id = ?user.id))]
    async fn delete_user(&self, user: &User) -> ApiResult<()> {
        let id = require_user_id(user)?;
        self.dispatch::<serde_json::Value>(
            self.client.delete(self.endpoint(&format!("/api/user/{}", id))),
        )
        .await?;
        Ok(())
    }

    #[instrument(skip(self))]
    async fn list_users(&self, page: u32, limit: u32, name_filter: &str) -> ApiResult<UserList> {
        self.dispatch_json(self.client.get(self.endpoint("/api/user")).query(&[
            ("page", page.to_string()),
            ("limit", limit.to_string()),
            ("name", name_filter.to_string()),
        ]))
        .await
    }

    #[instrument(skip(self))]
    async fn menu(&self) -> ApiResult<Menu> {
        self.dispatch_json(self.client.get(self.endpoint("/api/order/menu")))
            .await
    }

    #[instrument(skip(self))]
    async fn orders(&self) -> ApiResult<OrderHistory> {
        self.dispatch_json(self.client.get(self.endpoint("/api/order")))
            .await
    }

    #[instrument(skip(self, order), fields(franchise_id = order.franchise_id, store_id = order.store_id, items = order.items.len()))]
    async fn place_order(&self, order: &Order) -> ApiResult<OrderResponse> {
        self.dispatch_json(self.client.post(self.endpoint("/api/order")).json(order))
            .await
    }

    #[instrument(skip(self, jwt))]
    async fn verify_order(&self, jwt: &str) -> ApiResult<JwtPayload> {
        self.dispatch_json(
            self.client
                .post(self.factory_endpoint("/api/order/verify"))
                .json(&json!({ "jwt": jwt })),
        )
        .await
    }

    #[instrument(skip(self, user), fields(user_id = ?user.id))]
    async fn user_franchises(&self, user: &User) -> ApiResult<Vec<Franchise>> {
        let id = require_user_id(user)?;
        self.dispatch_json(
            self.client
                .get(self.endpoint(&format!("/api/franchise/{}", id))),
        )
        .await
    }

    #[instrument(skip(self, franchise), fields(name = %franchise.name))]
    async fn create_franchise(&self, franchise: &Franchise) -> ApiResult<Franchise> {
        self.dispatch_json(
            self.client
                .post(self.endpoint("/api/franchise"))
                .json(franchise),
        )
        .await
    }

    #[instrument(skip(self))]
    async fn list_franchises(
        &self,
        page: u32,
        limit: u32,
        name_filter: &str,
    ) -> ApiResult<FranchiseList> {
        self.dispatch_json(self.client.get(self.endpoint("/api/franchise")).query(&[
            ("page", page.to_string()),
            ("limit", limit.to_string()),
            ("name", name_filter.to_string()),
        ]))
        .await
    }

    #[instrument(skip(self, franchise), fields(franchise_id = ?franchise.id))]
    async fn close_franchise(&self, franchise: &Franchise) -> ApiResult<()> {
        let id = require_id(franchise.id, "franchise")?;
        self.dispatch::<serde_json::Value>(
            self.client
                .delete(self.endpoint(&format!("/api/franchise/{}", id))),
        )
        .await?;
        Ok(())
    }

    #[instrument(skip(self, franchise, store), fields(franchise_id = ?franchise.id, store = %store.name))]
    async fn create_store(&self, franchise: &Franchise, store: &Store) -> ApiResult<Store> {
        let id = require_id(franchise.id, "franchise")?;
        self.dispatch_json(
            self.client
                .post(self.endpoint(&format!("/api/franchise/{}/store", id)))
                .json(store),
        )
        .await
    }

    #[instrument(skip(self, franchise, store), fields(franchise_id = ?franchise.id, store_id = ?store.id))]
    async fn close_store(&self, franchise: &Franchise, store: &Store) -> ApiResult<()> {
        let franchise_id = require_id(franchise.id, "franchise")?;
        let store_id = require_id(store.id, "store")?;
        self.dispatch::<serde_json::Value>(self.client.delete(self.endpoint(&format!(
            "/api/franchise/{}/store/{}",
            franchise_id, store_id
        ))))
        .await?;
        Ok(())
    }

    #[instrument(skip(self))]
    async fn docs(&self, target: DocTarget) -> ApiResult<Endpoints> {
        let url = match target {
            DocTarget::Service => self.endpoint("/api/docs"),
            DocTarget::Factory => self.factory_endpoint("/api/docs"),
        };
        self.dispatch_json(self.client.get(url)).await
    }
}
