use async_trait::async_trait;

use crate::models::{
    ApiResult, DocTarget, Endpoints, Franchise, FranchiseList, JwtPayload, Menu, Order,
    OrderHistory, OrderResponse, Store, User, UserList,
};

/// Contract for the pizza backend, one operation per remote capability.
/// No retries, no caching, no ordering guarantees across calls.
#[async_trait]
pub trait PizzaService: Send + Sync {
    /// Authenticate an existing user and persist the returned token
    async fn login(&self, email: &str, password: &str) -> ApiResult<User>;

    /// Create a new diner account and persist the returned token
    async fn register(&self, name: &str, email: &str, password: &str) -> ApiResult<User>;

    /// End the session. The stored token is cleared regardless of whether
    /// the remote call succeeds.
    async fn logout(&self) -> ApiResult<()>;

    /// The user behind the stored token, or `None` when no token is stored
    /// or the token is no longer accepted (in which case it is cleared)
    async fn current_user(&self) -> ApiResult<Option<User>>;

    /// Update an account; the backend rotates the token, which is persisted
    async fn update_user(&self, user: &User) -> ApiResult<User>;

    /// Remove an account
    async fn delete_user(&self, user: &User) -> ApiResult<()>;

    /// Paginated, name-filtered user listing (admin)
    async fn list_users(&self, page: u32, limit: u32, name_filter: &str) -> ApiResult<UserList>;

    /// The current menu
    async fn menu(&self) -> ApiResult<Menu>;

    /// Order history for the authenticated diner
    async fn orders(&self) -> ApiResult<OrderHistory>;

    /// Place an order
    async fn place_order(&self, order: &Order) -> ApiResult<OrderResponse>;

    /// Verify a signed order token against the pizza factory
    async fn verify_order(&self, jwt: &str) -> ApiResult<JwtPayload>;

    /// Franchises administered by the given user
    async fn user_franchises(&self, user: &User) -> ApiResult<Vec<Franchise>>;

    /// Create a franchise (admin)
    async fn create_franchise(&self, franchise: &Franchise) -> ApiResult<Franchise>;

    /// Paginated, name-filtered franchise listing
    async fn list_franchises(
        &self,
        page: u32,
        limit: u32,
        name_filter: &str,
    ) -> ApiResult<FranchiseList>;

    /// Close a franchise (admin)
    async fn close_franchise(&self, franchise: &Franchise) -> ApiResult<()>;

    /// Open a store under a franchise
    async fn create_store(&self, franchise: &Franchise, store: &Store) -> ApiResult<Store>;

    /// Close a store
    async fn close_store(&self, franchise: &Franchise, store: &Store) -> ApiResult<()>;

    /// Endpoint documentation for the service or the factory
    async fn docs(&self, target: DocTarget) -> ApiResult<Endpoints>;
}
