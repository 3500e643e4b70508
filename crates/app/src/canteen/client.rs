//! REST client for the canteen data service.

use std::sync::Arc;
use std::time::Duration;

use moka::future::Cache;
use reqwest::Method;
use secrecy::ExposeSecret;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use tracing::{debug, instrument};

use smart_canteen_core::{MenuItemId, OrderDate, OrderId, OrderStatus, ProfileId};

use crate::config::CanteenServiceConfig;
use crate::models::{
    MealOrder, MenuItem, MenuItemChanges, NewMenuItem, NewOrder, OrderWithItem, Profile,
    ProfileChanges,
};

use super::CanteenError;

/// Menu cache TTL. Short on purpose: admins edit tomorrow's menu while
/// employees are browsing it.
const MENU_CACHE_TTL: Duration = Duration::from_secs(60);

/// Cache key: (date string, employees-only view).
type MenuCacheKey = (String, bool);

/// Classify a non-success response.
///
/// A 401 means the service key itself was refused; everything else keeps its
/// status and body for diagnostics.
fn failure(status: reqwest::StatusCode, message: String) -> CanteenError {
    if status == reqwest::StatusCode::UNAUTHORIZED {
        CanteenError::InvalidKey
    } else {
        CanteenError::Api { status, message }
    }
}

/// The authenticated user returned by the sign-in endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthUser {
    /// Auth user ID; matches the profile row ID.
    pub id: ProfileId,
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    user: AuthUser,
}

/// Client for the canteen data service.
///
/// Cheaply cloneable via `Arc`. All calls are authenticated with the
/// service key; per-user authorization is the application's job.
#[derive(Clone)]
pub struct CanteenClient {
    inner: Arc<CanteenClientInner>,
}

struct CanteenClientInner {
    client: reqwest::Client,
    base_url: String,
    service_key: String,
    menu_cache: Cache<MenuCacheKey, Vec<MenuItem>>,
}

impl CanteenClient {
    /// Create a new data service client.
    #[must_use]
    pub fn new(config: &CanteenServiceConfig) -> Self {
        let menu_cache = Cache::builder()
            .max_capacity(64)
            .time_to_live(MENU_CACHE_TTL)
            .build();

        Self {
            inner: Arc::new(CanteenClientInner {
                client: reqwest::Client::new(),
                base_url: config.url.clone(),
                service_key: config.service_key.expose_secret().to_string(),
                menu_cache,
            }),
        }
    }

    /// Build a request against a `rest/v1` table endpoint with auth headers.
    fn table(&self, method: Method, table: &str) -> reqwest::RequestBuilder {
        let url = format!("{}/rest/v1/{table}", self.inner.base_url);
        self.inner
            .client
            .request(method, url)
            .header("apikey", &self.inner.service_key)
            .bearer_auth(&self.inner.service_key)
    }

    /// Send a request and decode the JSON body.
    ///
    /// Reads the body as text first so failed decodes keep the raw payload
    /// in the error path.
    async fn execute<T: DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<T, CanteenError> {
        let response = request.send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(failure(status, body));
        }

        Ok(serde_json::from_str(&body)?)
    }

    /// Send a request where only success matters.
    async fn execute_no_content(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<(), CanteenError> {
        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(failure(status, message));
        }
        Ok(())
    }

    // =========================================================================
    // Health
    // =========================================================================

    /// Whether the data service answers at all.
    pub async fn health_check(&self) -> bool {
        let url = format!("{}/rest/v1/", self.inner.base_url);
        self.inner
            .client
            .get(url)
            .header("apikey", &self.inner.service_key)
            .send()
            .await
            .is_ok_and(|response| response.status().is_success())
    }

    // =========================================================================
    // Auth
    // =========================================================================

    /// Verify credentials against the service's password-grant token endpoint.
    ///
    /// # Errors
    ///
    /// Returns `CanteenError::Api` when the service rejects the credentials
    /// (see [`CanteenError::is_auth_rejection`]).
    #[instrument(skip(self, password))]
    pub async fn sign_in(&self, email: &str, password: &str) -> Result<AuthUser, CanteenError> {
        let url = format!(
            "{}/auth/v1/token?grant_type=password",
            self.inner.base_url
        );
        let request = self
            .inner
            .client
            .post(url)
            .header("apikey", &self.inner.service_key)
            .json(&serde_json::json!({ "email": email, "password": password }));

        let token: TokenResponse = self.execute(request).await?;
        debug!(user_id = %token.user.id, "sign-in accepted");
        Ok(token.user)
    }

    // =========================================================================
    // Profiles
    // =========================================================================

    /// Fetch a profile by ID.
    ///
    /// # Errors
    ///
    /// Returns `CanteenError` if the query fails or the row cannot be decoded.
    #[instrument(skip(self))]
    pub async fn get_profile(&self, id: ProfileId) -> Result<Option<Profile>, CanteenError> {
        let request = self
            .table(Method::GET, "profiles")
            .query(&[("id", format!("eq.{id}")), ("limit", "1".to_string())]);
        let mut rows: Vec<Profile> = self.execute(request).await?;
        Ok(rows.pop())
    }

    /// Update the editable profile fields.
    ///
    /// # Errors
    ///
    /// Returns `CanteenError` if the update is rejected.
    #[instrument(skip(self, changes))]
    pub async fn update_profile(
        &self,
        id: ProfileId,
        changes: &ProfileChanges,
    ) -> Result<(), CanteenError> {
        let request = self
            .table(Method::PATCH, "profiles")
            .query(&[("id", format!("eq.{id}"))])
            .json(changes);
        self.execute_no_content(request).await
    }

    // =========================================================================
    // Menu items
    // =========================================================================

    /// List menu items for a date, sorted by category then creation time.
    ///
    /// With `only_available` (the employee view) unavailable items are
    /// filtered out at the service. Results are cached briefly.
    ///
    /// # Errors
    ///
    /// Returns `CanteenError` if the query fails.
    #[instrument(skip(self))]
    pub async fn list_menu(
        &self,
        date: OrderDate,
        only_available: bool,
    ) -> Result<Vec<MenuItem>, CanteenError> {
        let key = (date.to_string(), only_available);
        if let Some(hit) = self.inner.menu_cache.get(&key).await {
            debug!(date = %date, "menu cache hit");
            return Ok(hit);
        }

        let mut filters = vec![
            ("date".to_string(), format!("eq.{date}")),
            (
                "order".to_string(),
                "meal_type.asc,created_at.asc".to_string(),
            ),
        ];
        if only_available {
            filters.push(("is_available".to_string(), "eq.true".to_string()));
        }

        let request = self.table(Method::GET, "menu_items").query(&filters);
        let items: Vec<MenuItem> = self.execute(request).await?;
        self.inner.menu_cache.insert(key, items.clone()).await;
        Ok(items)
    }

    /// Fetch a single menu item.
    ///
    /// # Errors
    ///
    /// Returns `CanteenError` if the query fails.
    #[instrument(skip(self))]
    pub async fn get_menu_item(&self, id: MenuItemId) -> Result<Option<MenuItem>, CanteenError> {
        let request = self
            .table(Method::GET, "menu_items")
            .query(&[("id", format!("eq.{id}")), ("limit", "1".to_string())]);
        let mut rows: Vec<MenuItem> = self.execute(request).await?;
        Ok(rows.pop())
    }

    /// Create a menu item.
    ///
    /// # Errors
    ///
    /// Returns `CanteenError` if the insert is rejected.
    #[instrument(skip(self, new))]
    pub async fn create_menu_item(&self, new: &NewMenuItem) -> Result<MenuItem, CanteenError> {
        let request = self
            .table(Method::POST, "menu_items")
            .header("Prefer", "return=representation")
            .json(new);
        let mut rows: Vec<MenuItem> = self.execute(request).await?;
        self.inner.menu_cache.invalidate_all();
        rows.pop().ok_or_else(|| CanteenError::Api {
            status: reqwest::StatusCode::OK,
            message: "insert returned no row".to_string(),
        })
    }

    /// Update a menu item.
    ///
    /// # Errors
    ///
    /// Returns `CanteenError` if the update is rejected.
    #[instrument(skip(self, changes))]
    pub async fn update_menu_item(
        &self,
        id: MenuItemId,
        changes: &MenuItemChanges,
    ) -> Result<(), CanteenError> {
        let request = self
            .table(Method::PATCH, "menu_items")
            .query(&[("id", format!("eq.{id}"))])
            .json(changes);
        self.execute_no_content(request).await?;
        self.inner.menu_cache.invalidate_all();
        Ok(())
    }

    /// Delete a menu item.
    ///
    /// # Errors
    ///
    /// Returns `CanteenError` if the delete is rejected.
    #[instrument(skip(self))]
    pub async fn delete_menu_item(&self, id: MenuItemId) -> Result<(), CanteenError> {
        let request = self
            .table(Method::DELETE, "menu_items")
            .query(&[("id", format!("eq.{id}"))]);
        self.execute_no_content(request).await?;
        self.inner.menu_cache.invalidate_all();
        Ok(())
    }

    // =========================================================================
    // Orders
    // =========================================================================

    /// Base query for confirmed orders on a date.
    fn confirmed_orders(&self, date: OrderDate) -> reqwest::RequestBuilder {
        self.table(Method::GET, "meal_orders").query(&[
            ("order_date", format!("eq.{date}")),
            ("status", format!("eq.{}", OrderStatus::Confirmed)),
        ])
    }

    /// List every confirmed order for a date.
    ///
    /// # Errors
    ///
    /// Returns `CanteenError` if the query fails.
    #[instrument(skip(self))]
    pub async fn list_orders(&self, date: OrderDate) -> Result<Vec<MealOrder>, CanteenError> {
        self.execute(self.confirmed_orders(date)).await
    }

    /// List one user's confirmed orders for a date.
    ///
    /// # Errors
    ///
    /// Returns `CanteenError` if the query fails.
    #[instrument(skip(self))]
    pub async fn list_orders_for_user(
        &self,
        date: OrderDate,
        user_id: ProfileId,
    ) -> Result<Vec<MealOrder>, CanteenError> {
        let request = self
            .confirmed_orders(date)
            .query(&[("user_id", format!("eq.{user_id}"))]);
        self.execute(request).await
    }

    /// List all confirmed orders for a date joined with their menu item
    /// (name and category) - the report input.
    ///
    /// # Errors
    ///
    /// Returns `CanteenError` if the query fails.
    #[instrument(skip(self))]
    pub async fn list_orders_with_items(
        &self,
        date: OrderDate,
    ) -> Result<Vec<OrderWithItem>, CanteenError> {
        let request = self.table(Method::GET, "meal_orders").query(&[
            ("order_date", format!("eq.{date}")),
            ("status", format!("eq.{}", OrderStatus::Confirmed)),
            (
                "select",
                "*,menu_items:menu_item_id(name,meal_type)".to_string(),
            ),
        ]);
        self.execute(request).await
    }

    /// Create a confirmed order.
    ///
    /// # Errors
    ///
    /// Returns `CanteenError` if the insert is rejected.
    #[instrument(skip(self, new))]
    pub async fn create_order(&self, new: &NewOrder) -> Result<MealOrder, CanteenError> {
        let request = self
            .table(Method::POST, "meal_orders")
            .header("Prefer", "return=representation")
            .json(new);
        let mut rows: Vec<MealOrder> = self.execute(request).await?;
        rows.pop().ok_or_else(|| CanteenError::Api {
            status: reqwest::StatusCode::OK,
            message: "insert returned no row".to_string(),
        })
    }

    /// Delete an order (a withdrawn selection is removed, never kept as
    /// cancelled).
    ///
    /// # Errors
    ///
    /// Returns `CanteenError` if the delete is rejected.
    #[instrument(skip(self))]
    pub async fn delete_order(&self, id: OrderId) -> Result<(), CanteenError> {
        let request = self
            .table(Method::DELETE, "meal_orders")
            .query(&[("id", format!("eq.{id}"))]);
        self.execute_no_content(request).await
    }
}
