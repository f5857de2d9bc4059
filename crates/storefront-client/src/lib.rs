//! storefront-client: typed HTTP client for the storefront backend.
//!
//! Attaches the bearer token from a [`TokenStore`] to every request and, on a
//! 401, runs a single-flight refresh before replaying the request exactly
//! once.

pub mod config;
mod error;
mod refresh;
pub mod requests;

pub use error::ApiError;

use std::sync::Arc;
use std::time::{Duration, Instant};

use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::{Method, StatusCode, Url};
use serde::de::DeserializeOwned;
use serde::Serialize;
use storefront_types::domain::cart::CartState;
use storefront_types::domain::menu::MenuItem;
use storefront_types::domain::order::{Order, OrderStatus};
use storefront_types::domain::restaurant::Restaurant;
use storefront_types::domain::user::User;
use storefront_types::forms::{LoginForm, MenuItemForm, RestaurantForm, SignupForm};
use storefront_types::ports::token_store::TokenStore;
use tracing::Instrument;
use uuid::Uuid;
use validator::Validate;

use crate::refresh::RefreshGate;
use crate::requests::{
    AuthResponse, CreateOrderRequest, OrderUpdate, OrdersResponse, PaymentUpdate,
    PaymentUpdateRequest, Profile, RestaurantDetail, UpdateOrderRequest, UserUpdateRequest,
};

pub struct ApiClientBuilder {
    base: Url,
    headers: HeaderMap,
    timeout: Option<Duration>,
    refresh_timeout: Duration,
    client: Option<reqwest::Client>,
    tokens: Arc<dyn TokenStore>,
}

#[derive(Clone)]
pub struct ApiClient {
    inner: Arc<ClientInner>,
}

pub(crate) struct ClientInner {
    pub(crate) base: Url,
    pub(crate) http: reqwest::Client,
    pub(crate) tokens: Arc<dyn TokenStore>,
    pub(crate) gate: RefreshGate,
    pub(crate) refresh_timeout: Duration,
}

/// Explicit retry state threaded through the request pipeline; a request is
/// replayed at most once after a refresh.
#[derive(Clone, Copy, PartialEq, Eq)]
enum Attempt {
    First,
    Retried,
}

impl ApiClient {
    pub fn new(base_url: &str, tokens: Arc<dyn TokenStore>) -> Result<Self, ApiError> {
        Self::builder(base_url, tokens)?.build()
    }

    pub fn builder(
        base_url: &str,
        tokens: Arc<dyn TokenStore>,
    ) -> Result<ApiClientBuilder, ApiError> {
        let base = Url::parse(base_url).map_err(|e| ApiError::InvalidUrl(e.to_string()))?;
        Ok(ApiClientBuilder {
            base,
            headers: HeaderMap::new(),
            timeout: None,
            refresh_timeout: Duration::from_secs(10),
            client: None,
            tokens,
        })
    }

    fn url(&self, path: &str) -> Result<Url, ApiError> {
        self.inner
            .base
            .join(path)
            .map_err(|e| ApiError::InvalidUrl(e.to_string()))
    }

    /// Sends one request with the current bearer token. A 401 on the first
    /// attempt routes through the refresh coordinator and replays once; a
    /// 401 on the replay surfaces as an ordinary `Api` error.
    async fn send<B>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<reqwest::Response, ApiError>
    where
        B: Serialize + ?Sized,
    {
        let url = self.url(path)?;
        let request_id = Uuid::new_v4();
        let span = tracing::debug_span!("api_request", %request_id, method = %method, path);
        async {
            let started = Instant::now();
            let mut attempt = Attempt::First;
            loop {
                let token = self.inner.tokens.get().await?;
                let mut req = self
                    .inner
                    .http
                    .request(method.clone(), url.clone())
                    .header("x-request-id", request_id.to_string());
                if let Some(token) = token.as_deref() {
                    req = req.bearer_auth(token);
                }
                if let Some(body) = body {
                    req = req.json(body);
                }
                let res = req.send().await?;
                let status = res.status();
                tracing::debug!(
                    status = %status,
                    latency_ms = %started.elapsed().as_millis(),
                    "response"
                );
                if status == StatusCode::UNAUTHORIZED && attempt == Attempt::First {
                    self.inner.refresh_access_token(token.as_deref()).await?;
                    attempt = Attempt::Retried;
                    continue;
                }
                if !status.is_success() {
                    return Err(ApiError::from_response(res).await);
                }
                return Ok(res);
            }
        }
        .instrument(span)
        .await
    }

    async fn request_json<B, T>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let res = self.send(method, path, body).await?;
        res.json().await.map_err(|e| ApiError::Decode(e.to_string()))
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.request_json::<(), T>(Method::GET, path, None).await
    }

    // auth

    /// Validates, logs in, and stores the returned token for every request
    /// that follows.
    pub async fn login(&self, form: &LoginForm) -> Result<AuthResponse, ApiError> {
        form.validate()?;
        let res: AuthResponse = self
            .request_json(Method::POST, "auth/login", Some(form))
            .await?;
        self.inner.tokens.set(&res.token).await?;
        Ok(res)
    }

    pub async fn signup(&self, form: &SignupForm) -> Result<AuthResponse, ApiError> {
        form.validate()?;
        let res: AuthResponse = self
            .request_json(Method::POST, "auth/signup", Some(form))
            .await?;
        self.inner.tokens.set(&res.token).await?;
        Ok(res)
    }

    /// Logs out server-side, then drops the stored token.
    pub async fn logout(&self) -> Result<(), ApiError> {
        self.send(Method::POST, "auth/logout", Some(&serde_json::json!({})))
            .await?;
        self.inner.tokens.clear().await?;
        Ok(())
    }

    /// The signed-in user together with the cart the backend kept for them.
    pub async fn me(&self) -> Result<Profile, ApiError> {
        self.get_json("auth/me").await
    }

    // restaurants

    pub async fn list_restaurants(&self) -> Result<Vec<Restaurant>, ApiError> {
        self.get_json("restaurants").await
    }

    pub async fn create_restaurant(&self, form: &RestaurantForm) -> Result<Restaurant, ApiError> {
        form.validate()?;
        self.request_json(Method::POST, "restaurants", Some(form))
            .await
    }

    pub async fn get_restaurant(&self, restaurant_id: &str) -> Result<RestaurantDetail, ApiError> {
        self.get_json(&format!("restaurants/{restaurant_id}")).await
    }

    // menu items

    pub async fn create_menu_item(
        &self,
        restaurant_id: &str,
        form: &MenuItemForm,
    ) -> Result<MenuItem, ApiError> {
        form.validate()?;
        self.request_json(
            Method::POST,
            &format!("menu-items/restaurant/{restaurant_id}"),
            Some(form),
        )
        .await
    }

    pub async fn delete_menu_item(&self, menu_item_id: &str) -> Result<(), ApiError> {
        self.send(
            Method::DELETE,
            &format!("menu-items/{menu_item_id}"),
            None::<&()>,
        )
        .await?;
        Ok(())
    }

    // cart

    pub async fn fetch_cart(&self) -> Result<CartState, ApiError> {
        self.get_json("cart").await
    }

    pub async fn save_cart(&self, cart: &CartState) -> Result<CartState, ApiError> {
        self.request_json(Method::POST, "cart", Some(cart)).await
    }

    pub async fn clear_cart(&self) -> Result<(), ApiError> {
        self.send(Method::DELETE, "cart", None::<&()>).await?;
        Ok(())
    }

    pub async fn add_cart_item(&self, menu_item_id: &str) -> Result<(), ApiError> {
        self.send(
            Method::POST,
            &format!("cart/items/{menu_item_id}"),
            None::<&()>,
        )
        .await?;
        Ok(())
    }

    pub async fn remove_cart_item(&self, menu_item_id: &str) -> Result<(), ApiError> {
        self.send(
            Method::DELETE,
            &format!("cart/items/{menu_item_id}"),
            None::<&()>,
        )
        .await?;
        Ok(())
    }

    // orders

    /// `GET /orders` returns the orders with their payments alongside.
    pub async fn list_orders(&self) -> Result<OrdersResponse, ApiError> {
        self.get_json("orders").await
    }

    pub async fn create_order(&self, req: &CreateOrderRequest) -> Result<Order, ApiError> {
        self.request_json(Method::POST, "orders", Some(req)).await
    }

    pub async fn update_order(
        &self,
        order_id: &str,
        status: OrderStatus,
    ) -> Result<OrderUpdate, ApiError> {
        self.request_json(
            Method::PUT,
            &format!("orders/{order_id}"),
            Some(&UpdateOrderRequest { status }),
        )
        .await
    }

    // payments

    pub async fn update_payment(
        &self,
        payment_id: &str,
        update: &PaymentUpdateRequest,
    ) -> Result<PaymentUpdate, ApiError> {
        self.request_json(Method::PUT, &format!("payments/{payment_id}"), Some(update))
            .await
    }

    // users

    pub async fn get_user(&self, user_id: &str) -> Result<User, ApiError> {
        self.get_json(&format!("users/{user_id}")).await
    }

    pub async fn update_user(
        &self,
        user_id: &str,
        update: &UserUpdateRequest,
    ) -> Result<User, ApiError> {
        self.request_json(Method::PUT, &format!("users/{user_id}"), Some(update))
            .await
    }
}

impl ApiClientBuilder {
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Upper bound on the refresh call so a dead backend cannot hang every
    /// queued request.
    pub fn with_refresh_timeout(mut self, timeout: Duration) -> Self {
        self.refresh_timeout = timeout;
        self
    }

    pub fn with_header(
        mut self,
        key: impl AsRef<str>,
        value: impl AsRef<str>,
    ) -> Result<Self, ApiError> {
        let header_name = HeaderName::from_bytes(key.as_ref().as_bytes())
            .map_err(|e| ApiError::InvalidHeader(e.to_string()))?;
        let header_value = HeaderValue::from_str(value.as_ref())
            .map_err(|e| ApiError::InvalidHeader(e.to_string()))?;
        self.headers.insert(header_name, header_value);
        Ok(self)
    }

    pub fn with_reqwest_client(mut self, client: reqwest::Client) -> Self {
        self.client = Some(client);
        self
    }

    pub fn build(self) -> Result<ApiClient, ApiError> {
        let http = match self.client {
            Some(client) => client,
            None => {
                let mut builder = reqwest::Client::builder();
                if !self.headers.is_empty() {
                    builder = builder.default_headers(self.headers);
                }
                if let Some(t) = self.timeout {
                    builder = builder.timeout(t);
                }
                builder.build()?
            }
        };
        Ok(ApiClient {
            inner: Arc::new(ClientInner {
                base: self.base,
                http,
                tokens: self.tokens,
                gate: RefreshGate::default(),
                refresh_timeout: self.refresh_timeout,
            }),
        })
    }
}
