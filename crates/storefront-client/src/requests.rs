//! Wire payloads for the backend REST contract.

use serde::{Deserialize, Serialize};
use storefront_types::domain::cart::{CartItem, CartState};
use storefront_types::domain::menu::MenuItem;
use storefront_types::domain::order::{Order, OrderStatus};
use storefront_types::domain::payment::{Payment, PaymentMethod};
use storefront_types::domain::restaurant::Restaurant;
use storefront_types::domain::user::{Role, User};

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct AuthResponse {
    pub token: String,
    pub user: User,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub(crate) struct RefreshResponse {
    pub token: String,
}

/// `/auth/me` returns the user with the cart the backend kept for them.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Profile {
    #[serde(flatten)]
    pub user: User,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cart: Option<CartState>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct RestaurantDetail {
    pub restaurant: Restaurant,
    pub menu_items: Vec<MenuItem>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderRequest {
    pub items: Vec<CartItem>,
    pub total_price: f64,
    pub user_id: String,
    pub status: OrderStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct OrdersResponse {
    pub orders: Vec<Order>,
    #[serde(default)]
    pub payments: Vec<Payment>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub(crate) struct UpdateOrderRequest {
    pub status: OrderStatus,
}

/// `PUT /orders/{id}` returns the moved order plus any payments the backend
/// adjusted alongside it.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct OrderUpdate {
    pub order: Order,
    #[serde(default)]
    pub payments: Vec<Payment>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct PaymentUpdateRequest {
    pub payment_method: PaymentMethod,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct PaymentUpdate {
    pub payment: Payment,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct UserUpdateRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
}
