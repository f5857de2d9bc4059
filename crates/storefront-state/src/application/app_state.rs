use storefront_types::domain::cart::CartState;
use storefront_types::domain::order::Order;
use storefront_types::domain::user::User;

use crate::application::cart_store::CartStore;
use crate::application::menu_store::MenuStore;
use crate::application::order_store::OrderStore;
use crate::application::payment_store::PaymentStore;
use crate::application::restaurant_store::RestaurantStore;
use crate::application::user_store::UserStore;

/// All entity stores for one session, passed to the view layer by dependency
/// injection rather than held as ambient globals.
#[derive(Debug, Default)]
pub struct AppState {
    pub user: UserStore,
    pub cart: CartStore,
    pub menu: MenuStore,
    pub restaurants: RestaurantStore,
    pub orders: OrderStore,
    pub payments: PaymentStore,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies a `/auth/me` response: the user plus the cart the backend
    /// kept for them.
    pub fn apply_profile(&mut self, user: User, cart: Option<CartState>) {
        tracing::debug!(user_id = %user.id, "profile loaded");
        self.user.set_user(user);
        if let Some(cart) = cart {
            self.cart.set_cart(cart);
        }
    }

    /// Mirrors a successful checkout: the order joins the cache and the cart
    /// empties.
    pub fn apply_checkout(&mut self, order: Order) {
        tracing::debug!(order_id = %order.id, "order placed");
        self.orders.push(order);
        self.cart.clear();
    }

    /// Drops everything tied to the session on logout or an expired refresh.
    pub fn reset_session(&mut self) {
        tracing::debug!("session reset");
        self.user.clear_user();
        self.cart.clear();
        self.orders.set_orders(Vec::new());
        self.payments.set_payments(Vec::new());
    }
}
