use storefront_types::domain::cart::{CartItem, CartState};

/// Authoritative client-side view of the in-progress cart or carts.
///
/// Every action keeps the derived totals consistent by applying the same
/// delta to the line and to the owning cart. Actions never fail; a mutation
/// against an absent line leaves the state untouched.
#[derive(Debug, Clone, Default)]
pub struct CartStore {
    cart: CartState,
}

impl CartStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cart(&self) -> &CartState {
        &self.cart
    }

    /// Wholesale replacement, used after login and cart fetches.
    pub fn set_cart(&mut self, cart: CartState) {
        self.cart = cart;
    }

    /// Merge-or-append into the cart for `country` (ignored by the
    /// single-cart shape, which has exactly one target).
    pub fn add_to_cart(&mut self, country: &str, item: CartItem) {
        self.cart.add_item(country, item);
    }

    pub fn remove_from_cart(&mut self, menu_item_id: &str) {
        self.cart.remove_item(menu_item_id);
    }

    pub fn add_quantity(&mut self, menu_item_id: &str) {
        self.cart.add_quantity(menu_item_id);
    }

    /// Precondition: the view disables the decrement at quantity == 1.
    pub fn remove_quantity(&mut self, menu_item_id: &str) {
        self.cart.remove_quantity(menu_item_id);
    }

    /// Back to an empty single cart, used after checkout and logout.
    pub fn clear(&mut self) {
        self.cart = CartState::default();
    }

    pub fn items(&self) -> impl Iterator<Item = &CartItem> {
        self.cart.items()
    }

    pub fn total_price(&self) -> f64 {
        self.cart.total_price()
    }

    pub fn is_empty(&self) -> bool {
        self.cart.is_empty()
    }
}
