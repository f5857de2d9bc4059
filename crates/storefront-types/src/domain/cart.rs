use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::menu::MenuItem;

/// One cart line: a menu item at some quantity. `item_total_price` always
/// equals `menu_item.price * quantity`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    pub menu_item: MenuItem,
    pub quantity: u32,
    pub restaurant_id: String,
    pub item_total_price: f64,
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl CartItem {
    /// Builds a line for `quantity` units with a consistent line total.
    pub fn new(menu_item: MenuItem, quantity: u32) -> Self {
        let item_total_price = menu_item.price * f64::from(quantity);
        let restaurant_id = menu_item.restaurant_id.clone();
        Self {
            menu_item,
            quantity,
            restaurant_id,
            item_total_price,
            id: None,
            created_at: None,
            updated_at: None,
        }
    }
}

/// A user's pending order lines and running total for one country.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Cart {
    pub items: Vec<CartItem>,
    pub total_price: f64,
    pub user_id: String,
    pub country: String,
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Cart {
    pub fn empty(user_id: impl Into<String>, country: impl Into<String>) -> Self {
        Self {
            items: Vec::new(),
            total_price: 0.0,
            user_id: user_id.into(),
            country: country.into(),
            id: None,
            created_at: None,
            updated_at: None,
        }
    }

    pub fn find_item(&self, menu_item_id: &str) -> Option<&CartItem> {
        self.items
            .iter()
            .find(|line| line.menu_item.id == menu_item_id)
    }

    /// Merges a line into the cart: an existing line for the same menu item
    /// grows by the incoming quantity and line total, otherwise the line is
    /// appended. The cart total moves by the incoming line total only.
    pub fn merge_item(&mut self, incoming: CartItem) {
        self.total_price += incoming.item_total_price;
        match self
            .items
            .iter_mut()
            .find(|line| line.menu_item.id == incoming.menu_item.id)
        {
            Some(line) => {
                line.quantity += incoming.quantity;
                line.item_total_price += incoming.item_total_price;
            }
            None => self.items.push(incoming),
        }
    }

    /// Removes the matching line and subtracts its total. No-op when absent.
    pub fn remove_item(&mut self, menu_item_id: &str) {
        if let Some(pos) = self
            .items
            .iter()
            .position(|line| line.menu_item.id == menu_item_id)
        {
            let line = self.items.remove(pos);
            self.total_price -= line.item_total_price;
        }
    }

    /// Increments the matching line by one unit. No-op when absent.
    pub fn add_quantity(&mut self, menu_item_id: &str) {
        if let Some(line) = self
            .items
            .iter_mut()
            .find(|line| line.menu_item.id == menu_item_id)
        {
            let unit = line.menu_item.price;
            line.quantity += 1;
            line.item_total_price += unit;
            self.total_price += unit;
        }
    }

    /// Decrements the matching line by one unit. No-op when absent.
    ///
    /// Precondition: callers disable the decrement affordance at
    /// `quantity == 1`; the cart applies the delta unconditionally.
    pub fn remove_quantity(&mut self, menu_item_id: &str) {
        if let Some(line) = self
            .items
            .iter_mut()
            .find(|line| line.menu_item.id == menu_item_id)
        {
            let unit = line.menu_item.price;
            line.quantity -= 1;
            line.item_total_price -= unit;
            self.total_price -= unit;
        }
    }
}

/// A session holds either one cart or one cart per country. Deserialized
/// untagged so both backend shapes are accepted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum CartState {
    Single(Cart),
    PerCountry(Vec<Cart>),
}

impl Default for CartState {
    fn default() -> Self {
        CartState::Single(Cart::empty("", ""))
    }
}

impl CartState {
    /// Routes a new line to its cart. The single shape always targets its one
    /// cart; the per-country shape targets the cart for `country`, creating
    /// it on first use.
    pub fn add_item(&mut self, country: &str, item: CartItem) {
        match self {
            CartState::Single(cart) => cart.merge_item(item),
            CartState::PerCountry(carts) => {
                match carts.iter_mut().find(|cart| cart.country == country) {
                    Some(cart) => cart.merge_item(item),
                    None => {
                        let user_id = carts
                            .first()
                            .map(|cart| cart.user_id.clone())
                            .unwrap_or_default();
                        let mut cart = Cart::empty(user_id, country);
                        cart.merge_item(item);
                        carts.push(cart);
                    }
                }
            }
        }
    }

    /// Removes the line from every cart that holds it.
    pub fn remove_item(&mut self, menu_item_id: &str) {
        match self {
            CartState::Single(cart) => cart.remove_item(menu_item_id),
            CartState::PerCountry(carts) => {
                for cart in carts {
                    cart.remove_item(menu_item_id);
                }
            }
        }
    }

    pub fn add_quantity(&mut self, menu_item_id: &str) {
        match self {
            CartState::Single(cart) => cart.add_quantity(menu_item_id),
            CartState::PerCountry(carts) => {
                for cart in carts {
                    cart.add_quantity(menu_item_id);
                }
            }
        }
    }

    pub fn remove_quantity(&mut self, menu_item_id: &str) {
        match self {
            CartState::Single(cart) => cart.remove_quantity(menu_item_id),
            CartState::PerCountry(carts) => {
                for cart in carts {
                    cart.remove_quantity(menu_item_id);
                }
            }
        }
    }

    pub fn carts(&self) -> &[Cart] {
        match self {
            CartState::Single(cart) => std::slice::from_ref(cart),
            CartState::PerCountry(carts) => carts,
        }
    }

    /// All lines across every cart, in cart order.
    pub fn items(&self) -> impl Iterator<Item = &CartItem> {
        self.carts().iter().flat_map(|cart| cart.items.iter())
    }

    pub fn total_price(&self) -> f64 {
        self.carts().iter().map(|cart| cart.total_price).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.items().next().is_none()
    }
}
