use storefront_types::domain::order::{Order, OrderStatus};

/// Cache of the orders fetched from the backend, supporting targeted status
/// edits without a refetch.
#[derive(Debug, Clone, Default)]
pub struct OrderStore {
    orders: Vec<Order>,
}

impl OrderStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    pub fn set_orders(&mut self, orders: Vec<Order>) {
        self.orders = orders;
    }

    /// Replaces the status on the matching order, leaving the rest untouched.
    pub fn update_order_status(&mut self, order_id: &str, status: OrderStatus) {
        for order in &mut self.orders {
            if order.id == order_id {
                order.status = status;
            }
        }
    }

    pub fn find(&self, order_id: &str) -> Option<&Order> {
        self.orders.iter().find(|order| order.id == order_id)
    }

    pub fn push(&mut self, order: Order) {
        self.orders.push(order);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn order(id: &str, status: OrderStatus) -> Order {
        let now = Utc::now();
        Order {
            items: Vec::new(),
            user_id: "u1".into(),
            total_price: 10.0,
            status,
            country: None,
            id: id.into(),
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn status_edit_touches_only_the_match() {
        let mut store = OrderStore::new();
        store.set_orders(vec![
            order("o1", OrderStatus::Pending),
            order("o2", OrderStatus::Pending),
        ]);

        store.update_order_status("o1", OrderStatus::Cancelled);
        assert_eq!(store.find("o1").unwrap().status, OrderStatus::Cancelled);
        assert_eq!(store.find("o2").unwrap().status, OrderStatus::Pending);
    }

    #[test]
    fn missing_order_is_a_no_op() {
        let mut store = OrderStore::new();
        store.set_orders(vec![order("o1", OrderStatus::Pending)]);
        store.update_order_status("nope", OrderStatus::Cancelled);
        assert_eq!(store.find("o1").unwrap().status, OrderStatus::Pending);
    }
}
