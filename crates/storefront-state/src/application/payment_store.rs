use storefront_types::domain::order::OrderStatus;
use storefront_types::domain::payment::{Payment, PaymentMethod, PaymentStatus};

/// Cache of payments, keyed to orders by `order_id`; one order may carry a
/// payment per restaurant/country split.
#[derive(Debug, Clone, Default)]
pub struct PaymentStore {
    payments: Vec<Payment>,
}

impl PaymentStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn payments(&self) -> &[Payment] {
        &self.payments
    }

    pub fn set_payments(&mut self, payments: Vec<Payment>) {
        self.payments = payments;
    }

    /// Applies an order outcome to that order's payments through the explicit
    /// order-to-payment status mapping.
    pub fn sync_payment_status(&mut self, order_id: &str, order_status: OrderStatus) {
        let status = PaymentStatus::from_order_outcome(order_status);
        for payment in &mut self.payments {
            if payment.order_id == order_id {
                payment.status = status;
            }
        }
    }

    pub fn update_payment_method(&mut self, payment_id: &str, method: PaymentMethod) {
        for payment in &mut self.payments {
            if payment.id == payment_id {
                payment.payment_method = method;
            }
        }
    }

    pub fn payments_for_order<'a>(
        &'a self,
        order_id: &'a str,
    ) -> impl Iterator<Item = &'a Payment> {
        self.payments
            .iter()
            .filter(move |payment| payment.order_id == order_id)
    }
}
