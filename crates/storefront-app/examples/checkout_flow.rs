///  To run :
///  cargo r --example checkout_flow
///
///  Drives the full login -> browse -> cart -> checkout -> cancel flow
///  against a mocked backend.
use std::sync::Arc;

use httpmock::prelude::*;
use storefront_client::requests::CreateOrderRequest;
use storefront_client::ApiClient;
use storefront_session::build_token_storage;
use storefront_state::application::app_state::AppState;
use storefront_types::domain::cart::CartItem;
use storefront_types::domain::order::OrderStatus;
use storefront_types::domain::payment::PaymentStatus;
use storefront_types::forms::LoginForm;

fn user_json() -> serde_json::Value {
    serde_json::json!({
        "_id": "u1",
        "name": "Asha",
        "email": "asha@example.com",
        "role": "manager",
        "country": "IN",
        "createdAt": "2024-05-01T10:00:00Z",
        "updatedAt": "2024-05-01T10:00:00Z"
    })
}

fn menu_item_json(id: &str, price: f64) -> serde_json::Value {
    serde_json::json!({
        "_id": id,
        "name": "Masala Dosa",
        "description": "Crispy, with chutney",
        "price": price,
        "restaurantId": "r1",
        "createdAt": "2024-05-01T10:00:00Z",
        "updatedAt": "2024-05-01T10:00:00Z"
    })
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let server = MockServer::start();

    server.mock(|when, then| {
        when.method(POST).path("/auth/login");
        then.status(200).json_body(serde_json::json!({
            "token": "tok-1",
            "user": user_json()
        }));
    });
    server.mock(|when, then| {
        when.method(GET).path("/restaurants/r1");
        then.status(200).json_body(serde_json::json!({
            "restaurant": {
                "_id": "r1",
                "name": "Saffron",
                "description": "North Indian",
                "menuItemIds": ["m1"],
                "country": "IN",
                "createdAt": "2024-05-01T10:00:00Z",
                "updatedAt": "2024-05-01T10:00:00Z"
            },
            "menuItems": [menu_item_json("m1", 10.0)]
        }));
    });
    server.mock(|when, then| {
        when.method(POST).path("/orders");
        then.status(201).json_body(serde_json::json!({
            "_id": "o1",
            "items": [{
                "menuItem": menu_item_json("m1", 10.0),
                "quantity": 2,
                "restaurantId": "r1",
                "itemTotalPrice": 20.0
            }],
            "userId": "u1",
            "totalPrice": 20.0,
            "status": "pending",
            "country": "IN",
            "createdAt": "2024-05-02T09:00:00Z",
            "updatedAt": "2024-05-02T09:00:00Z"
        }));
    });
    server.mock(|when, then| {
        when.method(httpmock::Method::PUT).path("/orders/o1");
        then.status(200).json_body(serde_json::json!({
            "order": {
                "_id": "o1",
                "items": [{
                    "menuItem": menu_item_json("m1", 10.0),
                    "quantity": 2,
                    "restaurantId": "r1",
                    "itemTotalPrice": 20.0
                }],
                "userId": "u1",
                "totalPrice": 20.0,
                "status": "cancelled",
                "country": "IN",
                "createdAt": "2024-05-02T09:00:00Z",
                "updatedAt": "2024-05-02T09:05:00Z"
            },
            "payments": [{
                "_id": "p1",
                "menuItemIds": ["m1"],
                "restaurantId": "r1",
                "orderId": "o1",
                "amount": 20.0,
                "status": "cancelled",
                "paymentMethod": "upi",
                "createdAt": "2024-05-02T09:00:00Z",
                "updatedAt": "2024-05-02T09:05:00Z"
            }]
        }));
    });

    let tokens = build_token_storage(None)?;
    let client = ApiClient::new(&server.base_url(), Arc::new(tokens))?;
    let mut state = AppState::new();

    // Sign in.
    let auth = client
        .login(&LoginForm {
            email: "asha@example.com".into(),
            password: "secret-password".into(),
        })
        .await?;
    println!("signed in as {}", auth.user.name);
    state.user.set_user(auth.user);

    // Browse one restaurant and cache its menu.
    let detail = client.get_restaurant("r1").await?;
    println!(
        "{}: {} menu items",
        detail.restaurant.name,
        detail.menu_items.len()
    );
    state.menu.set_menu_items(detail.menu_items);

    // Two units of the dosa into the cart.
    let dosa = state.menu.menu_items()[0].clone();
    let country = detail.restaurant.country.clone();
    state.cart.add_to_cart(&country, CartItem::new(dosa, 2));
    println!("cart total: {:.2}", state.cart.total_price());
    assert_eq!(state.cart.total_price(), 20.0);

    // Checkout: snapshot the cart into an order.
    let user_id = state.user.user().expect("signed in").id.clone();
    let order = client
        .create_order(&CreateOrderRequest {
            items: state.cart.items().cloned().collect(),
            total_price: state.cart.total_price(),
            user_id,
            status: OrderStatus::Pending,
            country: Some(country),
        })
        .await?;
    println!("order {} placed, status {:?}", order.id, order.status);
    state.apply_checkout(order);
    assert!(state.cart.is_empty());

    // Cancel it again; the payment mirror follows the order outcome.
    let update = client.update_order("o1", OrderStatus::Cancelled).await?;
    state
        .orders
        .update_order_status("o1", update.order.status);
    state.payments.set_payments(update.payments);
    state
        .payments
        .sync_payment_status("o1", OrderStatus::Cancelled);
    println!(
        "order cancelled, payment status {:?}",
        state.payments.payments()[0].status
    );
    assert_eq!(
        state.orders.find("o1").map(|o| o.status),
        Some(OrderStatus::Cancelled)
    );
    assert_eq!(state.payments.payments()[0].status, PaymentStatus::Cancelled);

    Ok(())
}
