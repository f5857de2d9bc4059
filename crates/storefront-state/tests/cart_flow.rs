use chrono::Utc;
use storefront_state::application::cart_store::CartStore;
use storefront_types::domain::cart::{Cart, CartItem, CartState};
use storefront_types::domain::menu::MenuItem;

fn menu_item(id: &str, price: f64, restaurant_id: &str) -> MenuItem {
    let now = Utc::now();
    MenuItem {
        id: id.into(),
        name: format!("item {id}"),
        description: String::new(),
        price,
        restaurant_id: restaurant_id.into(),
        created_at: now,
        updated_at: now,
    }
}

// End-to-end cart walk: add, bump, drop, remove, checking every intermediate
// total.
#[test]
fn single_cart_walkthrough() {
    let mut store = CartStore::new();

    store.add_to_cart("IN", CartItem::new(menu_item("m1", 10.0, "r1"), 1));
    assert_eq!(store.total_price(), 10.0);

    store.add_quantity("m1");
    {
        let line = store.items().next().unwrap();
        assert_eq!(line.quantity, 2);
        assert_eq!(line.item_total_price, 20.0);
    }
    assert_eq!(store.total_price(), 20.0);

    store.remove_quantity("m1");
    {
        let line = store.items().next().unwrap();
        assert_eq!(line.quantity, 1);
        assert_eq!(line.item_total_price, 10.0);
    }
    assert_eq!(store.total_price(), 10.0);

    store.remove_from_cart("m1");
    assert!(store.is_empty());
    assert_eq!(store.total_price(), 0.0);
}

#[test]
fn removing_twice_changes_nothing() {
    let mut store = CartStore::new();
    store.add_to_cart("IN", CartItem::new(menu_item("m1", 10.0, "r1"), 1));
    store.add_to_cart("IN", CartItem::new(menu_item("m2", 4.0, "r1"), 2));

    store.remove_from_cart("m1");
    let snapshot = store.cart().clone();
    store.remove_from_cart("m1");
    assert_eq!(store.cart(), &snapshot);
    assert_eq!(store.total_price(), 8.0);
}

// A multi-country session: each mutation lands only in the matching cart.
#[test]
fn per_country_carts_stay_isolated() {
    let mut store = CartStore::new();
    store.set_cart(CartState::PerCountry(vec![
        Cart::empty("u1", "IN"),
        Cart::empty("u1", "US"),
    ]));

    store.add_to_cart("IN", CartItem::new(menu_item("in-1", 10.0, "r-in"), 1));
    store.add_to_cart("US", CartItem::new(menu_item("us-1", 8.0, "r-us"), 1));

    let us_before = store.cart().carts()[1].clone();

    store.add_quantity("in-1");
    store.remove_quantity("in-1");
    store.remove_from_cart("in-1");

    let carts = store.cart().carts();
    assert!(carts[0].items.is_empty());
    assert_eq!(carts[0].total_price, 0.0);
    assert_eq!(carts[1], us_before);
    assert_eq!(store.total_price(), 8.0);
}

#[test]
fn totals_hold_across_mixed_quantities() {
    let mut store = CartStore::new();
    store.add_to_cart("IN", CartItem::new(menu_item("m1", 2.5, "r1"), 2));
    store.add_to_cart("IN", CartItem::new(menu_item("m1", 2.5, "r1"), 3));
    store.add_to_cart("IN", CartItem::new(menu_item("m2", 1.25, "r1"), 4));

    let lines: Vec<_> = store.items().collect();
    assert_eq!(lines[0].quantity, 5);
    assert_eq!(lines[0].item_total_price, 12.5);
    assert_eq!(lines[1].item_total_price, 5.0);
    assert_eq!(
        store.total_price(),
        lines.iter().map(|l| l.item_total_price).sum::<f64>()
    );
}
