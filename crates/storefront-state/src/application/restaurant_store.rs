use storefront_types::domain::restaurant::Restaurant;

/// Restaurants known to the client.
#[derive(Debug, Clone, Default)]
pub struct RestaurantStore {
    restaurants: Vec<Restaurant>,
}

impl RestaurantStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn restaurants(&self) -> &[Restaurant] {
        &self.restaurants
    }

    pub fn set_restaurants(&mut self, restaurants: Vec<Restaurant>) {
        self.restaurants = restaurants;
    }

    pub fn push(&mut self, restaurant: Restaurant) {
        self.restaurants.push(restaurant);
    }

    pub fn find(&self, restaurant_id: &str) -> Option<&Restaurant> {
        self.restaurants.iter().find(|r| r.id == restaurant_id)
    }
}
