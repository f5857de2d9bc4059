use std::sync::Arc;
use std::time::Duration;

use storefront_client::config::Config;
use storefront_client::ApiClient;
use storefront_session::build_token_storage;
use storefront_state::application::app_state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env for STOREFRONT_API_URL / STOREFRONT_TOKEN_FILE when present.
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(std::env::var("RUST_LOG").unwrap_or_else(|_| "debug".to_string()))
        .init();

    let config = Config::from_env()?;
    let tokens = build_token_storage(config.token_file.as_deref())?;
    let client = ApiClient::builder(&config.api_url, Arc::new(tokens))?
        .with_refresh_timeout(Duration::from_secs(config.refresh_timeout_secs))
        .build()?;

    let mut state = AppState::new();

    // Resume the previous session when a stored token is still good.
    match client.me().await {
        Ok(profile) => {
            tracing::info!(user = %profile.user.name, "session restored");
            state.apply_profile(profile.user, profile.cart);
        }
        Err(err) => tracing::info!(error = %err, "no active session"),
    }

    let restaurants = client.list_restaurants().await?;
    tracing::info!(count = restaurants.len(), "restaurants fetched");
    state.restaurants.set_restaurants(restaurants);

    for restaurant in state.restaurants.restaurants() {
        println!(
            "{} [{}] {}",
            restaurant.name, restaurant.country, restaurant.description
        );
    }
    if let Some(user) = state.user.user() {
        println!("signed in as {} ({:?})", user.name, user.role);
        println!("cart total: {:.2}", state.cart.total_price());
    }

    Ok(())
}
