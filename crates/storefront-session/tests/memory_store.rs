#![cfg(feature = "memory")]

use storefront_session::memory::MemoryTokenStore;
use storefront_types::ports::token_store::TokenStore;

#[tokio::test]
async fn set_get_clear_round_trip() {
    let store = MemoryTokenStore::new();
    assert!(store.get().await.unwrap().is_none());

    store.set("tok-1").await.unwrap();
    assert_eq!(store.get().await.unwrap().as_deref(), Some("tok-1"));

    store.set("tok-2").await.unwrap();
    assert_eq!(store.get().await.unwrap().as_deref(), Some("tok-2"));

    store.clear().await.unwrap();
    assert!(store.get().await.unwrap().is_none());
}

#[tokio::test]
async fn clones_share_the_same_token() {
    let store = MemoryTokenStore::new();
    let other = store.clone();
    store.set("shared").await.unwrap();
    assert_eq!(other.get().await.unwrap().as_deref(), Some("shared"));
}
