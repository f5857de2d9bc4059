use async_trait::async_trait;

#[derive(thiserror::Error, Debug)]
pub enum TokenStoreError {
    #[error("token storage error: {0}")]
    Storage(String),
}

/// Process-wide holder of the current bearer token. The HTTP client reads it
/// on every request; login, refresh, and logout write it.
#[async_trait]
pub trait TokenStore: Send + Sync + 'static {
    async fn get(&self) -> Result<Option<String>, TokenStoreError>;
    async fn set(&self, token: &str) -> Result<(), TokenStoreError>;
    async fn clear(&self) -> Result<(), TokenStoreError>;
}
