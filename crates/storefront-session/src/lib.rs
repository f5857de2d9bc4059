#[cfg(not(any(feature = "memory", feature = "file")))]
compile_error!("Enable a token storage feature: `memory` or `file`.");

use async_trait::async_trait;
use storefront_types::ports::token_store::{TokenStore, TokenStoreError};

#[cfg(feature = "file")]
pub mod file;
#[cfg(feature = "memory")]
pub mod memory;

/// Token storage selected at build time, the client-side analog of browser
/// storage holding the `accessToken` key.
pub struct TokenStorage {
    #[cfg(feature = "memory")]
    memory: memory::MemoryTokenStore,
    #[cfg(feature = "file")]
    file: file::FileTokenStore,
}

pub fn build_token_storage(path: Option<&str>) -> anyhow::Result<TokenStorage> {
    TokenStorage::build(path)
}

impl TokenStorage {
    #[cfg(all(feature = "memory", not(feature = "file")))]
    pub fn build(_: Option<&str>) -> anyhow::Result<Self> {
        Ok(Self {
            memory: memory::MemoryTokenStore::new(),
        })
    }

    #[cfg(all(feature = "file", not(feature = "memory")))]
    pub fn build(path: Option<&str>) -> anyhow::Result<Self> {
        let path = path.unwrap_or(".storefront-session.json");
        Ok(Self {
            file: file::FileTokenStore::new(path),
        })
    }

    // If both features are enabled, the file copy is authoritative.
    #[cfg(all(feature = "memory", feature = "file"))]
    pub fn build(path: Option<&str>) -> anyhow::Result<Self> {
        let memory = memory::MemoryTokenStore::new();
        let path = path.unwrap_or(".storefront-session.json");
        let file = file::FileTokenStore::new(path);
        Ok(Self { memory, file })
    }
}

#[cfg(all(feature = "memory", not(feature = "file")))]
#[async_trait]
impl TokenStore for TokenStorage {
    async fn get(&self) -> Result<Option<String>, TokenStoreError> {
        self.memory.get().await
    }

    async fn set(&self, token: &str) -> Result<(), TokenStoreError> {
        self.memory.set(token).await
    }

    async fn clear(&self) -> Result<(), TokenStoreError> {
        self.memory.clear().await
    }
}

#[cfg(all(feature = "file", not(feature = "memory")))]
#[async_trait]
impl TokenStore for TokenStorage {
    async fn get(&self) -> Result<Option<String>, TokenStoreError> {
        self.file.get().await
    }

    async fn set(&self, token: &str) -> Result<(), TokenStoreError> {
        self.file.set(token).await
    }

    async fn clear(&self) -> Result<(), TokenStoreError> {
        self.file.clear().await
    }
}

#[cfg(all(feature = "memory", feature = "file"))]
#[async_trait]
impl TokenStore for TokenStorage {
    async fn get(&self) -> Result<Option<String>, TokenStoreError> {
        if let Some(token) = self.memory.get().await? {
            return Ok(Some(token));
        }
        self.file.get().await
    }

    async fn set(&self, token: &str) -> Result<(), TokenStoreError> {
        self.memory.set(token).await?;
        self.file.set(token).await
    }

    async fn clear(&self) -> Result<(), TokenStoreError> {
        self.memory.clear().await?;
        self.file.clear().await
    }
}
