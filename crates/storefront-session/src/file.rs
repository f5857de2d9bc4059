use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use storefront_types::ports::token_store::{TokenStore, TokenStoreError};

/// Token holder backed by a small JSON document with an `accessToken` key,
/// surviving process restarts the way browser local storage does.
#[derive(Clone)]
pub struct FileTokenStore {
    path: Arc<PathBuf>,
}

#[derive(Serialize, Deserialize, Default)]
struct SessionFile {
    #[serde(rename = "accessToken", skip_serializing_if = "Option::is_none")]
    access_token: Option<String>,
}

impl FileTokenStore {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: Arc::new(path.as_ref().to_path_buf()),
        }
    }

    async fn read_session(&self) -> Result<SessionFile, TokenStoreError> {
        match tokio::fs::read(self.path.as_ref()).await {
            Ok(bytes) => serde_json::from_slice(&bytes)
                .map_err(|e| TokenStoreError::Storage(e.to_string())),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(SessionFile::default()),
            Err(e) => Err(TokenStoreError::Storage(e.to_string())),
        }
    }

    async fn write_session(&self, session: &SessionFile) -> Result<(), TokenStoreError> {
        let bytes =
            serde_json::to_vec_pretty(session).map_err(|e| TokenStoreError::Storage(e.to_string()))?;
        tokio::fs::write(self.path.as_ref(), bytes)
            .await
            .map_err(|e| TokenStoreError::Storage(e.to_string()))
    }
}

#[async_trait]
impl TokenStore for FileTokenStore {
    async fn get(&self) -> Result<Option<String>, TokenStoreError> {
        Ok(self.read_session().await?.access_token)
    }

    async fn set(&self, token: &str) -> Result<(), TokenStoreError> {
        self.write_session(&SessionFile {
            access_token: Some(token.to_owned()),
        })
        .await
    }

    async fn clear(&self) -> Result<(), TokenStoreError> {
        match tokio::fs::remove_file(self.path.as_ref()).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(TokenStoreError::Storage(e.to_string())),
        }
    }
}
