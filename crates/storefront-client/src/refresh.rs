//! Single-flight token refresh.
//!
//! Many requests can hit a 401 at once; only the first may call
//! `/auth/refresh-token`. The rest wait on the same gate and pick up the
//! token the winner stored. A failed refresh clears the stored token so the
//! waiters fail too instead of piling on further refresh calls.

use tokio::sync::Mutex;

use crate::error::ApiError;
use crate::ClientInner;

#[derive(Default)]
pub(crate) struct RefreshGate {
    flight: Mutex<()>,
}

impl ClientInner {
    /// Resolves a 401 observed with `observed` as the attached token (or
    /// none). Returns the token to retry with, or `SessionExpired` when the
    /// refresh is gone for good.
    pub(crate) async fn refresh_access_token(
        &self,
        observed: Option<&str>,
    ) -> Result<String, ApiError> {
        let _flight = self.gate.flight.lock().await;

        // Whoever held the gate before us may already have settled things.
        let current = self.tokens.get().await?;
        match (observed, current.as_deref()) {
            // Token rotated while we waited: use it.
            (Some(old), Some(cur)) if old != cur => return Ok(cur.to_owned()),
            (None, Some(cur)) => return Ok(cur.to_owned()),
            // Cleared while we waited: the refresh already failed.
            (Some(_), None) => return Err(ApiError::SessionExpired),
            _ => {}
        }

        match tokio::time::timeout(self.refresh_timeout, self.post_refresh()).await {
            Ok(Ok(token)) => {
                self.tokens.set(&token).await?;
                tracing::info!("access token refreshed");
                Ok(token)
            }
            Ok(Err(err)) => {
                tracing::warn!(error = %err, "token refresh failed; session expired");
                self.tokens.clear().await?;
                Err(ApiError::SessionExpired)
            }
            Err(_) => {
                tracing::warn!(
                    timeout_ms = %self.refresh_timeout.as_millis(),
                    "token refresh timed out; session expired"
                );
                self.tokens.clear().await?;
                Err(ApiError::SessionExpired)
            }
        }
    }

    async fn post_refresh(&self) -> Result<String, ApiError> {
        let url = self
            .base
            .join("auth/refresh-token")
            .map_err(|e| ApiError::InvalidUrl(e.to_string()))?;
        let res = self.http.post(url).send().await?;
        if !res.status().is_success() {
            return Err(ApiError::from_response(res).await);
        }
        let body: crate::requests::RefreshResponse = res
            .json()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))?;
        Ok(body.token)
    }
}
