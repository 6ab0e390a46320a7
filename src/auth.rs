//! Caller verification against the hosted auth service.

use serde::Deserialize;
use uuid::Uuid;

use crate::config::StoreConfig;
use crate::error::SearchError;

/// The caller as resolved by the auth service.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthenticatedUser {
    pub id: Uuid,
    #[serde(default)]
    pub email: Option<String>,
}

/// Resolve the caller's bearer token to a user.
///
/// The raw `Authorization` header value is forwarded unchanged; the store
/// later uses the same token to scope row visibility to this user. Any
/// answer from the auth service that is not a parseable user counts as a
/// rejected credential. Transport failures are not: those surface as
/// generic upstream errors.
pub async fn verify_user(
    client: &reqwest::Client,
    store: &StoreConfig,
    auth_header: &str,
) -> Result<AuthenticatedUser, SearchError> {
    let resp = client
        .get(store.auth_user_url())
        .header("apikey", &store.anon_key)
        .header(reqwest::header::AUTHORIZATION, auth_header)
        .send()
        .await?;

    if !resp.status().is_success() {
        tracing::warn!("auth service rejected credential: {}", resp.status());
        return Err(SearchError::Unauthorized);
    }

    match resp.json::<AuthenticatedUser>().await {
        Ok(user) => Ok(user),
        Err(e) => {
            tracing::warn!("auth service returned an unparseable user: {e}");
            Err(SearchError::Unauthorized)
        }
    }
}
