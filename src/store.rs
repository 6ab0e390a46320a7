//! Row fetches from the hosted data store, scoped to the caller.

use serde::de::DeserializeOwned;

use crate::config::StoreConfig;
use crate::error::SearchError;
use crate::models::{Meeting, Policy};

/// Newest-first row cap for each table. Keeps the ranking prompt bounded.
pub const FETCH_LIMIT: usize = 50;

/// Fetch the caller's newest meetings.
pub async fn fetch_meetings(
    client: &reqwest::Client,
    store: &StoreConfig,
    auth_header: &str,
) -> Result<Vec<Meeting>, SearchError> {
    fetch_rows(client, store, auth_header, "meetings").await
}

/// Fetch the caller's newest policies.
pub async fn fetch_policies(
    client: &reqwest::Client,
    store: &StoreConfig,
    auth_header: &str,
) -> Result<Vec<Policy>, SearchError> {
    fetch_rows(client, store, auth_header, "policies").await
}

/// Fetch the newest `FETCH_LIMIT` rows of one table.
///
/// The forwarded `Authorization` header makes the store apply the caller's
/// row-level visibility; the anon key alone grants nothing.
async fn fetch_rows<T: DeserializeOwned>(
    client: &reqwest::Client,
    store: &StoreConfig,
    auth_header: &str,
    table: &str,
) -> Result<Vec<T>, SearchError> {
    let limit = FETCH_LIMIT.to_string();
    let resp = client
        .get(store.rest_url(table))
        .query(&[
            ("select", "*"),
            ("order", "created_at.desc"),
            ("limit", limit.as_str()),
        ])
        .header("apikey", &store.anon_key)
        .header(reqwest::header::AUTHORIZATION, auth_header)
        .send()
        .await?;

    if !resp.status().is_success() {
        let status = resp.status();
        let body = resp.text().await.unwrap_or_default();
        return Err(SearchError::Store { status, body });
    }

    Ok(resp.json::<Vec<T>>().await?)
}
