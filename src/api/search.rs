use axum::extract::State;
use axum::http::{header, HeaderMap};
use axum::Json;

use crate::auth;
use crate::error::SearchError;
use crate::llm::{extract, rank};
use crate::models::{SearchRequest, SearchResponse};
use crate::search::fallback;
use crate::state::AppState;
use crate::store;

/// POST /search - AI-assisted search over the caller's meetings and policies:
///   1. Validate the query and the Authorization header
///   2. Resolve the caller against the auth service
///   3. Fetch the newest 50 meetings and 50 policies concurrently
///   4. Ask the model to rank them for the query
///   5. Parse the reply, or fall back to a title substring filter
pub async fn search(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(req): Json<SearchRequest>,
) -> Result<Json<SearchResponse>, SearchError> {
    // ── Step 1: Validation ───────────────────────────────────
    let query = req.query.trim().to_string();
    if query.is_empty() {
        return Err(SearchError::MissingQuery);
    }

    let auth_header = headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .filter(|v| !v.is_empty())
        .ok_or(SearchError::MissingAuth)?
        .to_string();

    // ── Step 2: Caller verification ──────────────────────────
    let user = auth::verify_user(&state.http_client, &state.config.store, &auth_header).await?;
    tracing::debug!("search request from user {}", user.id);

    // ── Step 3: Concurrent record fetch ──────────────────────
    // Both queries forward the caller's token, so the store only returns
    // rows this user is allowed to see.
    let (meetings, policies) = tokio::try_join!(
        store::fetch_meetings(&state.http_client, &state.config.store, &auth_header),
        store::fetch_policies(&state.http_client, &state.config.store, &auth_header),
    )?;

    // ── Step 4: Model ranking ────────────────────────────────
    let reply = rank::rank_records(
        &state.http_client,
        &state.config.model,
        &query,
        &meetings,
        &policies,
    )
    .await?;

    // ── Step 5: Parse, or fall back ──────────────────────────
    let (results, degraded) = match extract::extract_result_array(&reply) {
        Some(results) => (results, false),
        None => {
            tracing::warn!("model reply unusable, serving substring fallback");
            (fallback::fallback_results(&query, &meetings, &policies), true)
        }
    };

    tracing::info!(
        "search complete: {} results from {} meetings + {} policies (degraded: {degraded})",
        results.len(),
        meetings.len(),
        policies.len(),
    );

    Ok(Json(SearchResponse { results, degraded }))
}
