use serde::{Deserialize, Serialize};

use crate::config::ModelConfig;
use crate::error::SearchError;
use crate::models::{Meeting, Policy};

/// Fixed instruction sent with every ranking request.
const SYSTEM_PROMPT: &str =
    "You are an AI assistant that helps search and retrieve information from organizational \
     meetings and policies. Analyze the user's query and return the most relevant results from \
     the provided data. Return your response as a JSON array of results with: type \
     (meeting/policy), title, summary, and relevance score.";

#[derive(Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
}

#[derive(Serialize)]
struct ChatMessage {
    role: String,
    content: String,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: Option<ReplyMessage>,
}

#[derive(Deserialize)]
struct ReplyMessage {
    content: Option<String>,
}

/// Ask the model to rank the fetched records against the query.
///
/// Returns the raw reply text; pulling the result array out of it is a
/// separate step so a malformed reply can fall back without failing the
/// request. A reply that carries no content at all (empty `choices`, null
/// content) comes back as an empty string and takes the same fallback
/// path. Quota statuses (429, 402) map to dedicated errors so the handler
/// can forward them to the caller.
pub async fn rank_records(
    client: &reqwest::Client,
    model: &ModelConfig,
    query: &str,
    meetings: &[Meeting],
    policies: &[Policy],
) -> Result<String, SearchError> {
    let req = ChatRequest {
        model: model.chat_model.clone(),
        messages: build_messages(query, meetings, policies),
    };

    let resp = client
        .post(model.chat_completions_url())
        .header(
            reqwest::header::AUTHORIZATION,
            format!("Bearer {}", model.api_key),
        )
        .json(&req)
        .send()
        .await?;

    let status = resp.status();
    if !status.is_success() {
        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(SearchError::RateLimited);
        }
        if status == reqwest::StatusCode::PAYMENT_REQUIRED {
            return Err(SearchError::PaymentRequired);
        }
        let body = resp.text().await.unwrap_or_default();
        return Err(SearchError::Model { status, body });
    }

    let body: ChatResponse = resp.json().await?;
    Ok(body
        .choices
        .into_iter()
        .next()
        .and_then(|c| c.message)
        .and_then(|m| m.content)
        .unwrap_or_else(|| {
            tracing::warn!("model reply carried no content");
            String::new()
        }))
}

/// Build the two-message prompt: the fixed system instruction plus a user
/// turn embedding the query and both record sets as JSON.
fn build_messages(query: &str, meetings: &[Meeting], policies: &[Policy]) -> Vec<ChatMessage> {
    let context = serde_json::json!({
        "meetings": meetings,
        "policies": policies,
    });

    vec![
        ChatMessage {
            role: "system".to_string(),
            content: SYSTEM_PROMPT.to_string(),
        },
        ChatMessage {
            role: "user".to_string(),
            content: format!(
                "User query: \"{query}\"\n\nAvailable data:\n{context}\n\n\
                 Return the top 5 most relevant results as JSON array."
            ),
        },
    ]
}
