use crate::models::SearchResult;

/// Hard cap on how many results the model path may return.
pub const MAX_MODEL_RESULTS: usize = 5;

/// Pull a JSON array of results out of a model reply.
///
/// Replies arrive wrapped in prose or markdown fences more often than not,
/// so this takes the substring from the first `[` to the last `]` and tries
/// to parse that. Anything that does not yield a well-formed array returns
/// `None`, and the caller falls back to the substring filter. An empty
/// array is a legitimate parse, not a failure.
pub fn extract_result_array(content: &str) -> Option<Vec<SearchResult>> {
    let start = content.find('[')?;
    let end = content.rfind(']')?;
    if end < start {
        return None;
    }

    match serde_json::from_str::<Vec<SearchResult>>(&content[start..=end]) {
        Ok(results) => Some(results.into_iter().take(MAX_MODEL_RESULTS).collect()),
        Err(e) => {
            tracing::warn!("model reply carried no parseable result array: {e}");
            None
        }
    }
}
