use crate::models::{Meeting, Policy, ResultKind, SearchResult};

/// Caps for the degraded path: a handful of title matches, meetings first.
const MAX_FALLBACK_MEETINGS: usize = 3;
const MAX_FALLBACK_POLICIES: usize = 2;

/// Summary shown when a record has no usable description.
const NO_DESCRIPTION: &str = "No description available";

/// Case-insensitive substring search over record titles.
///
/// Runs when the model reply yields no usable result array. Matching is a
/// containment test on the title only, keeping store order (newest first):
/// up to 3 meetings, then up to 2 policies. Fallback results carry no
/// relevance score.
pub fn fallback_results(
    query: &str,
    meetings: &[Meeting],
    policies: &[Policy],
) -> Vec<SearchResult> {
    let needle = query.to_lowercase();

    let mut results: Vec<SearchResult> = meetings
        .iter()
        .filter(|m| m.title.to_lowercase().contains(&needle))
        .take(MAX_FALLBACK_MEETINGS)
        .map(|m| SearchResult {
            kind: ResultKind::Meeting,
            title: m.title.clone(),
            summary: non_empty(&m.description)
                .or_else(|| non_empty(&m.summary))
                .unwrap_or(NO_DESCRIPTION)
                .to_string(),
            relevance: None,
        })
        .collect();

    results.extend(
        policies
            .iter()
            .filter(|p| p.title.to_lowercase().contains(&needle))
            .take(MAX_FALLBACK_POLICIES)
            .map(|p| SearchResult {
                kind: ResultKind::Policy,
                title: p.title.clone(),
                summary: non_empty(&p.description)
                    .unwrap_or(NO_DESCRIPTION)
                    .to_string(),
                relevance: None,
            }),
    );

    results
}

/// Blank strings in nullable columns count the same as missing ones.
fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.trim().is_empty())
}
