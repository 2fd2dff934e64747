use crate::report::{Feature, RetrySuggestion};

// Message fragments that point at an environmental cause rather than a
// deterministic bug.
const TRANSIENT_KEYWORDS: &[&str] = &[
    "timeout",
    "connection",
    "temporarily unavailable",
    "service unavailable",
    "network",
    "503",
    "504",
];

/// Emit a retry verdict for every failure, in document traversal order.
pub fn suggest_retries(features: &[Feature]) -> Vec<RetrySuggestion> {
    let mut suggestions = Vec::new();

    for feature in features {
        for failure in &feature.failures {
            let message = failure
                .error_message
                .as_deref()
                .unwrap_or_default()
                .to_lowercase();
            let transient = TRANSIENT_KEYWORDS
                .iter()
                .any(|keyword| message.contains(keyword));

            suggestions.push(RetrySuggestion {
                feature: feature.feature_name.clone(),
                scenario: failure.scenario_name.clone(),
                line: failure.line,
                tags: failure.tags.clone(),
                should_retry: transient,
                reason: if transient {
                    "Transient failure detected".to_string()
                } else {
                    "Deterministic failure - requires fix".to_string()
                },
            });
        }
    }

    suggestions
}
