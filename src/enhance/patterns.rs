use indexmap::IndexMap;

use crate::report::{Failure, FailureDigest, Feature, PatternCategory};

type Predicate = fn(&str, &str) -> bool;

// Ordered rule table over (lower-cased message, lower-cased type).
// The first matching category wins; anything unmatched is OtherFailures.
const RULES: &[(PatternCategory, Predicate)] = &[
    (PatternCategory::TimeoutFailures, |msg, ty| {
        msg.contains("timeout") || ty.contains("timeout")
    }),
    (PatternCategory::AssertionFailures, |msg, _| {
        msg.contains("assertion") || msg.contains("expected")
    }),
    (PatternCategory::ConnectionFailures, |msg, _| {
        msg.contains("connection") || msg.contains("unable to connect")
    }),
    (PatternCategory::AuthenticationFailures, |msg, _| {
        msg.contains("auth") || msg.contains("unauthorized") || msg.contains("401")
    }),
    (PatternCategory::DataValidationFailures, |msg, _| {
        msg.contains("validation") || msg.contains("invalid")
    }),
    (PatternCategory::NullPointerFailures, |msg, ty| {
        ty.contains("nullpointer") || msg.contains("null")
    }),
];

/// Group every failure across all features into its pattern category.
/// Output keeps the fixed priority order and drops empty categories.
pub fn classify_failures(features: &[Feature]) -> IndexMap<PatternCategory, Vec<FailureDigest>> {
    let mut patterns: IndexMap<PatternCategory, Vec<FailureDigest>> = PatternCategory::ALL
        .iter()
        .map(|category| (*category, Vec::new()))
        .collect();

    for feature in features {
        for failure in &feature.failures {
            patterns
                .entry(classify(failure))
                .or_default()
                .push(FailureDigest {
                    feature: feature.feature_name.clone(),
                    scenario: failure.scenario_name.clone(),
                    line: failure.line,
                    error: failure
                        .error_message
                        .clone()
                        .unwrap_or_else(|| "Unknown error".to_string()),
                });
        }
    }

    patterns.retain(|_, failures| !failures.is_empty());
    patterns
}

fn classify(failure: &Failure) -> PatternCategory {
    let message = failure
        .error_message
        .as_deref()
        .unwrap_or_default()
        .to_lowercase();
    let error_type = failure
        .error_type
        .as_deref()
        .unwrap_or_default()
        .to_lowercase();

    RULES
        .iter()
        .find(|(_, matches)| matches(&message, &error_type))
        .map_or(PatternCategory::OtherFailures, |(category, _)| *category)
}
