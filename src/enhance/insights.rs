use indexmap::IndexMap;

use crate::report::{Insight, InsightKind, PatternCategory, Severity, Summary};

/// Derive the ordered insight list: success short-circuit, then failure-rate
/// thresholds, then pattern-count checks in a fixed sequence.
pub fn generate_insights(
    summary: &Summary,
    patterns: &IndexMap<PatternCategory, usize>,
) -> Vec<Insight> {
    let failed = summary.failed_scenarios;

    if failed == 0 {
        return vec![Insight {
            kind: InsightKind::Success,
            severity: Severity::Info,
            message: "All tests passed successfully. No action required.".to_string(),
            recommendation: "Monitor for consistency in future runs.".to_string(),
        }];
    }

    let mut insights = Vec::new();

    let total = summary.total_scenarios;
    if total > 0 {
        #[allow(clippy::cast_precision_loss)]
        let failure_rate = (failed as f64 / total as f64) * 100.0;

        if failure_rate > 50.0 {
            insights.push(Insight {
                kind: InsightKind::HighFailureRate,
                severity: Severity::Critical,
                message: format!("{failure_rate:.1}% of tests failed ({failed}/{total})"),
                recommendation: "Investigate environment issues or recent code changes. \
                                 This indicates systemic problems."
                    .to_string(),
            });
        } else if failure_rate > 20.0 {
            insights.push(Insight {
                kind: InsightKind::ModerateFailureRate,
                severity: Severity::High,
                message: format!("{failure_rate:.1}% of tests failed ({failed}/{total})"),
                recommendation: "Review failed scenarios for common patterns.".to_string(),
            });
        }
    }

    let count = |category| patterns.get(&category).copied().unwrap_or(0);

    let timeouts = count(PatternCategory::TimeoutFailures);
    if timeouts > 2 {
        insights.push(Insight {
            kind: InsightKind::TimeoutPattern,
            severity: Severity::High,
            message: format!("{timeouts} timeout failures detected"),
            recommendation: "Check application response times, database performance, or \
                             increase timeout thresholds."
                .to_string(),
        });
    }

    let auth = count(PatternCategory::AuthenticationFailures);
    if auth > 0 {
        insights.push(Insight {
            kind: InsightKind::AuthPattern,
            severity: Severity::High,
            message: format!("{auth} authentication failures detected"),
            recommendation: "Verify test credentials and authentication endpoints are \
                             working correctly."
                .to_string(),
        });
    }

    let connections = count(PatternCategory::ConnectionFailures);
    if connections > 0 {
        insights.push(Insight {
            kind: InsightKind::ConnectionPattern,
            severity: Severity::Critical,
            message: format!("{connections} connection failures detected"),
            recommendation: "Check network connectivity, service availability, and \
                             firewall rules."
                .to_string(),
        });
    }

    let null_pointers = count(PatternCategory::NullPointerFailures);
    if null_pointers > 0 {
        insights.push(Insight {
            kind: InsightKind::NpePattern,
            severity: Severity::Medium,
            message: format!("{null_pointers} null pointer exceptions detected"),
            recommendation: "Review test data setup and null handling in step definitions."
                .to_string(),
        });
    }

    insights
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(total: usize, failed: usize) -> Summary {
        Summary {
            total_scenarios: total,
            passed_scenarios: total.saturating_sub(failed),
            failed_scenarios: failed,
            skipped_scenarios: 0,
            extra: serde_json::Map::new(),
        }
    }

    fn patterns(entries: &[(PatternCategory, usize)]) -> IndexMap<PatternCategory, usize> {
        entries.iter().copied().collect()
    }

    #[test]
    fn test_zero_failures_yields_single_success_insight() {
        let insights = generate_insights(&summary(10, 0), &IndexMap::new());

        assert_eq!(insights.len(), 1);
        assert_eq!(insights[0].kind, InsightKind::Success);
        assert_eq!(insights[0].severity, Severity::Info);
    }

    #[test]
    fn test_sixty_percent_failure_rate_is_critical() {
        let insights = generate_insights(&summary(10, 6), &IndexMap::new());

        assert_eq!(insights.len(), 1);
        assert_eq!(insights[0].kind, InsightKind::HighFailureRate);
        assert_eq!(insights[0].severity, Severity::Critical);
        assert_eq!(insights[0].message, "60.0% of tests failed (6/10)");
    }

    #[test]
    fn test_thirty_percent_failure_rate_is_moderate() {
        let insights = generate_insights(&summary(10, 3), &IndexMap::new());

        assert_eq!(insights.len(), 1);
        assert_eq!(insights[0].kind, InsightKind::ModerateFailureRate);
        assert_eq!(insights[0].severity, Severity::High);
        assert_eq!(insights[0].message, "30.0% of tests failed (3/10)");
    }

    #[test]
    fn test_ten_percent_failure_rate_emits_no_rate_insight() {
        let insights = generate_insights(&summary(10, 1), &IndexMap::new());

        assert!(insights.is_empty());
    }

    #[test]
    fn test_exactly_fifty_percent_is_moderate_not_critical() {
        let insights = generate_insights(&summary(10, 5), &IndexMap::new());

        assert_eq!(insights[0].kind, InsightKind::ModerateFailureRate);
    }

    #[test]
    fn test_zero_total_skips_rate_insight() {
        let insights = generate_insights(&summary(0, 3), &IndexMap::new());

        assert!(insights.is_empty());
    }

    #[test]
    fn test_timeout_pattern_needs_more_than_two() {
        let two = generate_insights(
            &summary(10, 1),
            &patterns(&[(PatternCategory::TimeoutFailures, 2)]),
        );
        let three = generate_insights(
            &summary(10, 1),
            &patterns(&[(PatternCategory::TimeoutFailures, 3)]),
        );

        assert!(two.is_empty());
        assert_eq!(three.len(), 1);
        assert_eq!(three[0].kind, InsightKind::TimeoutPattern);
        assert_eq!(three[0].message, "3 timeout failures detected");
    }

    #[test]
    fn test_single_auth_connection_or_npe_failure_triggers_insight() {
        let insights = generate_insights(
            &summary(10, 1),
            &patterns(&[
                (PatternCategory::AuthenticationFailures, 1),
                (PatternCategory::ConnectionFailures, 1),
                (PatternCategory::NullPointerFailures, 1),
            ]),
        );

        let kinds: Vec<_> = insights.iter().map(|i| i.kind).collect();
        assert_eq!(
            kinds,
            vec![
                InsightKind::AuthPattern,
                InsightKind::ConnectionPattern,
                InsightKind::NpePattern,
            ]
        );
        assert_eq!(insights[1].severity, Severity::Critical);
        assert_eq!(insights[2].severity, Severity::Medium);
    }

    #[test]
    fn test_rate_insight_comes_before_pattern_insights() {
        let insights = generate_insights(
            &summary(10, 6),
            &patterns(&[
                (PatternCategory::TimeoutFailures, 4),
                (PatternCategory::ConnectionFailures, 2),
            ]),
        );

        let kinds: Vec<_> = insights.iter().map(|i| i.kind).collect();
        assert_eq!(
            kinds,
            vec![
                InsightKind::HighFailureRate,
                InsightKind::TimeoutPattern,
                InsightKind::ConnectionPattern,
            ]
        );
    }
}
