mod artifacts;
mod categories;
mod insights;
mod patterns;
mod retry;

use std::path::Path;

use chrono::Utc;
use indexmap::IndexMap;
use log::info;

use crate::report::{Enhancement, PatternCategory, Report};

/// Annotate a report with every derived field: classification maps,
/// actionable insights, retry verdicts and optional Serenity artifact links.
pub fn enhance_report(report: &mut Report, serenity_report: Option<&Path>) {
    info!("Enhancing report with additional context...");

    report.enhancement = Some(Enhancement {
        enhanced_at: Utc::now(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    });

    let failure_patterns = patterns::classify_failures(&report.features);
    let pattern_summary: IndexMap<PatternCategory, usize> = failure_patterns
        .iter()
        .map(|(category, failures)| (*category, failures.len()))
        .collect();

    let error_categories = categories::categorize_errors(&report.features);
    let category_summary: IndexMap<String, usize> = error_categories
        .iter()
        .map(|(error_type, occurrences)| (error_type.clone(), occurrences.len()))
        .collect();

    report.actionable_insights = Some(insights::generate_insights(
        &report.summary,
        &pattern_summary,
    ));
    report.retry_suggestions = Some(retry::suggest_retries(&report.features));

    report.failure_patterns = Some(failure_patterns);
    report.failure_pattern_summary = Some(pattern_summary);
    report.error_categories = Some(error_categories);
    report.error_category_summary = Some(category_summary);

    // Keep any previously linked artifacts when no directory is supplied.
    if let Some(linked) = artifacts::link_serenity_artifacts(serenity_report) {
        report.serenity_artifacts = Some(linked);
    }

    info!("Enhancement complete");
}
