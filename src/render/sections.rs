use indexmap::IndexMap;

use super::{format_duration, html_escape};
use crate::report::{Failure, Feature, Insight, Metadata, PatternCategory, Step, Summary};

pub fn render_header(metadata: &Metadata, timestamp: &str) -> String {
    format!(
        r#"<header>
    <h1>🔍 Test Failure Analysis</h1>
    <div class="metadata">
        <div class="metadata-item">
            <span class="metadata-label">Build:</span>
            <span>{build}</span>
        </div>
        <div class="metadata-item">
            <span class="metadata-label">Environment:</span>
            <span>{environment}</span>
        </div>
        <div class="metadata-item">
            <span class="metadata-label">Duration:</span>
            <span>{duration}</span>
        </div>
        <div class="metadata-item">
            <span class="metadata-label">Generated:</span>
            <span>{timestamp}</span>
        </div>
    </div>
</header>"#,
        build = html_escape(metadata.build_number.as_deref().unwrap_or("Unknown")),
        environment = html_escape(metadata.environment.as_deref().unwrap_or("default")),
        duration = format_duration(metadata.duration),
    )
}

pub fn render_summary(summary: &Summary) -> String {
    format!(
        r#"<div class="summary">
    <div class="summary-card">
        <h3>Total Scenarios</h3>
        <div class="value">{total}</div>
    </div>
    <div class="summary-card passed">
        <h3>Passed</h3>
        <div class="value">{passed}</div>
    </div>
    <div class="summary-card failed">
        <h3>Failed</h3>
        <div class="value">{failed}</div>
    </div>
    <div class="summary-card skipped">
        <h3>Skipped</h3>
        <div class="value">{skipped}</div>
    </div>
</div>"#,
        total = summary.total_scenarios,
        passed = summary.passed_scenarios,
        failed = summary.failed_scenarios,
        skipped = summary.skipped_scenarios,
    )
}

pub fn render_insights(insights: &[Insight]) -> String {
    if insights.is_empty() {
        return String::new();
    }

    let blocks: String = insights
        .iter()
        .map(|insight| {
            format!(
                r#"<div class="insight {class}">
    <div class="insight-header">
        <span class="insight-type">{kind}</span>
        <span class="insight-severity {class}">{severity}</span>
    </div>
    <div>{message}</div>
    <div class="insight-recommendation"><strong>Recommendation:</strong> {recommendation}</div>
</div>
"#,
                class = insight.severity.css_class(),
                kind = insight.kind.label(),
                severity = insight.severity.label(),
                message = html_escape(&insight.message),
                recommendation = html_escape(&insight.recommendation),
            )
        })
        .collect();

    format!(
        r#"<div class="insights">
    <h2>📊 Actionable Insights</h2>
    {blocks}
</div>"#
    )
}

pub fn render_patterns(patterns: Option<&IndexMap<PatternCategory, usize>>) -> String {
    let Some(patterns) = patterns.filter(|patterns| !patterns.is_empty()) else {
        return String::new();
    };

    let cards: String = patterns
        .iter()
        .map(|(category, count)| {
            format!(
                r#"<div class="pattern-card">
    <h4>{label}</h4>
    <div class="pattern-count">{count}</div>
</div>
"#,
                label = category.label(),
            )
        })
        .collect();

    format!(
        r#"<div class="patterns">
    <h2>🎯 Failure Patterns</h2>
    <div class="pattern-grid">
        {cards}
    </div>
</div>"#
    )
}

pub fn render_failures(features: &[Feature]) -> String {
    let entries: Vec<String> = features
        .iter()
        .flat_map(|feature| {
            feature
                .failures
                .iter()
                .map(|failure| render_failure(&feature.feature_name, failure))
        })
        .collect();

    if entries.is_empty() {
        return String::new();
    }

    format!(
        r#"<div class="failures">
    <h2>❌ Failed Scenarios ({count})</h2>
    {entries}
</div>"#,
        count = entries.len(),
        entries = entries.join("\n"),
    )
}

fn render_failure(feature_name: &str, failure: &Failure) -> String {
    let tags = if failure.tags.is_empty() {
        String::new()
    } else {
        let chips: String = failure
            .tags
            .iter()
            .map(|tag| format!(r#"<span class="tag">{}</span>"#, html_escape(tag)))
            .collect();
        format!(r#"<div class="failure-tags">{chips}</div>"#)
    };

    let error_block = failure
        .error_message
        .as_deref()
        .map(|message| {
            format!(
                r#"<div class="error-message">❌ {}</div>"#,
                html_escape(message)
            )
        })
        .unwrap_or_default();

    let stacktrace_block = failure
        .stack_trace
        .as_deref()
        .map(|trace| format!(r#"<div class="stacktrace">{}</div>"#, html_escape(trace)))
        .unwrap_or_default();

    format!(
        r#"<div class="failure-item">
    <div class="failure-header">
        <div>
            <div class="failure-title">{scenario}</div>
            <div class="failure-meta">
                <span>📁 {feature}</span>
                <span>📍 Line {line}</span>
                <span>⏱️ {duration}</span>
            </div>
            {tags}
        </div>
        <span class="toggle-icon">▼</span>
    </div>
    <div class="failure-details">
        {error_block}
        {steps_block}
        {stacktrace_block}
    </div>
</div>"#,
        scenario = html_escape(&failure.scenario_name),
        feature = html_escape(feature_name),
        line = failure.line,
        duration = format_duration(failure.duration),
        steps_block = render_steps(&failure.steps),
    )
}

fn render_steps(steps: &[Step]) -> String {
    if steps.is_empty() {
        return String::new();
    }

    let items: String = steps
        .iter()
        .map(|step| {
            let status = step.status.as_deref().unwrap_or("UNKNOWN").to_lowercase();
            let error_line = step
                .error_message
                .as_deref()
                .map(|message| {
                    format!(
                        r#"<div class="step-error">Error: {}</div>"#,
                        html_escape(message)
                    )
                })
                .unwrap_or_default();

            format!(
                r#"<div class="step {class}">
    <span class="step-keyword">{keyword}</span>
    <span>{text}</span>
    {error_line}
</div>
"#,
                class = html_escape(&status),
                keyword = html_escape(&step.keyword),
                text = html_escape(&step.text),
            )
        })
        .collect();

    format!(
        r#"<div class="steps">
    <h4>Test Steps:</h4>
    {items}
</div>"#
    )
}

pub fn render_footer(timestamp: &str) -> String {
    format!(
        r#"<footer>
    Generated by FailLens | {timestamp}
</footer>"#
    )
}
