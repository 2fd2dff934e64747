mod sections;

use chrono::Local;

use crate::report::Report;

/// Render a report (plain or enhanced) as one self-contained HTML document
/// with embedded CSS and a local collapse/expand script.
pub fn render_report(report: &Report) -> String {
    let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S").to_string();
    let build = report.metadata.build_number.as_deref().unwrap_or("Unknown");

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Test Failure Analysis - Build {build}</title>
    <style>{css}</style>
</head>
<body>
    <div class="container">
        {header}
        {summary}
        {insights}
        {patterns}
        {failures}
        {footer}
    </div>
    <script>{js}</script>
</body>
</html>"#,
        build = html_escape(build),
        css = inline_css(),
        js = inline_javascript(),
        header = sections::render_header(&report.metadata, &timestamp),
        summary = sections::render_summary(&report.summary),
        insights =
            sections::render_insights(report.actionable_insights.as_deref().unwrap_or_default()),
        patterns = sections::render_patterns(report.failure_pattern_summary.as_ref()),
        failures = sections::render_failures(&report.features),
        footer = sections::render_footer(&timestamp),
    )
}

/// Escape HTML special characters in user-controlled text.
fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Format a millisecond duration as a short human-readable value.
fn format_duration(ms: Option<u64>) -> String {
    let Some(ms) = ms.filter(|ms| *ms > 0) else {
        return "N/A".to_string();
    };

    #[allow(clippy::cast_precision_loss)]
    let seconds = ms as f64 / 1000.0;
    if seconds < 60.0 {
        return format!("{seconds:.1}s");
    }

    let minutes = seconds / 60.0;
    if minutes < 60.0 {
        return format!("{minutes:.1}m");
    }

    format!("{:.1}h", minutes / 60.0)
}

fn inline_css() -> &'static str {
    r#"
* {
    margin: 0;
    padding: 0;
    box-sizing: border-box;
}

body {
    font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, "Helvetica Neue", Arial, sans-serif;
    background: #f5f5f5;
    color: #333;
    line-height: 1.6;
}

.container {
    max-width: 1400px;
    margin: 0 auto;
    padding: 20px;
}

header {
    background: linear-gradient(135deg, #667eea 0%, #764ba2 100%);
    color: white;
    padding: 30px;
    border-radius: 10px;
    margin-bottom: 30px;
    box-shadow: 0 4px 6px rgba(0,0,0,0.1);
}

header h1 {
    font-size: 28px;
    margin-bottom: 10px;
}

.metadata {
    display: grid;
    grid-template-columns: repeat(auto-fit, minmax(200px, 1fr));
    gap: 10px;
    font-size: 14px;
    opacity: 0.9;
}

.metadata-item {
    display: flex;
    gap: 8px;
}

.metadata-label {
    font-weight: 600;
}

.summary {
    display: grid;
    grid-template-columns: repeat(auto-fit, minmax(200px, 1fr));
    gap: 20px;
    margin-bottom: 30px;
}

.summary-card {
    background: white;
    padding: 20px;
    border-radius: 8px;
    box-shadow: 0 2px 4px rgba(0,0,0,0.1);
    border-left: 4px solid #667eea;
}

.summary-card.failed {
    border-left-color: #ef4444;
}

.summary-card.passed {
    border-left-color: #10b981;
}

.summary-card.skipped {
    border-left-color: #f59e0b;
}

.summary-card h3 {
    font-size: 14px;
    color: #666;
    margin-bottom: 8px;
    text-transform: uppercase;
    letter-spacing: 0.5px;
}

.summary-card .value {
    font-size: 36px;
    font-weight: 700;
    color: #333;
}

.insights {
    background: white;
    padding: 25px;
    border-radius: 8px;
    margin-bottom: 30px;
    box-shadow: 0 2px 4px rgba(0,0,0,0.1);
}

.insights h2 {
    font-size: 20px;
    margin-bottom: 20px;
    color: #333;
}

.insight {
    padding: 15px;
    margin-bottom: 15px;
    border-radius: 6px;
    border-left: 4px solid;
}

.insight.critical {
    background: #fee;
    border-left-color: #ef4444;
}

.insight.high {
    background: #fef3c7;
    border-left-color: #f59e0b;
}

.insight.medium {
    background: #dbeafe;
    border-left-color: #3b82f6;
}

.insight.info {
    background: #d1fae5;
    border-left-color: #10b981;
}

.insight-header {
    display: flex;
    justify-content: space-between;
    align-items: center;
    margin-bottom: 8px;
}

.insight-type {
    font-weight: 600;
    font-size: 14px;
}

.insight-severity {
    display: inline-block;
    padding: 2px 8px;
    border-radius: 3px;
    font-size: 11px;
    font-weight: 600;
    text-transform: uppercase;
}

.insight-severity.critical {
    background: #ef4444;
    color: white;
}

.insight-severity.high {
    background: #f59e0b;
    color: white;
}

.insight-severity.medium {
    background: #3b82f6;
    color: white;
}

.insight-severity.info {
    background: #10b981;
    color: white;
}

.insight-recommendation {
    margin-top: 8px;
    font-size: 13px;
    opacity: 0.8;
}

.failures {
    background: white;
    padding: 25px;
    border-radius: 8px;
    margin-bottom: 30px;
    box-shadow: 0 2px 4px rgba(0,0,0,0.1);
}

.failures h2 {
    font-size: 20px;
    margin-bottom: 20px;
    color: #333;
}

.failure-item {
    border: 1px solid #e5e7eb;
    border-radius: 6px;
    margin-bottom: 20px;
    overflow: hidden;
}

.failure-header {
    background: #f9fafb;
    padding: 15px;
    cursor: pointer;
    display: flex;
    justify-content: space-between;
    align-items: center;
}

.failure-header:hover {
    background: #f3f4f6;
}

.failure-title {
    font-weight: 600;
    color: #333;
}

.failure-meta {
    display: flex;
    gap: 15px;
    font-size: 12px;
    color: #666;
    margin-top: 5px;
}

.failure-tags {
    margin-top: 5px;
}

.tag {
    display: inline-block;
    background: #e0e7ff;
    color: #4338ca;
    padding: 2px 8px;
    border-radius: 3px;
    font-size: 11px;
    margin-right: 5px;
}

.failure-details {
    padding: 20px;
    border-top: 1px solid #e5e7eb;
    background: #fafafa;
}

.error-message {
    background: #fff;
    border-left: 4px solid #ef4444;
    padding: 15px;
    border-radius: 4px;
    margin-bottom: 15px;
    font-family: 'Monaco', 'Courier New', monospace;
    font-size: 13px;
    color: #dc2626;
}

.steps {
    margin-top: 15px;
}

.step {
    padding: 10px;
    margin-bottom: 8px;
    border-radius: 4px;
    font-size: 13px;
}

.step.passed {
    background: #f0fdf4;
    border-left: 3px solid #10b981;
}

.step.failed {
    background: #fef2f2;
    border-left: 3px solid #ef4444;
}

.step.skipped {
    background: #fef9f3;
    border-left: 3px solid #f59e0b;
}

.step-keyword {
    font-weight: 600;
    margin-right: 8px;
}

.step-error {
    margin-top: 5px;
    color: #dc2626;
    font-size: 12px;
}

.stacktrace {
    background: #1f2937;
    color: #e5e7eb;
    padding: 15px;
    border-radius: 4px;
    font-family: 'Monaco', 'Courier New', monospace;
    font-size: 12px;
    overflow-x: auto;
    margin-top: 10px;
    max-height: 300px;
    overflow-y: auto;
    white-space: pre-wrap;
}

.patterns {
    background: white;
    padding: 25px;
    border-radius: 8px;
    margin-bottom: 30px;
    box-shadow: 0 2px 4px rgba(0,0,0,0.1);
}

.pattern-grid {
    display: grid;
    grid-template-columns: repeat(auto-fit, minmax(300px, 1fr));
    gap: 15px;
    margin-top: 15px;
}

.pattern-card {
    border: 1px solid #e5e7eb;
    border-radius: 6px;
    padding: 15px;
}

.pattern-card h4 {
    font-size: 14px;
    margin-bottom: 10px;
    color: #666;
}

.pattern-count {
    font-size: 24px;
    font-weight: 700;
    color: #ef4444;
    margin-bottom: 10px;
}

footer {
    text-align: center;
    padding: 20px;
    color: #666;
    font-size: 12px;
}

.toggle-icon {
    transition: transform 0.3s;
}

.toggle-icon.expanded {
    transform: rotate(180deg);
}
"#
}

fn inline_javascript() -> &'static str {
    r#"
document.querySelectorAll('.failure-header').forEach(header => {
    header.addEventListener('click', () => {
        const details = header.nextElementSibling;
        const icon = header.querySelector('.toggle-icon');

        if (details.style.display === 'none' || !details.style.display) {
            details.style.display = 'block';
            icon.classList.add('expanded');
        } else {
            details.style.display = 'none';
            icon.classList.remove('expanded');
        }
    });
});

document.querySelectorAll('.failure-details').forEach(details => {
    details.style.display = 'none';
});
"#
}
