use std::path::Path;

use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::Result;

/// A test-run failure report. Producers emit `metadata`, `summary` and
/// `features`; the enhancer fills in the derived fields. Fields this model
/// does not know about are kept in `extra` so they survive a round-trip.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    #[serde(default)]
    pub metadata: Metadata,
    #[serde(default)]
    pub summary: Summary,
    #[serde(default)]
    pub features: Vec<Feature>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enhancement: Option<Enhancement>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failure_patterns: Option<IndexMap<PatternCategory, Vec<FailureDigest>>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failure_pattern_summary: Option<IndexMap<PatternCategory, usize>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_categories: Option<IndexMap<String, Vec<ErrorOccurrence>>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_category_summary: Option<IndexMap<String, usize>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actionable_insights: Option<Vec<Insight>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub retry_suggestions: Option<Vec<RetrySuggestion>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub serenity_artifacts: Option<SerenityArtifacts>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, Value>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Metadata {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub build_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub environment: Option<String>,
    /// Total run duration in milliseconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<u64>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, Value>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    #[serde(default)]
    pub total_scenarios: usize,
    #[serde(default)]
    pub passed_scenarios: usize,
    #[serde(default)]
    pub failed_scenarios: usize,
    #[serde(default)]
    pub skipped_scenarios: usize,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Feature {
    pub feature_name: String,
    #[serde(default)]
    pub failures: Vec<Failure>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Failure {
    pub scenario_name: String,
    pub line: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stack_trace: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub steps: Vec<Step>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    /// Scenario duration in milliseconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<u64>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Step {
    #[serde(default)]
    pub keyword: String,
    #[serde(default)]
    pub text: String,
    /// Raw runner status (PASSED, FAILED, SKIPPED, PENDING, ...). Carried
    /// through verbatim; the renderer lower-cases it for styling.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, Value>,
}

/// Stamp recording when and by which version a report was enhanced.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Enhancement {
    pub enhanced_at: DateTime<Utc>,
    pub version: String,
}

/// Fixed failure classification, ordered by matching priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PatternCategory {
    TimeoutFailures,
    AssertionFailures,
    ConnectionFailures,
    AuthenticationFailures,
    DataValidationFailures,
    NullPointerFailures,
    OtherFailures,
}

impl PatternCategory {
    /// All categories in matching priority order.
    pub const ALL: [Self; 7] = [
        Self::TimeoutFailures,
        Self::AssertionFailures,
        Self::ConnectionFailures,
        Self::AuthenticationFailures,
        Self::DataValidationFailures,
        Self::NullPointerFailures,
        Self::OtherFailures,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::TimeoutFailures => "Timeout Failures",
            Self::AssertionFailures => "Assertion Failures",
            Self::ConnectionFailures => "Connection Failures",
            Self::AuthenticationFailures => "Authentication Failures",
            Self::DataValidationFailures => "Data Validation Failures",
            Self::NullPointerFailures => "Null Pointer Failures",
            Self::OtherFailures => "Other Failures",
        }
    }
}

/// One classified failure inside `failurePatterns`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FailureDigest {
    pub feature: String,
    pub scenario: String,
    pub line: u64,
    pub error: String,
}

/// One failure occurrence inside `errorCategories`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorOccurrence {
    pub feature: String,
    pub scenario: String,
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Insight {
    #[serde(rename = "type")]
    pub kind: InsightKind,
    pub severity: Severity,
    pub message: String,
    pub recommendation: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InsightKind {
    Success,
    HighFailureRate,
    ModerateFailureRate,
    TimeoutPattern,
    AuthPattern,
    ConnectionPattern,
    NpePattern,
}

impl InsightKind {
    pub fn label(self) -> &'static str {
        match self {
            Self::Success => "SUCCESS",
            Self::HighFailureRate => "HIGH_FAILURE_RATE",
            Self::ModerateFailureRate => "MODERATE_FAILURE_RATE",
            Self::TimeoutPattern => "TIMEOUT_PATTERN",
            Self::AuthPattern => "AUTH_PATTERN",
            Self::ConnectionPattern => "CONNECTION_PATTERN",
            Self::NpePattern => "NPE_PATTERN",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Severity {
    Critical,
    High,
    Medium,
    Info,
}

impl Severity {
    pub fn label(self) -> &'static str {
        match self {
            Self::Critical => "CRITICAL",
            Self::High => "HIGH",
            Self::Medium => "MEDIUM",
            Self::Info => "INFO",
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            Self::Critical => "critical",
            Self::High => "high",
            Self::Medium => "medium",
            Self::Info => "info",
        }
    }
}

/// One retry verdict inside `retrySuggestions`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RetrySuggestion {
    pub feature: String,
    pub scenario: String,
    pub line: u64,
    pub tags: Vec<String>,
    pub should_retry: bool,
    pub reason: String,
}

/// Placeholder artifact record attached when a Serenity report directory is
/// supplied. Matching screenshots to steps needs the Serenity JSON contract.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SerenityArtifacts {
    pub screenshots_available: bool,
    pub serenity_report_path: String,
    pub note: String,
}

pub fn load(path: &Path) -> Result<Report> {
    let contents = std::fs::read_to_string(path)?;
    let report = serde_json::from_str(&contents)?;

    Ok(report)
}

pub fn save(path: &Path, report: &Report) -> Result<()> {
    let json = serde_json::to_string_pretty(report)?;
    std::fs::write(path, json)?;

    Ok(())
}
