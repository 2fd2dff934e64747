use anyhow::Result;
use clap::{Parser, Subcommand};
use log::info;
use std::path::PathBuf;

use crate::enhance;
use crate::render;
use crate::report;

#[derive(Parser)]
#[command(name = "faillens")]
#[command(version, about = "Test Failure Report Tool", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Enrich a failure report with patterns, insights and retry hints
    Enhance {
        /// Input failure report JSON
        #[arg(short, long)]
        input: PathBuf,

        /// Output path for the enhanced report JSON
        #[arg(short, long)]
        output: PathBuf,

        /// Serenity report directory to link artifacts from
        #[arg(short, long)]
        serenity_report: Option<PathBuf>,
    },
    /// Render a failure report as a static HTML page
    Html {
        /// Input failure report JSON (plain or enhanced)
        #[arg(short, long)]
        input: PathBuf,

        /// Output path for the HTML document
        #[arg(short, long)]
        output: PathBuf,
    },
}

impl Cli {
    pub fn execute(&self) -> Result<()> {
        match &self.command {
            Commands::Enhance {
                input,
                output,
                serenity_report,
            } => {
                info!("Loading report from: {}", input.display());
                let mut report = report::load(input)?;

                enhance::enhance_report(&mut report, serenity_report.as_deref());

                report::save(output, &report)?;
                info!("Enhanced report written to: {}", output.display());

                Ok(())
            }
            Commands::Html { input, output } => {
                info!("Loading report from: {}", input.display());
                let report = report::load(input)?;

                let html = render::render_report(&report);

                std::fs::write(output, html)?;
                info!("HTML report written to: {}", output.display());

                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    fn sample_report() -> Value {
        json!({
            "metadata": {"buildNumber": "417", "environment": "staging", "duration": 45500},
            "summary": {
                "totalScenarios": 10,
                "passedScenarios": 7,
                "failedScenarios": 3,
                "skippedScenarios": 0
            },
            "features": [{
                "featureName": "Booking",
                "failures": [{
                    "scenarioName": "Create booking",
                    "line": 12,
                    "errorType": "java.net.SocketTimeoutException",
                    "errorMessage": "Read timeout after 30s"
                }]
            }]
        })
    }

    fn run(args: &[&str]) -> Result<()> {
        Cli::try_parse_from(args).unwrap().execute()
    }

    #[test]
    fn test_enhance_then_html_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("report.json");
        let enhanced = dir.path().join("enhanced.json");
        let html = dir.path().join("report.html");

        std::fs::write(&input, sample_report().to_string()).unwrap();

        run(&[
            "faillens",
            "enhance",
            "--input",
            input.to_str().unwrap(),
            "--output",
            enhanced.to_str().unwrap(),
        ])
        .unwrap();

        let value: Value =
            serde_json::from_str(&std::fs::read_to_string(&enhanced).unwrap()).unwrap();
        assert_eq!(value["failurePatternSummary"]["timeout_failures"], 1);
        assert!(value["enhancement"]["enhancedAt"].is_string());
        assert_eq!(value["metadata"]["duration"], 45500);

        run(&[
            "faillens",
            "html",
            "--input",
            enhanced.to_str().unwrap(),
            "--output",
            html.to_str().unwrap(),
        ])
        .unwrap();

        let page = std::fs::read_to_string(&html).unwrap();
        assert!(page.contains("Test Failure Analysis"));
        assert!(page.contains("Create booking"));
    }

    #[test]
    fn test_enhance_missing_input_fails() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.json");
        let output = dir.path().join("out.json");

        let result = run(&[
            "faillens",
            "enhance",
            "--input",
            missing.to_str().unwrap(),
            "--output",
            output.to_str().unwrap(),
        ]);

        assert!(result.is_err());
        assert!(!output.exists());
    }

    #[test]
    fn test_enhance_malformed_json_fails() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("broken.json");
        let output = dir.path().join("out.json");

        std::fs::write(&input, "{not json").unwrap();

        let result = run(&[
            "faillens",
            "enhance",
            "--input",
            input.to_str().unwrap(),
            "--output",
            output.to_str().unwrap(),
        ]);

        assert!(result.is_err());
        assert!(!output.exists());
    }

    #[test]
    fn test_enhance_with_serenity_report_dir() {
        let dir = tempfile::tempdir().unwrap();
        let serenity = tempfile::tempdir().unwrap();
        let input = dir.path().join("report.json");
        let output = dir.path().join("enhanced.json");

        std::fs::write(&input, sample_report().to_string()).unwrap();

        run(&[
            "faillens",
            "enhance",
            "--input",
            input.to_str().unwrap(),
            "--output",
            output.to_str().unwrap(),
            "--serenity-report",
            serenity.path().to_str().unwrap(),
        ])
        .unwrap();

        let value: Value =
            serde_json::from_str(&std::fs::read_to_string(&output).unwrap()).unwrap();
        assert_eq!(value["serenityArtifacts"]["screenshotsAvailable"], true);
    }

    #[test]
    fn test_html_renders_plain_unenhanced_report() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("report.json");
        let output = dir.path().join("report.html");

        std::fs::write(&input, sample_report().to_string()).unwrap();

        run(&[
            "faillens",
            "html",
            "--input",
            input.to_str().unwrap(),
            "--output",
            output.to_str().unwrap(),
        ])
        .unwrap();

        let page = std::fs::read_to_string(&output).unwrap();
        assert!(page.contains("Booking"));
        assert!(!page.contains("Actionable Insights"));
    }
}
