//! `admyrrand check` command implementation.
//!
//! Validates a configuration file:
//! - JSON Schema validation against the embedded `AdmyrrandConfig` schema
//! - Semantic checks the schema cannot express (timing relationships,
//!   log directive syntax, exposed bind address)

use anyhow::{Context, Result};
use serde_json::Value as JsonValue;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

use admyrrand_core::AdmyrrandConfig;

use super::config_path;

/// Compiled into the binary so validation works without external files.
const CONFIG_SCHEMA: &str = include_str!("../../../../schemas/AdmyrrandConfig.schema.json");

// ============================================================================
// Check Result Types
// ============================================================================

/// Severity level for check results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    Info,
    Warning,
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Info => write!(f, "INFO"),
            Severity::Warning => write!(f, "WARN"),
            Severity::Error => write!(f, "ERROR"),
        }
    }
}

/// A single check finding.
#[derive(Debug, Clone)]
pub struct CheckFinding {
    pub severity: Severity,
    /// Check that produced this finding, e.g. `json-schema`.
    pub category: &'static str,
    pub message: String,
    /// Location within the file, e.g. `/notifications/exit_animation_ms`.
    pub location: Option<String>,
}

impl CheckFinding {
    fn error(category: &'static str, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            category,
            message: message.into(),
            location: None,
        }
    }

    fn warning(category: &'static str, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            ..Self::error(category, message)
        }
    }

    fn info(category: &'static str, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Info,
            ..Self::error(category, message)
        }
    }

    fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }
}

/// Results from running all checks.
#[derive(Debug, Default)]
pub struct CheckResults {
    pub findings: Vec<CheckFinding>,
}

impl CheckResults {
    fn count(&self, severity: Severity) -> usize {
        self.findings.iter().filter(|f| f.severity == severity).count()
    }

    pub fn has_errors(&self) -> bool {
        self.count(Severity::Error) > 0
    }

    pub fn error_count(&self) -> usize {
        self.count(Severity::Error)
    }

    pub fn warning_count(&self) -> usize {
        self.count(Severity::Warning)
    }

    /// Print a human-readable summary, most severe first.
    pub fn print_summary(&self, file: &Path) {
        println!("Checking {}", file.display());

        let mut sorted: Vec<&CheckFinding> = self.findings.iter().collect();
        sorted.sort_by(|a, b| b.severity.cmp(&a.severity).then(a.category.cmp(&b.category)));

        if !sorted.is_empty() {
            println!("{}", "─".repeat(60));
        }
        for finding in sorted {
            print_finding(finding);
        }

        println!("{}", "═".repeat(60));
        if self.error_count() == 0 && self.warning_count() == 0 {
            println!("✅ All checks passed!");
        } else {
            println!(
                "Summary: {} error(s), {} warning(s)",
                self.error_count(),
                self.warning_count()
            );
        }
    }
}

fn print_finding(finding: &CheckFinding) {
    let icon = match finding.severity {
        Severity::Error => "✗",
        Severity::Warning => "⚠",
        Severity::Info => "ℹ",
    };
    let location = finding
        .location
        .as_deref()
        .map(|l| format!(" [{l}]"))
        .unwrap_or_default();

    println!(
        "  {icon} {} [{}]{location}: {}",
        finding.severity, finding.category, finding.message
    );
}

// ============================================================================
// Main Check Runner
// ============================================================================

/// Check the configuration file and print the findings.
///
/// Fails when the file cannot be found or has errors.
pub fn run(config: Option<PathBuf>) -> Result<()> {
    let Some(path) = config_path(config.as_deref()) else {
        anyhow::bail!(
            "No configuration file to check. Pass --config, set ADMYRRAND_CONFIG, \
             or run `admyrrand init`."
        );
    };

    let results = check_file(&path)?;
    results.print_summary(&path);

    if results.has_errors() {
        anyhow::bail!(
            "Configuration has {} error(s) that must be fixed",
            results.error_count()
        );
    }
    Ok(())
}

/// Run every check against `path` without printing.
pub fn check_file(path: &Path) -> Result<CheckResults> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;
    let is_toml = path.extension().is_some_and(|e| e == "toml");
    Ok(check_content(&content, is_toml))
}

fn check_content(content: &str, is_toml: bool) -> CheckResults {
    let mut results = CheckResults::default();

    let document = match parse_document(content, is_toml) {
        Ok(doc) => doc,
        Err(message) => {
            results.findings.push(CheckFinding::error("parse", message));
            return results;
        }
    };

    // 1. JSON Schema validation
    results.findings.extend(validate_against_schema(&document));
    if results.has_errors() {
        return results;
    }

    // 2. Semantic checks on the typed configuration
    let parsed = if is_toml {
        AdmyrrandConfig::from_toml(content)
    } else {
        AdmyrrandConfig::from_yaml(content)
    };
    match parsed {
        Ok(config) => results.findings.extend(semantic_checks(&config)),
        Err(e) => results.findings.push(CheckFinding::error("parse", e.to_string())),
    }

    results
}

/// Parse YAML or TOML into a JSON value. An empty YAML document is `{}`.
fn parse_document(content: &str, is_toml: bool) -> Result<JsonValue, String> {
    if is_toml {
        let value: toml::Table =
            toml::from_str(content).map_err(|e| format!("Invalid TOML: {e}"))?;
        serde_json::to_value(value).map_err(|e| format!("Cannot convert TOML: {e}"))
    } else {
        if content.trim().is_empty() {
            return Ok(JsonValue::Object(Default::default()));
        }
        serde_yaml::from_str(content).map_err(|e| format!("Invalid YAML: {e}"))
    }
}

fn validate_against_schema(document: &JsonValue) -> Vec<CheckFinding> {
    let schema: JsonValue = match serde_json::from_str(CONFIG_SCHEMA) {
        Ok(s) => s,
        Err(e) => {
            return vec![CheckFinding::error(
                "json-schema",
                format!("Embedded schema is not valid JSON: {e}"),
            )];
        }
    };

    let compiled = match jsonschema::validator_for(&schema) {
        Ok(c) => c,
        Err(e) => {
            return vec![CheckFinding::error(
                "json-schema",
                format!("Failed to compile JSON schema: {e}"),
            )];
        }
    };

    compiled
        .iter_errors(document)
        .map(|error| {
            let path = error.instance_path().to_string();
            let location = if path.is_empty() { "(root)".to_string() } else { path };
            CheckFinding::error("json-schema", error.to_string()).with_location(location)
        })
        .collect()
}

fn semantic_checks(config: &AdmyrrandConfig) -> Vec<CheckFinding> {
    let mut findings = Vec::new();

    if let Err(e) = config.validate() {
        findings.push(CheckFinding::error("config", e.to_string()));
    }

    let n = &config.notifications;
    if n.exit_animation_ms == 0 {
        findings.push(
            CheckFinding::warning("notifications", "Toasts are removed without a closing animation")
                .with_location("/notifications/exit_animation_ms"),
        );
    }
    if n.exit_animation_ms >= n.default_duration_ms {
        findings.push(
            CheckFinding::warning(
                "notifications",
                format!(
                    "Closing animation ({} ms) is not shorter than the default display time ({} ms)",
                    n.exit_animation_ms, n.default_duration_ms
                ),
            )
            .with_location("/notifications/exit_animation_ms"),
        );
    }
    if !n.announce_page_loads {
        findings.push(
            CheckFinding::info("notifications", "Page-load announcements are disabled")
                .with_location("/notifications/announce_page_loads"),
        );
    }

    if let Err(e) = EnvFilter::try_new(&config.logging.filter) {
        findings.push(
            CheckFinding::error(
                "logging",
                format!("Invalid filter directive '{}': {e}", config.logging.filter),
            )
            .with_location("/logging/filter"),
        );
    }

    if config.dashboard.host == "0.0.0.0" || config.dashboard.host == "::" {
        findings.push(
            CheckFinding::warning(
                "dashboard",
                "Dashboard listens on all interfaces and has no authentication",
            )
            .with_location("/dashboard/host"),
        );
    }

    findings
}
