//! `admyrrand init`: write a commented default configuration file.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Default configuration. Every value matches the built-in default.
pub const DEFAULT_CONFIG_YAML: &str = r#"# Admyrrand dashboard configuration.
#
# Every key is optional; omitted keys take the values shown here.
# ADMYRRAND_PORT overrides dashboard.port at startup.

dashboard:
  # Interface to bind. 0.0.0.0 exposes the dashboard to other hosts.
  host: "127.0.0.1"
  port: 8080
  # Product name in the navigation bar and page titles.
  brand: "Admyrrand Analytics"
  # Rows per page in paginated tables.
  page_size: 10

notifications:
  # Display time for toasts without a positive duration of their own.
  default_duration_ms: 5000
  # Closing animation length before a toast is removed.
  exit_animation_ms: 200
  # Delay between a page load and its "loaded" toast.
  page_load_delay_ms: 1000
  announce_page_loads: true

logging:
  # tracing EnvFilter directive. RUST_LOG takes precedence.
  filter: "info"
  ansi: true
"#;

/// Write [`DEFAULT_CONFIG_YAML`] to `path`.
///
/// Refuses to replace an existing file unless `force` is set.
pub fn run(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        anyhow::bail!(
            "{} already exists. Use --force to overwrite.",
            path.display()
        );
    }

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }
    fs::write(path, DEFAULT_CONFIG_YAML)
        .with_context(|| format!("Failed to write {}", path.display()))?;

    println!("✅ Wrote {}", path.display());
    println!();
    println!("Next steps:");
    println!("  admyrrand check --config {}", path.display());
    println!("  admyrrand run --config {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use admyrrand_core::AdmyrrandConfig;

    #[test]
    fn test_template_matches_defaults() {
        let config = AdmyrrandConfig::from_yaml(DEFAULT_CONFIG_YAML).unwrap();
        assert_eq!(config, AdmyrrandConfig::default());
    }

    #[test]
    fn test_writes_file_that_passes_check() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("conf").join("admyrrand.yaml");

        run(&path, false).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), DEFAULT_CONFIG_YAML);

        let results = crate::commands::check::check_file(&path).unwrap();
        assert!(results.findings.is_empty(), "{:?}", results.findings);
    }

    #[test]
    fn test_refuses_to_overwrite_without_force() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("admyrrand.yaml");
        fs::write(&path, "dashboard:\n  port: 9000\n").unwrap();

        let err = run(&path, false).unwrap_err();
        assert!(err.to_string().contains("--force"));
        assert_eq!(fs::read_to_string(&path).unwrap(), "dashboard:\n  port: 9000\n");

        run(&path, true).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), DEFAULT_CONFIG_YAML);
    }
}
