//! CLI command implementations for the Admyrrand dashboard.

pub mod check;
pub mod init;
pub mod run;

use std::path::{Path, PathBuf};

use admyrrand_core::AdmyrrandConfig;
use admyrrand_core::config::DEFAULT_CONFIG_FILE;

/// Which configuration file a command should read.
///
/// An explicit path wins, then `ADMYRRAND_CONFIG`, then `./admyrrand.yaml`
/// when it exists. `None` means run on defaults.
pub fn config_path(explicit: Option<&Path>) -> Option<PathBuf> {
    AdmyrrandConfig::resolve_path(explicit).or_else(|| {
        let local = PathBuf::from(DEFAULT_CONFIG_FILE);
        local.exists().then_some(local)
    })
}
