//! Configuration file support for audit-report.
//!
//! Provides YAML-based configuration through `audit-report.config.yml`
//! files and merges it with command-line options. Precedence is
//! command line, then config file, then built-in defaults.

use anyhow::{bail, Context};
use audit_report::prelude::{AwsConnection, PollSchedule, ReportSettings, Result};
use audit_report::audit_reporting::domain::poll_schedule::{
    DEFAULT_POLL_INTERVAL_SECS, DEFAULT_POLL_TIMEOUT_SECS,
};
use audit_report::audit_reporting::domain::report::{
    DEFAULT_REPORT_DESCRIPTION, DEFAULT_REPORT_NAME,
};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::cli::Args;

pub const CONFIG_FILENAME: &str = "audit-report.config.yml";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub region: Option<String>,
    pub profile: Option<String>,
    pub endpoint_url: Option<String>,
    pub output_dir: Option<PathBuf>,
    pub report_name: Option<String>,
    pub report_description: Option<String>,
    pub poll_interval_secs: Option<u64>,
    pub poll_timeout_secs: Option<u64>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    let config: ConfigFile = if content.trim().is_empty() {
        ConfigFile::default()
    } else {
        serde_yaml_ng::from_str(&content).with_context(|| {
            format!(
                "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
                path.display()
            )
        })?
    };

    validate_config(&config)?;
    warn_unknown_fields(&config);

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    eprintln!("📄 Auto-discovered config file: {}", config_path.display());
    Ok(Some(config))
}

/// Validate the loaded configuration.
fn validate_config(config: &ConfigFile) -> Result<()> {
    if config.poll_interval_secs == Some(0) {
        bail!(
            "Invalid config: poll_interval_secs must be greater than zero.\n\n\
             💡 Hint: The default is {} seconds.",
            DEFAULT_POLL_INTERVAL_SECS
        );
    }
    if config.poll_timeout_secs == Some(0) {
        bail!(
            "Invalid config: poll_timeout_secs must be greater than zero.\n\n\
             💡 Hint: The default is {} seconds.",
            DEFAULT_POLL_TIMEOUT_SECS
        );
    }
    if let Some(name) = &config.report_name {
        if name.trim().is_empty() {
            bail!("Invalid config: report_name must not be empty.");
        }
    }
    Ok(())
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    for key in config.unknown_fields.keys() {
        eprintln!(
            "⚠️  Warning: Unknown config field '{}' will be ignored.",
            key
        );
    }
}

/// Settings of one run after merging options, config file and defaults.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub connection: AwsConnection,
    pub output_dir: PathBuf,
    pub report_settings: ReportSettings,
    pub poll_schedule: PollSchedule,
}

impl Settings {
    pub fn resolve(args: &Args, config: Option<ConfigFile>) -> Result<Self> {
        let config = config.unwrap_or_default();

        let connection = AwsConnection {
            region: args.region.clone().or(config.region),
            profile: args.profile.clone().or(config.profile),
            endpoint_url: args.endpoint_url.clone().or(config.endpoint_url),
        };

        let output_dir = args
            .output_dir
            .clone()
            .or(config.output_dir)
            .unwrap_or_else(|| PathBuf::from("."));

        let report_settings = ReportSettings::new(
            args.report_name
                .clone()
                .or(config.report_name)
                .unwrap_or_else(|| DEFAULT_REPORT_NAME.to_string()),
            args.report_description
                .clone()
                .or(config.report_description)
                .unwrap_or_else(|| DEFAULT_REPORT_DESCRIPTION.to_string()),
        )?;

        let poll_schedule = PollSchedule::from_secs(
            args.poll_interval
                .or(config.poll_interval_secs)
                .unwrap_or(DEFAULT_POLL_INTERVAL_SECS),
            args.poll_timeout
                .or(config.poll_timeout_secs)
                .unwrap_or(DEFAULT_POLL_TIMEOUT_SECS),
        )?;

        Ok(Self {
            connection,
            output_dir,
            report_settings,
            poll_schedule,
        })
    }
}
