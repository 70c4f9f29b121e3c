use clap::Parser;
use std::path::PathBuf;

/// Generate an AWS Audit Manager assessment report containing one day of evidence
///
/// Values that are not given as options are asked for interactively.
#[derive(Parser, Debug)]
#[command(name = "audit-report")]
#[command(version)]
#[command(about = "Generate an AWS Audit Manager assessment report containing one day of evidence", long_about = None)]
pub struct Args {
    /// Assessment ID (UUID); prompted for when omitted
    #[arg(short, long, value_name = "UUID")]
    pub assessment_id: Option<String>,

    /// Evidence date (YYYY-MM-DD); prompted for when omitted
    #[arg(short = 'd', long, value_name = "DATE")]
    pub evidence_date: Option<String>,

    /// Directory the report is downloaded to (defaults to the current directory)
    #[arg(short, long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Path to a config file (defaults to ./audit-report.config.yml when present)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// AWS region
    #[arg(long)]
    pub region: Option<String>,

    /// AWS profile name
    #[arg(long)]
    pub profile: Option<String>,

    /// Custom Audit Manager endpoint URL
    #[arg(long, value_name = "URL")]
    pub endpoint_url: Option<String>,

    /// Seconds between two report status reads
    #[arg(long, value_name = "SECS", value_parser = clap::value_parser!(u64).range(1..))]
    pub poll_interval: Option<u64>,

    /// Maximum seconds to wait for the report
    #[arg(long, value_name = "SECS", value_parser = clap::value_parser!(u64).range(1..))]
    pub poll_timeout: Option<u64>,

    /// Name given to the created report
    #[arg(long, value_name = "NAME")]
    pub report_name: Option<String>,

    /// Description given to the created report
    #[arg(long, value_name = "TEXT")]
    pub report_description: Option<String>,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
