mod cli;
mod config;

use audit_report::prelude::*;
use cli::Args;
use config::Settings;
use std::path::Path;
use std::process;
use tokio_util::sync::CancellationToken;

#[tokio::main]
async fn main() {
    init_tracing();

    // Parse command-line arguments (clap exits with 2 on invalid arguments)
    let args = Args::parse_args();

    let exit_code = match run(args).await {
        Ok(outcome) => exit_code_for(&outcome),
        Err(e) => {
            eprintln!("\n❌ An error occurred:\n");
            eprintln!("{}", e);

            // Display error chain
            let mut source = e.source();
            while let Some(err) = source {
                eprintln!("\nCaused by: {}", err);
                source = err.source();
            }

            eprintln!();
            ExitCode::ApplicationError
        }
    };

    process::exit(exit_code.as_i32());
}

async fn run(args: Args) -> Result<ReportOutcome> {
    // Load config file: explicit path must exist, otherwise auto-discover
    let config = match &args.config {
        Some(path) => Some(config::load_config_from_path(path)?),
        None => config::discover_config(Path::new("."))?,
    };
    let settings = Settings::resolve(&args, config)?;

    print_banner();

    let progress_reporter = StderrProgressReporter::new();

    // Validate input before any remote call is made
    let request = collect_report_request(
        &StdinPrompt::new(),
        &progress_reporter,
        RawReportInput {
            assessment_id: args.assessment_id,
            evidence_date: args.evidence_date,
            output_dir: settings.output_dir,
        },
    )?;

    // Create adapters (Dependency Injection)
    let sdk_client = create_audit_manager_client(&settings.connection).await;
    let client = AwsAuditManagerClient::new(sdk_client);
    let downloader = HttpReportDownloader::new()?;

    let use_case = GenerateAssessmentReportUseCase::new(client, downloader, progress_reporter)
        .with_report_settings(settings.report_settings)
        .with_poll_schedule(settings.poll_schedule);

    let cancel = CancellationToken::new();
    spawn_interrupt_handler(cancel.clone());

    let response = use_case.execute(request, &cancel).await?;
    Ok(response.outcome)
}

fn print_banner() {
    println!("{}", "-".repeat(88));
    println!("AWS Audit Manager Assessment Report Generation");
    println!("{}", "-".repeat(88));
}

/// Installs the stderr tracing subscriber; `RUST_LOG` overrides the `warn` default.
fn init_tracing() {
    use tracing_subscriber::{fmt, EnvFilter};

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let _ = fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// The first Ctrl-C cancels the run, a second one ends the process.
fn spawn_interrupt_handler(cancel: CancellationToken) {
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_err() {
            return;
        }
        tracing::warn!("Interrupt received, stopping at the next checkpoint");
        cancel.cancel();

        if tokio::signal::ctrl_c().await.is_ok() {
            process::exit(ExitCode::ReportNotDownloaded.as_i32());
        }
    });
}

fn exit_code_for(outcome: &ReportOutcome) -> ExitCode {
    match outcome {
        ReportOutcome::Downloaded { .. } => ExitCode::Success,
        ReportOutcome::TimedOut { .. } | ReportOutcome::Cancelled { .. } => {
            ExitCode::ReportNotDownloaded
        }
    }
}
