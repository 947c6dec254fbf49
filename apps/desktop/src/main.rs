use std::{path::PathBuf, process::ExitCode, sync::Arc};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use client_core::{
    known_mock_ids, load_settings, render::render_result, resolve_offline_mock,
    MissingTriageService, Settings, SubmissionController, SubmitOutcome, TriageClient,
    TriageForm, TriageService,
};

mod view;

use view::TerminalView;

#[derive(Parser, Debug)]
#[command(name = "triage", about = "Submit imaging cases to the radiology triage service")]
struct Cli {
    /// Settings file (defaults to ./triage.toml when present).
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    #[arg(long, global = true)]
    service_url: Option<String>,
    #[arg(long, global = true)]
    timeout_secs: Option<u64>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Submit one case and print the triage result.
    Submit {
        #[arg(long)]
        patient_id: String,
        #[arg(long, default_value = "")]
        modality: String,
        #[arg(long, default_value = "")]
        history: String,
        /// Skip the live call and use offline mock data only.
        #[arg(long)]
        offline: bool,
    },
    /// Probe the triage service.
    Status,
    /// Show the offline mock result for a patient id.
    Mock { patient_id: String },
}

fn resolve_settings(cli: &Cli) -> Result<Settings> {
    let mut settings = load_settings(cli.config.as_deref())?;
    if let Some(url) = &cli.service_url {
        settings = settings.with_service_url(url)?;
    }
    if let Some(secs) = cli.timeout_secs {
        settings = settings.with_request_timeout_secs(secs)?;
    }
    Ok(settings)
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter("info")
        .with_writer(std::io::stderr)
        .init();
    let cli = Cli::parse();
    let settings = resolve_settings(&cli)?;

    match cli.command {
        Command::Submit {
            patient_id,
            modality,
            history,
            offline,
        } => {
            let service: Arc<dyn TriageService> = if offline {
                Arc::new(MissingTriageService)
            } else {
                Arc::new(
                    TriageClient::from_settings(&settings)
                        .context("failed to build triage http client")?,
                )
            };
            let mut controller = SubmissionController::new(service);
            let mut view = TerminalView::new(std::io::stdout(), std::io::stderr());
            let form = TriageForm {
                patient_id,
                modality,
                clinical_history: history,
            };

            let outcome = controller.submit(&mut view, &form).await;
            tracing::debug!(?outcome, connection = ?view.connection(), "submission finished");
            if outcome == SubmitOutcome::HardFailure {
                return Ok(ExitCode::FAILURE);
            }
        }
        Command::Status => {
            let client = TriageClient::from_settings(&settings)
                .context("failed to build triage http client")?;
            let status = client
                .status()
                .await
                .with_context(|| format!("triage service at {} is unreachable", client.service_url()))?;
            println!("{}: {}", status.service, status.status);
        }
        Command::Mock { patient_id } => match resolve_offline_mock(&patient_id) {
            Some(result) => println!("{}", render_result(&result)),
            None => {
                let known: Vec<_> = known_mock_ids().collect();
                eprintln!(
                    "no offline mock for '{patient_id}'; known ids: {}",
                    known.join(", ")
                );
                return Ok(ExitCode::FAILURE);
            }
        },
    }

    Ok(ExitCode::SUCCESS)
}
