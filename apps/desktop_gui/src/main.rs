use std::path::PathBuf;

mod backend_bridge;
mod controller;
mod ui;

use anyhow::anyhow;
use clap::Parser;
use client_core::load_settings;
use crossbeam_channel::bounded;
use eframe::egui;

use crate::{backend_bridge::commands::BackendCommand, controller::events::UiEvent, ui::TriageApp};

#[derive(Parser, Debug)]
struct Args {
    #[arg(long)]
    config: Option<PathBuf>,
    #[arg(long)]
    service_url: Option<String>,
    #[arg(long)]
    timeout_secs: Option<u64>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().with_env_filter("info").init();
    let args = Args::parse();

    let mut settings = load_settings(args.config.as_deref())?;
    if let Some(url) = &args.service_url {
        settings = settings.with_service_url(url)?;
    }
    if let Some(secs) = args.timeout_secs {
        settings = settings.with_request_timeout_secs(secs)?;
    }
    tracing::info!(service_url = %settings.service_url, "starting triage desktop client");

    let (cmd_tx, cmd_rx) = bounded::<BackendCommand>(64);
    let (ui_tx, ui_rx) = bounded::<UiEvent>(256);
    backend_bridge::runtime::launch(cmd_rx, ui_tx, settings);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Radiology Triage")
            .with_inner_size([720.0, 760.0])
            .with_min_inner_size([520.0, 560.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Radiology Triage",
        options,
        Box::new(|_cc| Ok(Box::new(TriageApp::new(cmd_tx, ui_rx)))),
    )
    .map_err(|err| anyhow!("failed to run desktop ui: {err}"))
}
