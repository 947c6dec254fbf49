//! Runtime bridge between UI command queue and backend event intake.

use std::{sync::Arc, thread};

use client_core::{
    MissingTriageService, RenderedOutput, Settings, SubmissionController, TriageClient,
    TriageService, TriageView,
};
use crossbeam_channel::{Receiver, Sender};
use shared::domain::ConnectionState;

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::UiEvent;

/// Forwards every view update to the UI thread.
struct ChannelView {
    ui_tx: Sender<UiEvent>,
}

impl ChannelView {
    fn emit(&self, event: UiEvent) {
        if self.ui_tx.send(event).is_err() {
            tracing::debug!("ui event receiver dropped");
        }
    }
}

impl TriageView for ChannelView {
    fn set_loading(&mut self, loading: bool) {
        self.emit(UiEvent::LoadingChanged(loading));
    }

    fn show(&mut self, output: RenderedOutput) {
        self.emit(UiEvent::OutputReady(output));
    }

    fn set_connection(&mut self, state: ConnectionState) {
        self.emit(UiEvent::ConnectionChanged(state));
    }
}

pub fn launch(cmd_rx: Receiver<BackendCommand>, ui_tx: Sender<UiEvent>, settings: Settings) {
    thread::spawn(move || {
        let runtime = match tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()
        {
            Ok(runtime) => runtime,
            Err(err) => {
                let _ = ui_tx.send(UiEvent::Error(format!(
                    "backend worker startup failure: failed to build runtime: {err}"
                )));
                tracing::error!("failed to build backend runtime: {err}");
                return;
            }
        };

        runtime.block_on(async move {
            let client = match TriageClient::from_settings(&settings) {
                Ok(client) => Some(Arc::new(client)),
                Err(err) => {
                    tracing::error!("failed to build triage http client: {err}");
                    let _ = ui_tx.send(UiEvent::Error(format!(
                        "HTTP client unavailable ({err}); running on offline mock data only"
                    )));
                    None
                }
            };
            let service: Arc<dyn TriageService> = match &client {
                Some(client) => client.clone(),
                None => Arc::new(MissingTriageService),
            };
            let mut controller = SubmissionController::new(service);
            let mut view = ChannelView {
                ui_tx: ui_tx.clone(),
            };
            let _ = ui_tx.send(UiEvent::Info(format!(
                "Backend worker ready ({})",
                settings.service_url
            )));

            // One command at a time: a second submit waits for the first cycle.
            while let Ok(cmd) = cmd_rx.recv() {
                match cmd {
                    BackendCommand::Submit(form) => {
                        let outcome = controller.submit(&mut view, &form).await;
                        tracing::debug!(?outcome, "submission cycle finished");
                    }
                    BackendCommand::CheckStatus => {
                        let event = match &client {
                            Some(client) => match client.status().await {
                                Ok(status) => {
                                    UiEvent::Info(format!("{}: {}", status.service, status.status))
                                }
                                Err(err) => UiEvent::Error(format!(
                                    "Triage service unreachable: {err}"
                                )),
                            },
                            None => UiEvent::Error("Triage service not configured".to_string()),
                        };
                        let _ = ui_tx.send(event);
                    }
                }
            }
            tracing::info!("ui command channel closed; backend worker exiting");
        });
    });
}
