use crossbeam_channel::{Receiver, Sender};
use eframe::egui;
use shared::domain::ConnectionState;

use client_core::{FailurePanel, RenderedOutput, ResultPanel};

use crate::{
    backend_bridge::commands::BackendCommand,
    controller::{
        events::UiEvent,
        orchestration::dispatch_backend_command,
        reducer::{TriageScreen, MODALITIES},
    },
};

const DANGER: egui::Color32 = egui::Color32::from_rgb(0xe5, 0x48, 0x4d);
const SUCCESS: egui::Color32 = egui::Color32::from_rgb(0x30, 0xa4, 0x6c);
const WARNING: egui::Color32 = egui::Color32::from_rgb(0xf5, 0xa5, 0x24);

fn priority_color(priority_class: &str) -> egui::Color32 {
    match priority_class {
        "stat" => DANGER,
        "routine" => SUCCESS,
        _ => WARNING,
    }
}

fn connection_color(state: ConnectionState) -> egui::Color32 {
    match state {
        ConnectionState::Online => SUCCESS,
        ConnectionState::Offline => WARNING,
    }
}

pub struct TriageApp {
    cmd_tx: Sender<BackendCommand>,
    ui_rx: Receiver<UiEvent>,
    screen: TriageScreen,
}

impl TriageApp {
    pub fn new(cmd_tx: Sender<BackendCommand>, ui_rx: Receiver<UiEvent>) -> Self {
        let mut screen = TriageScreen::default();
        dispatch_backend_command(&cmd_tx, BackendCommand::CheckStatus, &mut screen.status);
        Self {
            cmd_tx,
            ui_rx,
            screen,
        }
    }

    fn process_ui_events(&mut self) {
        while let Ok(event) = self.ui_rx.try_recv() {
            self.screen.apply(event);
        }
    }

    fn submit(&mut self) {
        let Some(cmd) = self.screen.begin_submit() else {
            return;
        };
        if !dispatch_backend_command(&self.cmd_tx, cmd, &mut self.screen.status) {
            self.screen.abort_submit();
        }
    }

    fn show_header(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("triage_header").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading("Radiology Triage");
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let state = self.screen.connection;
                    ui.label(state.label());
                    let (rect, _) =
                        ui.allocate_exact_size(egui::vec2(10.0, 10.0), egui::Sense::hover());
                    ui.painter()
                        .circle_filled(rect.center(), 5.0, connection_color(state));
                });
            });
        });
    }

    fn show_status_bar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("triage_status").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.weak(&self.screen.status);
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.small_button("Check service").clicked() {
                        dispatch_backend_command(
                            &self.cmd_tx,
                            BackendCommand::CheckStatus,
                            &mut self.screen.status,
                        );
                    }
                });
            });
        });
    }

    fn show_form(&mut self, ui: &mut egui::Ui) {
        egui::Frame::group(ui.style())
            .inner_margin(egui::Margin::symmetric(14, 12))
            .show(ui, |ui| {
                ui.label(egui::RichText::new("New Case").strong().size(18.0));
                ui.add_space(6.0);

                ui.label("Patient ID");
                ui.add(
                    egui::TextEdit::singleline(&mut self.screen.form.patient_id)
                        .hint_text("PT-001")
                        .desired_width(f32::INFINITY),
                );

                ui.label("Modality");
                egui::ComboBox::from_id_salt("modality")
                    .selected_text(self.screen.form.modality.clone())
                    .show_ui(ui, |ui| {
                        for modality in MODALITIES {
                            ui.selectable_value(
                                &mut self.screen.form.modality,
                                modality.to_string(),
                                modality,
                            );
                        }
                    });

                ui.label("Clinical History");
                ui.add(
                    egui::TextEdit::multiline(&mut self.screen.form.clinical_history)
                        .desired_rows(4)
                        .desired_width(f32::INFINITY),
                );

                ui.add_space(8.0);
                ui.horizontal(|ui| {
                    let submit = ui.add_enabled(
                        !self.screen.loading,
                        egui::Button::new("Run Triage").min_size(egui::vec2(120.0, 28.0)),
                    );
                    if self.screen.loading {
                        ui.spinner();
                        ui.weak("Analyzing...");
                    }
                    if submit.clicked() {
                        self.submit();
                    }
                });
            });
    }

    fn show_output(&self, ui: &mut egui::Ui) {
        match &self.screen.output {
            None => {
                ui.weak("Submit a case to see its triage result.");
            }
            Some(RenderedOutput::Result(panel)) => show_result_panel(ui, panel),
            Some(RenderedOutput::Failure(panel)) => show_failure_panel(ui, panel),
        }
    }
}

fn show_result_panel(ui: &mut egui::Ui, panel: &ResultPanel) {
    egui::Frame::group(ui.style())
        .inner_margin(egui::Margin::symmetric(14, 12))
        .show(ui, |ui| {
            ui.horizontal(|ui| {
                ui.label(egui::RichText::new(&panel.patient_id).strong().size(18.0));
                let badge_color = priority_color(&panel.priority_class);
                egui::Frame::NONE
                    .fill(badge_color.gamma_multiply(0.25))
                    .stroke(egui::Stroke::new(1.0, badge_color))
                    .corner_radius(6.0)
                    .inner_margin(egui::Margin::symmetric(8, 2))
                    .show(ui, |ui| {
                        ui.label(
                            egui::RichText::new(&panel.priority_label)
                                .strong()
                                .color(badge_color),
                        );
                    });
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(format!("Confidence: {}", panel.confidence_label));
                });
            });

            ui.add_space(6.0);
            ui.label(egui::RichText::new("Findings").strong());
            for (idx, finding) in panel.findings.iter().enumerate() {
                ui.label(format!("{}. {finding}", idx + 1));
            }

            ui.add_space(6.0);
            ui.label(egui::RichText::new("Recommendation").strong());
            ui.label(&panel.recommendation);
        });
}

fn show_failure_panel(ui: &mut egui::Ui, panel: &FailurePanel) {
    egui::Frame::group(ui.style())
        .stroke(egui::Stroke::new(1.0, DANGER))
        .inner_margin(egui::Margin::symmetric(14, 12))
        .show(ui, |ui| {
            ui.label(egui::RichText::new(&panel.title).strong().color(DANGER));
            ui.label(&panel.message);
            ui.label(&panel.hint);
        });
}

impl eframe::App for TriageApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.process_ui_events();

        self.show_header(ctx);
        self.show_status_bar(ctx);
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                self.show_form(ui);
                ui.add_space(12.0);
                self.show_output(ui);
            });
        });

        ctx.request_repaint_after(std::time::Duration::from_millis(100));
    }
}
