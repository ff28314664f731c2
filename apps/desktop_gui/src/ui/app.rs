use std::time::Duration;

use client_core::{CompanyForm, SessionSnapshot};
use crossbeam_channel::{Receiver, Sender};
use eframe::egui;

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::{events::UiEvent, orchestration::dispatch_backend_command};
use crate::ui::{
    form::{self, FormIntent},
    list::{self, ListIntent},
};

pub struct CompanyAdminApp {
    cmd_tx: Sender<BackendCommand>,
    ui_rx: Receiver<UiEvent>,
    api_base_url: String,
    status: String,
    snapshot: SessionSnapshot,
    /// Text buffers bound to the inputs; reseeded only when the form epoch moves.
    form: CompanyForm,
    seen_form_epoch: u64,
}

impl CompanyAdminApp {
    pub fn new(
        cmd_tx: Sender<BackendCommand>,
        ui_rx: Receiver<UiEvent>,
        api_base_url: impl Into<String>,
    ) -> Self {
        Self {
            cmd_tx,
            ui_rx,
            api_base_url: api_base_url.into(),
            status: "Loading companies...".to_string(),
            snapshot: SessionSnapshot::default(),
            form: CompanyForm::default(),
            seen_form_epoch: 0,
        }
    }

    fn process_ui_events(&mut self) {
        while let Ok(event) = self.ui_rx.try_recv() {
            self.apply_event(event);
        }
    }

    fn apply_event(&mut self, event: UiEvent) {
        match event {
            UiEvent::Info(message) => {
                self.status = message;
            }
            UiEvent::SessionChanged(snapshot) => {
                if snapshot.form_epoch != self.seen_form_epoch {
                    self.form = snapshot.form.clone();
                    self.seen_form_epoch = snapshot.form_epoch;
                }
                self.snapshot = snapshot;
            }
        }
    }

    fn queue(&mut self, cmd: BackendCommand) {
        dispatch_backend_command(&self.cmd_tx, cmd, &mut self.status);
    }

    fn handle_form_intent(&mut self, intent: FormIntent) {
        match intent {
            FormIntent::Submit(form) => self.queue(BackendCommand::Submit { form }),
            FormIntent::Cancel => self.queue(BackendCommand::CancelEdit),
        }
    }

    fn handle_list_intent(&mut self, intent: ListIntent) {
        match intent {
            ListIntent::Edit(company) => self.queue(BackendCommand::StartEdit { company }),
            ListIntent::Delete(company_id) => self.queue(BackendCommand::Delete { company_id }),
        }
    }

    fn show_status_bar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.weak(&self.status);
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.small_button("Refresh").clicked() {
                        self.queue(BackendCommand::Refresh);
                    }
                    ui.weak(&self.api_base_url);
                });
            });
        });
    }

    fn show_workspace(&mut self, ctx: &egui::Context) {
        let editing = self.snapshot.is_editing();
        let editing_id = self.snapshot.editing.as_ref().map(|company| company.id);
        let mut form_intent = None;
        let mut list_intent = None;

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading(egui::RichText::new("Company Management").size(26.0).strong());
            ui.add_space(12.0);

            ui.group(|ui| {
                form_intent = form::show(ui, &mut self.form, editing);
            });
            ui.add_space(16.0);

            list_intent = list::show(ui, &self.snapshot.companies, editing_id);
        });

        if let Some(intent) = form_intent {
            self.handle_form_intent(intent);
        }
        if let Some(intent) = list_intent {
            self.handle_list_intent(intent);
        }
    }
}

impl eframe::App for CompanyAdminApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.process_ui_events();
        self.show_status_bar(ctx);
        self.show_workspace(ctx);
        ctx.request_repaint_after(Duration::from_millis(100));
    }
}
