//! Company list panel.

use eframe::egui;
use shared::domain::{Company, CompanyId};

pub const EMPTY_LIST_TEXT: &str = "No companies found.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListIntent {
    Edit(Company),
    Delete(CompanyId),
}

pub fn show(
    ui: &mut egui::Ui,
    companies: &[Company],
    editing: Option<CompanyId>,
) -> Option<ListIntent> {
    let mut intent = None;

    ui.heading("Companies");
    ui.add_space(4.0);
    if companies.is_empty() {
        ui.label(EMPTY_LIST_TEXT);
        return None;
    }

    egui::ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui| {
            for company in companies {
                ui.push_id(company.id.0, |ui| {
                    ui.group(|ui| {
                        ui.horizontal(|ui| {
                            ui.vertical(|ui| {
                                ui.horizontal(|ui| {
                                    ui.strong("Name:");
                                    ui.label(&company.name);
                                    if editing == Some(company.id) {
                                        ui.weak("(editing)");
                                    }
                                });
                                ui.horizontal(|ui| {
                                    ui.strong("Location:");
                                    ui.label(&company.location);
                                });
                            });
                            ui.with_layout(
                                egui::Layout::right_to_left(egui::Align::Center),
                                |ui| {
                                    if ui.button("Delete").clicked() {
                                        intent = Some(ListIntent::Delete(company.id));
                                    }
                                    if ui.button("Edit").clicked() {
                                        intent = Some(ListIntent::Edit(company.clone()));
                                    }
                                },
                            );
                        });
                    });
                });
            }
        });

    intent
}
