//! Add/edit form panel.

use client_core::CompanyForm;
use eframe::egui;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormIntent {
    Submit(CompanyForm),
    Cancel,
}

pub fn heading(editing: bool) -> &'static str {
    if editing {
        "Edit Company"
    } else {
        "Add Company"
    }
}

pub fn submit_label(editing: bool) -> &'static str {
    if editing {
        "Update"
    } else {
        "Add"
    }
}

pub fn show(ui: &mut egui::Ui, form: &mut CompanyForm, editing: bool) -> Option<FormIntent> {
    let mut intent = None;

    ui.heading(heading(editing));
    ui.add_space(4.0);
    ui.add(
        egui::TextEdit::singleline(&mut form.name)
            .hint_text("Company Name")
            .desired_width(f32::INFINITY),
    );
    ui.add(
        egui::TextEdit::singleline(&mut form.location)
            .hint_text("Location")
            .desired_width(f32::INFINITY),
    );
    ui.add_space(4.0);

    ui.horizontal(|ui| {
        let submit = ui.add_enabled(form.is_complete(), egui::Button::new(submit_label(editing)));
        if submit.clicked() {
            intent = Some(FormIntent::Submit(form.clone()));
        }
        if editing && ui.button("Cancel").clicked() {
            intent = Some(FormIntent::Cancel);
        }
    });

    intent
}
