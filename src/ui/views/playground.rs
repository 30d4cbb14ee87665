use crate::QuizApp;
use crate::code_utils::{has_heading, has_paragraph, html_syntax, strip_tags};
use crate::ui::helpers::{GREEN, RED};
use crate::ui::layout::code_editor_input;
use egui::{CentralPanel, Context, RichText, ScrollArea};

fn check_label(ui: &mut egui::Ui, ok: bool, text: &str) {
    let (icon, color) = if ok { ("✔", GREEN) } else { ("✖", RED) };
    ui.label(RichText::new(format!("{icon} {text}")).color(color));
}

pub fn ui_playground(app: &mut QuizApp, ctx: &Context) {
    CentralPanel::default().show(ctx, |ui| {
        ui.heading("🧪 Playground");
        ui.label("Write some HTML on the left, the preview updates as you type.");
        ui.add_space(8.0);

        let half = ((ui.available_width() - 16.0) / 2.0).max(200.0);
        let height = (ui.available_height() - 40.0).max(200.0);

        ui.horizontal_top(|ui| {
            ui.vertical(|ui| {
                code_editor_input(
                    ui,
                    "playground_editor",
                    half,
                    20,
                    html_syntax(),
                    &mut app.playground_code,
                    height,
                );
            });

            ui.separator();

            ui.vertical(|ui| {
                ui.set_width(half);
                ui.strong("Preview");
                check_label(ui, has_heading(&app.playground_code), "Has a heading");
                check_label(ui, has_paragraph(&app.playground_code), "Has a paragraph");
                ui.separator();
                ScrollArea::vertical()
                    .id_salt("playground_preview")
                    .max_height(height - 60.0)
                    .show(ui, |ui| {
                        ui.label(strip_tags(&app.playground_code));
                    });
            });
        });
    });
}
