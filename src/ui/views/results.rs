use crate::QuizApp;
use crate::model::AppState;
use crate::ui::helpers::{GREEN, RED};
use crate::ui::layout::centered_panel;
use crate::view_models::RowStatus;
use egui::{Button, Context, Grid, RichText, ScrollArea};

pub fn ui_results(app: &mut QuizApp, ctx: &Context) {
    let Some(outcome) = app.outcome.clone() else {
        // nothing to show until the quiz is finished
        app.navigate_to(AppState::Quiz);
        return;
    };
    let rows = app.review_rows();
    let readout = app.score_readout();

    centered_panel(ctx, 420.0 + 22.0 * rows.len() as f32, 560.0, |ui| {
        ui.vertical_centered(|ui| {
            let width = ui.available_width();
            if outcome.passed {
                ui.heading(RichText::new("🎉 Mission Complete!").color(GREEN));
            } else {
                ui.heading(RichText::new("Challenge Failed").color(RED));
                ui.label("You need at least 8 correct answers to pass.");
            }
            ui.add_space(8.0);
            if let Some(readout) = readout {
                ui.label(RichText::new(readout.label()).size(18.0).strong());
            }
            if outcome.mastery {
                ui.label(RichText::new("🌟 Perfect run, mastery achieved!").color(egui::Color32::GOLD));
            }
            ui.add_space(12.0);

            ScrollArea::vertical().max_height(260.0).show(ui, |ui| {
                Grid::new("review_grid").striped(true).num_columns(3).show(ui, |ui| {
                    for row in &rows {
                        ui.label(format!("#{}", row.number));
                        let kind = if row.bonus {
                            format!("⭐ {}", row.kind)
                        } else {
                            row.kind.to_string()
                        };
                        ui.label(kind);
                        let color = match row.status {
                            RowStatus::Correct => GREEN,
                            RowStatus::Incorrect => RED,
                            RowStatus::Skipped => ui.visuals().weak_text_color(),
                        };
                        ui.label(RichText::new(row.status_label()).color(color));
                        ui.end_row();
                    }
                });
            });

            ui.add_space(16.0);
            let btn_w = (width * 0.8).min(360.0);
            if app.final_unlocked
                && ui
                    .add_sized([btn_w, 36.0], Button::new("🏅 View badge & certificate"))
                    .clicked()
            {
                app.navigate_to(AppState::Final);
            }
            if !outcome.passed {
                ui.add_space(6.0);
                if ui.add_sized([btn_w, 36.0], Button::new("🔄 Retry assessment")).clicked() {
                    app.retry_quiz();
                }
            }
            ui.add_space(6.0);
            if ui.add_sized([btn_w, 36.0], Button::new("🏠 Return home")).clicked() {
                app.go_to_menu();
            }
        });
    });
}
