use crate::QuizApp;
use crate::model::AppState;
use crate::ui::helpers::big_list_button;
use egui::{Align, CentralPanel, Context};

pub fn ui_menu(app: &mut QuizApp, ctx: &Context) {
    CentralPanel::default().show(ctx, |ui| {
        let max_width = 400.0;
        let content_width = ui.available_width().min(max_width);
        let button_h = 40.0;

        let estimated_h = 100.0 + (button_h + 8.0) * 4.0;
        let vertical_space = ((ui.available_height() - estimated_h) / 2.0).max(0.0);
        ui.add_space(vertical_space / 2.0);

        ui.vertical_centered_justified(|ui| {
            egui::Frame::default()
                .fill(ui.visuals().window_fill())
                .inner_margin(egui::Margin::symmetric(24, 16))
                .show(ui, |ui| {
                    ui.with_layout(egui::Layout::top_down(Align::Center), |ui| {
                        ui.set_width(content_width);
                        ui.heading(format!("Hi {}, where to?", app.user_name));
                        ui.add_space(20.0);

                        if big_list_button(ui, "📘 Course".into(), content_width, button_h, true) {
                            app.start_linear_course();
                        }
                        ui.add_space(8.0);
                        if big_list_button(ui, "🧪 Playground".into(), content_width, button_h, true) {
                            app.navigate_to(AppState::Playground);
                        }
                        ui.add_space(8.0);
                        let quiz_label = if app.is_quiz_finished() {
                            "📝 Quiz results".to_string()
                        } else {
                            format!("📝 {}", app.variant.label())
                        };
                        if big_list_button(ui, quiz_label, content_width, button_h, app.engine.is_some()) {
                            app.navigate_to(AppState::Quiz);
                        }
                        ui.add_space(8.0);
                        let final_label = if app.final_unlocked {
                            "🏅 Badge & certificate".to_string()
                        } else {
                            "🔒 Badge & certificate".to_string()
                        };
                        if big_list_button(ui, final_label, content_width, button_h, app.final_unlocked) {
                            app.navigate_to(AppState::Final);
                        }

                        if !app.message.is_empty() {
                            ui.add_space(10.0);
                            ui.label(&app.message);
                        }
                    });
                });
        });

        ui.add_space(vertical_space / 2.0);
    });
}
