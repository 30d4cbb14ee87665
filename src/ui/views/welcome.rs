use crate::QuizApp;
use crate::model::Variant;
use egui::{Align, Button, CentralPanel, Context, RichText, TextEdit};

pub fn ui_welcome(app: &mut QuizApp, ctx: &Context) {
    CentralPanel::default().show(ctx, |ui| {
        let max_width = 540.0;
        let content_width = ui.available_width().min(max_width);

        // Vertical centring
        let estimated_h = 320.0;
        let vs = ((ui.available_height() - estimated_h) / 2.0).max(0.0);
        ui.add_space(vs / 2.0);

        ui.horizontal_centered(|ui| {
            egui::Frame::default()
                .fill(ui.visuals().window_fill())
                .inner_margin(egui::Margin::symmetric(16, 16))
                .show(ui, |ui| {
                    ui.with_layout(egui::Layout::top_down(Align::Center), |ui| {
                        ui.heading(crate::certificate::COURSE_NAME);
                        ui.add_space(6.0);
                        ui.label("Learn HTML and CSS, then prove it in the final assessment.");
                        ui.add_space(18.0);

                        let btn_w = (content_width * 0.9).clamp(120.0, 400.0);
                        let btn_h = 40.0;

                        ui.label("What is your name?");
                        let name_edit = ui.add_sized(
                            [btn_w, 28.0],
                            TextEdit::singleline(&mut app.name_input).hint_text("Your name"),
                        );
                        let pressed_enter =
                            name_edit.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));

                        ui.add_space(12.0);
                        ui.label("Assessment");
                        for variant in [Variant::Mastery, Variant::Classic] {
                            if ui
                                .radio(app.variant == variant, variant.label())
                                .clicked()
                                && app.variant != variant
                            {
                                app.select_variant(variant);
                            }
                        }

                        ui.add_space(12.0);
                        let btn_start = ui.add_sized([btn_w, btn_h], Button::new("▶ Start"));
                        ui.add_space(5.0);

                        #[cfg(not(target_arch = "wasm32"))]
                        let btn_exit = Some(ui.add_sized([btn_w, btn_h], Button::new("🔙 Exit")));
                        #[cfg(target_arch = "wasm32")]
                        let btn_exit: Option<egui::Response> = None;

                        if btn_start.clicked() || pressed_enter {
                            app.submit_name();
                        }
                        if btn_exit.is_some_and(|b| b.clicked()) {
                            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                        }

                        if !app.message.is_empty() {
                            ui.add_space(10.0);
                            ui.label(
                                RichText::new(&app.message)
                                    .color(egui::Color32::YELLOW)
                                    .strong(),
                            );
                        }
                    });
                });
        });

        ui.add_space(vs / 2.0);
    });
}
