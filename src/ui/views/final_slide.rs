use crate::QuizApp;
use crate::model::Tier;
use crate::ui::layout::centered_panel;
use egui::{Button, Color32, Context, RichText, Sense, Stroke, Vec2};

fn medal(ui: &mut egui::Ui, color: Color32, icon: &str) {
    let (rect, _) = ui.allocate_exact_size(Vec2::splat(120.0), Sense::hover());
    let painter = ui.painter_at(rect);
    let center = rect.center();
    painter.circle_filled(center, 56.0, color);
    painter.circle_stroke(center, 48.0, Stroke::new(3.0, Color32::WHITE));
    painter.text(
        center,
        egui::Align2::CENTER_CENTER,
        icon,
        egui::FontId::proportional(44.0),
        Color32::WHITE,
    );
}

pub fn ui_final(app: &mut QuizApp, ctx: &Context) {
    let Some(outcome) = app.outcome.clone() else {
        app.go_to_menu();
        return;
    };
    let readout = app.score_readout();
    let badge = &outcome.badge;
    let [r, g, b] = badge.color;
    let color = Color32::from_rgb(r, g, b);

    centered_panel(ctx, 520.0, 560.0, |ui| {
        ui.vertical_centered(|ui| {
            ui.heading(format!("Congratulations, {}!", app.user_name));
            ui.add_space(12.0);
            medal(ui, color, &badge.icon);
            ui.add_space(8.0);

            let tier_label = if outcome.tier == Tier::Legendary {
                "✨ LEGENDARY ✨".to_string()
            } else {
                format!("{} badge", outcome.tier)
            };
            ui.label(RichText::new(tier_label).size(20.0).strong().color(color));
            ui.label(RichText::new(&badge.title).size(18.0).strong());
            ui.add_space(6.0);
            ui.label(&badge.description);
            ui.add_space(6.0);
            ui.label(RichText::new(format!("“{}”", badge.quote)).italics().color(color));
            ui.add_space(10.0);
            if let Some(readout) = &readout {
                ui.label(readout.label());
            }

            ui.add_space(16.0);
            let btn_w = (ui.available_width() * 0.8).min(360.0);
            if ui
                .add_sized([btn_w, 36.0], Button::new("📄 Download certificate"))
                .clicked()
            {
                app.download_certificate();
            }
            ui.add_space(6.0);
            if ui.add_sized([btn_w, 36.0], Button::new("🏠 Return home")).clicked() {
                app.go_to_menu();
            }

            if !app.message.is_empty() {
                ui.add_space(10.0);
                ui.label(&app.message);
            }
        });
    });
}
