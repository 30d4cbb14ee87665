use crate::QuizApp;
use crate::ui::layout::two_button_row;
use egui::{CentralPanel, Context, ScrollArea};
use egui_commonmark::CommonMarkViewer;

pub fn ui_course(app: &mut QuizApp, ctx: &Context) {
    CentralPanel::default().show(ctx, |ui| {
        let max_width = 760.0;
        let panel_width = (ui.available_width() * 0.97).min(max_width);

        ui.vertical_centered(|ui| {
            let Some(lesson) = app.lessons.get(app.lesson_idx) else {
                ui.label("No lessons available.");
                return;
            };

            ui.heading(format!(
                "Module {} of {}: {}",
                app.lesson_idx + 1,
                app.lessons.len(),
                lesson.title
            ));
            ui.add_space(10.0);

            let body = lesson.body.clone();
            ScrollArea::vertical()
                .max_height((ui.available_height() - 60.0).max(120.0))
                .auto_shrink([false, true])
                .show(ui, |ui| {
                    ui.set_width(panel_width);
                    CommonMarkViewer::new().show(ui, &mut app.cm_cache, &body);
                });

            ui.add_space(10.0);
            let next_label = if app.is_last_lesson() {
                "📝 Take the quiz"
            } else {
                "Next ➡"
            };
            let back_label = if app.lesson_idx == 0 {
                "🏠 Menu"
            } else {
                "⬅ Previous"
            };
            let (back, next) = two_button_row(ui, panel_width, back_label, next_label);
            if back {
                app.previous_lesson();
            }
            if next {
                app.next_lesson();
            }
        });
    });
}
