use crate::QuizApp;
use crate::model::AppState;
use egui::{Button, CentralPanel, Context, Frame, ScrollArea, Ui, Visuals};
use egui_code_editor::{CodeEditor, ColorTheme, Syntax};

pub fn top_panel(app: &mut QuizApp, ctx: &Context) {
    egui::TopBottomPanel::top("menu_panel").show(ctx, |ui| {
        ui.horizontal_centered(|ui| {
            if ui.button("🏠 Menu").clicked() {
                app.go_to_menu();
            }

            if app.state == AppState::Quiz && !app.is_quiz_finished() {
                if ui.button("🔄 Restart quiz").clicked() {
                    app.confirm_restart = true;
                }
                if let Some(readout) = app.score_readout() {
                    ui.separator();
                    ui.label(readout.label());
                }
            }

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button("ℹ About").clicked() {
                    app.show_about = !app.show_about;
                }
                if ui.button("❓ Help").clicked() {
                    app.show_help = !app.show_help;
                }
                let audio_label = if app.audio.is_enabled() { "🔊" } else { "🔇" };
                if ui.button(audio_label).on_hover_text("Background music").clicked() {
                    app.toggle_audio();
                }
                ui.label(format!("👤 {}", app.user_name));
            });
        });
    });
}

pub fn bottom_panel(app: &mut QuizApp, ctx: &Context) {
    egui::TopBottomPanel::bottom("bottom_panel").show(ctx, |ui| {
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let label = if app.prefs.dark_mode {
                "☀ Light mode"
            } else {
                "🌙 Dark mode"
            };
            if ui.button(label).clicked() {
                app.prefs.dark_mode = !app.prefs.dark_mode;
                ctx.set_visuals(if app.prefs.dark_mode {
                    Visuals::dark()
                } else {
                    Visuals::light()
                });
            }
        });
    });
}

pub fn info_windows(app: &mut QuizApp, ctx: &Context) {
    egui::Window::new("Help")
        .open(&mut app.show_help)
        .collapsible(false)
        .resizable(false)
        .show(ctx, |ui| {
            ui.label("• Follow the course from the menu, module by module.");
            ui.label("• Experiment with HTML and CSS in the Playground.");
            ui.label("• Score 8 or more out of 10 in the quiz to unlock your badge and certificate.");
            ui.label("• Bonus challenges are optional: they never lower your score.");
        });

    egui::Window::new("About")
        .open(&mut app.show_about)
        .collapsible(false)
        .resizable(false)
        .show(ctx, |ui| {
            ui.heading(crate::certificate::COURSE_NAME);
            ui.label(format!("Version {}", env!("CARGO_PKG_VERSION")));
            ui.label("An interactive introduction to HTML and CSS.");
        });
}

/// Frame centred both ways, at most `max_width` wide.
pub fn centered_panel(
    ctx: &Context,
    est_height: f32,
    max_width: f32,
    inner: impl FnOnce(&mut Ui),
) {
    CentralPanel::default().show(ctx, |ui| {
        let extra = ((ui.available_height() - est_height) / 2.0).max(0.0);
        ui.add_space(extra);
        ui.vertical_centered(|ui| {
            Frame::default()
                .fill(ui.visuals().window_fill())
                .inner_margin(egui::Margin::symmetric(16, 16))
                .show(ui, |ui| {
                    let w = ui.available_width().min(max_width);
                    ui.set_width(w);
                    inner(ui);
                });
        });
        ui.add_space(extra);
    });
}

fn editor_theme(ui: &Ui) -> ColorTheme {
    if ui.visuals().dark_mode {
        ColorTheme::GITHUB_DARK
    } else {
        ColorTheme::GITHUB_LIGHT
    }
}

/// Editable code editor with a fixed width.
pub fn code_editor_input(
    ui: &mut Ui,
    id: &str,
    width: f32,
    rows: usize,
    syntax: Syntax,
    text: &mut String,
    max_height: f32,
) {
    let theme = editor_theme(ui);
    ScrollArea::vertical()
        .id_salt(id)
        .max_height(max_height)
        .auto_shrink([false; 2])
        .show(ui, |ui| {
            ui.set_width(width);
            CodeEditor::default()
                .id_source(id)
                .with_rows(rows)
                .with_fontsize(14.0)
                .with_theme(theme)
                .with_syntax(syntax)
                .with_numlines(true)
                .vscroll(false)
                .show(ui, text);
        });
}

/// Read-only editor, used for the guess-output snippet.
pub fn code_editor_readonly(ui: &mut Ui, id: &str, width: f32, syntax: Syntax, code: &str) {
    let mut buf = code.to_owned();
    let rows = code.lines().count().max(1);
    let theme = editor_theme(ui);
    ui.add_enabled_ui(false, |ui| {
        ui.set_width(width);
        CodeEditor::default()
            .id_source(id)
            .with_rows(rows)
            .with_fontsize(14.0)
            .with_theme(theme)
            .with_syntax(syntax)
            .with_numlines(false)
            .vscroll(false)
            .show(ui, &mut buf);
    });
}

/// Two equally sized buttons on one row. Returns (left clicked, right clicked).
pub fn two_button_row(
    ui: &mut Ui,
    panel_width: f32,
    left_label: &str,
    right_label: &str,
) -> (bool, bool) {
    let btn_w = (panel_width - 8.0) / 2.0;
    let mut clicked_left = false;
    let mut clicked_right = false;
    ui.horizontal(|ui| {
        ui.add_space(((ui.available_width() - panel_width) / 2.0).max(0.0));
        clicked_left = ui
            .add_sized([btn_w, 36.0], Button::new(left_label))
            .clicked();
        clicked_right = ui
            .add_sized([btn_w, 36.0], Button::new(right_label))
            .clicked();
    });
    (clicked_left, clicked_right)
}
