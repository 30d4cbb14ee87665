use crate::QuizApp;
use crate::app::{QuestionUi, REJECTED_PAIR_DELAY};
use crate::code_utils::html_syntax;
use crate::engine::Feedback;
use crate::model::{Question, QuestionKind};
use crate::ui::helpers::{OptionState, PairState, option_button, pair_button};
use crate::ui::layout::{code_editor_input, code_editor_readonly, two_button_row};
use egui::{Align, Button, CentralPanel, Context, RichText, ScrollArea, Ui};
use std::time::Duration;

pub fn ui_quiz(app: &mut QuizApp, ctx: &Context, now: f64) {
    app.expire_rejected_pair(now);
    if app.question_ui.rejected_at.is_some() {
        ctx.request_repaint_after(Duration::from_secs_f64(REJECTED_PAIR_DELAY));
    }

    let Some(engine) = &app.engine else {
        CentralPanel::default().show(ctx, |ui| {
            ui.label(&app.message);
        });
        return;
    };
    let index = engine.session().current_index();
    let total = engine.question_count();
    let is_last = engine.is_last();
    let question = engine.current_question().clone();
    let matched: Vec<bool> = question
        .pairs()
        .map(|pairs| (0..pairs.len()).map(|i| engine.session().board().is_matched(i)).collect())
        .unwrap_or_default();
    let answered = app.current_answered();

    CentralPanel::default().show(ctx, |ui| {
        let max_width = 650.0;
        let panel_width = (ui.available_width() * 0.97).min(max_width);

        ScrollArea::vertical().auto_shrink([false, true]).show(ui, |ui| {
            ui.vertical_centered(|ui| {
                ui.set_max_width(panel_width);

                ui.horizontal(|ui| {
                    ui.label(format!("Question {} of {}", index + 1, total));
                    if question.is_bonus() {
                        ui.label(RichText::new("⭐ Bonus").color(egui::Color32::GOLD).strong());
                    }
                });
                ui.add_space(8.0);
                ui.with_layout(egui::Layout::top_down(Align::Min), |ui| {
                    ui.label(RichText::new(&question.text).size(18.0).strong());
                });
                ui.add_space(12.0);

                match &question.kind {
                    QuestionKind::MultipleChoice { options, correct_index } => {
                        options_list(app, ui, panel_width, options, *correct_index, answered);
                    }
                    QuestionKind::GuessOutput {
                        snippet,
                        question: prompt,
                        options,
                        correct_index,
                    } => {
                        code_editor_readonly(ui, "guess_snippet", panel_width, html_syntax(), snippet);
                        ui.add_space(6.0);
                        ui.label(prompt);
                        ui.add_space(6.0);
                        options_list(app, ui, panel_width, options, *correct_index, answered);
                    }
                    QuestionKind::FixCode { instruction, hint, .. } => {
                        fix_code(app, ui, panel_width, instruction, hint.as_deref(), answered, now);
                    }
                    QuestionKind::MatchConcept { .. } => {
                        match_board(app, ui, panel_width, &question, &matched, now);
                    }
                }

                ui.add_space(12.0);
                if !app.message.is_empty() {
                    ui.label(RichText::new(&app.message).strong());
                    ui.add_space(6.0);
                }

                // Bonus questions can always be skipped; core questions need an answer.
                let can_move_on = answered || question.is_bonus();
                let fix_code_pending = matches!(question.kind, QuestionKind::FixCode { .. }) && !answered;
                if can_move_on && !fix_code_pending {
                    let label = match (answered, is_last) {
                        (_, true) => "🏁 Finish",
                        (true, false) => "Next ➡",
                        (false, false) => "Skip ➡",
                    };
                    if ui.add_sized([panel_width * 0.5, 36.0], Button::new(label)).clicked() {
                        app.next_question(now);
                    }
                }
            });
        });
    });
}

fn option_state(question_ui: &QuestionUi, answered: bool, option: usize, correct: usize) -> OptionState {
    if !answered {
        OptionState::Open
    } else if option == correct {
        OptionState::Right
    } else if question_ui.picked == Some(option) {
        OptionState::Wrong
    } else {
        OptionState::Locked
    }
}

fn options_list(
    app: &mut QuizApp,
    ui: &mut Ui,
    width: f32,
    options: &[String],
    correct: usize,
    answered: bool,
) {
    for (i, option) in options.iter().enumerate() {
        let state = option_state(&app.question_ui, answered, i, correct);
        if option_button(ui, i, option, width, state) {
            app.choose_option(i);
        }
        ui.add_space(6.0);
    }
}

fn fix_code(
    app: &mut QuizApp,
    ui: &mut Ui,
    width: f32,
    instruction: &str,
    hint: Option<&str>,
    answered: bool,
    now: f64,
) {
    ui.label(instruction);
    ui.add_space(6.0);
    code_editor_input(
        ui,
        "fix_code_input",
        width,
        8,
        html_syntax(),
        &mut app.question_ui.code_input,
        220.0,
    );

    let failed = matches!(app.question_ui.feedback, Some(Feedback::Incorrect { .. }));
    if failed {
        if let Some(hint) = hint {
            ui.label(format!("💡 Hint: {hint}"));
        }
    }

    if !answered {
        ui.add_space(6.0);
        let (check, skip) = two_button_row(ui, width, "✔ Check code", "Skip & continue");
        if check {
            app.submit_code();
        }
        if skip {
            app.skip_question(now);
        }
    }
}

fn match_board(app: &mut QuizApp, ui: &mut Ui, width: f32, question: &Question, matched: &[bool], now: f64) {
    let Some(pairs) = question.pairs() else {
        return;
    };
    let rejected = app.question_ui.rejected_at.is_some();
    let column_w = (width - 24.0) / 2.0;
    let right_order = app.question_ui.right_order.clone();

    let cell_state = |pair: usize, selected: Option<usize>| {
        if matched.get(pair).copied().unwrap_or(false) {
            PairState::Matched
        } else if selected == Some(pair) {
            if rejected { PairState::Rejected } else { PairState::Selected }
        } else {
            PairState::Open
        }
    };

    ui.label("Click a term on the left, then its match on the right.");
    ui.add_space(6.0);
    ui.horizontal_top(|ui| {
        ui.vertical(|ui| {
            for (i, pair) in pairs.iter().enumerate() {
                let state = cell_state(i, app.question_ui.selected_left);
                if pair_button(ui, &pair.left, column_w, state, rejected) {
                    app.pick_left(i, now);
                }
                ui.add_space(6.0);
            }
        });
        ui.add_space(12.0);
        ui.vertical(|ui| {
            for &j in &right_order {
                let Some(pair) = pairs.get(j) else { continue };
                let state = cell_state(j, app.question_ui.selected_right);
                if pair_button(ui, &pair.right, column_w, state, rejected) {
                    app.pick_right(j, now);
                }
                ui.add_space(6.0);
            }
        });
    });
}
