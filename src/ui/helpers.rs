// src/ui/helpers.rs
use egui::{Button, Color32, RichText, Ui, Vec2};

pub const GREEN: Color32 = Color32::from_rgb(22, 163, 74);
pub const RED: Color32 = Color32::from_rgb(220, 38, 38);

pub fn big_list_button(ui: &mut Ui, label: String, width: f32, height: f32, enabled: bool) -> bool {
    ui.add_enabled(enabled, Button::new(label).min_size(Vec2::new(width, height))).clicked()
}

/// How an answer option should look once the question has been answered.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OptionState {
    Open,
    Locked,
    Right,
    Wrong,
}

/// A lettered option button (A, B, C…). Disabled once answered.
pub fn option_button(ui: &mut Ui, index: usize, text: &str, width: f32, state: OptionState) -> bool {
    let letter = (b'A' + (index as u8 % 26)) as char;
    let label = RichText::new(format!("{letter}   {text}")).monospace().size(16.0);
    let mut button = Button::new(label).min_size(Vec2::new(width, 44.0));
    button = match state {
        OptionState::Right => button.fill(GREEN.gamma_multiply(0.5)).stroke((2.0, GREEN)),
        OptionState::Wrong => button.fill(RED.gamma_multiply(0.5)).stroke((2.0, RED)),
        OptionState::Open | OptionState::Locked => button,
    };
    ui.add_enabled(state == OptionState::Open, button).clicked()
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PairState {
    Open,
    Selected,
    Matched,
    Rejected,
}

/// One cell of a match-concept column.
pub fn pair_button(ui: &mut Ui, text: &str, width: f32, state: PairState, frozen: bool) -> bool {
    let mut button = Button::new(RichText::new(text).size(15.0)).min_size(Vec2::new(width, 40.0));
    button = match state {
        PairState::Matched => button.fill(GREEN.gamma_multiply(0.5)).stroke((2.0, GREEN)),
        PairState::Rejected => button.fill(RED.gamma_multiply(0.5)).stroke((2.0, RED)),
        PairState::Selected => button.selected(true),
        PairState::Open => button,
    };
    let enabled = state != PairState::Matched && !frozen;
    ui.add_enabled(enabled, button).clicked()
}
