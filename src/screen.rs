use teloxide::types::{KeyboardButton, KeyboardMarkup};

use crate::quiz::{strings, QuizSession};

pub const TRUE_BUTTON: &str = "True";
pub const FALSE_BUTTON: &str = "False";
pub const PREV_BUTTON: &str = "◀ Prev";
pub const NEXT_BUTTON: &str = "Next ▶";
pub const CHEAT_BUTTON: &str = "Cheat!";
pub const SHOW_ANSWER_BUTTON: &str = "Show Answer";
pub const BACK_BUTTON: &str = "Back";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizAction {
    Answer(bool),
    Next,
    Prev,
    Cheat,
}

impl QuizAction {
    pub fn parse(text: &str) -> Option<Self> {
        match text.trim() {
            TRUE_BUTTON => Some(Self::Answer(true)),
            FALSE_BUTTON => Some(Self::Answer(false)),
            NEXT_BUTTON => Some(Self::Next),
            PREV_BUTTON => Some(Self::Prev),
            CHEAT_BUTTON => Some(Self::Cheat),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheatAction {
    ShowAnswer,
    Back,
}

impl CheatAction {
    pub fn parse(text: &str) -> Option<Self> {
        match text.trim() {
            SHOW_ANSWER_BUTTON => Some(Self::ShowAnswer),
            BACK_BUTTON => Some(Self::Back),
            _ => None,
        }
    }
}

pub fn question_text(session: &QuizSession) -> String {
    let mut text = format!(
        "Question {} of {} ({} answered)\n\n{}",
        session.current_index() + 1,
        session.question_count(),
        session.answered_count(),
        strings::resolve(session.current_question_text())
    );
    if let Some(answer) = session.current_user_answer() {
        text.push_str(&format!(
            "\n\nYou answered: {}",
            strings::answer_label(answer)
        ));
    }
    text
}

/// Answer buttons are only offered while the displayed question is unanswered.
pub fn question_keyboard(session: &QuizSession) -> KeyboardMarkup {
    let mut rows = Vec::new();
    if !session.is_current_answered() {
        rows.push(vec![
            KeyboardButton::new(TRUE_BUTTON),
            KeyboardButton::new(FALSE_BUTTON),
        ]);
    }
    rows.push(vec![
        KeyboardButton::new(PREV_BUTTON),
        KeyboardButton::new(CHEAT_BUTTON),
        KeyboardButton::new(NEXT_BUTTON),
    ]);
    KeyboardMarkup::new(rows)
}

pub fn cheat_keyboard(answer_shown: bool) -> KeyboardMarkup {
    let mut rows = Vec::new();
    if !answer_shown {
        rows.push(vec![KeyboardButton::new(SHOW_ANSWER_BUTTON)]);
    }
    rows.push(vec![KeyboardButton::new(BACK_BUTTON)]);
    KeyboardMarkup::new(rows)
}
