pub mod bank;
pub mod cheat;
pub mod session;
pub mod strings;

pub use bank::QuestionBank;
pub use cheat::{CheatExchange, CheatRequest};
pub use session::{QuizSession, SessionSnapshot};

/// Opaque handle to a piece of question text.
///
/// The quiz core never interprets it; `strings::resolve` turns it into
/// something a person can read.
#[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct TextRef(String);

impl TextRef {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Question {
    text: TextRef,
    answer: bool,
}

impl Question {
    pub fn new(text: TextRef, answer: bool) -> Self {
        Self { text, answer }
    }

    pub fn text(&self) -> &TextRef {
        &self.text
    }

    pub fn answer(&self) -> bool {
        self.answer
    }
}

/// Outcome of checking a submitted answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Correct,
    Incorrect,
    /// The session saw an answer before submitting, so correctness no longer counts.
    Judged,
}
