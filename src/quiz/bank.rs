use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use crate::error::BankError;
use crate::quiz::{Question, TextRef};

/// Fixed, ordered list of questions. Never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionBank {
    questions: Vec<Question>,
}

impl QuestionBank {
    pub fn new(questions: Vec<Question>) -> Result<Self, BankError> {
        if questions.is_empty() {
            return Err(BankError::Empty);
        }
        Ok(Self { questions })
    }

    /// The built-in geography questions.
    pub fn geography() -> Self {
        let questions = [
            ("question_australia", true),
            ("question_oceans", true),
            ("question_mideast", false),
            ("question_africa", false),
            ("question_americas", true),
            ("question_asia", true),
            ("question_continental_shift", true),
            ("question_mt_thor", true),
            ("question_north_hemisphere", false),
            ("question_california", false),
            ("question_dead_sea", true),
        ]
        .into_iter()
        .map(|(key, answer)| Question::new(TextRef::new(key), answer))
        .collect();

        Self { questions }
    }

    /// Reads a JSON array of `{ "text": ..., "answer": ... }` objects.
    pub fn from_reader(reader: impl Read) -> Result<Self, BankError> {
        let questions: Vec<Question> = serde_json::from_reader(reader)?;
        Self::new(questions)
    }

    pub fn from_path(path: &Path) -> Result<Self, BankError> {
        let file = File::open(path).map_err(|source| BankError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_reader(BufReader::new(file))
    }

    /// Panics if `index` is out of range, like slice indexing.
    pub fn get(&self, index: usize) -> &Question {
        &self.questions[index]
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    /// Always false; construction refuses an empty list.
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Question> {
        self.questions.iter()
    }
}
