use std::sync::Arc;

use crate::quiz::cheat::CheatResponse;
use crate::quiz::{QuestionBank, TextRef, Verdict};

/// Mathematical modulo: the result is always in `[0, y)`, even for negative `x`.
pub fn floor_mod(x: isize, y: usize) -> usize {
    // Banks are small in-memory lists, their length always fits in an isize.
    x.rem_euclid(y as isize) as usize
}

/// Persisted form of a session, stored between chat events.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct SessionSnapshot {
    pub current_index: usize,
    pub answered: Vec<bool>,
    pub user_answers: Vec<bool>,
    pub is_cheater: bool,
}

/// Navigation position plus per-question and per-session state over a bank.
#[derive(Debug, Clone)]
pub struct QuizSession {
    bank: Arc<QuestionBank>,
    current_index: usize,
    answered: Vec<bool>,
    // Written on every check; verdicts never read it.
    user_answers: Vec<bool>,
    is_cheater: bool,
}

impl QuizSession {
    pub fn new(bank: Arc<QuestionBank>) -> Self {
        debug_assert!(!bank.is_empty());
        let len = bank.len();
        Self {
            bank,
            current_index: 0,
            answered: vec![false; len],
            user_answers: vec![false; len],
            is_cheater: false,
        }
    }

    /// Rebuilds a session from a snapshot.
    ///
    /// Either the whole snapshot is applied or none of it: a snapshot that
    /// does not fit `bank` (index out of range, arrays of the wrong length)
    /// is discarded and the session starts fresh.
    pub fn restore(bank: Arc<QuestionBank>, snapshot: Option<SessionSnapshot>) -> Self {
        let Some(snapshot) = snapshot else {
            return Self::new(bank);
        };

        let len = bank.len();
        if snapshot.current_index >= len
            || snapshot.answered.len() != len
            || snapshot.user_answers.len() != len
        {
            log::warn!(
                "Discarding session snapshot that does not fit a bank of {} questions",
                len
            );
            return Self::new(bank);
        }

        Self {
            bank,
            current_index: snapshot.current_index,
            answered: snapshot.answered,
            user_answers: snapshot.user_answers,
            is_cheater: snapshot.is_cheater,
        }
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            current_index: self.current_index,
            answered: self.answered.clone(),
            user_answers: self.user_answers.clone(),
            is_cheater: self.is_cheater,
        }
    }

    pub fn current_question_text(&self) -> &TextRef {
        self.bank.get(self.current_index).text()
    }

    pub fn current_question_answer(&self) -> bool {
        self.bank.get(self.current_index).answer()
    }

    pub fn move_to_next(&mut self) {
        self.current_index = floor_mod(self.current_index as isize + 1, self.bank.len());
    }

    pub fn move_to_prev(&mut self) {
        self.current_index = floor_mod(self.current_index as isize - 1, self.bank.len());
    }

    pub fn is_current_answered(&self) -> bool {
        self.answered[self.current_index]
    }

    /// Marks the current question answered and judges `user_answer`.
    ///
    /// Does not refuse a second check of the same question; keeping answered
    /// questions read-only is up to the caller.
    pub fn check_answer(&mut self, user_answer: bool) -> Verdict {
        let correct = self.current_question_answer();
        self.answered[self.current_index] = true;
        self.user_answers[self.current_index] = user_answer;

        if self.is_cheater {
            Verdict::Judged
        } else if user_answer == correct {
            Verdict::Correct
        } else {
            Verdict::Incorrect
        }
    }

    /// The value handed to the cheat screen.
    pub fn begin_cheat(&self) -> bool {
        self.current_question_answer()
    }

    /// Once tainted, a session never becomes honest again.
    pub fn resolve_cheat(&mut self, was_shown: bool) {
        if was_shown {
            self.is_cheater = true;
        }
    }

    pub fn resolve_cheat_response(&mut self, response: Option<CheatResponse>) {
        self.resolve_cheat(CheatResponse::was_shown(response));
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn is_cheater(&self) -> bool {
        self.is_cheater
    }

    /// What the user submitted for the displayed question, if anything.
    pub fn current_user_answer(&self) -> Option<bool> {
        self.is_current_answered()
            .then(|| self.user_answers[self.current_index])
    }

    pub fn question_count(&self) -> usize {
        self.bank.len()
    }

    pub fn answered_count(&self) -> usize {
        self.answered.iter().filter(|a| **a).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quiz::Question;

    fn bank_with_answers(answers: &[bool]) -> Arc<QuestionBank> {
        let questions = answers
            .iter()
            .enumerate()
            .map(|(i, answer)| Question::new(TextRef::new(format!("q{i}")), *answer))
            .collect();
        Arc::new(QuestionBank::new(questions).unwrap())
    }

    fn session_at(bank: &Arc<QuestionBank>, index: usize) -> QuizSession {
        let mut session = QuizSession::new(bank.clone());
        for _ in 0..index {
            session.move_to_next();
        }
        session
    }

    #[test]
    fn test_floor_mod_wraps_negative_values() {
        assert_eq!(floor_mod(-1, 8), 7);
        assert_eq!(floor_mod(-9, 8), 7);
        assert_eq!(floor_mod(8, 8), 0);
        assert_eq!(floor_mod(3, 8), 3);
        assert_eq!(floor_mod(0, 1), 0);
        assert_eq!(floor_mod(-5, 1), 0);
    }

    #[test]
    fn test_fresh_session_defaults() {
        let bank = bank_with_answers(&[true, false, true]);
        let session = QuizSession::new(bank);

        assert_eq!(session.current_index(), 0);
        assert_eq!(session.snapshot().answered, &[false, false, false]);
        assert_eq!(session.snapshot().user_answers, &[false, false, false]);
        assert!(!session.is_cheater());
        assert_eq!(session.current_question_text().as_str(), "q0");
        assert!(session.current_question_answer());
    }

    #[test]
    fn test_repeated_moves_land_on_floor_mod() {
        for n in 1..=5usize {
            let bank = bank_with_answers(&vec![true; n]);
            for start in 0..n {
                for k in 0..(3 * n + 2) {
                    let mut forward = session_at(&bank, start);
                    let mut backward = session_at(&bank, start);
                    for _ in 0..k {
                        forward.move_to_next();
                        backward.move_to_prev();
                    }
                    assert_eq!(
                        forward.current_index(),
                        floor_mod(start as isize + k as isize, n)
                    );
                    assert_eq!(
                        backward.current_index(),
                        floor_mod(start as isize - k as isize, n)
                    );
                }
            }
        }
    }

    #[test]
    fn test_next_then_prev_restores_index() {
        let bank = bank_with_answers(&[true, false, true, false]);
        for start in 0..bank.len() {
            let mut session = session_at(&bank, start);
            session.move_to_next();
            session.move_to_prev();
            assert_eq!(session.current_index(), start);

            session.move_to_prev();
            session.move_to_next();
            assert_eq!(session.current_index(), start);
        }
    }

    #[test]
    fn test_prev_from_first_question_wraps_to_last() {
        let bank = bank_with_answers(&[true; 8]);
        let mut session = QuizSession::new(bank);

        session.move_to_prev();

        assert_eq!(session.current_index(), 7);
    }

    #[test]
    fn test_check_answer_always_marks_answered() {
        let bank = bank_with_answers(&[true, false]);
        let mut session = QuizSession::new(bank);

        assert_eq!(session.check_answer(false), Verdict::Incorrect);
        assert!(session.is_current_answered());

        session.move_to_next();
        assert!(!session.is_current_answered());
        assert_eq!(session.check_answer(false), Verdict::Correct);
        assert!(session.is_current_answered());
        assert_eq!(session.answered_count(), 2);
        assert_eq!(session.snapshot().user_answers, &[false, false]);
    }

    #[test]
    fn test_check_answer_does_not_block_recheck() {
        let bank = bank_with_answers(&[true]);
        let mut session = QuizSession::new(bank);

        assert_eq!(session.check_answer(true), Verdict::Correct);
        assert_eq!(session.check_answer(false), Verdict::Incorrect);
        assert_eq!(session.snapshot().answered, &[true]);
        assert_eq!(session.snapshot().user_answers, &[false]);
    }

    #[test]
    fn test_wrap_then_check_scenario() {
        let bank = bank_with_answers(&[true, true, false]);
        let mut session = QuizSession::new(bank);

        session.move_to_prev();
        assert_eq!(session.current_index(), 2);
        assert_eq!(session.check_answer(false), Verdict::Correct);
        assert_eq!(session.snapshot().answered, &[false, false, true]);
    }

    #[test]
    fn test_cheating_judges_even_a_matching_answer() {
        let bank = bank_with_answers(&[true, true, false]);
        let mut session = QuizSession::new(bank);

        assert!(session.begin_cheat());
        session.resolve_cheat(true);

        assert_eq!(session.check_answer(true), Verdict::Judged);
    }

    #[test]
    fn test_cheating_taints_every_later_check() {
        let bank = bank_with_answers(&[true, false, true]);
        let mut session = QuizSession::new(bank);
        session.resolve_cheat(true);

        for _ in 0..session.question_count() {
            assert_eq!(session.check_answer(true), Verdict::Judged);
            assert_eq!(session.check_answer(false), Verdict::Judged);
            session.move_to_next();
        }

        session.resolve_cheat(false);
        assert!(session.is_cheater());
    }

    #[test]
    fn test_declined_cheat_leaves_session_honest() {
        let bank = bank_with_answers(&[false]);
        let mut session = QuizSession::new(bank);

        assert!(!session.begin_cheat());
        session.resolve_cheat(false);
        session.resolve_cheat_response(None);

        assert!(!session.is_cheater());
        assert_eq!(session.check_answer(false), Verdict::Correct);
    }

    #[test]
    fn test_cheat_response_is_folded_in() {
        let bank = bank_with_answers(&[true]);
        let mut session = QuizSession::new(bank);

        session.resolve_cheat_response(Some(CheatResponse { answer_shown: false }));
        assert!(!session.is_cheater());

        session.resolve_cheat_response(Some(CheatResponse { answer_shown: true }));
        assert!(session.is_cheater());
    }

    #[test]
    fn test_snapshot_round_trip_preserves_state() {
        let bank = bank_with_answers(&[true, false, true]);
        let mut session = QuizSession::new(bank.clone());
        session.move_to_next();
        session.check_answer(true);
        session.resolve_cheat(true);

        let restored = QuizSession::restore(bank, Some(session.snapshot()));

        assert_eq!(restored.current_index(), 1);
        assert_eq!(restored.snapshot().answered, &[false, true, false]);
        assert_eq!(restored.snapshot().user_answers, &[false, true, false]);
        assert!(restored.is_cheater());
    }

    #[test]
    fn test_restore_without_snapshot_starts_fresh() {
        let bank = bank_with_answers(&[true, false]);
        let session = QuizSession::restore(bank, None);

        assert_eq!(session.snapshot(), SessionSnapshot {
            current_index: 0,
            answered: vec![false, false],
            user_answers: vec![false, false],
            is_cheater: false,
        });
    }

    #[test]
    fn test_restore_discards_mismatched_snapshot_entirely() {
        let bank = bank_with_answers(&[true, false]);

        let out_of_range = SessionSnapshot {
            current_index: 2,
            answered: vec![true, true],
            user_answers: vec![true, true],
            is_cheater: true,
        };
        let session = QuizSession::restore(bank.clone(), Some(out_of_range));
        assert_eq!(session.current_index(), 0);
        assert_eq!(session.snapshot().answered, &[false, false]);
        assert!(!session.is_cheater());

        let wrong_length = SessionSnapshot {
            current_index: 1,
            answered: vec![true, true, true],
            user_answers: vec![false, false],
            is_cheater: true,
        };
        let session = QuizSession::restore(bank, Some(wrong_length));
        assert_eq!(session.current_index(), 0);
        assert_eq!(session.snapshot().answered, &[false, false]);
        assert!(!session.is_cheater());
    }
}
