//! The quiz session state machine.
//!
//! `NotStarted -> InProgress -> Completed`, and back to `InProgress` only
//! through [`QuizSession::restart`]. Navigation commits the working selection
//! into the answer record; scoring happens once, on completion, from the
//! committed answers alone.

use super::grading::{self, FeedbackError, Verdict};
use super::snapshot::{format_elapsed, FeedbackView, OptionView, QuestionView, SessionSnapshot, Summary};
use super::timer::{TimerCycle, TimerService};
use crate::bank::{OptionId, Question, QuestionBank};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    NotStarted,
    InProgress,
    Completed,
}

/// Durable session bookkeeping.
///
/// `current_index == N` means the quiz is complete. `score` is only
/// meaningful after completion.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionState {
    pub current_index: usize,
    pub score: usize,
    pub elapsed_seconds: u64,
    pub answers_selected: BTreeMap<usize, BTreeSet<OptionId>>,
    pub timer_running: bool,
}

impl SessionState {
    fn started() -> Self {
        Self {
            timer_running: true,
            ..Self::default()
        }
    }
}

pub struct QuizSession {
    bank: QuestionBank,
    phase: Phase,
    state: SessionState,
    /// Working selection for the current question, not yet committed.
    selection: BTreeSet<OptionId>,
    feedback: Option<Result<Verdict, FeedbackError>>,
    cycle: TimerCycle,
    timer: Box<dyn TimerService>,
}

impl QuizSession {
    pub fn new(bank: QuestionBank, timer: Box<dyn TimerService>) -> Self {
        Self {
            bank,
            phase: Phase::NotStarted,
            state: SessionState::default(),
            selection: BTreeSet::new(),
            feedback: None,
            cycle: 0,
            timer,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn selection(&self) -> &BTreeSet<OptionId> {
        &self.selection
    }

    pub fn bank(&self) -> &QuestionBank {
        &self.bank
    }

    fn current_question(&self) -> Option<&Question> {
        match self.phase {
            Phase::InProgress => self.bank.get(self.state.current_index),
            _ => None,
        }
    }

    /// Begin the quiz. Only valid from `NotStarted`.
    pub fn start(&mut self) -> bool {
        if self.phase != Phase::NotStarted {
            return false;
        }
        self.begin();
        tracing::info!(questions = self.bank.len(), "quiz started");
        true
    }

    /// Reset to the freshly started state from any phase.
    pub fn restart(&mut self) {
        self.begin();
        tracing::info!(cycle = self.cycle, "quiz restarted");
    }

    fn begin(&mut self) {
        self.phase = Phase::InProgress;
        self.state = SessionState::started();
        self.feedback = None;
        self.cycle += 1;
        self.timer.start(self.cycle);
        self.load_question(0);
    }

    /// Set whether `id` is part of the working selection.
    pub fn select_option(&mut self, id: &OptionId, is_selected: bool) -> bool {
        let Some(question) = self.current_question() else {
            return false;
        };
        if !question.has_option(id) {
            return false;
        }
        if is_selected {
            self.selection.insert(id.clone());
        } else {
            self.selection.remove(id);
        }
        true
    }

    pub fn toggle_option(&mut self, id: &OptionId) -> bool {
        let selected = self.selection.contains(id);
        self.select_option(id, !selected)
    }

    /// Advisory check of the working selection. Never touches the score or
    /// the answer record.
    pub fn request_feedback(&mut self) -> Result<Verdict, FeedbackError> {
        let result = match self.current_question() {
            Some(question) => grading::grade(question, &self.selection),
            None => return Err(FeedbackError::NotInProgress),
        };
        tracing::debug!(
            question = self.state.current_index + 1,
            correct = matches!(result, Ok(Verdict::Correct)),
            "feedback requested"
        );
        self.feedback = Some(result.clone());
        result
    }

    /// Commit and move forward. Leaving the last question completes the quiz.
    pub fn next(&mut self) {
        if self.phase != Phase::InProgress {
            return;
        }
        self.commit();
        self.state.current_index += 1;
        if self.state.current_index >= self.bank.len() {
            self.state.current_index = self.bank.len();
            self.finalize();
        } else {
            self.load_question(self.state.current_index);
        }
    }

    /// Commit and move back. At the first question only the commit happens.
    pub fn previous(&mut self) {
        if self.phase != Phase::InProgress {
            return;
        }
        self.commit();
        self.state.current_index = self.state.current_index.saturating_sub(1);
        self.load_question(self.state.current_index);
    }

    /// One timer tick. Ticks from an older cycle or after the timer stopped
    /// are dropped.
    pub fn tick(&mut self, cycle: TimerCycle) {
        if self.state.timer_running && cycle == self.cycle {
            self.state.elapsed_seconds += 1;
        }
    }

    fn commit(&mut self) {
        let index = self.state.current_index;
        tracing::debug!(question = index + 1, selected = self.selection.len(), "answer committed");
        self.state
            .answers_selected
            .insert(index, std::mem::take(&mut self.selection));
        self.feedback = None;
    }

    fn load_question(&mut self, index: usize) {
        self.selection = self
            .state
            .answers_selected
            .get(&index)
            .cloned()
            .unwrap_or_default();
    }

    fn finalize(&mut self) {
        self.state.timer_running = false;
        self.timer.stop();
        self.phase = Phase::Completed;
        self.selection.clear();

        let empty = BTreeSet::new();
        let score = self
            .bank
            .iter()
            .enumerate()
            .filter(|(index, question)| {
                let selected = self.state.answers_selected.get(index).unwrap_or(&empty);
                grading::is_correct(&question.answer, selected)
            })
            .count();
        self.state.score = score;

        tracing::info!(
            score = self.state.score,
            total = self.bank.len(),
            elapsed = %format_elapsed(self.state.elapsed_seconds),
            "quiz completed"
        );
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        let total = self.bank.len();
        let index = self.state.current_index;

        let question = self.current_question().map(|q| QuestionView {
            number: index + 1,
            total,
            text: q.text.clone(),
            options: q
                .options
                .iter()
                .map(|o| OptionView {
                    id: o.id.clone(),
                    label: o.label.clone(),
                    checked: self.selection.contains(&o.id),
                })
                .collect(),
            multi_answer: q.is_multi_answer(),
            is_last: index + 1 == total,
        });

        let in_progress = self.phase == Phase::InProgress;
        let summary = (self.phase == Phase::Completed)
            .then(|| Summary::new(self.state.score, total, self.state.elapsed_seconds));

        SessionSnapshot {
            title: self.bank.title().to_string(),
            phase: self.phase,
            question,
            can_go_previous: in_progress && index > 0,
            can_go_next: in_progress,
            feedback: self.feedback.as_ref().map(FeedbackView::from_result),
            elapsed: format_elapsed(self.state.elapsed_seconds),
            summary,
        }
    }
}
