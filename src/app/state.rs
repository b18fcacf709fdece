use crate::bank::OptionId;
use crate::config::AppConfig;
use crate::quiz::{QuizSession, SessionSnapshot};

/// Everything the UI needs, plus the session that owns the quiz state.
///
/// Render code only reads `snapshot`; it is refreshed after every operation
/// that can change the session.
pub struct AppState {
    pub config: AppConfig,
    pub session: QuizSession,
    pub snapshot: SessionSnapshot,
    /// Highlighted option on the question screen.
    pub cursor: usize,
    pub should_quit: bool,
    pub dirty: bool,
}

impl AppState {
    pub fn new(config: AppConfig, session: QuizSession) -> Self {
        let snapshot = session.snapshot();
        Self {
            config,
            session,
            snapshot,
            cursor: 0,
            should_quit: false,
            dirty: true,
        }
    }

    /// Re-read the session. Marks the state dirty only when something
    /// visible changed.
    pub fn refresh(&mut self) {
        let snapshot = self.session.snapshot();
        if snapshot == self.snapshot {
            return;
        }
        let question_changed = snapshot.question.as_ref().map(|q| q.number)
            != self.snapshot.question.as_ref().map(|q| q.number)
            || snapshot.phase != self.snapshot.phase;
        if question_changed {
            self.cursor = 0;
        }
        self.snapshot = snapshot;
        self.dirty = true;
    }

    pub fn title(&self) -> &str {
        self.config
            .ui
            .title
            .as_deref()
            .unwrap_or(&self.snapshot.title)
    }

    fn option_count(&self) -> usize {
        self.snapshot
            .question
            .as_ref()
            .map(|q| q.options.len())
            .unwrap_or(0)
    }

    pub fn move_cursor_up(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            self.dirty = true;
        }
    }

    pub fn move_cursor_down(&mut self) {
        if self.cursor + 1 < self.option_count() {
            self.cursor += 1;
            self.dirty = true;
        }
    }

    pub fn cursor_option(&self) -> Option<OptionId> {
        self.snapshot
            .question
            .as_ref()
            .and_then(|q| q.options.get(self.cursor))
            .map(|o| o.id.clone())
    }

    /// Move the cursor onto the option with `id`, if the question has one.
    pub fn focus_option(&mut self, id: &OptionId) -> bool {
        let position = self
            .snapshot
            .question
            .as_ref()
            .and_then(|q| q.options.iter().position(|o| &o.id == id));
        match position {
            Some(idx) => {
                self.cursor = idx;
                self.dirty = true;
                true
            }
            None => false,
        }
    }
}
