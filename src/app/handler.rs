use crate::app::action::Action;
use crate::app::event::AppEvent;
use crate::app::state::AppState;
use crate::bank::OptionId;
use crate::quiz::Phase;
use crossterm::event::{Event as CEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

pub fn handle_event(state: &mut AppState, event: AppEvent) -> Vec<Action> {
    match event {
        AppEvent::Terminal(cevent) => handle_terminal(state, cevent),
        AppEvent::ClockTick { cycle } => {
            state.session.tick(cycle);
            state.refresh();
            vec![]
        }
    }
}

fn handle_terminal(state: &mut AppState, event: CEvent) -> Vec<Action> {
    match event {
        CEvent::Key(key) if key.kind != KeyEventKind::Release => {
            let actions = handle_key(state, key);
            state.refresh();
            actions
        }
        CEvent::Resize(_, _) => {
            state.dirty = true;
            vec![]
        }
        _ => vec![],
    }
}

fn handle_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    // Global keybindings
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return vec![Action::Quit];
    }
    if key.code == KeyCode::Esc {
        return vec![Action::Quit];
    }

    match state.snapshot.phase {
        Phase::NotStarted => handle_welcome_key(state, key),
        Phase::InProgress => handle_question_key(state, key),
        Phase::Completed => handle_results_key(state, key),
    }
}

fn handle_welcome_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    match key.code {
        KeyCode::Enter | KeyCode::Char('s') | KeyCode::Char('S') => {
            state.session.start();
            vec![]
        }
        KeyCode::Char('q') | KeyCode::Char('Q') => vec![Action::Quit],
        _ => vec![],
    }
}

fn handle_question_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    // Option ids win over command letters, so a bank may use any prefix.
    if let KeyCode::Char(c) = key.code {
        if c.is_alphanumeric() {
            let id = OptionId::from(c);
            if state.session.toggle_option(&id) {
                state.focus_option(&id);
                return vec![];
            }
        }
    }

    match key.code {
        KeyCode::Up | KeyCode::Char('k') => state.move_cursor_up(),
        KeyCode::Down | KeyCode::Char('j') => state.move_cursor_down(),
        KeyCode::Char(' ') => {
            if let Some(id) = state.cursor_option() {
                state.session.toggle_option(&id);
            }
        }
        // `?` and Tab can never be option ids, so feedback stays reachable
        // when a bank uses `F)`.
        KeyCode::Char('f') | KeyCode::Char('?') | KeyCode::Tab => {
            if let Err(e) = state.session.request_feedback() {
                tracing::debug!(error = %e, "feedback unavailable");
            }
        }
        KeyCode::Right | KeyCode::Enter | KeyCode::Char('n') => {
            if state.snapshot.can_go_next {
                state.session.next();
            }
        }
        KeyCode::Left | KeyCode::Char('p') => {
            // Mirrors the disabled Previous button on the first question. The
            // working selection is kept and committed on the next navigation.
            if state.snapshot.can_go_previous {
                state.session.previous();
            }
        }
        KeyCode::Char('q') => return vec![Action::Quit],
        _ => {}
    }
    vec![]
}

fn handle_results_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    match key.code {
        KeyCode::Char('r') | KeyCode::Char('R') => {
            state.session.restart();
            vec![]
        }
        KeyCode::Char('q') | KeyCode::Char('Q') => vec![Action::Quit],
        _ => vec![],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bank::QuestionBank;
    use crate::config::AppConfig;
    use crate::quiz::snapshot::FeedbackTone;
    use crate::quiz::timer::ManualTimer;
    use crate::quiz::QuizSession;

    const BANK: &str = r#"
title = "Handler test"

[[questions]]
text = "Pick B"
options = ["A) one", "B) two", "C) three"]
answer = "B"

[[questions]]
text = "Pick A and C"
options = ["A) one", "B) two", "C) three"]
answer = ["A", "C"]
"#;

    fn app() -> AppState {
        let bank = QuestionBank::from_toml_str(BANK).unwrap();
        let session = QuizSession::new(bank, Box::new(ManualTimer::default()));
        AppState::new(AppConfig::default(), session)
    }

    fn press(state: &mut AppState, code: KeyCode) -> Vec<Action> {
        let key = KeyEvent::new(code, KeyModifiers::NONE);
        handle_event(state, AppEvent::Terminal(CEvent::Key(key)))
    }

    fn checked(state: &AppState) -> Vec<String> {
        state
            .snapshot
            .question
            .as_ref()
            .unwrap()
            .options
            .iter()
            .filter(|o| o.checked)
            .map(|o| o.id.to_string())
            .collect()
    }

    #[test]
    fn test_ctrl_c_quits_from_any_screen() {
        let mut state = app();
        let key = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        let actions = handle_event(&mut state, AppEvent::Terminal(CEvent::Key(key)));
        assert_eq!(actions, vec![Action::Quit]);
    }

    #[test]
    fn test_enter_starts_quiz() {
        let mut state = app();
        assert_eq!(state.snapshot.phase, Phase::NotStarted);
        press(&mut state, KeyCode::Enter);
        assert_eq!(state.snapshot.phase, Phase::InProgress);
        assert_eq!(state.snapshot.question.as_ref().unwrap().number, 1);
    }

    #[test]
    fn test_cursor_and_space_toggle() {
        let mut state = app();
        press(&mut state, KeyCode::Enter);
        press(&mut state, KeyCode::Down);
        press(&mut state, KeyCode::Char(' '));
        assert_eq!(checked(&state), vec!["B"]);

        press(&mut state, KeyCode::Down);
        press(&mut state, KeyCode::Down);
        assert_eq!(state.cursor, 2);
        press(&mut state, KeyCode::Up);
        press(&mut state, KeyCode::Char(' '));
        assert!(checked(&state).is_empty());
    }

    #[test]
    fn test_letter_toggles_option_by_id() {
        let mut state = app();
        press(&mut state, KeyCode::Enter);
        press(&mut state, KeyCode::Char('c'));
        assert_eq!(checked(&state), vec!["C"]);
        assert_eq!(state.cursor, 2);
        press(&mut state, KeyCode::Char('C'));
        assert!(checked(&state).is_empty());
    }

    #[test]
    fn test_feedback_key_shows_prompt_then_verdict() {
        let mut state = app();
        press(&mut state, KeyCode::Enter);
        press(&mut state, KeyCode::Char('f'));
        let feedback = state.snapshot.feedback.clone().unwrap();
        assert_eq!(feedback.tone, FeedbackTone::Prompt);

        press(&mut state, KeyCode::Char('b'));
        press(&mut state, KeyCode::Char('f'));
        let feedback = state.snapshot.feedback.clone().unwrap();
        assert_eq!(feedback.text, "Correct!");
    }

    #[test]
    fn test_feedback_reachable_when_bank_has_option_f() {
        let bank = QuestionBank::from_toml_str(
            r#"
[[questions]]
text = "Pick F"
options = ["A) a", "B) b", "C) c", "D) d", "E) e", "F) f"]
answer = "F"
"#,
        )
        .unwrap();
        let session = QuizSession::new(bank, Box::new(ManualTimer::default()));
        let mut state = AppState::new(AppConfig::default(), session);

        press(&mut state, KeyCode::Enter);
        press(&mut state, KeyCode::Char('a'));
        // `f` names an option here, so it toggles F rather than asking for feedback.
        press(&mut state, KeyCode::Char('f'));
        assert_eq!(checked(&state), vec!["A", "F"]);
        assert!(state.snapshot.feedback.is_none());

        press(&mut state, KeyCode::Char('?'));
        let feedback = state.snapshot.feedback.clone().unwrap();
        assert_eq!(feedback.tone, FeedbackTone::Incorrect);

        press(&mut state, KeyCode::Char('a'));
        press(&mut state, KeyCode::Tab);
        let feedback = state.snapshot.feedback.clone().unwrap();
        assert_eq!(feedback.text, "Correct!");
    }

    #[test]
    fn test_left_is_ignored_on_first_question() {
        let mut state = app();
        press(&mut state, KeyCode::Enter);
        press(&mut state, KeyCode::Char('a'));
        press(&mut state, KeyCode::Left);
        assert!(state.session.state().answers_selected.is_empty());

        press(&mut state, KeyCode::Right);
        assert_eq!(state.snapshot.question.as_ref().unwrap().number, 2);
        assert_eq!(state.cursor, 0);
        press(&mut state, KeyCode::Left);
        assert_eq!(checked(&state), vec!["A"]);
    }

    #[test]
    fn test_full_run_and_restart() {
        let mut state = app();
        press(&mut state, KeyCode::Enter);
        press(&mut state, KeyCode::Char('b'));
        press(&mut state, KeyCode::Char('n'));
        press(&mut state, KeyCode::Char('a'));
        press(&mut state, KeyCode::Char('c'));
        press(&mut state, KeyCode::Char('n'));

        assert_eq!(state.snapshot.phase, Phase::Completed);
        let summary = state.snapshot.summary.clone().unwrap();
        assert_eq!(summary.score, 2);
        assert_eq!(summary.score_line(), "You scored 2 out of 2 (100.00%)");

        press(&mut state, KeyCode::Char('r'));
        assert_eq!(state.snapshot.phase, Phase::InProgress);
        assert_eq!(state.session.state().score, 0);
        assert!(state.snapshot.summary.is_none());

        assert_eq!(press(&mut state, KeyCode::Esc), vec![Action::Quit]);
    }

    #[test]
    fn test_clock_tick_updates_elapsed() {
        let mut state = app();
        press(&mut state, KeyCode::Enter);
        state.dirty = false;
        handle_event(&mut state, AppEvent::ClockTick { cycle: 1 });
        assert_eq!(state.snapshot.elapsed, "00:01");
        assert!(state.dirty);

        // Stale cycle: nothing visible changes.
        state.dirty = false;
        handle_event(&mut state, AppEvent::ClockTick { cycle: 0 });
        assert_eq!(state.snapshot.elapsed, "00:01");
        assert!(!state.dirty);
    }

    #[test]
    fn test_title_override() {
        let mut state = app();
        assert_eq!(state.title(), "Handler test");
        state.config.ui.title = Some("Custom".into());
        assert_eq!(state.title(), "Custom");
    }
}
