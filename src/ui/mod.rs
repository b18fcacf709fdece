mod layout;
mod question;
mod results;
mod status_bar;
mod theme;
mod welcome;

use crate::app::state::AppState;
use crate::quiz::Phase;
use ratatui::prelude::*;

/// Draw the whole screen from the cached snapshot.
pub fn render(frame: &mut Frame, state: &AppState) {
    let layout = layout::compute_layout(frame.area());
    let snapshot = &state.snapshot;

    match (snapshot.phase, &snapshot.question, &snapshot.summary) {
        (Phase::InProgress, Some(view), _) => question::render(frame, &layout, state, view),
        (Phase::Completed, _, Some(summary)) => results::render(frame, layout.content, state, summary),
        _ => welcome::render(frame, layout.content, state),
    }

    status_bar::render(frame, layout.status_bar, state);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::handler::handle_event;
    use crate::app::event::AppEvent;
    use crate::bank::{OptionId, QuestionBank};
    use crate::config::AppConfig;
    use crate::quiz::timer::ManualTimer;
    use crate::quiz::QuizSession;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    const BANK: &str = r#"
title = "Render test"

[[questions]]
text = "Pick B"
options = ["A) one", "B) two"]
answer = "B"

[[questions]]
text = "Pick both"
options = ["A) one", "B) two"]
answer = ["A", "B"]
"#;

    fn app() -> AppState {
        let bank = QuestionBank::from_toml_str(BANK).unwrap();
        let session = QuizSession::new(bank, Box::new(ManualTimer::default()));
        AppState::new(AppConfig::default(), session)
    }

    fn draw(state: &AppState) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal.draw(|f| render(f, state)).unwrap();
        let buffer = terminal.backend().buffer();
        let mut text = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                text.push_str(buffer[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    #[test]
    fn test_welcome_screen() {
        let state = app();
        let screen = draw(&state);
        assert!(screen.contains("Welcome to the Render test!"));
        assert!(screen.contains("Start Quiz"));
        assert!(screen.contains("Time Elapsed: 00:00"));
    }

    #[test]
    fn test_question_screen_shows_checked_options_and_feedback() {
        let mut state = app();
        state.session.start();
        state.session.select_option(&OptionId::new("A"), true);
        let _ = state.session.request_feedback();
        handle_event(&mut state, AppEvent::ClockTick { cycle: 1 });

        let screen = draw(&state);
        assert!(screen.contains("Q1: Pick B"));
        assert!(screen.contains("[x] A) one"));
        assert!(screen.contains("[ ] B) two"));
        assert!(screen.contains("Wrong! The correct answer is: B) two"));
        assert!(screen.contains("Question 1/2"));
        assert!(screen.contains("Time Elapsed: 00:01"));
        assert!(screen.contains("Show Feedback (f/?)"));
        assert!(screen.contains("Next Question"));
    }

    #[test]
    fn test_results_screen() {
        let mut state = app();
        state.session.start();
        state.session.select_option(&OptionId::new("B"), true);
        state.session.next();
        state.session.next();
        state.refresh();

        let screen = draw(&state);
        assert!(screen.contains("You scored 1 out of 2 (50.00%)"));
        assert!(screen.contains("Time Taken: 00:00"));
        assert!(screen.contains("Good job!"));
        assert!(screen.contains("Restart Quiz"));
    }
}
