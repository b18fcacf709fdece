use crate::app::state::AppState;
use crate::quiz::Phase;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

fn key_hints(phase: Phase) -> &'static str {
    match phase {
        Phase::NotStarted => "Enter start · q quit",
        Phase::InProgress => "↑↓ move · Space/letter toggle · f/? feedback · ←→ prev/next · Esc quit",
        Phase::Completed => "r restart · q quit",
    }
}

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let snapshot = &state.snapshot;
    let mut parts: Vec<Span> = Vec::new();

    parts.push(Span::styled(
        format!(" Time Elapsed: {} ", snapshot.elapsed),
        Theme::timer(),
    ));

    let progress = match (&snapshot.question, snapshot.phase) {
        (Some(q), _) => format!(" Question {}/{} ", q.number, q.total),
        (None, Phase::Completed) => " Finished ".to_string(),
        (None, _) => " Ready ".to_string(),
    };
    parts.push(Span::styled(progress, Theme::status_bar()));

    // Pad to push the key hints to the right edge
    let hints = if state.config.ui.show_key_hints {
        format!(" {} ", key_hints(snapshot.phase))
    } else {
        String::new()
    };
    let used: usize = parts.iter().map(|s| s.content.width()).sum();
    let remaining = (area.width as usize).saturating_sub(used + hints.width());
    parts.push(Span::styled(" ".repeat(remaining), Theme::status_bar()));
    parts.push(Span::styled(hints, Theme::status_bar()));

    frame.render_widget(Paragraph::new(Line::from(parts)), area);
}
