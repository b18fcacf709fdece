use crate::app::state::AppState;
use crate::quiz::snapshot::Summary;
use crate::ui::layout::centered;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

pub fn render(frame: &mut Frame, area: Rect, state: &AppState, summary: &Summary) {
    let popup = centered(area, 72, 12);

    let block = Block::default()
        .title(" Results ")
        .title_style(Theme::title())
        .borders(Borders::ALL)
        .border_type(Theme::border_type())
        .border_style(Theme::border_focused());

    let lines = vec![
        Line::from(""),
        Line::styled(state.title().to_string(), Theme::key_hint()),
        Line::from(""),
        Line::styled(summary.score_line(), Theme::score()),
        Line::styled(summary.time_line(), Theme::score()),
        Line::from(""),
        Line::from(summary.message()),
        Line::from(""),
        Line::styled(" Restart Quiz (r) ", Theme::button(Theme::ACCENT_TEAL)),
    ];

    let paragraph = Paragraph::new(lines)
        .block(block)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, popup);
}
