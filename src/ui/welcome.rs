use crate::app::state::AppState;
use crate::ui::layout::centered;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let popup = centered(area, 70, 11);

    let block = Block::default()
        .title(format!(" {} ", state.title()))
        .title_style(Theme::title())
        .borders(Borders::ALL)
        .border_type(Theme::border_type())
        .border_style(Theme::border_focused());

    let questions = state.session.bank().len();
    let lines = vec![
        Line::from(""),
        Line::styled(format!("Welcome to the {}!", state.title()), Theme::title()),
        Line::from("Answer the questions by selecting the correct option(s)."),
        Line::from(format!("{} questions. The clock starts when you do.", questions)),
        Line::from("Let's begin!"),
        Line::from(""),
        Line::styled(" Start Quiz (Enter) ", Theme::button(Theme::ACCENT_GREEN)),
    ];

    let paragraph = Paragraph::new(lines)
        .block(block)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, popup);
}
