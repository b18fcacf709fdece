use crate::app::state::AppState;
use crate::quiz::snapshot::{FeedbackTone, QuestionView};
use crate::ui::layout::QuizLayout;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap};

pub fn render(frame: &mut Frame, layout: &QuizLayout, state: &AppState, question: &QuestionView) {
    render_question(frame, layout.question, state, question);
    render_options(frame, layout.options, state, question);
    render_feedback(frame, layout.feedback, state);
    render_buttons(frame, layout.buttons, state, question);
}

fn render_question(frame: &mut Frame, area: Rect, state: &AppState, question: &QuestionView) {
    let block = Block::default()
        .title(format!(" {} ", state.title()))
        .title_style(Theme::title())
        .borders(Borders::ALL)
        .border_type(Theme::border_type())
        .border_style(Theme::border());

    let text = format!("Q{}: {}", question.number, question.text);
    let paragraph = Paragraph::new(text)
        .style(Theme::question_text())
        .block(block)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, area);
}

fn render_options(frame: &mut Frame, area: Rect, state: &AppState, question: &QuestionView) {
    let title = if question.multi_answer {
        " Options (select all that apply) "
    } else {
        " Options "
    };
    let block = Block::default()
        .title(title)
        .title_style(Theme::title())
        .borders(Borders::ALL)
        .border_type(Theme::border_type())
        .border_style(Theme::border_focused());

    let items: Vec<ListItem> = question
        .options
        .iter()
        .map(|option| {
            let (mark, style) = if option.checked {
                ("[x] ", Theme::option_checked())
            } else {
                ("[ ] ", Theme::option_normal())
            };
            ListItem::new(Line::from(vec![
                Span::styled(mark, style),
                Span::styled(option.label.as_str(), style),
            ]))
        })
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(Theme::option_cursor())
        .highlight_symbol("❯ ");

    let mut list_state = ListState::default().with_selected(Some(state.cursor));
    frame.render_stateful_widget(list, area, &mut list_state);
}

fn render_feedback(frame: &mut Frame, area: Rect, state: &AppState) {
    let Some(feedback) = &state.snapshot.feedback else {
        return;
    };
    let style = match feedback.tone {
        FeedbackTone::Correct => Theme::feedback_correct(),
        FeedbackTone::Incorrect | FeedbackTone::Prompt => Theme::feedback_incorrect(),
    };
    let paragraph = Paragraph::new(feedback.text.as_str())
        .style(style)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, area);
}

fn render_buttons(frame: &mut Frame, area: Rect, state: &AppState, question: &QuestionView) {
    let snapshot = &state.snapshot;
    let previous_style = if snapshot.can_go_previous {
        Theme::button(Theme::ACCENT_ORANGE)
    } else {
        Theme::button_disabled()
    };
    let next_style = if snapshot.can_go_next {
        Theme::button(Theme::ACCENT_GREEN)
    } else {
        Theme::button_disabled()
    };
    let next_label = if question.is_last {
        " Finish ▶ "
    } else {
        " Next Question ▶ "
    };

    let line = Line::from(vec![
        Span::styled(" ◀ Previous Question ", previous_style),
        Span::raw("   "),
        Span::styled(" Show Feedback (f/?) ", Theme::button(Theme::ACCENT_TEAL)),
        Span::raw("   "),
        Span::styled(next_label, next_style),
    ]);
    frame.render_widget(Paragraph::new(line).alignment(Alignment::Center), area);
}
