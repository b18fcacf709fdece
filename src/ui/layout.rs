use ratatui::layout::{Constraint, Direction, Flex, Layout, Rect};

pub struct QuizLayout {
    /// Everything above the status bar.
    pub content: Rect,
    pub question: Rect,
    pub options: Rect,
    pub feedback: Rect,
    pub buttons: Rect,
    pub status_bar: Rect,
}

pub fn compute_layout(area: Rect) -> QuizLayout {
    // Main vertical split: content | status bar
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(5),    // Main content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    let content = main_chunks[0];
    let status_bar = main_chunks[1];

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5), // Question text
            Constraint::Min(3),    // Options
            Constraint::Length(3), // Feedback
            Constraint::Length(1), // Buttons
        ])
        .split(content);

    QuizLayout {
        content,
        question: chunks[0],
        options: chunks[1],
        feedback: chunks[2],
        buttons: chunks[3],
        status_bar,
    }
}

/// Centered box of at most `width` x `height`, clamped to `area`.
pub fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let [row] = Layout::vertical([Constraint::Length(height.min(area.height))])
        .flex(Flex::Center)
        .areas(area);
    let [cell] = Layout::horizontal([Constraint::Length(width.min(area.width))])
        .flex(Flex::Center)
        .areas(row);
    cell
}
