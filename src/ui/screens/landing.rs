use crate::ui::theme::{COLOR_DIM, COLOR_SUCCESS, SAFFRON};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub const CALL_TO_ACTION: &str = "I am a Business Owner - Start Growing";

pub fn render(frame: &mut Frame, area: Rect) {
    let block = Block::default().borders(Borders::ALL);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(8),
            Constraint::Min(0),
        ])
        .split(inner);

    let lines = vec![
        Line::from(Span::styled(
            "BHARAT BIZ OS",
            Style::default().fg(SAFFRON).add_modifier(Modifier::BOLD),
        )),
        Line::from("The AI Engine for Small Indian Businesses"),
        Line::from(""),
        Line::from(Span::styled(
            "Solve your growth stalls with resource-aware AI.",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("[ Enter ] ", Style::default().fg(COLOR_DIM)),
            Span::styled(
                CALL_TO_ACTION,
                Style::default()
                    .fg(COLOR_SUCCESS)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
    ];

    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), chunks[1]);
}
