//! AI Guru chat screen.

use crate::transcript::{Role, Transcript};
use crate::ui::theme::{COLOR_DIM, COLOR_ERROR, COLOR_PRIMARY, SAFFRON};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

pub const INPUT_PLACEHOLDER: &str = "How can I grow today?";

/// Everything the chat screen reads.
pub struct AssistantView<'a> {
    pub transcript: &'a Transcript,
    pub input: &'a str,
    /// Prompt submitted but not yet answered
    pub pending: Option<&'a str>,
    /// Lines scrolled up from the bottom of the transcript
    pub scroll_up: u16,
    pub primary_model: Option<&'a str>,
    /// Reason the input is disabled, if it is
    pub unavailable: Option<&'a str>,
}

/// Draw the chat screen. Returns the largest useful `scroll_up` for this
/// frame, so callers can clamp scrolling.
pub fn render(frame: &mut Frame, area: Rect, view: &AssistantView<'_>) -> u16 {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Title + caption
            Constraint::Min(0),    // Transcript
            Constraint::Length(3), // Input
        ])
        .split(area);

    let caption = match view.primary_model {
        Some(model) => format!("Using {} for high-speed business consulting", model),
        None => "AI model not configured".to_string(),
    };
    let header = vec![
        Line::from(Span::styled(
            "Bharat Biz AI Guru",
            Style::default().fg(SAFFRON).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(caption, Style::default().fg(COLOR_DIM))),
    ];
    frame.render_widget(Paragraph::new(header), chunks[0]);

    let max_scroll = render_transcript(frame, chunks[1], view);
    render_input(frame, chunks[2], view);
    max_scroll
}

fn message_lines<'a>(role: Role, content: &'a str) -> Vec<Line<'a>> {
    let (label, color) = match role {
        Role::User => ("You", COLOR_PRIMARY),
        Role::Assistant => ("Guru", SAFFRON),
    };
    let mut lines = vec![Line::from(Span::styled(
        label,
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    ))];
    lines.extend(content.lines().map(Line::from));
    lines.push(Line::from(""));
    lines
}

/// Rows the lines occupy once wrapped to `width`.
fn wrapped_height(lines: &[Line<'_>], width: u16) -> u16 {
    let width = usize::from(width.max(1));
    let rows: usize = lines
        .iter()
        .map(|line| line.width().max(1).div_ceil(width))
        .sum();
    u16::try_from(rows).unwrap_or(u16::MAX)
}

fn render_transcript(frame: &mut Frame, area: Rect, view: &AssistantView<'_>) -> u16 {
    let block = Block::default().borders(Borders::ALL).title(" Conversation ");
    let inner = block.inner(area);

    let mut lines: Vec<Line> = Vec::new();
    for message in view.transcript.iter() {
        lines.extend(message_lines(message.role, &message.content));
    }
    if let Some(pending) = view.pending.filter(|p| !p.trim().is_empty()) {
        lines.extend(message_lines(Role::User, pending));
        lines.push(Line::from(Span::styled(
            "Thinking...",
            Style::default()
                .fg(COLOR_DIM)
                .add_modifier(Modifier::ITALIC),
        )));
    }
    if lines.is_empty() {
        lines.push(Line::from(Span::styled(
            "No messages yet. Ask the Guru anything about growing your business.",
            Style::default().fg(COLOR_DIM),
        )));
    }

    // Pin to the bottom unless the user scrolled up
    let total = wrapped_height(&lines, inner.width);
    let max_offset = total.saturating_sub(inner.height);
    let offset = max_offset.saturating_sub(view.scroll_up);

    let paragraph = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .scroll((offset, 0))
        .block(block);
    frame.render_widget(paragraph, area);
    max_offset
}

fn render_input(frame: &mut Frame, area: Rect, view: &AssistantView<'_>) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Ask (Enter to send) ");

    let line = if let Some(reason) = view.unavailable {
        Line::from(Span::styled(reason, Style::default().fg(COLOR_ERROR)))
    } else if view.input.is_empty() {
        Line::from(vec![
            Span::styled("▏", Style::default().fg(COLOR_PRIMARY)),
            Span::styled(INPUT_PLACEHOLDER, Style::default().fg(COLOR_DIM)),
        ])
    } else {
        Line::from(vec![
            Span::raw(view.input),
            Span::styled("▏", Style::default().fg(COLOR_PRIMARY)),
        ])
    };

    frame.render_widget(Paragraph::new(line).block(block), area);
}
