//! Growth hub: workload plan, metrics and the execution-hub shortcuts.

use crate::dashboard::{metrics, workload_plan, QuickAction};
use crate::profile::BusinessProfile;
use crate::ui::theme::{effort_color, COLOR_DIM, COLOR_PRIMARY, COLOR_SUCCESS};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

pub fn render(frame: &mut Frame, area: Rect, profile: &BusinessProfile) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" {} Growth Hub ", profile.name))
        .title_style(Style::default().fg(COLOR_PRIMARY).add_modifier(Modifier::BOLD));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Section title
            Constraint::Length(5), // Workload plan
            Constraint::Length(4), // Metrics
            Constraint::Min(0),    // Execution hub
        ])
        .split(inner);

    frame.render_widget(
        Paragraph::new(Span::styled(
            "Your Intelligent Workload Plan",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        chunks[0],
    );
    render_workload_plan(frame, chunks[1], profile);
    render_metrics(frame, chunks[2], profile);
    render_execution_hub(frame, chunks[3]);
}

fn thirds(area: Rect) -> Vec<Rect> {
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .split(area)
        .to_vec()
}

fn render_workload_plan(frame: &mut Frame, area: Rect, profile: &BusinessProfile) {
    for (lane, cell) in workload_plan(profile).iter().zip(thirds(area)) {
        let style = Style::default().bg(effort_color(lane.effort)).fg(Color::White);
        let lines = vec![
            Line::from(Span::styled(
                lane.effort.label().to_uppercase(),
                Style::default().add_modifier(Modifier::DIM),
            )),
            Line::from(Span::styled(
                lane.title.clone(),
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(lane.detail),
        ];
        let paragraph = Paragraph::new(lines)
            .style(style)
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).style(style));
        frame.render_widget(paragraph, cell);
    }
}

fn render_metrics(frame: &mut Frame, area: Rect, profile: &BusinessProfile) {
    for (metric, cell) in metrics(profile).iter().zip(thirds(area)) {
        let mut value = vec![Span::styled(
            metric.value.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        )];
        if let Some(caption) = metric.caption {
            value.push(Span::styled(
                format!("  ↑ {}", caption),
                Style::default().fg(COLOR_SUCCESS),
            ));
        }
        let lines = vec![
            Line::from(Span::styled(metric.label, Style::default().fg(COLOR_DIM))),
            Line::from(value),
        ];
        frame.render_widget(
            Paragraph::new(lines).block(Block::default().borders(Borders::ALL)),
            cell,
        );
    }
}

fn render_execution_hub(frame: &mut Frame, area: Rect) {
    let cells = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    for (action, cell) in QuickAction::all().iter().zip(cells.iter()) {
        let lines = vec![
            Line::from(action.description()),
            Line::from(""),
            Line::from(vec![
                Span::styled(
                    format!("[{}] ", action.hotkey()),
                    Style::default().fg(COLOR_DIM),
                ),
                Span::styled(
                    action.button(),
                    Style::default()
                        .fg(COLOR_PRIMARY)
                        .add_modifier(Modifier::BOLD),
                ),
            ]),
        ];
        let paragraph = Paragraph::new(lines).wrap(Wrap { trim: true }).block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" {} ", action.heading())),
        );
        frame.render_widget(paragraph, *cell);
    }
}
