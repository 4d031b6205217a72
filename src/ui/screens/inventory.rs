use crate::inventory::{Column, InventoryEditor};
use crate::ui::theme::{COLOR_DIM, COLOR_PRIMARY, COLOR_WARNING, SAFFRON};
use chrono::{DateTime, Local};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
    Frame,
};

pub struct InventoryView<'a> {
    pub editor: &'a InventoryEditor,
    pub last_sync: Option<DateTime<Local>>,
    /// Draft differs from the saved table
    pub dirty: bool,
}

pub fn render(frame: &mut Frame, area: Rect, view: &InventoryView<'_>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Title + caption
            Constraint::Min(0),    // Table
            Constraint::Length(1), // Sync status
        ])
        .split(area);

    let header = vec![
        Line::from(Span::styled(
            "Smart Inventory Manager",
            Style::default().fg(SAFFRON).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "AI is currently syncing these items to WhatsApp and Instagram Shops.",
            Style::default().fg(COLOR_DIM),
        )),
    ];
    frame.render_widget(Paragraph::new(header), chunks[0]);

    render_table(frame, chunks[1], view.editor);

    let mut status = vec![Span::styled(
        match view.last_sync {
            Some(at) => format!("Last sync: {}", at.format("%H:%M:%S")),
            None => "Not synced this session".to_string(),
        },
        Style::default().fg(COLOR_DIM),
    )];
    if view.dirty {
        status.push(Span::styled(
            "  • unsaved changes (s to Save & Sync)",
            Style::default().fg(COLOR_WARNING),
        ));
    }
    frame.render_widget(Paragraph::new(Line::from(status)), chunks[2]);
}

fn render_table(frame: &mut Frame, area: Rect, editor: &InventoryEditor) {
    let (cursor_row, cursor_col) = editor.cursor();

    let header = Row::new(Column::all().iter().map(|c| Cell::from(c.name())))
        .style(Style::default().fg(COLOR_PRIMARY).add_modifier(Modifier::BOLD));

    let rows: Vec<Row> = editor
        .rows()
        .iter()
        .enumerate()
        .map(|(i, row)| {
            let cells = Column::all().iter().map(|column| {
                let selected = i == cursor_row && *column == cursor_col;
                let text = match (selected, editor.edit_buffer()) {
                    (true, Some(buffer)) => format!("{}▏", buffer),
                    _ => match column {
                        Column::Product => row.product.clone(),
                        Column::Stock => row.stock.to_string(),
                        Column::Price => row.price.to_string(),
                    },
                };
                let style = if selected {
                    Style::default().add_modifier(Modifier::REVERSED)
                } else {
                    Style::default()
                };
                Cell::from(text).style(style)
            });
            Row::new(cells)
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Percentage(50),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
        ],
    )
    .header(header)
    .column_spacing(2)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!(" Products ({}) ", editor.rows().len())),
    );

    frame.render_widget(table, area);
}
