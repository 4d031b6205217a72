//! Dashboard TUI application
//!
//! The application struct and the event loop. A key press becomes an
//! [`Action`] reduced into the session, or a page-local edit; every loop
//! iteration then redraws the whole view chosen by [`resolve_view`].

use super::keymap::{self, page_hint, Hotkey};
use super::screens::{self, assistant::AssistantView, inventory::InventoryView};
use super::theme::{notice_color, COLOR_DIM, COLOR_ERROR, COLOR_PRIMARY};
use crate::assistant::{AssistantGateway, SendOutcome};
use crate::dashboard::QuickAction;
use crate::error::Result;
use crate::inventory::InventoryEditor;
use crate::navigation::{reduce, resolve_view, Action, Effect, Notice};
use crate::session::{Page, Session};
use chrono::{DateTime, Local};
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Tabs},
    Frame, Terminal,
};
use std::cell::Cell;
use std::io::{self, Stdout};
use std::time::Duration;
use tracing::{info, warn};

/// How long to wait for input before redrawing.
const POLL_INTERVAL: Duration = Duration::from_millis(250);

/// Width of the sidebar shown to logged-in users.
const SIDEBAR_WIDTH: u16 = 26;

/// Lines moved per PageUp/PageDown in the transcript.
const SCROLL_STEP: u16 = 5;

/// The main dashboard application state.
pub struct App {
    session: Session,
    /// `None` when no API key is configured
    assistant: Option<AssistantGateway>,
    /// Persistent configuration problem shown above every page
    banner: Option<String>,
    /// Draft copy of the inventory being edited
    inventory_editor: InventoryEditor,
    last_sync: Option<DateTime<Local>>,
    /// Text typed into the AI Guru input
    input: String,
    /// Prompt waiting to be sent after the next draw
    pending_prompt: Option<String>,
    transcript_scroll: u16,
    /// Largest useful scroll offset as of the last draw
    transcript_max_scroll: Cell<u16>,
    /// Transient notices, cleared on the next key press
    notices: Vec<Notice>,
    should_quit: bool,
}

impl App {
    pub fn new(session: Session, assistant: Option<AssistantGateway>, banner: Option<String>) -> Self {
        let inventory_editor = InventoryEditor::new(session.inventory());
        Self {
            session,
            assistant,
            banner,
            inventory_editor,
            last_sync: None,
            input: String::new(),
            pending_prompt: None,
            transcript_scroll: 0,
            transcript_max_scroll: Cell::new(0),
            notices: Vec::new(),
            should_quit: false,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn notices(&self) -> &[Notice] {
        &self.notices
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn inventory_editor(&self) -> &InventoryEditor {
        &self.inventory_editor
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Reduce an action into the session and apply its effect.
    pub fn dispatch(&mut self, action: Action) {
        match reduce(&mut self.session, action) {
            Effect::Rerender => {}
            Effect::Notify(notice) => self.notices.push(notice),
            Effect::Quit => self.should_quit = true,
        }
    }

    /// Handle a key press.
    pub fn handle_key(&mut self, key: KeyEvent) {
        self.notices.clear();

        match keymap::resolve(key) {
            Hotkey::Quit => return self.dispatch(Action::Quit),
            Hotkey::Navigate(page) if self.session.logged_in() => {
                return self.dispatch(Action::Navigate(page));
            }
            Hotkey::Logout if self.session.logged_in() => return self.dispatch(Action::Logout),
            _ => {}
        }

        match resolve_view(&self.session) {
            Page::Landing => self.handle_landing_key(key.code),
            Page::Dashboard => self.handle_dashboard_key(key.code),
            Page::AiBot => self.handle_assistant_key(key),
            Page::Inventory => self.handle_inventory_key(key),
        }
    }

    fn handle_landing_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Enter => {
                self.dispatch(Action::Login);
                self.dispatch(Action::Navigate(Page::Dashboard));
            }
            KeyCode::Char('q') => self.dispatch(Action::Quit),
            _ => {}
        }
    }

    fn handle_dashboard_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char('q') => self.dispatch(Action::Quit),
            KeyCode::Char(c) => {
                if let Some(quick) = QuickAction::from_hotkey(c) {
                    self.transcript_scroll = 0;
                    self.dispatch(Action::QuickAction(quick));
                }
            }
            _ => {}
        }
    }

    fn handle_assistant_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter => {
                if self.assistant.is_none() {
                    let reason = self.unavailable_reason();
                    self.notices.push(Notice::error(reason));
                    return;
                }
                self.pending_prompt = Some(std::mem::take(&mut self.input));
            }
            KeyCode::Backspace => {
                self.input.pop();
            }
            KeyCode::Esc => self.input.clear(),
            KeyCode::PageUp => {
                self.transcript_scroll = self
                    .transcript_scroll
                    .saturating_add(SCROLL_STEP)
                    .min(self.transcript_max_scroll.get());
            }
            KeyCode::PageDown => {
                self.transcript_scroll = self
                    .transcript_scroll
                    .min(self.transcript_max_scroll.get())
                    .saturating_sub(SCROLL_STEP);
            }
            KeyCode::Char(c)
                if key.modifiers == KeyModifiers::NONE || key.modifiers == KeyModifiers::SHIFT =>
            {
                if self.assistant.is_some() {
                    self.input.push(c);
                }
            }
            _ => {}
        }
    }

    fn handle_inventory_key(&mut self, key: KeyEvent) {
        let editor = &mut self.inventory_editor;
        if editor.is_editing() {
            match key.code {
                KeyCode::Enter => {
                    if let Err(err) = editor.commit_edit() {
                        self.notices.push(Notice::error(err.to_string()));
                    }
                }
                KeyCode::Esc => editor.cancel_edit(),
                KeyCode::Backspace => editor.pop_char(),
                KeyCode::Char(c) => editor.push_char(c),
                _ => {}
            }
            return;
        }

        match key.code {
            KeyCode::Up => editor.move_up(),
            KeyCode::Down => editor.move_down(),
            KeyCode::Left => editor.move_left(),
            KeyCode::Right => editor.move_right(),
            KeyCode::Enter => editor.begin_edit(),
            KeyCode::Char('a') => editor.add_row(),
            KeyCode::Char('d') => {
                editor.delete_row();
            }
            KeyCode::Char('r') => {
                self.inventory_editor = InventoryEditor::new(self.session.inventory());
            }
            KeyCode::Char('s') => {
                let rows = self.inventory_editor.to_rows();
                self.dispatch(Action::SaveInventory(rows));
                self.last_sync = Some(Local::now());
            }
            _ => {}
        }
    }

    /// Take the prompt submitted since the last draw, if any.
    pub fn take_pending_prompt(&mut self) -> Option<String> {
        self.pending_prompt.take()
    }

    /// Send a prompt through the assistant gateway. Blocks on the remote call.
    pub fn submit_prompt(&mut self, prompt: &str) {
        let Some(gateway) = self.assistant.as_ref() else {
            let reason = self.unavailable_reason();
            self.notices.push(Notice::error(reason));
            return;
        };

        let outcome = gateway.send(&mut self.session, prompt);
        self.transcript_scroll = 0;

        if let Some(warning) = outcome.warning() {
            self.notices.push(Notice::warning(warning));
        }
        if let SendOutcome::Failed { error, .. } = &outcome {
            warn!(session = %self.session.id(), error = %error, "prompt failed");
            self.notices
                .push(Notice::error(format!("AI Guru could not answer: {}", error)));
        }
    }

    fn unavailable_reason(&self) -> String {
        self.banner
            .clone()
            .unwrap_or_else(|| "AI Guru is unavailable.".to_string())
    }

    // ------------------------------------------------------------------------
    // Rendering
    // ------------------------------------------------------------------------

    /// Render the whole UI from current state.
    pub fn render(&self, frame: &mut Frame) {
        let banner_height = if self.banner.is_some() { 1 } else { 0 };
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),             // Header with tabs
                Constraint::Length(banner_height), // Missing-config banner
                Constraint::Min(0),                // Main content
                Constraint::Length(1),             // Footer
            ])
            .split(frame.area());

        let view = resolve_view(&self.session);
        self.render_header(frame, chunks[0], view);
        if let Some(banner) = &self.banner {
            frame.render_widget(
                Paragraph::new(Span::styled(
                    banner.as_str(),
                    Style::default().fg(COLOR_ERROR).add_modifier(Modifier::BOLD),
                )),
                chunks[1],
            );
        }

        let content = if self.session.logged_in() {
            let body = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Length(SIDEBAR_WIDTH), Constraint::Min(0)])
                .split(chunks[2]);
            self.render_sidebar(frame, body[0], view);
            body[1]
        } else {
            chunks[2]
        };

        self.render_content(frame, content, view);
        self.render_footer(frame, chunks[3], view);
    }

    fn render_header(&self, frame: &mut Frame, area: Rect, view: Page) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Bharat Biz OS ")
            .title_style(Style::default().fg(COLOR_PRIMARY).add_modifier(Modifier::BOLD));

        if !self.session.logged_in() {
            frame.render_widget(
                Paragraph::new(Span::styled(
                    "Resource-aware growth for small Indian businesses",
                    Style::default().fg(COLOR_DIM),
                ))
                .block(block),
                area,
            );
            return;
        }

        let pages = Page::protected();
        let titles: Vec<Line> = pages.iter().map(|p| Line::from(p.label())).collect();
        let selected = pages.iter().position(|p| *p == view).unwrap_or(0);
        let tabs = Tabs::new(titles)
            .block(block)
            .select(selected)
            .highlight_style(Style::default().fg(COLOR_PRIMARY).add_modifier(Modifier::BOLD));
        frame.render_widget(tabs, area);
    }

    fn render_sidebar(&self, frame: &mut Frame, area: Rect, view: Page) {
        let mut items = vec![
            ListItem::new(Line::from(Span::styled(
                "Logged in:",
                Style::default().fg(COLOR_DIM),
            ))),
            ListItem::new(Line::from(Span::styled(
                self.session.profile().name.as_str(),
                Style::default().add_modifier(Modifier::BOLD),
            ))),
            ListItem::new(""),
        ];

        for page in Page::protected() {
            let selected = *page == view;
            let style = if selected {
                Style::default().fg(COLOR_PRIMARY).add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            items.push(ListItem::new(Line::from(vec![
                Span::styled(if selected { "▶ " } else { "  " }, style),
                Span::styled(format!("{:<4}", page_hint(*page)), Style::default().fg(COLOR_DIM)),
                Span::styled(page.label(), style),
            ])));
        }

        items.push(ListItem::new(""));
        items.push(ListItem::new(Line::from(vec![
            Span::raw("  "),
            Span::styled("F10 ", Style::default().fg(COLOR_DIM)),
            Span::raw("Logout"),
        ])));

        let list = List::new(items).block(Block::default().borders(Borders::ALL).title(" Bharat Biz "));
        frame.render_widget(list, area);
    }

    fn render_content(&self, frame: &mut Frame, area: Rect, view: Page) {
        match view {
            Page::Landing => screens::landing::render(frame, area),
            Page::Dashboard => screens::dashboard::render(frame, area, self.session.profile()),
            Page::AiBot => {
                let unavailable = if self.assistant.is_none() {
                    Some(
                        self.banner
                            .as_deref()
                            .unwrap_or("AI Guru is unavailable."),
                    )
                } else {
                    None
                };
                let view = AssistantView {
                    transcript: self.session.transcript(),
                    input: &self.input,
                    pending: self.pending_prompt.as_deref(),
                    scroll_up: self.transcript_scroll,
                    primary_model: self.assistant.as_ref().map(|a| a.tiers().primary.as_str()),
                    unavailable,
                };
                let max_scroll = screens::assistant::render(frame, area, &view);
                self.transcript_max_scroll.set(max_scroll);
            }
            Page::Inventory => {
                let view = InventoryView {
                    editor: &self.inventory_editor,
                    last_sync: self.last_sync,
                    dirty: self.inventory_editor.rows() != self.session.inventory().rows(),
                };
                screens::inventory::render(frame, area, &view);
            }
        }
    }

    fn render_footer(&self, frame: &mut Frame, area: Rect, view: Page) {
        let line = if self.notices.is_empty() {
            let hints = match view {
                Page::Landing => "Enter: start  q: quit",
                Page::Dashboard => "1/2: quick actions  F1-F3: pages  F10: logout  q: quit",
                Page::AiBot => "Enter: send  PgUp/PgDn: scroll  Esc: clear  Ctrl-Q: quit",
                Page::Inventory => {
                    if self.inventory_editor.is_editing() {
                        "Enter: commit  Esc: cancel"
                    } else {
                        "↑↓←→: move  Enter: edit  a: add  d: delete  r: revert  s: Save & Sync"
                    }
                }
            };
            Line::from(Span::styled(hints, Style::default().fg(COLOR_DIM)))
        } else {
            let mut spans = Vec::new();
            for (i, notice) in self.notices.iter().enumerate() {
                if i > 0 {
                    spans.push(Span::raw("  "));
                }
                spans.push(Span::styled(
                    notice.text.as_str(),
                    Style::default().fg(notice_color(notice.level)),
                ));
            }
            Line::from(spans)
        };
        frame.render_widget(Paragraph::new(line), area);
    }
}

/// Initialize the terminal for TUI mode.
pub fn init_terminal() -> io::Result<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    Terminal::new(backend)
}

/// Restore the terminal to normal mode.
pub fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> io::Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

/// Run the dashboard until the user quits.
pub fn run_dashboard(mut app: App) -> Result<()> {
    // Set up panic hook to restore terminal on panic
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic_info);
    }));

    let mut terminal = init_terminal()?;
    info!(session = %app.session().id(), "dashboard started");

    let result = event_loop(&mut terminal, &mut app);

    restore_terminal(&mut terminal)?;
    let uptime = chrono::Utc::now() - app.session().started_at();
    info!(
        session = %app.session().id(),
        uptime_secs = uptime.num_seconds(),
        messages = app.session().transcript().len(),
        "dashboard closed"
    );
    result
}

fn event_loop(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|frame| app.render(frame))?;

        // The "Thinking..." frame is on screen; now block on the remote call
        if let Some(prompt) = app.take_pending_prompt() {
            app.submit_prompt(&prompt);
            continue;
        }

        if event::poll(POLL_INTERVAL)? {
            if let Event::Key(key) = event::read()? {
                // Only handle key press events (not release or repeat)
                if key.kind == KeyEventKind::Press {
                    app.handle_key(key);
                }
            }
        }

        if app.should_quit() {
            return Ok(());
        }
    }
}
