use crate::session::Page;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

// Global hotkeys only use Ctrl/Alt combos and function keys so plain typing
// on the AI Guru page and in inventory cells is never stolen.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hotkey {
    None,
    Quit,
    Navigate(Page),
    Logout,
}

pub fn resolve(ev: KeyEvent) -> Hotkey {
    match (ev.modifiers, ev.code) {
        (KeyModifiers::CONTROL, KeyCode::Char('c')) | (KeyModifiers::CONTROL, KeyCode::Char('q')) => {
            Hotkey::Quit
        }
        (KeyModifiers::NONE, KeyCode::F(1)) | (KeyModifiers::ALT, KeyCode::Char('1')) => {
            Hotkey::Navigate(Page::Dashboard)
        }
        (KeyModifiers::NONE, KeyCode::F(2)) | (KeyModifiers::ALT, KeyCode::Char('2')) => {
            Hotkey::Navigate(Page::AiBot)
        }
        (KeyModifiers::NONE, KeyCode::F(3)) | (KeyModifiers::ALT, KeyCode::Char('3')) => {
            Hotkey::Navigate(Page::Inventory)
        }
        (KeyModifiers::NONE, KeyCode::F(10)) | (KeyModifiers::CONTROL, KeyCode::Char('l')) => {
            Hotkey::Logout
        }
        _ => Hotkey::None,
    }
}

/// Hotkey hint shown next to a page in the sidebar.
pub fn page_hint(page: Page) -> &'static str {
    match page {
        Page::Dashboard => "F1",
        Page::AiBot => "F2",
        Page::Inventory => "F3",
        Page::Landing => "",
    }
}
