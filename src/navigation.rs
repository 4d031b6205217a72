//! Page navigation state machine.
//!
//! Every user interaction becomes an [`Action`]. [`reduce`] applies it to the
//! [`Session`] and returns an [`Effect`] telling the event loop what to do
//! next. Which view is drawn is decided separately by [`resolve_view`], which
//! is also where access control is enforced: navigation itself never
//! validates the target page.

use crate::dashboard::QuickAction;
use crate::inventory::{InventoryRow, InventoryTable, SYNC_SUCCESS_MESSAGE};
use crate::session::{Page, Session};
use crate::transcript::Message;
use tracing::{debug, info};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Navigate(Page),
    Login,
    Logout,
    QuickAction(QuickAction),
    SaveInventory(Vec<InventoryRow>),
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Success,
    Warning,
    Error,
}

/// A short message for the status line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub text: String,
}

impl Notice {
    pub fn new(level: NoticeLevel, text: impl Into<String>) -> Self {
        Self {
            level,
            text: text.into(),
        }
    }

    pub fn info(text: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Info, text)
    }

    pub fn success(text: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Success, text)
    }

    pub fn warning(text: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Warning, text)
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Error, text)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Redraw the whole current view from session state.
    Rerender,
    /// Redraw and show a notice.
    Notify(Notice),
    Quit,
}

/// Set the stored page. Never rejected, even for a logged-out session.
pub fn navigate(session: &mut Session, target: Page) -> Effect {
    info!(session = %session.id(), from = %session.page(), to = %target, "navigate");
    session.set_page(target);
    Effect::Rerender
}

/// Mark the session as logged in. There is no credential check.
pub fn login(session: &mut Session) -> Effect {
    info!(session = %session.id(), "login");
    session.set_logged_in(true);
    Effect::Rerender
}

pub fn logout(session: &mut Session) -> Effect {
    info!(session = %session.id(), "logout");
    session.set_logged_in(false);
    navigate(session, Page::Landing)
}

/// Apply an action to the session.
pub fn reduce(session: &mut Session, action: Action) -> Effect {
    debug!(session = %session.id(), ?action, "reduce");
    match action {
        Action::Navigate(page) => navigate(session, page),
        Action::Login => login(session),
        Action::Logout => logout(session),
        Action::QuickAction(quick) => {
            session.append_message(Message::user(quick.prompt()));
            navigate(session, Page::AiBot)
        }
        Action::SaveInventory(rows) => {
            info!(session = %session.id(), rows = rows.len(), "inventory saved");
            session.replace_inventory(InventoryTable::from(rows));
            Effect::Notify(Notice::success(SYNC_SUCCESS_MESSAGE))
        }
        Action::Quit => Effect::Quit,
    }
}

/// Decide which view to draw for the current session.
///
/// Landing is always reachable. Protected pages are drawn only for a
/// logged-in session; otherwise Landing is drawn whatever page is stored.
pub fn resolve_view(session: &Session) -> Page {
    match session.page() {
        Page::Landing => Page::Landing,
        page if session.logged_in() => page,
        _ => Page::Landing,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transcript::Role;

    fn logged_in_session() -> Session {
        let mut session = Session::new();
        login(&mut session);
        session
    }

    #[test]
    fn test_logged_out_always_renders_landing() {
        for page in Page::all() {
            let mut session = Session::new();
            navigate(&mut session, *page);
            assert_eq!(resolve_view(&session), Page::Landing, "stored page {page}");
        }
    }

    #[test]
    fn test_stored_protected_page_renders_landing_until_login() {
        let mut session = Session::with_page(Page::AiBot);
        assert_eq!(resolve_view(&session), Page::Landing);

        login(&mut session);
        assert_eq!(resolve_view(&session), Page::AiBot);
    }

    #[test]
    fn test_logged_in_renders_stored_page() {
        let mut session = logged_in_session();
        for page in Page::all() {
            navigate(&mut session, *page);
            assert_eq!(resolve_view(&session), *page);
        }
    }

    #[test]
    fn test_navigate_is_not_validated() {
        let mut session = Session::new();
        let effect = navigate(&mut session, Page::Inventory);
        assert_eq!(effect, Effect::Rerender);
        assert_eq!(session.page(), Page::Inventory);
        assert!(!session.logged_in());
    }

    #[test]
    fn test_logout_resets_from_any_state() {
        for page in Page::all() {
            for start_logged_in in [true, false] {
                let mut session = Session::with_page(*page);
                if start_logged_in {
                    login(&mut session);
                }
                logout(&mut session);
                assert!(!session.logged_in());
                assert_eq!(session.page(), Page::Landing);
            }
        }
    }

    #[test]
    fn test_landing_call_to_action() {
        let mut session = Session::new();
        reduce(&mut session, Action::Login);
        reduce(&mut session, Action::Navigate(Page::Dashboard));
        assert!(session.logged_in());
        assert_eq!(resolve_view(&session), Page::Dashboard);
    }

    #[test]
    fn test_quick_action_appends_prompt_and_opens_assistant() {
        let mut session = logged_in_session();
        let effect = reduce(
            &mut session,
            Action::QuickAction(QuickAction::PartnershipMessage),
        );

        assert_eq!(effect, Effect::Rerender);
        assert_eq!(session.page(), Page::AiBot);
        assert_eq!(session.transcript().len(), 1);
        let message = session.transcript().last().unwrap();
        assert_eq!(message.role, Role::User);
        assert_eq!(message.content, QuickAction::PartnershipMessage.prompt());
    }

    #[test]
    fn test_save_replaces_inventory_exactly() {
        let mut session = logged_in_session();
        let rows = vec![InventoryRow::new("Jaggery", 7, 90)];

        let effect = reduce(&mut session, Action::SaveInventory(rows.clone()));

        assert_eq!(session.inventory().rows(), rows.as_slice());
        assert_eq!(
            effect,
            Effect::Notify(Notice::success(SYNC_SUCCESS_MESSAGE))
        );
    }

    #[test]
    fn test_save_notice_is_constant() {
        let mut session = logged_in_session();
        let first = reduce(&mut session, Action::SaveInventory(Vec::new()));
        let second = reduce(
            &mut session,
            Action::SaveInventory(vec![InventoryRow::new("Ghee", 3, 600)]),
        );
        assert_eq!(first, second);
        assert_eq!(session.inventory().len(), 1);
    }

    #[test]
    fn test_quit_effect() {
        let mut session = Session::new();
        assert_eq!(reduce(&mut session, Action::Quit), Effect::Quit);
    }
}
