//! Per-process session state.
//!
//! A [`Session`] bundles everything the views read: the current page, the
//! login flag, the business profile, the saved inventory and the chat
//! transcript. Fields are private; mutation goes through the transition
//! functions in [`crate::navigation`] and [`crate::assistant`].

use crate::error::BizOsError;
use crate::inventory::InventoryTable;
use crate::profile::BusinessProfile;
use crate::transcript::{Message, Transcript};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// The named views of the app.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Page {
    Landing,
    Dashboard,
    #[serde(rename = "AI_Bot")]
    AiBot,
    Inventory,
}

impl Page {
    /// Canonical page name, as accepted by [`Page::from_str`].
    pub fn as_str(&self) -> &'static str {
        match self {
            Page::Landing => "Landing",
            Page::Dashboard => "Dashboard",
            Page::AiBot => "AI_Bot",
            Page::Inventory => "Inventory",
        }
    }

    /// Label shown in the sidebar and tabs.
    pub fn label(&self) -> &'static str {
        match self {
            Page::Landing => "Home",
            Page::Dashboard => "Dashboard",
            Page::AiBot => "AI Guru",
            Page::Inventory => "Inventory",
        }
    }

    pub fn all() -> &'static [Page] {
        &[Page::Landing, Page::Dashboard, Page::AiBot, Page::Inventory]
    }

    /// Pages that require a logged-in session, in sidebar order.
    pub fn protected() -> &'static [Page] {
        &[Page::Dashboard, Page::AiBot, Page::Inventory]
    }

    pub fn is_protected(&self) -> bool {
        !matches!(self, Page::Landing)
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Page {
    type Err = BizOsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Page::all()
            .iter()
            .copied()
            .find(|page| page.as_str() == s)
            .ok_or_else(|| BizOsError::UnknownPage(s.to_string()))
    }
}

#[derive(Debug, Clone)]
pub struct Session {
    id: Uuid,
    started_at: DateTime<Utc>,
    page: Page,
    logged_in: bool,
    profile: BusinessProfile,
    inventory: InventoryTable,
    transcript: Transcript,
}

impl Session {
    pub fn new() -> Self {
        Self::with_page(Page::Landing)
    }

    /// Start a session with a stored page value left over from elsewhere.
    ///
    /// The session is still logged out, so protected pages render Landing
    /// until the user logs in.
    pub fn with_page(page: Page) -> Self {
        Self {
            id: Uuid::new_v4(),
            started_at: Utc::now(),
            page,
            logged_in: false,
            profile: BusinessProfile::default(),
            inventory: InventoryTable::default(),
            transcript: Transcript::new(),
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    pub fn page(&self) -> Page {
        self.page
    }

    pub fn logged_in(&self) -> bool {
        self.logged_in
    }

    pub fn profile(&self) -> &BusinessProfile {
        &self.profile
    }

    pub fn inventory(&self) -> &InventoryTable {
        &self.inventory
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    pub(crate) fn set_page(&mut self, page: Page) {
        self.page = page;
    }

    pub(crate) fn set_logged_in(&mut self, logged_in: bool) {
        self.logged_in = logged_in;
    }

    pub(crate) fn replace_inventory(&mut self, table: InventoryTable) {
        self.inventory = table;
    }

    pub(crate) fn append_message(&mut self, message: Message) {
        self.transcript.push(message);
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session_defaults() {
        let session = Session::new();
        assert_eq!(session.page(), Page::Landing);
        assert!(!session.logged_in());
        assert!(session.transcript().is_empty());
        assert_eq!(session.inventory().len(), 2);
        assert_eq!(session.profile().name, "Niche Handicrafts");
    }

    #[test]
    fn test_sessions_have_distinct_ids() {
        assert_ne!(Session::new().id(), Session::new().id());
    }

    #[test]
    fn test_with_page_keeps_stored_page_but_logged_out() {
        let session = Session::with_page(Page::Inventory);
        assert_eq!(session.page(), Page::Inventory);
        assert!(!session.logged_in());
    }

    #[test]
    fn test_page_names_parse() {
        for page in Page::all() {
            assert_eq!(page.as_str().parse::<Page>().unwrap(), *page);
        }
        assert_eq!("AI_Bot".parse::<Page>().unwrap(), Page::AiBot);
    }

    #[test]
    fn test_unknown_page_is_an_error() {
        let err = "Settings".parse::<Page>().unwrap_err();
        assert!(matches!(err, BizOsError::UnknownPage(ref name) if name == "Settings"));
        assert!("ai_bot".parse::<Page>().is_err());
    }

    #[test]
    fn test_page_labels() {
        assert_eq!(Page::AiBot.label(), "AI Guru");
        assert_eq!(Page::Landing.label(), "Home");
        assert!(!Page::Landing.is_protected());
        assert!(Page::protected().iter().all(|p| p.is_protected()));
    }

    #[test]
    fn test_page_serde_name() {
        let json = serde_json::to_string(&Page::AiBot).unwrap();
        assert_eq!(json, "\"AI_Bot\"");
    }
}
