//! Dashboard content derived from the business profile.
//!
//! Everything here is static copy interpolated with profile fields; the
//! dashboard screen only lays it out.

use crate::profile::BusinessProfile;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Metric {
    pub label: &'static str,
    pub value: String,
    pub caption: Option<&'static str>,
}

pub fn metrics(profile: &BusinessProfile) -> Vec<Metric> {
    vec![
        Metric {
            label: "Visibility Growth",
            value: "+12%".to_string(),
            caption: Some("Organic"),
        },
        Metric {
            label: "Budget Remaining",
            value: profile.budget.to_string(),
            caption: None,
        },
        Metric {
            label: "Daily Time Slot",
            value: format!("{} Hours", profile.daily_time_budget_hours),
            caption: None,
        },
    ]
}

/// How a task is split between automation and the owner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effort {
    Automated,
    AiAssisted,
    Manual,
}

impl Effort {
    pub fn label(&self) -> &'static str {
        match self {
            Effort::Automated => "Automated",
            Effort::AiAssisted => "AI-Assisted",
            Effort::Manual => "Manual Effort",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkloadLane {
    pub effort: Effort,
    pub title: String,
    pub detail: &'static str,
}

/// The three-lane workload plan shown at the top of the dashboard.
pub fn workload_plan(profile: &BusinessProfile) -> [WorkloadLane; 3] {
    [
        WorkloadLane {
            effort: Effort::Automated,
            title: "Inventory Sync".to_string(),
            detail: "AI is updating your shops...",
        },
        WorkloadLane {
            effort: Effort::AiAssisted,
            title: "Content Creation".to_string(),
            detail: "Scripts ready for review.",
        },
        WorkloadLane {
            effort: Effort::Manual,
            title: format!("{}h Cust. Engagement", profile.daily_time_budget_hours),
            detail: "Focus on your loyal repeats.",
        },
    ]
}

/// Execution-hub shortcuts that pre-fill the assistant conversation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuickAction {
    InstagramScript,
    PartnershipMessage,
}

impl QuickAction {
    pub fn all() -> &'static [QuickAction] {
        &[QuickAction::InstagramScript, QuickAction::PartnershipMessage]
    }

    pub fn heading(&self) -> &'static str {
        match self {
            QuickAction::InstagramScript => "Social Visibility",
            QuickAction::PartnershipMessage => "Community Collab",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            QuickAction::InstagramScript => "AI drafted a 15-minute task to get you discovered.",
            QuickAction::PartnershipMessage => {
                "Partner with local vendors to share customers at 0 cost."
            }
        }
    }

    pub fn button(&self) -> &'static str {
        match self {
            QuickAction::InstagramScript => "Generate Local Instagram Script",
            QuickAction::PartnershipMessage => "Draft Partnership Message",
        }
    }

    /// The user message appended to the transcript.
    pub fn prompt(&self) -> &'static str {
        match self {
            QuickAction::InstagramScript => {
                "Create a 30-second script for an Instagram Reel showcasing my niche products locally."
            }
            QuickAction::PartnershipMessage => {
                "Suggest a local business partnership and draft a WhatsApp invite."
            }
        }
    }

    pub fn hotkey(&self) -> char {
        match self {
            QuickAction::InstagramScript => '1',
            QuickAction::PartnershipMessage => '2',
        }
    }

    pub fn from_hotkey(c: char) -> Option<QuickAction> {
        QuickAction::all().iter().copied().find(|a| a.hotkey() == c)
    }
}
