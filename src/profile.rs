//! Business profile used as static context for the dashboard and the assistant.
//!
//! The profile is seeded with defaults when a session starts and is never
//! mutated afterwards.

use serde::{Deserialize, Serialize};
use std::fmt;

/// An amount in Indian rupees.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize)]
pub struct Rupees(pub u64);

impl Rupees {
    pub fn amount(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for Rupees {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "₹{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SkillLevel {
    Low,
    Medium,
    High,
}

impl SkillLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            SkillLevel::Low => "Low",
            SkillLevel::Medium => "Medium",
            SkillLevel::High => "High",
        }
    }
}

impl fmt::Display for SkillLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The owner's primary growth goal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Goal {
    Visibility,
    Sales,
    Foundation,
}

impl Goal {
    pub fn as_str(&self) -> &'static str {
        match self {
            Goal::Visibility => "Visibility",
            Goal::Sales => "Sales",
            Goal::Foundation => "Foundation",
        }
    }
}

impl fmt::Display for Goal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BusinessProfile {
    pub name: String,
    pub category: String,
    pub budget: Rupees,
    /// Hours per day the owner can spend on growth work.
    pub daily_time_budget_hours: u8,
    pub skill_level: SkillLevel,
    pub goal: Goal,
}

impl Default for BusinessProfile {
    fn default() -> Self {
        Self {
            name: "Niche Handicrafts".to_string(),
            category: "Handicrafts".to_string(),
            budget: Rupees(5000),
            daily_time_budget_hours: 2,
            skill_level: SkillLevel::Low,
            goal: Goal::Visibility,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rupees_display() {
        assert_eq!(Rupees(5000).to_string(), "₹5000");
        assert_eq!(Rupees(0).to_string(), "₹0");
    }

    #[test]
    fn test_default_profile() {
        let profile = BusinessProfile::default();
        assert_eq!(profile.name, "Niche Handicrafts");
        assert_eq!(profile.category, "Handicrafts");
        assert_eq!(profile.budget, Rupees(5000));
        assert_eq!(profile.daily_time_budget_hours, 2);
        assert_eq!(profile.skill_level, SkillLevel::Low);
        assert_eq!(profile.goal, Goal::Visibility);
    }

    #[test]
    fn test_enum_labels() {
        assert_eq!(SkillLevel::Medium.to_string(), "Medium");
        assert_eq!(Goal::Foundation.to_string(), "Foundation");
    }
}
