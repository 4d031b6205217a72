use crate::profile::BusinessProfile;

/// Constraints every business in this app is assumed to have.
pub const BUSINESS_CONSTRAINTS: &str = "No marketing team, limited tech skills.";

/// The business-context preamble sent ahead of every prompt.
pub fn business_context(profile: &BusinessProfile) -> String {
    format!(
        "Business: {}, Budget: {}, Daily Time: {}h. Goal: {}. Constraint: {}",
        profile.category,
        profile.budget,
        profile.daily_time_budget_hours,
        profile.goal,
        BUSINESS_CONSTRAINTS
    )
}

/// Full request text: context, then the latest prompt only.
pub fn build_request_text(profile: &BusinessProfile, prompt: &str) -> String {
    format!("{}\nUser: {}", business_context(profile), prompt)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_text_for_default_profile() {
        let text = build_request_text(&BusinessProfile::default(), "How can I grow today?");
        assert_eq!(
            text,
            "Business: Handicrafts, Budget: ₹5000, Daily Time: 2h. Goal: Visibility. \
             Constraint: No marketing team, limited tech skills.\nUser: How can I grow today?"
        );
    }

    #[test]
    fn test_prompt_is_passed_verbatim() {
        let text = build_request_text(&BusinessProfile::default(), "  spaced  ");
        assert!(text.ends_with("\nUser:   spaced  "));
    }
}
