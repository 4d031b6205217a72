use crate::dashboard::Effort;
use crate::navigation::NoticeLevel;
use ratatui::style::Color;

/// Cyan - primary highlight color, used for headers and selection
pub const COLOR_PRIMARY: Color = Color::Cyan;
pub const COLOR_SUCCESS: Color = Color::Green;
pub const COLOR_WARNING: Color = Color::Yellow;
pub const COLOR_ERROR: Color = Color::Red;
/// Gray - dimmed/secondary text
pub const COLOR_DIM: Color = Color::DarkGray;

pub const SAFFRON: Color = Color::Rgb(0xFF, 0x99, 0x33);
pub const INDIA_GREEN: Color = Color::Rgb(0x13, 0x88, 0x08);
pub const NAVY: Color = Color::Rgb(0x00, 0x00, 0x80);

pub fn notice_color(level: NoticeLevel) -> Color {
    match level {
        NoticeLevel::Info => COLOR_PRIMARY,
        NoticeLevel::Success => COLOR_SUCCESS,
        NoticeLevel::Warning => COLOR_WARNING,
        NoticeLevel::Error => COLOR_ERROR,
    }
}

/// Background for a workload-plan lane.
pub fn effort_color(effort: Effort) -> Color {
    match effort {
        Effort::Automated => INDIA_GREEN,
        Effort::AiAssisted => SAFFRON,
        Effort::Manual => NAVY,
    }
}
