//! Display state - everything the single scene works on.

use crate::format::DisplayLines;
use crate::stats::DolphinStats;
use crate::ui::menu::Menu;

/// Formatted stats lines plus the menu that shows them.
///
/// Created once per run, filled once from the stats snapshot, dropped at
/// shutdown.
#[derive(Default)]
pub struct DisplayState {
    pub lines: DisplayLines,
    pub menu: Menu,
}

impl DisplayState {
    pub const fn new() -> Self {
        Self {
            lines: DisplayLines::new(),
            menu: Menu::new(),
        }
    }

    /// Format `stats` into the line buffers.
    pub fn copy_stats(&mut self, stats: &DolphinStats) {
        self.lines = DisplayLines::from_stats(stats);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_blank() {
        let state = DisplayState::new();
        assert!(state.lines.icounter.is_empty());
        assert!(state.menu.is_empty());
    }

    #[test]
    fn copy_stats_fills_all_lines() {
        let mut state = DisplayState::new();
        state.copy_stats(&DolphinStats {
            icounter: 10,
            butthurt: 4,
            level: 1,
            ..DolphinStats::default()
        });
        assert_eq!(state.lines.icounter.as_str(), "Icounter: 10/300");
        assert_eq!(state.lines.butthurt.as_str(), "Butthurt: 4/14");
        assert_eq!(state.lines.level.as_str(), "Level: 1/3");
    }
}
