//! Stats → display text.
//!
//! Each line lives in a fixed C-style buffer: `N` bytes including the NUL
//! terminator, so at most `N - 1` bytes of text. Overlong output is cut at
//! the last whole character, like `snprintf`.

use core::fmt::{self, Write};

use heapless::String;

use crate::config::{
    BUTTHURT_MAX, BUTTHURT_TEXT_CAP, ICOUNTER_TEXT_CAP, LEVEL2_THRESHOLD, LEVEL3_THRESHOLD,
    LEVEL_MAX, LEVEL_TEXT_CAP,
};
use crate::stats::DolphinStats;
use crate::ui::menu::MenuItem;

/// Icounter needed to reach the next level.
///
/// Level 1 aims at level 2; every other level (including 0 and anything past
/// `LEVEL_MAX`) shows the level-3 threshold.
pub const fn threshold_for_level(level: u8) -> u32 {
    match level {
        1 => LEVEL2_THRESHOLD,
        _ => LEVEL3_THRESHOLD,
    }
}

/// Fixed-capacity text buffer with room for a trailing NUL.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TextBuffer<const N: usize> {
    text: String<N>,
}

impl<const N: usize> TextBuffer<N> {
    /// Text bytes the buffer can hold (one byte is kept for the NUL).
    pub const TEXT_CAPACITY: usize = N.saturating_sub(1);

    pub const fn new() -> Self {
        Self { text: String::new() }
    }

    /// Format `args` into a fresh buffer, truncating silently.
    pub fn formatted(args: fmt::Arguments<'_>) -> Self {
        let mut buf = Self::new();
        // Truncation is reported as Ok by `write_str`, nothing else can fail.
        let _ = buf.write_fmt(args);
        buf
    }

    pub fn as_str(&self) -> &str {
        self.text.as_str()
    }

    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn clear(&mut self) {
        self.text.clear();
    }

    /// The buffer as the host GUI sees it: text, NUL, zero padding.
    pub fn to_c_bytes(&self) -> [u8; N] {
        let mut out = [0u8; N];
        let bytes = self.text.as_bytes();
        out[..bytes.len()].copy_from_slice(bytes);
        out
    }
}

impl<const N: usize> Write for TextBuffer<N> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        for c in s.chars() {
            if self.text.len() + c.len_utf8() > Self::TEXT_CAPACITY {
                break;
            }
            // Cannot fail: capacity checked above.
            let _ = self.text.push(c);
        }
        Ok(())
    }
}

/// The three formatted stats lines shown in the menu.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DisplayLines {
    pub icounter: TextBuffer<ICOUNTER_TEXT_CAP>,
    pub butthurt: TextBuffer<BUTTHURT_TEXT_CAP>,
    pub level: TextBuffer<LEVEL_TEXT_CAP>,
}

impl DisplayLines {
    pub const fn new() -> Self {
        Self {
            icounter: TextBuffer::new(),
            butthurt: TextBuffer::new(),
            level: TextBuffer::new(),
        }
    }

    pub fn from_stats(stats: &DolphinStats) -> Self {
        let threshold = threshold_for_level(stats.level);
        Self {
            icounter: TextBuffer::formatted(format_args!(
                "Icounter: {}/{}",
                stats.icounter, threshold
            )),
            butthurt: TextBuffer::formatted(format_args!(
                "Butthurt: {}/{}",
                stats.butthurt, BUTTHURT_MAX
            )),
            level: TextBuffer::formatted(format_args!("Level: {}/{}", stats.level, LEVEL_MAX)),
        }
    }

    /// Lines paired with the menu item that shows them, in menu order.
    pub fn entries(&self) -> [(MenuItem, &str); 3] {
        [
            (MenuItem::Icounter, self.icounter.as_str()),
            (MenuItem::Butthurt, self.butthurt.as_str()),
            (MenuItem::Level, self.level.as_str()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(icounter: u32, butthurt: u32, level: u8) -> DisplayLines {
        DisplayLines::from_stats(&DolphinStats {
            icounter,
            butthurt,
            level,
            ..DolphinStats::default()
        })
    }

    // ════════════════════════════════════════════════════════════════════════
    // Thresholds
    // ════════════════════════════════════════════════════════════════════════

    #[test]
    fn level_one_targets_level_two_threshold() {
        assert_eq!(threshold_for_level(1), LEVEL2_THRESHOLD);
    }

    #[test]
    fn other_levels_share_level_three_threshold() {
        for level in [0u8, 2, 3, 4, 200, u8::MAX] {
            assert_eq!(threshold_for_level(level), LEVEL3_THRESHOLD, "level {}", level);
        }
    }

    // ════════════════════════════════════════════════════════════════════════
    // TextBuffer
    // ════════════════════════════════════════════════════════════════════════

    #[test]
    fn text_buffer_keeps_room_for_nul() {
        let buf: TextBuffer<8> = TextBuffer::formatted(format_args!("{}", "abcdefghijk"));
        assert_eq!(buf.as_str(), "abcdefg");
        assert_eq!(buf.len(), 7);

        let c = buf.to_c_bytes();
        assert_eq!(&c[..7], b"abcdefg");
        assert_eq!(c[7], 0);
    }

    #[test]
    fn text_buffer_truncates_at_char_boundary() {
        // 'é' is two bytes; only one byte of room remains after "abcde".
        let buf: TextBuffer<7> = TextBuffer::formatted(format_args!("abcdeé"));
        assert_eq!(buf.as_str(), "abcde");
    }

    #[test]
    fn text_buffer_accumulates_writes() {
        let mut buf: TextBuffer<6> = TextBuffer::new();
        write!(buf, "ab").unwrap();
        write!(buf, "cdef").unwrap();
        assert_eq!(buf.as_str(), "abcde");
        buf.clear();
        assert!(buf.is_empty());
    }

    #[test]
    fn zero_and_one_byte_buffers_hold_no_text() {
        let zero: TextBuffer<0> = TextBuffer::formatted(format_args!("x"));
        assert!(zero.is_empty());
        let one: TextBuffer<1> = TextBuffer::formatted(format_args!("x"));
        assert!(one.is_empty());
        assert_eq!(one.to_c_bytes(), [0]);
    }

    // ════════════════════════════════════════════════════════════════════════
    // DisplayLines
    // ════════════════════════════════════════════════════════════════════════

    #[test]
    fn formats_typical_stats() {
        let out = lines(120, 3, 1);
        assert_eq!(out.icounter.as_str(), "Icounter: 120/300");
        assert_eq!(out.butthurt.as_str(), "Butthurt: 3/14");
        assert_eq!(out.level.as_str(), "Level: 1/3");
    }

    #[test]
    fn level_two_and_three_show_same_threshold() {
        let two = lines(500, 0, 2);
        let three = lines(500, 0, 3);
        assert_eq!(two.icounter.as_str(), "Icounter: 500/1800");
        assert_eq!(three.icounter.as_str(), "Icounter: 500/1800");
    }

    #[test]
    fn out_of_range_level_is_shown_verbatim() {
        let out = lines(0, 0, 7);
        assert_eq!(out.level.as_str(), "Level: 7/3");
    }

    #[test]
    fn maximal_values_fit_and_stay_nul_terminated() {
        let out = lines(u32::MAX, u32::MAX, u8::MAX);

        assert_eq!(out.icounter.as_str(), "Icounter: 4294967295/1800");
        assert_eq!(out.butthurt.as_str(), "Butthurt: 4294967295/14");
        assert_eq!(out.level.as_str(), "Level: 255/3");

        assert!(out.icounter.len() < ICOUNTER_TEXT_CAP);
        assert!(out.butthurt.len() < BUTTHURT_TEXT_CAP);
        assert!(out.level.len() < LEVEL_TEXT_CAP);

        let c = out.icounter.to_c_bytes();
        assert_eq!(c[out.icounter.len()], 0);
        assert_eq!(c[ICOUNTER_TEXT_CAP - 1], 0);
        let c = out.level.to_c_bytes();
        assert_eq!(c[LEVEL_TEXT_CAP - 1], 0);
    }

    #[test]
    fn entries_follow_menu_order() {
        let out = lines(1, 2, 1);
        let entries = out.entries();
        assert_eq!(entries[0].0, MenuItem::Icounter);
        assert_eq!(entries[1].0, MenuItem::Butthurt);
        assert_eq!(entries[2].0, MenuItem::Level);
        assert_eq!(entries[2].1, "Level: 1/3");
    }

    #[test]
    fn new_lines_are_empty() {
        let out = DisplayLines::new();
        assert!(out.entries().iter().all(|(_, s)| s.is_empty()));
    }
}
