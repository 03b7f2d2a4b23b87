//! Application-wide constants and compile-time configuration.
//!
//! Level thresholds, buffer sizes, view/scene ids and the board's pin and
//! flash layout live here so they can be tuned in one place.

// Identity

/// Tag used in log lines.
pub const APPLICATION_NAME: &str = "DSDetail";

// Dolphin level system
//
// These values aren't exported by the stats service, so they are redefined
// here. They must follow the firmware if its level system changes.

/// Icounter needed to leave level 1.
pub const LEVEL2_THRESHOLD: u32 = 300;

/// Icounter needed to leave level 2.
pub const LEVEL3_THRESHOLD: u32 = 1800;

/// Upper bound of the butthurt counter.
pub const BUTTHURT_MAX: u32 = 14;

/// Highest reachable level.
pub const LEVEL_MAX: u8 = 3;

// Display buffers (bytes, including the NUL terminator)

pub const ICOUNTER_TEXT_CAP: usize = 32;
pub const BUTTHURT_TEXT_CAP: usize = 32;
pub const LEVEL_TEXT_CAP: usize = 20;

// GUI framework

/// View id of the stats menu inside the view dispatcher.
pub const VIEW_MENU: u32 = 0;

/// Scene id of the only scene.
pub const SCENE_MAIN: u32 = 0;

/// Custom event raised by every menu item.
pub const GENERIC_EVENT: u32 = 0;

/// Maximum number of views a dispatcher can hold.
pub const MAX_VIEWS: usize = 4;

/// Depth of the dispatcher's custom event queue.
pub const DISPATCH_QUEUE_DEPTH: usize = 8;

/// Maximum depth of the scene stack.
pub const SCENE_STACK_DEPTH: usize = 8;

/// Maximum number of menu items.
pub const MENU_MAX_ITEMS: usize = 8;

/// Menu label capacity (bytes).
pub const MENU_LABEL_CAP: usize = 32;

// Screen

/// 128×64 monochrome panel.
pub const SCREEN_WIDTH: u32 = 128;
pub const SCREEN_HEIGHT: u32 = 64;

/// Row pitch of menu items (px), matches the 6×10 font.
pub const MENU_ROW_HEIGHT: i32 = 12;

// GPIO pin assignments (nRF52840-DK defaults)
//
// These are logical names; actual `embassy_nrf::peripherals::*` types are
// selected in `main.rs`.  Adjust for your custom PCB.
//
//   Button UP      → P0.11
//   Button DOWN    → P0.12
//   Button OK      → P0.24
//   Button BACK    → P0.25
//   I²C SDA        → P0.26
//   I²C SCL        → P0.27

/// Button debounce time (ms).
pub const BUTTON_DEBOUNCE_MS: u64 = 50;

/// Idle poll period while waiting for a button (ms).
pub const BUTTON_POLL_MS: u64 = 10;

// Stats record storage (board only)

/// Flash page index where the stats map starts (4 KB per page on nRF52840).
pub const STATS_FLASH_PAGE_START: u32 = 240;

/// Number of flash pages reserved for the stats map.
pub const STATS_FLASH_PAGE_COUNT: u32 = 4;

/// Map key of the dolphin stats record.
pub const STATS_RECORD_KEY: u8 = 0x02;
