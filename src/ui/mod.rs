//! User interface - input keys and the menu view.
//!
//! ## Components
//!
//! - **Menu**: list of text items with a cursor, drawn in the 6×10 mono font
//! - **Input logic**: cursor movement shared by list-style views

pub mod input_logic;
pub mod menu;

/// Physical key presses (after debouncing).
///
/// The handheld exposes a d-pad subset plus OK and BACK:
///   - UP/DOWN: move the menu cursor
///   - OK: activate the item under the cursor
///   - BACK: leave the current scene
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum InputKey {
    Up,
    Down,
    Ok,
    Back,
}
