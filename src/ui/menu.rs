//! Menu view - a vertical list of text items with a cursor.
//!
//! Items carry a caller-chosen index. OK hands that index back to the
//! owner, who decides what selecting it means; the menu itself has no
//! callbacks.

use embedded_graphics::mono_font::ascii::FONT_6X10;
use embedded_graphics::mono_font::{MonoTextStyle, MonoTextStyleBuilder};
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics::text::Text;
use heapless::{String, Vec};

use super::input_logic::{select_next, select_prev};
use super::InputKey;
use crate::config::{MENU_LABEL_CAP, MENU_MAX_ITEMS, MENU_ROW_HEIGHT};
use crate::error::Error;

/// Items of the stats menu, by index.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MenuItem {
    Icounter = 0,
    Butthurt = 1,
    Level = 2,
}

impl MenuItem {
    pub fn from_index(index: u32) -> Option<Self> {
        match index {
            0 => Some(MenuItem::Icounter),
            1 => Some(MenuItem::Butthurt),
            2 => Some(MenuItem::Level),
            _ => None,
        }
    }

    pub const fn index(self) -> u32 {
        self as u32
    }
}

/// One row of the menu.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MenuEntry {
    pub label: String<MENU_LABEL_CAP>,
    pub index: u32,
}

/// Outcome of feeding a key to the menu.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuInput {
    /// Cursor moved (or the key was swallowed).
    Consumed,
    /// OK pressed on the item with this index.
    Selected(u32),
    /// The menu does not handle this key.
    Ignored,
}

/// List of items plus the cursor position.
#[derive(Default)]
pub struct Menu {
    items: Vec<MenuEntry, MENU_MAX_ITEMS>,
    selected: usize,
}

impl Menu {
    pub const fn new() -> Self {
        Self {
            items: Vec::new(),
            selected: 0,
        }
    }

    /// Append an item. The label is cut to `MENU_LABEL_CAP` bytes.
    pub fn add_item(&mut self, label: &str, index: u32) -> Result<(), Error> {
        let mut text: String<MENU_LABEL_CAP> = String::new();
        for c in label.chars() {
            if text.push(c).is_err() {
                break;
            }
        }
        self.items
            .push(MenuEntry { label: text, index })
            .map_err(|_| Error::MenuFull)
    }

    /// Remove all items and put the cursor back on top.
    pub fn reset(&mut self) {
        self.items.clear();
        self.selected = 0;
    }

    pub fn items(&self) -> &[MenuEntry] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Cursor position (row, not item index).
    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn process_key(&mut self, key: InputKey) -> MenuInput {
        let count = self.items.len();
        match key {
            InputKey::Up => {
                self.selected = select_prev(self.selected, count);
                MenuInput::Consumed
            }
            InputKey::Down => {
                self.selected = select_next(self.selected, count);
                MenuInput::Consumed
            }
            InputKey::Ok => match self.items.get(self.selected) {
                Some(entry) => MenuInput::Selected(entry.index),
                None => MenuInput::Consumed,
            },
            InputKey::Back => MenuInput::Ignored,
        }
    }

    /// Render all items, marking the selected row with `>`.
    pub fn draw<D>(&self, target: &mut D) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = BinaryColor>,
    {
        let style = text_style();

        for (row, entry) in self.items.iter().enumerate() {
            let marker = if row == self.selected { ">" } else { " " };
            let mut line: String<{ MENU_LABEL_CAP + 2 }> = String::new();
            let _ = line.push_str(marker);
            let _ = line.push_str(" ");
            let _ = line.push_str(entry.label.as_str());
            let y = 10 + row as i32 * MENU_ROW_HEIGHT;
            Text::new(line.as_str(), Point::new(0, y), style).draw(target)?;
        }

        Ok(())
    }
}

fn text_style() -> MonoTextStyle<'static, BinaryColor> {
    MonoTextStyleBuilder::new()
        .font(&FONT_6X10)
        .text_color(BinaryColor::On)
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::FrameBuffer;

    fn three_items() -> Menu {
        let mut menu = Menu::new();
        menu.add_item("Icounter: 1/300", 0).unwrap();
        menu.add_item("Butthurt: 2/14", 1).unwrap();
        menu.add_item("Level: 1/3", 2).unwrap();
        menu
    }

    #[test]
    fn menu_item_indices() {
        assert_eq!(MenuItem::from_index(0), Some(MenuItem::Icounter));
        assert_eq!(MenuItem::from_index(1), Some(MenuItem::Butthurt));
        assert_eq!(MenuItem::from_index(2), Some(MenuItem::Level));
        assert_eq!(MenuItem::from_index(3), None);
        assert_eq!(MenuItem::Level.index(), 2);
    }

    #[test]
    fn add_and_reset() {
        let mut menu = three_items();
        assert_eq!(menu.items().len(), 3);
        assert_eq!(menu.items()[1].label.as_str(), "Butthurt: 2/14");
        menu.process_key(InputKey::Down);
        menu.reset();
        assert!(menu.is_empty());
        assert_eq!(menu.selected(), 0);
    }

    #[test]
    fn add_item_fails_when_full() {
        let mut menu = Menu::new();
        for i in 0..MENU_MAX_ITEMS as u32 {
            menu.add_item("x", i).unwrap();
        }
        assert_eq!(menu.add_item("overflow", 99), Err(Error::MenuFull));
    }

    #[test]
    fn long_label_is_truncated() {
        let mut menu = Menu::new();
        let long = "0123456789012345678901234567890123456789";
        menu.add_item(long, 0).unwrap();
        assert_eq!(menu.items()[0].label.len(), MENU_LABEL_CAP);
    }

    #[test]
    fn up_down_wrap_and_ok_selects_index() {
        let mut menu = three_items();
        assert_eq!(menu.process_key(InputKey::Up), MenuInput::Consumed);
        assert_eq!(menu.selected(), 2);
        assert_eq!(menu.process_key(InputKey::Ok), MenuInput::Selected(2));
        assert_eq!(menu.process_key(InputKey::Down), MenuInput::Consumed);
        assert_eq!(menu.selected(), 0);
        assert_eq!(menu.process_key(InputKey::Ok), MenuInput::Selected(0));
    }

    #[test]
    fn back_is_not_consumed() {
        let mut menu = three_items();
        assert_eq!(menu.process_key(InputKey::Back), MenuInput::Ignored);
    }

    #[test]
    fn ok_on_empty_menu_selects_nothing() {
        let mut menu = Menu::new();
        assert_eq!(menu.process_key(InputKey::Ok), MenuInput::Consumed);
    }

    #[test]
    fn draw_lights_pixels_only_with_items() {
        let mut fb = FrameBuffer::new();
        Menu::new().draw(&mut fb).unwrap();
        assert_eq!(fb.lit_pixels(), 0);

        three_items().draw(&mut fb).unwrap();
        assert!(fb.lit_pixels() > 0);
        // Three rows at a 12 px pitch stay inside the 64 px panel.
        assert!(fb.lit_pixels_below(3 * MENU_ROW_HEIGHT as u32 + 2) == 0);
    }

    #[test]
    fn selection_marker_moves_with_cursor() {
        let mut menu = three_items();
        let mut top = FrameBuffer::new();
        menu.draw(&mut top).unwrap();

        menu.process_key(InputKey::Down);
        let mut second = FrameBuffer::new();
        menu.draw(&mut second).unwrap();

        assert_ne!(top, second);
    }
}
