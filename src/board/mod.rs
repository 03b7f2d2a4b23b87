//! nRF52840 board support - the app's host services on real hardware.
//!
//! ## Components
//!
//! - **Display**: SSD1306 128×64 OLED via I²C, used as the app's canvas
//! - **Buttons**: 4 tactile switches with debouncing (UP, DOWN, OK, BACK)
//! - **Storage**: dolphin stats record in internal flash
//!
//! Resources live in static memory, so acquisition never fails here; the
//! board only tracks what is held so leaks show up in the log.

pub mod buttons;
pub mod display;
pub mod storage;

use defmt::{debug, warn};
use ds_detail::error::Error;
use ds_detail::platform::{Gui, Heap, Record, Records, Resource, StatsService};
use ds_detail::stats::DolphinStats;
use ds_detail::ui::InputKey;

use self::buttons::Buttons;
use self::display::Display;

pub struct Board<I2C>
where
    I2C: embedded_hal::i2c::I2c,
{
    display: Display<I2C>,
    buttons: Buttons,
    /// Snapshot loaded from flash at boot.
    stats: DolphinStats,
    /// Bit per `Resource` currently held.
    held: u8,
    /// Bit per `Record` currently open.
    open: u8,
}

impl<I2C> Board<I2C>
where
    I2C: embedded_hal::i2c::I2c,
{
    pub fn new(display: Display<I2C>, buttons: Buttons, stats: DolphinStats) -> Self {
        Self {
            display,
            buttons,
            stats,
            held: 0,
            open: 0,
        }
    }

    /// Switch the panel off once the app has returned.
    pub fn shutdown(&mut self) {
        if self.held != 0 || self.open != 0 {
            warn!(
                "Board: leaked resources={=u8:b} records={=u8:b}",
                self.held, self.open
            );
        }
        display::power_off(&mut self.display);
    }
}

fn resource_bit(resource: Resource) -> u8 {
    1 << (resource as u8)
}

fn record_bit(record: Record) -> u8 {
    1 << (record as u8)
}

impl<I2C> Heap for Board<I2C>
where
    I2C: embedded_hal::i2c::I2c,
{
    fn alloc(&mut self, resource: Resource) -> Result<(), Error> {
        debug!("Board: alloc {}", resource);
        self.held |= resource_bit(resource);
        Ok(())
    }

    fn free(&mut self, resource: Resource) {
        debug!("Board: free {}", resource);
        self.held &= !resource_bit(resource);
    }
}

impl<I2C> Records for Board<I2C>
where
    I2C: embedded_hal::i2c::I2c,
{
    fn open_record(&mut self, record: Record) {
        self.open |= record_bit(record);
    }

    fn close_record(&mut self, record: Record) {
        self.open &= !record_bit(record);
    }
}

impl<I2C> StatsService for Board<I2C>
where
    I2C: embedded_hal::i2c::I2c,
{
    fn dolphin_stats(&mut self) -> DolphinStats {
        if self.open & record_bit(Record::Dolphin) == 0 {
            warn!("Board: dolphin stats read without open record");
        }
        self.stats
    }
}

impl<I2C> Gui for Board<I2C>
where
    I2C: embedded_hal::i2c::I2c,
{
    type Canvas = Display<I2C>;

    fn canvas(&mut self) -> &mut Display<I2C> {
        &mut self.display
    }

    fn commit(&mut self) {
        display::flush(&mut self.display);
    }

    fn next_input(&mut self) -> Option<InputKey> {
        Some(self.buttons.wait_press())
    }
}
