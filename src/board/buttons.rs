//! GPIO button input with blocking debouncing.
//!
//! Four physical buttons (active-low with internal pull-up):
//!   - UP / DOWN - move the menu cursor
//!   - OK        - activate the selected item
//!   - BACK      - leave the stats screen
//!
//! The app's event loop is synchronous, so buttons are polled: wait for a
//! pin to go low, debounce, report it, then wait for release.

use defmt::debug;
use ds_detail::config::{BUTTON_DEBOUNCE_MS, BUTTON_POLL_MS};
use ds_detail::ui::InputKey;
use embassy_nrf::gpio::{AnyPin, Input, Pull};
use embassy_time::{block_for, Duration};

pub struct Buttons {
    pins: [(InputKey, Input<'static>); 4],
}

impl Buttons {
    pub fn new(up: AnyPin, down: AnyPin, ok: AnyPin, back: AnyPin) -> Self {
        Self {
            pins: [
                (InputKey::Up, Input::new(up, Pull::Up)),
                (InputKey::Down, Input::new(down, Pull::Up)),
                (InputKey::Ok, Input::new(ok, Pull::Up)),
                (InputKey::Back, Input::new(back, Pull::Up)),
            ],
        }
    }

    /// Block until a button is pressed and released.
    pub fn wait_press(&mut self) -> InputKey {
        loop {
            if let Some(slot) = self.pins.iter().position(|(_, pin)| pin.is_low()) {
                // Debounce: wait and re-check.
                block_for(Duration::from_millis(BUTTON_DEBOUNCE_MS));

                let (key, pin) = &self.pins[slot];
                if pin.is_low() {
                    debug!("Button: {}", key);

                    // Wait for release to avoid repeat triggers.
                    while pin.is_low() {
                        block_for(Duration::from_millis(BUTTON_POLL_MS));
                    }
                    block_for(Duration::from_millis(BUTTON_DEBOUNCE_MS));
                    return *key;
                }
            }

            block_for(Duration::from_millis(BUTTON_POLL_MS));
        }
    }
}
