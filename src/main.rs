//! ds-detail firmware - nRF52840 entry point.
//!
//! Boot sequence:
//!   1. Read the dolphin stats record from internal flash.
//!   2. Bring up the SSD1306 panel on TWIM0 and the four buttons.
//!   3. Run the stats screen until BACK, then blank the panel and sleep.

#![no_std]
#![no_main]

mod board;

use defmt::{error, info};
use ds_detail::app::EXIT_OK;
use embassy_embedded_hal::adapter::BlockingAsync;
use embassy_executor::Spawner;
use embassy_nrf::gpio::Pin;
use embassy_nrf::nvmc::Nvmc;
use embassy_nrf::{bind_interrupts, peripherals, twim};
use {defmt_rtt as _, panic_probe as _};

use crate::board::buttons::Buttons;
use crate::board::{display, storage, Board};

bind_interrupts!(struct Irqs {
    TWISPI0 => twim::InterruptHandler<peripherals::TWISPI0>;
});

#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    info!("{} booting", ds_detail::config::APPLICATION_NAME);

    let p = embassy_nrf::init(Default::default());

    let mut flash = BlockingAsync::new(Nvmc::new(p.NVMC));
    let stats = storage::load_stats(&mut flash).await;

    // SDA = P0.26, SCL = P0.27
    let i2c = twim::Twim::new(p.TWISPI0, Irqs, p.P0_26, p.P0_27, twim::Config::default());
    let display = display::init(i2c);

    let buttons = Buttons::new(
        p.P0_11.degrade(),
        p.P0_12.degrade(),
        p.P0_24.degrade(),
        p.P0_25.degrade(),
    );

    let mut board = Board::new(display, buttons, stats);
    let status = ds_detail::ds_detail(&mut board);
    if status == EXIT_OK {
        info!("Stats screen closed");
    } else {
        error!("Stats screen exited with status {}", status);
    }

    board.shutdown();

    loop {
        cortex_m::asm::wfi();
    }
}
