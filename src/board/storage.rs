//! Dolphin stats record in internal flash.
//!
//! The firmware's stats subsystem keeps its counters in a
//! `sequential-storage` map on the nRF52840's internal flash. This app only
//! reads the record; it never writes it.
//!
//! Storage layout:
//!   - One map entry under `STATS_RECORD_KEY`, holding the 18-byte
//!     `DolphinStats` record (see `ds_detail::stats`).
//!   - The flash pages are managed by `sequential-storage`.

use defmt::{error, info, warn};
use ds_detail::config::{STATS_FLASH_PAGE_COUNT, STATS_FLASH_PAGE_START, STATS_RECORD_KEY};
use ds_detail::stats::DolphinStats;

/// Flash page size for nRF52840 (4 KB).
const FLASH_PAGE_SIZE: u32 = 4096;

/// Start address of our storage region.
const STORAGE_START: u32 = STATS_FLASH_PAGE_START * FLASH_PAGE_SIZE;

/// End address (exclusive) of our storage region.
const STORAGE_END: u32 = (STATS_FLASH_PAGE_START + STATS_FLASH_PAGE_COUNT) * FLASH_PAGE_SIZE;

/// Scratch buffer size for map reads.
const MAX_RECORD_SIZE: usize = 64;

/// Load the stats record, falling back to a fresh dolphin.
pub async fn load_stats(
    flash: &mut impl embedded_storage_async::nor_flash::NorFlash,
) -> DolphinStats {
    let flash_range = STORAGE_START..STORAGE_END;
    let mut buf = [0u8; MAX_RECORD_SIZE];

    match sequential_storage::map::fetch_item::<u8, &[u8], _>(
        flash,
        flash_range,
        &mut sequential_storage::cache::NoCache::new(),
        &mut buf,
        &STATS_RECORD_KEY,
    )
    .await
    {
        Ok(Some(data)) => match DolphinStats::from_bytes(data) {
            Some(stats) => {
                info!(
                    "Loaded dolphin stats: icounter={} butthurt={} level={}",
                    stats.icounter,
                    stats.butthurt,
                    stats.level
                );
                stats
            }
            None => {
                warn!("Dolphin stats record too short ({} bytes)", data.len());
                DolphinStats::default()
            }
        },
        Ok(None) => {
            info!("No dolphin stats in flash");
            DolphinStats::default()
        }
        Err(e) => {
            error!("Flash read error: {:?}", defmt::Debug2Format(&e));
            DolphinStats::default()
        }
    }
}
