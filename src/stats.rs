//! Dolphin stats snapshot.
//!
//! The stats service owns the counters; the app only copies them out once.
//!
//! Record layout used by the board's flash store (18 bytes, little-endian):
//! ```text
//! Byte 0-3:   icounter
//! Byte 4-7:   butthurt
//! Byte 8-15:  timestamp (seconds)
//! Byte 16:    level
//! Byte 17:    flags (bit 0 = level-up pending)
//! ```

use crate::platform::{Record, RecordGuard, Records, StatsService};

/// Serialized record size in bytes.
pub const STATS_RECORD_SIZE: usize = 18;

const FLAG_LEVEL_UP_PENDING: u8 = 0x01;

/// Copy of the device-wide gamification counters.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DolphinStats {
    /// Interaction counter.
    pub icounter: u32,
    /// Decaying mood counter.
    pub butthurt: u32,
    /// Time of the last counter update.
    pub timestamp: u64,
    /// Progression tier.
    pub level: u8,
    pub level_up_is_pending: bool,
}

impl Default for DolphinStats {
    /// A freshly hatched dolphin sits at level 1.
    fn default() -> Self {
        Self {
            icounter: 0,
            butthurt: 0,
            timestamp: 0,
            level: 1,
            level_up_is_pending: false,
        }
    }
}

impl DolphinStats {
    /// Parse a stored record. Extra trailing bytes are ignored.
    pub fn from_bytes(data: &[u8]) -> Option<Self> {
        if data.len() < STATS_RECORD_SIZE {
            return None;
        }

        let mut timestamp = [0u8; 8];
        timestamp.copy_from_slice(&data[8..16]);

        Some(Self {
            icounter: u32::from_le_bytes([data[0], data[1], data[2], data[3]]),
            butthurt: u32::from_le_bytes([data[4], data[5], data[6], data[7]]),
            timestamp: u64::from_le_bytes(timestamp),
            level: data[16],
            level_up_is_pending: data[17] & FLAG_LEVEL_UP_PENDING != 0,
        })
    }

    /// Serialize into `buf`. Returns the number of bytes written, or 0 if
    /// `buf` is too small.
    pub fn to_bytes(&self, buf: &mut [u8]) -> usize {
        if buf.len() < STATS_RECORD_SIZE {
            return 0;
        }
        buf[0..4].copy_from_slice(&self.icounter.to_le_bytes());
        buf[4..8].copy_from_slice(&self.butthurt.to_le_bytes());
        buf[8..16].copy_from_slice(&self.timestamp.to_le_bytes());
        buf[16] = self.level;
        buf[17] = if self.level_up_is_pending {
            FLAG_LEVEL_UP_PENDING
        } else {
            0
        };
        STATS_RECORD_SIZE
    }
}

/// Open the dolphin record, copy the stats out, close the record.
///
/// There is no error path: the stats service cannot report a failed open,
/// so whatever it hands back is what gets displayed.
pub fn read_snapshot<H: Records + StatsService>(host: &mut H) -> DolphinStats {
    let mut dolphin = RecordGuard::open(host, Record::Dolphin);
    dolphin.dolphin_stats()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::{HostCall, MockPlatform};

    #[test]
    fn default_is_level_one() {
        let stats = DolphinStats::default();
        assert_eq!(stats.level, 1);
        assert_eq!(stats.icounter, 0);
        assert!(!stats.level_up_is_pending);
    }

    #[test]
    fn parses_record_layout() {
        let data = [
            0x2C, 0x01, 0x00, 0x00, // icounter = 300
            0x05, 0x00, 0x00, 0x00, // butthurt = 5
            0x10, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, // timestamp = 16
            0x02, // level
            0x01, // level-up pending
        ];
        let stats = DolphinStats::from_bytes(&data).unwrap();
        assert_eq!(stats.icounter, 300);
        assert_eq!(stats.butthurt, 5);
        assert_eq!(stats.timestamp, 16);
        assert_eq!(stats.level, 2);
        assert!(stats.level_up_is_pending);
    }

    #[test]
    fn short_record_is_rejected() {
        assert!(DolphinStats::from_bytes(&[]).is_none());
        assert!(DolphinStats::from_bytes(&[0u8; STATS_RECORD_SIZE - 1]).is_none());
    }

    #[test]
    fn unknown_flag_bits_are_ignored() {
        let mut data = [0u8; STATS_RECORD_SIZE];
        data[17] = 0xFE;
        let stats = DolphinStats::from_bytes(&data).unwrap();
        assert!(!stats.level_up_is_pending);
    }

    #[test]
    fn to_bytes_writes_record() {
        let stats = DolphinStats {
            icounter: u32::MAX,
            butthurt: 14,
            timestamp: 0x0102_0304_0506_0708,
            level: 3,
            level_up_is_pending: false,
        };
        let mut buf = [0u8; 20];
        assert_eq!(stats.to_bytes(&mut buf), STATS_RECORD_SIZE);
        assert_eq!(&buf[0..4], &[0xFF; 4]);
        assert_eq!(buf[4], 14);
        assert_eq!(buf[8], 0x08);
        assert_eq!(buf[15], 0x01);
        assert_eq!(buf[16], 3);
        assert_eq!(buf[17], 0);
        assert_eq!(DolphinStats::from_bytes(&buf), Some(stats));
    }

    #[test]
    fn to_bytes_buffer_too_small() {
        let mut buf = [0u8; 4];
        assert_eq!(DolphinStats::default().to_bytes(&mut buf), 0);
    }

    #[test]
    fn snapshot_opens_and_closes_dolphin_record() {
        let mut host = MockPlatform::new();
        host.set_stats(DolphinStats {
            icounter: 1234,
            butthurt: 7,
            level: 2,
            ..DolphinStats::default()
        });

        let stats = read_snapshot(&mut host);

        assert_eq!(stats.icounter, 1234);
        assert_eq!(stats.butthurt, 7);
        assert_eq!(stats.level, 2);
        assert_eq!(
            host.calls(),
            &[
                HostCall::OpenRecord(Record::Dolphin),
                HostCall::ReadStats,
                HostCall::CloseRecord(Record::Dolphin),
            ]
        );
    }
}
