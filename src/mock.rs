//! In-memory platform for host tests.
//!
//! Records every host call in order, serves scripted key presses and
//! renders into a 128×64 bit-packed frame buffer. No heap: all storage is
//! `heapless`, so it builds for the target too.

use core::convert::Infallible;

use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use heapless::{Deque, Vec};

use crate::config::{SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::error::Error;
use crate::platform::{Gui, Heap, Record, Records, Resource, StatsService};
use crate::stats::DolphinStats;
use crate::ui::InputKey;

const CALL_LOG_DEPTH: usize = 128;
const INPUT_SCRIPT_DEPTH: usize = 32;
const FRAME_BYTES: usize = (SCREEN_WIDTH * SCREEN_HEIGHT / 8) as usize;

/// One observable host interaction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HostCall {
    Alloc(Resource),
    AllocFailed(Resource),
    Free(Resource),
    OpenRecord(Record),
    CloseRecord(Record),
    ReadStats,
    Commit,
}

/// Monochrome 128×64 frame buffer. Out-of-bounds pixels are dropped.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrameBuffer {
    bits: [u8; FRAME_BYTES],
}

impl Default for FrameBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameBuffer {
    pub const fn new() -> Self {
        Self {
            bits: [0; FRAME_BYTES],
        }
    }

    pub fn pixel(&self, x: u32, y: u32) -> bool {
        if x >= SCREEN_WIDTH || y >= SCREEN_HEIGHT {
            return false;
        }
        let i = (y * SCREEN_WIDTH + x) as usize;
        self.bits[i / 8] & (1 << (i % 8)) != 0
    }

    pub fn lit_pixels(&self) -> u32 {
        self.bits.iter().map(|b| b.count_ones()).sum()
    }

    /// Lit pixels on rows `y..SCREEN_HEIGHT`.
    pub fn lit_pixels_below(&self, y: u32) -> u32 {
        let mut count = 0;
        for row in y..SCREEN_HEIGHT {
            for x in 0..SCREEN_WIDTH {
                if self.pixel(x, row) {
                    count += 1;
                }
            }
        }
        count
    }
}

impl DrawTarget for FrameBuffer {
    type Color = BinaryColor;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            if point.x < 0 || point.y < 0 {
                continue;
            }
            let (x, y) = (point.x as u32, point.y as u32);
            if x >= SCREEN_WIDTH || y >= SCREEN_HEIGHT {
                continue;
            }
            let i = (y * SCREEN_WIDTH + x) as usize;
            match color {
                BinaryColor::On => self.bits[i / 8] |= 1 << (i % 8),
                BinaryColor::Off => self.bits[i / 8] &= !(1 << (i % 8)),
            }
        }
        Ok(())
    }
}

impl OriginDimensions for FrameBuffer {
    fn size(&self) -> Size {
        Size::new(SCREEN_WIDTH, SCREEN_HEIGHT)
    }
}

/// Scripted host.
pub struct MockPlatform {
    calls: Vec<HostCall, CALL_LOG_DEPTH>,
    inputs: Deque<InputKey, INPUT_SCRIPT_DEPTH>,
    stats: DolphinStats,
    fail_on: Option<Resource>,
    outstanding: i32,
    open_records: i32,
    canvas: FrameBuffer,
    last_frame: Option<FrameBuffer>,
}

impl Default for MockPlatform {
    fn default() -> Self {
        Self::new()
    }
}

impl MockPlatform {
    pub fn new() -> Self {
        Self {
            calls: Vec::new(),
            inputs: Deque::new(),
            stats: DolphinStats::default(),
            fail_on: None,
            outstanding: 0,
            open_records: 0,
            canvas: FrameBuffer::new(),
            last_frame: None,
        }
    }

    /// Host whose input source yields `keys` and then closes.
    pub fn with_inputs(keys: &[InputKey]) -> Self {
        let mut host = Self::new();
        for key in keys {
            host.push_input(*key);
        }
        host
    }

    pub fn push_input(&mut self, key: InputKey) {
        let _ = self.inputs.push_back(key);
    }

    pub fn set_stats(&mut self, stats: DolphinStats) {
        self.stats = stats;
    }

    /// Make acquiring `resource` fail.
    pub fn fail_alloc(&mut self, resource: Resource) {
        self.fail_on = Some(resource);
    }

    pub fn calls(&self) -> &[HostCall] {
        &self.calls
    }

    /// Resources acquired and not yet released.
    pub fn outstanding(&self) -> i32 {
        self.outstanding
    }

    /// Records opened and not yet closed.
    pub fn open_records(&self) -> i32 {
        self.open_records
    }

    pub fn pending_inputs(&self) -> usize {
        self.inputs.len()
    }

    /// Most recently committed frame.
    pub fn last_frame(&self) -> Option<&FrameBuffer> {
        self.last_frame.as_ref()
    }

    fn log(&mut self, call: HostCall) {
        let _ = self.calls.push(call);
    }
}

impl Heap for MockPlatform {
    fn alloc(&mut self, resource: Resource) -> Result<(), Error> {
        if self.fail_on == Some(resource) {
            self.log(HostCall::AllocFailed(resource));
            return Err(Error::Alloc(resource));
        }
        self.log(HostCall::Alloc(resource));
        self.outstanding += 1;
        Ok(())
    }

    fn free(&mut self, resource: Resource) {
        self.log(HostCall::Free(resource));
        self.outstanding -= 1;
    }
}

impl Records for MockPlatform {
    fn open_record(&mut self, record: Record) {
        self.log(HostCall::OpenRecord(record));
        self.open_records += 1;
    }

    fn close_record(&mut self, record: Record) {
        self.log(HostCall::CloseRecord(record));
        self.open_records -= 1;
    }
}

impl StatsService for MockPlatform {
    fn dolphin_stats(&mut self) -> DolphinStats {
        self.log(HostCall::ReadStats);
        self.stats
    }
}

impl Gui for MockPlatform {
    type Canvas = FrameBuffer;

    fn canvas(&mut self) -> &mut FrameBuffer {
        &mut self.canvas
    }

    fn commit(&mut self) {
        self.log(HostCall::Commit);
        self.last_frame = Some(self.canvas.clone());
    }

    fn next_input(&mut self) -> Option<InputKey> {
        self.inputs.pop_front()
    }
}
