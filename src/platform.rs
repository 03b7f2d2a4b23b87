//! Host services consumed by the application.
//!
//! The app never talks to hardware directly. It acquires its resources,
//! opens shared records, reads the dolphin stats and drives the screen
//! through these traits; the firmware binary implements them for the
//! nRF52840 board and [`crate::mock`] implements them for tests.

use core::ops::{Deref, DerefMut};

use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::DrawTarget;

use crate::error::Error;
use crate::stats::DolphinStats;
use crate::ui::InputKey;

/// Resources the shell acquires, in acquisition order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Resource {
    /// The display state (text buffers + handles).
    State,
    SceneManager,
    ViewDispatcher,
    Menu,
}

impl Resource {
    /// Every resource in acquisition order.
    pub const ALL: [Resource; 4] = [
        Resource::State,
        Resource::SceneManager,
        Resource::ViewDispatcher,
        Resource::Menu,
    ];
}

/// Shared host records that are opened around use.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Record {
    /// Dolphin (gamification) stats service.
    Dolphin,
    /// GUI service the view dispatcher attaches to.
    Gui,
}

/// Resource acquisition accounting.
pub trait Heap {
    /// Acquire `resource`. Fails with [`Error::Alloc`] when exhausted.
    fn alloc(&mut self, resource: Resource) -> Result<(), Error>;

    /// Release a resource previously acquired with [`Heap::alloc`].
    fn free(&mut self, resource: Resource);
}

/// Named shared records.
pub trait Records {
    fn open_record(&mut self, record: Record);
    fn close_record(&mut self, record: Record);
}

/// Device-wide gamification stats.
pub trait StatsService {
    /// Current stats. Only valid while [`Record::Dolphin`] is open.
    fn dolphin_stats(&mut self) -> DolphinStats;
}

/// Screen and input.
pub trait Gui {
    /// Monochrome frame buffer the current view draws into.
    type Canvas: DrawTarget<Color = BinaryColor>;

    fn canvas(&mut self) -> &mut Self::Canvas;

    /// Push the canvas to the panel.
    fn commit(&mut self);

    /// Block until the next debounced key press.
    ///
    /// Returns `None` once the input source is closed.
    fn next_input(&mut self) -> Option<InputKey>;
}

/// Everything the application needs from its host.
pub trait Platform: Heap + Records + StatsService + Gui {}

impl<T: Heap + Records + StatsService + Gui> Platform for T {}

/// An open record; closes it when dropped.
///
/// Dereferences to the host so the record's services stay reachable
/// while it is held.
pub struct RecordGuard<'a, H: Records> {
    host: &'a mut H,
    record: Record,
}

impl<'a, H: Records> RecordGuard<'a, H> {
    pub fn open(host: &'a mut H, record: Record) -> Self {
        host.open_record(record);
        Self { host, record }
    }
}

impl<H: Records> Deref for RecordGuard<'_, H> {
    type Target = H;

    fn deref(&self) -> &H {
        self.host
    }
}

impl<H: Records> DerefMut for RecordGuard<'_, H> {
    fn deref_mut(&mut self) -> &mut H {
        self.host
    }
}

impl<H: Records> Drop for RecordGuard<'_, H> {
    fn drop(&mut self) {
        self.host.close_record(self.record);
    }
}
