//! Unified error type for ds-detail.
//!
//! We avoid `alloc` - all error variants carry only fixed-size data.
//! Implements `defmt::Format` (feature `defmt`) for on-target logging.

use crate::platform::Resource;

/// Top-level error type used across the application.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    // Acquisition
    /// The host could not provide the resource.
    Alloc(Resource),

    // Scenes
    /// Scene handler tables differ in length or are empty.
    SceneTable,

    // View dispatcher
    /// A view with this id is already registered.
    ViewExists(u32),

    /// The dispatcher holds `MAX_VIEWS` views already.
    TooManyViews,

    /// Custom events were sent before `enable_queue`.
    QueueDisabled,

    /// The custom event queue is full.
    QueueFull,

    // Menu
    /// The menu holds `MENU_MAX_ITEMS` items already.
    MenuFull,
}
