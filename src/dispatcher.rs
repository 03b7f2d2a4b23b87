//! View dispatcher - routes input to the current view and runs the app loop.
//!
//! The dispatcher only knows view ids. Drawing and input handling for a
//! view, as well as the custom-event and navigation callbacks, are provided
//! by a [`DispatchHandler`], which gets the dispatcher back on every call so
//! it can switch views, queue events or stop the loop.

use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::DrawTarget;
use heapless::{Deque, Vec};

use crate::config::{DISPATCH_QUEUE_DEPTH, MAX_VIEWS};
use crate::error::Error;
use crate::platform::Gui;
use crate::ui::InputKey;

pub type ViewId = u32;

/// GUI layer the dispatcher draws on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ViewDispatcherType {
    /// Whole panel.
    Fullscreen,
}

/// Application callbacks driven by [`ViewDispatcher::run`].
pub trait DispatchHandler {
    /// A queued custom event. Returns whether it was consumed.
    fn custom_event(&mut self, dispatcher: &mut ViewDispatcher, event: u32) -> bool;

    /// Back was not consumed by the current view.
    ///
    /// Returning `false` stops the dispatcher.
    fn navigation_event(&mut self, dispatcher: &mut ViewDispatcher) -> bool;

    /// Key press for `view`. Returns whether the view consumed it.
    fn input_event(&mut self, dispatcher: &mut ViewDispatcher, view: ViewId, key: InputKey)
        -> bool;

    /// Render `view` into a cleared canvas.
    fn draw<D>(&self, view: ViewId, canvas: &mut D)
    where
        D: DrawTarget<Color = BinaryColor>;
}

pub struct ViewDispatcher {
    views: Vec<ViewId, MAX_VIEWS>,
    current: Option<ViewId>,
    queue: Option<Deque<u32, DISPATCH_QUEUE_DEPTH>>,
    attached: Option<ViewDispatcherType>,
    running: bool,
}

impl Default for ViewDispatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewDispatcher {
    pub const fn new() -> Self {
        Self {
            views: Vec::new(),
            current: None,
            queue: None,
            attached: None,
            running: false,
        }
    }

    /// Create the custom event queue. Required before [`Self::run`].
    pub fn enable_queue(&mut self) {
        if self.queue.is_none() {
            self.queue = Some(Deque::new());
        }
    }

    pub fn add_view(&mut self, id: ViewId) -> Result<(), Error> {
        if self.views.contains(&id) {
            return Err(Error::ViewExists(id));
        }
        self.views.push(id).map_err(|_| Error::TooManyViews)
    }

    /// Unregister `id`. Removing the current view leaves nothing shown.
    pub fn remove_view(&mut self, id: ViewId) {
        if let Some(pos) = self.views.iter().position(|&v| v == id) {
            self.views.swap_remove(pos);
        }
        if self.current == Some(id) {
            self.current = None;
        }
    }

    pub fn switch_to_view(&mut self, id: ViewId) {
        if self.views.contains(&id) {
            self.current = Some(id);
        } else {
            warn!("switch_to_view: view {} not registered", id);
        }
    }

    pub fn current_view(&self) -> Option<ViewId> {
        self.current
    }

    pub fn attach_to_gui(&mut self, kind: ViewDispatcherType) {
        self.attached = Some(kind);
    }

    /// Queue `event` for delivery to [`DispatchHandler::custom_event`].
    pub fn send_custom_event(&mut self, event: u32) -> Result<(), Error> {
        let queue = self.queue.as_mut().ok_or(Error::QueueDisabled)?;
        queue.push_back(event).map_err(|_| Error::QueueFull)
    }

    /// Make [`Self::run`] return after the current event.
    pub fn stop(&mut self) {
        self.running = false;
    }

    /// Block delivering events until stopped or the input source closes.
    pub fn run<H, G>(&mut self, handler: &mut H, gui: &mut G)
    where
        H: DispatchHandler,
        G: Gui,
    {
        if self.queue.is_none() {
            warn!("ViewDispatcher: run without queue");
            return;
        }

        self.running = true;
        self.redraw(handler, gui);

        while self.running {
            while let Some(event) = self.queue.as_mut().and_then(|q| q.pop_front()) {
                handler.custom_event(self, event);
                if !self.running {
                    return;
                }
            }

            let Some(key) = gui.next_input() else {
                warn!("ViewDispatcher: input closed");
                self.running = false;
                break;
            };

            let consumed = match self.current {
                Some(view) => handler.input_event(self, view, key),
                None => false,
            };

            if !consumed && key == InputKey::Back && !handler.navigation_event(self) {
                self.stop();
            }

            if self.running {
                self.redraw(handler, gui);
            }
        }
    }

    fn redraw<H, G>(&self, handler: &H, gui: &mut G)
    where
        H: DispatchHandler,
        G: Gui,
    {
        let (Some(_), Some(view)) = (self.attached, self.current) else {
            return;
        };
        let canvas = gui.canvas();
        let _ = canvas.clear(BinaryColor::Off);
        handler.draw(view, canvas);
        gui.commit();
    }
}
