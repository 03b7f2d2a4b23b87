//! Application shell.
//!
//! Acquires the display state, scene manager, view dispatcher and menu in
//! that order, wires them together, runs the dispatcher until the user backs
//! out of the stats scene, then releases everything in reverse order.
//! A failed acquisition releases exactly what was acquired before it.

use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::DrawTarget;
use heapless::Vec;

use crate::config::{SCENE_MAIN, VIEW_MENU};
use crate::dispatcher::{DispatchHandler, ViewDispatcher, ViewDispatcherType, ViewId};
use crate::error::Error;
use crate::main_scene::{self, SCENE_HANDLERS};
use crate::platform::{Gui, Heap, Platform, Record, RecordGuard, Resource};
use crate::scene::SceneManager;
use crate::state::DisplayState;
use crate::stats;
use crate::ui::menu::MenuInput;
use crate::ui::InputKey;

/// Exit status of a clean run.
pub const EXIT_OK: i32 = 0;

/// Exit status when a resource could not be acquired.
pub const EXIT_ALLOC_FAILED: i32 = -1;

/// Run the stats screen to completion.
pub fn ds_detail<P: Platform>(platform: &mut P) -> i32 {
    info!("Starting...");

    let mut leases = Leases::new();
    let outcome = launch(platform, &mut leases);
    leases.release_all(platform);

    match outcome {
        Ok(()) => {
            info!("Clean exit.");
            EXIT_OK
        }
        Err(Error::Alloc(resource)) => {
            error!("Failed to launch (alloc error)! {}", resource);
            EXIT_ALLOC_FAILED
        }
        Err(e) => {
            error!("Failed to launch! {}", e);
            EXIT_ALLOC_FAILED
        }
    }
}

fn launch<P: Platform>(platform: &mut P, leases: &mut Leases) -> Result<(), Error> {
    leases.acquire(platform, Resource::State)?;
    let mut state = DisplayState::new();

    leases.acquire(platform, Resource::SceneManager)?;
    let scenes = SceneManager::new(&SCENE_HANDLERS)?;

    leases.acquire(platform, Resource::ViewDispatcher)?;
    let mut dispatcher = ViewDispatcher::new();

    leases.acquire(platform, Resource::Menu)?;

    state.copy_stats(&stats::read_snapshot(platform));

    dispatcher.enable_queue();
    if let Err(e) = dispatcher.add_view(VIEW_MENU) {
        warn!("view_dispatcher_add_view failed: {}", e);
    }

    let mut app = App { scenes, state };
    {
        let mut gui = RecordGuard::open(platform, Record::Gui);
        dispatcher.attach_to_gui(ViewDispatcherType::Fullscreen);
        run_main_scene(&mut app, &mut dispatcher, &mut *gui);
    }
    dispatcher.remove_view(VIEW_MENU);

    Ok(())
}

/// Enter the stats scene and run until the dispatcher stops.
///
/// Leaves the scene stack empty whether the run ended on BACK or because
/// the input source closed.
fn run_main_scene<G: Gui>(app: &mut App, dispatcher: &mut ViewDispatcher, gui: &mut G) {
    app.scenes.next_scene(SCENE_MAIN, &mut app.state, dispatcher);
    dispatcher.run(&mut *app, gui);
    app.scenes.stop(&mut app.state, dispatcher);
}

/// Resources acquired so far, in acquisition order.
struct Leases {
    held: Vec<Resource, { Resource::ALL.len() }>,
}

impl Leases {
    const fn new() -> Self {
        Self { held: Vec::new() }
    }

    fn acquire<H: Heap>(&mut self, heap: &mut H, resource: Resource) -> Result<(), Error> {
        heap.alloc(resource)?;
        if self.held.push(resource).is_err() {
            warn!("lease table full, releasing {}", resource);
            heap.free(resource);
            return Err(Error::Alloc(resource));
        }
        Ok(())
    }

    /// Release in strict reverse-acquisition order.
    fn release_all<H: Heap>(&mut self, heap: &mut H) {
        while let Some(resource) = self.held.pop() {
            heap.free(resource);
        }
    }
}

/// Dispatcher callbacks: the scene manager plus the state it drives.
pub struct App {
    pub scenes: SceneManager<DisplayState>,
    pub state: DisplayState,
}

impl DispatchHandler for App {
    fn custom_event(&mut self, dispatcher: &mut ViewDispatcher, event: u32) -> bool {
        trace!("ds_detail_custom_event_callback");
        self.scenes
            .handle_custom_event(event, &mut self.state, dispatcher)
    }

    fn navigation_event(&mut self, dispatcher: &mut ViewDispatcher) -> bool {
        trace!("ds_detail_navigation_event_callback");
        self.scenes.handle_back_event(&mut self.state, dispatcher)
    }

    fn input_event(
        &mut self,
        dispatcher: &mut ViewDispatcher,
        view: ViewId,
        key: InputKey,
    ) -> bool {
        if view != VIEW_MENU {
            return false;
        }
        match self.state.menu.process_key(key) {
            MenuInput::Consumed => true,
            MenuInput::Ignored => false,
            MenuInput::Selected(index) => {
                if let Some(event) = main_scene::menu_item_selected(index) {
                    self.scenes
                        .handle_custom_event(event, &mut self.state, dispatcher);
                }
                true
            }
        }
    }

    fn draw<D>(&self, view: ViewId, canvas: &mut D)
    where
        D: DrawTarget<Color = BinaryColor>,
    {
        if view == VIEW_MENU {
            let _ = self.state.menu.draw(canvas);
        }
    }
}
