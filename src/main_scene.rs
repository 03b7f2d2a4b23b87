//! The stats menu scene.
//!
//! Entering fills the menu with the three formatted lines; leaving empties
//! it. Items are informational: selecting one raises the generic custom
//! event, which no scene consumes.

use crate::config::{GENERIC_EVENT, VIEW_MENU};
use crate::dispatcher::ViewDispatcher;
use crate::scene::{SceneEvent, SceneHandlers};
use crate::state::DisplayState;
use crate::ui::menu::MenuItem;

/// Handler table for the application's only scene (`SCENE_MAIN`).
pub static SCENE_HANDLERS: SceneHandlers<DisplayState> = SceneHandlers {
    on_enter: &[on_enter],
    on_event: &[on_event],
    on_exit: &[on_exit],
};

/// Menu item callback: the custom event to raise for `index`, if any.
pub fn menu_item_selected(index: u32) -> Option<u32> {
    trace!("ds_detail_menu_callback_main");

    match MenuItem::from_index(index) {
        Some(MenuItem::Icounter) => info!("Menu item icounter!"),
        Some(MenuItem::Butthurt) => info!("Menu item butthurt!"),
        Some(MenuItem::Level) => info!("Menu item level!"),
        None => {
            warn!("Unknown menu item!");
            return None;
        }
    }

    Some(GENERIC_EVENT)
}

fn on_enter(state: &mut DisplayState, vd: &mut ViewDispatcher) {
    trace!("ds_detail_scene_on_enter_main");

    state.menu.reset();
    for (item, label) in state.lines.entries() {
        if let Err(e) = state.menu.add_item(label, item.index()) {
            warn!("menu_add_item failed: {}", e);
        }
    }

    vd.switch_to_view(VIEW_MENU);
}

fn on_event(_state: &mut DisplayState, _vd: &mut ViewDispatcher, event: SceneEvent) -> bool {
    trace!("ds_detail_scene_on_event_main: {}", event);
    false
}

fn on_exit(state: &mut DisplayState, _vd: &mut ViewDispatcher) {
    trace!("ds_detail_scene_on_exit_main");
    state.menu.reset();
}
