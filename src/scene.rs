//! Scene manager - a bounded stack of scene ids driven by handler tables.
//!
//! Each scene is three plain functions (enter / event / exit) indexed by
//! scene id. The manager owns no application data: the context `C` and the
//! view dispatcher are passed into every call, so handlers get exclusive
//! access to both without any shared ownership.

use heapless::Vec;

use crate::config::SCENE_STACK_DEPTH;
use crate::dispatcher::ViewDispatcher;
use crate::error::Error;

pub type SceneId = u32;

/// Events delivered to a scene's on-event handler.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SceneEvent {
    /// Application-defined event.
    Custom(u32),
    /// Back navigation; unconsumed it leaves the scene.
    Back,
}

pub type EnterHandler<C> = fn(&mut C, &mut ViewDispatcher);
pub type EventHandler<C> = fn(&mut C, &mut ViewDispatcher, SceneEvent) -> bool;
pub type ExitHandler<C> = fn(&mut C, &mut ViewDispatcher);

/// Handler tables, one entry per scene id.
pub struct SceneHandlers<C: 'static> {
    pub on_enter: &'static [EnterHandler<C>],
    pub on_event: &'static [EventHandler<C>],
    pub on_exit: &'static [ExitHandler<C>],
}

impl<C: 'static> SceneHandlers<C> {
    pub const fn scene_num(&self) -> usize {
        self.on_enter.len()
    }

    fn is_consistent(&self) -> bool {
        let n = self.scene_num();
        n > 0 && self.on_event.len() == n && self.on_exit.len() == n
    }
}

pub struct SceneManager<C: 'static> {
    handlers: &'static SceneHandlers<C>,
    stack: Vec<SceneId, SCENE_STACK_DEPTH>,
}

impl<C: 'static> SceneManager<C> {
    pub fn new(handlers: &'static SceneHandlers<C>) -> Result<Self, Error> {
        if !handlers.is_consistent() {
            return Err(Error::SceneTable);
        }
        Ok(Self {
            handlers,
            stack: Vec::new(),
        })
    }

    /// Scene on top of the stack.
    pub fn current_scene(&self) -> Option<SceneId> {
        self.stack.last().copied()
    }

    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// Leave the current scene (if any) and enter `id`.
    pub fn next_scene(&mut self, id: SceneId, ctx: &mut C, vd: &mut ViewDispatcher) {
        if id as usize >= self.handlers.scene_num() {
            warn!("Unknown scene {}", id);
            return;
        }
        if self.stack.is_full() {
            warn!("Scene stack full, not entering scene {}", id);
            return;
        }

        if let Some(current) = self.current_scene() {
            (self.handlers.on_exit[current as usize])(ctx, vd);
        }
        // Cannot fail: fullness checked above.
        let _ = self.stack.push(id);
        (self.handlers.on_enter[id as usize])(ctx, vd);
    }

    /// Deliver a custom event to the current scene.
    ///
    /// Returns whether the scene consumed it.
    pub fn handle_custom_event(
        &mut self,
        event: u32,
        ctx: &mut C,
        vd: &mut ViewDispatcher,
    ) -> bool {
        match self.current_scene() {
            Some(current) => {
                (self.handlers.on_event[current as usize])(ctx, vd, SceneEvent::Custom(event))
            }
            None => false,
        }
    }

    /// Offer Back to the current scene, falling back to [`Self::previous_scene`].
    ///
    /// `false` means the last scene was left and the application should stop.
    pub fn handle_back_event(&mut self, ctx: &mut C, vd: &mut ViewDispatcher) -> bool {
        let Some(current) = self.current_scene() else {
            return false;
        };
        if (self.handlers.on_event[current as usize])(ctx, vd, SceneEvent::Back) {
            return true;
        }
        self.previous_scene(ctx, vd)
    }

    /// Pop the current scene and re-enter the one below it.
    ///
    /// Popping the last scene runs its exit handler and returns `false`.
    pub fn previous_scene(&mut self, ctx: &mut C, vd: &mut ViewDispatcher) -> bool {
        let Some(current) = self.stack.pop() else {
            return false;
        };
        (self.handlers.on_exit[current as usize])(ctx, vd);

        match self.current_scene() {
            Some(previous) => {
                (self.handlers.on_enter[previous as usize])(ctx, vd);
                true
            }
            None => false,
        }
    }

    /// Exit the current scene and forget the whole stack.
    pub fn stop(&mut self, ctx: &mut C, vd: &mut ViewDispatcher) {
        if let Some(current) = self.current_scene() {
            (self.handlers.on_exit[current as usize])(ctx, vd);
        }
        self.stack.clear();
    }
}
