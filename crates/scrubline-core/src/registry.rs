//! Widget registry and public operations.
//!
//! [`SliderRegistry`] maps widget ids to live [`SliderState`]s and owns
//! the one in-progress drag session. It is an explicit object the host
//! constructs (tests can run several independent registries); nothing
//! here is process-global. Every by-id operation resolves the id
//! explicitly and reports a miss as [`RegistryError::UnknownSlider`].

use std::collections::HashMap;
use std::time::Instant;

use crate::animation::CompletionCallback;
use crate::config::{ConfigError, SliderConfig};
use crate::state::{ChangeCallback, SetOutcome, SliderState};

/// Errors raised by registry operations on mounted widgets.
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    /// No widget is mounted under the given id.
    #[error("no slider is mounted for id {0:?}")]
    UnknownSlider(String),
}

/// Registry of mounted slider/timeline widgets.
#[derive(Default)]
pub struct SliderRegistry {
    sliders: HashMap<String, SliderState>,
    /// Widget id of the in-progress drag session, if any. Scoped here
    /// so two widgets' drags can never be confused.
    active_drag: Option<String>,
}

impl SliderRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Mount a widget.
    ///
    /// Validates the configuration, parks the slider at the last tick,
    /// applies the initial visibility, and — when configured — resets
    /// to the first tick and starts the animate-on-load run. The
    /// initial parked position is notified before this returns;
    /// everything later is coalesced per frame tick.
    pub fn create(
        &mut self,
        id: &str,
        config: SliderConfig,
        on_change: Option<ChangeCallback>,
    ) -> Result<(), ConfigError> {
        if self.sliders.contains_key(id) {
            return Err(ConfigError::DuplicateSlider(id.to_string()));
        }

        let animate_on_load = config.animate_on_load;
        let start_hidden = config.hide_timeline_initially;
        let num_ticks = config.num_ticks;

        let mut state = SliderState::new(config, on_change)?;

        // Park at the end, and deliver the initial position: creation
        // counts as its own frame.
        state.set_index(num_ticks as isize - 1);
        state.flush_change_notification();

        state.set_timeline_visible(!start_hidden);

        if animate_on_load {
            state.set_index(0);
            state.start_animation(None);
        }

        tracing::debug!(id, num_ticks, "slider mounted");
        self.sliders.insert(id.to_string(), state);
        Ok(())
    }

    /// Number of mounted widgets.
    pub fn len(&self) -> usize {
        self.sliders.len()
    }

    /// Whether no widgets are mounted.
    pub fn is_empty(&self) -> bool {
        self.sliders.is_empty()
    }

    /// Look up a widget's state.
    pub fn get(&self, id: &str) -> Result<&SliderState, RegistryError> {
        self.sliders
            .get(id)
            .ok_or_else(|| RegistryError::UnknownSlider(id.to_string()))
    }

    /// Look up a widget's state mutably.
    pub fn get_mut(&mut self, id: &str) -> Result<&mut SliderState, RegistryError> {
        self.sliders
            .get_mut(id)
            .ok_or_else(|| RegistryError::UnknownSlider(id.to_string()))
    }

    /// Move a widget's slider. Clamps like any other position change.
    ///
    /// Does NOT cancel a running animation; only drags do.
    pub fn move_to(&mut self, id: &str, index: isize) -> Result<SetOutcome, RegistryError> {
        Ok(self.get_mut(id)?.set_index(index))
    }

    /// Start the front-to-back animation for a widget.
    ///
    /// Returns `Ok(false)` when a run is already in progress (at most
    /// one per widget).
    pub fn animate(
        &mut self,
        id: &str,
        on_complete: Option<CompletionCallback>,
    ) -> Result<bool, RegistryError> {
        Ok(self.get_mut(id)?.start_animation(on_complete))
    }

    /// Flip a widget's timeline visibility; returns the new state.
    pub fn toggle_visibility(&mut self, id: &str) -> Result<bool, RegistryError> {
        let state = self.get_mut(id)?;
        let visible = !state.is_timeline_visible();
        state.set_timeline_visible(visible);
        Ok(visible)
    }

    /// Unmount a widget, dropping its state and any drag session on it.
    pub fn dispose(&mut self, id: &str) -> Result<(), RegistryError> {
        if self.sliders.remove(id).is_none() {
            return Err(RegistryError::UnknownSlider(id.to_string()));
        }
        if self.active_drag.as_deref() == Some(id) {
            self.active_drag = None;
        }
        tracing::debug!(id, "slider disposed");
        Ok(())
    }

    /// Begin a drag session on a widget.
    pub fn begin_drag(&mut self, id: &str) -> Result<(), RegistryError> {
        // Resolve first so a miss cannot leave a dangling session.
        self.get(id)?;
        self.active_drag = Some(id.to_string());
        Ok(())
    }

    /// The widget currently being dragged, if any.
    pub fn drag_target(&self) -> Option<&str> {
        self.active_drag.as_deref()
    }

    /// Apply a drag position to the session's widget.
    ///
    /// Any drag application marks the user as having taken over: the
    /// animation-in-progress flag is cleared so a running sequence
    /// stops at its next scheduled step.
    pub fn drag_to(&mut self, index: isize) -> Option<SetOutcome> {
        let id = self.active_drag.clone()?;
        let state = self.sliders.get_mut(&id)?;
        let outcome = state.set_index(index);
        state.is_animation_in_progress = false;
        Some(outcome)
    }

    /// End the drag session. Safe to call when none is active.
    pub fn end_drag(&mut self) {
        self.active_drag = None;
    }

    /// Advance every widget one frame: animation steps first, then the
    /// coalesced change notifications.
    pub fn tick(&mut self, now: Instant) {
        for state in self.sliders.values_mut() {
            state.animation_tick(now);
            state.flush_change_notification();
        }
    }
}
