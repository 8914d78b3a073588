//! Per-widget state and the position model.
//!
//! [`SliderState`] holds everything one mounted widget knows: the
//! validated configuration, the current index, timeline visibility, and
//! the animation record. All position changes route through
//! [`SliderState::set_index`], whatever their source (drag, arrows,
//! animation, programmatic move).

use crate::animation::AnimationState;
use crate::config::{ConfigError, SliderConfig, TimelineEntry};
use crate::demo::placeholder_timeline;

/// Three-way classification of a tick relative to the current index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickPhase {
    /// Before the current index.
    Past,
    /// At the current index.
    Active,
    /// After the current index.
    Future,
}

/// Result of a `set_index` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetOutcome {
    /// The index moved; visuals and the change notification follow.
    Changed,
    /// The clamped value equals the current index; nothing happened.
    Unchanged,
}

/// Callback invoked with the new index after a settled change.
pub type ChangeCallback = Box<dyn FnMut(usize) + Send>;

/// State for one mounted slider/timeline widget.
pub struct SliderState {
    pub(crate) config: SliderConfig,
    timeline_data: Vec<Vec<TimelineEntry>>,
    current_index: Option<usize>,
    is_timeline_visible: bool,
    /// Cooperative cancellation flag: set by the animation sequencer,
    /// cleared by any drag-originated position change.
    pub(crate) is_animation_in_progress: bool,
    pub(crate) animation: AnimationState,
    /// Last value set since the previous flush. Bursts of `set_index`
    /// calls within one frame coalesce into one notification.
    pending_change: Option<usize>,
    on_change: Option<ChangeCallback>,
}

impl SliderState {
    /// Validate a configuration and build the initial state.
    ///
    /// The slider starts with no position; the registry parks it at the
    /// last tick as part of widget creation.
    pub fn new(
        config: SliderConfig,
        on_change: Option<ChangeCallback>,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        let timeline_data = match config.timeline_data.clone() {
            Some(data) => data,
            None => placeholder_timeline(config.num_ticks),
        };
        Ok(Self {
            config,
            timeline_data,
            current_index: None,
            is_timeline_visible: false,
            is_animation_in_progress: false,
            animation: AnimationState::Idle,
            pending_change: None,
            on_change,
        })
    }

    /// Total number of ticks.
    pub fn num_ticks(&self) -> usize {
        self.config.num_ticks
    }

    /// The current index, if the slider has been positioned.
    pub fn current_index(&self) -> Option<usize> {
        self.current_index
    }

    /// Whether the timeline panel is expanded.
    pub fn is_timeline_visible(&self) -> bool {
        self.is_timeline_visible
    }

    /// Whether an animation run is in progress.
    pub fn is_animating(&self) -> bool {
        self.is_animation_in_progress
    }

    /// The widget configuration.
    pub fn config(&self) -> &SliderConfig {
        &self.config
    }

    /// Move the slider, clamping the request into range.
    ///
    /// Setting the value already current is a no-op: no visual update
    /// and no change notification, so continuous drags do not churn.
    pub fn set_index(&mut self, requested: isize) -> SetOutcome {
        let max = self.config.num_ticks as isize - 1;
        let clamped = requested.clamp(0, max) as usize;

        if self.current_index == Some(clamped) {
            return SetOutcome::Unchanged;
        }

        tracing::debug!(from = ?self.current_index, to = clamped, "slider moved");
        self.current_index = Some(clamped);
        self.pending_change = Some(clamped);
        SetOutcome::Changed
    }

    /// Deliver the coalesced change notification, if any.
    ///
    /// Called once per frame tick. Rapid `set_index` bursts between
    /// flushes produce a single callback carrying the last settled
    /// value; per-call delivery is deliberately not guaranteed.
    pub fn flush_change_notification(&mut self) {
        if let Some(value) = self.pending_change.take() {
            if let Some(on_change) = &mut self.on_change {
                on_change(value);
            }
        }
    }

    /// Show or hide the timeline panel.
    pub fn set_timeline_visible(&mut self, visible: bool) {
        self.is_timeline_visible = visible;
    }

    /// Classify a tick relative to the current index.
    pub fn phase_of(&self, index: usize) -> TickPhase {
        match self.current_index {
            Some(current) if index < current => TickPhase::Past,
            Some(current) if index == current => TickPhase::Active,
            _ => TickPhase::Future,
        }
    }

    /// Whether the previous-tick control is enabled.
    pub fn can_step_back(&self) -> bool {
        self.current_index.is_some_and(|i| i > 0)
    }

    /// Whether the next-tick control is enabled.
    pub fn can_step_forward(&self) -> bool {
        self.current_index
            .is_some_and(|i| i + 1 < self.config.num_ticks)
    }

    /// The configured text for a tick.
    pub fn tick_text_for(&self, index: usize) -> &str {
        self.config.tick_text.get(index)
    }

    /// The text a tick actually renders.
    ///
    /// The active tick renders empty when `hide_active_tick_text` is
    /// set, leaving a visible gap at the pointer.
    pub fn visible_tick_text(&self, index: usize) -> &str {
        if self.config.hide_active_tick_text && self.phase_of(index) == TickPhase::Active {
            ""
        } else {
            self.tick_text_for(index)
        }
    }

    /// The configured color name for a tick.
    pub fn tick_color_for(&self, index: usize) -> &str {
        self.config.tick_color.get(index)
    }

    /// The label for a tick's timeline column ("Round 1", ...).
    pub fn tick_label(&self, index: usize) -> String {
        format!("{}{}", self.config.tick_label_prefix, index + 1)
    }

    /// The annotation entries for a tick.
    pub fn timeline_entries(&self, index: usize) -> &[TimelineEntry] {
        &self.timeline_data[index]
    }

    /// The largest entry count across all ticks (sizes the panel).
    pub fn max_entries_per_tick(&self) -> usize {
        self.timeline_data
            .iter()
            .map(Vec::len)
            .max()
            .unwrap_or(0)
    }
}
