//! Front-to-back animation sequencer.
//!
//! The sequencer walks the slider through every tick at a fixed
//! cadence. It is a tagged state machine advanced by a single tick
//! primitive rather than a chain of self-rescheduling callbacks: the
//! running record owns the step cursor, the step timestamp, and the
//! collapse-on-finish decision in one place.
//!
//! Cancellation is cooperative. A drag-originated position change
//! clears `is_animation_in_progress`; the sequencer polls that flag
//! before each step and stops without advancing further. Programmatic
//! moves and arrow steps do NOT cancel a run, only user drags do.

use std::time::Instant;

use crate::state::SliderState;

/// How an animation run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    /// The run stepped through every tick.
    Finished,
    /// The run was cancelled by a user takeover before the last tick.
    Interrupted,
}

impl Completion {
    /// Whether the run reached the final tick.
    pub fn is_finished(self) -> bool {
        self == Self::Finished
    }
}

/// Callback invoked once when an animation run ends, either way.
pub type CompletionCallback = Box<dyn FnOnce(Completion) + Send>;

/// One running animation.
pub(crate) struct AnimationRun {
    /// Index the next step will apply, 0 through `num_ticks - 1`.
    next_index: usize,
    /// When the previous step fired. `None` until the first step, which
    /// fires on the very next tick with no initial delay.
    step_started: Option<Instant>,
    /// Collapse the timeline after a normal completion (peeking).
    collapse_when_done: bool,
    on_complete: Option<CompletionCallback>,
}

/// Animation sequencer state for one widget.
pub(crate) enum AnimationState {
    Idle,
    Running(AnimationRun),
}

impl SliderState {
    /// Start a front-to-back animation run.
    ///
    /// Returns false without side effects when a run is already in
    /// progress: at most one animation per widget.
    ///
    /// When the widget is configured for peeking and the timeline is
    /// hidden, it is force-expanded for the duration of the run and
    /// collapsed again on normal completion only — an interrupted run
    /// leaves visibility wherever the user left it.
    pub fn start_animation(&mut self, on_complete: Option<CompletionCallback>) -> bool {
        if matches!(self.animation, AnimationState::Running(_)) {
            tracing::debug!("animation start rejected, already running");
            return false;
        }

        self.is_animation_in_progress = true;

        let mut collapse_when_done = false;
        if self.config.timeline_peeking && !self.is_timeline_visible() {
            collapse_when_done = true;
            self.set_timeline_visible(true);
        }

        self.animation = AnimationState::Running(AnimationRun {
            next_index: 0,
            step_started: None,
            collapse_when_done,
            on_complete,
        });
        true
    }

    /// Advance the sequencer. Called once per frame tick.
    ///
    /// Steps fire once `step_interval` has elapsed since the previous
    /// step, measured from tick timestamps. Between steps the event
    /// loop keeps running, which is where drags interleave and
    /// cancellation is observed.
    pub fn animation_tick(&mut self, now: Instant) {
        if matches!(self.animation, AnimationState::Idle) {
            return;
        }

        // Cancelled externally (drag takeover) since the last step:
        // stop without advancing and skip the collapse-on-finish.
        if !self.is_animation_in_progress {
            if let AnimationState::Running(run) =
                std::mem::replace(&mut self.animation, AnimationState::Idle)
            {
                tracing::debug!("animation interrupted by user takeover");
                if let Some(on_complete) = run.on_complete {
                    on_complete(Completion::Interrupted);
                }
            }
            return;
        }

        let num_ticks = self.config.num_ticks;
        let interval = self.config.step_interval();

        let (index, finished) = {
            let AnimationState::Running(run) = &mut self.animation else {
                return;
            };
            match run.step_started {
                Some(started) if now.duration_since(started) < interval => return,
                _ => {}
            }
            let index = run.next_index;
            run.next_index += 1;
            run.step_started = Some(now);
            (index, run.next_index >= num_ticks)
        };

        self.set_index(index as isize);

        if finished {
            self.is_animation_in_progress = false;
            if let AnimationState::Running(run) =
                std::mem::replace(&mut self.animation, AnimationState::Idle)
            {
                if run.collapse_when_done {
                    self.set_timeline_visible(false);
                }
                if let Some(on_complete) = run.on_complete {
                    on_complete(Completion::Finished);
                }
            }
        }
    }
}
