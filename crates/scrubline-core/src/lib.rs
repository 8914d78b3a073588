//! scrubline-core: Headless engine for the slider/timeline widget
//!
//! This crate provides everything about the widget that does not touch
//! a terminal:
//! - Configuration schema and fail-fast validation
//! - The position model (clamped index, coalesced change notification)
//! - The front-to-back animation sequencer with cooperative cancellation
//! - The widget registry with explicit create/lookup/dispose and the
//!   per-interaction drag session
//! - Placeholder timeline content for demos

pub mod animation;
pub mod config;
pub mod demo;
pub mod registry;
pub mod state;

// Re-export commonly used types
pub use animation::{Completion, CompletionCallback};
pub use config::{
    load_timeline_data, parse_width, ConfigError, SliderConfig, TickValue, TimelineEntry,
};
pub use demo::placeholder_timeline;
pub use registry::{RegistryError, SliderRegistry};
pub use state::{ChangeCallback, SetOutcome, SliderState, TickPhase};

/// Returns the engine version.
pub fn engine_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_engine_version() {
        let version = engine_version();
        assert!(!version.is_empty());
        assert!(version.starts_with("0."));
    }
}
