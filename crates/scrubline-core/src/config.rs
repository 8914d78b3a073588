//! Configuration types for the scrubline widget.
//!
//! This module defines the configuration schema for a slider/timeline
//! widget, including per-tick options, timeline annotation data, and
//! animation settings.

use serde::{Deserialize, Serialize};
use std::path::Path;

/// An option that is either a single value broadcast to every tick or
/// an explicit per-tick list.
///
/// Per-tick lists must have length `num_ticks`, checked by
/// [`SliderConfig::validate`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TickValue<T> {
    /// One value shared by every tick.
    Uniform(T),
    /// One value per tick.
    PerTick(Vec<T>),
}

impl<T> TickValue<T> {
    /// Get the value for a tick.
    ///
    /// For per-tick lists the index must be in range; validated configs
    /// guarantee this for indices below `num_ticks`.
    pub fn get(&self, index: usize) -> &T {
        match self {
            Self::Uniform(value) => value,
            Self::PerTick(values) => &values[index],
        }
    }

    /// Length of the per-tick list, or `None` for a broadcast value.
    fn per_tick_len(&self) -> Option<usize> {
        match self {
            Self::Uniform(_) => None,
            Self::PerTick(values) => Some(values.len()),
        }
    }
}

/// One annotation shown in a tick's timeline column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineEntry {
    /// Short text shown in the column. Required, must be non-empty.
    pub summary_text: String,

    /// Optional style class for the entry (e.g. `timeline-info-good`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub class_name: Option<String>,

    /// Optional longer text shown as a tooltip behind a `?` marker.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub more_info_text: Option<String>,
}

impl TimelineEntry {
    /// Create an entry with just a summary.
    pub fn new(summary_text: impl Into<String>) -> Self {
        Self {
            summary_text: summary_text.into(),
            class_name: None,
            more_info_text: None,
        }
    }

    /// Set the style class.
    #[must_use]
    pub fn with_class(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = Some(class_name.into());
        self
    }

    /// Set the tooltip text.
    #[must_use]
    pub fn with_more_info(mut self, more_info_text: impl Into<String>) -> Self {
        self.more_info_text = Some(more_info_text.into());
        self
    }
}

/// Configuration for one slider/timeline widget.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SliderConfig {
    /// Total number of ticks. Required, must be greater than zero.
    pub num_ticks: usize,

    /// Maximum widget width in terminal columns. Accepts a number or a
    /// numeric string (a trailing `px`/`ch` unit is tolerated).
    #[serde(default = "default_width", deserialize_with = "deserialize_width")]
    pub width: u16,

    /// Prefix for per-tick labels ("Round " yields "Round 1", ...).
    #[serde(default = "default_tick_label_prefix")]
    pub tick_label_prefix: String,

    /// Whether the timeline panel starts collapsed.
    #[serde(default = "default_true")]
    pub hide_timeline_initially: bool,

    /// Text shown on each tick: broadcast string or per-tick list.
    #[serde(default = "default_tick_text")]
    pub tick_text: TickValue<String>,

    /// Tick color: broadcast value or per-tick list. Resolved leniently
    /// at render time; only per-tick length is validated here.
    #[serde(default = "default_tick_color")]
    pub tick_color: TickValue<String>,

    /// Per-tick annotation lists. `None` synthesizes placeholder data.
    #[serde(default)]
    pub timeline_data: Option<Vec<Vec<TimelineEntry>>>,

    /// Run the front-to-back animation once after creation.
    #[serde(default)]
    pub animate_on_load: bool,

    /// Force the timeline visible for the duration of an animation.
    #[serde(default = "default_true")]
    pub timeline_peeking: bool,

    /// Suppress the active tick's own label, leaving a gap at the
    /// pointer.
    #[serde(default = "default_true")]
    pub hide_active_tick_text: bool,

    /// Delay between animation steps. `None` derives
    /// `max(1000 / num_ticks, 100)` milliseconds.
    #[serde(default)]
    pub time_between_steps_ms: Option<u64>,
}

fn default_width() -> u16 {
    600
}

fn default_tick_label_prefix() -> String {
    "Round ".into()
}

fn default_true() -> bool {
    true
}

fn default_tick_text() -> TickValue<String> {
    TickValue::Uniform("\u{2022}".into()) // •
}

fn default_tick_color() -> TickValue<String> {
    TickValue::Uniform("orangered".into())
}

/// Parse a width given as a number or a numeric string with an optional
/// `px`/`ch` suffix.
pub fn parse_width(text: &str) -> Result<u16, ConfigError> {
    let digits = text
        .trim()
        .trim_end_matches("px")
        .trim_end_matches("ch")
        .trim();
    digits
        .parse::<u16>()
        .map_err(|_| ConfigError::InvalidWidth(text.to_string()))
}

fn deserialize_width<'de, D>(deserializer: D) -> Result<u16, D::Error>
where
    D: serde::Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawWidth {
        Number(u64),
        Text(String),
    }

    match RawWidth::deserialize(deserializer)? {
        RawWidth::Number(n) => Ok(u16::try_from(n).unwrap_or(u16::MAX)),
        RawWidth::Text(s) => parse_width(&s).map_err(serde::de::Error::custom),
    }
}

impl SliderConfig {
    /// Create a configuration with defaults for everything but the tick
    /// count.
    pub fn new(num_ticks: usize) -> Self {
        Self {
            num_ticks,
            width: default_width(),
            tick_label_prefix: default_tick_label_prefix(),
            hide_timeline_initially: true,
            tick_text: default_tick_text(),
            tick_color: default_tick_color(),
            timeline_data: None,
            animate_on_load: false,
            timeline_peeking: true,
            hide_active_tick_text: true,
            time_between_steps_ms: None,
        }
    }

    /// Load a configuration from a JSON file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::Io)?;
        let config: Self = serde_json::from_str(&content).map_err(ConfigError::Parse)?;
        config.validate()?;
        Ok(config)
    }

    /// Save a configuration to a JSON file.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let content = serde_json::to_string_pretty(self).map_err(ConfigError::Serialize)?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(ConfigError::Io)?;
        }
        std::fs::write(path, content).map_err(ConfigError::Io)
    }

    /// Check construction-time invariants.
    ///
    /// Fails fast with a descriptive error on a zero tick count, a
    /// per-tick list of the wrong length, a timeline of the wrong
    /// length, or an entry with an empty summary.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.num_ticks == 0 {
            return Err(ConfigError::InvalidTickCount);
        }

        if let Some(actual) = self.tick_text.per_tick_len() {
            if actual != self.num_ticks {
                return Err(ConfigError::PerTickLengthMismatch {
                    field: "tick_text",
                    expected: self.num_ticks,
                    actual,
                });
            }
        }

        if let Some(actual) = self.tick_color.per_tick_len() {
            if actual != self.num_ticks {
                return Err(ConfigError::PerTickLengthMismatch {
                    field: "tick_color",
                    expected: self.num_ticks,
                    actual,
                });
            }
        }

        if let Some(timeline_data) = &self.timeline_data {
            if timeline_data.len() != self.num_ticks {
                return Err(ConfigError::TimelineLengthMismatch {
                    expected: self.num_ticks,
                    actual: timeline_data.len(),
                });
            }
            for (tick, entries) in timeline_data.iter().enumerate() {
                for (entry, datum) in entries.iter().enumerate() {
                    if datum.summary_text.is_empty() {
                        return Err(ConfigError::MissingSummaryText { tick, entry });
                    }
                }
            }
        }

        Ok(())
    }

    /// Delay between animation steps.
    ///
    /// Defaults to `max(1000 / num_ticks, 100)` milliseconds when not
    /// configured explicitly.
    pub fn step_interval(&self) -> std::time::Duration {
        let millis = self
            .time_between_steps_ms
            .unwrap_or_else(|| (1000 / self.num_ticks as u64).max(100));
        std::time::Duration::from_millis(millis)
    }
}

/// Load per-tick timeline data from a standalone JSON file.
pub fn load_timeline_data(path: &Path) -> Result<Vec<Vec<TimelineEntry>>, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(ConfigError::Io)?;
    serde_json::from_str(&content).map_err(ConfigError::Parse)
}

/// Errors raised while constructing or loading a widget configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Tick count missing or zero.
    #[error("num_ticks is required and must be greater than zero")]
    InvalidTickCount,

    /// A per-tick option list has the wrong length.
    #[error("{field} must be a single value or a list of length num_ticks ({expected}), got {actual}")]
    PerTickLengthMismatch {
        field: &'static str,
        expected: usize,
        actual: usize,
    },

    /// `timeline_data` has the wrong length.
    #[error("timeline_data length must equal num_ticks ({expected}), got {actual}")]
    TimelineLengthMismatch { expected: usize, actual: usize },

    /// A timeline entry has no summary text.
    #[error("timeline entry {entry} for tick {tick} must have a summary")]
    MissingSummaryText { tick: usize, entry: usize },

    /// A width string could not be parsed.
    #[error("width must be a number or a numeric string, got {0:?}")]
    InvalidWidth(String),

    /// A widget is already mounted under this id.
    #[error("a slider is already mounted for id {0:?}")]
    DuplicateSlider(String),

    /// I/O error reading or writing a config file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Error parsing config JSON.
    #[error("Parse error: {0}")]
    Parse(#[source] serde_json::Error),

    /// Error serializing config to JSON.
    #[error("Serialize error: {0}")]
    Serialize(#[source] serde_json::Error),
}
