//! Color theme for the widget.
//!
//! Catppuccin Mocha by default, with a Latte light variant. Tick and
//! timeline-column styles are keyed by [`TickPhase`]; timeline entries
//! map their style class onto the semantic accents.

use std::str::FromStr;

use ratatui::style::{Color, Modifier, Style};
use scrubline_core::TickPhase;

/// Theme color palette.
#[derive(Debug, Clone)]
pub struct Theme {
    // Backgrounds
    pub base: Color,
    pub surface: Color,

    // Foregrounds
    pub text: Color,
    pub subtext: Color,
    pub muted: Color,

    // Accents
    pub primary: Color,

    // Semantic (timeline entry classes)
    pub good: Color,
    pub bad: Color,
    pub info: Color,

    // Borders
    pub border: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::mocha()
    }
}

impl Theme {
    /// Catppuccin Mocha theme (default dark theme).
    pub fn mocha() -> Self {
        Self {
            base: Color::Rgb(30, 30, 46),       // #1e1e2e
            surface: Color::Rgb(49, 50, 68),    // #313244
            text: Color::Rgb(205, 214, 244),    // #cdd6f4
            subtext: Color::Rgb(166, 173, 200), // #a6adc8
            muted: Color::Rgb(108, 112, 134),   // #6c7086
            primary: Color::Rgb(180, 190, 254), // #b4befe (lavender)
            good: Color::Rgb(166, 227, 161),    // #a6e3a1 (green)
            bad: Color::Rgb(243, 139, 168),     // #f38ba8 (red)
            info: Color::Rgb(137, 180, 250),    // #89b4fa (blue)
            border: Color::Rgb(69, 71, 90),     // #45475a
        }
    }

    /// Catppuccin Latte theme (light theme).
    pub fn latte() -> Self {
        Self {
            base: Color::Rgb(239, 241, 245),    // #eff1f5
            surface: Color::Rgb(230, 233, 239), // #e6e9ef
            text: Color::Rgb(76, 79, 105),      // #4c4f69
            subtext: Color::Rgb(92, 95, 119),   // #5c5f77
            muted: Color::Rgb(140, 143, 161),   // #8c8fa1
            primary: Color::Rgb(114, 135, 253), // #7287fd (lavender)
            good: Color::Rgb(64, 160, 43),      // #40a02b (green)
            bad: Color::Rgb(210, 15, 57),       // #d20f39 (red)
            info: Color::Rgb(30, 102, 245),     // #1e66f5 (blue)
            border: Color::Rgb(188, 192, 204),  // #bcc0cc
        }
    }

    /// Style for a tick given its phase and configured color.
    ///
    /// Past ticks keep their configured color, the active tick is
    /// emphasized, future ticks are dimmed.
    pub fn tick_style(&self, phase: TickPhase, configured: &str) -> Style {
        let color = self.resolve_color(configured);
        match phase {
            TickPhase::Past => Style::default().fg(color),
            TickPhase::Active => Style::default()
                .fg(color)
                .bg(self.surface)
                .add_modifier(Modifier::BOLD),
            TickPhase::Future => Style::default().fg(self.muted),
        }
    }

    /// Style for a timeline column header given its phase.
    pub fn column_header_style(&self, phase: TickPhase) -> Style {
        match phase {
            TickPhase::Past => Style::default().fg(self.subtext),
            TickPhase::Active => Style::default()
                .fg(self.primary)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            TickPhase::Future => Style::default().fg(self.muted),
        }
    }

    /// Style for a timeline entry, keyed by its style class.
    ///
    /// Entries in past/future columns are toned down to keep the
    /// active column visually dominant.
    pub fn entry_style(&self, class_name: Option<&str>, phase: TickPhase) -> Style {
        if phase != TickPhase::Active {
            return Style::default().fg(self.muted);
        }
        let color = match class_name {
            Some("timeline-info-good") => self.good,
            Some("timeline-info-bad") => self.bad,
            Some(_) => self.info,
            None => self.text,
        };
        Style::default().fg(color)
    }

    /// Style for a prev/next arrow control.
    pub fn arrow_style(&self, enabled: bool) -> Style {
        if enabled {
            Style::default().fg(self.primary)
        } else {
            Style::default().fg(self.muted)
        }
    }

    /// Style for the expand/collapse affordance.
    pub fn expand_collapse_style(&self) -> Style {
        Style::default().fg(self.subtext)
    }

    /// Resolve a configured color name to a terminal color.
    ///
    /// Accepts the names and hex forms ratatui understands, plus the
    /// widget's historical default name. Unknown names fall back to the
    /// primary accent rather than erroring.
    pub fn resolve_color(&self, name: &str) -> Color {
        if name.eq_ignore_ascii_case("orangered") {
            return Color::Rgb(255, 69, 0);
        }
        Color::from_str(name).unwrap_or(self.primary)
    }
}
