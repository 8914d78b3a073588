//! Widget geometry and hit-testing.
//!
//! One [`SliderLayout`] is computed per frame from the draw area and
//! the widget state; rendering and pointer hit-testing share it, so the
//! pixels drawn and the pixels clicked can never disagree.

use ratatui::layout::Rect;
use scrubline_core::SliderState;
use unicode_width::UnicodeWidthStr;

/// Width of each prev/next arrow cell, including padding.
const ARROW_WIDTH: u16 = 3;
/// Gap between an arrow and the slider surface.
const ARROW_GAP: u16 = 1;
/// Bounds for the uniform timeline column width.
const MIN_COLUMN_WIDTH: u16 = 10;
const MAX_COLUMN_WIDTH: u16 = 28;

/// What a pointer position lands on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hit {
    /// The previous-tick arrow.
    LeftArrow,
    /// The next-tick arrow.
    RightArrow,
    /// The slider tick row.
    Slider,
    /// The expand/collapse affordance.
    ExpandCollapse,
    /// A `?` marker on a timeline entry.
    InfoMarker { tick: usize, entry: usize },
    /// Somewhere else in the timeline panel.
    Timeline,
    /// Not on the widget.
    Outside,
}

/// Per-frame widget geometry.
#[derive(Debug, Clone, Copy)]
pub struct SliderLayout {
    /// The whole widget.
    pub widget: Rect,
    /// Previous-tick arrow cell.
    pub left_arrow: Rect,
    /// Next-tick arrow cell.
    pub right_arrow: Rect,
    /// The tick row between the arrows.
    pub slider: Rect,
    /// The expand/collapse line under the slider.
    pub expand_collapse: Rect,
    /// The timeline panel (zero-height while collapsed).
    pub timeline: Rect,
    num_ticks: usize,
    /// Uniform timeline column width.
    pub column_width: u16,
}

impl SliderLayout {
    /// Compute the layout for one frame.
    ///
    /// The widget is clamped to the configured width and centered in
    /// the draw area; the timeline panel takes zero height while
    /// collapsed (the zero max-height collapsed state).
    pub fn compute(area: Rect, state: &SliderState) -> Self {
        let width = area.width.min(state.config().width);
        let x = area.x + (area.width - width) / 2;

        let timeline_height = if state.is_timeline_visible() {
            // Borders, header row, then one row per entry.
            (3 + state.max_entries_per_tick() as u16).min(area.height.saturating_sub(2))
        } else {
            0
        };
        let total_height = (2 + timeline_height).min(area.height);
        let y = area.y + (area.height - total_height) / 2;

        let widget = Rect::new(x, y, width, total_height);

        let left_arrow = Rect::new(widget.x, widget.y, ARROW_WIDTH.min(width), 1);
        let right_arrow = Rect::new(
            widget.x + width.saturating_sub(ARROW_WIDTH),
            widget.y,
            ARROW_WIDTH.min(width),
            1,
        );
        let slider_x = widget.x + ARROW_WIDTH + ARROW_GAP;
        let slider_width = width.saturating_sub(2 * (ARROW_WIDTH + ARROW_GAP));
        let slider = Rect::new(slider_x, widget.y, slider_width, 1);

        let expand_collapse = Rect::new(widget.x, widget.y + 1, width, 1);

        let timeline = Rect::new(widget.x, widget.y + 2, width, timeline_height);

        Self {
            widget,
            left_arrow,
            right_arrow,
            slider,
            expand_collapse,
            timeline,
            num_ticks: state.num_ticks(),
            column_width: column_width(state),
        }
    }

    /// Map a pointer column to a tick index.
    ///
    /// `index = floor((x - slider_left) / (slider_width / num_ticks))`,
    /// so positions left of the slider go negative and positions past
    /// the right edge overshoot; the position model clamps both.
    pub fn tick_index_at(&self, x: u16) -> isize {
        if self.slider.width == 0 || self.num_ticks == 0 {
            return 0;
        }
        let rel = f64::from(x) - f64::from(self.slider.x);
        let width_per_tick = f64::from(self.slider.width) / self.num_ticks as f64;
        (rel / width_per_tick).floor() as isize
    }

    /// The horizontal cell span of a tick within the slider row.
    ///
    /// Returned as `(start, end)` absolute columns, end exclusive.
    /// Boundaries are the exact inverse of [`Self::tick_index_at`], so
    /// every rendered cell maps back to the tick that drew it.
    pub fn tick_span(&self, index: usize) -> (u16, u16) {
        let width = f64::from(self.slider.width);
        let n = self.num_ticks.max(1) as f64;
        let start = (index as f64 * width / n).ceil() as u16;
        let end = ((index as f64 + 1.0) * width / n).ceil() as u16;
        (self.slider.x + start, self.slider.x + end.min(self.slider.width))
    }

    /// The timeline panel interior (inside the border).
    pub fn timeline_inner(&self) -> Rect {
        if self.timeline.width < 2 || self.timeline.height < 2 {
            return Rect::new(self.timeline.x, self.timeline.y, 0, 0);
        }
        Rect::new(
            self.timeline.x + 1,
            self.timeline.y + 1,
            self.timeline.width - 2,
            self.timeline.height - 2,
        )
    }

    /// Total scrollable content width of the timeline.
    pub fn timeline_content_width(&self) -> u16 {
        let width = (self.num_ticks as u32).saturating_mul(u32::from(self.column_width));
        u16::try_from(width).unwrap_or(u16::MAX)
    }

    /// Largest useful scroll offset for the timeline.
    pub fn max_scroll(&self) -> u16 {
        self.timeline_content_width()
            .saturating_sub(self.timeline_inner().width)
    }

    /// Absolute screen column where a timeline column starts, given the
    /// current scroll offset. May be off-screen on either side.
    pub fn column_screen_x(&self, tick: usize, scroll_offset: u16) -> i32 {
        i32::from(self.timeline_inner().x) + tick as i32 * i32::from(self.column_width)
            - i32::from(scroll_offset)
    }

    /// Screen cell of the `?` marker for an entry, if it is on screen.
    pub fn marker_screen_pos(&self, tick: usize, entry: usize, scroll_offset: u16) -> Option<(u16, u16)> {
        let inner = self.timeline_inner();
        let col_x = self.column_screen_x(tick, scroll_offset);
        let marker_x = col_x + i32::from(self.column_width) - 2;
        let y = inner.y + 1 + entry as u16;
        if marker_x < i32::from(inner.x)
            || marker_x >= i32::from(inner.x + inner.width)
            || y >= inner.y + inner.height
        {
            return None;
        }
        Some((marker_x as u16, y))
    }

    /// Resolve what a pointer position lands on.
    pub fn hit_test(&self, x: u16, y: u16, state: &SliderState, scroll_offset: u16) -> Hit {
        let contains = |rect: Rect| -> bool {
            rect.width > 0
                && rect.height > 0
                && x >= rect.x
                && x < rect.x + rect.width
                && y >= rect.y
                && y < rect.y + rect.height
        };

        if contains(self.left_arrow) {
            return Hit::LeftArrow;
        }
        if contains(self.right_arrow) {
            return Hit::RightArrow;
        }
        if contains(self.slider) {
            return Hit::Slider;
        }
        if contains(self.expand_collapse) {
            return Hit::ExpandCollapse;
        }
        if contains(self.timeline) {
            let inner = self.timeline_inner();
            if contains(inner) {
                // A marker hit needs an exact cell match on an entry
                // that actually carries more-info text.
                let col = (u32::from(x - inner.x) + u32::from(scroll_offset))
                    / u32::from(self.column_width.max(1));
                let tick = col as usize;
                if tick < self.num_ticks && y > inner.y {
                    let entry = usize::from(y - inner.y - 1);
                    let entries = state.timeline_entries(tick);
                    if entries
                        .get(entry)
                        .is_some_and(|e| e.more_info_text.is_some())
                        && self.marker_screen_pos(tick, entry, scroll_offset)
                            == Some((x, y))
                    {
                        return Hit::InfoMarker { tick, entry };
                    }
                }
            }
            return Hit::Timeline;
        }
        Hit::Outside
    }
}

/// Uniform timeline column width for a widget: wide enough for the
/// longest header or summary (plus its marker), within sane bounds.
pub fn column_width(state: &SliderState) -> u16 {
    let mut widest = 0usize;
    for tick in 0..state.num_ticks() {
        widest = widest.max(state.tick_label(tick).width());
        for entry in state.timeline_entries(tick) {
            // Summary plus room for the trailing `?` marker.
            widest = widest.max(entry.summary_text.width() + 2);
        }
    }
    ((widest + 2) as u16).clamp(MIN_COLUMN_WIDTH, MAX_COLUMN_WIDTH)
}
