//! Slider row rendering: arrows, ticks, expand/collapse affordance.

use ratatui::{buffer::Buffer, layout::Rect, widgets::Widget};
use scrubline_core::SliderState;
use unicode_width::UnicodeWidthStr;

use crate::layout::SliderLayout;
use crate::theme::Theme;

/// Literal label shown while the timeline is expanded.
pub const COLLAPSE_LABEL: &str = "[\u{2014}] Collapse Details";
/// Literal label shown while the timeline is collapsed.
pub const EXPAND_LABEL: &str = "[+] Expand Details";

/// Glyphs for the prev/next controls.
const LEFT_ARROW: &str = "\u{2039}"; // ‹
const RIGHT_ARROW: &str = "\u{203a}"; // ›

/// The slider row and its surrounding controls.
pub struct SliderWidget<'a> {
    state: &'a SliderState,
    theme: &'a Theme,
    layout: &'a SliderLayout,
}

impl<'a> SliderWidget<'a> {
    /// Create a slider widget over precomputed geometry.
    pub fn new(state: &'a SliderState, theme: &'a Theme, layout: &'a SliderLayout) -> Self {
        Self {
            state,
            theme,
            layout,
        }
    }

    fn render_arrows(&self, buf: &mut Buffer) {
        let left = self.layout.left_arrow;
        if left.width > 0 {
            let style = self.theme.arrow_style(self.state.can_step_back());
            buf.set_string(left.x + left.width / 2, left.y, LEFT_ARROW, style);
        }

        let right = self.layout.right_arrow;
        if right.width > 0 {
            let style = self.theme.arrow_style(self.state.can_step_forward());
            buf.set_string(right.x + right.width / 2, right.y, RIGHT_ARROW, style);
        }
    }

    fn render_ticks(&self, buf: &mut Buffer) {
        let slider = self.layout.slider;
        if slider.width == 0 {
            return;
        }

        for tick in 0..self.state.num_ticks() {
            let (start, end) = self.layout.tick_span(tick);
            if end <= start {
                continue;
            }
            let span_width = usize::from(end - start);
            let phase = self.state.phase_of(tick);
            let style = self
                .theme
                .tick_style(phase, self.state.tick_color_for(tick));

            // Fill the span so the active tick's background (and the
            // gap left by suppressed text) is visible.
            buf.set_string(start, slider.y, " ".repeat(span_width), style);

            let text = self.state.visible_tick_text(tick);
            if !text.is_empty() {
                let text_width = text.width().min(span_width);
                let offset = (span_width - text_width) / 2;
                buf.set_stringn(
                    start + offset as u16,
                    slider.y,
                    text,
                    span_width - offset,
                    style,
                );
            }
        }
    }

    fn render_expand_collapse(&self, buf: &mut Buffer) {
        let row = self.layout.expand_collapse;
        if row.width == 0 {
            return;
        }
        let label = if self.state.is_timeline_visible() {
            COLLAPSE_LABEL
        } else {
            EXPAND_LABEL
        };
        let label_width = label.width().min(usize::from(row.width));
        let x = row.x + (row.width - label_width as u16) / 2;
        buf.set_stringn(
            x,
            row.y,
            label,
            usize::from(row.width),
            self.theme.expand_collapse_style(),
        );
    }
}

impl Widget for SliderWidget<'_> {
    fn render(self, _area: Rect, buf: &mut Buffer) {
        if self.layout.widget.width == 0 || self.layout.widget.height < 2 {
            return;
        }
        self.render_arrows(buf);
        self.render_ticks(buf);
        self.render_expand_collapse(buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::buffer_row;
    use ratatui::layout::Rect;
    use scrubline_core::{SliderConfig, TickValue};

    fn render(state: &SliderState) -> (Buffer, SliderLayout) {
        let area = Rect::new(0, 0, 38, 6);
        let layout = SliderLayout::compute(area, state);
        let mut buf = Buffer::empty(area);
        SliderWidget::new(state, &Theme::mocha(), &layout).render(area, &mut buf);
        (buf, layout)
    }

    fn positioned_state(mut config: SliderConfig, index: isize) -> SliderState {
        config.width = 38;
        let mut state = SliderState::new(config, None).unwrap();
        state.set_index(index);
        state
    }

    #[test]
    fn test_ticks_render_with_gap_at_active() {
        let mut config = SliderConfig::new(3);
        config.tick_text = TickValue::PerTick(vec!["one".into(), "two".into(), "three".into()]);
        let state = positioned_state(config, 2);
        let (buf, layout) = render(&state);

        let row = buffer_row(&buf, layout.slider.y);
        assert!(row.contains("one"));
        assert!(row.contains("two"));
        // The active tick's own label is suppressed.
        assert!(!row.contains("three"));
    }

    #[test]
    fn test_active_text_shown_when_suppression_disabled() {
        let mut config = SliderConfig::new(3);
        config.hide_active_tick_text = false;
        config.tick_text = TickValue::Uniform("ab".into());
        let state = positioned_state(config, 2);
        let (buf, layout) = render(&state);

        let row = buffer_row(&buf, layout.slider.y);
        assert_eq!(row.matches("ab").count(), 3);
    }

    #[test]
    fn test_expand_collapse_labels() {
        let state = positioned_state(SliderConfig::new(3), 0);
        let (buf, layout) = render(&state);
        assert!(buffer_row(&buf, layout.expand_collapse.y).contains(EXPAND_LABEL));

        let mut state = positioned_state(SliderConfig::new(3), 0);
        state.set_timeline_visible(true);
        let (buf, layout) = render(&state);
        assert!(buffer_row(&buf, layout.expand_collapse.y).contains(COLLAPSE_LABEL));
    }

    #[test]
    fn test_arrows_present_and_disabled_at_boundaries() {
        let theme = Theme::mocha();

        let state = positioned_state(SliderConfig::new(3), 0);
        let (buf, layout) = render(&state);
        let left_cell = &buf[(layout.left_arrow.x + 1, layout.left_arrow.y)];
        assert_eq!(left_cell.symbol(), LEFT_ARROW);
        // At the low boundary the previous arrow renders disabled.
        assert_eq!(left_cell.style().fg, theme.arrow_style(false).fg);
        let right_cell = &buf[(layout.right_arrow.x + 1, layout.right_arrow.y)];
        assert_eq!(right_cell.style().fg, theme.arrow_style(true).fg);

        let state = positioned_state(SliderConfig::new(3), 2);
        let (buf, layout) = render(&state);
        let right_cell = &buf[(layout.right_arrow.x + 1, layout.right_arrow.y)];
        assert_eq!(right_cell.style().fg, theme.arrow_style(false).fg);
    }

    #[test]
    fn test_phase_styles_applied() {
        let theme = Theme::mocha();
        let state = positioned_state(SliderConfig::new(3), 1);
        let (buf, layout) = render(&state);

        let (past_x, _) = layout.tick_span(0);
        let (active_x, _) = layout.tick_span(1);
        let (future_x, _) = layout.tick_span(2);

        let configured = state.tick_color_for(0);
        assert_eq!(
            buf[(past_x, layout.slider.y)].style().fg,
            Some(theme.resolve_color(configured))
        );
        // The active tick carries the surface background highlight.
        assert_eq!(
            buf[(active_x, layout.slider.y)].style().bg,
            Some(theme.surface)
        );
        assert_eq!(
            buf[(future_x, layout.slider.y)].style().fg,
            Some(theme.muted)
        );
    }
}
