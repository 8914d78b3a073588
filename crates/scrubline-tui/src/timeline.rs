//! Timeline panel rendering.
//!
//! One column per tick: a header ("Round 1", ...) over that tick's
//! annotation entries. Columns carry the same past/active/future
//! classification as the slider ticks, and the panel is horizontally
//! scrolled by the snap-then-glide animator. Entries with more-info
//! text get a trailing `?` marker that the shell turns into a tooltip
//! on hover.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    widgets::{Block, Borders, Widget},
};
use scrubline_core::SliderState;

use crate::layout::SliderLayout;
use crate::theme::Theme;

/// The scrollable annotation panel under the slider.
pub struct TimelinePanel<'a> {
    state: &'a SliderState,
    theme: &'a Theme,
    layout: &'a SliderLayout,
    scroll_offset: u16,
}

impl<'a> TimelinePanel<'a> {
    /// Create a panel over precomputed geometry.
    pub fn new(
        state: &'a SliderState,
        theme: &'a Theme,
        layout: &'a SliderLayout,
        scroll_offset: u16,
    ) -> Self {
        Self {
            state,
            theme,
            layout,
            scroll_offset,
        }
    }

    /// Write `text` at a possibly off-screen x, clipping to `inner`.
    fn draw_clipped(buf: &mut Buffer, inner: Rect, x: i32, y: u16, text: &str, style: Style) {
        let mut cursor = x;
        for ch in text.chars() {
            let width = unicode_width::UnicodeWidthChar::width(ch).unwrap_or(0) as i32;
            if cursor >= i32::from(inner.x + inner.width) {
                break;
            }
            if cursor >= i32::from(inner.x) && width > 0 {
                buf.set_string(cursor as u16, y, ch.to_string(), style);
            }
            cursor += width;
        }
    }

    fn render_column(&self, tick: usize, inner: Rect, buf: &mut Buffer) {
        let col_x = self.layout.column_screen_x(tick, self.scroll_offset);
        let col_width = i32::from(self.layout.column_width);
        if col_x + col_width <= i32::from(inner.x) || col_x >= i32::from(inner.x + inner.width) {
            return;
        }

        let phase = self.state.phase_of(tick);
        let content_width = usize::from(self.layout.column_width.saturating_sub(2));

        let header = self.state.tick_label(tick);
        Self::draw_clipped(
            buf,
            inner,
            col_x,
            inner.y,
            &truncate(&header, content_width),
            self.theme.column_header_style(phase),
        );

        for (row, entry) in self.state.timeline_entries(tick).iter().enumerate() {
            let y = inner.y + 1 + row as u16;
            if y >= inner.y + inner.height {
                break;
            }
            let style = self.theme.entry_style(entry.class_name.as_deref(), phase);
            Self::draw_clipped(
                buf,
                inner,
                col_x,
                y,
                &truncate(&entry.summary_text, content_width),
                style,
            );

            if entry.more_info_text.is_some() {
                if let Some((x, y)) = self.layout.marker_screen_pos(tick, row, self.scroll_offset)
                {
                    buf.set_string(x, y, "?", Style::default().fg(self.theme.info));
                }
            }
        }
    }
}

impl Widget for TimelinePanel<'_> {
    fn render(self, _area: Rect, buf: &mut Buffer) {
        let panel = self.layout.timeline;
        if panel.height == 0 || panel.width == 0 {
            return;
        }

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.theme.border))
            .style(Style::default().bg(self.theme.base));
        block.render(panel, buf);

        let inner = self.layout.timeline_inner();
        if inner.width == 0 || inner.height == 0 {
            return;
        }

        for tick in 0..self.state.num_ticks() {
            self.render_column(tick, inner, buf);
        }
    }
}

/// Truncate a string to `max_width` cells, adding an ellipsis if needed.
fn truncate(text: &str, max_width: usize) -> String {
    use unicode_width::UnicodeWidthStr;
    if text.width() <= max_width {
        return text.to_string();
    }
    let mut out = String::new();
    let mut used = 0usize;
    for ch in text.chars() {
        let w = unicode_width::UnicodeWidthChar::width(ch).unwrap_or(0);
        if used + w + 1 > max_width {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push('\u{2026}'); // …
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::buffer_row;
    use scrubline_core::{SliderConfig, TimelineEntry};

    fn entries(summaries: &[&str]) -> Vec<TimelineEntry> {
        summaries
            .iter()
            .map(|s| TimelineEntry::new(*s))
            .collect()
    }

    fn visible_state(num_ticks: usize) -> SliderState {
        let mut config = SliderConfig::new(num_ticks);
        config.width = 60;
        config.timeline_data = Some(vec![
            entries(&["Event 1, tick 1", "Event 2, tick 1"]),
            vec![TimelineEntry::new("Event 1, tick 2").with_class("some-class")],
            Vec::new(),
            vec![TimelineEntry::new("Event 1, tick 4")
                .with_more_info("a long description")],
        ]);
        let mut state = SliderState::new(config, None).unwrap();
        state.set_index(num_ticks as isize - 1);
        state.set_timeline_visible(true);
        state
    }

    fn render(state: &SliderState, scroll_offset: u16) -> (Buffer, SliderLayout) {
        let area = Rect::new(0, 0, 60, 12);
        let layout = SliderLayout::compute(area, state);
        let mut buf = Buffer::empty(area);
        TimelinePanel::new(state, &Theme::mocha(), &layout, scroll_offset).render(area, &mut buf);
        (buf, layout)
    }

    #[test]
    fn test_headers_and_entries_render() {
        let state = visible_state(4);
        let (buf, layout) = render(&state, 0);
        let inner = layout.timeline_inner();

        let header_row = buffer_row(&buf, inner.y);
        assert!(header_row.contains("Round 1"));
        assert!(header_row.contains("Round 2"));

        let first_entries = buffer_row(&buf, inner.y + 1);
        assert!(first_entries.contains("Event 1, tick 1"));

        let second_entries = buffer_row(&buf, inner.y + 2);
        assert!(second_entries.contains("Event 2, tick 1"));
    }

    #[test]
    fn test_custom_label_prefix() {
        let mut config = SliderConfig::new(3);
        config.width = 60;
        config.tick_label_prefix = "Year ".into();
        let mut state = SliderState::new(config, None).unwrap();
        state.set_index(0);
        state.set_timeline_visible(true);

        let (buf, layout) = render(&state, 0);
        let header_row = buffer_row(&buf, layout.timeline_inner().y);
        assert!(header_row.contains("Year 1"));
        assert!(header_row.contains("Year 2"));
    }

    #[test]
    fn test_info_marker_rendered() {
        let state = visible_state(4);
        // Scroll tick 3 into view.
        let offset = layout_offset_for_tick(&state, 3);
        let (buf, layout) = render(&state, offset);

        let (x, y) = layout.marker_screen_pos(3, 0, offset).unwrap();
        assert_eq!(buf[(x, y)].symbol(), "?");
    }

    fn layout_offset_for_tick(state: &SliderState, tick: usize) -> u16 {
        let area = Rect::new(0, 0, 60, 12);
        let layout = SliderLayout::compute(area, state);
        let col_end = (tick as u32 + 1) * u32::from(layout.column_width);
        u16::try_from(col_end)
            .unwrap_or(u16::MAX)
            .saturating_sub(layout.timeline_inner().width)
            .min(layout.max_scroll())
    }

    #[test]
    fn test_scrolled_first_column_clipped() {
        let state = visible_state(4);
        let (unscrolled, layout) = render(&state, 0);
        let inner = layout.timeline_inner();
        assert!(buffer_row(&unscrolled, inner.y).contains("Round 1"));

        // Scrolling a full column width pushes "Round 1" off screen.
        let (scrolled, layout) = render(&state, layout.column_width);
        let inner = layout.timeline_inner();
        let header_row = buffer_row(&scrolled, inner.y);
        assert!(!header_row.contains("Round 1 "));
        assert!(header_row.contains("Round 2"));
    }

    #[test]
    fn test_empty_tick_renders_header_only() {
        let state = visible_state(4);
        let (buf, layout) = render(&state, 0);
        let inner = layout.timeline_inner();

        // Tick 3 (index 2) has no entries; its column shows just the
        // header.
        let col_x = layout.column_screen_x(2, 0);
        assert!(col_x >= 0);
        let header_row = buffer_row(&buf, inner.y);
        assert!(header_row.contains("Round 3"));
    }

    #[test]
    fn test_truncate_adds_ellipsis() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("a very long summary", 8), "a very \u{2026}");
    }
}
