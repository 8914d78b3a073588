//! Transient hover tooltip.
//!
//! At most one tooltip exists at a time: the shell keeps an
//! `Option<Tooltip>`, set on hover-enter over a `?` marker and cleared
//! on hover-exit. Rendered last so it overlays the panel.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    widgets::{Block, Borders, Clear, Widget},
};
use unicode_width::UnicodeWidthStr;

use crate::theme::Theme;

/// Maximum tooltip body width in cells, before borders.
const MAX_BODY_WIDTH: usize = 36;

/// A tooltip anchored to a screen cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tooltip {
    /// Body text; wrapped at render time.
    pub text: String,
    /// Cell the pointer is over.
    pub anchor_x: u16,
    /// Cell the pointer is over.
    pub anchor_y: u16,
}

impl Tooltip {
    /// Create a tooltip anchored at a cell.
    pub fn new(text: impl Into<String>, anchor_x: u16, anchor_y: u16) -> Self {
        Self {
            text: text.into(),
            anchor_x,
            anchor_y,
        }
    }

    /// Render the tooltip near its anchor, kept inside `area`.
    pub fn render(&self, area: Rect, theme: &Theme, buf: &mut Buffer) {
        if area.width < 6 || area.height < 3 {
            return;
        }

        let body_width = MAX_BODY_WIDTH.min(usize::from(area.width) - 4);
        let lines = textwrap::wrap(&self.text, body_width);
        let content_width = lines
            .iter()
            .map(|line| line.width())
            .max()
            .unwrap_or(1)
            .max(1);

        let width = (content_width as u16 + 2).min(area.width);
        let height = (lines.len() as u16 + 2).min(area.height);

        // Prefer above-right of the anchor, clamped into the area.
        let x = (self.anchor_x + 1).min(area.x + area.width - width);
        let y = if self.anchor_y >= area.y + height {
            self.anchor_y - height
        } else {
            self.anchor_y + 1
        }
        .min(area.y + area.height - height);

        let rect = Rect::new(x, y, width, height);
        Clear.render(rect, buf);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.border))
            .style(Style::default().bg(theme.surface));
        let inner = block.inner(rect);
        block.render(rect, buf);

        for (row, line) in lines.iter().enumerate() {
            let y = inner.y + row as u16;
            if y >= inner.y + inner.height {
                break;
            }
            buf.set_stringn(
                inner.x,
                y,
                line.as_ref(),
                usize::from(inner.width),
                Style::default().fg(theme.text).bg(theme.surface),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::buffer_row;

    #[test]
    fn test_renders_wrapped_text_near_anchor() {
        let area = Rect::new(0, 0, 40, 10);
        let mut buf = Buffer::empty(area);
        let tooltip = Tooltip::new("a long description", 10, 6);
        tooltip.render(area, &Theme::mocha(), &mut buf);

        let body: String = (0..10).map(|y| buffer_row(&buf, y)).collect();
        assert!(body.contains("a long description"));
    }

    #[test]
    fn test_clamped_inside_area() {
        let area = Rect::new(0, 0, 30, 6);
        let mut buf = Buffer::empty(area);
        // Anchor in the far corner; the tooltip must stay in bounds
        // (rendering out of bounds would panic the buffer writes).
        let tooltip = Tooltip::new(
            "As if millions of voices suddenly cried out in terror",
            29,
            0,
        );
        tooltip.render(area, &Theme::mocha(), &mut buf);
    }

    #[test]
    fn test_tiny_area_skipped() {
        let area = Rect::new(0, 0, 4, 2);
        let mut buf = Buffer::empty(area);
        Tooltip::new("hi", 0, 0).render(area, &Theme::mocha(), &mut buf);
        assert_eq!(buffer_row(&buf, 0).trim(), "");
    }
}
