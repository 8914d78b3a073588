//! Shared helpers for rendering tests.

use ratatui::buffer::Buffer;

/// Collect one buffer row into a plain string of symbols.
pub fn buffer_row(buf: &Buffer, y: u16) -> String {
    let area = buf.area;
    (area.x..area.x + area.width)
        .map(|x| buf[(x, y)].symbol())
        .collect()
}

/// Render a whole buffer as newline-joined rows.
pub fn buffer_to_string(buf: &Buffer) -> String {
    let area = buf.area;
    (area.y..area.y + area.height)
        .map(|y| buffer_row(buf, y))
        .collect::<Vec<_>>()
        .join("\n")
}
