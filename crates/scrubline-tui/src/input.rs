//! Pointer input normalization.
//!
//! crossterm's mouse events are converted into an explicit tagged
//! union before any widget logic sees them. Downstream code matches on
//! the variant; it never inspects event shapes or button state itself.

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

/// A normalized pointer event, in screen cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerEvent {
    /// Primary button pressed.
    Press { x: u16, y: u16 },
    /// Pointer moved with the primary button held (a drag).
    Move { x: u16, y: u16 },
    /// Primary button released.
    Release,
    /// Pointer moved with no button held.
    Hover { x: u16, y: u16 },
}

/// Normalize a crossterm mouse event.
///
/// Non-primary buttons and scroll wheels are ignored here; the shell
/// has no use for them.
pub fn normalize_mouse(event: MouseEvent) -> Option<PointerEvent> {
    let (x, y) = (event.column, event.row);
    match event.kind {
        MouseEventKind::Down(MouseButton::Left) => Some(PointerEvent::Press { x, y }),
        MouseEventKind::Drag(MouseButton::Left) => Some(PointerEvent::Move { x, y }),
        MouseEventKind::Up(MouseButton::Left) => Some(PointerEvent::Release),
        MouseEventKind::Moved => Some(PointerEvent::Hover { x, y }),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn test_primary_button_maps_to_drag_session_events() {
        assert_eq!(
            normalize_mouse(mouse(MouseEventKind::Down(MouseButton::Left), 3, 7)),
            Some(PointerEvent::Press { x: 3, y: 7 })
        );
        assert_eq!(
            normalize_mouse(mouse(MouseEventKind::Drag(MouseButton::Left), 9, 7)),
            Some(PointerEvent::Move { x: 9, y: 7 })
        );
        assert_eq!(
            normalize_mouse(mouse(MouseEventKind::Up(MouseButton::Left), 9, 7)),
            Some(PointerEvent::Release)
        );
    }

    #[test]
    fn test_plain_movement_is_hover() {
        assert_eq!(
            normalize_mouse(mouse(MouseEventKind::Moved, 5, 2)),
            Some(PointerEvent::Hover { x: 5, y: 2 })
        );
    }

    #[test]
    fn test_other_buttons_ignored() {
        assert_eq!(
            normalize_mouse(mouse(MouseEventKind::Down(MouseButton::Right), 1, 1)),
            None
        );
        assert_eq!(
            normalize_mouse(mouse(MouseEventKind::ScrollUp, 1, 1)),
            None
        );
    }
}
