//! Timeline scroll with snap-then-glide behavior.
//!
//! When the active column changes, two distinct scroll requests are
//! issued: an immediate clamp that makes the column minimally visible,
//! then a smoothed glide toward center. The snap keeps far jumps from
//! turning into one long smooth scroll; the glide settles the column in
//! the middle of the viewport over the following frames.

/// Scroll animator for the timeline panel.
///
/// Offsets are in cells from the content's left edge. `offset` is what
/// the panel renders; `target` is where the glide is heading.
#[derive(Debug, Clone)]
pub struct TimelineScroll {
    offset: f64,
    target: f64,
    /// Ease-out factor per tick: `offset += (target - offset) * speed`.
    speed: f64,
}

impl Default for TimelineScroll {
    fn default() -> Self {
        Self::new(0.35)
    }
}

impl TimelineScroll {
    /// Create an animator with the given per-tick ease-out factor.
    pub fn new(speed: f64) -> Self {
        Self {
            offset: 0.0,
            target: 0.0,
            speed: speed.clamp(0.05, 0.95),
        }
    }

    /// The offset the panel should render at, in whole cells.
    pub fn offset_cells(&self) -> u16 {
        self.offset.round().clamp(0.0, f64::from(u16::MAX)) as u16
    }

    /// Whether the glide is still in motion.
    pub fn is_gliding(&self) -> bool {
        (self.target - self.offset).abs() > f64::EPSILON
    }

    /// Bring a column into view.
    ///
    /// First request: snap so the column is at least minimally visible.
    /// Second request: glide toward the column centered in the
    /// viewport. Retargeting an in-flight glide starts from the current
    /// offset, so interruptions are safe.
    pub fn sync_to(&mut self, column: usize, column_width: u16, viewport: u16, max_scroll: u16) {
        if viewport == 0 {
            return;
        }
        let col_start = column as f64 * f64::from(column_width);
        let col_end = col_start + f64::from(column_width);
        let viewport = f64::from(viewport);
        let max_scroll = f64::from(max_scroll);

        // Snap: immediate, non-animated minimal visibility.
        if col_start < self.offset {
            self.offset = col_start;
        } else if col_end > self.offset + viewport {
            self.offset = (col_end - viewport).min(max_scroll);
        }

        // Glide: smooth centering from wherever the snap left us.
        let centered = col_start + f64::from(column_width) / 2.0 - viewport / 2.0;
        self.target = centered.clamp(0.0, max_scroll);
    }

    /// Jump both offset and target, with no glide.
    pub fn reset(&mut self) {
        self.offset = 0.0;
        self.target = 0.0;
    }

    /// Advance the glide one frame.
    pub fn tick(&mut self) {
        let delta = self.target - self.offset;
        if delta.abs() < 0.5 {
            self.offset = self.target;
            return;
        }
        self.offset += delta * self.speed;
    }
}
