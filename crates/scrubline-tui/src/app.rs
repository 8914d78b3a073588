//! Application state and update logic for the demo shell.
//!
//! The shell mounts one widget in a registry it owns, routes keys and
//! normalized pointer events into registry operations, and keeps the
//! per-widget view state (scroll animator, hover tooltip, last layout)
//! that the headless engine deliberately knows nothing about.

use std::sync::{Arc, Mutex};
use std::time::Instant;

use ratatui::{buffer::Buffer, layout::Rect, style::Style, widgets::Widget};
use scrubline_core::{ConfigError, SliderConfig, SliderRegistry, SliderState};
use unicode_width::UnicodeWidthStr;

use crate::event::Action;
use crate::input::PointerEvent;
use crate::layout::{Hit, SliderLayout};
use crate::scroll::TimelineScroll;
use crate::slider::SliderWidget;
use crate::theme::Theme;
use crate::timeline::TimelinePanel;
use crate::tooltip::Tooltip;

/// Registry id of the demo widget.
const WIDGET_ID: &str = "demo";

/// Footer key hints.
const FOOTER_HINTS: &str =
    "q quit  \u{2039}/\u{203a} step  a animate  t timeline  drag to scrub";

/// Application state.
pub struct App {
    registry: SliderRegistry,
    id: String,
    theme: Theme,
    /// Whether the app should quit.
    pub should_quit: bool,

    // Per-widget view state
    scroll: TimelineScroll,
    tooltip: Option<Tooltip>,
    layout: Option<SliderLayout>,
    /// `(current_index, visible)` the scroll was last synced against.
    last_synced: Option<(Option<usize>, bool)>,

    /// Label for the footer, updated through the widget's change
    /// callback like any other host application would.
    round_label: Arc<Mutex<String>>,
}

impl App {
    /// Create an app with one mounted widget.
    pub fn new(config: SliderConfig, theme: Theme) -> Result<Self, ConfigError> {
        let round_label = Arc::new(Mutex::new(String::new()));
        let label_writer = Arc::clone(&round_label);
        let prefix = config.tick_label_prefix.clone();

        let mut registry = SliderRegistry::new();
        registry.create(
            WIDGET_ID,
            config,
            Some(Box::new(move |index| {
                if let Ok(mut label) = label_writer.lock() {
                    *label = format!("{prefix}{}", index + 1);
                }
            })),
        )?;

        Ok(Self {
            registry,
            id: WIDGET_ID.to_string(),
            theme,
            should_quit: false,
            scroll: TimelineScroll::default(),
            tooltip: None,
            layout: None,
            last_synced: None,
            round_label,
        })
    }

    /// The registry backing this app.
    pub fn registry(&self) -> &SliderRegistry {
        &self.registry
    }

    /// The mounted widget's state, if still mounted.
    fn state(&self) -> Option<&SliderState> {
        self.registry.get(&self.id).ok()
    }

    /// Handle a key action.
    pub fn handle_action(&mut self, action: Action) {
        match action {
            Action::Quit => self.should_quit = true,
            Action::StepBack => self.step(-1),
            Action::StepForward => self.step(1),
            Action::First => {
                let _ = self.registry.move_to(&self.id, 0);
            }
            Action::Last => {
                if let Some(state) = self.state() {
                    let last = state.num_ticks() as isize - 1;
                    let _ = self.registry.move_to(&self.id, last);
                }
            }
            Action::Animate => {
                let _ = self.registry.animate(&self.id, None);
            }
            Action::ToggleTimeline => {
                let _ = self.registry.toggle_visibility(&self.id);
            }
            Action::None => {}
        }
    }

    /// Handle a normalized pointer event.
    pub fn handle_pointer(&mut self, event: PointerEvent) {
        match event {
            PointerEvent::Press { x, y } => self.handle_press(x, y),
            PointerEvent::Move { x, .. } => {
                // Drag sessions track document-wide: the position keeps
                // following the pointer outside the slider bounds.
                if self.registry.drag_target().is_some() {
                    if let Some(layout) = self.layout {
                        self.registry.drag_to(layout.tick_index_at(x));
                    }
                }
            }
            PointerEvent::Release => self.registry.end_drag(),
            PointerEvent::Hover { x, y } => self.update_tooltip(x, y),
        }
    }

    fn handle_press(&mut self, x: u16, y: u16) {
        let Some(layout) = self.layout else { return };
        let Some(state) = self.state() else { return };

        match layout.hit_test(x, y, state, self.scroll.offset_cells()) {
            Hit::Slider => {
                if self.registry.begin_drag(&self.id).is_ok() {
                    self.registry.drag_to(layout.tick_index_at(x));
                }
            }
            Hit::LeftArrow => self.step(-1),
            Hit::RightArrow => self.step(1),
            Hit::ExpandCollapse => {
                let _ = self.registry.toggle_visibility(&self.id);
            }
            _ => {}
        }
    }

    /// Step the slider by one tick; disabled arrows swallow the click.
    fn step(&mut self, delta: isize) {
        let Some(state) = self.state() else { return };
        if delta < 0 && !state.can_step_back() {
            return;
        }
        if delta > 0 && !state.can_step_forward() {
            return;
        }
        if let Some(current) = state.current_index() {
            let _ = self.registry.move_to(&self.id, current as isize + delta);
        }
    }

    fn update_tooltip(&mut self, x: u16, y: u16) {
        let Some(layout) = self.layout else { return };
        let Some(state) = self.state() else { return };

        self.tooltip = match layout.hit_test(x, y, state, self.scroll.offset_cells()) {
            Hit::InfoMarker { tick, entry } => state
                .timeline_entries(tick)
                .get(entry)
                .and_then(|e| e.more_info_text.clone())
                .map(|text| Tooltip::new(text, x, y)),
            _ => None,
        };
    }

    /// Advance one frame: animation steps, change notifications, then
    /// the scroll glide.
    pub fn on_tick(&mut self, now: Instant) {
        self.registry.tick(now);
        self.sync_scroll();
        self.scroll.tick();
    }

    /// Issue the snap and glide requests when the active index or the
    /// panel visibility changed since the last sync.
    fn sync_scroll(&mut self) {
        let Some(layout) = self.layout else { return };
        let Some(state) = self.state() else { return };
        let visible = state.is_timeline_visible();
        let index = state.current_index();

        let key = (index, visible);
        if !visible {
            self.last_synced = Some(key);
            return;
        }

        let inner = layout.timeline_inner();
        if inner.width == 0 {
            // The panel was expanded after this layout was computed;
            // sync against the next frame's geometry instead.
            return;
        }
        if self.last_synced == Some(key) {
            return;
        }
        self.last_synced = Some(key);

        if let Some(index) = index {
            self.scroll
                .sync_to(index, layout.column_width, inner.width, layout.max_scroll());
        }
    }

    /// Render the whole frame.
    pub fn render(&mut self, area: Rect, buf: &mut Buffer) {
        buf.set_style(area, Style::default().bg(self.theme.base));
        let Some(state) = self.registry.get(&self.id).ok() else {
            return;
        };

        let body = Rect::new(area.x, area.y, area.width, area.height.saturating_sub(1));
        let layout = SliderLayout::compute(body, state);

        SliderWidget::new(state, &self.theme, &layout).render(body, buf);
        if state.is_timeline_visible() {
            TimelinePanel::new(state, &self.theme, &layout, self.scroll.offset_cells())
                .render(body, buf);
        }
        self.layout = Some(layout);

        self.render_footer(area, buf);

        if let Some(tooltip) = &self.tooltip {
            tooltip.render(area, &self.theme, buf);
        }
    }

    fn render_footer(&self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 {
            return;
        }
        let y = area.y + area.height - 1;
        let style = Style::default().fg(self.theme.muted);
        buf.set_stringn(area.x + 1, y, FOOTER_HINTS, usize::from(area.width), style);

        if let Ok(label) = self.round_label.lock() {
            let width = label.width() as u16;
            if width > 0 && area.width > width + 1 {
                buf.set_string(
                    area.x + area.width - width - 1,
                    y,
                    label.as_str(),
                    Style::default().fg(self.theme.subtext),
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{buffer_row, buffer_to_string};
    use crate::slider::{COLLAPSE_LABEL, EXPAND_LABEL};

    fn app(num_ticks: usize) -> App {
        let mut config = SliderConfig::new(num_ticks);
        config.width = 60;
        App::new(config, Theme::mocha()).unwrap()
    }

    fn draw(app: &mut App) -> Buffer {
        let area = Rect::new(0, 0, 60, 14);
        let mut buf = Buffer::empty(area);
        app.render(area, &mut buf);
        buf
    }

    fn current_index(app: &App) -> Option<usize> {
        app.registry().get(WIDGET_ID).unwrap().current_index()
    }

    #[test]
    fn test_starts_parked_with_label() {
        let mut app = app(5);
        let buf = draw(&mut app);

        assert_eq!(current_index(&app), Some(4));
        // Footer carries the change-callback label and the key hints.
        let footer = buffer_row(&buf, 13);
        assert!(footer.contains("Round 5"));
        assert!(footer.contains("q quit"));
    }

    #[test]
    fn test_actions_step_and_quit() {
        let mut app = app(5);
        draw(&mut app);

        app.handle_action(Action::StepBack);
        assert_eq!(current_index(&app), Some(3));
        app.handle_action(Action::StepForward);
        assert_eq!(current_index(&app), Some(4));
        // At the boundary the step is swallowed.
        app.handle_action(Action::StepForward);
        assert_eq!(current_index(&app), Some(4));

        app.handle_action(Action::First);
        assert_eq!(current_index(&app), Some(0));
        app.handle_action(Action::Last);
        assert_eq!(current_index(&app), Some(4));

        app.handle_action(Action::Quit);
        assert!(app.should_quit);
    }

    #[test]
    fn test_toggle_renders_both_labels() {
        let mut app = app(4);
        let buf = draw(&mut app);
        assert!(buffer_to_string(&buf).contains(EXPAND_LABEL));

        app.handle_action(Action::ToggleTimeline);
        let buf = draw(&mut app);
        let rendered = buffer_to_string(&buf);
        assert!(rendered.contains(COLLAPSE_LABEL));
        assert!(rendered.contains("Round 1"));

        app.handle_action(Action::ToggleTimeline);
        let buf = draw(&mut app);
        assert!(buffer_to_string(&buf).contains(EXPAND_LABEL));
    }

    #[test]
    fn test_drag_session_scrubs() {
        let mut app = app(5);
        draw(&mut app);
        let layout = app.layout.unwrap();

        let (x, _) = layout.tick_span(1);
        app.handle_pointer(PointerEvent::Press { x, y: layout.slider.y });
        assert_eq!(app.registry().drag_target(), Some(WIDGET_ID));
        assert_eq!(current_index(&app), Some(1));

        // Movement outside the slider bounds still tracks and clamps.
        app.handle_pointer(PointerEvent::Move { x: 0, y: 9 });
        assert_eq!(current_index(&app), Some(0));

        app.handle_pointer(PointerEvent::Release);
        assert_eq!(app.registry().drag_target(), None);
    }

    #[test]
    fn test_arrow_clicks() {
        let mut app = app(5);
        draw(&mut app);
        let layout = app.layout.unwrap();

        let x = layout.left_arrow.x + 1;
        app.handle_pointer(PointerEvent::Press { x, y: layout.left_arrow.y });
        assert_eq!(current_index(&app), Some(3));

        let x = layout.right_arrow.x + 1;
        app.handle_pointer(PointerEvent::Press { x, y: layout.right_arrow.y });
        assert_eq!(current_index(&app), Some(4));
        // Clicking the disabled arrow does nothing.
        app.handle_pointer(PointerEvent::Press { x, y: layout.right_arrow.y });
        assert_eq!(current_index(&app), Some(4));
    }

    #[test]
    fn test_expand_collapse_click() {
        let mut app = app(4);
        draw(&mut app);
        let layout = app.layout.unwrap();

        let x = layout.expand_collapse.x + layout.expand_collapse.width / 2;
        app.handle_pointer(PointerEvent::Press { x, y: layout.expand_collapse.y });
        assert!(app.registry().get(WIDGET_ID).unwrap().is_timeline_visible());
    }

    #[test]
    fn test_hover_tooltip_singleton() {
        let mut app = app(4);
        app.handle_action(Action::ToggleTimeline);
        draw(&mut app);
        // Sync the scroll against the fresh layout, then redraw.
        app.on_tick(Instant::now());
        draw(&mut app);
        let layout = app.layout.unwrap();

        // Placeholder data gives tick 0's first entry more-info text.
        let (x, y) = layout
            .marker_screen_pos(0, 0, app.scroll.offset_cells())
            .unwrap();
        app.handle_pointer(PointerEvent::Hover { x, y });
        assert!(app.tooltip.is_some());

        let buf = draw(&mut app);
        assert!(buffer_to_string(&buf).contains("Like a birth"));

        // Hover-exit removes it.
        app.handle_pointer(PointerEvent::Hover { x: 0, y: 0 });
        assert!(app.tooltip.is_none());
    }

    #[test]
    fn test_animate_on_tick_advances() {
        let mut app = app(4);
        draw(&mut app);

        app.handle_action(Action::Animate);
        assert!(app.registry().get(WIDGET_ID).unwrap().is_animating());

        let t0 = Instant::now();
        let interval = app
            .registry()
            .get(WIDGET_ID)
            .unwrap()
            .config()
            .step_interval();
        app.on_tick(t0);
        assert_eq!(current_index(&app), Some(0));
        app.on_tick(t0 + interval);
        assert_eq!(current_index(&app), Some(1));
    }

    #[test]
    fn test_scroll_syncs_after_move() {
        let mut config = SliderConfig::new(40);
        config.width = 60;
        config.hide_timeline_initially = false;
        let mut app = App::new(config, Theme::mocha()).unwrap();

        draw(&mut app);
        app.on_tick(Instant::now());
        // Parked at the last of 40 ticks: the panel must scroll.
        assert!(app.scroll.offset_cells() > 0);
    }
}
