//! Time-dial controller.
//!
//! [`DialController`] owns the canonical [`TimeOfDay`] and keeps every derived
//! piece of state consistent with it: the AM/PM half, the selected position
//! of each ring, the header text, and the generated rings themselves.
//!
//! ## Usage
//!
//! Programmatic changes, taps and drags all run through one consistency pass
//! that notifies time listeners at most once per call.
//!
//! ```
//! use clockface::{DialCanvas, DialConfig, DialController, DisplayMode, HeadlessView, TimeOfDay};
//!
//! let config = DialConfig::default()
//!     .is_24_hour(false)
//!     .initial_time(TimeOfDay::new(13, 5).unwrap());
//! let mut dial = DialController::new(config, HeadlessView).unwrap();
//! dial.set_canvas(DialCanvas::square(240.0));
//!
//! assert!(dial.is_post_meridiem());
//! assert_eq!(dial.header().hours, "01");
//!
//! let nine = dial.position(DisplayMode::Hours, 9).unwrap().clone();
//! dial.select_position(&nine);
//! assert_eq!(dial.time().hour(), 21);
//! assert_eq!(dial.display_mode(), DisplayMode::Minutes);
//! ```
mod drag;
mod selection;

use glam::Vec2;
use tracing::{debug, trace, warn};

pub use self::{
    drag::DragState,
    selection::{
        header_text, hour_from_ring_value, hour_ring_value, minute_from_ring_value,
        minute_ring_value,
    },
};
use self::{
    drag::{DragContext, time_at_cursor},
    selection::find_position,
};
use crate::{
    config::DialConfig,
    error::DialError,
    geometry::DialCanvas,
    layout::{DialPosition, DisplayMode, RingSpec, hour_rings, layout_ring, layout_rings},
    notify::{ListenerKey, TimeListener, TimeListeners},
    time::{DayPeriod, TimeOfDay},
    view::{DialView, HeaderText, first_missing_part},
};

/// Interaction state derived from, or layered on top of, the canonical time.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DialState {
    /// Ring currently interactive.
    pub mode: DisplayMode,
    /// Index of the selected hour position.
    pub selected_hour: Option<usize>,
    /// Index of the selected minute position.
    pub selected_minute: Option<usize>,
    /// Active drag gesture.
    pub drag: Option<DragState>,
}

/// Controller for an analog time dial.
pub struct DialController<V: DialView> {
    config: DialConfig,
    view: V,
    time: TimeOfDay,
    is_24_hour: bool,
    canvas: Option<DialCanvas>,
    hour_positions: Vec<DialPosition>,
    minute_positions: Vec<DialPosition>,
    state: DialState,
    listeners: TimeListeners,
}

impl<V: DialView> DialController<V> {
    /// Creates a controller driving `view`.
    ///
    /// Fails when the configuration is invalid or the view lacks a part the
    /// controller needs. Rings stay empty until [`set_canvas`] reports a
    /// usable surface.
    ///
    /// [`set_canvas`]: DialController::set_canvas
    pub fn new(config: DialConfig, view: V) -> Result<Self, DialError> {
        config.validate()?;
        if let Some(part) = first_missing_part(&view) {
            return Err(DialError::MissingPart(part));
        }

        let time = config.resolve_initial_time();
        let is_24_hour = config.resolve_24_hour();
        let mut controller = Self {
            config,
            view,
            time,
            is_24_hour,
            canvas: None,
            hour_positions: Vec::new(),
            minute_positions: Vec::new(),
            state: DialState::default(),
            listeners: TimeListeners::new(),
        };
        controller.view.transition_to(DisplayMode::Hours);
        controller.refresh_header();
        controller.sync_selection();
        debug!(%time, is_24_hour, "dial controller ready");
        Ok(controller)
    }

    /// Canonical time.
    pub fn time(&self) -> TimeOfDay {
        self.time
    }

    /// Returns whether hours are shown on two 24-hour rings.
    pub fn is_24_hour(&self) -> bool {
        self.is_24_hour
    }

    /// Returns whether the current hour lies in the afternoon half.
    ///
    /// Derived from the hour, so it can never disagree with it.
    pub fn is_post_meridiem(&self) -> bool {
        self.time.is_post_meridiem()
    }

    /// Ring currently interactive.
    pub fn display_mode(&self) -> DisplayMode {
        self.state.mode
    }

    /// Interaction state.
    pub fn state(&self) -> &DialState {
        &self.state
    }

    /// Active configuration.
    pub fn config(&self) -> &DialConfig {
        &self.config
    }

    /// Measured canvas, if any.
    pub fn canvas(&self) -> Option<DialCanvas> {
        self.canvas
    }

    /// View adapter.
    pub fn view(&self) -> &V {
        &self.view
    }

    /// Mutable view adapter.
    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    /// Generated positions of `member`'s ring.
    pub fn positions(&self, member: DisplayMode) -> &[DialPosition] {
        match member {
            DisplayMode::Hours => &self.hour_positions,
            DisplayMode::Minutes => &self.minute_positions,
        }
    }

    /// Position of `member`'s ring labelled `value`.
    pub fn position(&self, member: DisplayMode, value: u8) -> Option<&DialPosition> {
        self.positions(member).iter().find(|p| p.value == value)
    }

    /// Selected position of `member`'s ring.
    pub fn selected(&self, member: DisplayMode) -> Option<&DialPosition> {
        let index = match member {
            DisplayMode::Hours => self.state.selected_hour,
            DisplayMode::Minutes => self.state.selected_minute,
        }?;
        self.positions(member).get(index)
    }

    /// Header text for the current time and format.
    pub fn header(&self) -> HeaderText {
        header_text(self.time, self.is_24_hour)
    }

    /// Length of the hours hand relative to the outer radius.
    pub fn hour_hand_ratio(&self) -> f32 {
        match self.selected(DisplayMode::Hours) {
            Some(position) if position.is_inner_ring() => self.config.inner_ratio,
            _ => 1.0,
        }
    }

    /// Returns whether a drag gesture is in progress.
    pub fn is_dragging(&self) -> bool {
        self.state.drag.is_some()
    }

    /// Registers a listener called after every change of the canonical time.
    pub fn subscribe<F>(&mut self, handler: F) -> ListenerKey
    where
        F: Fn(TimeOfDay) + Send + Sync + 'static,
    {
        self.listeners.subscribe(handler)
    }

    /// Registers an existing listener handle.
    pub fn subscribe_listener(&mut self, listener: TimeListener) -> ListenerKey {
        self.listeners.insert(listener)
    }

    /// Listener registered under `key`.
    pub fn listener(&self, key: ListenerKey) -> Option<&TimeListener> {
        self.listeners.get(key)
    }

    /// Removes a listener. Returns whether it was registered.
    pub fn unsubscribe(&mut self, key: ListenerKey) -> bool {
        self.listeners.unsubscribe(key)
    }

    /// Replaces the canonical time.
    ///
    /// Listeners are notified once if the value actually changed.
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn set_time(&mut self, time: TimeOfDay) {
        self.apply_time(time);
    }

    /// Switches between 12-hour and 24-hour presentation.
    ///
    /// The stored time is unchanged, so listeners are not notified.
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn set_24_hour(&mut self, is_24_hour: bool) {
        self.is_24_hour = is_24_hour;
        self.regenerate();
        self.refresh_header();
    }

    /// Moves the time into the requested half of the day.
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn set_post_meridiem(&mut self, is_post_meridiem: bool) {
        let period = if is_post_meridiem {
            DayPeriod::Pm
        } else {
            DayPeriod::Am
        };
        self.apply_time(self.time.with_period(period));
    }

    /// Shows the hours or minutes ring.
    pub fn set_display_mode(&mut self, mode: DisplayMode) {
        if self.state.mode == mode {
            return;
        }
        trace!(?mode, "display mode changed");
        self.state.mode = mode;
        self.view.transition_to(mode);
    }

    /// Reports the size of the dial surface.
    ///
    /// Rings are regenerated on every change. A surface that is not a square
    /// of at least `min_canvas_side` clears the rings until the host measures
    /// again.
    pub fn set_canvas(&mut self, canvas: DialCanvas) {
        if self.canvas == Some(canvas) {
            return;
        }
        self.canvas = Some(canvas);
        self.regenerate();
    }

    /// Handles a tap on a generated position.
    ///
    /// Choosing an hour advances the dial to minute editing.
    #[tracing::instrument(
        level = "debug",
        skip(self, position),
        fields(value = position.value, member = ?position.member)
    )]
    pub fn select_position(&mut self, position: &DialPosition) {
        match position.member {
            DisplayMode::Hours => {
                let hour =
                    hour_from_ring_value(position.value, self.is_24_hour, self.is_post_meridiem());
                self.apply_time(self.time.with_hour(hour));
                self.set_display_mode(DisplayMode::Minutes);
            }
            DisplayMode::Minutes => {
                let minute = minute_from_ring_value(position.value);
                self.apply_time(self.time.with_minute(minute));
            }
        }
    }

    /// Starts a drag on `position`, `offset` away from its centre.
    pub fn begin_drag(&mut self, position: &DialPosition, offset: Vec2) {
        self.begin_drag_at(position.center + offset);
    }

    /// Starts a drag at an absolute canvas point.
    pub fn begin_drag_at(&mut self, point: Vec2) {
        trace!(?point, "drag started");
        self.state.drag = Some(DragState::new(point));
    }

    /// Moves the active drag by `delta` and updates the edited component.
    pub fn continue_drag(&mut self, delta: Vec2) {
        let Some(drag) = self.state.drag.as_mut() else {
            warn!(?delta, "drag delta received without an active drag");
            return;
        };
        let cursor = drag.advance(delta);
        let Some(canvas) = self.measured_canvas() else {
            debug!("ignoring drag on an unmeasured canvas");
            return;
        };

        let context = DragContext {
            canvas,
            mode: self.state.mode,
            is_24_hour: self.is_24_hour,
            inner_ratio: self.config.inner_ratio,
        };
        self.apply_time(time_at_cursor(cursor, context, self.time));
    }

    /// Ends the active drag and advances to minute editing.
    pub fn end_drag(&mut self) {
        self.state.drag = None;
        self.set_display_mode(DisplayMode::Minutes);
    }

    fn measured_canvas(&self) -> Option<DialCanvas> {
        self.canvas
            .filter(|canvas| canvas.is_measured(self.config.min_canvas_side))
    }

    fn apply_time(&mut self, time: TimeOfDay) {
        let previous = self.time;
        self.time = time;
        self.sync_selection();
        self.refresh_header();
        if previous != time {
            debug!(%previous, %time, "time changed");
            self.listeners.notify(time);
        }
    }

    fn regenerate(&mut self) {
        let min_side = self.config.min_canvas_side;
        match self.measured_canvas() {
            Some(canvas) => {
                let rings = hour_rings(self.is_24_hour, self.config.inner_ratio);
                self.hour_positions = layout_rings(canvas, min_side, &rings);
                self.minute_positions = layout_ring(
                    canvas,
                    min_side,
                    &RingSpec::minutes(self.config.minute_marker_step),
                );
                debug!(
                    hours = self.hour_positions.len(),
                    minutes = self.minute_positions.len(),
                    is_24_hour = self.is_24_hour,
                    "regenerated dial rings"
                );
            }
            None => {
                debug!(canvas = ?self.canvas, "canvas not measured, skipping layout");
                self.hour_positions.clear();
                self.minute_positions.clear();
            }
        }
        self.view.render_ring(DisplayMode::Hours, &self.hour_positions);
        self.view.render_ring(DisplayMode::Minutes, &self.minute_positions);
        self.sync_selection();
    }

    fn sync_selection(&mut self) {
        self.state.selected_hour = find_position(
            &self.hour_positions,
            hour_ring_value(self.time.hour(), self.is_24_hour),
        );
        self.state.selected_minute =
            find_position(&self.minute_positions, minute_ring_value(self.time.minute()));

        let hour = self
            .state
            .selected_hour
            .and_then(|index| self.hour_positions.get(index));
        self.view.show_selection(DisplayMode::Hours, hour);
        let minute = self
            .state
            .selected_minute
            .and_then(|index| self.minute_positions.get(index));
        self.view.show_selection(DisplayMode::Minutes, minute);
    }

    fn refresh_header(&mut self) {
        let header = header_text(self.time, self.is_24_hour);
        self.view.update_header(&header);
    }
}

#[cfg(test)]
mod tests {
    use std::{
        f32::consts::TAU,
        sync::{
            Arc,
            atomic::{AtomicUsize, Ordering},
        },
    };

    use super::*;
    use crate::{
        geometry::point_on_circle,
        view::{DialPart, HeadlessView, testing::RecordingView},
    };

    const SIDE: f32 = 200.0;

    fn dial(time: (u8, u8), is_24_hour: bool) -> DialController<RecordingView> {
        let config = DialConfig::default()
            .is_24_hour(is_24_hour)
            .initial_time(TimeOfDay::new(time.0, time.1).unwrap());
        let mut dial = DialController::new(config, RecordingView::default()).unwrap();
        dial.set_canvas(DialCanvas::square(SIDE));
        dial
    }

    fn count_notifications<V: DialView>(dial: &mut DialController<V>) -> Arc<AtomicUsize> {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = calls.clone();
        dial.subscribe(move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        });
        calls
    }

    fn tap(dial: &mut DialController<RecordingView>, member: DisplayMode, value: u8) {
        let position = dial.position(member, value).unwrap().clone();
        dial.select_position(&position);
    }

    #[test]
    fn test_missing_part_fails_fast() {
        let result = DialController::new(
            DialConfig::default().is_24_hour(false),
            RecordingView::without(DialPart::HoursHand),
        );
        let Err(error) = result else {
            panic!("expected a missing part error");
        };
        assert_eq!(error, DialError::MissingPart(DialPart::HoursHand));
        assert!(error.to_string().contains("hours hand"));
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let result = DialController::new(DialConfig::default().inner_ratio(1.2), HeadlessView);
        assert!(matches!(result, Err(DialError::InvalidInnerRatio(_))));
    }

    #[test]
    fn test_starts_in_hours_mode() {
        let dial = dial((10, 15), false);
        assert_eq!(dial.display_mode(), DisplayMode::Hours);
        assert_eq!(dial.view().log.lock().transitions, vec![DisplayMode::Hours]);
    }

    #[test]
    fn test_midnight_in_12_hour_mode() {
        let dial = dial((0, 0), false);
        assert_eq!(dial.header().hours, "12");
        assert!(!dial.is_post_meridiem());
        assert_eq!(dial.selected(DisplayMode::Hours).unwrap().value, 12);
        assert_eq!(dial.selected(DisplayMode::Minutes).unwrap().value, 60);
        assert_eq!(dial.view().log.lock().header.hours, "12");
    }

    #[test]
    fn test_afternoon_in_12_hour_mode() {
        let mut dial = dial((9, 0), false);
        dial.set_time(TimeOfDay::new(13, 5).unwrap());
        assert!(dial.is_post_meridiem());
        assert_eq!(dial.header().hours, "01");
        assert_eq!(dial.selected(DisplayMode::Hours).unwrap().value, 1);
        assert_eq!(dial.selected(DisplayMode::Minutes).unwrap().value, 5);
    }

    #[test]
    fn test_set_time_notifies_once_per_change() {
        let mut dial = dial((9, 0), false);
        let calls = count_notifications(&mut dial);
        dial.set_time(TimeOfDay::new(10, 30).unwrap());
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        dial.set_time(TimeOfDay::new(10, 30).unwrap());
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(dial.selected(DisplayMode::Minutes).unwrap().value, 30);
    }

    #[test]
    fn test_listener_sees_new_time() {
        let mut dial = dial((9, 0), false);
        let seen = Arc::new(parking_lot::Mutex::new(None));
        let sink = seen.clone();
        dial.subscribe(move |time| *sink.lock() = Some(time));
        dial.set_time(TimeOfDay::new(17, 45).unwrap());
        assert_eq!(*seen.lock(), Some(TimeOfDay::new(17, 45).unwrap()));
    }

    #[test]
    fn test_selection_round_trips_through_tap_formula() {
        for is_24_hour in [false, true] {
            let mut dial = dial((0, 0), is_24_hour);
            for hour in 0..24 {
                for minute in [0, 1, 29, 30, 59] {
                    let time = TimeOfDay::new(hour, minute).unwrap();
                    dial.set_time(time);
                    let hour_value = dial.selected(DisplayMode::Hours).unwrap().value;
                    let minute_value = dial.selected(DisplayMode::Minutes).unwrap().value;
                    assert_eq!(
                        hour_from_ring_value(hour_value, is_24_hour, dial.is_post_meridiem()),
                        hour
                    );
                    assert_eq!(minute_from_ring_value(minute_value), minute);
                }
            }
        }
    }

    #[test]
    fn test_post_meridiem_invariant_holds() {
        let mut dial = dial((8, 20), false);
        dial.set_post_meridiem(true);
        assert_eq!(dial.time(), TimeOfDay::new(20, 20).unwrap());
        assert!(dial.is_post_meridiem());

        dial.set_post_meridiem(true);
        assert_eq!(dial.time().hour(), 20);

        dial.set_time(TimeOfDay::new(3, 0).unwrap());
        assert!(!dial.is_post_meridiem());

        dial.set_24_hour(true);
        dial.set_24_hour(false);
        assert!(!dial.is_post_meridiem());

        dial.set_time(TimeOfDay::NOON);
        dial.set_post_meridiem(false);
        assert_eq!(dial.time(), TimeOfDay::MIDNIGHT);
        assert_eq!(dial.is_post_meridiem(), dial.time().hour() >= 12);
    }

    #[test]
    fn test_format_toggle_preserves_time_without_notifying() {
        let mut dial = dial((0, 40), false);
        let calls = count_notifications(&mut dial);
        let renders_before = dial.view().ring_renders();

        dial.set_24_hour(true);
        assert_eq!(dial.time(), TimeOfDay::new(0, 40).unwrap());
        assert_eq!(dial.positions(DisplayMode::Hours).len(), 24);
        assert_eq!(dial.selected(DisplayMode::Hours).unwrap().value, 24);
        assert_eq!(dial.header().hours, "00");

        dial.set_24_hour(false);
        assert_eq!(dial.positions(DisplayMode::Hours).len(), 12);
        assert_eq!(dial.selected(DisplayMode::Hours).unwrap().value, 12);

        assert_eq!(calls.load(Ordering::SeqCst), 0);
        assert_eq!(dial.view().ring_renders(), renders_before + 4);
    }

    #[test]
    fn test_tap_outer_zero_in_24_hour_mode() {
        let mut dial = dial((15, 10), true);
        let outer_top = dial.position(DisplayMode::Hours, 24).unwrap().clone();
        assert_eq!(outer_top.label, "00");
        dial.select_position(&outer_top);
        assert_eq!(dial.time().hour(), 0);

        dial.set_time(TimeOfDay::new(15, 10).unwrap());
        let raw_zero = DialPosition {
            value: 0,
            ..outer_top
        };
        dial.select_position(&raw_zero);
        assert_eq!(dial.time().hour(), 0);
        assert_eq!(dial.selected(DisplayMode::Hours).unwrap().value, 24);
    }

    #[test]
    fn test_tap_inner_twelve_in_24_hour_mode_is_noon() {
        let mut dial = dial((3, 0), true);
        tap(&mut dial, DisplayMode::Hours, 12);
        assert_eq!(dial.time().hour(), 12);
        assert!(dial.selected(DisplayMode::Hours).unwrap().is_inner_ring());
        assert_eq!(dial.hour_hand_ratio(), 0.7);

        tap(&mut dial, DisplayMode::Hours, 18);
        assert_eq!(dial.time().hour(), 18);
        assert_eq!(dial.hour_hand_ratio(), 1.0);
    }

    #[test]
    fn test_tap_twelve_follows_period_in_12_hour_mode() {
        let mut dial = dial((15, 0), false);
        tap(&mut dial, DisplayMode::Hours, 12);
        assert_eq!(dial.time().hour(), 12);
        assert!(dial.is_post_meridiem());

        dial.set_post_meridiem(false);
        tap(&mut dial, DisplayMode::Hours, 12);
        assert_eq!(dial.time().hour(), 0);
    }

    #[test]
    fn test_hour_tap_advances_to_minutes() {
        let mut dial = dial((8, 0), false);
        let calls = count_notifications(&mut dial);
        tap(&mut dial, DisplayMode::Hours, 4);
        assert_eq!(dial.time(), TimeOfDay::new(4, 0).unwrap());
        assert_eq!(dial.display_mode(), DisplayMode::Minutes);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        let log = dial.view().log.lock();
        assert_eq!(log.mode, Some(DisplayMode::Minutes));
        assert_eq!(log.selected_hour.as_ref().unwrap().value, 4);
    }

    #[test]
    fn test_minute_hint_tap_selects_like_any_minute() {
        let mut dial = dial((8, 0), false);
        dial.set_display_mode(DisplayMode::Minutes);
        tap(&mut dial, DisplayMode::Minutes, 7);
        assert_eq!(dial.time(), TimeOfDay::new(8, 7).unwrap());
        assert_eq!(dial.display_mode(), DisplayMode::Minutes);
        let selected = dial.selected(DisplayMode::Minutes).unwrap();
        assert_eq!(selected.value, 7);
        assert_eq!(selected.marker, crate::layout::MarkerSize::Hint);
    }

    #[test]
    fn test_minute_drag_to_half_turn() {
        let mut dial = dial((8, 0), false);
        dial.set_display_mode(DisplayMode::Minutes);
        let top = dial.position(DisplayMode::Minutes, 60).unwrap().clone();
        dial.begin_drag(&top, Vec2::ZERO);
        dial.continue_drag(Vec2::new(0.0, SIDE));
        assert_eq!(dial.time(), TimeOfDay::new(8, 30).unwrap());
        assert!(dial.is_dragging());
    }

    #[test]
    fn test_minute_drag_wraps_without_skipping() {
        let mut dial = dial((8, 57), false);
        dial.set_display_mode(DisplayMode::Minutes);
        let center = DialCanvas::square(SIDE).center();
        let radius = SIDE / 2.0;
        let step = TAU / 60.0;

        let mut cursor = point_on_circle(center, radius, 57.0 * step);
        dial.begin_drag_at(cursor);
        let mut seen = vec![dial.time().minute()];
        for tick in 1..=12 {
            let next = point_on_circle(center, radius, (57.0 + tick as f32 * 0.5) * step);
            dial.continue_drag(next - cursor);
            cursor = next;
            let minute = dial.time().minute();
            if seen.last() != Some(&minute) {
                seen.push(minute);
            }
        }
        assert_eq!(seen, vec![57, 58, 59, 0, 1, 2, 3]);

        for tick in (0..12).rev() {
            let next = point_on_circle(center, radius, (57.0 + tick as f32 * 0.5) * step);
            dial.continue_drag(next - cursor);
            cursor = next;
            let minute = dial.time().minute();
            if seen.last() != Some(&minute) {
                seen.push(minute);
            }
        }
        assert_eq!(&seen[6..], &[3u8, 2, 1, 0, 59, 58, 57]);
        assert_eq!(dial.time().hour(), 8);
    }

    #[test]
    fn test_24_hour_drag_uses_radius_for_period() {
        let mut dial = dial((8, 0), true);
        let center = DialCanvas::square(SIDE).center();
        dial.begin_drag_at(center + Vec2::new(0.0, -95.0));
        dial.continue_drag(Vec2::ZERO);
        assert_eq!(dial.time().hour(), 0);

        dial.continue_drag(Vec2::new(0.0, 25.0));
        assert_eq!(dial.time().hour(), 12);

        dial.continue_drag(Vec2::new(95.0, 70.0));
        assert_eq!(dial.time().hour(), 15);
        dial.end_drag();
        assert_eq!(dial.display_mode(), DisplayMode::Minutes);
        assert!(!dial.is_dragging());
    }

    #[test]
    fn test_12_hour_drag_keeps_period() {
        let mut dial = dial((14, 0), false);
        let five = dial.position(DisplayMode::Hours, 5).unwrap().clone();
        dial.begin_drag(&five, Vec2::new(2.0, -1.0));
        dial.continue_drag(Vec2::new(-1.0, 1.0));
        assert_eq!(dial.time().hour(), 17);
    }

    #[test]
    fn test_drag_without_begin_is_ignored() {
        let mut dial = dial((6, 6), false);
        let calls = count_notifications(&mut dial);
        dial.continue_drag(Vec2::new(50.0, 50.0));
        assert_eq!(dial.time(), TimeOfDay::new(6, 6).unwrap());
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_end_drag_always_switches_to_minutes() {
        let mut dial = dial((6, 6), false);
        dial.end_drag();
        assert_eq!(dial.display_mode(), DisplayMode::Minutes);
    }

    #[test]
    fn test_degenerate_canvas_skips_layout() {
        let mut dial = dial((6, 6), false);
        assert_eq!(dial.positions(DisplayMode::Minutes).len(), 60);

        dial.set_canvas(DialCanvas::new(200.0, 150.0));
        assert!(dial.positions(DisplayMode::Hours).is_empty());
        assert!(dial.positions(DisplayMode::Minutes).is_empty());
        assert!(dial.selected(DisplayMode::Hours).is_none());

        dial.set_time(TimeOfDay::new(7, 7).unwrap());
        assert_eq!(dial.header().hours, "07");

        dial.set_canvas(DialCanvas::square(120.0));
        assert_eq!(dial.selected(DisplayMode::Hours).unwrap().value, 7);
        assert_eq!(dial.selected(DisplayMode::Minutes).unwrap().value, 7);
    }

    #[test]
    fn test_drag_on_unmeasured_canvas_is_ignored() {
        let config = DialConfig::default()
            .is_24_hour(false)
            .initial_time(TimeOfDay::NOON);
        let mut dial = DialController::new(config, HeadlessView).unwrap();
        dial.begin_drag_at(Vec2::new(5.0, 5.0));
        dial.continue_drag(Vec2::new(1.0, 1.0));
        assert_eq!(dial.time(), TimeOfDay::NOON);
    }

    #[test]
    fn test_header_tap_switches_mode_once() {
        let mut dial = dial((6, 6), false);
        dial.set_display_mode(DisplayMode::Minutes);
        dial.set_display_mode(DisplayMode::Minutes);
        dial.set_display_mode(DisplayMode::Hours);
        assert_eq!(
            dial.view().log.lock().transitions,
            vec![DisplayMode::Hours, DisplayMode::Minutes, DisplayMode::Hours]
        );
    }

    #[test]
    fn test_unsubscribe_stops_notifications() {
        let mut dial = dial((6, 6), false);
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = calls.clone();
        let key = dial.subscribe(move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        });
        assert!(dial.unsubscribe(key));
        dial.set_time(TimeOfDay::NOON);
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }
}
