//! Stepper time control.
//!
//! A second way of editing a time: plus/minus buttons for the hour and the
//! minute and an AM/PM toggle. Hosts typically show it next to the dial and
//! keep both in step with [`mirror_time`](crate::sync::mirror_time).
use crate::{
    notify::{ListenerKey, TimeListener, TimeListeners},
    time::{DayPeriod, TimeOfDay},
};

/// Holds the selection of a stepper time control.
#[derive(Debug)]
pub struct TimeStepper {
    time: TimeOfDay,
    is_24_hour: bool,
    hour_step: u8,
    minute_step: u8,
    listeners: TimeListeners,
}

impl TimeStepper {
    /// Creates a stepper with single-unit steps.
    pub fn new(time: TimeOfDay, is_24_hour: bool) -> Self {
        Self {
            time,
            is_24_hour,
            hour_step: 1,
            minute_step: 1,
            listeners: TimeListeners::new(),
        }
    }

    /// Sets the hour step; 0 is treated as 1.
    pub fn with_hour_step(mut self, step: u8) -> Self {
        self.hour_step = normalize_step(step, 23);
        self
    }

    /// Sets the minute step; 0 is treated as 1.
    pub fn with_minute_step(mut self, step: u8) -> Self {
        self.minute_step = normalize_step(step, 59);
        self
    }

    /// Current time.
    pub fn time(&self) -> TimeOfDay {
        self.time
    }

    /// Returns whether the stepper shows 24-hour values.
    pub fn is_24_hour(&self) -> bool {
        self.is_24_hour
    }

    /// Period shown by the AM/PM toggle.
    pub fn period(&self) -> DayPeriod {
        self.time.period()
    }

    /// Hour as shown in the hour cell.
    pub fn hour_for_display(&self) -> u8 {
        if self.is_24_hour {
            self.time.hour()
        } else {
            self.time.hour_12()
        }
    }

    /// Registers a listener called after every time change.
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

    /// Removes a listener.
    pub fn unsubscribe(&mut self, key: ListenerKey) -> bool {
        self.listeners.unsubscribe(key)
    }

    /// Replaces the time.
    pub fn set_time(&mut self, time: TimeOfDay) {
        if self.time == time {
            return;
        }
        self.time = time;
        self.listeners.notify(time);
    }

    /// Switches 24-hour display on or off.
    pub fn set_24_hour(&mut self, is_24_hour: bool) {
        self.is_24_hour = is_24_hour;
    }

    /// Moves the time into `period`. Ignored in 24-hour mode, which has no
    /// period toggle.
    pub fn set_period(&mut self, period: DayPeriod) {
        if self.is_24_hour {
            return;
        }
        self.set_time(self.time.with_period(period));
    }

    /// Increments the hour by the hour step, wrapping around midnight.
    pub fn increment_hour(&mut self) {
        let hour = (u16::from(self.time.hour()) + u16::from(self.hour_step)) % 24;
        self.set_time(self.time.with_hour(hour as u8));
    }

    /// Decrements the hour by the hour step, wrapping around midnight.
    pub fn decrement_hour(&mut self) {
        let hour = (i16::from(self.time.hour()) - i16::from(self.hour_step)).rem_euclid(24);
        self.set_time(self.time.with_hour(hour as u8));
    }

    /// Increments the minute by the minute step, wrapping within the hour.
    pub fn increment_minute(&mut self) {
        let minute = (u16::from(self.time.minute()) + u16::from(self.minute_step)) % 60;
        self.set_time(self.time.with_minute(minute as u8));
    }

    /// Decrements the minute by the minute step, wrapping within the hour.
    pub fn decrement_minute(&mut self) {
        let minute = (i16::from(self.time.minute()) - i16::from(self.minute_step)).rem_euclid(60);
        self.set_time(self.time.with_minute(minute as u8));
    }
}

fn normalize_step(step: u8, max: u8) -> u8 {
    if step == 0 { 1 } else { step.min(max) }
}
