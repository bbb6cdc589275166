//! Model and geometry for Material-style analog clock time pickers.
//!
//! The crate does no drawing. It lays out the positions of the hour and minute
//! rings on a square canvas, turns taps and drags into a canonical
//! [`TimeOfDay`], and tells a host-provided [`DialView`] what to show.
//!
//! # Example
//!
//! ```
//! use clockface::{DialCanvas, DialConfig, DialController, DisplayMode, HeadlessView, TimeOfDay};
//! use glam::Vec2;
//!
//! let config = DialConfig::default()
//!     .is_24_hour(true)
//!     .initial_time(TimeOfDay::MIDNIGHT);
//! let mut dial = DialController::new(config, HeadlessView).unwrap();
//! dial.set_canvas(DialCanvas::square(200.0));
//!
//! // 24-hour mode lays out two hour rings.
//! assert_eq!(dial.positions(DisplayMode::Hours).len(), 24);
//!
//! dial.subscribe(|time| println!("now {time}"));
//!
//! // Drag from the top of the outer ring to 3 o'clock.
//! dial.begin_drag_at(Vec2::new(100.0, 5.0));
//! dial.continue_drag(Vec2::new(95.0, 95.0));
//! dial.end_drag();
//!
//! assert_eq!(dial.time().hour(), 15);
//! assert_eq!(dial.display_mode(), DisplayMode::Minutes);
//! ```
//!
//! # Layout
//!
//! - [`layout`] places ring positions; [`angle`] maps pointer angles back.
//! - [`controller`] owns the state machine.
//! - [`stepper`] and [`sync`] cover a second, button-driven control mirrored
//!   to the dial.
#![deny(missing_docs, clippy::unwrap_used)]
#![cfg_attr(test, allow(clippy::unwrap_used))]

pub mod angle;
pub mod config;
pub mod controller;
pub mod error;
pub mod geometry;
pub mod layout;
pub mod locale;
pub mod notify;
pub mod stepper;
pub mod sync;
pub mod time;
pub mod view;

pub use crate::{
    config::DialConfig,
    controller::{DialController, DialState, DragState},
    error::DialError,
    geometry::DialCanvas,
    layout::{DialPosition, DisplayMode, MarkerSize, Ring, RingSpec},
    notify::{ListenerKey, TimeListener, TimeListeners},
    stepper::TimeStepper,
    sync::{Mirror, ReentrancyGuard, mirror_time},
    time::{DayPeriod, TimeOfDay},
    view::{DialPart, DialView, HeaderText, HeadlessView},
};
