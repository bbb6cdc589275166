//! Keeping the dial and a peer control in step.
//!
//! Mirroring two controls into each other loops forever unless propagation
//! is suspended while a mirrored update is already running. [`ReentrancyGuard`]
//! is that suspension flag; [`mirror_time`] wires a [`DialController`] and a
//! [`TimeStepper`] together through one.
use std::sync::{
    Arc, Weak,
    atomic::{AtomicBool, Ordering},
};

use parking_lot::Mutex;
use tracing::trace;

use crate::{
    controller::DialController,
    notify::{ListenerKey, TimeListener},
    stepper::TimeStepper,
    view::DialView,
};

/// Shared flag suspending propagation while an update is in flight.
///
/// Clones share the same flag.
#[derive(Debug, Clone, Default)]
pub struct ReentrancyGuard {
    active: Arc<AtomicBool>,
}

struct Reset<'a>(&'a AtomicBool);

impl Drop for Reset<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

impl ReentrancyGuard {
    /// Creates an inactive guard.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns whether an update is currently running under this guard.
    pub fn is_active(&self) -> bool {
        self.active.load(Ordering::Acquire)
    }

    /// Runs `f` unless an update is already running under this guard.
    ///
    /// Returns `None` when the call was suppressed. The flag is cleared again
    /// even if `f` panics.
    pub fn run<R>(&self, f: impl FnOnce() -> R) -> Option<R> {
        if self
            .active
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            return None;
        }
        let _reset = Reset(&self.active);
        Some(f())
    }
}

/// Listener registrations created by [`mirror_time`].
///
/// The pair must be driven from one thread at a time. Each listener takes the
/// other control's lock while its own is held, so changing the dial on one
/// thread and the stepper on another at the same moment can deadlock.
#[derive(Debug, Clone)]
pub struct Mirror {
    /// Key of the listener registered on the dial.
    pub dial_key: ListenerKey,
    /// Key of the listener registered on the stepper.
    pub stepper_key: ListenerKey,
    /// Listener copying dial changes into the stepper.
    pub dial_listener: TimeListener,
    /// Listener copying stepper changes into the dial.
    pub stepper_listener: TimeListener,
    /// Guard shared by both listeners.
    pub guard: ReentrancyGuard,
}

impl Mirror {
    /// Returns whether both listeners are still registered.
    pub fn is_attached<V: DialView>(
        &self,
        dial: &Mutex<DialController<V>>,
        stepper: &Mutex<TimeStepper>,
    ) -> bool {
        dial.lock().listener(self.dial_key) == Some(&self.dial_listener)
            && stepper.lock().listener(self.stepper_key) == Some(&self.stepper_listener)
    }

    /// Removes both listeners.
    pub fn detach<V: DialView>(
        &self,
        dial: &Mutex<DialController<V>>,
        stepper: &Mutex<TimeStepper>,
    ) {
        dial.lock().unsubscribe(self.dial_key);
        stepper.lock().unsubscribe(self.stepper_key);
    }
}

/// Mirrors time changes between `dial` and `stepper` in both directions.
///
/// The stepper is first brought to the dial's current time. Afterwards a
/// change on either side is copied to the other exactly once. The listeners
/// hold weak references, so dropping either control ends the mirroring.
///
/// Both controls must be driven from one thread at a time: the listener on
/// the side being changed runs while that side's lock is held, and the guard
/// is what keeps the echo from trying to take it again. See [`Mirror`].
pub fn mirror_time<V>(
    dial: &Arc<Mutex<DialController<V>>>,
    stepper: &Arc<Mutex<TimeStepper>>,
) -> Mirror
where
    V: DialView + Send + 'static,
{
    let guard = ReentrancyGuard::new();

    let initial = dial.lock().time();
    stepper.lock().set_time(initial);

    let stepper_listener = {
        let dial: Weak<Mutex<DialController<V>>> = Arc::downgrade(dial);
        let guard = guard.clone();
        TimeListener::new(move |time| {
            let Some(dial) = dial.upgrade() else {
                return;
            };
            if guard.run(|| dial.lock().set_time(time)).is_none() {
                trace!(%time, "stepper echo suppressed");
            }
        })
    };

    let dial_listener = {
        let stepper: Weak<Mutex<TimeStepper>> = Arc::downgrade(stepper);
        let guard = guard.clone();
        TimeListener::new(move |time| {
            let Some(stepper) = stepper.upgrade() else {
                return;
            };
            if guard.run(|| stepper.lock().set_time(time)).is_none() {
                trace!(%time, "dial echo suppressed");
            }
        })
    };

    let stepper_key = stepper.lock().subscribe_listener(stepper_listener.clone());
    let dial_key = dial.lock().subscribe_listener(dial_listener.clone());

    Mirror {
        dial_key,
        stepper_key,
        dial_listener,
        stepper_listener,
        guard,
    }
}
