//! Seams between the controller and its host environment.
//!
//! The controller never touches a concrete element or clock. It talks to a
//! [`PresentationSurface`] for everything visible and to a [`Scheduler`] for
//! its timers, so both can be swapped for recording fakes in tests.
//!
//! # Integration Pattern
//!
//! An integration layer implements [`PresentationSurface`] for its element
//! type and routes clicks and timer firings into the controller:
//!
//! ```ignore
//! fn on_click(el: &mut MyElement, ctl: &mut ConfirmationController, timers: &mut TimerQueue) {
//!     let mut event = ActivationEvent::new();
//!     ctl.activate(&mut event, el, timers);
//!     if !event.default_prevented() {
//!         el.run_default_action();
//!     }
//! }
//! ```

use crate::id::{ElementId, TimerId};
use std::time::Duration;

/// The bound element as seen by the controller.
pub trait PresentationSurface {
    /// Current label (the element's content).
    fn label(&self) -> &str;

    fn set_label(&mut self, label: &str);

    /// Raw class attribute, `None` when the element has none.
    fn class_attribute(&self) -> Option<&str>;

    /// Add class tokens. Tokens already present must not be duplicated.
    fn add_classes(&mut self, classes: &[String]);

    /// Remove class tokens. Tokens not present are ignored.
    fn remove_classes(&mut self, classes: &[String]);

    /// Drop visual focus from the element.
    fn blur(&mut self);
}

/// Which controller timer a handle belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TimerKind {
    /// The once-per-second countdown tick.
    Tick,
    /// The one-shot timer that ends the cooldown phase.
    CooldownExpiry,
}

/// One-shot timer source.
pub trait Scheduler {
    /// Arm a one-shot timer that fires `delay` from now for `element`.
    fn schedule(&mut self, element: ElementId, kind: TimerKind, delay: Duration) -> TimerId;

    /// Disarm a timer. Cancelling an unknown or already fired timer is a no-op.
    fn cancel(&mut self, timer: TimerId);
}

/// A click-like activation routed into a controller.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ActivationEvent {
    default_prevented: bool,
    propagation_stopped: bool,
}

impl ActivationEvent {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    pub fn stop_propagation(&mut self) {
        self.propagation_stopped = true;
    }

    pub fn default_prevented(&self) -> bool {
        self.default_prevented
    }

    pub fn propagation_stopped(&self) -> bool {
        self.propagation_stopped
    }
}
