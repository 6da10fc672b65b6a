//! # confirm_core
//!
//! UI-agnostic state layer for double-confirm controls: an element that must
//! be activated once to arm, waits out a countdown, and then lets the next
//! activation through during a cooldown window before re-arming.
//!
//! This crate provides:
//! - [`ConfirmationController`]: the per-element state machine
//! - [`ControllerRegistry`]: controllers keyed by [`ElementId`], plus defaults
//! - [`ConfirmConfig`] / [`Options`]: layered configuration
//! - [`Template`]: label templates, literal or computed
//! - [`TimerQueue`]: a virtual-clock [`Scheduler`]
//!
//! ## Design Principles
//!
//! Nothing here knows about documents, elements or wall-clock time. The
//! controller talks to a [`PresentationSurface`] and a [`Scheduler`], both
//! supplied by the integration layer, so the whole state machine can be
//! driven and tested deterministically.
//!
//! ## Integration
//!
//! ```ignore
//! impl PresentationSurface for MyButton { /* label, classes, blur */ }
//!
//! let ctl = registry.ensure_bound(id, || options_from_attributes(&button), &Options::new());
//! let mut event = ActivationEvent::new();
//! ctl.activate(&mut event, &mut button, &mut timers);
//! ```

mod classes;
mod config;
mod controller;
mod count;
mod dispatch;
mod hooks;
mod id;
mod registry;
mod template;
mod timer;
mod traits;

#[cfg(test)]
mod test_utils;

pub use classes::{current_classes, missing_classes, parse_class_list};
pub use config::{
    ConfigError, ConfirmConfig, DEFAULT_COOLDOWN, DEFAULT_COOLDOWN_CSS, DEFAULT_COUNTDOWN,
    DEFAULT_COUNTDOWN_CSS, OptionKey, OptionValue, Options,
};
pub use controller::{ConfirmationController, Phase, TICK_INTERVAL};
pub use count::Count;
pub use dispatch::{DispatchError, DispatchOutcome, Method};
pub use hooks::{Hook, HookContext};
pub use id::{ElementId, TimerId};
pub use registry::ControllerRegistry;
pub use template::{
    COUNTER_PAREN_PLACEHOLDER, COUNTER_PLACEHOLDER, DEFAULT_FORMAT, FormatContext,
    MAX_TEMPLATE_DEPTH, ORIGINAL_PLACEHOLDER, Template, TemplateError, expand,
};
pub use timer::{FiredTimer, TimerQueue};
pub use traits::{ActivationEvent, PresentationSurface, Scheduler, TimerKind};
