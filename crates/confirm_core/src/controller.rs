//! The per-element confirmation state machine.
//!
//! ```text
//!            activate                 count reaches 0            cooldown expires
//!   Idle ───────────────▶ Countdown ───────────────────▶ Cooldown ───────────────▶ Idle
//!                          │  ▲ tick (1s)                  │
//!                          └──┘                            └─ activate: default action runs
//! ```
//!
//! Activations in `Idle` and `Countdown` are suppressed; only an activation
//! during `Cooldown` lets the element's default action through.
//!
//! A controller owns at most one pending timer. Scheduling a new one always
//! cancels the previous handle first, and a firing whose handle does not match
//! the pending one is ignored.

use crate::classes::{current_classes, missing_classes};
use crate::config::ConfirmConfig;
use crate::count::Count;
use crate::hooks::{Hook, HookContext};
use crate::id::{ElementId, TimerId};
use crate::template::{FormatContext, Template, expand};
use crate::traits::{ActivationEvent, PresentationSurface, Scheduler, TimerKind};
use std::time::Duration;

const LOG_TARGET: &str = "double_confirm.controller";

pub const TICK_INTERVAL: Duration = Duration::from_secs(1);

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Phase {
    #[default]
    Idle,
    Countdown,
    Cooldown,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct PendingTimer {
    id: TimerId,
    kind: TimerKind,
}

#[derive(Clone, Copy)]
enum HookSlot {
    Countdown,
    Cooldown,
    Reset,
}

#[derive(Debug)]
pub struct ConfirmationController {
    element: ElementId,
    config: ConfirmConfig,
    phase: Phase,
    /// `None` while not armed.
    remaining: Option<Count>,
    original_label: String,
    /// Countdown classes this controller added (and must remove).
    applied_countdown: Vec<String>,
    /// Cooldown classes this controller added (and must remove).
    applied_cooldown: Vec<String>,
    pending: Option<PendingTimer>,
}

impl ConfirmationController {
    pub fn new(element: ElementId, config: ConfirmConfig) -> Self {
        Self {
            element,
            config,
            phase: Phase::Idle,
            remaining: None,
            original_label: String::new(),
            applied_countdown: Vec::new(),
            applied_cooldown: Vec::new(),
            pending: None,
        }
    }

    pub fn element(&self) -> ElementId {
        self.element
    }

    pub fn config(&self) -> &ConfirmConfig {
        &self.config
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn remaining(&self) -> Option<Count> {
        self.remaining
    }

    pub fn original_label(&self) -> &str {
        &self.original_label
    }

    pub fn applied_countdown_classes(&self) -> &[String] {
        &self.applied_countdown
    }

    pub fn applied_cooldown_classes(&self) -> &[String] {
        &self.applied_cooldown
    }

    pub fn pending_timer(&self) -> Option<TimerId> {
        self.pending.map(|p| p.id)
    }

    /// Route an activation into the state machine.
    ///
    /// Suppresses the event in `Idle` (arming the controller) and in
    /// `Countdown` (swallowing it). In `Cooldown` the event is left untouched.
    pub fn activate<S, T>(&mut self, event: &mut ActivationEvent, surface: &mut S, timers: &mut T)
    where
        S: PresentationSurface + ?Sized,
        T: Scheduler + ?Sized,
    {
        match self.phase {
            Phase::Idle => {
                event.prevent_default();
                event.stop_propagation();
                self.start_countdown(surface, timers);
            }
            Phase::Countdown => {
                event.prevent_default();
                event.stop_propagation();
                log::trace!(
                    target: LOG_TARGET,
                    "{}: activation swallowed during countdown ({:?} left)",
                    self.element,
                    self.remaining
                );
            }
            Phase::Cooldown => {
                log::debug!(target: LOG_TARGET, "{}: confirmed", self.element);
            }
        }
    }

    /// Arm the controller: `Idle` → `Countdown`.
    ///
    /// Returns `false` (and does nothing) unless the controller is idle.
    /// With a zero or `NaN` countdown, `on_countdown` runs first and
    /// `on_cooldown` follows from the immediate cooldown.
    pub fn start_countdown<S, T>(&mut self, surface: &mut S, timers: &mut T) -> bool
    where
        S: PresentationSurface + ?Sized,
        T: Scheduler + ?Sized,
    {
        if self.phase != Phase::Idle {
            return false;
        }

        let current = current_classes(surface.class_attribute());
        self.applied_countdown = missing_classes(&self.config.countdown_classes, &current);
        self.original_label = surface.label().trim().to_string();
        self.remaining = Some(self.config.countdown);
        self.phase = Phase::Countdown;

        surface.add_classes(&self.applied_countdown);
        surface.blur();
        log::debug!(
            target: LOG_TARGET,
            "{}: countdown started ({}s) for {:?}",
            self.element,
            self.config.countdown,
            self.original_label
        );

        let armed = self.config.countdown.is_positive();
        if armed {
            self.tick(surface, timers);
        }

        if self.fire_hook(HookSlot::Countdown) {
            self.reset(surface, timers);
            return true;
        }

        // Zero-length and unparseable countdowns go straight to cooldown.
        if !armed {
            self.start_cooldown(surface, timers);
        }
        true
    }

    /// One countdown step: render the current count, decrement and reschedule,
    /// or enter cooldown once the count is exhausted.
    ///
    /// Returns `false` outside the countdown phase.
    pub fn tick<S, T>(&mut self, surface: &mut S, timers: &mut T) -> bool
    where
        S: PresentationSurface + ?Sized,
        T: Scheduler + ?Sized,
    {
        if self.phase != Phase::Countdown {
            return false;
        }

        let remaining = self.remaining.unwrap_or_default();
        if remaining.is_positive() {
            self.render(surface);
            self.remaining = Some(remaining.decremented());
            log::trace!(
                target: LOG_TARGET,
                "{}: tick, {} left",
                self.element,
                remaining.decremented()
            );
            self.schedule(TimerKind::Tick, TICK_INTERVAL, timers);
        } else {
            self.start_cooldown(surface, timers);
        }
        true
    }

    /// `Countdown` → `Cooldown`, skipping any remaining ticks.
    ///
    /// Returns `false` outside the countdown phase.
    pub fn start_cooldown<S, T>(&mut self, surface: &mut S, timers: &mut T) -> bool
    where
        S: PresentationSurface + ?Sized,
        T: Scheduler + ?Sized,
    {
        if self.phase != Phase::Countdown {
            return false;
        }

        self.cancel_pending(timers);
        if self.remaining.is_some_and(Count::is_positive) {
            self.remaining = Some(Count::Whole(0));
        }
        self.phase = Phase::Cooldown;

        self.render(surface);
        let applied = std::mem::take(&mut self.applied_countdown);
        surface.remove_classes(&applied);

        let current = current_classes(surface.class_attribute());
        self.applied_cooldown = missing_classes(&self.config.cooldown_classes, &current);
        surface.add_classes(&self.applied_cooldown);

        let delay = self.config.cooldown.as_seconds();
        self.schedule(TimerKind::CooldownExpiry, delay, timers);
        log::debug!(
            target: LOG_TARGET,
            "{}: cooldown started ({}s)",
            self.element,
            self.config.cooldown
        );

        if self.fire_hook(HookSlot::Cooldown) {
            self.reset(surface, timers);
        }
        true
    }

    /// Return to `Idle`: restore the original label and remove every class
    /// this controller added.
    ///
    /// Cancels any pending timer. Returns `false` if already idle.
    pub fn reset<S, T>(&mut self, surface: &mut S, timers: &mut T) -> bool
    where
        S: PresentationSurface + ?Sized,
        T: Scheduler + ?Sized,
    {
        if self.phase == Phase::Idle {
            return false;
        }

        self.cancel_pending(timers);
        surface.set_label(&self.original_label);

        let countdown = std::mem::take(&mut self.applied_countdown);
        let cooldown = std::mem::take(&mut self.applied_cooldown);
        surface.remove_classes(&countdown);
        surface.remove_classes(&cooldown);

        self.remaining = None;
        self.phase = Phase::Idle;
        log::debug!(target: LOG_TARGET, "{}: reset", self.element);

        // A reset request from on_reset has nothing left to do.
        let _ = self.fire_hook(HookSlot::Reset);
        true
    }

    /// Deliver a timer firing.
    ///
    /// Firings for anything but the currently pending handle are stale and
    /// ignored; returns whether the firing was consumed.
    pub fn on_timer<S, T>(&mut self, timer: TimerId, surface: &mut S, timers: &mut T) -> bool
    where
        S: PresentationSurface + ?Sized,
        T: Scheduler + ?Sized,
    {
        let Some(pending) = self.pending.filter(|p| p.id == timer) else {
            log::trace!(
                target: LOG_TARGET,
                "{}: ignoring stale timer {timer:?}",
                self.element
            );
            return false;
        };
        self.pending = None;

        match pending.kind {
            TimerKind::Tick => self.tick(surface, timers),
            TimerKind::CooldownExpiry => self.reset(surface, timers),
        };
        true
    }

    /// Drop the pending timer; used when the element goes away.
    pub fn dispose<T: Scheduler + ?Sized>(&mut self, timers: &mut T) {
        self.cancel_pending(timers);
    }

    /// Render the configured template for the current state.
    pub fn format(&self) -> String {
        self.format_with(&self.config.format)
    }

    /// Render `template` for the current state.
    ///
    /// A template that never resolves to a literal renders the original label.
    pub fn format_with(&self, template: &Template) -> String {
        let ctx = self.format_context();
        match template.resolve(&ctx) {
            Ok(literal) => expand(&literal, &ctx),
            Err(err) => {
                log::warn!(target: LOG_TARGET, "{}: {err}", self.element);
                self.original_label.clone()
            }
        }
    }

    pub fn format_context(&self) -> FormatContext<'_> {
        FormatContext {
            element: self.element,
            phase: self.phase,
            original: &self.original_label,
            remaining: self.remaining,
        }
    }

    fn render<S: PresentationSurface + ?Sized>(&self, surface: &mut S) {
        let label = self.format();
        surface.set_label(&label);
    }

    fn schedule<T: Scheduler + ?Sized>(&mut self, kind: TimerKind, delay: Duration, timers: &mut T) {
        self.cancel_pending(timers);
        let id = timers.schedule(self.element, kind, delay);
        self.pending = Some(PendingTimer { id, kind });
    }

    fn cancel_pending<T: Scheduler + ?Sized>(&mut self, timers: &mut T) {
        if let Some(pending) = self.pending.take() {
            timers.cancel(pending.id);
        }
    }

    /// Invoke a hook if configured; returns whether it requested a reset.
    fn fire_hook(&self, slot: HookSlot) -> bool {
        let hook: Option<&Hook> = match slot {
            HookSlot::Countdown => self.config.on_countdown.as_ref(),
            HookSlot::Cooldown => self.config.on_cooldown.as_ref(),
            HookSlot::Reset => self.config.on_reset.as_ref(),
        };
        let Some(hook) = hook else {
            return false;
        };

        let mut ctx = HookContext::new(
            self.element,
            self.phase,
            &self.original_label,
            self.remaining,
        );
        hook.call(&mut ctx);
        ctx.reset_requested()
    }
}
