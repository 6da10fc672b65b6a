//! Single-threaded event loop tying the document, the controllers and the
//! timer queue together.
//!
//! Lifecycle policy:
//! - Controllers are created on the first click (declarative trigger), the
//!   first method call, or an explicit [`Page::bind`].
//! - Removing or replacing an element disposes its controller and cancels
//!   its timer. The document is only reachable mutably element by element,
//!   so every structural change goes through the page.
//! - Default changes only reach controllers created afterwards.

use crate::data_attrs::{element_options, is_declarative_trigger};
use crate::document::Document;
use crate::element::Element;
use confirm_core::{
    ActivationEvent, ConfigError, ConfirmationController, ControllerRegistry, DispatchError,
    DispatchOutcome, ElementId, Method, OptionValue, Options, TimerQueue,
};
use std::time::Duration;

const LOG_TARGET: &str = "double_confirm.page";

/// What happened to a click after routing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClickOutcome {
    /// The element's default action should run.
    Proceeded,
    /// A controller swallowed the click.
    Suppressed,
}

#[derive(Debug, Default)]
pub struct Page {
    document: Document,
    registry: ControllerRegistry,
    timers: TimerQueue,
}

impl Page {
    pub fn new(document: Document) -> Self {
        Self {
            document,
            registry: ControllerRegistry::new(),
            timers: TimerQueue::new(),
        }
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn element(&self, id: ElementId) -> Option<&Element> {
        self.document.get(id)
    }

    pub fn element_mut(&mut self, id: ElementId) -> Option<&mut Element> {
        self.document.get_mut(id)
    }

    pub fn allocate_id(&mut self) -> ElementId {
        self.document.allocate_id()
    }

    /// Add an element, returning the one it replaced. A replaced element's
    /// controller is disposed; the newcomer starts unbound.
    pub fn insert_element(&mut self, element: Element) -> Option<Element> {
        let id = element.id();
        if self.registry.dispose(id, &mut self.timers) {
            log::debug!(target: LOG_TARGET, "{id}: replaced, controller disposed");
        }
        self.document.insert(element)
    }

    pub fn controller(&self, id: ElementId) -> Option<&ConfirmationController> {
        self.registry.get(id)
    }

    pub fn registry(&self) -> &ControllerRegistry {
        &self.registry
    }

    /// Current virtual time since the page was created.
    pub fn now(&self) -> Duration {
        self.timers.now()
    }

    pub fn armed_timers(&self) -> usize {
        self.timers.armed_len()
    }

    pub fn set_defaults(&mut self, options: &Options) {
        self.registry.set_defaults(options);
    }

    pub fn set_default(&mut self, key: &str, value: OptionValue) -> Result<(), ConfigError> {
        self.registry.set_default(key, value)
    }

    /// Attach a controller to `id`. Binding an already bound element keeps
    /// the existing controller and ignores `options`.
    pub fn bind(&mut self, id: ElementId, options: &Options) -> Result<(), DispatchError> {
        let element = self
            .document
            .get(id)
            .ok_or(DispatchError::UnknownElement(id))?;

        if !self.registry.contains(id) {
            log::debug!(target: LOG_TARGET, "{id}: bound");
        }
        self.registry
            .ensure_bound(id, || element_options(element), options);
        Ok(())
    }

    /// Call a controller method by name, binding the element first if needed.
    pub fn call(
        &mut self,
        id: ElementId,
        method: &str,
        args: &[OptionValue],
    ) -> Result<DispatchOutcome, DispatchError> {
        let method: Method = method.parse()?;
        let element = self
            .document
            .get_mut(id)
            .ok_or(DispatchError::UnknownElement(id))?;

        log::debug!(target: LOG_TARGET, "{id}: call {method}");
        let controller = self
            .registry
            .ensure_bound(id, || element_options(element), &Options::new());
        controller.invoke(method, args, element, &mut self.timers)
    }

    /// Deliver a click to `id`.
    ///
    /// Elements without a controller and without the declarative marker are
    /// not ours: their clicks always proceed.
    pub fn click(&mut self, id: ElementId) -> ClickOutcome {
        let Some(element) = self.document.get_mut(id) else {
            return ClickOutcome::Proceeded;
        };

        let controller = if self.registry.contains(id) {
            self.registry.get_mut(id)
        } else if is_declarative_trigger(element) {
            log::debug!(target: LOG_TARGET, "{id}: bound from markup");
            Some(
                self.registry
                    .ensure_bound(id, || element_options(element), &Options::new()),
            )
        } else {
            None
        };
        let Some(controller) = controller else {
            return ClickOutcome::Proceeded;
        };

        let mut event = ActivationEvent::new();
        controller.activate(&mut event, element, &mut self.timers);
        if event.default_prevented() {
            ClickOutcome::Suppressed
        } else {
            ClickOutcome::Proceeded
        }
    }

    /// Advance virtual time by `by`, firing every timer that falls due.
    ///
    /// Returns the number of timer firings delivered.
    pub fn advance(&mut self, by: Duration) -> usize {
        let until = self.timers.now().saturating_add(by);
        let mut fired = 0;

        while let Some(timer) = self.timers.pop_due(until) {
            if let Some(controller) = self.registry.get_mut(timer.element)
                && let Some(element) = self.document.get_mut(timer.element)
            {
                controller.on_timer(timer.id, element, &mut self.timers);
                fired += 1;
            }
        }

        self.timers.advance_to(until);
        fired
    }

    /// Fire timers until none are armed. Every cycle ends in idle, so this
    /// terminates.
    pub fn run_until_idle(&mut self) -> usize {
        let mut fired = 0;
        while let Some(deadline) = self.timers.next_deadline() {
            let by = deadline.saturating_sub(self.timers.now());
            fired += self.advance(by);
        }
        fired
    }

    /// Remove an element and dispose of its controller.
    pub fn remove_element(&mut self, id: ElementId) -> Option<Element> {
        if self.registry.dispose(id, &mut self.timers) {
            log::debug!(target: LOG_TARGET, "{id}: disposed");
        }
        self.document.remove(id)
    }
}
