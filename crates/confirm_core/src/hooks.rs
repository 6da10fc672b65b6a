//! Lifecycle hooks invoked on phase transitions.

use crate::controller::Phase;
use crate::count::Count;
use crate::id::ElementId;
use std::fmt;
use std::rc::Rc;

/// What a hook sees of its controller.
///
/// Hooks cannot borrow the controller mutably while it is mid-transition;
/// instead they may ask for a reset, which the controller performs as soon as
/// the hook returns.
#[derive(Debug)]
pub struct HookContext<'a> {
    element: ElementId,
    phase: Phase,
    original: &'a str,
    remaining: Option<Count>,
    reset_requested: bool,
}

impl<'a> HookContext<'a> {
    pub(crate) fn new(
        element: ElementId,
        phase: Phase,
        original: &'a str,
        remaining: Option<Count>,
    ) -> Self {
        Self {
            element,
            phase,
            original,
            remaining,
            reset_requested: false,
        }
    }

    pub fn element(&self) -> ElementId {
        self.element
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Label captured when the current cycle started.
    pub fn original_label(&self) -> &str {
        self.original
    }

    pub fn remaining(&self) -> Option<Count> {
        self.remaining
    }

    /// Ask the controller to return to idle once this hook returns.
    ///
    /// Ignored for `on_reset`, which already runs in the idle phase.
    pub fn request_reset(&mut self) {
        self.reset_requested = true;
    }

    pub(crate) fn reset_requested(&self) -> bool {
        self.reset_requested
    }
}

pub type HookFn = dyn Fn(&mut HookContext<'_>);

#[derive(Clone)]
pub struct Hook(Rc<HookFn>);

impl Hook {
    pub fn new(f: impl Fn(&mut HookContext<'_>) + 'static) -> Self {
        Hook(Rc::new(f))
    }

    pub(crate) fn call(&self, ctx: &mut HookContext<'_>) {
        (self.0)(ctx)
    }
}

impl fmt::Debug for Hook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Hook(..)")
    }
}
