//! Registry of controllers keyed by element, plus the defaults new
//! controllers are resolved from.

use crate::config::{ConfigError, ConfirmConfig, OptionKey, OptionValue, Options};
use crate::controller::ConfirmationController;
use crate::id::ElementId;
use crate::traits::Scheduler;
use std::collections::HashMap;

/// Central store of controller instances.
///
/// Controllers are created on first use and live until [`dispose`] is called
/// for their element.
///
/// # Example
///
/// ```
/// use confirm_core::{ControllerRegistry, ElementId, Options, Count};
///
/// let mut registry = ControllerRegistry::new();
/// registry.set_defaults(&Options::new().countdown(5));
///
/// let id = ElementId::from_raw(1);
/// let ctl = registry.ensure_bound(id, Options::new, &Options::new());
/// assert_eq!(ctl.config().countdown, Count::Whole(5));
/// ```
///
/// [`dispose`]: ControllerRegistry::dispose
#[derive(Debug, Default)]
pub struct ControllerRegistry {
    defaults: ConfirmConfig,
    controllers: HashMap<ElementId, ConfirmationController>,
}

impl ControllerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_defaults(defaults: ConfirmConfig) -> Self {
        Self {
            defaults,
            controllers: HashMap::new(),
        }
    }

    pub fn defaults(&self) -> &ConfirmConfig {
        &self.defaults
    }

    /// Merge `options` into the defaults used by controllers created from now on.
    pub fn set_defaults(&mut self, options: &Options) {
        self.defaults.apply(options);
    }

    /// Set one default field by name.
    pub fn set_default(&mut self, key: &str, value: OptionValue) -> Result<(), ConfigError> {
        let key: OptionKey = key.parse()?;
        let mut options = Options::new();
        options.set(key, value)?;
        self.defaults.apply(&options);
        Ok(())
    }

    pub fn contains(&self, id: ElementId) -> bool {
        self.controllers.contains_key(&id)
    }

    pub fn get(&self, id: ElementId) -> Option<&ConfirmationController> {
        self.controllers.get(&id)
    }

    pub fn get_mut(&mut self, id: ElementId) -> Option<&mut ConfirmationController> {
        self.controllers.get_mut(&id)
    }

    pub fn len(&self) -> usize {
        self.controllers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.controllers.is_empty()
    }

    /// Return the controller for `id`, creating it if missing.
    ///
    /// `element_options` is only evaluated on creation. An existing controller
    /// is returned unchanged, whatever `call` says.
    pub fn ensure_bound(
        &mut self,
        id: ElementId,
        element_options: impl FnOnce() -> Options,
        call: &Options,
    ) -> &mut ConfirmationController {
        let defaults = &self.defaults;
        self.controllers.entry(id).or_insert_with(|| {
            let element = element_options();
            ConfirmationController::new(id, ConfirmConfig::resolve(defaults, &element, call))
        })
    }

    /// Remove the controller for `id`, cancelling its pending timer.
    pub fn dispose<T: Scheduler + ?Sized>(&mut self, id: ElementId, timers: &mut T) -> bool {
        match self.controllers.remove(&id) {
            Some(mut controller) => {
                controller.dispose(timers);
                true
            }
            None => false,
        }
    }
}
