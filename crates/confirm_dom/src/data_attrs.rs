//! Element-level options read from `data-*` attributes.
//!
//! ```text
//! <button data-toggle="double-confirm"
//!         data-countdown="5"
//!         data-countdown-css="disabled waiting"
//!         data-format="Sure? ##counterp##">Delete</button>
//! ```

use crate::element::Element;
use confirm_core::{OptionKey, OptionValue, Options};

const LOG_TARGET: &str = "double_confirm.page";

pub const DATA_PREFIX: &str = "data-";

/// Marker attribute for the declarative trigger.
pub const TOGGLE_ATTR: &str = "data-toggle";
pub const TOGGLE_VALUE: &str = "double-confirm";

/// Whether clicks on `element` are routed into a controller without explicit binding.
pub fn is_declarative_trigger(element: &Element) -> bool {
    element
        .attr(TOGGLE_ATTR)
        .is_some_and(|v| v.trim().eq_ignore_ascii_case(TOGGLE_VALUE))
}

/// Collect options from the element's data attributes.
///
/// Unknown data attributes are not options and are ignored. Hook keys cannot
/// be expressed as attribute text and are skipped.
pub fn element_options(element: &Element) -> Options {
    let mut options = Options::new();

    for (name, value) in element.attributes() {
        let Some(key) = strip_prefix_ignore_case(name, DATA_PREFIX) else {
            continue;
        };
        let Ok(key) = key.parse::<OptionKey>() else {
            continue;
        };
        if key.is_hook() {
            log::debug!(target: LOG_TARGET, "{}: ignoring hook attribute {name}", element.id());
            continue;
        }

        let value = OptionValue::Text(value.clone().unwrap_or_default());
        if let Err(err) = options.set(key, value) {
            log::debug!(
                target: LOG_TARGET,
                "{}: ignoring attribute {name}: {err}",
                element.id()
            );
        }
    }

    options
}

fn strip_prefix_ignore_case<'a>(s: &'a str, prefix: &str) -> Option<&'a str> {
    let head = s.get(..prefix.len())?;
    head.eq_ignore_ascii_case(prefix)
        .then(|| &s[prefix.len()..])
}
