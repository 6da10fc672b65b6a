//! Label templates and placeholder expansion.
//!
//! A template is either a literal string or a callable producing another
//! template. Callables are resolved lazily against a [`FormatContext`] until a
//! literal is reached, with a bounded number of steps.

use crate::controller::Phase;
use crate::count::Count;
use crate::id::ElementId;
use std::fmt;
use std::rc::Rc;

/// Replaced with the label captured at the start of the cycle.
pub const ORIGINAL_PLACEHOLDER: &str = "##original##";
/// Replaced with the raw remaining count.
pub const COUNTER_PLACEHOLDER: &str = "##counter##";
/// Replaced with `(N)` while N > 0, otherwise with nothing.
pub const COUNTER_PAREN_PLACEHOLDER: &str = "##counterp##";

pub const DEFAULT_FORMAT: &str = "Really ##original##? ##counterp##";

/// Maximum number of callable invocations while resolving one template.
pub const MAX_TEMPLATE_DEPTH: usize = 16;

/// Read-only view of a controller handed to computed templates.
#[derive(Clone, Copy, Debug)]
pub struct FormatContext<'a> {
    pub element: ElementId,
    pub phase: Phase,
    pub original: &'a str,
    /// `None` while the controller is not armed.
    pub remaining: Option<Count>,
}

pub type TemplateFn = dyn Fn(&FormatContext<'_>) -> Template;

#[derive(Clone)]
pub enum Template {
    Literal(String),
    Computed(Rc<TemplateFn>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateError {
    TooDeep { depth: usize },
}

impl fmt::Display for TemplateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TemplateError::TooDeep { depth } => {
                write!(f, "template did not resolve to a literal after {depth} steps")
            }
        }
    }
}

impl std::error::Error for TemplateError {}

impl Template {
    pub fn literal(s: impl Into<String>) -> Self {
        Template::Literal(s.into())
    }

    pub fn computed(f: impl Fn(&FormatContext<'_>) -> Template + 'static) -> Self {
        Template::Computed(Rc::new(f))
    }

    /// Resolve callables until a literal template string is produced.
    pub fn resolve(&self, ctx: &FormatContext<'_>) -> Result<String, TemplateError> {
        let mut next = match self {
            Template::Literal(s) => return Ok(s.clone()),
            Template::Computed(f) => f(ctx),
        };

        for _ in 1..MAX_TEMPLATE_DEPTH {
            match next {
                Template::Literal(s) => return Ok(s),
                Template::Computed(f) => next = f(ctx),
            }
        }

        match next {
            Template::Literal(s) => Ok(s),
            Template::Computed(_) => Err(TemplateError::TooDeep {
                depth: MAX_TEMPLATE_DEPTH,
            }),
        }
    }
}

impl Default for Template {
    fn default() -> Self {
        Template::Literal(DEFAULT_FORMAT.to_string())
    }
}

impl From<&str> for Template {
    fn from(s: &str) -> Self {
        Template::Literal(s.to_string())
    }
}

impl From<String> for Template {
    fn from(s: String) -> Self {
        Template::Literal(s)
    }
}

impl fmt::Debug for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Template::Literal(s) => f.debug_tuple("Literal").field(s).finish(),
            Template::Computed(_) => f.write_str("Computed(..)"),
        }
    }
}

/// Substitute the placeholders of a literal template.
///
/// Only the first occurrence of each placeholder is replaced, in the order
/// original, counter, parenthesized counter.
pub fn expand(template: &str, ctx: &FormatContext<'_>) -> String {
    let counter = ctx.remaining.map(|c| c.to_string()).unwrap_or_default();
    let counter_paren = match ctx.remaining {
        Some(c) if c.is_positive() => format!("({c})"),
        _ => String::new(),
    };

    template
        .replacen(ORIGINAL_PLACEHOLDER, ctx.original, 1)
        .replacen(COUNTER_PLACEHOLDER, &counter, 1)
        .replacen(COUNTER_PAREN_PLACEHOLDER, &counter_paren, 1)
}
