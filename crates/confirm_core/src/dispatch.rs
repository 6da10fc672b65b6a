//! String-named method calls on a controller.

use crate::config::OptionValue;
use crate::controller::ConfirmationController;
use crate::id::ElementId;
use crate::template::Template;
use crate::traits::{ActivationEvent, PresentationSurface, Scheduler};
use std::fmt;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Method {
    /// Deliver a synthetic activation.
    Activate,
    /// Arm without an activation event.
    Countdown,
    /// Skip the remaining countdown.
    Cooldown,
    /// Run one countdown step now.
    Tick,
    /// Force the controller back to idle.
    Reset,
    /// Render the label; takes an optional template argument.
    Format,
}

impl Method {
    pub fn as_str(self) -> &'static str {
        match self {
            Method::Activate => "activate",
            Method::Countdown => "countdown",
            Method::Cooldown => "cooldown",
            Method::Tick => "tick",
            Method::Reset => "reset",
            Method::Format => "format",
        }
    }
}

impl FromStr for Method {
    type Err = DispatchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "activate" => Ok(Method::Activate),
            "countdown" => Ok(Method::Countdown),
            "cooldown" => Ok(Method::Cooldown),
            "tick" => Ok(Method::Tick),
            "reset" => Ok(Method::Reset),
            "format" => Ok(Method::Format),
            _ => Err(DispatchError::UnknownMethod(s.to_string())),
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// The synthetic event after the controller handled it.
    Activated(ActivationEvent),
    /// Whether the call changed the controller's phase or count.
    Applied(bool),
    Label(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchError {
    UnknownMethod(String),
    InvalidArgument {
        method: Method,
        reason: &'static str,
    },
    UnknownElement(ElementId),
}

impl fmt::Display for DispatchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DispatchError::UnknownMethod(name) => write!(f, "unknown method: {name:?}"),
            DispatchError::InvalidArgument { method, reason } => {
                write!(f, "invalid argument for {method}: {reason}")
            }
            DispatchError::UnknownElement(id) => write!(f, "no element {id}"),
        }
    }
}

impl std::error::Error for DispatchError {}

impl ConfirmationController {
    /// Invoke a public operation by method, forwarding positional arguments.
    pub fn invoke<S, T>(
        &mut self,
        method: Method,
        args: &[OptionValue],
        surface: &mut S,
        timers: &mut T,
    ) -> Result<DispatchOutcome, DispatchError>
    where
        S: PresentationSurface + ?Sized,
        T: Scheduler + ?Sized,
    {
        if method != Method::Format && !args.is_empty() {
            return Err(DispatchError::InvalidArgument {
                method,
                reason: "takes no arguments",
            });
        }

        let outcome = match method {
            Method::Activate => {
                let mut event = ActivationEvent::new();
                self.activate(&mut event, surface, timers);
                DispatchOutcome::Activated(event)
            }
            Method::Countdown => DispatchOutcome::Applied(self.start_countdown(surface, timers)),
            Method::Cooldown => DispatchOutcome::Applied(self.start_cooldown(surface, timers)),
            Method::Tick => DispatchOutcome::Applied(self.tick(surface, timers)),
            Method::Reset => DispatchOutcome::Applied(self.reset(surface, timers)),
            Method::Format => match args {
                [] => DispatchOutcome::Label(self.format()),
                [OptionValue::Text(s)] => {
                    DispatchOutcome::Label(self.format_with(&Template::Literal(s.clone())))
                }
                [OptionValue::Template(t)] => DispatchOutcome::Label(self.format_with(t)),
                _ => {
                    return Err(DispatchError::InvalidArgument {
                        method,
                        reason: "expects at most one template",
                    });
                }
            },
        };
        Ok(outcome)
    }
}
