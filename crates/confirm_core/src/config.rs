//! Controller configuration and its resolution from layered options.
//!
//! Layers, lowest precedence first:
//! 1. built-in defaults ([`ConfirmConfig::default`])
//! 2. registry-wide defaults, changed through [`Options`] or single keys
//! 3. element-level options (data attributes)
//! 4. call-site options
//!
//! A resolved [`ConfirmConfig`] is immutable for the lifetime of its
//! controller; changing the defaults later only affects new controllers.

use crate::classes::parse_class_list;
use crate::count::Count;
use crate::hooks::Hook;
use crate::template::Template;
use std::fmt;
use std::str::FromStr;

pub const DEFAULT_COUNTDOWN: u32 = 2;
pub const DEFAULT_COUNTDOWN_CSS: &str = "disabled";
pub const DEFAULT_COOLDOWN: u32 = 10;
pub const DEFAULT_COOLDOWN_CSS: &str = "";

#[derive(Clone, Debug)]
pub struct ConfirmConfig {
    pub format: Template,
    pub countdown: Count,
    pub countdown_classes: Vec<String>,
    pub cooldown: Count,
    pub cooldown_classes: Vec<String>,
    pub on_countdown: Option<Hook>,
    pub on_cooldown: Option<Hook>,
    pub on_reset: Option<Hook>,
}

impl Default for ConfirmConfig {
    fn default() -> Self {
        Self {
            format: Template::default(),
            countdown: Count::Whole(DEFAULT_COUNTDOWN),
            countdown_classes: parse_class_list(DEFAULT_COUNTDOWN_CSS),
            cooldown: Count::Whole(DEFAULT_COOLDOWN),
            cooldown_classes: parse_class_list(DEFAULT_COOLDOWN_CSS),
            on_countdown: None,
            on_cooldown: None,
            on_reset: None,
        }
    }
}

impl ConfirmConfig {
    /// Merge element and call options over `defaults`.
    pub fn resolve(defaults: &ConfirmConfig, element: &Options, call: &Options) -> ConfirmConfig {
        let mut config = defaults.clone();
        config.apply(element);
        config.apply(call);
        config
    }

    /// Overwrite every field that `options` sets.
    pub fn apply(&mut self, options: &Options) {
        if let Some(format) = &options.format {
            self.format = format.clone();
        }
        if let Some(countdown) = options.countdown {
            self.countdown = countdown;
        }
        if let Some(css) = &options.countdown_css {
            self.countdown_classes = parse_class_list(css);
        }
        if let Some(cooldown) = options.cooldown {
            self.cooldown = cooldown;
        }
        if let Some(css) = &options.cooldown_css {
            self.cooldown_classes = parse_class_list(css);
        }
        if let Some(hook) = &options.on_countdown {
            self.on_countdown.clone_from(hook);
        }
        if let Some(hook) = &options.on_cooldown {
            self.on_cooldown.clone_from(hook);
        }
        if let Some(hook) = &options.on_reset {
            self.on_reset.clone_from(hook);
        }
    }
}

/// A partial configuration; unset fields inherit from the layer below.
///
/// Hook fields have three states: `None` inherits, `Some(Some(hook))`
/// installs a hook and `Some(None)` removes whatever the lower layers set.
#[derive(Clone, Debug, Default)]
pub struct Options {
    pub format: Option<Template>,
    pub countdown: Option<Count>,
    pub countdown_css: Option<String>,
    pub cooldown: Option<Count>,
    pub cooldown_css: Option<String>,
    pub on_countdown: Option<Option<Hook>>,
    pub on_cooldown: Option<Option<Hook>>,
    pub on_reset: Option<Option<Hook>>,
}

impl Options {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn format(mut self, format: impl Into<Template>) -> Self {
        self.format = Some(format.into());
        self
    }

    pub fn countdown(mut self, seconds: impl Into<Count>) -> Self {
        self.countdown = Some(seconds.into());
        self
    }

    pub fn countdown_css(mut self, classes: impl Into<String>) -> Self {
        self.countdown_css = Some(classes.into());
        self
    }

    pub fn cooldown(mut self, seconds: impl Into<Count>) -> Self {
        self.cooldown = Some(seconds.into());
        self
    }

    pub fn cooldown_css(mut self, classes: impl Into<String>) -> Self {
        self.cooldown_css = Some(classes.into());
        self
    }

    pub fn on_countdown(mut self, hook: Hook) -> Self {
        self.on_countdown = Some(Some(hook));
        self
    }

    pub fn on_cooldown(mut self, hook: Hook) -> Self {
        self.on_cooldown = Some(Some(hook));
        self
    }

    pub fn on_reset(mut self, hook: Hook) -> Self {
        self.on_reset = Some(Some(hook));
        self
    }

    pub fn without_on_countdown(mut self) -> Self {
        self.on_countdown = Some(None);
        self
    }

    pub fn without_on_cooldown(mut self) -> Self {
        self.on_cooldown = Some(None);
        self
    }

    pub fn without_on_reset(mut self) -> Self {
        self.on_reset = Some(None);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.format.is_none()
            && self.countdown.is_none()
            && self.countdown_css.is_none()
            && self.cooldown.is_none()
            && self.cooldown_css.is_none()
            && self.on_countdown.is_none()
            && self.on_cooldown.is_none()
            && self.on_reset.is_none()
    }

    /// Layer `other` on top of `self`; fields set in `other` win.
    pub fn merge(&mut self, other: &Options) {
        fn take<T: Clone>(dst: &mut Option<T>, src: &Option<T>) {
            if src.is_some() {
                dst.clone_from(src);
            }
        }

        take(&mut self.format, &other.format);
        take(&mut self.countdown, &other.countdown);
        take(&mut self.countdown_css, &other.countdown_css);
        take(&mut self.cooldown, &other.cooldown);
        take(&mut self.cooldown_css, &other.cooldown_css);
        take(&mut self.on_countdown, &other.on_countdown);
        take(&mut self.on_cooldown, &other.on_cooldown);
        take(&mut self.on_reset, &other.on_reset);
    }

    /// Set a single field from a loosely typed value.
    ///
    /// Counts accept numbers and strings (best-effort parsed), class lists
    /// accept strings and numbers, the format accepts strings and templates.
    /// A hook key given anything other than a hook disables that hook.
    pub fn set(&mut self, key: OptionKey, value: OptionValue) -> Result<(), ConfigError> {
        let mismatch = |expected: &'static str| ConfigError::TypeMismatch { key, expected };

        match key {
            OptionKey::Format => {
                self.format = Some(match value {
                    OptionValue::Text(s) => Template::Literal(s),
                    OptionValue::Template(t) => t,
                    _ => return Err(mismatch("a string or template")),
                });
            }
            OptionKey::Countdown | OptionKey::Cooldown => {
                let count = match value {
                    OptionValue::Number(n) => Count::from_i64(n),
                    OptionValue::Text(s) => Count::parse(&s),
                    _ => return Err(mismatch("a number")),
                };
                if key == OptionKey::Countdown {
                    self.countdown = Some(count);
                } else {
                    self.cooldown = Some(count);
                }
            }
            OptionKey::CountdownCss | OptionKey::CooldownCss => {
                let css = match value {
                    OptionValue::Text(s) => s,
                    OptionValue::Number(n) => n.to_string(),
                    _ => return Err(mismatch("a class list")),
                };
                if key == OptionKey::CountdownCss {
                    self.countdown_css = Some(css);
                } else {
                    self.cooldown_css = Some(css);
                }
            }
            OptionKey::OnCountdown | OptionKey::OnCooldown | OptionKey::OnReset => {
                let hook = match value {
                    OptionValue::Hook(hook) => Some(hook),
                    _ => None,
                };
                let slot = match key {
                    OptionKey::OnCountdown => &mut self.on_countdown,
                    OptionKey::OnCooldown => &mut self.on_cooldown,
                    _ => &mut self.on_reset,
                };
                *slot = Some(hook);
            }
        }
        Ok(())
    }
}

/// Name of a configuration field.
///
/// Parses camelCase (`countdownCss`), kebab-case (`countdown-css`) and
/// snake_case (`countdown_css`) spellings.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OptionKey {
    Format,
    Countdown,
    CountdownCss,
    Cooldown,
    CooldownCss,
    OnCountdown,
    OnCooldown,
    OnReset,
}

impl OptionKey {
    pub const ALL: [OptionKey; 8] = [
        OptionKey::Format,
        OptionKey::Countdown,
        OptionKey::CountdownCss,
        OptionKey::Cooldown,
        OptionKey::CooldownCss,
        OptionKey::OnCountdown,
        OptionKey::OnCooldown,
        OptionKey::OnReset,
    ];

    pub fn is_hook(self) -> bool {
        matches!(
            self,
            OptionKey::OnCountdown | OptionKey::OnCooldown | OptionKey::OnReset
        )
    }

    pub fn as_str(self) -> &'static str {
        match self {
            OptionKey::Format => "format",
            OptionKey::Countdown => "countdown",
            OptionKey::CountdownCss => "countdownCss",
            OptionKey::Cooldown => "cooldown",
            OptionKey::CooldownCss => "cooldownCss",
            OptionKey::OnCountdown => "onCountdown",
            OptionKey::OnCooldown => "onCooldown",
            OptionKey::OnReset => "onReset",
        }
    }
}

impl FromStr for OptionKey {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let folded: String = s
            .chars()
            .filter(|c| *c != '-' && *c != '_')
            .map(|c| c.to_ascii_lowercase())
            .collect();

        OptionKey::ALL
            .into_iter()
            .find(|key| key.as_str().eq_ignore_ascii_case(&folded))
            .ok_or_else(|| ConfigError::UnknownKey(s.to_string()))
    }
}

impl fmt::Display for OptionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A loosely typed option value, as accepted by the single-key setter and
/// forwarded as a positional dispatch argument.
#[derive(Clone, Debug)]
pub enum OptionValue {
    /// No value. Clears hook keys; rejected for every other key.
    Null,
    Text(String),
    Number(i64),
    Template(Template),
    Hook(Hook),
}

impl From<&str> for OptionValue {
    fn from(s: &str) -> Self {
        OptionValue::Text(s.to_string())
    }
}

impl From<String> for OptionValue {
    fn from(s: String) -> Self {
        OptionValue::Text(s)
    }
}

impl From<i64> for OptionValue {
    fn from(n: i64) -> Self {
        OptionValue::Number(n)
    }
}

impl From<Template> for OptionValue {
    fn from(t: Template) -> Self {
        OptionValue::Template(t)
    }
}

impl From<Hook> for OptionValue {
    fn from(h: Hook) -> Self {
        OptionValue::Hook(h)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    UnknownKey(String),
    TypeMismatch {
        key: OptionKey,
        expected: &'static str,
    },
    Parse {
        message: String,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::UnknownKey(key) => write!(f, "unknown option: {key:?}"),
            ConfigError::TypeMismatch { key, expected } => {
                write!(f, "option {key} expects {expected}")
            }
            ConfigError::Parse { message } => write!(f, "invalid defaults: {message}"),
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn built_in_defaults() {
        let c = ConfirmConfig::default();
        assert_eq!(c.countdown, Count::Whole(2));
        assert_eq!(c.cooldown, Count::Whole(10));
        assert_eq!(c.countdown_classes, vec!["disabled"]);
        assert!(c.cooldown_classes.is_empty());
        assert!(c.on_countdown.is_none() && c.on_cooldown.is_none() && c.on_reset.is_none());
        assert!(matches!(c.format, Template::Literal(ref s) if s == "Really ##original##? ##counterp##"));
    }

    #[test]
    fn call_options_beat_element_options_beat_defaults() {
        let defaults = ConfirmConfig::default();
        let element = Options::new().countdown(5).cooldown_css("armed");
        let call = Options::new().countdown(7);

        let c = ConfirmConfig::resolve(&defaults, &element, &call);
        assert_eq!(c.countdown, Count::Whole(7));
        assert_eq!(c.cooldown_classes, vec!["armed"]);
        assert_eq!(c.cooldown, Count::Whole(10));
    }

    #[test]
    fn empty_class_option_clears_classes() {
        let c = ConfirmConfig::resolve(
            &ConfirmConfig::default(),
            &Options::new().countdown_css(""),
            &Options::new(),
        );
        assert!(c.countdown_classes.is_empty());
    }

    #[test]
    fn merge_keeps_unset_fields() {
        let mut base = Options::new().countdown(3).format("A");
        base.merge(&Options::new().countdown(4));
        assert_eq!(base.countdown, Some(Count::Whole(4)));
        assert!(matches!(base.format, Some(Template::Literal(ref s)) if s == "A"));
    }

    #[test]
    fn key_spellings() {
        assert_eq!("countdownCss".parse::<OptionKey>(), Ok(OptionKey::CountdownCss));
        assert_eq!("countdown-css".parse::<OptionKey>(), Ok(OptionKey::CountdownCss));
        assert_eq!("cooldown_css".parse::<OptionKey>(), Ok(OptionKey::CooldownCss));
        assert_eq!("on-reset".parse::<OptionKey>(), Ok(OptionKey::OnReset));
        assert!(OptionKey::OnReset.is_hook() && !OptionKey::Format.is_hook());
        assert_eq!(
            "colour".parse::<OptionKey>(),
            Err(ConfigError::UnknownKey("colour".to_string()))
        );
    }

    #[test]
    fn set_coerces_counts() {
        let mut o = Options::new();
        o.set(OptionKey::Countdown, OptionValue::Text("4 seconds".into())).unwrap();
        o.set(OptionKey::Cooldown, OptionValue::Text("soon".into())).unwrap();
        assert_eq!(o.countdown, Some(Count::Whole(4)));
        assert_eq!(o.cooldown, Some(Count::NotANumber));

        o.set(OptionKey::Countdown, OptionValue::Number(-3)).unwrap();
        assert_eq!(o.countdown, Some(Count::Whole(0)));
    }

    #[test]
    fn non_callable_value_disables_hook() {
        let mut o = Options::new().on_reset(Hook::new(|_| {}));
        o.set(OptionKey::OnReset, "noop".into()).unwrap();
        assert!(matches!(o.on_reset, Some(None)));

        o.set(OptionKey::OnCooldown, OptionValue::Null).unwrap();
        assert!(matches!(o.on_cooldown, Some(None)));
        assert!(o.on_countdown.is_none());
    }

    #[test]
    fn null_is_rejected_for_plain_keys() {
        let mut o = Options::new();
        assert_eq!(
            o.set(OptionKey::Countdown, OptionValue::Null),
            Err(ConfigError::TypeMismatch {
                key: OptionKey::Countdown,
                expected: "a number"
            })
        );
        assert!(o.is_empty());
    }

    #[test]
    fn set_accepts_hooks() {
        let mut o = Options::new();
        o.set(OptionKey::OnCooldown, Hook::new(|_| {}).into()).unwrap();
        assert!(matches!(o.on_cooldown, Some(Some(_))));
        assert!(!o.is_empty());
    }

    #[test]
    fn cleared_hook_overrides_lower_layer() {
        let mut defaults = ConfirmConfig::default();
        defaults.apply(&Options::new().on_reset(Hook::new(|_| {})).on_cooldown(Hook::new(|_| {})));
        assert!(defaults.on_reset.is_some());

        let c = ConfirmConfig::resolve(&defaults, &Options::new(), &Options::new().without_on_reset());
        assert!(c.on_reset.is_none());
        assert!(c.on_cooldown.is_some());
    }

    #[test]
    fn merge_carries_hook_removal() {
        let mut base = Options::new().on_countdown(Hook::new(|_| {}));
        base.merge(&Options::new().without_on_countdown());
        assert!(matches!(base.on_countdown, Some(None)));

        base.merge(&Options::new());
        assert!(matches!(base.on_countdown, Some(None)));
    }
}
