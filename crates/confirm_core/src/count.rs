//! Second counts with best-effort integer parsing.
//!
//! Counts come from loosely typed sources (data attributes, TOML strings,
//! call-time options). Parsing takes the leading integer of the input the
//! way attribute readers usually do; input without any leading digits becomes
//! [`Count::NotANumber`], which renders as `NaN` and behaves as zero.

use std::fmt;
use std::time::Duration;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Count {
    Whole(u32),
    NotANumber,
}

impl Count {
    /// Parse the leading integer of `s`.
    ///
    /// Leading whitespace and a single sign are accepted, trailing garbage is
    /// ignored (`"3s"` is 3). Negative values clamp to 0 and values that do
    /// not fit in `u32` saturate.
    pub fn parse(s: &str) -> Self {
        let s = s.trim_start();
        let (negative, rest) = match s.as_bytes().first() {
            Some(b'-') => (true, &s[1..]),
            Some(b'+') => (false, &s[1..]),
            _ => (false, s),
        };

        let digits = rest.bytes().take_while(u8::is_ascii_digit).count();
        if digits == 0 {
            return Count::NotANumber;
        }
        if negative {
            return Count::Whole(0);
        }

        let mut value: u32 = 0;
        for b in rest[..digits].bytes() {
            value = value
                .saturating_mul(10)
                .saturating_add(u32::from(b - b'0'));
        }
        Count::Whole(value)
    }

    pub fn from_i64(n: i64) -> Self {
        Count::Whole(u32::try_from(n.max(0)).unwrap_or(u32::MAX))
    }

    /// Value used for arithmetic; `NaN` counts as zero.
    #[inline]
    pub fn get(self) -> u32 {
        match self {
            Count::Whole(n) => n,
            Count::NotANumber => 0,
        }
    }

    #[inline]
    pub fn is_positive(self) -> bool {
        self.get() > 0
    }

    /// One less, saturating at zero. `NaN` stays `NaN`.
    pub fn decremented(self) -> Self {
        match self {
            Count::Whole(n) => Count::Whole(n.saturating_sub(1)),
            Count::NotANumber => Count::NotANumber,
        }
    }

    pub fn as_seconds(self) -> Duration {
        Duration::from_secs(u64::from(self.get()))
    }
}

impl Default for Count {
    fn default() -> Self {
        Count::Whole(0)
    }
}

impl From<u32> for Count {
    fn from(n: u32) -> Self {
        Count::Whole(n)
    }
}

impl From<i32> for Count {
    fn from(n: i32) -> Self {
        Count::from_i64(i64::from(n))
    }
}

impl fmt::Display for Count {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Count::Whole(n) => write!(f, "{n}"),
            Count::NotANumber => f.write_str("NaN"),
        }
    }
}
