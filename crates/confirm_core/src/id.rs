//! Generic, UI-agnostic identifiers.
//!
//! Element ids use a plain `u64` to avoid coupling to any DOM or
//! framework-specific identifier type. Integration layers can provide
//! `From` implementations to convert from their native ID types.

/// Opaque identifier for an element bound to a confirmation controller.
///
/// This is a lightweight, copyable handle. The actual value has no semantic
/// meaning within this crate; it's just a key into the
/// [`ControllerRegistry`](crate::ControllerRegistry).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ElementId(u64);

impl ElementId {
    /// Create an `ElementId` from a raw u64 value.
    #[inline]
    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    /// Get the underlying raw value.
    #[inline]
    pub const fn as_raw(self) -> u64 {
        self.0
    }
}

impl From<u64> for ElementId {
    #[inline]
    fn from(raw: u64) -> Self {
        Self::from_raw(raw)
    }
}

impl From<u32> for ElementId {
    #[inline]
    fn from(raw: u32) -> Self {
        Self::from_raw(raw as u64)
    }
}

impl From<ElementId> for u64 {
    #[inline]
    fn from(id: ElementId) -> Self {
        id.as_raw()
    }
}

impl std::fmt::Display for ElementId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Handle of a one-shot timer issued by a [`Scheduler`](crate::Scheduler).
///
/// Handles are never reused within one scheduler, so a stale handle can be
/// compared against the current pending one to detect late firings.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimerId(u64);

impl TimerId {
    #[inline]
    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    #[inline]
    pub const fn as_raw(self) -> u64 {
        self.0
    }
}
