//! Time abstraction traits for platform-agnostic timing.
//!
//! Effects only need a monotonically non-decreasing millisecond clock. Plain
//! `u32`/`u64` millisecond counters (the usual `millis()` tick) implement
//! [`TimeInstant`] directly, with elapsed time computed by wrapping subtraction
//! so a counter overflow does not stall an animation.

/// Trait for abstracting time sources.
pub trait TimeSource<I: TimeInstant> {
    /// Returns the current time instant.
    fn now(&self) -> I;
}

/// Trait abstraction for duration types.
pub trait TimeDuration: Copy + PartialEq {
    /// Zero duration constant.
    const ZERO: Self;

    /// Converts duration to milliseconds.
    fn as_millis(&self) -> u64;

    /// Creates duration from milliseconds.
    fn from_millis(millis: u64) -> Self;
}

/// Trait abstraction for instant types.
pub trait TimeInstant: Copy {
    /// Duration type for this instant.
    type Duration: TimeDuration;

    /// Calculates duration since an earlier instant.
    ///
    /// Counter-based instants must wrap rather than saturate or panic, so that
    /// `later.duration_since(earlier)` stays correct across one overflow.
    fn duration_since(&self, earlier: Self) -> Self::Duration;
}

impl TimeDuration for u32 {
    const ZERO: Self = 0;

    #[inline]
    fn as_millis(&self) -> u64 {
        u64::from(*self)
    }

    /// Saturates at `u32::MAX` rather than wrapping to a shorter duration.
    #[inline]
    fn from_millis(millis: u64) -> Self {
        u32::try_from(millis).unwrap_or(u32::MAX)
    }
}

impl TimeInstant for u32 {
    type Duration = u32;

    #[inline]
    fn duration_since(&self, earlier: Self) -> Self::Duration {
        self.wrapping_sub(earlier)
    }
}

impl TimeDuration for u64 {
    const ZERO: Self = 0;

    #[inline]
    fn as_millis(&self) -> u64 {
        *self
    }

    #[inline]
    fn from_millis(millis: u64) -> Self {
        millis
    }
}

impl TimeInstant for u64 {
    type Duration = u64;

    #[inline]
    fn duration_since(&self, earlier: Self) -> Self::Duration {
        self.wrapping_sub(earlier)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn u32_elapsed_survives_counter_overflow() {
        let before = u32::MAX - 9;
        let after = 20u32;
        assert_eq!(after.duration_since(before), 30);
    }

    #[test]
    fn u64_elapsed_is_plain_difference() {
        assert_eq!(250u64.duration_since(100), 150);
        assert_eq!(5u64.duration_since(u64::MAX), 6);
    }

    #[test]
    fn duration_millis_conversions() {
        assert_eq!(<u32 as TimeDuration>::from_millis(100).as_millis(), 100);
        assert_eq!(<u64 as TimeDuration>::ZERO, 0);
    }

    #[test]
    fn oversized_u32_duration_saturates() {
        let millis = u64::from(u32::MAX) + 100;
        assert_eq!(<u32 as TimeDuration>::from_millis(millis), u32::MAX);
    }
}
