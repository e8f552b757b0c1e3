//! Timestamp generation for Binance signed requests.
//!
//! Every signed request carries exactly one `timestamp` parameter (epoch
//! milliseconds). The venue rejects requests whose timestamp falls outside
//! its receive window, so it is taken at dispatch time.

use std::time::{SystemTime, UNIX_EPOCH};

/// Trait for providing request timestamps.
pub trait TimestampProvider: Send + Sync {
    /// Current time in milliseconds since the UNIX epoch.
    fn now_millis(&self) -> u64;
}

/// Timestamp provider backed by the system clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl TimestampProvider for SystemClock {
    fn now_millis(&self) -> u64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_millis() as u64
    }
}

/// Timestamp provider that always returns the same value.
///
/// Useful for reproducing a signature in tests.
#[derive(Debug, Clone, Copy)]
pub struct FixedTimestamp(pub u64);

impl TimestampProvider for FixedTimestamp {
    fn now_millis(&self) -> u64 {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_clock_is_epoch_millis() {
        let now = SystemClock.now_millis();
        // 2020-01-01T00:00:00Z in milliseconds
        assert!(now > 1_577_836_800_000);
        // Seconds would be 1000x smaller.
        assert!(now > 1_000_000_000_000);
    }

    #[test]
    fn test_fixed_timestamp() {
        let provider = FixedTimestamp(1_499_827_319_559);
        assert_eq!(provider.now_millis(), 1_499_827_319_559);
        assert_eq!(provider.now_millis(), 1_499_827_319_559);
    }
}
