//! Cooldown clock arithmetic.
//! - a recipient is eligible iff now > locked_until (strict; exactly-equal is
//!   still locked)
//! - an absent lock reads as locked_until = 0, so any positive now is eligible
//! - a successful drip stamps locked_until = now + COOLDOWN_SECONDS

use crate::constants::COOLDOWN_SECONDS;
use crate::error::FaucetError;

/// True once the recipient's lock has elapsed.
pub fn is_unlocked(now_ts: i64, locked_until: i64) -> bool {
    now_ts > locked_until
}

/// Seconds until the recipient becomes eligible (0 if already eligible).
pub fn remaining_lock(now_ts: i64, locked_until: i64) -> i64 {
    if is_unlocked(now_ts, locked_until) {
        0
    } else {
        locked_until.saturating_sub(now_ts)
    }
}

/// Lock timestamp written by a drip at `now_ts`.
pub fn next_locked_until(now_ts: i64) -> Result<i64, FaucetError> {
    now_ts
        .checked_add(COOLDOWN_SECONDS)
        .ok_or(FaucetError::MathOverflow)
}

#[cfg(test)]
mod tests {
    use super::*;

    const T0: i64 = 1_700_000_000;

    #[test]
    fn fresh_lock_is_eligible() {
        assert!(is_unlocked(T0, 0));
        assert_eq!(remaining_lock(T0, 0), 0);
    }

    #[test]
    fn boundary_is_exclusive() {
        let until = next_locked_until(T0).unwrap();
        assert_eq!(until, T0 + COOLDOWN_SECONDS);

        // exactly at the lock timestamp => still locked
        assert!(!is_unlocked(until, until));
        // one second past => eligible
        assert!(is_unlocked(until + 1, until));
    }

    #[test]
    fn remaining_counts_down() {
        let until = next_locked_until(T0).unwrap();
        assert_eq!(remaining_lock(T0 + 100, until), COOLDOWN_SECONDS - 100);
        assert_eq!(remaining_lock(until + 1, until), 0);
    }

    #[test]
    fn stamp_overflow_is_reported() {
        assert!(matches!(
            next_locked_until(i64::MAX - 1),
            Err(FaucetError::MathOverflow)
        ));
    }
}
