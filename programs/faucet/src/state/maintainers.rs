use anchor_lang::prelude::*;
use std::result::Result as StdResult;

use crate::constants::MAX_MAINTAINERS;
use crate::error::FaucetError;

/// PDA holding the maintainer set (<= 16 entries).
///
/// Membership is a strict boolean: re-adding an existing maintainer or
/// removing a non-maintainer is rejected, never silently ignored. Entry order
/// carries no meaning; removal swaps the last live entry into the hole.
#[account]
pub struct Maintainers {
    /// Live entry count.
    pub count: u8,
    /// Fixed-capacity entry slots; slots at index >= count are zeroed.
    pub entries: [Pubkey; MAX_MAINTAINERS],
}

impl Maintainers {
    /// Space for discriminator + count + fixed entries array.
    pub const fn space() -> usize {
        8 + 1 + 32 * MAX_MAINTAINERS
    }

    pub fn contains(&self, key: &Pubkey) -> bool {
        self.entries.iter().take(self.count as usize).any(|e| e == key)
    }

    pub fn add(&mut self, key: Pubkey) -> StdResult<(), FaucetError> {
        if self.contains(&key) {
            return Err(FaucetError::AlreadyMaintainer);
        }
        let idx = self.count as usize;
        if idx >= MAX_MAINTAINERS {
            return Err(FaucetError::MaintainerListFull);
        }
        self.entries[idx] = key;
        self.count = self.count.checked_add(1).ok_or(FaucetError::MathOverflow)?;
        Ok(())
    }

    pub fn remove(&mut self, key: &Pubkey) -> StdResult<(), FaucetError> {
        let live = self.count as usize;
        let idx = self
            .entries
            .iter()
            .take(live)
            .position(|e| e == key)
            .ok_or(FaucetError::NotMaintainer)?;
        self.entries[idx] = self.entries[live - 1];
        self.entries[live - 1] = Pubkey::default();
        self.count -= 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(byte: u8) -> Pubkey {
        Pubkey::new_from_array([byte; 32])
    }

    fn empty() -> Maintainers {
        Maintainers {
            count: 0,
            entries: [Pubkey::default(); MAX_MAINTAINERS],
        }
    }

    #[test]
    fn add_then_contains() {
        let mut m = empty();
        m.add(key(1)).unwrap();
        assert!(m.contains(&key(1)));
        assert!(!m.contains(&key(2)));
        assert_eq!(m.count, 1);
    }

    #[test]
    fn duplicate_add_rejected_membership_unchanged() {
        let mut m = empty();
        m.add(key(1)).unwrap();
        assert!(matches!(m.add(key(1)), Err(FaucetError::AlreadyMaintainer)));
        assert!(m.contains(&key(1)));
        assert_eq!(m.count, 1);
    }

    #[test]
    fn remove_non_member_rejected() {
        let mut m = empty();
        m.add(key(1)).unwrap();
        assert!(matches!(m.remove(&key(2)), Err(FaucetError::NotMaintainer)));
        assert_eq!(m.count, 1);
    }

    #[test]
    fn remove_middle_keeps_rest() {
        let mut m = empty();
        m.add(key(1)).unwrap();
        m.add(key(2)).unwrap();
        m.add(key(3)).unwrap();
        m.remove(&key(2)).unwrap();
        assert_eq!(m.count, 2);
        assert!(m.contains(&key(1)));
        assert!(!m.contains(&key(2)));
        assert!(m.contains(&key(3)));
        // second removal of the same key must fail
        assert!(matches!(m.remove(&key(2)), Err(FaucetError::NotMaintainer)));
    }

    #[test]
    fn remove_then_re_add() {
        let mut m = empty();
        m.add(key(1)).unwrap();
        m.remove(&key(1)).unwrap();
        assert_eq!(m.count, 0);
        m.add(key(1)).unwrap();
        assert!(m.contains(&key(1)));
    }

    #[test]
    fn capacity_bound() {
        let mut m = empty();
        for b in 0..MAX_MAINTAINERS as u8 {
            m.add(key(b + 1)).unwrap();
        }
        assert!(matches!(m.add(key(200)), Err(FaucetError::MaintainerListFull)));
        assert_eq!(m.count as usize, MAX_MAINTAINERS);
    }
}
