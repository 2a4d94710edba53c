use anchor_lang::prelude::*;

/// Per-recipient cooldown lock PDA, created lazily on first drip.
///
/// A recipient with no lock account (or a freshly zeroed one) reads as
/// `locked_until = 0`, the sentinel for "never drained". `locked_until` only
/// ever moves forward: each successful drip stamps it to now + cooldown.
#[account]
pub struct RecipientLock {
    /// Recipient wallet this lock belongs to.
    pub recipient: Pubkey,
    /// Earliest timestamp at which the recipient is eligible again
    /// (exclusive: a drip at exactly this time is still locked).
    pub locked_until: i64,
    /// Bump seed for the PDA.
    pub bump: u8,
}

impl RecipientLock {
    pub const SIZE: usize =
        32 + // recipient
        8 +  // locked_until
        1;   // bump
}
