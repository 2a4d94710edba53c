use anchor_lang::prelude::*;

/// Single faucet state PDA.
#[account]
pub struct FaucetState {
    /// Token mint the faucet disburses.
    pub mint: Pubkey,
    /// Owner authority (configures the faucet, withdraws funds).
    pub owner: Pubkey,
    /// Fixed amount paid per drip (token base units, always > 0).
    pub max_disperse: u64,
    /// Emergency pause flag (blocks drips only).
    pub paused: bool,
    /// Total deposited into the vault via receive_funds.
    pub total_received: u64,
    /// Total paid out through drips.
    pub total_dispensed: u64,
    /// Total withdrawn by the owner.
    pub total_withdrawn: u64,
}

impl FaucetState {
    pub const SIZE: usize =
        32 + // mint
        32 + // owner
        8 +  // max_disperse
        1 +  // paused
        8 +  // total_received
        8 +  // total_dispensed
        8;   // total_withdrawn
}
