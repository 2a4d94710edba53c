pub mod constants;
pub mod error;
pub mod instructions;
pub mod state;
pub mod utils;

use anchor_lang::prelude::*;

pub use constants::*;
pub use instructions::*;
pub use state::*;

declare_id!("FkU8vP4Yy3rXssjAdmTFSxmCFaoszetJ7FdJsXdBzpCJ");

#[program]
pub mod faucet {
    use super::*;

    /// Create the faucet: config PDA, maintainer list and token vault. The
    /// payer becomes owner and is enrolled as the first maintainer.
    pub fn initialize_faucet(ctx: Context<InitializeFaucet>, max_disperse: u64) -> Result<()> {
        instructions::initialize_faucet::initialize_faucet(ctx, max_disperse)
    }

    /// Replace the per-drip amount (owner only).
    pub fn set_max_disperse(ctx: Context<SetMaxDisperse>, new_amount: u64) -> Result<()> {
        instructions::set_max_disperse::set_max_disperse(ctx, new_amount)
    }

    /// Enroll a maintainer (owner only).
    pub fn add_maintainer(ctx: Context<AddMaintainer>, addr: Pubkey) -> Result<()> {
        instructions::add_maintainer::add_maintainer(ctx, addr)
    }

    /// Unenroll a maintainer (owner only).
    pub fn remove_maintainer(ctx: Context<RemoveMaintainer>, addr: Pubkey) -> Result<()> {
        instructions::remove_maintainer::remove_maintainer(ctx, addr)
    }

    /// Emergency stop for drips (owner only).
    pub fn pause(ctx: Context<Pause>) -> Result<()> {
        instructions::pause::pause(ctx)
    }

    /// Resume drips (owner only).
    pub fn unpause(ctx: Context<Unpause>) -> Result<()> {
        instructions::unpause::unpause(ctx)
    }

    /// Top up the vault. Open to anyone.
    pub fn receive_funds(ctx: Context<ReceiveFunds>, amount: u64) -> Result<()> {
        instructions::receive_funds::receive_funds(ctx, amount)
    }

    /// Pay one fixed-size drip to `recipient`, subject to the per-recipient
    /// cooldown and the vault balance (maintainer only).
    pub fn drip(ctx: Context<Drip>, recipient: Pubkey) -> Result<()> {
        instructions::drip::drip(ctx, recipient)
    }

    /// Withdraw from the vault to the owner (owner only).
    pub fn withdraw_funds(ctx: Context<WithdrawFunds>, amount: u64) -> Result<()> {
        instructions::withdraw_funds::withdraw_funds(ctx, amount)
    }

    /// Emit a read-only eligibility quote for `recipient`.
    pub fn emit_drip_quote(ctx: Context<EmitDripQuote>, recipient: Pubkey) -> Result<()> {
        instructions::emit_drip_quote::emit_drip_quote(ctx, recipient)
    }
}
