use anchor_lang::prelude::*;
use anchor_spl::token::TokenAccount;

use crate::state::{FaucetState, Maintainers, RecipientLock};
use crate::utils::time;

/// Read-only quote: reports whether a drip for `recipient` would currently
/// succeed, and why not if it would not. A missing lock account reads as
/// never drained.
pub fn emit_drip_quote(ctx: Context<EmitDripQuote>, recipient: Pubkey) -> Result<()> {
    let st = &ctx.accounts.faucet_state;
    let now = Clock::get()?.unix_timestamp;

    let locked_until = ctx
        .accounts
        .recipient_lock
        .as_ref()
        .map(|l| l.locked_until)
        .unwrap_or(0);

    let unlocked = time::is_unlocked(now, locked_until);
    let funded = ctx.accounts.vault.amount >= st.max_disperse;

    emit!(DripQuote {
        recipient,
        max_disperse: st.max_disperse,
        vault_balance: ctx.accounts.vault.amount,
        maintainer_count: ctx.accounts.maintainers.count,
        locked_until,
        remaining_lock: time::remaining_lock(now, locked_until),
        eligible: !st.paused && unlocked && funded,
    });

    Ok(())
}

#[derive(Accounts)]
#[instruction(recipient: Pubkey)]
pub struct EmitDripQuote<'info> {
    #[account(seeds = [b"faucet_state"], bump)]
    pub faucet_state: Account<'info, FaucetState>,

    #[account(
        seeds = [b"maintainers", faucet_state.key().as_ref()],
        bump
    )]
    pub maintainers: Box<Account<'info, Maintainers>>,

    #[account(
        seeds = [b"recipient_lock", faucet_state.key().as_ref(), recipient.as_ref()],
        bump
    )]
    pub recipient_lock: Option<Account<'info, RecipientLock>>,

    #[account(
        seeds = [b"vault", faucet_state.key().as_ref()],
        bump
    )]
    pub vault: Account<'info, TokenAccount>,
}

#[event]
pub struct DripQuote {
    pub recipient: Pubkey,
    pub max_disperse: u64,
    pub vault_balance: u64,
    pub maintainer_count: u8,
    pub locked_until: i64,
    pub remaining_lock: i64,
    pub eligible: bool,
}
