use anchor_lang::prelude::*;

use crate::error::FaucetError;
use crate::state::FaucetState;

pub fn pause(ctx: Context<Pause>) -> Result<()> {
    let st = &mut ctx.accounts.faucet_state;
    require_keys_eq!(ctx.accounts.owner.key(), st.owner, FaucetError::UnauthorizedOwner);
    require!(!st.paused, FaucetError::FaucetPaused);
    st.paused = true;
    emit!(FaucetPaused { owner: st.owner });
    Ok(())
}

#[derive(Accounts)]
pub struct Pause<'info> {
    #[account(mut, seeds = [b"faucet_state"], bump)]
    pub faucet_state: Account<'info, FaucetState>,
    pub owner: Signer<'info>,
}

#[event]
pub struct FaucetPaused {
    pub owner: Pubkey,
}
