use anchor_lang::prelude::*;

use crate::error::FaucetError;
use crate::state::FaucetState;

pub fn unpause(ctx: Context<Unpause>) -> Result<()> {
    let st = &mut ctx.accounts.faucet_state;
    require_keys_eq!(ctx.accounts.owner.key(), st.owner, FaucetError::UnauthorizedOwner);
    require!(st.paused, FaucetError::FaucetNotPaused);
    st.paused = false;
    emit!(FaucetUnpaused { owner: st.owner });
    Ok(())
}

#[derive(Accounts)]
pub struct Unpause<'info> {
    #[account(mut, seeds = [b"faucet_state"], bump)]
    pub faucet_state: Account<'info, FaucetState>,
    pub owner: Signer<'info>,
}

#[event]
pub struct FaucetUnpaused {
    pub owner: Pubkey,
}
