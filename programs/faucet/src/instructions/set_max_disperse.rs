use anchor_lang::prelude::*;

use crate::error::FaucetError;
use crate::state::FaucetState;

pub fn set_max_disperse(ctx: Context<SetMaxDisperse>, new_amount: u64) -> Result<()> {
    let st = &mut ctx.accounts.faucet_state;
    require_keys_eq!(ctx.accounts.owner.key(), st.owner, FaucetError::UnauthorizedOwner);
    require!(new_amount > 0, FaucetError::InvalidAmount);

    // Existing recipient locks are untouched.
    st.max_disperse = new_amount;

    emit!(MaxDisperseUpdated {
        max_disperse: new_amount,
    });
    Ok(())
}

#[derive(Accounts)]
pub struct SetMaxDisperse<'info> {
    #[account(mut, seeds = [b"faucet_state"], bump)]
    pub faucet_state: Account<'info, FaucetState>,

    pub owner: Signer<'info>,
}

#[event]
pub struct MaxDisperseUpdated {
    pub max_disperse: u64,
}
