use anchor_lang::prelude::*;

use crate::error::FaucetError;
use crate::state::{FaucetState, Maintainers};

pub fn remove_maintainer(ctx: Context<RemoveMaintainer>, addr: Pubkey) -> Result<()> {
    let st = &ctx.accounts.faucet_state;
    require_keys_eq!(ctx.accounts.owner.key(), st.owner, FaucetError::UnauthorizedOwner);

    // The owner may remove itself here; owner rights are independent of
    // maintainer membership and survive the removal.
    ctx.accounts.maintainers.remove(&addr)?;

    emit!(MaintainerRemoved { maintainer: addr });
    Ok(())
}

#[derive(Accounts)]
pub struct RemoveMaintainer<'info> {
    #[account(seeds = [b"faucet_state"], bump)]
    pub faucet_state: Account<'info, FaucetState>,

    #[account(
        mut,
        seeds = [b"maintainers", faucet_state.key().as_ref()],
        bump
    )]
    pub maintainers: Box<Account<'info, Maintainers>>,

    pub owner: Signer<'info>,
}

#[event]
pub struct MaintainerRemoved {
    pub maintainer: Pubkey,
}
