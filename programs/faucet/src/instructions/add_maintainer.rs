use anchor_lang::prelude::*;

use crate::error::FaucetError;
use crate::state::{FaucetState, Maintainers};

pub fn add_maintainer(ctx: Context<AddMaintainer>, addr: Pubkey) -> Result<()> {
    require!(addr != Pubkey::default(), FaucetError::InvalidPubkey);

    let faucet_state_key = ctx.accounts.faucet_state.key();
    let st = &ctx.accounts.faucet_state;
    require_keys_eq!(ctx.accounts.owner.key(), st.owner, FaucetError::UnauthorizedOwner);

    // Maintainers must be able to sign drips. Block the known program keys
    // and PDAs, which never can.
    require!(addr != faucet_state_key, FaucetError::InvalidConfig);
    require!(addr != crate::ID, FaucetError::InvalidConfig);
    let (vault_pda, _) =
        Pubkey::find_program_address(&[b"vault", faucet_state_key.as_ref()], &crate::ID);
    let (maintainers_pda, _) =
        Pubkey::find_program_address(&[b"maintainers", faucet_state_key.as_ref()], &crate::ID);
    require!(addr != vault_pda, FaucetError::InvalidConfig);
    require!(addr != maintainers_pda, FaucetError::InvalidConfig);

    ctx.accounts.maintainers.add(addr)?;

    emit!(MaintainerAdded { maintainer: addr });
    Ok(())
}

#[derive(Accounts)]
pub struct AddMaintainer<'info> {
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
pub struct MaintainerAdded {
    pub maintainer: Pubkey,
}
