use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};

use crate::constants::MAX_MAINTAINERS;
use crate::error::FaucetError;
use crate::state::{FaucetState, Maintainers};

use super::add_maintainer::MaintainerAdded;
use super::set_max_disperse::MaxDisperseUpdated;

pub fn initialize_faucet(ctx: Context<InitializeFaucet>, max_disperse: u64) -> Result<()> {
    require!(max_disperse > 0, FaucetError::InvalidAmount);

    let st = &mut ctx.accounts.faucet_state;
    st.mint = ctx.accounts.mint.key();
    st.owner = ctx.accounts.owner.key();
    st.max_disperse = max_disperse;
    st.paused = false;
    st.total_received = 0;
    st.total_dispensed = 0;
    st.total_withdrawn = 0;

    // The creator starts out holding both roles; owner and maintainer are
    // tracked independently from here on.
    let maintainers = &mut ctx.accounts.maintainers;
    maintainers.count = 0;
    maintainers.entries = [Pubkey::default(); MAX_MAINTAINERS];
    maintainers.add(st.owner)?;

    emit!(MaxDisperseUpdated {
        max_disperse: st.max_disperse,
    });
    emit!(MaintainerAdded {
        maintainer: st.owner,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct InitializeFaucet<'info> {
    #[account(
        init,
        payer = owner,
        space = 8 + FaucetState::SIZE,
        seeds = [b"faucet_state"],
        bump
    )]
    pub faucet_state: Account<'info, FaucetState>,

    #[account(
        init,
        payer = owner,
        space = Maintainers::space(),
        seeds = [b"maintainers", faucet_state.key().as_ref()],
        bump
    )]
    pub maintainers: Box<Account<'info, Maintainers>>,

    #[account(
        init,
        payer = owner,
        token::mint = mint,
        token::authority = faucet_state,
        seeds = [b"vault", faucet_state.key().as_ref()],
        bump
    )]
    pub vault: Account<'info, TokenAccount>,

    pub mint: Account<'info, Mint>,

    #[account(mut)]
    pub owner: Signer<'info>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
    pub rent: Sysvar<'info, Rent>,
}
