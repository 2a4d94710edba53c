use anchor_lang::prelude::*;
use anchor_spl::token::{self, Mint, Token, TokenAccount, Transfer};

use crate::error::FaucetError;
use crate::state::FaucetState;

pub fn withdraw_funds(ctx: Context<WithdrawFunds>, amount: u64) -> Result<()> {
    require!(amount > 0, FaucetError::InvalidAmount);

    let st = &ctx.accounts.faucet_state;
    require_keys_eq!(ctx.accounts.owner.key(), st.owner, FaucetError::UnauthorizedOwner);

    require_keys_eq!(ctx.accounts.mint.key(), st.mint, FaucetError::InvalidTokenMint);
    require_keys_eq!(ctx.accounts.vault.mint, st.mint, FaucetError::InvalidTokenMint);
    require_keys_eq!(
        ctx.accounts.owner_destination.mint,
        st.mint,
        FaucetError::InvalidTokenMint
    );
    require_keys_eq!(
        ctx.accounts.owner_destination.owner,
        ctx.accounts.owner.key(),
        FaucetError::InvalidTokenAccount
    );

    require!(
        ctx.accounts.vault.amount >= amount,
        FaucetError::InsufficientFunds
    );

    let signer_seeds: &[&[&[u8]]] = &[&[b"faucet_state", &[ctx.bumps.faucet_state]]];
    token::transfer(
        CpiContext::new_with_signer(
            ctx.accounts.token_program.to_account_info(),
            Transfer {
                from: ctx.accounts.vault.to_account_info(),
                to: ctx.accounts.owner_destination.to_account_info(),
                authority: ctx.accounts.faucet_state.to_account_info(),
            },
            signer_seeds,
        ),
        amount,
    )?;

    let st = &mut ctx.accounts.faucet_state;
    st.total_withdrawn = st
        .total_withdrawn
        .checked_add(amount)
        .ok_or(FaucetError::MathOverflow)?;

    emit!(Withdrawn {
        owner: st.owner,
        amount,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct WithdrawFunds<'info> {
    #[account(mut, seeds = [b"faucet_state"], bump)]
    pub faucet_state: Account<'info, FaucetState>,

    #[account(
        mut,
        seeds = [b"vault", faucet_state.key().as_ref()],
        bump,
        constraint = vault.mint == faucet_state.mint @ FaucetError::InvalidTokenMint,
    )]
    pub vault: Account<'info, TokenAccount>,

    #[account(mut)]
    pub owner_destination: Account<'info, TokenAccount>,

    pub mint: Account<'info, Mint>,

    pub owner: Signer<'info>,

    pub token_program: Program<'info, Token>,
}

#[event]
pub struct Withdrawn {
    pub owner: Pubkey,
    pub amount: u64,
}
