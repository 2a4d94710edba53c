use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};

use crate::error::FaucetError;
use crate::state::FaucetState;

/// Permissionless funding: any signer may top up the vault from their own
/// token account.
pub fn receive_funds(ctx: Context<ReceiveFunds>, amount: u64) -> Result<()> {
    require!(amount > 0, FaucetError::InvalidAmount);

    let st = &ctx.accounts.faucet_state;
    require_keys_eq!(ctx.accounts.vault.mint, st.mint, FaucetError::InvalidTokenMint);
    require_keys_eq!(
        ctx.accounts.funder_token_account.mint,
        st.mint,
        FaucetError::InvalidTokenMint
    );
    require_keys_eq!(
        ctx.accounts.funder_token_account.owner,
        ctx.accounts.funder.key(),
        FaucetError::InvalidTokenAccount
    );

    token::transfer(
        CpiContext::new(
            ctx.accounts.token_program.to_account_info(),
            Transfer {
                from: ctx.accounts.funder_token_account.to_account_info(),
                to: ctx.accounts.vault.to_account_info(),
                authority: ctx.accounts.funder.to_account_info(),
            },
        ),
        amount,
    )?;

    let st = &mut ctx.accounts.faucet_state;
    st.total_received = st
        .total_received
        .checked_add(amount)
        .ok_or(FaucetError::MathOverflow)?;

    ctx.accounts.vault.reload()?;

    emit!(Funded {
        funder: ctx.accounts.funder.key(),
        amount,
        vault_balance: ctx.accounts.vault.amount,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct ReceiveFunds<'info> {
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
    pub funder_token_account: Account<'info, TokenAccount>,

    #[account(mut)]
    pub funder: Signer<'info>,

    pub token_program: Program<'info, Token>,
}

#[event]
pub struct Funded {
    pub funder: Pubkey,
    pub amount: u64,
    pub vault_balance: u64,
}
