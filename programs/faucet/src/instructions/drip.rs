use anchor_lang::prelude::*;
use anchor_spl::associated_token::get_associated_token_address;
use anchor_spl::token::{self, Mint, Token, TokenAccount, Transfer};

use crate::error::FaucetError;
use crate::state::{FaucetState, Maintainers, RecipientLock};
use crate::utils::time;

pub fn drip(ctx: Context<Drip>, recipient: Pubkey) -> Result<()> {
    // Avoid borrow checker conflicts: capture AccountInfos/keys before taking
    // mutable borrows.
    let faucet_state_ai = ctx.accounts.faucet_state.to_account_info();
    let faucet_state_bump = ctx.bumps.faucet_state;

    let st = &ctx.accounts.faucet_state;
    require!(!st.paused, FaucetError::FaucetPaused);
    require!(
        ctx.accounts.maintainers.contains(&ctx.accounts.maintainer.key()),
        FaucetError::UnauthorizedMaintainer
    );

    let now = Clock::get()?.unix_timestamp;
    let lock = &ctx.accounts.recipient_lock;
    if !time::is_unlocked(now, lock.locked_until) {
        msg!(
            "recipient {} locked: {}s remaining",
            recipient,
            time::remaining_lock(now, lock.locked_until)
        );
        return Err(FaucetError::CooldownActive.into());
    }

    require!(
        ctx.accounts.vault.amount >= st.max_disperse,
        FaucetError::InsufficientFunds
    );

    // Strict recipient account checks (pre-created ATA policy).
    require_keys_eq!(ctx.accounts.mint.key(), st.mint, FaucetError::InvalidTokenMint);
    require_keys_eq!(ctx.accounts.vault.mint, st.mint, FaucetError::InvalidTokenMint);
    let expected_ata = get_associated_token_address(&recipient, &st.mint);
    require_keys_eq!(
        ctx.accounts.recipient_ata.key(),
        expected_ata,
        FaucetError::InvalidRecipientAta
    );
    require_keys_eq!(
        ctx.accounts.recipient_ata.mint,
        st.mint,
        FaucetError::InvalidTokenMint
    );
    require_keys_eq!(
        ctx.accounts.recipient_ata.owner,
        recipient,
        FaucetError::InvalidTokenAccount
    );

    let amount = st.max_disperse;

    // Stamp the lock before the transfer CPI. Nothing the transfer re-enters
    // can observe this recipient as eligible, and a failed transfer aborts
    // the transaction, reverting the stamp with everything else.
    let lock = &mut ctx.accounts.recipient_lock;
    lock.recipient = recipient;
    lock.bump = ctx.bumps.recipient_lock;
    lock.locked_until = time::next_locked_until(now)?;

    let signer_seeds: &[&[&[u8]]] = &[&[b"faucet_state", &[faucet_state_bump]]];
    token::transfer(
        CpiContext::new_with_signer(
            ctx.accounts.token_program.to_account_info(),
            Transfer {
                from: ctx.accounts.vault.to_account_info(),
                to: ctx.accounts.recipient_ata.to_account_info(),
                authority: faucet_state_ai,
            },
            signer_seeds,
        ),
        amount,
    )?;

    let st = &mut ctx.accounts.faucet_state;
    st.total_dispensed = st
        .total_dispensed
        .checked_add(amount)
        .ok_or(FaucetError::MathOverflow)?;

    emit!(Dispensed {
        recipient,
        amount,
        locked_until: ctx.accounts.recipient_lock.locked_until,
    });

    Ok(())
}

#[derive(Accounts)]
#[instruction(recipient: Pubkey)]
pub struct Drip<'info> {
    #[account(mut, seeds = [b"faucet_state"], bump)]
    pub faucet_state: Account<'info, FaucetState>,

    #[account(
        seeds = [b"maintainers", faucet_state.key().as_ref()],
        bump
    )]
    pub maintainers: Box<Account<'info, Maintainers>>,

    #[account(
        init_if_needed,
        payer = maintainer,
        space = 8 + RecipientLock::SIZE,
        seeds = [b"recipient_lock", faucet_state.key().as_ref(), recipient.as_ref()],
        bump
    )]
    pub recipient_lock: Account<'info, RecipientLock>,

    #[account(
        mut,
        seeds = [b"vault", faucet_state.key().as_ref()],
        bump,
        constraint = vault.mint == faucet_state.mint @ FaucetError::InvalidTokenMint,
    )]
    pub vault: Account<'info, TokenAccount>,

    #[account(mut)]
    pub recipient_ata: Account<'info, TokenAccount>,

    pub mint: Account<'info, Mint>,

    #[account(mut)]
    pub maintainer: Signer<'info>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
}

#[event]
pub struct Dispensed {
    pub recipient: Pubkey,
    pub amount: u64,
    pub locked_until: i64,
}
