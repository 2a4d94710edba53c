use anchor_lang::prelude::*;

/// Custom error codes for the faucet program.
#[error_code]
pub enum FaucetError {
    #[msg("Unauthorized: owner signature required")]
    UnauthorizedOwner,

    #[msg("Unauthorized: maintainer signature required")]
    UnauthorizedMaintainer,

    #[msg("Invalid public key")]
    InvalidPubkey,

    #[msg("Invalid configuration")]
    InvalidConfig,

    #[msg("Invalid amount (must be > 0)")]
    InvalidAmount,

    #[msg("Address is already a maintainer")]
    AlreadyMaintainer,

    #[msg("Address is not a maintainer")]
    NotMaintainer,

    #[msg("Maintainer list is full")]
    MaintainerListFull,

    #[msg("Recipient cooldown has not elapsed")]
    CooldownActive,

    #[msg("Insufficient vault balance")]
    InsufficientFunds,

    #[msg("Faucet is paused")]
    FaucetPaused,

    #[msg("Faucet is not paused")]
    FaucetNotPaused,

    #[msg("Invalid token mint")]
    InvalidTokenMint,

    #[msg("Invalid token account")]
    InvalidTokenAccount,

    #[msg("Invalid associated token account for recipient")]
    InvalidRecipientAta,

    #[msg("Math overflow")]
    MathOverflow,
}
