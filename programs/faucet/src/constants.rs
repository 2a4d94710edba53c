//! Program-wide constants.

/// Max maintainers stored in the maintainer list PDA.
pub const MAX_MAINTAINERS: usize = 16;

/// Per-recipient cooldown between drips (1 day, Unix seconds).
pub const COOLDOWN_SECONDS: i64 = 86_400;
