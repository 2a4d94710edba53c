pub mod faucet_state;
pub mod maintainers;
pub mod recipient_lock;

pub use faucet_state::*;
pub use maintainers::*;
pub use recipient_lock::*;
