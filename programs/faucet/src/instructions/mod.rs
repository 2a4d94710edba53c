pub mod initialize_faucet;
pub mod set_max_disperse;
pub mod add_maintainer;
pub mod remove_maintainer;
pub mod pause;
pub mod unpause;
pub mod receive_funds;
pub mod drip;
pub mod withdraw_funds;
pub mod emit_drip_quote;

pub use initialize_faucet::*;
pub use set_max_disperse::*;
pub use add_maintainer::*;
pub use remove_maintainer::*;
pub use pause::*;
pub use unpause::*;
pub use receive_funds::*;
pub use drip::*;
pub use withdraw_funds::*;
pub use emit_drip_quote::*;
