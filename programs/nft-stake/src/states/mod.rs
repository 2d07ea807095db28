pub mod events;
pub use events::*;

pub mod global_config;
pub use global_config::*;

pub mod rate_table;
pub use rate_table::*;

pub mod stake_info;
pub use stake_info::*;

pub mod stake_receipt;
pub use stake_receipt::*;

pub mod user_stake_info;
pub use user_stake_info::*;
