pub mod initialise_configs;
pub use initialise_configs::*;

pub mod update_configs;
pub use update_configs::*;

pub mod set_reward_rate;
pub use set_reward_rate::*;

pub mod fund_rewards;
pub use fund_rewards::*;

pub mod stake;
pub use stake::*;

pub mod claim;
pub use claim::*;

pub mod unstake;
pub use unstake::*;

pub mod view;
pub use view::*;
