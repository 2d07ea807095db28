use anchor_lang::prelude::*;

use crate::error::ErrorCode;

pub const USER_STAKE_INFO_SEED: &str = "user_stake_info";

/// Upper bound on simultaneously open positions per user; sized into the
/// account at creation.
pub const MAX_POSITIONS_PER_USER: usize = 16;

/// One deposited position. `class_id` doubles as the key into the reward
/// rate table. `last_claimed` starts equal to `staked_at` and only ever
/// moves forward.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StakePosition {
    pub class_id: u64,
    pub amount: u64,
    pub staked_at: u64,
    pub last_claimed: u64,
}

impl StakePosition {
    pub const SIZE: usize = 8 * 4;
}

#[account]
#[derive(Default, Debug)]
pub struct UserStakeInfo {
    pub bump: u8,
    pub owner: Pubkey,
    pub total_claimed: u64,
    pub positions: Vec<StakePosition>,
}

impl UserStakeInfo {
    pub const LEN: usize = 8 + 1 + 32 + 8 + 4 + StakePosition::SIZE * MAX_POSITIONS_PER_USER;

    pub fn position(&self, class_id: u64) -> Option<&StakePosition> {
        self.positions.iter().find(|p| p.class_id == class_id)
    }

    pub fn position_mut(&mut self, class_id: u64) -> Option<&mut StakePosition> {
        self.positions.iter_mut().find(|p| p.class_id == class_id)
    }

    /// Appends a fresh position opened at `now`. Positions keep insertion
    /// order for the lifetime of the account; claims never reorder them.
    pub fn open(&mut self, class_id: u64, amount: u64, now: u64) -> Result<()> {
        require!(self.position(class_id).is_none(), ErrorCode::AlreadyStaked);
        require!(
            self.positions.len() < MAX_POSITIONS_PER_USER,
            ErrorCode::MaxPositionsReached
        );
        self.positions.push(StakePosition {
            class_id,
            amount,
            staked_at: now,
            last_claimed: now,
        });
        Ok(())
    }

    /// Removes and returns the position for `class_id`. The position must
    /// have been settled at `now` already; closing an unsettled position
    /// would silently discard accrued rewards.
    pub fn close(&mut self, class_id: u64, now: u64) -> Result<StakePosition> {
        let index = self
            .positions
            .iter()
            .position(|p| p.class_id == class_id)
            .ok_or(ErrorCode::NotOwner)?;
        require!(
            self.positions[index].last_claimed == now,
            ErrorCode::PendingRewardUnclaimed
        );
        Ok(self.positions.remove(index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anchor_lang::error::Error;

    fn assert_err(err: Error, expected: ErrorCode) {
        let expected: Error = expected.into();
        match (err, expected) {
            (Error::AnchorError(got), Error::AnchorError(want)) => {
                assert_eq!(got.error_code_number, want.error_code_number)
            }
            (got, _) => panic!("unexpected error shape: {got}"),
        }
    }

    #[test]
    fn close_rejects_an_unsettled_position() {
        let mut user = UserStakeInfo::default();
        user.open(1, 50, 0).unwrap();

        // settled at t=0, closing at t=10 would discard ten seconds of accrual
        assert_err(
            user.close(1, 10).unwrap_err(),
            ErrorCode::PendingRewardUnclaimed,
        );
        assert_eq!(user.positions.len(), 1);

        // once the settlement timestamp matches, the close goes through
        user.position_mut(1).unwrap().last_claimed = 10;
        let closed = user.close(1, 10).unwrap();
        assert_eq!(closed.amount, 50);
        assert!(user.positions.is_empty());
    }
}
