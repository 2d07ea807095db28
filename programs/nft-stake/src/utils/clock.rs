use anchor_lang::prelude::*;

use crate::error::ErrorCode;

/// Transaction timestamp from the Clock sysvar, as the unsigned seconds the
/// ledger accounts store.
pub fn current_timestamp() -> Result<u64> {
    let clock = Clock::get().map_err(|_| error!(ErrorCode::ClockUnavailable))?;
    u64::try_from(clock.unix_timestamp).map_err(|_| error!(ErrorCode::InvalidTimestamp))
}
