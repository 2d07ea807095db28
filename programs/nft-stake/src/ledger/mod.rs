//! Accounting core for the staking ledger.
//!
//! Everything in this module is pure state manipulation: no accounts, no
//! CPIs, no sysvars. Instruction handlers bind on-chain accounts to these
//! functions and perform the token transfers around them, so the accrual and
//! pool rules stay reproducible by any independent verifier and testable
//! off-chain.

pub mod accrual;
pub mod ops;
