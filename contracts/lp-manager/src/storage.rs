use soroban_sdk::{panic_with_error, Address, Env};

use crate::types::{DataKey, LpManagerError};

/// Bump amount for stored entries (roughly 30 days in ledgers).
pub const LEDGER_BUMP: u32 = 518_400;
/// Threshold for bumping (roughly 15 days).
pub const LEDGER_THRESHOLD: u32 = 259_200;

// =============================================================================
// Owner
// =============================================================================

pub fn get_owner(env: &Env) -> Address {
    env.storage()
        .instance()
        .get(&DataKey::Owner)
        .unwrap_or_else(|| panic_with_error!(env, LpManagerError::OwnerNotSet))
}

pub fn set_owner(env: &Env, owner: &Address) {
    env.storage().instance().set(&DataKey::Owner, owner);
    bump_instance(env);
}

pub fn bump_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(LEDGER_THRESHOLD, LEDGER_BUMP);
}

// =============================================================================
// POL deposits
// =============================================================================

/// Depositor currently recorded for `amount`, if any.
pub fn get_pol_deposit(env: &Env, amount: u128) -> Option<Address> {
    env.storage()
        .persistent()
        .get(&DataKey::PolDeposit(amount))
}

/// Record `depositor` against `amount`, replacing any earlier depositor.
pub fn set_pol_deposit(env: &Env, amount: u128, depositor: &Address) {
    let key = DataKey::PolDeposit(amount);
    env.storage().persistent().set(&key, depositor);
    env.storage()
        .persistent()
        .extend_ttl(&key, LEDGER_THRESHOLD, LEDGER_BUMP);
}
