#![no_std]

mod events;
mod storage;
mod types;


use soroban_sdk::{contract, contractimpl, log, Address, Env, Vec};

pub use storage::{LEDGER_BUMP, LEDGER_THRESHOLD};
pub use types::{DataKey, LpManagerError};

#[contract]
pub struct LpManager;

#[contractimpl]
impl LpManager {
    /// Record the deploying account as owner. Runs once, atomically with deployment.
    ///
    /// The owner must authorize the deployment.
    pub fn __constructor(env: Env, owner: Address) {
        owner.require_auth();

        storage::set_owner(&env, &owner);

        events::owner_set(&env, &owner);
    }

    /// The account recorded at construction.
    pub fn owner(env: Env) -> Address {
        storage::get_owner(&env)
    }

    /// Record `caller` as the latest depositor of exactly `amount` POL.
    ///
    /// Any account may deposit. A later deposit of the same amount replaces
    /// the recorded depositor; nothing is summed or appended.
    pub fn handle_pol_deposit(env: Env, caller: Address, amount: u128) {
        caller.require_auth();

        storage::set_pol_deposit(&env, amount, &caller);
        storage::bump_instance(&env);

        log!(&env, "pol deposit recorded", amount, caller);
        events::pol_deposit(&env, amount, &caller);
    }

    /// Latest depositor of exactly `amount`.
    ///
    /// Returns None if nobody has deposited that amount.
    pub fn pol_deposits(env: Env, amount: u128) -> Option<Address> {
        storage::get_pol_deposit(&env, amount)
    }

    /// Batch query depositors for several amounts.
    ///
    /// Returns (amount, depositor) pairs in input order. Amounts without a
    /// recorded depositor are omitted.
    pub fn pol_deposits_batch(env: Env, amounts: Vec<u128>) -> Vec<(u128, Address)> {
        let mut results = Vec::new(&env);

        for amount in amounts.iter() {
            if let Some(depositor) = storage::get_pol_deposit(&env, amount) {
                results.push_back((amount, depositor));
            }
        }

        results
    }
}
