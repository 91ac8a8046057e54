use soroban_sdk::{contracterror, contracttype};

/// Storage keys for the contract.
#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    /// Account that deployed the contract (instance storage).
    Owner,
    /// Latest depositor of an exact POL amount (persistent storage).
    PolDeposit(u128),
}

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum LpManagerError {
    /// The owner entry is missing from instance storage.
    OwnerNotSet = 1,
}
