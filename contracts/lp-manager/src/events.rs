use soroban_sdk::{symbol_short, Address, Env};

// Event data is the bare address, not a `#[contractevent]` map.

/// Topics `("OWNER",)`, data: the owner address.
#[allow(deprecated)]
pub fn owner_set(env: &Env, owner: &Address) {
    env.events().publish((symbol_short!("OWNER"),), owner.clone());
}

/// Topics `("POL_DEP", amount)`, data: the depositor address.
#[allow(deprecated)]
pub fn pol_deposit(env: &Env, amount: u128, depositor: &Address) {
    env.events().publish((symbol_short!("POL_DEP"), amount), depositor.clone());
}
