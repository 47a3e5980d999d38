#![no_std]
#![no_main]

use casper_bonding_contract::{contract_api::FfiHost, unbonding, unwrap_or_revert::UnwrapOrRevert};

// Unbonding contract.
//
// Accepts an optional amount (of type `Option<U512>`) to unbond from the Proof of Stake contract;
// `None` unbonds the whole stake.
#[no_mangle]
pub extern "C" fn call() {
    unbonding::unbond(&mut FfiHost).unwrap_or_revert();
}
