#![no_std]
#![no_main]

use casper_bonding_contract::{bonding, contract_api::FfiHost, unwrap_or_revert::UnwrapOrRevert};

// Bonding contract.
//
// Accepts an amount (of type `U512`), moves it from the caller's main purse into a new purse and
// bonds that purse with the Proof of Stake contract.
#[no_mangle]
pub extern "C" fn call() {
    bonding::bond(&mut FfiHost).unwrap_or_revert();
}
