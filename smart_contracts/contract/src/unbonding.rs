//! Unbonding: asks the Proof of Stake contract to release some or all of the caller's stake.

use casper_bonding_types::{
    proof_of_stake::{ARG_AMOUNT, METHOD_UNBOND},
    RuntimeArgs, U512,
};
use log::{debug, warn};

use crate::{args, host::Host, Error};

/// Runs an unbonding session.
///
/// Reads the required `amount` argument as an `Option<U512>`, where `None` unbonds the whole
/// stake, and calls `unbond` on the Proof of Stake contract with `{"amount": amount}`.  No purse
/// is created and no funds are moved by the session itself.
pub fn unbond<H: Host + ?Sized>(host: &mut H) -> Result<Option<U512>, Error> {
    run(host).map_err(|error| {
        warn!("unbonding reverted: {}", error);
        error
    })
}

fn run<H: Host + ?Sized>(host: &mut H) -> Result<Option<U512>, Error> {
    let proof_of_stake = host.get_proof_of_stake().map_err(Error::Host)?;
    let amount: Option<U512> = args::get_named_arg(&mut *host, ARG_AMOUNT)?;
    let args = RuntimeArgs::try_new(|args| args.insert(ARG_AMOUNT, amount))
        .map_err(|error| Error::Host(error.into()))?;
    host.call_contract(proof_of_stake, METHOD_UNBOND, args)
        .map_err(Error::Host)?;
    debug!("dispatched unbond of {:?} to {}", amount, proof_of_stake);
    Ok(amount)
}
