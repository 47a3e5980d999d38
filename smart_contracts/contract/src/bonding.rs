//! Bonding: moves `amount` from the caller's main purse into a fresh purse and hands that purse to
//! the Proof of Stake contract's `bond` entry point.
//!
//! The session is a small state machine,
//!
//! ```text
//! Start -> ArgsRead -> Transferred -> Dispatched
//!   \          \            \
//!    `----------`------------`--> Reverted(error)
//! ```
//!
//! which can be driven one transition at a time with [`Bonding::step`] or to completion with
//! [`bond`].

use core::mem;

use casper_bonding_types::{
    proof_of_stake::{ARG_AMOUNT, ARG_PURSE, METHOD_BOND},
    CLValueError, ContractHash, RuntimeArgs, URef, U512,
};
use log::{debug, warn};

use crate::{args, host::Host, Error};

/// The arguments passed to the Proof of Stake contract's `bond` entry point.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct BondingRequest {
    amount: U512,
    purse: URef,
}

impl BondingRequest {
    /// Creates a request to bond `amount` held in `purse`.
    pub fn new(amount: U512, purse: URef) -> Self {
        BondingRequest { amount, purse }
    }

    /// The amount to bond.
    pub fn amount(&self) -> U512 {
        self.amount
    }

    /// The purse holding the amount to bond.
    pub fn purse(&self) -> URef {
        self.purse
    }

    /// Builds the `{"amount", "purse"}` runtime arguments of the `bond` call.
    pub fn to_runtime_args(&self) -> Result<RuntimeArgs, CLValueError> {
        RuntimeArgs::try_new(|args| {
            args.insert(ARG_AMOUNT, self.amount)?;
            args.insert(ARG_PURSE, self.purse)?;
            Ok(())
        })
    }
}

/// The states of a bonding session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BondingState {
    /// Nothing has happened yet.
    Start,
    /// The collaborators are resolved, the bonding purse exists and the amount has been decoded.
    ArgsRead {
        /// The Proof of Stake contract.
        proof_of_stake: ContractHash,
        /// The caller's main purse.
        source: URef,
        /// The newly created bonding purse.
        purse: URef,
        /// The decoded `amount` argument.
        amount: U512,
    },
    /// The amount has been moved into the bonding purse.
    Transferred {
        /// The Proof of Stake contract.
        proof_of_stake: ContractHash,
        /// The request about to be dispatched.
        request: BondingRequest,
    },
    /// The request has been accepted by the Proof of Stake contract.
    Dispatched(BondingRequest),
    /// The session failed; the host discards all of its effects.
    Reverted(Error),
}

impl BondingState {
    /// Returns `true` for `Dispatched` and `Reverted`, the states no step leads out of.
    pub fn is_terminal(&self) -> bool {
        matches!(self, BondingState::Dispatched(_) | BondingState::Reverted(_))
    }
}

/// A bonding session against a given host.
pub struct Bonding<'a, H: Host + ?Sized> {
    host: &'a mut H,
    state: BondingState,
}

impl<'a, H: Host + ?Sized> Bonding<'a, H> {
    /// Creates a session in the `Start` state.
    pub fn new(host: &'a mut H) -> Self {
        Bonding {
            host,
            state: BondingState::Start,
        }
    }

    /// The current state.
    pub fn state(&self) -> &BondingState {
        &self.state
    }

    /// Performs the next transition and returns the resulting state.
    ///
    /// Stepping a terminal state leaves it unchanged and makes no host calls, so a request is never
    /// dispatched twice.
    pub fn step(&mut self) -> &BondingState {
        let next = match mem::replace(&mut self.state, BondingState::Start) {
            BondingState::Start => self.read_args(),
            BondingState::ArgsRead {
                proof_of_stake,
                source,
                purse,
                amount,
            } => self.transfer(proof_of_stake, source, purse, amount),
            BondingState::Transferred {
                proof_of_stake,
                request,
            } => self.dispatch(proof_of_stake, request),
            terminal => Ok(terminal),
        };
        self.state = next.unwrap_or_else(|error| {
            warn!("bonding reverted: {}", error);
            BondingState::Reverted(error)
        });
        &self.state
    }

    /// Steps until a terminal state is reached.
    pub fn run(mut self) -> Result<BondingRequest, Error> {
        loop {
            match self.step() {
                BondingState::Dispatched(request) => return Ok(*request),
                BondingState::Reverted(error) => return Err(*error),
                _ => continue,
            }
        }
    }

    fn read_args(&mut self) -> Result<BondingState, Error> {
        let proof_of_stake = self.host.get_proof_of_stake().map_err(Error::Host)?;
        let source = self.host.get_main_purse().map_err(Error::Host)?;
        let purse = self.host.create_purse().map_err(Error::Host)?;
        let amount: U512 = args::get_named_arg(&mut *self.host, ARG_AMOUNT)?;
        debug!("bonding {} from {} via {}", amount, source, purse);
        Ok(BondingState::ArgsRead {
            proof_of_stake,
            source,
            purse,
            amount,
        })
    }

    fn transfer(
        &mut self,
        proof_of_stake: ContractHash,
        source: URef,
        purse: URef,
        amount: U512,
    ) -> Result<BondingState, Error> {
        self.host
            .transfer_from_purse_to_purse(source, purse, amount)
            .map_err(Error::TransferFailed)?;
        debug!("moved {} into bonding purse {}", amount, purse);
        Ok(BondingState::Transferred {
            proof_of_stake,
            request: BondingRequest::new(amount, purse),
        })
    }

    fn dispatch(
        &mut self,
        proof_of_stake: ContractHash,
        request: BondingRequest,
    ) -> Result<BondingState, Error> {
        let args = request
            .to_runtime_args()
            .map_err(|error| Error::Host(error.into()))?;
        self.host
            .call_contract(proof_of_stake, METHOD_BOND, args)
            .map_err(Error::Host)?;
        debug!("dispatched bond of {} to {}", request.amount(), proof_of_stake);
        Ok(BondingState::Dispatched(request))
    }
}

/// Runs a whole bonding session: reads `amount`, moves it from the main purse into a new purse and
/// calls `bond` on the Proof of Stake contract with `{"amount": amount, "purse": new purse}`.
pub fn bond<H: Host + ?Sized>(host: &mut H) -> Result<BondingRequest, Error> {
    Bonding::new(host).run()
}

#[cfg(test)]
mod tests {
    use alloc::vec;

    use assert_matches::assert_matches;
    use casper_bonding_types::{ApiError, CLValue};
    use proptest::prelude::*;

    use super::*;
    use crate::host::mock::{RecordingHost, MAIN_PURSE, PROOF_OF_STAKE_HASH};

    fn host_with_amount(amount: U512) -> RecordingHost {
        RecordingHost::default().with_arg(ARG_AMOUNT, amount)
    }

    #[test]
    fn should_walk_through_every_state() {
        let mut host = host_with_amount(U512::from(1000));
        let mut bonding = Bonding::new(&mut host);
        assert_eq!(bonding.state(), &BondingState::Start);

        let purse = match bonding.step().clone() {
            BondingState::ArgsRead {
                proof_of_stake,
                source,
                purse,
                amount,
            } => {
                assert_eq!(proof_of_stake, PROOF_OF_STAKE_HASH);
                assert_eq!(source, MAIN_PURSE);
                assert_eq!(amount, U512::from(1000));
                purse
            }
            other => panic!("unexpected state {:?}", other),
        };

        let expected = BondingRequest::new(U512::from(1000), purse);
        assert_eq!(
            bonding.step(),
            &BondingState::Transferred {
                proof_of_stake: PROOF_OF_STAKE_HASH,
                request: expected,
            }
        );
        assert_eq!(bonding.step(), &BondingState::Dispatched(expected));
        assert!(bonding.state().is_terminal());
    }

    #[test]
    fn should_bond_1000_with_new_purse() {
        let mut host = host_with_amount(U512::from(1000));
        let request = bond(&mut host).unwrap();

        assert_eq!(host.created_purses, vec![request.purse()]);
        assert_eq!(
            host.transfers,
            vec![(MAIN_PURSE, request.purse(), U512::from(1000))]
        );
        assert_eq!(host.dispatches.len(), 1);
        let (contract_hash, entry_point, args) = &host.dispatches[0];
        assert_eq!(*contract_hash, PROOF_OF_STAKE_HASH);
        assert_eq!(entry_point, METHOD_BOND);
        assert_eq!(args.len(), 2);
        assert_eq!(
            args.get(ARG_AMOUNT),
            Some(&CLValue::from_t(U512::from(1000)).unwrap())
        );
        assert_eq!(
            args.get(ARG_PURSE),
            Some(&CLValue::from_t(request.purse()).unwrap())
        );
    }

    #[test]
    fn should_not_dispatch_twice_when_stepping_terminal_state() {
        let mut host = host_with_amount(U512::from(5));
        let mut bonding = Bonding::new(&mut host);
        while !bonding.step().is_terminal() {}
        let terminal = bonding.state().clone();
        assert_eq!(bonding.step(), &terminal);
        assert_eq!(bonding.step(), &terminal);
        drop(bonding);
        assert_eq!(host.dispatches.len(), 1);
        assert_eq!(host.transfers.len(), 1);
    }

    #[test]
    fn should_revert_with_missing_argument() {
        let mut host = RecordingHost::default();
        assert_eq!(bond(&mut host), Err(Error::MissingArgument));
        assert!(host.transfers.is_empty());
        assert!(host.dispatches.is_empty());
    }

    #[test]
    fn should_revert_with_invalid_argument() {
        let mut host = RecordingHost::default().with_raw_arg(ARG_AMOUNT, vec![65, 0, 0]);
        let mut bonding = Bonding::new(&mut host);
        assert_eq!(
            bonding.step(),
            &BondingState::Reverted(Error::InvalidArgument)
        );
        drop(bonding);
        assert!(host.transfers.is_empty());
        assert!(host.dispatches.is_empty());
    }

    #[test]
    fn should_revert_when_transfer_fails() {
        let mut host = host_with_amount(U512::from(1000));
        host.transfer_error = Some(ApiError::Transfer);
        assert_matches!(bond(&mut host), Err(Error::TransferFailed(ApiError::Transfer)));
        assert!(host.dispatches.is_empty());
    }

    #[test]
    fn should_revert_when_proof_of_stake_is_unavailable() {
        let mut host = host_with_amount(U512::from(1000));
        host.missing_system_contract = true;
        assert_eq!(
            bond(&mut host),
            Err(Error::Host(ApiError::InvalidSystemContract))
        );
        assert!(host.created_purses.is_empty());
    }

    #[test]
    fn should_pass_dispatch_failure_through() {
        let mut host = host_with_amount(U512::from(1000));
        host.dispatch_error = Some(ApiError::ProofOfStake(5));
        assert_eq!(
            bond(&mut host),
            Err(Error::Host(ApiError::ProofOfStake(5)))
        );
        assert_eq!(host.transfers.len(), 1);
    }

    #[test]
    fn should_bond_zero() {
        let mut host = host_with_amount(U512::zero());
        let request = bond(&mut host).unwrap();
        assert_eq!(request.amount(), U512::zero());
        assert_eq!(host.dispatches.len(), 1);
    }

    proptest! {
        #[test]
        fn should_dispatch_exactly_once_for_any_amount(words in any::<[u64; 8]>()) {
            let amount = U512(words);
            let mut host = host_with_amount(amount);
            let request = bond(&mut host).unwrap();
            prop_assert_eq!(request.amount(), amount);
            prop_assert_eq!(host.dispatches.len(), 1);
            prop_assert_eq!(
                host.dispatches[0].2.get_as::<U512>(ARG_AMOUNT).unwrap(),
                Some(amount)
            );
            prop_assert_eq!(
                host.dispatches[0].2.get_as::<URef>(ARG_PURSE).unwrap(),
                Some(request.purse())
            );
        }
    }
}
