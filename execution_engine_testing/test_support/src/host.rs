//! An in-memory implementation of the host interfaces, including a minimal Proof of Stake
//! contract.

use std::collections::BTreeMap;

use log::debug;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use casper_bonding_contract::host::{ArgumentReader, PurseService, SystemContractDispatcher};
use casper_bonding_types::{
    proof_of_stake::{self, ARG_AMOUNT, ARG_PURSE, METHOD_BOND, METHOD_UNBOND},
    ApiError, ContractHash, RuntimeArgs, SystemContractType, URef, URefAddr, U512,
};

use crate::config::HostConfig;

/// Purse balances and stakes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GlobalState {
    balances: BTreeMap<URefAddr, U512>,
    stakes: BTreeMap<URefAddr, U512>,
}

impl GlobalState {
    pub(crate) fn with_purse(mut self, purse: URef, balance: U512) -> Self {
        self.balances.insert(purse.addr(), balance);
        self
    }

    /// Returns the balance of `purse`, or `None` if no such purse exists.
    pub fn balance(&self, purse: URef) -> Option<U512> {
        self.balances.get(&purse.addr()).copied()
    }

    /// Returns the stake bonded from the account owning `main_purse`.
    pub fn stake(&self, main_purse: URef) -> U512 {
        self.stakes
            .get(&main_purse.addr())
            .copied()
            .unwrap_or_default()
    }
}

/// A host call made by a session which changes, or would have changed, global state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// A purse was created.
    CreatePurse(URef),
    /// Funds were moved between purses.
    Transfer {
        /// Purse the funds left.
        source: URef,
        /// Purse the funds went to.
        target: URef,
        /// The amount moved.
        amount: U512,
    },
    /// A contract was called.
    Call {
        /// The called contract.
        contract_hash: ContractHash,
        /// The called entry point.
        entry_point: String,
        /// The arguments passed.
        args: RuntimeArgs,
    },
}

/// A host serving a single session.
///
/// All changes are made to a private copy of global state, returned by
/// [`into_parts`](InMemoryHost::into_parts) together with the effects the session caused.
pub struct InMemoryHost<'a> {
    config: &'a HostConfig,
    rng: &'a mut ChaCha8Rng,
    main_purse: URef,
    proof_of_stake_purse: URef,
    args: RuntimeArgs,
    state: GlobalState,
    effects: Vec<Effect>,
}

impl<'a> InMemoryHost<'a> {
    pub(crate) fn new(
        config: &'a HostConfig,
        rng: &'a mut ChaCha8Rng,
        main_purse: URef,
        proof_of_stake_purse: URef,
        args: RuntimeArgs,
        state: GlobalState,
    ) -> Self {
        InMemoryHost {
            config,
            rng,
            main_purse,
            proof_of_stake_purse,
            args,
            state,
            effects: Vec::new(),
        }
    }

    /// Consumes self, returning the state after the session and the effects it caused.
    pub fn into_parts(self) -> (GlobalState, Vec<Effect>) {
        (self.state, self.effects)
    }

    fn move_funds(&mut self, source: URef, target: URef, amount: U512) -> Result<(), ApiError> {
        if !source.is_writeable() || !target.is_addable() {
            return Err(ApiError::InvalidPurse);
        }
        let source_balance = self
            .state
            .balance(source)
            .ok_or(ApiError::InvalidPurse)?;
        if self.state.balance(target).is_none() {
            return Err(ApiError::InvalidPurse);
        }
        if source_balance < amount {
            return Err(ApiError::Transfer);
        }

        self.state
            .balances
            .insert(source.addr(), source_balance - amount);
        let target_balance = self
            .state
            .balance(target)
            .unwrap_or_default()
            .checked_add(amount)
            .ok_or(ApiError::Transfer)?;
        self.state.balances.insert(target.addr(), target_balance);
        Ok(())
    }

    fn bond(&mut self, args: &RuntimeArgs) -> Result<(), ApiError> {
        let amount: U512 = args
            .get_as(ARG_AMOUNT)?
            .ok_or(ApiError::MissingArgument)?;
        let purse: URef = args.get_as(ARG_PURSE)?.ok_or(ApiError::MissingArgument)?;
        if amount < self.config.minimum_bond() {
            return Err(proof_of_stake::Error::BondTooSmall.into());
        }

        self.move_funds(purse, self.proof_of_stake_purse, amount)
            .map_err(|_| proof_of_stake::Error::BondTransferFailed)?;
        let stake = self
            .state
            .stake(self.main_purse)
            .checked_add(amount)
            .ok_or(proof_of_stake::Error::BondTooLarge)?;
        // A zero stake is no stake: `unbond` must still report `NotBonded`.
        if !stake.is_zero() {
            self.state.stakes.insert(self.main_purse.addr(), stake);
        }
        debug!("bonded {}, stake is now {}", amount, stake);
        Ok(())
    }

    fn unbond(&mut self, args: &RuntimeArgs) -> Result<(), ApiError> {
        let amount: Option<U512> = args
            .get_as(ARG_AMOUNT)?
            .ok_or(ApiError::MissingArgument)?;
        let stake = *self
            .state
            .stakes
            .get(&self.main_purse.addr())
            .ok_or(proof_of_stake::Error::NotBonded)?;
        let amount = amount.unwrap_or(stake);
        if amount > stake {
            return Err(proof_of_stake::Error::UnbondTooLarge.into());
        }

        self.move_funds(self.proof_of_stake_purse, self.main_purse, amount)
            .map_err(|_| proof_of_stake::Error::UnbondTransferFailed)?;
        let remaining = stake - amount;
        if remaining.is_zero() {
            self.state.stakes.remove(&self.main_purse.addr());
        } else {
            self.state.stakes.insert(self.main_purse.addr(), remaining);
        }
        debug!("unbonded {}, stake is now {}", amount, remaining);
        Ok(())
    }
}

impl<'a> ArgumentReader for InMemoryHost<'a> {
    fn get_named_arg_bytes(&mut self, name: &str) -> Result<Option<Vec<u8>>, ApiError> {
        Ok(self
            .args
            .get(name)
            .map(|cl_value| cl_value.inner_bytes().clone()))
    }
}

impl<'a> PurseService for InMemoryHost<'a> {
    fn get_main_purse(&mut self) -> Result<URef, ApiError> {
        Ok(self.main_purse)
    }

    fn create_purse(&mut self) -> Result<URef, ApiError> {
        let purse: URef = self.rng.gen();
        self.state.balances.insert(purse.addr(), U512::zero());
        debug!("created purse {}", purse);
        self.effects.push(Effect::CreatePurse(purse));
        Ok(purse)
    }

    fn transfer_from_purse_to_purse(
        &mut self,
        source: URef,
        target: URef,
        amount: U512,
    ) -> Result<(), ApiError> {
        self.move_funds(source, target, amount)?;
        debug!("transferred {} from {} to {}", amount, source, target);
        self.effects.push(Effect::Transfer {
            source,
            target,
            amount,
        });
        Ok(())
    }
}

impl<'a> SystemContractDispatcher for InMemoryHost<'a> {
    fn get_system_contract(
        &mut self,
        system_contract: SystemContractType,
    ) -> Result<ContractHash, ApiError> {
        Ok(self.config.system_contract(system_contract))
    }

    fn call_contract(
        &mut self,
        contract_hash: ContractHash,
        entry_point: &str,
        args: RuntimeArgs,
    ) -> Result<(), ApiError> {
        debug!("calling {} on {}", entry_point, contract_hash);
        self.effects.push(Effect::Call {
            contract_hash,
            entry_point: entry_point.to_string(),
            args: args.clone(),
        });

        if contract_hash != self.config.system_contract(SystemContractType::ProofOfStake) {
            return Err(ApiError::Unhandled);
        }
        match entry_point {
            METHOD_BOND => self.bond(&args),
            METHOD_UNBOND => self.unbond(&args),
            _ => Err(ApiError::Unhandled),
        }
    }
}
