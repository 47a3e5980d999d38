use std::path::Path;

use log::{debug, info};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use casper_bonding_contract::{bonding, bonding::BondingRequest, unbonding, Error as SessionError};
use casper_bonding_types::{
    bytesrepr::FromBytes, ApiError, CLTyped, ContractHash, RuntimeArgs, URef, U512,
};

use crate::{
    config::HostConfig,
    host::{Effect, GlobalState, InMemoryHost},
    ExecuteRequest, Result, Session, DEFAULT_HOST_CONFIG,
};

/// What a successful session returned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionOutcome {
    /// The `bonding` session dispatched this request.
    Bonded(BondingRequest),
    /// The `unbonding` session dispatched this amount.
    Unbonded(Option<U512>),
}

/// The result of running one [`ExecuteRequest`].
#[derive(Debug, Clone)]
pub struct ExecutionResult {
    outcome: std::result::Result<SessionOutcome, SessionError>,
    effects: Vec<Effect>,
    post_state: GlobalState,
}

impl ExecutionResult {
    /// Returns `true` if the session completed.
    pub fn is_success(&self) -> bool {
        self.outcome.is_ok()
    }

    /// Returns `true` if the session reverted.
    pub fn is_failure(&self) -> bool {
        self.outcome.is_err()
    }

    /// Returns the error the session reverted with, if any.
    pub fn as_error(&self) -> Option<&SessionError> {
        self.outcome.as_ref().err()
    }

    /// Returns the outcome of a successful session.
    pub fn outcome(&self) -> Option<&SessionOutcome> {
        self.outcome.as_ref().ok()
    }

    /// Returns all effects of the session, in the order they happened.
    pub fn effects(&self) -> &[Effect] {
        &self.effects
    }

    /// Returns the purses the session created.
    pub fn created_purses(&self) -> Vec<URef> {
        self.effects
            .iter()
            .filter_map(|effect| match effect {
                Effect::CreatePurse(purse) => Some(*purse),
                _ => None,
            })
            .collect()
    }

    /// Returns the transfers the session made, as `(source, target, amount)`.
    pub fn transfers(&self) -> Vec<(URef, URef, U512)> {
        self.effects
            .iter()
            .filter_map(|effect| match effect {
                Effect::Transfer {
                    source,
                    target,
                    amount,
                } => Some((*source, *target, *amount)),
                _ => None,
            })
            .collect()
    }

    /// Returns the contract calls the session made, as `(contract, entry point, arguments)`.
    pub fn calls(&self) -> Vec<(ContractHash, String, RuntimeArgs)> {
        self.effects
            .iter()
            .filter_map(|effect| match effect {
                Effect::Call {
                    contract_hash,
                    entry_point,
                    args,
                } => Some((*contract_hash, entry_point.clone(), args.clone())),
                _ => None,
            })
            .collect()
    }

    /// Returns the argument `name` of the contract call at `index`, converted into `T`.
    pub fn call_arg<T: CLTyped + FromBytes>(&self, index: usize, name: &str) -> Result<T> {
        let calls = self.calls();
        let (_, _, args) = calls
            .get(index)
            .ok_or_else(|| format!("no contract call at index {}", index))?;
        let value = args
            .get_as(name)?
            .ok_or_else(|| format!("contract call at index {} has no argument {}", index, name))?;
        Ok(value)
    }
}

/// Runs sessions against an in-memory host and keeps the global state they commit.
///
/// Like a real node, a session's effects only reach global state through [`commit`], and
/// committing a reverted session changes nothing.
///
/// [`commit`]: InMemoryHostBuilder::commit
#[derive(Debug)]
pub struct InMemoryHostBuilder {
    config: HostConfig,
    rng: ChaCha8Rng,
    main_purse: URef,
    proof_of_stake_purse: URef,
    state: GlobalState,
    exec_results: Vec<ExecutionResult>,
}

impl Default for InMemoryHostBuilder {
    fn default() -> Self {
        Self::new(DEFAULT_HOST_CONFIG.clone())
    }
}

impl InMemoryHostBuilder {
    /// Returns a builder whose account holds a main purse funded as `config` says.
    pub fn new(config: HostConfig) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(config.seed());
        let main_purse: URef = rng.gen();
        let proof_of_stake_purse: URef = rng.gen();
        let state = GlobalState::default()
            .with_purse(main_purse, config.main_purse_balance())
            .with_purse(proof_of_stake_purse, U512::zero());
        InMemoryHostBuilder {
            config,
            rng,
            main_purse,
            proof_of_stake_purse,
            state,
            exec_results: Vec::new(),
        }
    }

    /// Returns a builder configured from the host config file at `path`.
    pub fn from_config_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let config = HostConfig::from_path(path)?;
        Ok(Self::new(config))
    }

    /// Runs the session of `exec_request` against the committed global state.
    pub fn exec(&mut self, exec_request: ExecuteRequest) -> &mut Self {
        let mut host = InMemoryHost::new(
            &self.config,
            &mut self.rng,
            self.main_purse,
            self.proof_of_stake_purse,
            exec_request.args,
            self.state.clone(),
        );
        let outcome = match exec_request.session {
            Session::Bond => bonding::bond(&mut host).map(SessionOutcome::Bonded),
            Session::Unbond => unbonding::unbond(&mut host).map(SessionOutcome::Unbonded),
        };
        let (post_state, effects) = host.into_parts();
        debug!(
            "{:?} session finished with {:?} after {} effects",
            exec_request.session,
            outcome,
            effects.len()
        );
        self.exec_results.push(ExecutionResult {
            outcome,
            effects,
            post_state,
        });
        self
    }

    /// Commits the global state left by the last session, if it succeeded.
    pub fn commit(&mut self) -> &mut Self {
        let exec_result = self
            .get_last_exec_result()
            .expect("Expected to be called after exec()");
        match exec_result.as_error() {
            None => {
                let post_state = exec_result.post_state.clone();
                info!("committing {} effects", exec_result.effects.len());
                self.state = post_state;
            }
            Some(error) => info!("not committing reverted session: {}", error),
        }
        self
    }

    /// Expects a successful run
    pub fn expect_success(&mut self) -> &mut Self {
        let exec_result = self
            .get_last_exec_result()
            .expect("Expected to be called after exec()");

        if exec_result.is_failure() {
            panic!(
                "Expected successful execution result, but instead got: {:#?}",
                exec_result,
            );
        }
        self
    }

    /// Expects a failed run
    pub fn expect_failure(&mut self) -> &mut Self {
        let exec_result = self
            .get_last_exec_result()
            .expect("Expected to be called after exec()");

        if exec_result.is_success() {
            panic!(
                "Expected failed execution result, but instead got: {:?}",
                exec_result,
            );
        }
        self
    }

    /// Returns `true` if the last exec had an error, otherwise returns false.
    pub fn is_error(&self) -> bool {
        self.get_last_exec_result()
            .expect("Expected to be called after exec()")
            .is_failure()
    }

    /// Returns the error of the last exec, if it had one.
    pub fn get_error(&self) -> Option<SessionError> {
        self.get_last_exec_result()
            .expect("Expected to be called after exec()")
            .as_error()
            .copied()
    }

    /// Returns the code the last exec reverted with, if it reverted.
    pub fn get_revert_code(&self) -> Option<ApiError> {
        self.get_error().map(ApiError::from)
    }

    /// Returns the result of the last exec.
    pub fn get_last_exec_result(&self) -> Option<&ExecutionResult> {
        self.exec_results.last()
    }

    /// Returns the result of the exec at `index`.
    pub fn get_exec_result(&self, index: usize) -> Option<&ExecutionResult> {
        self.exec_results.get(index)
    }

    /// Returns the calling account's main purse.
    pub fn get_main_purse(&self) -> URef {
        self.main_purse
    }

    /// Returns the purse the Proof of Stake contract holds bonded funds in.
    pub fn get_proof_of_stake_purse(&self) -> URef {
        self.proof_of_stake_purse
    }

    /// Returns the committed balance of `purse`.  Panics if the purse doesn't exist.
    pub fn get_purse_balance(&self, purse: URef) -> U512 {
        self.state
            .balance(purse)
            .unwrap_or_else(|| panic!("purse {} should exist", purse))
    }

    /// Returns the committed stake of the calling account.
    pub fn get_stake(&self) -> U512 {
        self.state.stake(self.main_purse)
    }

    /// Returns the committed global state.
    pub fn get_global_state(&self) -> &GlobalState {
        &self.state
    }
}
