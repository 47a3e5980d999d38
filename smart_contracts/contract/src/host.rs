//! Interfaces to the host which the session logic is written against.
//!
//! Each trait covers one collaborator of the session: reading the caller-supplied arguments,
//! moving funds between purses and reaching the system contracts.  All calls report failure as an
//! [`ApiError`], exactly as the Wasm host functions do.

use alloc::vec::Vec;

use casper_bonding_types::{ApiError, ContractHash, RuntimeArgs, SystemContractType, URef, U512};

/// Access to the named arguments supplied with the session.
pub trait ArgumentReader {
    /// Returns the serialized bytes of the named argument, or `None` if it wasn't supplied.
    fn get_named_arg_bytes(&mut self, name: &str) -> Result<Option<Vec<u8>>, ApiError>;
}

/// Access to the caller's purses.
pub trait PurseService {
    /// Returns the main purse of the calling account.
    fn get_main_purse(&mut self) -> Result<URef, ApiError>;

    /// Creates a new, empty purse owned by the calling account.
    fn create_purse(&mut self) -> Result<URef, ApiError>;

    /// Moves `amount` from `source` to `target`.  Either the whole amount moves or nothing does.
    fn transfer_from_purse_to_purse(
        &mut self,
        source: URef,
        target: URef,
        amount: U512,
    ) -> Result<(), ApiError>;
}

/// Access to the system contracts.
pub trait SystemContractDispatcher {
    /// Resolves the hash of the given system contract.
    fn get_system_contract(
        &mut self,
        system_contract: SystemContractType,
    ) -> Result<ContractHash, ApiError>;

    /// Calls `entry_point` of the contract stored under `contract_hash`.
    fn call_contract(
        &mut self,
        contract_hash: ContractHash,
        entry_point: &str,
        args: RuntimeArgs,
    ) -> Result<(), ApiError>;

    /// Resolves the hash of the Proof of Stake contract.
    fn get_proof_of_stake(&mut self) -> Result<ContractHash, ApiError> {
        self.get_system_contract(SystemContractType::ProofOfStake)
    }
}

/// Everything a client session needs from its host.
pub trait Host: ArgumentReader + PurseService + SystemContractDispatcher {}

impl<T: ArgumentReader + PurseService + SystemContractDispatcher + ?Sized> Host for T {}
