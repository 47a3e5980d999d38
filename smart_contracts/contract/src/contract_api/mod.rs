//! Contains support for writing session code against the host functions.
//!
//! Every function here reports host failures as an [`ApiError`] instead of reverting, so that the
//! session logic decides what to revert with.  [`FfiHost`] ties them to the [`host`](crate::host)
//! traits.

pub mod account;
pub mod runtime;
pub mod system;

use alloc::vec::Vec;

use casper_bonding_types::{
    bytesrepr::ToBytes, ApiError, ContractHash, RuntimeArgs, SystemContractType, URef, U512,
};

use crate::host::{ArgumentReader, PurseService, SystemContractDispatcher};

fn to_ptr<T: ToBytes>(t: T) -> Result<(*const u8, usize, Vec<u8>), ApiError> {
    let bytes = t.into_bytes()?;
    let ptr = bytes.as_ptr();
    let size = bytes.len();
    Ok((ptr, size, bytes))
}

/// The host of a session running as Wasm, backed by the `casper_*` host functions.
#[derive(Debug, Default, Copy, Clone)]
pub struct FfiHost;

impl ArgumentReader for FfiHost {
    fn get_named_arg_bytes(&mut self, name: &str) -> Result<Option<Vec<u8>>, ApiError> {
        runtime::get_named_arg_bytes(name)
    }
}

impl PurseService for FfiHost {
    fn get_main_purse(&mut self) -> Result<URef, ApiError> {
        account::get_main_purse()
    }

    fn create_purse(&mut self) -> Result<URef, ApiError> {
        system::create_purse()
    }

    fn transfer_from_purse_to_purse(
        &mut self,
        source: URef,
        target: URef,
        amount: U512,
    ) -> Result<(), ApiError> {
        system::transfer_from_purse_to_purse(source, target, amount, None)
    }
}

impl SystemContractDispatcher for FfiHost {
    fn get_system_contract(
        &mut self,
        system_contract: SystemContractType,
    ) -> Result<ContractHash, ApiError> {
        system::get_system_contract(system_contract)
    }

    fn call_contract(
        &mut self,
        contract_hash: ContractHash,
        entry_point: &str,
        args: RuntimeArgs,
    ) -> Result<(), ApiError> {
        runtime::call_contract(contract_hash, entry_point, args).map(|_| ())
    }
}
