//! Functions for interacting with the system contracts.

use alloc::vec;

use casper_bonding_types::{
    api_error, bytesrepr, ApiError, ContractHash, HashAddr, SystemContractType, URef, U512,
    UREF_SERIALIZED_LENGTH,
};

use crate::{contract_api, ext_ffi};

/// Resolves the hash of the given system contract.
pub fn get_system_contract(system_contract: SystemContractType) -> Result<ContractHash, ApiError> {
    let system_contract_index = system_contract.into();
    let mut hash_data_raw: HashAddr = ContractHash::default().value();
    let ret = unsafe {
        ext_ffi::casper_get_system_contract(
            system_contract_index,
            hash_data_raw.as_mut_ptr(),
            hash_data_raw.len(),
        )
    };
    api_error::result_from(ret)?;
    Ok(bytesrepr::deserialize(hash_data_raw.to_vec())?)
}

/// Creates a new empty purse and returns its [`URef`].
pub fn create_purse() -> Result<URef, ApiError> {
    let mut bytes = vec![0u8; UREF_SERIALIZED_LENGTH];
    let ret = unsafe { ext_ffi::casper_create_purse(bytes.as_mut_ptr(), UREF_SERIALIZED_LENGTH) };
    api_error::result_from(ret)?;
    Ok(bytesrepr::deserialize(bytes)?)
}

/// Transfers `amount` of motes from `source` purse to `target` purse.
pub fn transfer_from_purse_to_purse(
    source: URef,
    target: URef,
    amount: U512,
    id: Option<u64>,
) -> Result<(), ApiError> {
    let (source_ptr, source_size, _bytes1) = contract_api::to_ptr(source)?;
    let (target_ptr, target_size, _bytes2) = contract_api::to_ptr(target)?;
    let (amount_ptr, amount_size, _bytes3) = contract_api::to_ptr(amount)?;
    let (id_ptr, id_size, _bytes4) = contract_api::to_ptr(id)?;
    let result = unsafe {
        ext_ffi::casper_transfer_from_purse_to_purse(
            source_ptr,
            source_size,
            target_ptr,
            target_size,
            amount_ptr,
            amount_size,
            id_ptr,
            id_size,
        )
    };
    api_error::result_from(result)
}
