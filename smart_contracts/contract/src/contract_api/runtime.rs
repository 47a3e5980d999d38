//! Functions for interacting with the current runtime.

use alloc::{vec, vec::Vec};

use casper_bonding_types::{api_error, ApiError, ContractHash, RuntimeArgs};

use crate::{contract_api, ext_ffi};

/// Stops execution of a contract and reverts execution effects with a given [`ApiError`].
///
/// The provided `ApiError` is returned in the form of the numeric exit code to the caller via the
/// deploy response.
pub fn revert<T: Into<ApiError>>(error: T) -> ! {
    unsafe {
        ext_ffi::casper_revert(error.into().into());
    }
}

/// Calls `entry_point_name` of the contract stored under `contract_hash`, passing the given
/// arguments to it.
///
/// Returns the size of the value the called contract returned.  If the called contract reverts,
/// execution stops and `call_contract` doesn't return.
pub fn call_contract(
    contract_hash: ContractHash,
    entry_point_name: &str,
    runtime_args: RuntimeArgs,
) -> Result<usize, ApiError> {
    let (contract_hash_ptr, contract_hash_size, _bytes1) = contract_api::to_ptr(contract_hash)?;
    let (entry_point_name_ptr, entry_point_name_size, _bytes2) =
        contract_api::to_ptr(entry_point_name)?;
    let (runtime_args_ptr, runtime_args_size, _bytes3) = contract_api::to_ptr(runtime_args)?;

    let mut bytes_written: usize = 0;
    let ret = unsafe {
        ext_ffi::casper_call_contract(
            contract_hash_ptr,
            contract_hash_size,
            entry_point_name_ptr,
            entry_point_name_size,
            runtime_args_ptr,
            runtime_args_size,
            &mut bytes_written as *mut usize,
        )
    };
    api_error::result_from(ret)?;
    Ok(bytes_written)
}

fn get_named_arg_size(name: &str) -> Result<Option<usize>, ApiError> {
    let mut arg_size: usize = 0;
    let ret = unsafe {
        ext_ffi::casper_get_named_arg_size(
            name.as_bytes().as_ptr(),
            name.len(),
            &mut arg_size as *mut usize,
        )
    };
    match api_error::result_from(ret) {
        Ok(_) => Ok(Some(arg_size)),
        Err(ApiError::MissingArgument) => Ok(None),
        Err(error) => Err(error),
    }
}

/// Returns the serialized bytes of the named argument passed to the current session, or `None` if
/// no such argument was passed.
pub fn get_named_arg_bytes(name: &str) -> Result<Option<Vec<u8>>, ApiError> {
    let arg_size = match get_named_arg_size(name)? {
        Some(arg_size) => arg_size,
        None => return Ok(None),
    };
    if arg_size == 0 {
        // Avoids a call to get_named_arg with an empty destination
        return Ok(Some(Vec::new()));
    }
    let mut data = vec![0u8; arg_size];
    let ret = unsafe {
        ext_ffi::casper_get_named_arg(
            name.as_bytes().as_ptr(),
            name.len(),
            data.as_mut_ptr(),
            arg_size,
        )
    };
    api_error::result_from(ret)?;
    Ok(Some(data))
}
