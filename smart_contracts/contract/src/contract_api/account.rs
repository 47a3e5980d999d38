//! Functions for accessing the calling account.

use alloc::vec;

use casper_bonding_types::{bytesrepr, ApiError, URef, UREF_SERIALIZED_LENGTH};

use crate::ext_ffi;

/// Retrieves the `URef` of the account's main purse.
pub fn get_main_purse() -> Result<URef, ApiError> {
    let mut bytes = vec![0u8; UREF_SERIALIZED_LENGTH];
    unsafe {
        ext_ffi::casper_get_main_purse(bytes.as_mut_ptr());
    }
    Ok(bytesrepr::deserialize(bytes)?)
}
