//! Types used by the bonding client contracts and by the in-memory host which exercises them.
//!
//! # `no_std`
//!
//! By default, the library is `no_std`, however you can enable full `std` functionality by enabling
//! the crate's `std` feature.

#![cfg_attr(not(feature = "std"), no_std)]
#![doc(html_root_url = "https://docs.rs/casper-bonding-types/0.1.0")]
#![doc(test(attr(forbid(warnings))))]
#![warn(missing_docs)]

extern crate alloc;
#[cfg(any(feature = "std", test))]
#[macro_use]
extern crate std;

mod access_rights;
pub mod api_error;
pub mod bytesrepr;
mod cl_type;
mod cl_value;
mod contract_hash;
pub mod proof_of_stake;
pub mod runtime_args;
mod system_contract_type;
mod uint;
mod uref;

pub use access_rights::{AccessRights, ACCESS_RIGHTS_SERIALIZED_LENGTH};
#[doc(inline)]
pub use api_error::ApiError;
pub use cl_type::{CLType, CLTyped};
pub use cl_value::{CLTypeMismatch, CLValue, CLValueError};
pub use contract_hash::{ContractHash, FromStrError, HashAddr, KEY_HASH_LENGTH};
pub use runtime_args::{NamedArg, RuntimeArgs};
pub use system_contract_type::SystemContractType;
pub use uint::{UIntParseError, U512};
pub use uref::{URef, URefAddr, UREF_ADDR_LENGTH, UREF_SERIALIZED_LENGTH};
