//! Session logic of the bonding and unbonding client contracts.
//!
//! The logic is written against the traits in [`host`], so the same code runs inside a Wasm
//! session (through `FfiHost`, which binds the `casper_*` host functions) and against an in-memory
//! host in tests.
//!
//! # `no_std`
//!
//! By default, the library is `no_std`, however you can enable full `std` functionality by enabling
//! the crate's `std` feature.
//!
//! # Example
//!
//! The following example contains the whole of the `bonding` session contract.
//!
//! ```rust,ignore
//! #![no_std]
//! #![no_main]
//!
//! use casper_bonding_contract::{bonding, contract_api::FfiHost, unwrap_or_revert::UnwrapOrRevert};
//!
//! #[no_mangle]
//! pub extern "C" fn call() {
//!     bonding::bond(&mut FfiHost).unwrap_or_revert();
//! }
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(
    all(target_arch = "wasm32", not(feature = "std")),
    feature(alloc_error_handler, core_intrinsics, lang_items)
)]
#![doc(html_root_url = "https://docs.rs/casper-bonding-contract/0.1.0")]
#![doc(test(attr(forbid(warnings))))]
#![warn(missing_docs)]

extern crate alloc;
#[cfg(any(feature = "std", test))]
extern crate std;

/// An instance of [`WeeAlloc`](https://docs.rs/wee_alloc) which allows contracts built as `no_std`
/// to avoid having to provide a global allocator themselves.
#[cfg(all(target_arch = "wasm32", not(feature = "std")))]
#[global_allocator]
pub static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

pub mod args;
pub mod bonding;
#[cfg(target_arch = "wasm32")]
pub mod contract_api;
mod error;
#[cfg(target_arch = "wasm32")]
pub mod ext_ffi;
#[cfg(all(target_arch = "wasm32", not(feature = "std")))]
pub mod handlers;
pub mod host;
pub mod unbonding;
#[cfg(target_arch = "wasm32")]
pub mod unwrap_or_revert;

pub use error::Error;
