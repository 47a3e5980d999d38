//! A library to support testing of the bonding client contracts.
//!
//! Sessions run natively against [`InMemoryHostBuilder`], an in-memory stand-in for a node which
//! serves the host interfaces, keeps purse balances and plays the part of the Proof of Stake
//! contract.
//!
//! # Example
//!
//! ```
//! use casper_bonding_test_support::{ExecuteRequestBuilder, InMemoryHostBuilder};
//! use casper_bonding_types::U512;
//!
//! let mut builder = InMemoryHostBuilder::default();
//! let main_purse_balance = builder.get_purse_balance(builder.get_main_purse());
//!
//! let exec_request = ExecuteRequestBuilder::bond(U512::from(1000)).build();
//! builder.exec(exec_request).expect_success().commit();
//!
//! assert_eq!(builder.get_stake(), U512::from(1000));
//! assert_eq!(
//!     builder.get_purse_balance(builder.get_main_purse()),
//!     main_purse_balance - U512::from(1000)
//! );
//! ```

#![doc(html_root_url = "https://docs.rs/casper-bonding-test-support/0.1.0")]
#![warn(missing_docs)]

pub mod config;
mod error;
mod execute_request_builder;
pub mod host;
mod host_builder;

use once_cell::sync::Lazy;

pub use config::HostConfig;
pub use error::{Error, Result};
pub use execute_request_builder::{ExecuteRequest, ExecuteRequestBuilder, Session};
pub use host_builder::{ExecutionResult, InMemoryHostBuilder, SessionOutcome};

/// The host config loaded from [`config::DEFAULT_PATH`].
pub static DEFAULT_HOST_CONFIG: Lazy<HostConfig> = Lazy::new(|| {
    HostConfig::from_path(&*config::DEFAULT_PATH).expect("should load default host config")
});

/// Installs an `env_logger` logger capturing output for tests.  Safe to call repeatedly.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}
