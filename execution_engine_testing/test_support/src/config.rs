use std::{
    collections::BTreeSet,
    fs, io,
    path::{Path, PathBuf},
};

use log::error;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use casper_bonding_types::{ContractHash, SystemContractType, U512};

/// The name of the host config file on disk.
pub const HOST_CONFIG_NAME: &str = "host.toml";

/// Path to the host config shipped with this crate.
pub static DEFAULT_PATH: Lazy<PathBuf> = Lazy::new(|| {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("resources/")
        .join(HOST_CONFIG_NAME)
});

/// Errors which can occur while loading a [`HostConfig`].
#[derive(Debug, Error)]
pub enum Error {
    /// The config file couldn't be read.
    #[error("failed to load host config from {}: {error}", path.display())]
    FailedToLoad {
        /// Path that failed to be read.
        path: PathBuf,
        /// The underlying OS error.
        error: io::Error,
    },
    /// The config file isn't valid TOML or is missing fields.
    #[error("failed to parse host config: {0}")]
    FailedToParse(toml::de::Error),
    /// The values parsed but are inconsistent.
    #[error("invalid host config")]
    Validation,
}

/// The calling account.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize, Debug)]
pub struct AccountConfig {
    /// Balance of the main purse at the start of a test.
    pub(crate) main_purse_balance: U512,
}

/// Hashes under which the system contracts are installed.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize, Debug)]
pub struct SystemContractsConfig {
    /// The mint.
    pub(crate) mint: ContractHash,
    /// The Proof of Stake contract.
    pub(crate) proof_of_stake: ContractHash,
    /// The standard payment contract.
    pub(crate) standard_payment: ContractHash,
}

/// Behavior of the in-memory Proof of Stake contract.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize, Debug)]
pub struct ProofOfStakeConfig {
    /// Smallest amount `bond` accepts.
    pub(crate) minimum_bond: U512,
}

/// Generation of purse addresses.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize, Debug)]
pub struct PursesConfig {
    /// Seed of the generator the host draws purse addresses from.
    pub(crate) seed: u64,
}

/// This struct can be parsed from a TOML-encoded host config file.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize, Debug)]
pub struct HostConfig {
    #[serde(rename = "account")]
    pub(crate) account_config: AccountConfig,
    #[serde(rename = "system_contracts")]
    pub(crate) system_contracts_config: SystemContractsConfig,
    #[serde(rename = "proof_of_stake")]
    pub(crate) proof_of_stake_config: ProofOfStakeConfig,
    #[serde(rename = "purses")]
    pub(crate) purses_config: PursesConfig,
}

impl HostConfig {
    /// Parses and validates a TOML-encoded host config.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, Error> {
        let host_config: HostConfig = toml::from_slice(bytes).map_err(Error::FailedToParse)?;

        if !host_config.is_valid() {
            return Err(Error::Validation);
        }

        Ok(host_config)
    }

    /// Reads, parses and validates the host config at `path`.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        let path = path.as_ref();
        let bytes = fs::read(path).map_err(|error| Error::FailedToLoad {
            path: path.to_path_buf(),
            error,
        })?;
        HostConfig::from_bytes(&bytes)
    }

    /// Balance of the calling account's main purse.
    pub fn main_purse_balance(&self) -> U512 {
        self.account_config.main_purse_balance
    }

    /// Returns the hash the given system contract is installed under.
    pub fn system_contract(&self, system_contract: SystemContractType) -> ContractHash {
        match system_contract {
            SystemContractType::Mint => self.system_contracts_config.mint,
            SystemContractType::ProofOfStake => self.system_contracts_config.proof_of_stake,
            SystemContractType::StandardPayment => self.system_contracts_config.standard_payment,
        }
    }

    /// Smallest amount the Proof of Stake contract accepts in `bond`.
    pub fn minimum_bond(&self) -> U512 {
        self.proof_of_stake_config.minimum_bond
    }

    /// Seed of the purse address generator.
    pub fn seed(&self) -> u64 {
        self.purses_config.seed
    }

    /// Returns a copy of this config with a different main purse balance.
    pub fn with_main_purse_balance(mut self, main_purse_balance: U512) -> Self {
        self.account_config.main_purse_balance = main_purse_balance;
        self
    }

    /// Returns a copy of this config with a different minimum bond.
    pub fn with_minimum_bond(mut self, minimum_bond: U512) -> Self {
        self.proof_of_stake_config.minimum_bond = minimum_bond;
        self
    }

    fn is_valid(&self) -> bool {
        let system_contracts = &self.system_contracts_config;
        let hashes: BTreeSet<ContractHash> = [
            system_contracts.mint,
            system_contracts.proof_of_stake,
            system_contracts.standard_payment,
        ]
        .into_iter()
        .collect();

        if hashes.len() != 3 {
            error!("system contracts must be installed under distinct hashes");
            return false;
        }

        true
    }
}
