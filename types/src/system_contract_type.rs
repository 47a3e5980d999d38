//! Home of system contract type enum.

use core::fmt::{self, Display, Formatter};

/// The system contracts a session can ask the host for.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SystemContractType {
    /// Mint contract.
    Mint,
    /// Proof of Stake contract.
    ProofOfStake,
    /// Standard Payment contract.
    StandardPayment,
}

/// The index the host expects in `casper_get_system_contract`.
impl From<SystemContractType> for u32 {
    fn from(system_contract_type: SystemContractType) -> u32 {
        match system_contract_type {
            SystemContractType::Mint => 0,
            SystemContractType::ProofOfStake => 1,
            SystemContractType::StandardPayment => 2,
        }
    }
}

impl Display for SystemContractType {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match *self {
            SystemContractType::Mint => write!(f, "mint"),
            SystemContractType::ProofOfStake => write!(f, "pos"),
            SystemContractType::StandardPayment => write!(f, "standard_payment"),
        }
    }
}
