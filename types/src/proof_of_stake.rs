//! Entry points, argument names and errors of the Proof of Stake system contract, as seen by the
//! client contracts which call it.

#[cfg(feature = "std")]
use thiserror::Error;

use crate::ApiError;

/// Named constant for method `bond`.
pub const METHOD_BOND: &str = "bond";
/// Named constant for method `unbond`.
pub const METHOD_UNBOND: &str = "unbond";

/// Named constant for `amount`.
pub const ARG_AMOUNT: &str = "amount";
/// Named constant for `purse`.
pub const ARG_PURSE: &str = "purse";

/// Errors the Proof of Stake contract returns to a caller of `bond` or `unbond`.
///
/// The discriminants are the contract's error numbers and end up in
/// [`ApiError::ProofOfStake`].
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(Error))]
#[repr(u8)]
pub enum Error {
    /// The caller has no stake.
    #[cfg_attr(feature = "std", error("Not bonded"))]
    NotBonded = 0,
    /// Attempted to bond less than the minimum bond.
    #[cfg_attr(feature = "std", error("Bond is too small"))]
    BondTooSmall = 5,
    /// The stake would exceed the largest representable amount.
    #[cfg_attr(feature = "std", error("Bond is too large"))]
    BondTooLarge = 6,
    /// Attempted to unbond more than the stake.
    #[cfg_attr(feature = "std", error("Unbond is too large"))]
    UnbondTooLarge = 7,
    /// While bonding, the transfer from source purse to the Proof of Stake internal purse failed.
    #[cfg_attr(feature = "std", error("Bond transfer failed"))]
    BondTransferFailed = 8,
    /// While unbonding, the transfer from the Proof of Stake internal purse to the destination
    /// purse failed.
    #[cfg_attr(feature = "std", error("Unbond transfer failed"))]
    UnbondTransferFailed = 9,
}

#[cfg(not(feature = "std"))]
impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "PoS error {}", *self as u8)
    }
}

impl From<Error> for ApiError {
    fn from(error: Error) -> Self {
        ApiError::ProofOfStake(error as u8)
    }
}
