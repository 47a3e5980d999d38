//! Contains [`ApiError`], the revert codes shared by sessions and the host.

use core::fmt::{self, Display, Formatter};

use crate::{bytesrepr, CLValueError};

/// Upper bound of the codes reserved for the host and the system contracts.
const RESERVED_ERROR_MAX: u32 = u16::MAX as u32; // 0..=65535

/// Proof of Stake errors will have this value added to them when being converted to a `u32`.
const POS_ERROR_OFFSET: u32 = RESERVED_ERROR_MAX - u8::MAX as u32; // 65280..=65535

/// Errors reported by the host to a session, and the code a session reverts with.
///
/// The `u32` codes are fixed by the host; codes this crate has no variant for are read back as
/// [`ApiError::Unhandled`].
///
/// ```
/// # use casper_bonding_types::ApiError;
/// assert_eq!(2, u32::from(ApiError::MissingArgument));
/// assert_eq!(15, u32::from(ApiError::Transfer));
/// assert_eq!(65_281, u32::from(ApiError::ProofOfStake(1)));
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ApiError {
    /// Specified argument not provided.
    MissingArgument,
    /// Argument not of correct type.
    InvalidArgument,
    /// Invalid purse retrieved, or insufficient rights over it.
    InvalidPurse,
    /// Failed to transfer motes.
    Transfer,
    /// A given type could not be derived from a `CLValue`.
    CLTypeMismatch,
    /// Early end of stream while deserializing.
    EarlyEndOfStream,
    /// Formatting error while deserializing.
    Formatting,
    /// Not all input bytes were consumed in deserializing operation.
    LeftOverBytes,
    /// Out of memory error.
    OutOfMemory,
    /// The given `u32` doesn't map to a [`SystemContractType`](crate::SystemContractType).
    InvalidSystemContract,
    /// An unhandled value, likely representing a bug in the code.
    Unhandled,
    /// The host buffer has been set to a value and should be consumed first by a read operation.
    HostBufferFull,
    /// Error specific to Proof of Stake contract.
    ProofOfStake(u8),
}

impl From<bytesrepr::Error> for ApiError {
    fn from(error: bytesrepr::Error) -> Self {
        match error {
            bytesrepr::Error::EarlyEndOfStream => ApiError::EarlyEndOfStream,
            bytesrepr::Error::Formatting => ApiError::Formatting,
            bytesrepr::Error::LeftOverBytes => ApiError::LeftOverBytes,
            bytesrepr::Error::OutOfMemory => ApiError::OutOfMemory,
        }
    }
}

impl From<CLValueError> for ApiError {
    fn from(error: CLValueError) -> Self {
        match error {
            CLValueError::Serialization(bytesrepr_error) => bytesrepr_error.into(),
            CLValueError::Type(_) => ApiError::CLTypeMismatch,
        }
    }
}

impl From<ApiError> for u32 {
    fn from(error: ApiError) -> Self {
        match error {
            ApiError::MissingArgument => 2,
            ApiError::InvalidArgument => 3,
            ApiError::InvalidPurse => 13,
            ApiError::Transfer => 15,
            ApiError::CLTypeMismatch => 18,
            ApiError::EarlyEndOfStream => 19,
            ApiError::Formatting => 20,
            ApiError::LeftOverBytes => 21,
            ApiError::OutOfMemory => 22,
            ApiError::InvalidSystemContract => 32,
            ApiError::Unhandled => 34,
            ApiError::HostBufferFull => 37,
            ApiError::ProofOfStake(value) => POS_ERROR_OFFSET + u32::from(value),
        }
    }
}

impl Display for ApiError {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            ApiError::ProofOfStake(value) => write!(f, "PoS error: {}", value),
            _ => write!(f, "ApiError::{:?} [{}]", self, u32::from(*self)),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ApiError {}

/// Converts the `i32` returned by a host function to a `Result`, where `0` represents `Ok(())`.
pub fn result_from(value: i32) -> Result<(), ApiError> {
    let error = match value {
        0 => return Ok(()),
        2 => ApiError::MissingArgument,
        3 => ApiError::InvalidArgument,
        13 => ApiError::InvalidPurse,
        15 => ApiError::Transfer,
        18 => ApiError::CLTypeMismatch,
        19 => ApiError::EarlyEndOfStream,
        20 => ApiError::Formatting,
        21 => ApiError::LeftOverBytes,
        22 => ApiError::OutOfMemory,
        32 => ApiError::InvalidSystemContract,
        37 => ApiError::HostBufferFull,
        _ if value >= POS_ERROR_OFFSET as i32 && value <= RESERVED_ERROR_MAX as i32 => {
            ApiError::ProofOfStake((value as u32 - POS_ERROR_OFFSET) as u8)
        }
        _ => ApiError::Unhandled,
    };
    Err(error)
}
