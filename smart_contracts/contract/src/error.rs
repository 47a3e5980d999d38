use casper_bonding_types::ApiError;
#[cfg(feature = "std")]
use thiserror::Error;

/// Errors which abort a bonding or unbonding session.
///
/// Every variant maps onto the [`ApiError`] the session reverts with.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(Error))]
pub enum Error {
    /// The `amount` argument was not supplied.
    #[cfg_attr(feature = "std", error("missing argument"))]
    MissingArgument,
    /// The `amount` argument could not be decoded.
    #[cfg_attr(feature = "std", error("invalid argument"))]
    InvalidArgument,
    /// The purse service reported a non-success status for the purse-to-purse transfer.
    #[cfg_attr(feature = "std", error("transfer failed: {0}"))]
    TransferFailed(ApiError),
    /// Any other host call failed.
    #[cfg_attr(feature = "std", error("host error: {0}"))]
    Host(ApiError),
}

#[cfg(not(feature = "std"))]
impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        match self {
            Error::MissingArgument => write!(f, "missing argument"),
            Error::InvalidArgument => write!(f, "invalid argument"),
            Error::TransferFailed(error) => write!(f, "transfer failed: {}", error),
            Error::Host(error) => write!(f, "host error: {}", error),
        }
    }
}

impl From<Error> for ApiError {
    fn from(error: Error) -> Self {
        match error {
            Error::MissingArgument => ApiError::MissingArgument,
            Error::InvalidArgument => ApiError::InvalidArgument,
            Error::TransferFailed(_) => ApiError::Transfer,
            Error::Host(error) => error,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_map_to_revert_codes() {
        assert_eq!(u32::from(ApiError::from(Error::MissingArgument)), 2);
        assert_eq!(u32::from(ApiError::from(Error::InvalidArgument)), 3);
        assert_eq!(
            u32::from(ApiError::from(Error::TransferFailed(ApiError::InvalidPurse))),
            15
        );
    }

    #[test]
    fn should_pass_host_errors_through() {
        assert_eq!(
            ApiError::from(Error::Host(ApiError::InvalidSystemContract)),
            ApiError::InvalidSystemContract
        );
        assert_eq!(
            ApiError::from(Error::Host(ApiError::ProofOfStake(5))),
            ApiError::ProofOfStake(5)
        );
    }
}
