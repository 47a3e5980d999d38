//! Home of [`UnwrapOrRevert`], a convenience trait for unwrapping values.

use casper_bonding_types::ApiError;

use crate::contract_api::runtime;

/// A trait which provides syntactic sugar for unwrapping a `Result` or calling
/// [`runtime::revert`] with the error's code if this fails.
pub trait UnwrapOrRevert<T> {
    /// Unwraps the value into its inner type or reverts with the code of the error.
    fn unwrap_or_revert(self) -> T;
}

impl<T, E: Into<ApiError>> UnwrapOrRevert<T> for Result<T, E> {
    fn unwrap_or_revert(self) -> T {
        self.unwrap_or_else(|error| runtime::revert(error.into()))
    }
}
