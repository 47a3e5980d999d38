//! Typed access to the named arguments of a session.

use casper_bonding_types::bytesrepr::{self, FromBytes};

use crate::{host::ArgumentReader, Error};

/// Reads the named argument and decodes it as a `T`.
///
/// The argument's bytes are decoded directly; no type tag is checked.  An absent argument yields
/// [`Error::MissingArgument`], bytes which do not decode exactly into a `T` yield
/// [`Error::InvalidArgument`].
pub fn get_named_arg<T, R>(reader: &mut R, name: &str) -> Result<T, Error>
where
    T: FromBytes,
    R: ArgumentReader + ?Sized,
{
    let bytes = reader
        .get_named_arg_bytes(name)
        .map_err(Error::Host)?
        .ok_or(Error::MissingArgument)?;
    bytesrepr::deserialize(bytes).map_err(|_| Error::InvalidArgument)
}

#[cfg(test)]
mod tests {
    use alloc::vec;

    use assert_matches::assert_matches;
    use casper_bonding_types::{proof_of_stake::ARG_AMOUNT, ApiError, U512};

    use super::*;
    use crate::host::mock::RecordingHost;

    struct FailingReader;

    impl ArgumentReader for FailingReader {
        fn get_named_arg_bytes(
            &mut self,
            _name: &str,
        ) -> Result<Option<alloc::vec::Vec<u8>>, ApiError> {
            Err(ApiError::HostBufferFull)
        }
    }

    #[test]
    fn should_decode_present_argument() {
        let mut host = RecordingHost::default().with_arg(ARG_AMOUNT, U512::from(1000));
        let amount: U512 = get_named_arg(&mut host, ARG_AMOUNT).unwrap();
        assert_eq!(amount, U512::from(1000));
    }

    #[test]
    fn should_report_missing_argument() {
        let mut host = RecordingHost::default();
        assert_matches!(
            get_named_arg::<U512, _>(&mut host, ARG_AMOUNT),
            Err(Error::MissingArgument)
        );
    }

    #[test]
    fn should_report_invalid_argument() {
        // length prefix larger than a U512
        let mut host = RecordingHost::default().with_raw_arg(ARG_AMOUNT, vec![65, 1, 2, 3]);
        assert_matches!(
            get_named_arg::<U512, _>(&mut host, ARG_AMOUNT),
            Err(Error::InvalidArgument)
        );

        // truncated
        let mut host = RecordingHost::default().with_raw_arg(ARG_AMOUNT, vec![3, 1, 2]);
        assert_matches!(
            get_named_arg::<U512, _>(&mut host, ARG_AMOUNT),
            Err(Error::InvalidArgument)
        );

        // trailing bytes
        let mut host = RecordingHost::default().with_raw_arg(ARG_AMOUNT, vec![1, 1, 0]);
        assert_matches!(
            get_named_arg::<U512, _>(&mut host, ARG_AMOUNT),
            Err(Error::InvalidArgument)
        );

        // empty
        let mut host = RecordingHost::default().with_raw_arg(ARG_AMOUNT, vec![]);
        assert_matches!(
            get_named_arg::<U512, _>(&mut host, ARG_AMOUNT),
            Err(Error::InvalidArgument)
        );
    }

    #[test]
    fn should_pass_reader_failure_through() {
        assert_matches!(
            get_named_arg::<U512, _>(&mut FailingReader, ARG_AMOUNT),
            Err(Error::Host(ApiError::HostBufferFull))
        );
    }
}
