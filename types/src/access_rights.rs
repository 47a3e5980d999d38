use alloc::vec::Vec;
use core::fmt::{self, Display, Formatter};

use bitflags::bitflags;

use crate::bytesrepr::{self, FromBytes, ToBytes};

/// The number of bytes in a serialized [`AccessRights`].
pub const ACCESS_RIGHTS_SERIALIZED_LENGTH: usize = 1;

bitflags! {
    /// What the holder of a purse's [`URef`](crate::URef) may do with that purse.
    ///
    /// Funds can only leave a purse through a `WRITE`able reference and only arrive through an
    /// `ADD`able one.
    pub struct AccessRights: u8 {
        /// No permissions.
        const NONE = 0;
        /// May read the balance.
        const READ  = 0b001;
        /// May withdraw funds.
        const WRITE = 0b010;
        /// May deposit funds.
        const ADD   = 0b100;
        /// Full control, as held by the creator of a purse.
        const READ_ADD_WRITE = Self::READ.bits | Self::ADD.bits | Self::WRITE.bits;
    }
}

impl Default for AccessRights {
    fn default() -> Self {
        AccessRights::NONE
    }
}

impl AccessRights {
    /// Returns `true` if the `READ` flag is set.
    pub fn is_readable(self) -> bool {
        self.contains(AccessRights::READ)
    }

    /// Returns `true` if the `WRITE` flag is set.
    pub fn is_writeable(self) -> bool {
        self.contains(AccessRights::WRITE)
    }

    /// Returns `true` if the `ADD` flag is set.
    pub fn is_addable(self) -> bool {
        self.contains(AccessRights::ADD)
    }
}

impl Display for AccessRights {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "NONE");
        }
        let flags = [
            (AccessRights::READ, "READ"),
            (AccessRights::ADD, "ADD"),
            (AccessRights::WRITE, "WRITE"),
        ];
        let mut separator = "";
        for (flag, name) in flags {
            if self.contains(flag) {
                write!(f, "{}{}", separator, name)?;
                separator = "_";
            }
        }
        Ok(())
    }
}

impl ToBytes for AccessRights {
    fn to_bytes(&self) -> Result<Vec<u8>, bytesrepr::Error> {
        self.bits.to_bytes()
    }

    fn serialized_length(&self) -> usize {
        ACCESS_RIGHTS_SERIALIZED_LENGTH
    }
}

impl FromBytes for AccessRights {
    fn from_bytes(bytes: &[u8]) -> Result<(Self, &[u8]), bytesrepr::Error> {
        let (bits, rem) = u8::from_bytes(bytes)?;
        let rights = AccessRights::from_bits(bits).ok_or(bytesrepr::Error::Formatting)?;
        Ok((rights, rem))
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use super::*;

    #[test]
    fn should_need_write_to_withdraw_and_add_to_deposit() {
        let deposit_only = AccessRights::READ | AccessRights::ADD;
        assert!(deposit_only.is_addable());
        assert!(!deposit_only.is_writeable());

        let withdraw_only = AccessRights::WRITE;
        assert!(withdraw_only.is_writeable());
        assert!(!withdraw_only.is_addable());
        assert!(!withdraw_only.is_readable());

        assert!(AccessRights::READ_ADD_WRITE.is_writeable());
        assert!(AccessRights::READ_ADD_WRITE.is_addable());
    }

    #[test]
    fn should_display_flags() {
        assert_eq!(AccessRights::NONE.to_string(), "NONE");
        assert_eq!(AccessRights::READ_ADD_WRITE.to_string(), "READ_ADD_WRITE");
        assert_eq!((AccessRights::READ | AccessRights::WRITE).to_string(), "READ_WRITE");
    }

    #[test]
    fn should_reject_unknown_bits() {
        assert_eq!(
            AccessRights::from_bytes(&[0b1000]).unwrap_err(),
            bytesrepr::Error::Formatting
        );
        let (rights, rem) = AccessRights::from_bytes(&[0b111]).unwrap();
        assert_eq!(rights, AccessRights::READ_ADD_WRITE);
        assert!(rem.is_empty());
    }
}
