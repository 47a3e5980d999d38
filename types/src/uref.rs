use alloc::vec::Vec;
use core::fmt::{self, Debug, Display, Formatter};

use hex_fmt::HexFmt;
use rand::{
    distributions::{Distribution, Standard},
    Rng,
};

use crate::{
    bytesrepr::{self, FromBytes, ToBytes},
    AccessRights, ACCESS_RIGHTS_SERIALIZED_LENGTH,
};

/// The number of bytes in a [`URef`] address.
pub const UREF_ADDR_LENGTH: usize = 32;

/// The number of bytes in a serialized [`URef`].
pub const UREF_SERIALIZED_LENGTH: usize = UREF_ADDR_LENGTH + ACCESS_RIGHTS_SERIALIZED_LENGTH;

/// The address of a purse in global state.
pub type URefAddr = [u8; UREF_ADDR_LENGTH];

/// An unforgeable reference to a purse: its address together with the [`AccessRights`] the
/// holder has over it.
///
/// Two `URef`s with the same address name the same purse, whatever their rights.
#[derive(PartialOrd, Ord, PartialEq, Eq, Hash, Clone, Copy)]
pub struct URef(URefAddr, AccessRights);

impl URef {
    /// Constructs a [`URef`] from an address and access rights.
    pub const fn new(address: URefAddr, access_rights: AccessRights) -> Self {
        URef(address, access_rights)
    }

    /// Returns the address of the purse.
    pub fn addr(&self) -> URefAddr {
        self.0
    }

    /// Returns the access rights of this reference.
    pub fn access_rights(&self) -> AccessRights {
        self.1
    }

    /// Returns a reference to the same purse with different access rights.
    #[must_use]
    pub fn with_access_rights(self, access_rights: AccessRights) -> Self {
        URef(self.0, access_rights)
    }

    /// Returns `true` if funds may be withdrawn through this reference.
    #[must_use]
    pub fn is_writeable(self) -> bool {
        self.1.is_writeable()
    }

    /// Returns `true` if funds may be deposited through this reference.
    #[must_use]
    pub fn is_addable(self) -> bool {
        self.1.is_addable()
    }
}

impl Display for URef {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "URef({}, {})", HexFmt(&self.0), self.1)
    }
}

impl Debug for URef {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{}", self)
    }
}

impl ToBytes for URef {
    fn to_bytes(&self) -> Result<Vec<u8>, bytesrepr::Error> {
        let mut result = bytesrepr::allocate_buffer(self)?;
        result.append(&mut self.0.to_bytes()?);
        result.append(&mut self.1.to_bytes()?);
        Ok(result)
    }

    fn serialized_length(&self) -> usize {
        UREF_SERIALIZED_LENGTH
    }
}

impl FromBytes for URef {
    fn from_bytes(bytes: &[u8]) -> Result<(Self, &[u8]), bytesrepr::Error> {
        let (addr, rem) = FromBytes::from_bytes(bytes)?;
        let (access_rights, rem) = FromBytes::from_bytes(rem)?;
        Ok((URef(addr, access_rights), rem))
    }
}

/// Samples the reference a purse's creator receives: a random address with full rights.
impl Distribution<URef> for Standard {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> URef {
        URef::new(rng.gen(), AccessRights::READ_ADD_WRITE)
    }
}
