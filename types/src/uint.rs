use alloc::{format, string::ToString, vec::Vec};
use core::fmt::{self, Formatter};

use num_traits::{Num, One, Zero};
use serde::{
    de::{self, Deserialize, Deserializer, Visitor},
    ser::{Serialize, Serializer},
};

use crate::bytesrepr::{self, Error, FromBytes, ToBytes, U8_SERIALIZED_LENGTH};

/// The number of bytes in the little-endian representation of a [`U512`].
const U512_BYTES: usize = 64;

#[allow(
    clippy::assign_op_pattern,
    clippy::ptr_offset_with_cast,
    clippy::manual_range_contains,
    clippy::range_plus_one,
    clippy::transmute_ptr_to_ptr,
    clippy::reversed_empty_ranges
)]
mod macro_code {
    use uint::construct_uint;

    construct_uint! {
        /// A 512-bit unsigned integer, the type of all motes amounts.
        pub struct U512(8);
    }
}

pub use self::macro_code::U512;

/// Error type for parsing a [`U512`] from a string.
#[derive(Debug)]
#[non_exhaustive]
pub enum UIntParseError {
    /// The string was not a valid decimal number.
    FromDecStr(uint::FromDecStrErr),
    /// Only base 10 is supported.
    InvalidRadix,
}

/// Amounts in config files are decimal strings, since TOML integers stop at `i64`.
impl Serialize for U512 {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_string().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for U512 {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct AmountVisitor;

        impl<'de> Visitor<'de> for AmountVisitor {
            type Value = U512;

            fn expecting(&self, formatter: &mut Formatter) -> fmt::Result {
                formatter.write_str("a decimal string or a non-negative integer")
            }

            fn visit_str<E: de::Error>(self, value: &str) -> Result<U512, E> {
                U512::from_dec_str(value).map_err(|error| {
                    de::Error::custom(format!("invalid decimal string: {:?}", error))
                })
            }

            fn visit_u64<E: de::Error>(self, value: u64) -> Result<U512, E> {
                Ok(U512::from(value))
            }

            fn visit_i64<E: de::Error>(self, value: i64) -> Result<U512, E> {
                if value < 0 {
                    return Err(de::Error::custom("negative value"));
                }
                Ok(U512::from(value as u64))
            }
        }

        deserializer.deserialize_any(AmountVisitor)
    }
}

/// A length byte followed by the little-endian bytes up to the most significant non-zero one.
impl ToBytes for U512 {
    fn to_bytes(&self) -> Result<Vec<u8>, Error> {
        let mut buf = [0u8; U512_BYTES];
        self.to_little_endian(&mut buf);
        let num_bytes = (self.bits() + 7) / 8;
        let mut result = Vec::with_capacity(U8_SERIALIZED_LENGTH + num_bytes);
        result.push(num_bytes as u8);
        result.extend_from_slice(&buf[..num_bytes]);
        Ok(result)
    }

    fn serialized_length(&self) -> usize {
        U8_SERIALIZED_LENGTH + (self.bits() + 7) / 8
    }
}

impl FromBytes for U512 {
    fn from_bytes(bytes: &[u8]) -> Result<(Self, &[u8]), Error> {
        let (num_bytes, rem) = u8::from_bytes(bytes)?;
        if num_bytes as usize > U512_BYTES {
            return Err(Error::Formatting);
        }
        let (value, rem) = bytesrepr::safe_split_at(rem, num_bytes as usize)?;
        Ok((U512::from_little_endian(value), rem))
    }
}

impl Zero for U512 {
    fn zero() -> Self {
        U512::zero()
    }

    fn is_zero(&self) -> bool {
        self.is_zero()
    }
}

impl One for U512 {
    fn one() -> Self {
        U512::one()
    }
}

impl Num for U512 {
    type FromStrRadixErr = UIntParseError;

    fn from_str_radix(str: &str, radix: u32) -> Result<Self, Self::FromStrRadixErr> {
        if radix == 10 {
            U512::from_dec_str(str).map_err(UIntParseError::FromDecStr)
        } else {
            Err(UIntParseError::InvalidRadix)
        }
    }
}
