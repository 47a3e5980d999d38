use alloc::{boxed::Box, string::String, vec::Vec};

use crate::{
    bytesrepr::{self, FromBytes, ToBytes},
    URef, U512,
};

/// Nested types deeper than this are rejected while deserializing.
const CL_TYPE_RECURSION_DEPTH: u8 = 50;

// Tags are shared with the host; the gaps belong to types no session argument uses.
const CL_TYPE_TAG_U8: u8 = 3;
const CL_TYPE_TAG_U32: u8 = 4;
const CL_TYPE_TAG_U64: u8 = 5;
const CL_TYPE_TAG_U512: u8 = 8;
const CL_TYPE_TAG_UNIT: u8 = 9;
const CL_TYPE_TAG_STRING: u8 = 10;
const CL_TYPE_TAG_UREF: u8 = 12;
const CL_TYPE_TAG_OPTION: u8 = 13;
const CL_TYPE_TAG_LIST: u8 = 14;
const CL_TYPE_TAG_BYTE_ARRAY: u8 = 15;

/// The declared type of a [`CLValue`](crate::CLValue) passed between a session and the host.
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Debug)]
pub enum CLType {
    /// `u8` primitive.
    U8,
    /// `u32` primitive.
    U32,
    /// `u64` primitive.
    U64,
    /// [`U512`] amount of motes.
    U512,
    /// `()` primitive.
    Unit,
    /// `String` primitive.
    String,
    /// Purse reference.
    URef,
    /// `Option` of a `CLType`.
    Option(Box<CLType>),
    /// Variable-length list of a single `CLType`.
    List(Box<CLType>),
    /// Fixed-length list of `u8`, e.g. a contract hash.
    ByteArray(u32),
}

impl CLType {
    /// The `len()` of the `Vec<u8>` resulting from `self.to_bytes()`.
    pub fn serialized_length(&self) -> usize {
        bytesrepr::U8_SERIALIZED_LENGTH
            + match self {
                CLType::Option(cl_type) | CLType::List(cl_type) => cl_type.serialized_length(),
                CLType::ByteArray(len) => len.serialized_length(),
                _ => 0,
            }
    }

    /// Appends the serialized form of `self` to `stream`.
    pub fn append_bytes(&self, stream: &mut Vec<u8>) -> Result<(), bytesrepr::Error> {
        match self {
            CLType::U8 => stream.push(CL_TYPE_TAG_U8),
            CLType::U32 => stream.push(CL_TYPE_TAG_U32),
            CLType::U64 => stream.push(CL_TYPE_TAG_U64),
            CLType::U512 => stream.push(CL_TYPE_TAG_U512),
            CLType::Unit => stream.push(CL_TYPE_TAG_UNIT),
            CLType::String => stream.push(CL_TYPE_TAG_STRING),
            CLType::URef => stream.push(CL_TYPE_TAG_UREF),
            CLType::Option(cl_type) => {
                stream.push(CL_TYPE_TAG_OPTION);
                cl_type.append_bytes(stream)?;
            }
            CLType::List(cl_type) => {
                stream.push(CL_TYPE_TAG_LIST);
                cl_type.append_bytes(stream)?;
            }
            CLType::ByteArray(len) => {
                stream.push(CL_TYPE_TAG_BYTE_ARRAY);
                stream.append(&mut len.to_bytes()?);
            }
        }
        Ok(())
    }
}

impl ToBytes for CLType {
    fn to_bytes(&self) -> Result<Vec<u8>, bytesrepr::Error> {
        let mut result = bytesrepr::allocate_buffer(self)?;
        self.append_bytes(&mut result)?;
        Ok(result)
    }

    fn serialized_length(&self) -> usize {
        CLType::serialized_length(self)
    }
}

impl FromBytes for CLType {
    fn from_bytes(bytes: &[u8]) -> Result<(Self, &[u8]), bytesrepr::Error> {
        depth_limited_from_bytes(0, bytes)
    }
}

fn depth_limited_from_bytes(depth: u8, bytes: &[u8]) -> Result<(CLType, &[u8]), bytesrepr::Error> {
    if depth >= CL_TYPE_RECURSION_DEPTH {
        return Err(bytesrepr::Error::Formatting);
    }
    let (tag, remainder) = u8::from_bytes(bytes)?;
    let cl_type = match tag {
        CL_TYPE_TAG_U8 => CLType::U8,
        CL_TYPE_TAG_U32 => CLType::U32,
        CL_TYPE_TAG_U64 => CLType::U64,
        CL_TYPE_TAG_U512 => CLType::U512,
        CL_TYPE_TAG_UNIT => CLType::Unit,
        CL_TYPE_TAG_STRING => CLType::String,
        CL_TYPE_TAG_UREF => CLType::URef,
        CL_TYPE_TAG_OPTION | CL_TYPE_TAG_LIST => {
            let (inner, remainder) = depth_limited_from_bytes(depth + 1, remainder)?;
            let inner = Box::new(inner);
            let cl_type = if tag == CL_TYPE_TAG_OPTION {
                CLType::Option(inner)
            } else {
                CLType::List(inner)
            };
            return Ok((cl_type, remainder));
        }
        CL_TYPE_TAG_BYTE_ARRAY => {
            let (len, remainder) = u32::from_bytes(remainder)?;
            return Ok((CLType::ByteArray(len), remainder));
        }
        _ => return Err(bytesrepr::Error::Formatting),
    };
    Ok((cl_type, remainder))
}

/// A type which can be described as a [`CLType`].
pub trait CLTyped {
    /// The `CLType` of `Self`.
    fn cl_type() -> CLType;
}

macro_rules! impl_cl_typed {
    ($($type:ty => $cl_type:ident),* $(,)?) => {
        $(
            impl CLTyped for $type {
                fn cl_type() -> CLType {
                    CLType::$cl_type
                }
            }
        )*
    };
}

impl_cl_typed! {
    u8 => U8,
    u32 => U32,
    u64 => U64,
    U512 => U512,
    () => Unit,
    String => String,
    &str => String,
    URef => URef,
}

impl<T: CLTyped> CLTyped for Option<T> {
    fn cl_type() -> CLType {
        CLType::Option(Box::new(T::cl_type()))
    }
}

impl<T: CLTyped> CLTyped for Vec<T> {
    fn cl_type() -> CLType {
        CLType::List(Box::new(T::cl_type()))
    }
}

impl<const COUNT: usize> CLTyped for [u8; COUNT] {
    fn cl_type() -> CLType {
        CLType::ByteArray(COUNT as u32)
    }
}
