//! Named arguments passed to a session or to a contract entry point.

use alloc::{string::String, vec::Vec};

use crate::{
    bytesrepr::{self, Error, FromBytes, ToBytes},
    CLTyped, CLValue, CLValueError,
};

/// A single named argument.
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Debug)]
pub struct NamedArg(String, CLValue);

impl NamedArg {
    /// Returns a new `NamedArg`.
    pub fn new(name: String, value: CLValue) -> Self {
        NamedArg(name, value)
    }

    /// Returns the name.
    pub fn name(&self) -> &str {
        &self.0
    }

    /// Returns the value.
    pub fn cl_value(&self) -> &CLValue {
        &self.1
    }
}

impl ToBytes for NamedArg {
    fn to_bytes(&self) -> Result<Vec<u8>, Error> {
        let mut result = bytesrepr::allocate_buffer(self)?;
        result.append(&mut self.0.to_bytes()?);
        result.append(&mut self.1.to_bytes()?);
        Ok(result)
    }

    fn serialized_length(&self) -> usize {
        self.0.serialized_length() + self.1.serialized_length()
    }
}

impl FromBytes for NamedArg {
    fn from_bytes(bytes: &[u8]) -> Result<(Self, &[u8]), Error> {
        let (name, remainder) = String::from_bytes(bytes)?;
        let (cl_value, remainder) = CLValue::from_bytes(remainder)?;
        Ok((NamedArg(name, cl_value), remainder))
    }
}

/// The arguments of a call, in the order they were inserted.
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Debug, Default)]
pub struct RuntimeArgs(Vec<NamedArg>);

impl RuntimeArgs {
    /// Returns an empty `RuntimeArgs`.
    pub fn new() -> RuntimeArgs {
        RuntimeArgs::default()
    }

    /// Builds a `RuntimeArgs` in `func`, so that insertion failures can be propagated with `?`
    /// and handled once.
    pub fn try_new<F>(func: F) -> Result<RuntimeArgs, CLValueError>
    where
        F: FnOnce(&mut RuntimeArgs) -> Result<(), CLValueError>,
    {
        let mut runtime_args = RuntimeArgs::new();
        func(&mut runtime_args)?;
        Ok(runtime_args)
    }

    /// Gets an argument by its name.
    pub fn get(&self, name: &str) -> Option<&CLValue> {
        self.0
            .iter()
            .find(|named_arg| named_arg.name() == name)
            .map(NamedArg::cl_value)
    }

    /// Gets an argument by its name and converts it into `T`.
    ///
    /// Returns `Ok(None)` if no argument of that name is present.
    pub fn get_as<T: CLTyped + FromBytes>(&self, name: &str) -> Result<Option<T>, CLValueError> {
        self.get(name).cloned().map(CLValue::into_t).transpose()
    }

    /// Returns the number of arguments.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if there are no arguments.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Appends the argument `key` with the given value.
    pub fn insert<K, V>(&mut self, key: K, value: V) -> Result<(), CLValueError>
    where
        K: Into<String>,
        V: CLTyped + ToBytes,
    {
        let cl_value = CLValue::from_t(value)?;
        self.insert_cl_value(key, cl_value);
        Ok(())
    }

    /// Appends the argument `key` with an already constructed [`CLValue`].
    pub fn insert_cl_value<K: Into<String>>(&mut self, key: K, cl_value: CLValue) {
        self.0.push(NamedArg(key.into(), cl_value));
    }

    /// Returns an iterator over the named arguments, in insertion order.
    pub fn named_args(&self) -> impl Iterator<Item = &NamedArg> {
        self.0.iter()
    }
}

impl From<Vec<NamedArg>> for RuntimeArgs {
    fn from(values: Vec<NamedArg>) -> Self {
        RuntimeArgs(values)
    }
}

impl ToBytes for RuntimeArgs {
    fn to_bytes(&self) -> Result<Vec<u8>, Error> {
        self.0.to_bytes()
    }

    fn serialized_length(&self) -> usize {
        self.0.serialized_length()
    }
}

impl FromBytes for RuntimeArgs {
    fn from_bytes(bytes: &[u8]) -> Result<(Self, &[u8]), Error> {
        let (args, remainder) = Vec::<NamedArg>::from_bytes(bytes)?;
        Ok((RuntimeArgs(args), remainder))
    }
}

/// Builds a [`RuntimeArgs`] from `name => value` pairs.
///
/// Panics if a value can't be serialized; use [`RuntimeArgs::try_new`] where that must be
/// handled.
///
/// ```
/// use casper_bonding_types::{runtime_args, U512};
/// let args = runtime_args! { "amount" => U512::from(1000) };
/// assert_eq!(args.len(), 1);
/// ```
#[macro_export]
macro_rules! runtime_args {
    () => ($crate::RuntimeArgs::new());
    ( $($key:expr => $value:expr,)+ ) => ($crate::runtime_args!($($key => $value),+));
    ( $($key:expr => $value:expr),* ) => {
        {
            let mut named_args = $crate::RuntimeArgs::new();
            $(
                named_args.insert($key, $value).unwrap();
            )*
            named_args
        }
    };
}
