use casper_bonding_types::{
    proof_of_stake::ARG_AMOUNT, runtime_args, CLType, CLValue, RuntimeArgs, U512,
};

/// The session code an [`ExecuteRequest`] runs.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Session {
    /// The `bonding` client contract.
    Bond,
    /// The `unbonding` client contract.
    Unbond,
}

/// A request to run a session against the in-memory host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecuteRequest {
    /// The session to run.
    pub session: Session,
    /// The named arguments the session is called with.
    pub args: RuntimeArgs,
}

/// Builds an [`ExecuteRequest`].
#[derive(Debug)]
pub struct ExecuteRequestBuilder {
    session: Session,
    args: RuntimeArgs,
}

impl ExecuteRequestBuilder {
    /// Returns a new `ExecuteRequestBuilder` running `session` with the given arguments.
    pub fn new(session: Session, args: RuntimeArgs) -> Self {
        ExecuteRequestBuilder { session, args }
    }

    /// Returns a new `ExecuteRequestBuilder` bonding `amount`.
    pub fn bond(amount: U512) -> Self {
        Self::new(Session::Bond, runtime_args! { ARG_AMOUNT => amount })
    }

    /// Returns a new `ExecuteRequestBuilder` unbonding `amount`, or the whole stake if `None`.
    pub fn unbond(amount: Option<U512>) -> Self {
        Self::new(Session::Unbond, runtime_args! { ARG_AMOUNT => amount })
    }

    /// Sets the named argument `name` to the given raw bytes, replacing any existing value.
    ///
    /// The bytes are passed to the session as they are, which allows supplying arguments that
    /// don't decode.
    pub fn with_raw_arg(self, name: &str, cl_type: CLType, bytes: Vec<u8>) -> Self {
        let mut builder = self.without_arg(name);
        builder
            .args
            .insert_cl_value(name, CLValue::from_components(cl_type, bytes));
        builder
    }

    /// Removes the named argument `name`.
    pub fn without_arg(mut self, name: &str) -> Self {
        let args: Vec<_> = self
            .args
            .named_args()
            .filter(|named_arg| named_arg.name() != name)
            .cloned()
            .collect();
        self.args = RuntimeArgs::from(args);
        self
    }

    /// Consumes self and returns an `ExecuteRequest`.
    pub fn build(self) -> ExecuteRequest {
        ExecuteRequest {
            session: self.session,
            args: self.args,
        }
    }
}
