use assert_matches::assert_matches;

use casper_bonding_contract::Error;
use casper_bonding_test_support::{
    init_logging, ExecuteRequestBuilder, InMemoryHostBuilder, Session, SessionOutcome,
    DEFAULT_HOST_CONFIG,
};
use casper_bonding_types::{
    proof_of_stake::{self, ARG_AMOUNT, METHOD_UNBOND},
    runtime_args, ApiError, SystemContractType, U512,
};

const BOND_AMOUNT: u64 = 1000;

fn bonded_builder() -> InMemoryHostBuilder {
    let mut builder = InMemoryHostBuilder::default();
    builder
        .exec(ExecuteRequestBuilder::bond(U512::from(BOND_AMOUNT)).build())
        .expect_success()
        .commit();
    builder
}

#[test]
fn should_unbond_whole_stake() {
    init_logging();
    let mut builder = InMemoryHostBuilder::default();
    let main_purse = builder.get_main_purse();
    let main_purse_balance = builder.get_purse_balance(main_purse);
    builder
        .exec(ExecuteRequestBuilder::bond(U512::from(BOND_AMOUNT)).build())
        .expect_success()
        .commit();

    builder
        .exec(ExecuteRequestBuilder::unbond(None).build())
        .expect_success()
        .commit();

    let exec_result = builder.get_last_exec_result().unwrap();
    assert_eq!(exec_result.outcome(), Some(&SessionOutcome::Unbonded(None)));
    assert!(exec_result.created_purses().is_empty());
    assert!(exec_result.transfers().is_empty());
    let calls = exec_result.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(
        calls[0].0,
        DEFAULT_HOST_CONFIG.system_contract(SystemContractType::ProofOfStake)
    );
    assert_eq!(calls[0].1, METHOD_UNBOND);
    assert_eq!(
        exec_result.call_arg::<Option<U512>>(0, ARG_AMOUNT),
        Ok(None)
    );

    assert_eq!(builder.get_stake(), U512::zero());
    assert_eq!(builder.get_purse_balance(main_purse), main_purse_balance);
}

#[test]
fn should_unbond_part_of_stake() {
    let mut builder = bonded_builder();
    let unbond_amount = Some(U512::from(400));

    builder
        .exec(ExecuteRequestBuilder::unbond(unbond_amount).build())
        .expect_success()
        .commit();

    let exec_result = builder.get_last_exec_result().unwrap();
    assert_eq!(
        exec_result.call_arg::<Option<U512>>(0, ARG_AMOUNT),
        Ok(unbond_amount)
    );
    assert_eq!(builder.get_stake(), U512::from(BOND_AMOUNT - 400));
}

#[test]
fn should_revert_when_not_bonded() {
    let mut builder = InMemoryHostBuilder::default();

    builder
        .exec(ExecuteRequestBuilder::unbond(None).build())
        .expect_failure()
        .commit();

    assert_eq!(
        builder.get_revert_code(),
        Some(ApiError::from(proof_of_stake::Error::NotBonded))
    );
}

#[test]
fn should_not_unbond_after_bonding_nothing() {
    let mut builder = InMemoryHostBuilder::default();
    builder
        .exec(ExecuteRequestBuilder::bond(U512::zero()).build())
        .expect_success()
        .commit();
    assert_eq!(builder.get_stake(), U512::zero());

    builder
        .exec(ExecuteRequestBuilder::unbond(None).build())
        .expect_failure()
        .commit();

    assert_eq!(
        builder.get_revert_code(),
        Some(ApiError::from(proof_of_stake::Error::NotBonded))
    );
}

#[test]
fn should_revert_when_unbonding_more_than_stake() {
    let mut builder = bonded_builder();

    builder
        .exec(ExecuteRequestBuilder::unbond(Some(U512::from(BOND_AMOUNT + 1))).build())
        .expect_failure()
        .commit();

    assert_matches!(
        builder.get_error(),
        Some(Error::Host(ApiError::ProofOfStake(code)))
            if code == proof_of_stake::Error::UnbondTooLarge as u8
    );
    assert_eq!(builder.get_stake(), U512::from(BOND_AMOUNT));
}

#[test]
fn should_revert_without_amount() {
    let mut builder = bonded_builder();

    builder
        .exec(ExecuteRequestBuilder::unbond(None).without_arg(ARG_AMOUNT).build())
        .expect_failure();

    assert_eq!(builder.get_error(), Some(Error::MissingArgument));
    assert!(builder.get_last_exec_result().unwrap().calls().is_empty());
}

#[test]
fn should_revert_with_bare_amount() {
    let mut builder = bonded_builder();

    // `1000` as a `U512` starts with the byte 2, which is no `Option` tag
    let exec_request = ExecuteRequestBuilder::new(
        Session::Unbond,
        runtime_args! { ARG_AMOUNT => U512::from(BOND_AMOUNT) },
    )
    .build();
    builder.exec(exec_request).expect_failure();

    assert_eq!(builder.get_error(), Some(Error::InvalidArgument));
}
