use assert_matches::assert_matches;
use proptest::prelude::*;

use casper_bonding_contract::Error;
use casper_bonding_test_support::{
    init_logging, ExecuteRequestBuilder, InMemoryHostBuilder, Session, SessionOutcome,
    DEFAULT_HOST_CONFIG,
};
use casper_bonding_types::{
    proof_of_stake::{self, ARG_AMOUNT, ARG_PURSE, METHOD_BOND},
    runtime_args, ApiError, CLType, SystemContractType, URef, U512,
};

const BOND_AMOUNT: u64 = 1000;

#[test]
fn should_bond_amount_through_new_purse() {
    init_logging();
    let mut builder = InMemoryHostBuilder::default();
    let main_purse = builder.get_main_purse();
    let main_purse_balance = builder.get_purse_balance(main_purse);

    builder
        .exec(ExecuteRequestBuilder::bond(U512::from(BOND_AMOUNT)).build())
        .expect_success()
        .commit();

    let exec_result = builder.get_last_exec_result().unwrap();
    let created_purses = exec_result.created_purses();
    assert_eq!(created_purses.len(), 1);
    let bonding_purse = created_purses[0];
    assert_ne!(bonding_purse, main_purse);

    assert_eq!(
        exec_result.transfers(),
        vec![(main_purse, bonding_purse, U512::from(BOND_AMOUNT))]
    );

    let calls = exec_result.calls();
    assert_eq!(calls.len(), 1);
    let (contract_hash, entry_point, args) = &calls[0];
    assert_eq!(
        *contract_hash,
        DEFAULT_HOST_CONFIG.system_contract(SystemContractType::ProofOfStake)
    );
    assert_eq!(entry_point, METHOD_BOND);
    assert_eq!(args.len(), 2);
    assert_eq!(
        exec_result.call_arg::<U512>(0, ARG_AMOUNT),
        Ok(U512::from(BOND_AMOUNT))
    );
    assert_eq!(exec_result.call_arg::<URef>(0, ARG_PURSE), Ok(bonding_purse));
    assert_matches!(
        exec_result.outcome(),
        Some(SessionOutcome::Bonded(request)) if request.purse() == bonding_purse
    );

    assert_eq!(
        builder.get_purse_balance(main_purse),
        main_purse_balance - U512::from(BOND_AMOUNT)
    );
    assert_eq!(builder.get_purse_balance(bonding_purse), U512::zero());
    assert_eq!(
        builder.get_purse_balance(builder.get_proof_of_stake_purse()),
        U512::from(BOND_AMOUNT)
    );
    assert_eq!(builder.get_stake(), U512::from(BOND_AMOUNT));
}

#[test]
fn should_accumulate_stake_over_sessions() {
    let mut builder = InMemoryHostBuilder::default();

    builder
        .exec(ExecuteRequestBuilder::bond(U512::from(100)).build())
        .expect_success()
        .commit();
    let first_purse = builder.get_last_exec_result().unwrap().created_purses()[0];

    builder
        .exec(ExecuteRequestBuilder::bond(U512::from(200)).build())
        .expect_success()
        .commit();
    let second_purse = builder.get_last_exec_result().unwrap().created_purses()[0];

    assert_ne!(first_purse, second_purse);
    assert_eq!(builder.get_stake(), U512::from(300));
}

#[test]
fn should_bond_whole_main_purse() {
    let mut builder = InMemoryHostBuilder::default();
    let main_purse = builder.get_main_purse();
    let main_purse_balance = builder.get_purse_balance(main_purse);

    builder
        .exec(ExecuteRequestBuilder::bond(main_purse_balance).build())
        .expect_success()
        .commit();

    assert_eq!(builder.get_purse_balance(main_purse), U512::zero());
    assert_eq!(builder.get_stake(), main_purse_balance);
}

#[test]
fn should_revert_without_amount() {
    init_logging();
    let mut builder = InMemoryHostBuilder::default();
    let global_state = builder.get_global_state().clone();

    let exec_request = ExecuteRequestBuilder::bond(U512::from(BOND_AMOUNT))
        .without_arg(ARG_AMOUNT)
        .build();
    builder.exec(exec_request).expect_failure().commit();

    assert_eq!(builder.get_error(), Some(Error::MissingArgument));
    assert_eq!(builder.get_revert_code(), Some(ApiError::MissingArgument));
    let exec_result = builder.get_last_exec_result().unwrap();
    assert!(exec_result.transfers().is_empty());
    assert!(exec_result.calls().is_empty());
    assert_eq!(builder.get_global_state(), &global_state);
}

#[test]
fn should_revert_with_malformed_amount() {
    let mut builder = InMemoryHostBuilder::default();

    // length prefix larger than any `U512`
    let exec_request = ExecuteRequestBuilder::bond(U512::from(BOND_AMOUNT))
        .with_raw_arg(ARG_AMOUNT, CLType::U512, vec![65, 1])
        .build();
    builder.exec(exec_request).expect_failure();
    assert_eq!(builder.get_error(), Some(Error::InvalidArgument));
    assert!(builder.get_last_exec_result().unwrap().calls().is_empty());

    // a string leaves bytes over when read as a `U512`
    let exec_request = ExecuteRequestBuilder::new(
        Session::Bond,
        runtime_args! { ARG_AMOUNT => "1000" },
    )
    .build();
    builder.exec(exec_request).expect_failure();
    assert_eq!(builder.get_revert_code(), Some(ApiError::InvalidArgument));
    assert_eq!(builder.get_stake(), U512::zero());
}

#[test]
fn should_revert_when_main_purse_lacks_funds() {
    let host_config = DEFAULT_HOST_CONFIG
        .clone()
        .with_main_purse_balance(U512::from(BOND_AMOUNT - 1));
    let mut builder = InMemoryHostBuilder::new(host_config);
    let main_purse = builder.get_main_purse();

    builder
        .exec(ExecuteRequestBuilder::bond(U512::from(BOND_AMOUNT)).build())
        .expect_failure()
        .commit();

    assert_eq!(
        builder.get_error(),
        Some(Error::TransferFailed(ApiError::Transfer))
    );
    assert_eq!(builder.get_revert_code(), Some(ApiError::Transfer));
    let exec_result = builder.get_last_exec_result().unwrap();
    assert!(exec_result.transfers().is_empty());
    assert!(exec_result.calls().is_empty());
    assert_eq!(
        builder.get_purse_balance(main_purse),
        U512::from(BOND_AMOUNT - 1)
    );
    assert_eq!(builder.get_stake(), U512::zero());
}

#[test]
fn should_roll_back_transfer_when_bond_is_rejected() {
    init_logging();
    let host_config = DEFAULT_HOST_CONFIG
        .clone()
        .with_minimum_bond(U512::from(BOND_AMOUNT + 1));
    let mut builder = InMemoryHostBuilder::new(host_config);
    let main_purse = builder.get_main_purse();
    let main_purse_balance = builder.get_purse_balance(main_purse);
    let global_state = builder.get_global_state().clone();

    builder
        .exec(ExecuteRequestBuilder::bond(U512::from(BOND_AMOUNT)).build())
        .expect_failure()
        .commit();

    let bond_too_small = ApiError::from(proof_of_stake::Error::BondTooSmall);
    assert_eq!(builder.get_error(), Some(Error::Host(bond_too_small)));
    assert_eq!(builder.get_revert_code(), Some(bond_too_small));

    // the session got as far as moving the funds and dispatching
    let exec_result = builder.get_last_exec_result().unwrap();
    let bonding_purse = exec_result.created_purses()[0];
    assert_eq!(
        exec_result.transfers(),
        vec![(main_purse, bonding_purse, U512::from(BOND_AMOUNT))]
    );
    assert_eq!(exec_result.calls().len(), 1);

    assert_eq!(builder.get_purse_balance(main_purse), main_purse_balance);
    assert_eq!(builder.get_global_state().balance(bonding_purse), None);
    assert_eq!(builder.get_stake(), U512::zero());
    assert_eq!(builder.get_global_state(), &global_state);
}

proptest! {
    #[test]
    fn should_dispatch_exactly_once_for_any_amount(words in any::<[u64; 8]>()) {
        let amount = U512(words);
        let host_config = DEFAULT_HOST_CONFIG.clone().with_main_purse_balance(U512::MAX);
        let mut builder = InMemoryHostBuilder::new(host_config);

        builder
            .exec(ExecuteRequestBuilder::bond(amount).build())
            .expect_success()
            .commit();

        let exec_result = builder.get_last_exec_result().unwrap();
        prop_assert_eq!(exec_result.calls().len(), 1);
        prop_assert_eq!(exec_result.call_arg::<U512>(0, ARG_AMOUNT), Ok(amount));
        prop_assert_eq!(
            builder.get_purse_balance(builder.get_main_purse()),
            U512::MAX - amount
        );
        prop_assert_eq!(builder.get_stake(), amount);
    }
}
