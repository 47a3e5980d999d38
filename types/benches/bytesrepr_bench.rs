use criterion::{black_box, criterion_group, criterion_main, Bencher, Criterion};

use casper_bonding_types::{
    bytesrepr::{FromBytes, ToBytes},
    proof_of_stake::{ARG_AMOUNT, ARG_PURSE},
    runtime_args, AccessRights, CLTyped, CLValue, RuntimeArgs, URef, U512, UREF_ADDR_LENGTH,
};

const TEST_U512: U512 = U512([123_456_789, 0, 0, 0, 0, 0, 0, 0]);
const MAX_U512: U512 = U512([u64::MAX; 8]);
const TEST_UREF: URef = URef::new([0xab; UREF_ADDR_LENGTH], AccessRights::READ_ADD_WRITE);

fn serialize_u512(b: &mut Bencher) {
    b.iter(|| ToBytes::to_bytes(black_box(&TEST_U512)));
}

fn deserialize_u512(b: &mut Bencher) {
    let data = MAX_U512.to_bytes().unwrap();
    b.iter(|| U512::from_bytes(black_box(&data)));
}

fn serialize_optional_u512(b: &mut Bencher) {
    let data = Some(MAX_U512);
    b.iter(|| ToBytes::to_bytes(black_box(&data)));
}

fn deserialize_optional_u512(b: &mut Bencher) {
    let data = Some(MAX_U512).to_bytes().unwrap();
    b.iter(|| Option::<U512>::from_bytes(black_box(&data)));
}

fn serialize_uref(b: &mut Bencher) {
    b.iter(|| ToBytes::to_bytes(black_box(&TEST_UREF)));
}

fn deserialize_uref(b: &mut Bencher) {
    let data = TEST_UREF.to_bytes().unwrap();
    b.iter(|| URef::from_bytes(black_box(&data)));
}

fn serialize_cl_value<T: CLTyped + ToBytes>(raw_value: T) -> Vec<u8> {
    CLValue::from_t(raw_value)
        .expect("should create CLValue")
        .to_bytes()
        .expect("should serialize CLValue")
}

fn benchmark_deserialization<T: CLTyped + ToBytes + FromBytes>(b: &mut Bencher, raw_value: T) {
    let serialized_value = serialize_cl_value(raw_value);
    b.iter(|| {
        let (cl_value, _rem) = CLValue::from_bytes(&serialized_value).unwrap();
        let _raw_value: T = cl_value.into_t().unwrap();
    });
}

fn serialize_cl_value_uint512(b: &mut Bencher) {
    b.iter(|| serialize_cl_value(TEST_U512));
}

fn deserialize_cl_value_uint512(b: &mut Bencher) {
    benchmark_deserialization(b, TEST_U512);
}

fn bond_args() -> RuntimeArgs {
    runtime_args! { ARG_AMOUNT => MAX_U512, ARG_PURSE => TEST_UREF }
}

fn serialize_bond_args(b: &mut Bencher) {
    let args = bond_args();
    b.iter(|| ToBytes::to_bytes(black_box(&args)));
}

fn deserialize_bond_args(b: &mut Bencher) {
    let data = bond_args().to_bytes().unwrap();
    b.iter(|| RuntimeArgs::from_bytes(black_box(&data)));
}

fn bytesrepr_bench(c: &mut Criterion) {
    c.bench_function("serialize_u512", serialize_u512);
    c.bench_function("deserialize_u512", deserialize_u512);
    c.bench_function("serialize_optional_u512", serialize_optional_u512);
    c.bench_function("deserialize_optional_u512", deserialize_optional_u512);
    c.bench_function("serialize_uref", serialize_uref);
    c.bench_function("deserialize_uref", deserialize_uref);
    c.bench_function("serialize_cl_value_uint512", serialize_cl_value_uint512);
    c.bench_function("deserialize_cl_value_uint512", deserialize_cl_value_uint512);
    c.bench_function("bytesrepr::serialize_bond_args", serialize_bond_args);
    c.bench_function("bytesrepr::deserialize_bond_args", deserialize_bond_args);
}

criterion_group!(benches, bytesrepr_bench);
criterion_main!(benches);
