use std::{any::TypeId, collections::HashMap, convert::TryFrom};

use anyhow::Result;
use crypto_types::{
    Error, FixedSizeByteArray, Hash256, PrivateKey, PublicKey, SharedKey256, Signature,
};

fn check_bytes_round_trip<T>() -> Result<()>
where
    T: FixedSizeByteArray + PartialEq + std::fmt::Debug,
{
    let data: Vec<u8> = (0..T::SIZE).map(|i| (i * 31 + 7) as u8).collect();
    let value = T::from_bytes(&data)?;
    assert_eq!(value.as_bytes(), &data[..], "{}", T::NAME);

    let hex = value.to_hex();
    assert_eq!(hex.len(), 2 * T::SIZE, "{}", T::NAME);
    assert_eq!(T::from_hex(&hex)?, value, "{}", T::NAME);
    assert_eq!(format!("{:?}", value), format!("{}('{}')", T::NAME, hex));

    Ok(())
}

fn check_rejects_wrong_lengths<T>()
where
    T: FixedSizeByteArray + std::fmt::Debug,
{
    for len in &[T::SIZE - 1, T::SIZE + 1] {
        match T::from_bytes(&vec![0; *len]) {
            Err(Error::InvalidLength {
                type_name,
                expected,
                actual,
            }) => {
                assert_eq!(type_name, T::NAME);
                assert_eq!(expected, T::SIZE);
                assert_eq!(actual, *len);
            }
            other => panic!("{}: unexpected result {:?}", T::NAME, other),
        }

        match T::from_hex(&"00".repeat(*len)) {
            Err(Error::InvalidLength { actual, .. }) => assert_eq!(actual, *len),
            other => panic!("{}: unexpected result {:?}", T::NAME, other),
        }
    }
}

fn check_rejects_bad_hex<T>()
where
    T: FixedSizeByteArray + std::fmt::Debug,
{
    let result = T::from_hex(&"G0".repeat(T::SIZE));
    assert!(
        matches!(result, Err(Error::InvalidEncoding { type_name, .. }) if type_name == T::NAME),
        "{}: unexpected result {:?}",
        T::NAME,
        result
    );
}

#[test]
fn test_all_types_round_trip() -> Result<()> {
    check_bytes_round_trip::<Hash256>()?;
    check_bytes_round_trip::<PrivateKey>()?;
    check_bytes_round_trip::<PublicKey>()?;
    check_bytes_round_trip::<SharedKey256>()?;
    check_bytes_round_trip::<Signature>()?;
    Ok(())
}

#[test]
fn test_all_types_reject_wrong_lengths() {
    check_rejects_wrong_lengths::<Hash256>();
    check_rejects_wrong_lengths::<PrivateKey>();
    check_rejects_wrong_lengths::<PublicKey>();
    check_rejects_wrong_lengths::<SharedKey256>();
    check_rejects_wrong_lengths::<Signature>();
}

#[test]
fn test_all_types_reject_bad_hex() {
    check_rejects_bad_hex::<Hash256>();
    check_rejects_bad_hex::<PrivateKey>();
    check_rejects_bad_hex::<PublicKey>();
    check_rejects_bad_hex::<SharedKey256>();
    check_rejects_bad_hex::<Signature>();
}

#[test]
fn test_sizes() {
    assert_eq!(Hash256::SIZE, 32);
    assert_eq!(PrivateKey::SIZE, 32);
    assert_eq!(PublicKey::SIZE, 32);
    assert_eq!(SharedKey256::SIZE, 32);
    assert_eq!(Signature::SIZE, 64);
}

#[test]
fn test_zero_values() -> Result<()> {
    assert_eq!(Hash256::zero().as_bytes(), &[0u8; 32][..]);
    assert_eq!(Signature::zero().as_bytes(), &[0u8; 64][..]);

    let zero: Hash256 = "0000000000000000000000000000000000000000000000000000000000000000".parse()?;
    assert_eq!(zero, Hash256::zero());
    Ok(())
}

#[test]
fn test_same_bytes_distinct_types() -> Result<()> {
    let bytes = [0u8; 32];
    let hash = Hash256::try_from(&bytes[..])?;
    let key = SharedKey256::try_from(&bytes[..])?;
    let pk = PublicKey::try_from(&bytes[..])?;

    assert_eq!(hash.as_bytes(), key.as_bytes());
    assert_ne!(TypeId::of::<Hash256>(), TypeId::of::<SharedKey256>());
    assert_ne!(TypeId::of::<Hash256>(), TypeId::of::<PublicKey>());
    assert_ne!(format!("{:?}", hash), format!("{:?}", key));
    assert_ne!(format!("{:?}", hash), format!("{:?}", pk));
    Ok(())
}

#[test]
fn test_map_keys() -> Result<()> {
    let mut balances: HashMap<PublicKey, u64> = HashMap::new();
    let alice = PublicKey::from([0xA1; 32]);
    let bob = PublicKey::from([0xB0; 32]);
    balances.insert(alice, 10);
    balances.insert(bob, 20);
    balances.insert(PublicKey::from_hex(&"a1".repeat(32))?, 30);

    assert_eq!(balances.len(), 2);
    assert_eq!(balances[&alice], 30);
    assert_eq!(balances[&bob], 20);
    Ok(())
}

#[test]
fn test_random_keys_across_threads() {
    let handles: Vec<_> = (0..4)
        .map(|_| std::thread::spawn(|| PrivateKey::random().to_hex()))
        .collect();
    let mut keys: Vec<String> = handles
        .into_iter()
        .map(|h| h.join().expect("thread should not panic"))
        .collect();
    keys.sort();
    keys.dedup();
    assert_eq!(keys.len(), 4);
}

#[test]
fn test_shared_between_threads() {
    let hash = std::sync::Arc::new(Hash256::from([0x42; 32]));
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let hash = hash.clone();
            std::thread::spawn(move || hash.to_hex())
        })
        .collect();
    for h in handles {
        assert_eq!(h.join().expect("thread should not panic"), "42".repeat(32));
    }
}
