#![no_main]

use std::str::FromStr;

use libfuzzer_sys::fuzz_target;
use num_bigint::BigUint;

use decint_core::Integer;

fuzz_target!(|data: &[u8]| {
    // Cap operand sizes for speed (2048 digits combined)
    if data.len() < 2 || data.len() > 2048 {
        return;
    }

    let split = (usize::from(data[0]) % (data.len() - 1)) + 1;
    let (left, right) = data.split_at(split);
    let left_digits: String = left.iter().map(|b| char::from(b'0' + b % 10)).collect();
    let right_digits: String = right.iter().map(|b| char::from(b'0' + b % 10)).collect();

    let a = Integer::from_str(&left_digits).unwrap();
    let b = Integer::from_str(&right_digits).unwrap();
    let product = (&a * &b).to_string();

    let oracle_a = BigUint::from_str(&left_digits).unwrap();
    let oracle_b = BigUint::from_str(&right_digits).unwrap();
    assert_eq!(product, (oracle_a * oracle_b).to_string());
});
