//! 512-bit fixed arithmetic helpers.
//!
//! Fee, share and reserve-ratio math all cross-multiply in 512-bit space to
//! avoid modular wrap-around artifacts, then narrow back down with an explicit
//! fit check.

use crate::error::LedgerError;
use alloy::primitives::{U256, U512};

pub const BPS_SCALE: u64 = 10_000;

pub fn extend_to_512(value: U256) -> U512 {
    U512::from_be_slice(&value.to_be_bytes::<32>())
}

/// Narrow a 512-bit value back to 256 bits, failing if the high half is set.
pub fn narrow_to_256(value: U512, context: &'static str) -> Result<U256, LedgerError> {
    let bytes = value.to_be_bytes::<64>();
    if bytes[..32].iter().any(|b| *b != 0) {
        return Err(LedgerError::Overflow(context));
    }
    Ok(U256::from_be_slice(&bytes[32..]))
}

/// `a * b / den` with a 512-bit intermediate.
pub fn mul_div(
    a: U256,
    b: U256,
    den: U256,
    context: &'static str,
) -> Result<U256, LedgerError> {
    if den.is_zero() {
        return Err(LedgerError::ZeroDenominator(context));
    }
    let product = extend_to_512(a) * extend_to_512(b);
    narrow_to_256(product / extend_to_512(den), context)
}

/// `amount * bps / 10_000`.
pub fn bps_cut(amount: U256, bps: u64, context: &'static str) -> Result<U256, LedgerError> {
    mul_div(amount, U256::from(bps), U256::from(BPS_SCALE), context)
}

/// True when the ratio `left_num/left_den` is within `max_bps` of
/// `right_num/right_den`, compared via 512-bit cross multiplication.
/// Zero denominators are treated as out of bounds.
pub fn ratio_within_bps(
    left_num: U256,
    left_den: U256,
    right_num: U256,
    right_den: U256,
    max_bps: u64,
) -> bool {
    if left_den.is_zero() || right_den.is_zero() {
        return false;
    }
    let lhs = extend_to_512(left_num) * extend_to_512(right_den);
    let rhs = extend_to_512(right_num) * extend_to_512(left_den);
    let (hi, lo) = if lhs > rhs { (lhs, rhs) } else { (rhs, lhs) };

    let scale = U512::from(BPS_SCALE);
    let tolerance = U512::from(BPS_SCALE.saturating_add(max_bps));
    hi * scale <= lo * tolerance
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mul_div_exact() {
        let out = mul_div(
            U256::from(1_000_000u64),
            U256::from(2_000u64),
            U256::from(10_000u64),
            "test",
        )
        .unwrap();
        assert_eq!(out, U256::from(200_000u64));
    }

    #[test]
    fn test_mul_div_survives_256_bit_intermediate_overflow() {
        let big = U256::MAX / U256::from(2u64);
        let out = mul_div(big, U256::from(4u64), U256::from(4u64), "test").unwrap();
        assert_eq!(out, big);
    }

    #[test]
    fn test_mul_div_rejects_zero_denominator() {
        assert!(matches!(
            mul_div(U256::from(1u64), U256::from(1u64), U256::ZERO, "test"),
            Err(LedgerError::ZeroDenominator(_))
        ));
    }

    #[test]
    fn test_ratio_within_bps_accepts_small_drift() {
        // 1.01 vs 1.00 is 100 bps apart.
        assert!(ratio_within_bps(
            U256::from(101u64),
            U256::from(100u64),
            U256::from(1u64),
            U256::from(1u64),
            150,
        ));
    }

    #[test]
    fn test_ratio_within_bps_rejects_large_drift() {
        assert!(!ratio_within_bps(
            U256::from(130u64),
            U256::from(100u64),
            U256::from(1u64),
            U256::from(1u64),
            2_500,
        ));
    }

    #[test]
    fn test_ratio_within_bps_rejects_zero_denominator() {
        assert!(!ratio_within_bps(
            U256::from(1u64),
            U256::ZERO,
            U256::from(1u64),
            U256::from(1u64),
            10_000,
        ));
    }
}
