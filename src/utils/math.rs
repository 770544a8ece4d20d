//! Mathematical utility functions

use alloy::primitives::U256;
use anyhow::{Context, Result};
use rust_decimal::prelude::*;
use rust_decimal_macros::dec;
use std::str::FromStr;

pub fn pow10(n: i32) -> Decimal {
    match n {
        0 => dec!(1),
        6 => dec!(1_000_000),
        18 => dec!(1_000_000_000_000_000_000),
        _ => {
            let mut result = dec!(1);
            if n > 0 {
                for _ in 0..n {
                    result *= dec!(10);
                }
            } else {
                for _ in 0..(-n) {
                    result /= dec!(10);
                }
            }
            result
        }
    }
}

/// Convert a raw on-chain amount into human units.
pub fn u256_to_decimal(value: U256, decimals: u32) -> Result<Decimal> {
    if decimals > 28 {
        anyhow::bail!("Unsupported decimals for Decimal math: {}", decimals);
    }
    let raw = Decimal::from_str(&value.to_string())
        .with_context(|| format!("Amount {} does not fit in a Decimal", value))?;
    Ok(raw / pow10(decimals as i32))
}

/// Convert a human-unit amount into raw on-chain units, truncating dust.
pub fn decimal_to_u256(value: Decimal, decimals: u32) -> Result<U256> {
    if decimals > 28 {
        anyhow::bail!("Unsupported decimals for Decimal math: {}", decimals);
    }
    if value.is_sign_negative() {
        anyhow::bail!("Amount must not be negative: {}", value);
    }
    let scaled = (value * pow10(decimals as i32))
        .to_u128()
        .with_context(|| format!("Amount {} out of range for {} decimals", value, decimals))?;
    Ok(U256::from(scaled))
}

/// Reduce an amount by a slippage tolerance expressed in basis points.
pub fn apply_slippage_bps(amount: U256, bps: u32) -> U256 {
    let bps = bps.min(10_000);
    amount * U256::from(10_000 - bps) / U256::from(10_000)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn pow10_common_cases() {
        assert_eq!(pow10(0), dec!(1));
        assert_eq!(pow10(6), dec!(1_000_000));
        assert_eq!(pow10(18), dec!(1_000_000_000_000_000_000));
        assert_eq!(pow10(2), dec!(100));
        assert_eq!(pow10(-2), dec!(0.01));
    }

    #[test]
    fn wei_to_ether_conversion() {
        let one_eth = U256::from(1_000_000_000_000_000_000u128);
        assert_eq!(u256_to_decimal(one_eth, 18).unwrap(), dec!(1));

        let half_eth = U256::from(500_000_000_000_000_000u128);
        assert_eq!(u256_to_decimal(half_eth, 18).unwrap(), dec!(0.5));
    }

    #[test]
    fn usdc_units_roundtrip() {
        let raw = decimal_to_u256(dec!(1234.56), 6).unwrap();
        assert_eq!(raw, U256::from(1_234_560_000u64));
        assert_eq!(u256_to_decimal(raw, 6).unwrap(), dec!(1234.56));
    }

    #[test]
    fn negative_amounts_rejected() {
        assert!(decimal_to_u256(dec!(-0.1), 18).is_err());
    }

    #[test]
    fn oversized_decimals_rejected() {
        assert!(u256_to_decimal(U256::from(1u64), 30).is_err());
        assert!(decimal_to_u256(dec!(1), 30).is_err());
        assert!(u256_to_decimal(U256::from(1u64), 28).is_ok());
    }

    #[test]
    fn slippage_zero_and_full() {
        let amount = U256::from(1_000_000u64);
        assert_eq!(apply_slippage_bps(amount, 0), amount);
        assert_eq!(apply_slippage_bps(amount, 10_000), U256::ZERO);
        assert_eq!(apply_slippage_bps(amount, 50), U256::from(995_000u64));
    }

    proptest! {
        #[test]
        fn slippage_never_exceeds_input(raw in any::<u128>(), bps in 0u32..=10_000) {
            let amount = U256::from(raw);
            let adjusted = apply_slippage_bps(amount, bps);
            prop_assert!(adjusted <= amount);
        }

        #[test]
        fn whole_ether_roundtrips(eth in 0u64..1_000_000) {
            let value = Decimal::from(eth);
            let raw = decimal_to_u256(value, 18).unwrap();
            prop_assert_eq!(u256_to_decimal(raw, 18).unwrap(), value);
        }
    }
}
