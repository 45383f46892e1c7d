//! Fixed-point conversion between the input and output assets.
//!
//! The effective multiplier is `rate / 10^decimals`. Products are taken in
//! `u128`, so any pair of `u64` operands multiplies without loss; only the
//! scale and the final narrowing back to `u64` can overflow.

use num_traits::ToPrimitive;
use crate::error::VaultError;

/// `10^decimals` as a 128-bit divisor.
pub fn scale(decimals: u8) -> Result<u128, VaultError> {
    10u128
        .checked_pow(decimals as u32)
        .ok_or(VaultError::ArithmeticOverflow)
}

/// Output units issued for `input_amount`: `floor(input_amount * rate / 10^decimals)`.
///
/// Rounds down, so minting never issues more than the input covers.
pub fn output_amount(rate: u64, input_amount: u64, decimals: u8) -> Result<u64, VaultError> {
    let scale = scale(decimals)?;
    if scale == 0 {
        return Err(VaultError::DivisionByZero);
    }

    let amount = input_amount.to_u128().ok_or(VaultError::ArithmeticOverflow)?
        .checked_mul(rate.to_u128().ok_or(VaultError::ArithmeticOverflow)?)
        .ok_or(VaultError::ArithmeticOverflow)?
        .checked_div(scale)
        .ok_or(VaultError::DivisionByZero)?;

    amount.to_u64().ok_or(VaultError::ArithmeticOverflow)
}

/// Input units released for `output_amount`: `ceil(output_amount * 10^decimals / rate)`.
///
/// Rounds up, so redeeming never releases more than the output covers.
pub fn input_amount(rate: u64, output_amount: u64, decimals: u8) -> Result<u64, VaultError> {
    if rate == 0 {
        return Err(VaultError::DivisionByZero);
    }
    let rate = rate.to_u128().ok_or(VaultError::ArithmeticOverflow)?;

    let numerator = output_amount.to_u128().ok_or(VaultError::ArithmeticOverflow)?
        .checked_mul(scale(decimals)?)
        .ok_or(VaultError::ArithmeticOverflow)?;

    let mut amount = numerator.checked_div(rate).ok_or(VaultError::DivisionByZero)?;
    if numerator.checked_rem(rate).ok_or(VaultError::DivisionByZero)? > 0 {
        amount = amount.checked_add(1).ok_or(VaultError::ArithmeticOverflow)?;
    }

    amount.to_u64().ok_or(VaultError::ArithmeticOverflow)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scale_limits() {
        assert_eq!(scale(0), Ok(1));
        assert_eq!(scale(19), Ok(10_000_000_000_000_000_000));
        assert_eq!(scale(38), Ok(10u128.pow(38)));
        assert_eq!(scale(39), Err(VaultError::ArithmeticOverflow));
    }

    #[test]
    fn zero_rate_is_rejected_on_redeem_side() {
        assert_eq!(input_amount(0, 10, 2), Err(VaultError::DivisionByZero));
    }

    #[test]
    fn oversized_scale_overflows() {
        assert_eq!(output_amount(1, 1, 40), Err(VaultError::ArithmeticOverflow));
        assert_eq!(input_amount(1, 1, 40), Err(VaultError::ArithmeticOverflow));
        // the scale fits but the product does not
        assert_eq!(input_amount(1, u64::MAX, 38), Err(VaultError::ArithmeticOverflow));
    }
}
