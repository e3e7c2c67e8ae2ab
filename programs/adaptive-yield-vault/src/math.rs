//! Fixed-point helpers shared by the ledger, scoring and allocation code.
//!
//! Every ratio is carried at `PRECISION` (six decimal digits). Operands are
//! widened to `u128` and multiplied before dividing; division truncates.

use anchor_lang::prelude::*;

use crate::errors::VaultError;

/// `floor(value * numerator / denominator)` without intermediate overflow.
pub fn mul_div(value: u128, numerator: u128, denominator: u128) -> Result<u128> {
    value
        .checked_mul(numerator)
        .ok_or(VaultError::MathOverflow)?
        .checked_div(denominator)
        .ok_or_else(|| VaultError::MathOverflow.into())
}

/// Same as [`mul_div`] for `u64` operands that must land back in `u64`.
pub fn mul_div_u64(value: u64, numerator: u64, denominator: u64) -> Result<u64> {
    to_u64(mul_div(value as u128, numerator as u128, denominator as u128)?)
}

pub fn to_u64(value: u128) -> Result<u64> {
    u64::try_from(value).map_err(|_| VaultError::MathOverflow.into())
}

/// Scale a whole percentage (`0..=100`) into `PRECISION` units.
pub fn percent_to_precision(percent: u8) -> u128 {
    percent as u128 * crate::constants::PRECISION as u128 / 100
}
