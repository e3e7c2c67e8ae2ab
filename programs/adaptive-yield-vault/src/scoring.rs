//! Risk-adjusted scoring and the adaptive weight-update rule.

use anchor_lang::prelude::*;

use crate::{
    constants::{MIN_WEIGHT, PRECISION},
    errors::VaultError,
    math::{mul_div, percent_to_precision, to_u64},
};

/// Score a predicted APY after scaling it by confidence and subtracting the
/// risk penalty. Result is in `PRECISION` units and saturates at zero.
pub fn risk_adjusted_score(apy: u64, risk_score: u8, confidence_score: u8) -> Result<u128> {
    let risk_penalty = percent_to_precision(risk_score);
    let confidence_boost = percent_to_precision(confidence_score);
    let adjusted_apy = mul_div(apy as u128, confidence_boost, PRECISION as u128)?;

    Ok(adjusted_apy.saturating_sub(risk_penalty))
}

/// Nudge a strategy weight by the learning rate.
///
/// Outperformance grows the weight by `weight * rate / PRECISION` with no cap.
/// Underperformance (including a zero delta) shrinks it by half that amount
/// and never below `MIN_WEIGHT`.
pub fn update_weight(current_weight: u64, learning_rate: u64, performance_delta: i128) -> Result<u64> {
    if performance_delta > 0 {
        let adjustment = to_u64(mul_div(
            current_weight as u128,
            learning_rate as u128,
            PRECISION as u128,
        )?)?;
        current_weight
            .checked_add(adjustment)
            .ok_or_else(|| VaultError::MathOverflow.into())
    } else {
        let adjustment = to_u64(mul_div(
            current_weight as u128,
            learning_rate as u128,
            PRECISION as u128 * 2,
        )?)?;
        Ok(current_weight.saturating_sub(adjustment).max(MIN_WEIGHT))
    }
}

/// Allocation weight of a strategy: its risk-adjusted score scaled by its ML weight.
pub fn weighted_score(apy: u64, risk_score: u8, confidence_score: u8, ml_weight: u64) -> Result<u128> {
    let score = risk_adjusted_score(apy, risk_score, confidence_score)?;
    mul_div(score, ml_weight as u128, PRECISION as u128)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_risk_adjusted_score_formula() {
        // 12% APY, full confidence, risk 5 -> 120_000 - 50_000
        assert_eq!(risk_adjusted_score(120_000, 5, 100).unwrap(), 70_000);
        // half confidence halves the APY before the penalty
        assert_eq!(risk_adjusted_score(120_000, 5, 50).unwrap(), 10_000);
    }

    #[test]
    fn test_risk_adjusted_score_floors_at_zero() {
        assert_eq!(risk_adjusted_score(50_000, 10, 100).unwrap(), 0);
        assert_eq!(risk_adjusted_score(0, 0, 100).unwrap(), 0);
        assert_eq!(risk_adjusted_score(100_000, 10, 100).unwrap(), 0);
    }

    #[test]
    fn test_score_monotonic_in_apy() {
        for &(risk, confidence) in &[(0u8, 10u8), (25, 50), (60, 90), (100, 100)] {
            let mut previous = 0u128;
            for apy in (0..=3_000_000u64).step_by(37_501) {
                let score = risk_adjusted_score(apy, risk, confidence).unwrap();
                assert!(score >= previous, "apy {} risk {} confidence {}", apy, risk, confidence);
                previous = score;
            }
        }
    }

    #[test]
    fn test_update_weight_positive_delta() {
        assert_eq!(update_weight(1_000_000, 50, 1).unwrap(), 1_000_050);
        assert_eq!(update_weight(1_000_000, 50, i128::MAX).unwrap(), 1_000_050);
    }

    #[test]
    fn test_update_weight_is_asymmetric() {
        let weight = 4_000_000;
        let rate = 50;
        let up = update_weight(weight, rate, 30_000).unwrap() - weight;
        let down = weight - update_weight(weight, rate, -30_000).unwrap();
        assert_eq!(up, 200);
        assert_eq!(down, 100);
        assert_eq!(up, down * 2);
    }

    #[test]
    fn test_zero_delta_counts_as_underperformance() {
        assert_eq!(update_weight(2_000_000, 50, 0).unwrap(), 1_999_950);
    }

    #[test]
    fn test_update_weight_floor() {
        assert_eq!(update_weight(1, PRECISION, -1).unwrap(), 1);
        assert_eq!(update_weight(3, PRECISION, -1).unwrap(), 2);

        let mut weight = 10;
        for _ in 0..100 {
            weight = update_weight(weight, PRECISION, -5).unwrap();
            assert!(weight >= MIN_WEIGHT);
        }
        assert_eq!(weight, MIN_WEIGHT);
    }

    #[test]
    fn test_small_weights_do_not_move_on_tiny_rate() {
        // adjustment truncates to zero
        assert_eq!(update_weight(100, 50, 1).unwrap(), 100);
        assert_eq!(update_weight(100, 50, -1).unwrap(), 100);
    }

    #[test]
    fn test_update_weight_overflow_is_an_error() {
        assert!(update_weight(u64::MAX, PRECISION, 1).is_err());
    }

    #[test]
    fn test_weighted_score() {
        // score 70_000 at weight 2.0
        assert_eq!(weighted_score(120_000, 5, 100, 2_000_000).unwrap(), 140_000);
        assert_eq!(weighted_score(120_000, 5, 100, 1).unwrap(), 0);
    }
}
