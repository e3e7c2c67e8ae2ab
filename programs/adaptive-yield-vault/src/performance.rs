//! Turns a realized APY into a weight update, a confidence score and a
//! persisted record for the current epoch.

use anchor_lang::prelude::*;

use crate::{
    constants::{DEFAULT_CONFIDENCE, MAX_CONFIDENCE, MIN_CONFIDENCE},
    scoring::update_weight,
    state::{PerformanceRecord, Strategy},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PerformanceAssessment {
    pub actual_apy: u64,
    pub prediction_error: u64,
    pub performance_delta: i128,
    pub previous_weight: u64,
    pub ml_weight: u64,
    pub confidence_score: u8,
}

/// Accuracy of a prediction as a whole percentage clamped to `10..=100`.
pub fn confidence_score(predicted_apy: u64, prediction_error: u64) -> u8 {
    if predicted_apy == 0 {
        return DEFAULT_CONFIDENCE;
    }
    let penalty = prediction_error as i128 * 100 / predicted_apy as i128;
    let accuracy = 100 - penalty;
    accuracy.clamp(MIN_CONFIDENCE as i128, MAX_CONFIDENCE as i128) as u8
}

/// Compare a realized APY with the strategy's standing prediction.
pub fn assess(strategy: &Strategy, actual_apy: u64, learning_rate: u64) -> Result<PerformanceAssessment> {
    let predicted_apy = strategy.apy_prediction;
    let prediction_error = actual_apy.abs_diff(predicted_apy);
    let performance_delta = actual_apy as i128 - predicted_apy as i128;

    Ok(PerformanceAssessment {
        actual_apy,
        prediction_error,
        performance_delta,
        previous_weight: strategy.ml_weight,
        ml_weight: update_weight(strategy.ml_weight, learning_rate, performance_delta)?,
        confidence_score: confidence_score(predicted_apy, prediction_error),
    })
}

impl Strategy {
    /// Write back an assessment and re-anchor the prediction to the observation.
    pub fn apply_assessment(&mut self, assessment: &PerformanceAssessment) {
        self.ml_weight = assessment.ml_weight;
        self.confidence_score = assessment.confidence_score;
        self.apy_prediction = assessment.actual_apy;
    }
}

impl PerformanceRecord {
    pub fn write(
        &mut self,
        vault: Pubkey,
        strategy_id: u8,
        epoch: u64,
        assessment: &PerformanceAssessment,
        sharpe_ratio: u64,
        timestamp: i64,
    ) {
        self.vault = vault;
        self.strategy_id = strategy_id;
        self.epoch = epoch;
        self.actual_apy = assessment.actual_apy;
        self.prediction_error = assessment.prediction_error;
        self.sharpe_ratio = sharpe_ratio;
        self.timestamp = timestamp;
    }
}
