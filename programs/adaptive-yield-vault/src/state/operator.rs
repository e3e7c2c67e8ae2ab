//! Operator-gated transitions on the vault and its registry. Instruction
//! handlers resolve accounts and delegate here; every method checks the
//! operator before reading anything else.

use anchor_lang::prelude::*;

use crate::{
    allocator::{plan_allocation, AllocationPlan},
    performance::{assess, PerformanceAssessment},
    state::{PerformanceRecord, StrategyRegistry, VaultState},
};

impl VaultState {
    pub fn register_strategy(
        &mut self,
        registry: &mut StrategyRegistry,
        caller: &Pubkey,
        name: String,
        predicted_apy: u64,
        risk_score: u8,
        initial_weight: u64,
    ) -> Result<u8> {
        self.assert_operator(caller)?;
        let strategy_id = registry.add_strategy(name, predicted_apy, risk_score, initial_weight)?;
        self.strategy_count = registry.len() as u8;
        Ok(strategy_id)
    }

    /// Assess a realized APY, write the epoch record and update the strategy.
    #[allow(clippy::too_many_arguments)]
    pub fn record_performance(
        &self,
        registry: &mut StrategyRegistry,
        record: &mut PerformanceRecord,
        caller: &Pubkey,
        strategy_id: u8,
        actual_apy: u64,
        sharpe_ratio: u64,
        timestamp: i64,
    ) -> Result<PerformanceAssessment> {
        self.assert_operator(caller)?;
        let vault = registry.vault;
        let strategy = registry.strategy_mut(strategy_id)?;
        let assessment = assess(strategy, actual_apy, self.learning_rate)?;

        record.write(
            vault,
            strategy_id,
            self.current_epoch,
            &assessment,
            sharpe_ratio,
            timestamp,
        );
        strategy.apply_assessment(&assessment);
        Ok(assessment)
    }

    pub fn rebalance_epoch(&mut self, caller: &Pubkey) -> Result<u64> {
        self.assert_operator(caller)?;
        self.advance_epoch()
    }

    /// Plan and apply an allocation. `None` means the total score was zero
    /// and no strategy was touched.
    pub fn optimize_allocation(
        &self,
        registry: &mut StrategyRegistry,
        caller: &Pubkey,
    ) -> Result<Option<AllocationPlan>> {
        self.assert_operator(caller)?;
        let plan = plan_allocation(registry, self.strategy_count, self.tvl)?;
        if let Some(plan) = &plan {
            registry.apply_allocation(plan);
        }
        Ok(plan)
    }

    pub fn set_strategy_status(
        &self,
        registry: &mut StrategyRegistry,
        caller: &Pubkey,
        strategy_id: u8,
        is_active: bool,
    ) -> Result<()> {
        self.assert_operator(caller)?;
        registry.set_active(strategy_id, is_active)
    }

    /// Returns the previous rate.
    pub fn update_learning_rate(&mut self, caller: &Pubkey, learning_rate: u64) -> Result<u64> {
        self.assert_operator(caller)?;
        Self::validate_learning_rate(learning_rate)?;
        Ok(std::mem::replace(&mut self.learning_rate, learning_rate))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::VaultError;
    use anchor_lang::error::Error;

    fn error_code<T: std::fmt::Debug>(result: Result<T>) -> u32 {
        match result.unwrap_err() {
            Error::AnchorError(e) => e.error_code_number,
            other => panic!("unexpected error {:?}", other),
        }
    }

    fn setup() -> (VaultState, StrategyRegistry) {
        let vault = VaultState::new([3u8; 32], Pubkey::new_unique(), None).unwrap();
        let registry = StrategyRegistry {
            vault: Pubkey::new_unique(),
            ..Default::default()
        };
        (vault, registry)
    }

    #[test]
    fn test_register_strategy_syncs_count() {
        let (mut vault, mut registry) = setup();
        let operator = vault.authority;
        assert_eq!(
            vault.register_strategy(&mut registry, &operator, "a".to_string(), 100_000, 5, 1_000_000).unwrap(),
            0
        );
        assert_eq!(
            vault.register_strategy(&mut registry, &operator, "b".to_string(), 200_000, 5, 1_000_000).unwrap(),
            1
        );
        assert_eq!(vault.strategy_count, 2);

        // rejected registrations leave the count alone
        assert!(vault
            .register_strategy(&mut registry, &operator, "c".to_string(), 1, 101, 1)
            .is_err());
        assert_eq!(vault.strategy_count, 2);
    }

    #[test]
    fn test_non_operator_is_rejected_everywhere() {
        let (mut vault, mut registry) = setup();
        let operator = vault.authority;
        vault
            .register_strategy(&mut registry, &operator, "a".to_string(), 100_000, 5, 1_000_000)
            .unwrap();
        vault.tvl = 1_000_000;
        let intruder = Pubkey::new_unique();
        let not_authorized = u32::from(VaultError::NotAuthorized);
        let mut record = PerformanceRecord::default();

        assert_eq!(
            error_code(vault.register_strategy(&mut registry, &intruder, "x".to_string(), 1, 1, 1)),
            not_authorized
        );
        assert_eq!(
            error_code(vault.record_performance(&mut registry, &mut record, &intruder, 0, 1, 0, 0)),
            not_authorized
        );
        assert_eq!(error_code(vault.rebalance_epoch(&intruder)), not_authorized);
        assert_eq!(
            error_code(vault.optimize_allocation(&mut registry, &intruder)),
            not_authorized
        );
        assert_eq!(
            error_code(vault.set_strategy_status(&mut registry, &intruder, 0, false)),
            not_authorized
        );
        assert_eq!(error_code(vault.update_learning_rate(&intruder, 10)), not_authorized);

        assert_eq!(vault.strategy_count, 1);
        assert_eq!(vault.current_epoch, 0);
        assert_eq!(vault.learning_rate, 50);
        assert_eq!(registry.strategies[0].ml_weight, 1_000_000);
        assert_eq!(registry.strategies[0].total_allocated, 0);
        assert!(registry.strategies[0].is_active);
        assert_eq!(record.actual_apy, 0);
    }

    #[test]
    fn test_record_performance_writes_record_and_strategy() {
        let (mut vault, mut registry) = setup();
        let operator = vault.authority;
        vault
            .register_strategy(&mut registry, &operator, "a".to_string(), 100_000, 5, 1_000_000)
            .unwrap();
        vault.rebalance_epoch(&operator).unwrap();

        let mut record = PerformanceRecord::default();
        let assessment = vault
            .record_performance(&mut registry, &mut record, &operator, 0, 120_000, 2_000_000, 99)
            .unwrap();

        assert_eq!(assessment.previous_weight, 1_000_000);
        assert_eq!(record.vault, registry.vault);
        assert_eq!(record.epoch, 1);
        assert_eq!(record.actual_apy, 120_000);
        assert_eq!(record.prediction_error, 20_000);
        assert_eq!(record.sharpe_ratio, 2_000_000);
        assert_eq!(record.timestamp, 99);

        let strategy = registry.strategy(0).unwrap();
        assert_eq!(strategy.ml_weight, 1_000_050);
        assert_eq!(strategy.confidence_score, 80);
        assert_eq!(strategy.apy_prediction, 120_000);

        assert_eq!(
            error_code(vault.record_performance(&mut registry, &mut record, &operator, 4, 1, 0, 0)),
            u32::from(VaultError::StrategyNotFound)
        );
    }

    #[test]
    fn test_optimize_allocation_applies_or_skips() {
        let (mut vault, mut registry) = setup();
        let operator = vault.authority;
        vault
            .register_strategy(&mut registry, &operator, "a".to_string(), 200_000, 1, 1_000_000)
            .unwrap();
        vault
            .register_strategy(&mut registry, &operator, "b".to_string(), 400_000, 1, 1_000_000)
            .unwrap();
        vault.tvl = 10_000_000;

        let plan = vault.optimize_allocation(&mut registry, &operator).unwrap().unwrap();
        assert_eq!(plan.allocated_total, 9_999_999);
        assert_eq!(registry.strategies[0].total_allocated, 3_214_285);
        assert_eq!(registry.strategies[1].total_allocated, 6_785_714);

        vault.set_strategy_status(&mut registry, &operator, 0, false).unwrap();
        vault.set_strategy_status(&mut registry, &operator, 1, false).unwrap();
        assert!(vault.optimize_allocation(&mut registry, &operator).unwrap().is_none());
        assert_eq!(registry.strategies[0].total_allocated, 3_214_285);
        assert_eq!(registry.strategies[1].total_allocated, 6_785_714);
    }

    #[test]
    fn test_update_learning_rate() {
        let (mut vault, _) = setup();
        let operator = vault.authority;
        assert_eq!(vault.update_learning_rate(&operator, 500).unwrap(), 50);
        assert_eq!(vault.learning_rate, 500);
        assert_eq!(
            error_code(vault.update_learning_rate(&operator, 0)),
            u32::from(VaultError::InvalidLearningRate)
        );
        assert_eq!(vault.learning_rate, 500);
    }
}
