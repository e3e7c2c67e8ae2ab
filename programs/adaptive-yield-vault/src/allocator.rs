//! Proportional capital allocation across the strategy registry.

use anchor_lang::prelude::*;

use crate::{
    constants::MAX_STRATEGIES,
    errors::VaultError,
    math::{mul_div, to_u64},
    scoring::weighted_score,
    state::StrategyRegistry,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AllocationPlan {
    /// `Some(amount)` for every active registered slot, `None` otherwise
    pub allocations: [Option<u64>; MAX_STRATEGIES],
    pub total_score: u128,
    pub allocated_total: u64,
    pub participants: u8,
}

impl AllocationPlan {
    /// Flattened view used in events; skipped slots read as zero.
    pub fn amounts(&self) -> [u64; MAX_STRATEGIES] {
        let mut amounts = [0u64; MAX_STRATEGIES];
        for (amount, slot) in amounts.iter_mut().zip(self.allocations.iter()) {
            *amount = slot.unwrap_or(0);
        }
        amounts
    }

    /// Units of `tvl` left unallocated by per-slot truncation.
    pub fn shortfall(&self, tvl: u64) -> u64 {
        tvl.saturating_sub(self.allocated_total)
    }
}

/// Score every slot and split `tvl` in proportion to the scores.
///
/// All `MAX_STRATEGIES` slots are scanned; slots at or beyond
/// `strategy_count` and inactive strategies score zero and are skipped.
/// Returns `Ok(None)` when the total score is zero. Each allocation is
/// truncated on its own, so the sum can fall short of `tvl`.
pub fn plan_allocation(
    registry: &StrategyRegistry,
    strategy_count: u8,
    tvl: u64,
) -> Result<Option<AllocationPlan>> {
    require!(tvl > 0, VaultError::InvalidAmount);

    let mut scores = [None::<u128>; MAX_STRATEGIES];
    let mut total_score = 0u128;
    for (index, score) in scores.iter_mut().enumerate() {
        if index >= strategy_count as usize {
            continue;
        }
        let strategy = match registry.slot(index) {
            Some(strategy) if strategy.is_active => strategy,
            _ => continue,
        };
        let value = weighted_score(
            strategy.apy_prediction,
            strategy.risk_score,
            strategy.confidence_score,
            strategy.ml_weight,
        )?;
        total_score = total_score.checked_add(value).ok_or(VaultError::MathOverflow)?;
        *score = Some(value);
    }

    if total_score == 0 {
        return Ok(None);
    }

    let mut plan = AllocationPlan {
        allocations: [None; MAX_STRATEGIES],
        total_score,
        allocated_total: 0,
        participants: 0,
    };
    for (slot, score) in plan.allocations.iter_mut().zip(scores.iter()) {
        if let Some(score) = score {
            let amount = to_u64(mul_div(*score, tvl as u128, total_score)?)?;
            plan.allocated_total = plan
                .allocated_total
                .checked_add(amount)
                .ok_or(VaultError::MathOverflow)?;
            plan.participants += 1;
            *slot = Some(amount);
        }
    }
    Ok(Some(plan))
}

impl StrategyRegistry {
    /// Overwrite `total_allocated` for every slot the plan covers.
    pub fn apply_allocation(&mut self, plan: &AllocationPlan) {
        for (strategy, allocation) in self.strategies.iter_mut().zip(plan.allocations.iter()) {
            if let Some(amount) = allocation {
                strategy.total_allocated = *amount;
            }
        }
    }
}
