use anchor_lang::prelude::*;

use crate::{
    constants::{DEFAULT_CONFIDENCE, HISTORY_SLOTS, MAX_NAME_LEN, MAX_RISK_SCORE, MAX_STRATEGIES},
    errors::VaultError,
};

#[derive(AnchorSerialize, AnchorDeserialize, InitSpace, Clone, Debug, Default, PartialEq, Eq)]
pub struct Strategy {
    /// At most MAX_NAME_LEN bytes of UTF-8, which is what `max_len` reserves
    #[max_len(50)]
    pub name: String,

    /// Predicted annual yield in PRECISION units, re-anchored on every record
    pub apy_prediction: u64,

    /// 0..=100
    pub risk_score: u8,

    /// Allocation multiplier in PRECISION units, never below 1
    pub ml_weight: u64,

    /// Rolling history slot, zero-filled and never written
    pub performance_history: [u64; HISTORY_SLOTS],

    /// Last computed allocation in asset base units
    pub total_allocated: u64,

    pub is_active: bool,

    /// 10..=100
    pub confidence_score: u8,
}

#[account]
#[derive(InitSpace, Default, Debug)]
pub struct StrategyRegistry {
    /// Associated vault
    pub vault: Pubkey,

    /// Strategies in ID order; the ID is the index
    #[max_len(10)]
    pub strategies: Vec<Strategy>,

    /// Bump seed for PDA derivation
    pub bump: u8,
}

impl StrategyRegistry {
    pub const LEN: usize = 8 + Self::INIT_SPACE;

    pub fn len(&self) -> usize {
        self.strategies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strategies.is_empty()
    }

    /// Validate and append a strategy, returning its ID. The name bound is
    /// counted in UTF-8 bytes, not characters.
    pub fn add_strategy(
        &mut self,
        name: String,
        predicted_apy: u64,
        risk_score: u8,
        initial_weight: u64,
    ) -> Result<u8> {
        require!(self.strategies.len() < MAX_STRATEGIES, VaultError::CapacityExceeded);
        require!(
            risk_score <= MAX_RISK_SCORE && initial_weight > 0,
            VaultError::InvalidWeight
        );
        require!(name.len() <= MAX_NAME_LEN, VaultError::NameTooLong);

        let id = self.strategies.len() as u8;
        self.strategies.push(Strategy {
            name,
            apy_prediction: predicted_apy,
            risk_score,
            ml_weight: initial_weight,
            performance_history: [0; HISTORY_SLOTS],
            total_allocated: 0,
            is_active: true,
            confidence_score: DEFAULT_CONFIDENCE,
        });
        Ok(id)
    }

    pub fn strategy(&self, id: u8) -> Result<&Strategy> {
        self.strategies
            .get(id as usize)
            .ok_or_else(|| VaultError::StrategyNotFound.into())
    }

    pub fn strategy_mut(&mut self, id: u8) -> Result<&mut Strategy> {
        self.strategies
            .get_mut(id as usize)
            .ok_or_else(|| VaultError::StrategyNotFound.into())
    }

    /// Probe a fixed slot. Unregistered slots read as `None`.
    pub fn slot(&self, index: usize) -> Option<&Strategy> {
        if index >= MAX_STRATEGIES {
            return None;
        }
        self.strategies.get(index)
    }

    pub fn set_active(&mut self, id: u8, is_active: bool) -> Result<()> {
        self.strategy_mut(id)?.is_active = is_active;
        Ok(())
    }
}
