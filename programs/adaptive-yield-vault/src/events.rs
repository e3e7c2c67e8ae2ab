use anchor_lang::prelude::*;

#[event]
pub struct VaultInitialized {
    pub vault_id: [u8; 32],
    pub authority: Pubkey,
    pub asset_mint: Pubkey,
    pub learning_rate: u64,
    pub timestamp: i64,
}

#[event]
pub struct StrategyRegistered {
    pub vault_id: [u8; 32],
    pub strategy_id: u8,
    pub name: String,
    pub apy_prediction: u64,
    pub risk_score: u8,
    pub ml_weight: u64,
    pub timestamp: i64,
}

#[event]
pub struct Deposited {
    pub vault_id: [u8; 32],
    pub depositor: Pubkey,
    pub amount: u64,
    pub shares_minted: u64,
    pub tvl_after: u64,
    pub total_shares_after: u64,
    /// Asset value of one share in PRECISION units
    pub share_price: u64,
    pub timestamp: i64,
}

#[event]
pub struct Withdrawn {
    pub vault_id: [u8; 32],
    pub depositor: Pubkey,
    pub shares_burned: u64,
    pub amount: u64,
    pub position_closed: bool,
    pub tvl_after: u64,
    pub total_shares_after: u64,
    pub share_price: u64,
    pub timestamp: i64,
}

#[event]
pub struct PerformanceRecorded {
    pub vault_id: [u8; 32],
    pub strategy_id: u8,
    pub epoch: u64,
    pub actual_apy: u64,
    pub prediction_error: u64,
    pub sharpe_ratio: u64,
    pub ml_weight_before: u64,
    pub ml_weight_after: u64,
    pub confidence_score: u8,
    pub timestamp: i64,
}

#[event]
pub struct EpochAdvanced {
    pub vault_id: [u8; 32],
    pub epoch: u64,
    pub timestamp: i64,
}

#[event]
pub struct AllocationOptimized {
    pub vault_id: [u8; 32],
    pub epoch: u64,
    pub tvl: u64,
    pub total_score: u128,
    pub allocations: [u64; 10],
    pub allocated_total: u64,
    /// Left unallocated by per-strategy truncation
    pub unallocated: u64,
    pub participants: u8,
    pub timestamp: i64,
}

#[event]
pub struct AllocationSkipped {
    pub vault_id: [u8; 32],
    pub epoch: u64,
    pub tvl: u64,
    pub timestamp: i64,
}

#[event]
pub struct StrategyStatusChanged {
    pub vault_id: [u8; 32],
    pub strategy_id: u8,
    pub is_active: bool,
    pub timestamp: i64,
}

#[event]
pub struct LearningRateUpdated {
    pub vault_id: [u8; 32],
    pub previous: u64,
    pub learning_rate: u64,
    pub timestamp: i64,
}
