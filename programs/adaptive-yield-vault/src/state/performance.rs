use anchor_lang::prelude::*;

#[account]
#[derive(Default, Debug)]
pub struct PerformanceRecord {
    /// Associated vault
    pub vault: Pubkey,

    pub strategy_id: u8,

    pub epoch: u64,

    /// Realized APY in PRECISION units
    pub actual_apy: u64,

    /// |actual - predicted| against the prediction in force when recorded
    pub prediction_error: u64,

    /// Caller-supplied, stored verbatim
    pub sharpe_ratio: u64,

    pub timestamp: i64,

    /// Bump seed for PDA derivation
    pub bump: u8,
}

impl PerformanceRecord {
    pub const LEN: usize = 8 + // discriminator
        32 + // vault
        1 + // strategy_id
        8 + // epoch
        8 + // actual_apy
        8 + // prediction_error
        8 + // sharpe_ratio
        8 + // timestamp
        1; // bump
}
