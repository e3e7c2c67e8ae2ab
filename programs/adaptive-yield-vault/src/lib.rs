use anchor_lang::prelude::*;

pub mod allocator;
pub mod constants;
pub mod errors;
pub mod events;
pub mod instructions;
pub mod math;
pub mod performance;
pub mod scoring;
pub mod state;

use instructions::*;

declare_id!("AdaptVau1t111111111111111111111111111111111");

#[program]
pub mod adaptive_yield_vault {
    use super::*;

    /// Create the vault, its strategy registry and treasury; the signer becomes operator
    pub fn initialize_vault(
        ctx: Context<InitializeVault>,
        vault_id: [u8; 32],
        learning_rate: Option<u64>,
    ) -> Result<()> {
        instructions::initialize_vault(ctx, vault_id, learning_rate)
    }

    /// Register a strategy and return its sequential ID
    pub fn register_strategy(
        ctx: Context<RegisterStrategy>,
        vault_id: [u8; 32],
        name: String,
        predicted_apy: u64,
        risk_score: u8,
        initial_weight: u64,
    ) -> Result<u8> {
        instructions::register_strategy(ctx, vault_id, name, predicted_apy, risk_score, initial_weight)
    }

    /// Deposit base asset and return the shares minted
    pub fn deposit(ctx: Context<Deposit>, vault_id: [u8; 32], amount: u64) -> Result<u64> {
        instructions::deposit(ctx, vault_id, amount)
    }

    /// Burn shares and return the asset amount paid out
    pub fn withdraw(ctx: Context<Withdraw>, vault_id: [u8; 32], shares_to_burn: u64) -> Result<u64> {
        instructions::withdraw(ctx, vault_id, shares_to_burn)
    }

    /// Feed back realized performance for the current epoch
    pub fn record_performance(
        ctx: Context<RecordPerformance>,
        vault_id: [u8; 32],
        strategy_id: u8,
        actual_apy: u64,
        sharpe_ratio: u64,
    ) -> Result<bool> {
        instructions::record_performance(ctx, vault_id, strategy_id, actual_apy, sharpe_ratio)
    }

    pub fn advance_epoch(ctx: Context<AdvanceEpoch>, vault_id: [u8; 32]) -> Result<bool> {
        instructions::advance_epoch(ctx, vault_id)
    }

    /// Recompute risk-adjusted allocations across active strategies
    pub fn optimize_allocation(ctx: Context<OptimizeAllocation>, vault_id: [u8; 32]) -> Result<bool> {
        instructions::optimize_allocation(ctx, vault_id)
    }

    pub fn set_strategy_status(
        ctx: Context<SetStrategyStatus>,
        vault_id: [u8; 32],
        strategy_id: u8,
        is_active: bool,
    ) -> Result<()> {
        instructions::set_strategy_status(ctx, vault_id, strategy_id, is_active)
    }

    pub fn set_learning_rate(
        ctx: Context<SetLearningRate>,
        vault_id: [u8; 32],
        learning_rate: u64,
    ) -> Result<()> {
        instructions::set_learning_rate(ctx, vault_id, learning_rate)
    }
}
