use anchor_lang::prelude::*;

use crate::{
    constants::*,
    events::PerformanceRecorded,
    state::{PerformanceRecord, StrategyRegistry, VaultState},
};

#[derive(Accounts)]
#[instruction(vault_id: [u8; 32], strategy_id: u8)]
pub struct RecordPerformance<'info> {
    #[account(
        seeds = [VAULT_SEED, vault_id.as_ref()],
        bump = vault.bump,
    )]
    pub vault: Box<Account<'info, VaultState>>,

    #[account(
        mut,
        seeds = [STRATEGY_REGISTRY_SEED, vault_id.as_ref()],
        bump = registry.bump,
        constraint = registry.key() == vault.registry
    )]
    pub registry: Box<Account<'info, StrategyRegistry>>,

    /// Record for (strategy_id, current epoch); overwritten if recorded twice
    #[account(
        init_if_needed,
        payer = authority,
        space = PerformanceRecord::LEN,
        seeds = [
            PERFORMANCE_SEED,
            vault.key().as_ref(),
            &[strategy_id],
            &vault.current_epoch.to_le_bytes()
        ],
        bump
    )]
    pub performance_record: Box<Account<'info, PerformanceRecord>>,

    #[account(mut)]
    pub authority: Signer<'info>,

    pub system_program: Program<'info, System>,
}

pub fn record_performance(
    ctx: Context<RecordPerformance>,
    vault_id: [u8; 32],
    strategy_id: u8,
    actual_apy: u64,
    sharpe_ratio: u64,
) -> Result<bool> {
    let timestamp = Clock::get()?.unix_timestamp;
    let vault = &ctx.accounts.vault;
    let record = &mut ctx.accounts.performance_record;
    let assessment = vault.record_performance(
        &mut ctx.accounts.registry,
        record,
        &ctx.accounts.authority.key(),
        strategy_id,
        actual_apy,
        sharpe_ratio,
        timestamp,
    )?;
    record.bump = ctx.bumps.performance_record;

    emit!(PerformanceRecorded {
        vault_id,
        strategy_id,
        epoch: vault.current_epoch,
        actual_apy,
        prediction_error: assessment.prediction_error,
        sharpe_ratio,
        ml_weight_before: assessment.previous_weight,
        ml_weight_after: assessment.ml_weight,
        confidence_score: assessment.confidence_score,
        timestamp,
    });

    Ok(true)
}
