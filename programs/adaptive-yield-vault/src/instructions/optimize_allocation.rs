use anchor_lang::prelude::*;

use crate::{
    constants::*,
    events::{AllocationOptimized, AllocationSkipped},
    state::{StrategyRegistry, VaultState},
};

#[derive(Accounts)]
#[instruction(vault_id: [u8; 32])]
pub struct OptimizeAllocation<'info> {
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

    pub authority: Signer<'info>,
}

/// Returns false when no active strategy has a positive score; nothing is written then.
pub fn optimize_allocation(ctx: Context<OptimizeAllocation>, vault_id: [u8; 32]) -> Result<bool> {
    let vault = &ctx.accounts.vault;
    let timestamp = Clock::get()?.unix_timestamp;

    let plan = match vault.optimize_allocation(&mut ctx.accounts.registry, &ctx.accounts.authority.key())? {
        Some(plan) => plan,
        None => {
            msg!("allocation skipped: total score is zero");
            emit!(AllocationSkipped {
                vault_id,
                epoch: vault.current_epoch,
                tvl: vault.tvl,
                timestamp,
            });
            return Ok(false);
        }
    };

    emit!(AllocationOptimized {
        vault_id,
        epoch: vault.current_epoch,
        tvl: vault.tvl,
        total_score: plan.total_score,
        allocations: plan.amounts(),
        allocated_total: plan.allocated_total,
        unallocated: plan.shortfall(vault.tvl),
        participants: plan.participants,
        timestamp,
    });

    Ok(true)
}
