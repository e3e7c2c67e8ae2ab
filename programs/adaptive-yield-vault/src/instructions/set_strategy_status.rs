use anchor_lang::prelude::*;

use crate::{
    constants::*,
    events::StrategyStatusChanged,
    state::{StrategyRegistry, VaultState},
};

#[derive(Accounts)]
#[instruction(vault_id: [u8; 32])]
pub struct SetStrategyStatus<'info> {
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

pub fn set_strategy_status(
    ctx: Context<SetStrategyStatus>,
    vault_id: [u8; 32],
    strategy_id: u8,
    is_active: bool,
) -> Result<()> {
    ctx.accounts.vault.set_strategy_status(
        &mut ctx.accounts.registry,
        &ctx.accounts.authority.key(),
        strategy_id,
        is_active,
    )?;

    emit!(StrategyStatusChanged {
        vault_id,
        strategy_id,
        is_active,
        timestamp: Clock::get()?.unix_timestamp,
    });

    Ok(())
}
