use anchor_lang::prelude::*;

use crate::{
    constants::*,
    events::StrategyRegistered,
    state::{StrategyRegistry, VaultState},
};

#[derive(Accounts)]
#[instruction(vault_id: [u8; 32])]
pub struct RegisterStrategy<'info> {
    #[account(
        mut,
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

pub fn register_strategy(
    ctx: Context<RegisterStrategy>,
    vault_id: [u8; 32],
    name: String,
    predicted_apy: u64,
    risk_score: u8,
    initial_weight: u64,
) -> Result<u8> {
    let vault = &mut ctx.accounts.vault;
    let registry = &mut ctx.accounts.registry;
    let strategy_id = vault.register_strategy(
        registry,
        &ctx.accounts.authority.key(),
        name,
        predicted_apy,
        risk_score,
        initial_weight,
    )?;

    let strategy = registry.strategy(strategy_id)?;
    emit!(StrategyRegistered {
        vault_id,
        strategy_id,
        name: strategy.name.clone(),
        apy_prediction: strategy.apy_prediction,
        risk_score: strategy.risk_score,
        ml_weight: strategy.ml_weight,
        timestamp: Clock::get()?.unix_timestamp,
    });

    Ok(strategy_id)
}
