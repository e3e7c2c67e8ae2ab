use anchor_lang::prelude::*;
use anchor_spl::associated_token::AssociatedToken;
use anchor_spl::token::{Mint, Token, TokenAccount};

use crate::{
    constants::*,
    events::VaultInitialized,
    state::{StrategyRegistry, VaultState},
};

#[derive(Accounts)]
#[instruction(vault_id: [u8; 32])]
pub struct InitializeVault<'info> {
    #[account(
        init,
        payer = authority,
        space = VaultState::LEN,
        seeds = [VAULT_SEED, vault_id.as_ref()],
        bump
    )]
    pub vault: Box<Account<'info, VaultState>>,

    #[account(
        init,
        payer = authority,
        space = StrategyRegistry::LEN,
        seeds = [STRATEGY_REGISTRY_SEED, vault_id.as_ref()],
        bump
    )]
    pub registry: Box<Account<'info, StrategyRegistry>>,

    /// Base asset accepted by the vault
    pub asset_mint: Account<'info, Mint>,

    /// Program-owned treasury ATA
    #[account(
        init,
        payer = authority,
        associated_token::mint = asset_mint,
        associated_token::authority = vault,
    )]
    pub treasury: Account<'info, TokenAccount>,

    #[account(mut)]
    pub authority: Signer<'info>,

    pub system_program: Program<'info, System>,
    pub token_program: Program<'info, Token>,
    pub associated_token_program: Program<'info, AssociatedToken>,
    pub rent: Sysvar<'info, Rent>,
}

pub fn initialize_vault(
    ctx: Context<InitializeVault>,
    vault_id: [u8; 32],
    learning_rate: Option<u64>,
) -> Result<()> {
    let mut state = VaultState::new(vault_id, ctx.accounts.authority.key(), learning_rate)?;
    state.asset_mint = ctx.accounts.asset_mint.key();
    state.treasury = ctx.accounts.treasury.key();
    state.registry = ctx.accounts.registry.key();
    state.bump = ctx.bumps.vault;

    let vault = &mut ctx.accounts.vault;
    vault.set_inner(state);

    let registry = &mut ctx.accounts.registry;
    registry.vault = vault.key();
    registry.bump = ctx.bumps.registry;

    emit!(VaultInitialized {
        vault_id,
        authority: vault.authority,
        asset_mint: vault.asset_mint,
        learning_rate: vault.learning_rate,
        timestamp: Clock::get()?.unix_timestamp,
    });

    Ok(())
}
