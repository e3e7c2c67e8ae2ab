use anchor_lang::prelude::*;

use crate::{constants::*, events::EpochAdvanced, state::VaultState};

#[derive(Accounts)]
#[instruction(vault_id: [u8; 32])]
pub struct AdvanceEpoch<'info> {
    #[account(
        mut,
        seeds = [VAULT_SEED, vault_id.as_ref()],
        bump = vault.bump,
    )]
    pub vault: Box<Account<'info, VaultState>>,

    pub authority: Signer<'info>,
}

/// Moves the vault to the next epoch. No capital moves here; off-chain
/// executors watch `EpochAdvanced` to rebalance external positions.
pub fn advance_epoch(ctx: Context<AdvanceEpoch>, vault_id: [u8; 32]) -> Result<bool> {
    let vault = &mut ctx.accounts.vault;
    let epoch = vault.rebalance_epoch(&ctx.accounts.authority.key())?;

    emit!(EpochAdvanced {
        vault_id,
        epoch,
        timestamp: Clock::get()?.unix_timestamp,
    });

    Ok(true)
}
