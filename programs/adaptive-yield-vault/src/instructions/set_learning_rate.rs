use anchor_lang::prelude::*;

use crate::{constants::*, events::LearningRateUpdated, state::VaultState};

#[derive(Accounts)]
#[instruction(vault_id: [u8; 32])]
pub struct SetLearningRate<'info> {
    #[account(
        mut,
        seeds = [VAULT_SEED, vault_id.as_ref()],
        bump = vault.bump,
    )]
    pub vault: Box<Account<'info, VaultState>>,

    pub authority: Signer<'info>,
}

pub fn set_learning_rate(
    ctx: Context<SetLearningRate>,
    vault_id: [u8; 32],
    learning_rate: u64,
) -> Result<()> {
    let vault = &mut ctx.accounts.vault;
    let previous = vault.update_learning_rate(&ctx.accounts.authority.key(), learning_rate)?;

    emit!(LearningRateUpdated {
        vault_id,
        previous,
        learning_rate,
        timestamp: Clock::get()?.unix_timestamp,
    });

    Ok(())
}
