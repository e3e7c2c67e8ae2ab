use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};

use crate::{
    constants::*,
    events::Withdrawn,
    state::{DepositorPosition, VaultState},
};

#[derive(Accounts)]
#[instruction(vault_id: [u8; 32])]
pub struct Withdraw<'info> {
    #[account(
        mut,
        seeds = [VAULT_SEED, vault_id.as_ref()],
        bump = vault.bump,
        constraint = vault.is_initialized
    )]
    pub vault: Box<Account<'info, VaultState>>,

    /// Depositor position; may not exist yet
    /// CHECK: PDA derivation, deserialized in instruction
    #[account(
        mut,
        seeds = [POSITION_SEED, vault.key().as_ref(), depositor.key().as_ref()],
        bump
    )]
    pub position: UncheckedAccount<'info>,

    /// Program-owned treasury ATA
    #[account(
        mut,
        constraint = treasury.key() == vault.treasury
    )]
    pub treasury: Account<'info, TokenAccount>,

    /// Depositor's asset token account
    #[account(
        mut,
        constraint = depositor_token_account.owner == depositor.key(),
        constraint = depositor_token_account.mint == vault.asset_mint
    )]
    pub depositor_token_account: Account<'info, TokenAccount>,

    #[account(mut)]
    pub depositor: Signer<'info>,

    pub token_program: Program<'info, Token>,
}

pub fn withdraw(ctx: Context<Withdraw>, vault_id: [u8; 32], shares_to_burn: u64) -> Result<u64> {
    let position_info = ctx.accounts.position.to_account_info();
    let mut position = DepositorPosition::load(&position_info)?;

    let amount = ctx.accounts.vault.preview_withdrawal(&position, shares_to_burn)?;

    let vault_bump = ctx.accounts.vault.bump;
    token::transfer(
        CpiContext::new_with_signer(
            ctx.accounts.token_program.to_account_info(),
            Transfer {
                from: ctx.accounts.treasury.to_account_info(),
                to: ctx.accounts.depositor_token_account.to_account_info(),
                authority: ctx.accounts.vault.to_account_info(),
            },
            &[&[VAULT_SEED, vault_id.as_ref(), &[vault_bump]]],
        ),
        amount,
    )?;

    let vault = &mut ctx.accounts.vault;
    let settlement = vault.settle_withdrawal(&mut position, shares_to_burn, amount)?;

    let depositor = ctx.accounts.depositor.to_account_info();
    if settlement.position_closed {
        DepositorPosition::close_account(&position_info, &depositor)?;
        msg!("position closed for {}", depositor.key());
    } else {
        position.store(&position_info)?;
    }

    emit!(Withdrawn {
        vault_id,
        depositor: depositor.key(),
        shares_burned: shares_to_burn,
        amount,
        position_closed: settlement.position_closed,
        tvl_after: vault.tvl,
        total_shares_after: vault.total_shares,
        share_price: vault.share_price()?,
        timestamp: Clock::get()?.unix_timestamp,
    });

    Ok(amount)
}
