use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};

use crate::{
    constants::*,
    events::Deposited,
    state::{DepositorPosition, VaultState},
};

#[derive(Accounts)]
#[instruction(vault_id: [u8; 32])]
pub struct Deposit<'info> {
    #[account(
        mut,
        seeds = [VAULT_SEED, vault_id.as_ref()],
        bump = vault.bump,
        constraint = vault.is_initialized
    )]
    pub vault: Box<Account<'info, VaultState>>,

    #[account(
        init_if_needed,
        payer = depositor,
        space = DepositorPosition::LEN,
        seeds = [POSITION_SEED, vault.key().as_ref(), depositor.key().as_ref()],
        bump
    )]
    pub position: Box<Account<'info, DepositorPosition>>,

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
    pub system_program: Program<'info, System>,
}

pub fn deposit(ctx: Context<Deposit>, vault_id: [u8; 32], amount: u64) -> Result<u64> {
    let clock = Clock::get()?;
    let shares = ctx.accounts.vault.preview_deposit(amount)?;

    token::transfer(
        CpiContext::new(
            ctx.accounts.token_program.to_account_info(),
            Transfer {
                from: ctx.accounts.depositor_token_account.to_account_info(),
                to: ctx.accounts.treasury.to_account_info(),
                authority: ctx.accounts.depositor.to_account_info(),
            },
        ),
        amount,
    )?;

    let vault = &mut ctx.accounts.vault;
    let position = &mut ctx.accounts.position;
    if !position.is_open() {
        position.vault = vault.key();
        position.depositor = ctx.accounts.depositor.key();
        position.bump = ctx.bumps.position;
    }
    vault.settle_deposit(position, amount, shares, clock.slot)?;

    emit!(Deposited {
        vault_id,
        depositor: position.depositor,
        amount,
        shares_minted: shares,
        tvl_after: vault.tvl,
        total_shares_after: vault.total_shares,
        share_price: vault.share_price()?,
        timestamp: clock.unix_timestamp,
    });

    Ok(shares)
}
