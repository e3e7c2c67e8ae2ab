use anchor_lang::prelude::*;
use solana_program::clock::Slot;

use crate::{
    constants::{DEFAULT_LEARNING_RATE, MIN_DEPOSIT, PRECISION},
    errors::VaultError,
    math::mul_div_u64,
    state::DepositorPosition,
};

#[account]
#[derive(Default, Debug)]
pub struct VaultState {
    /// Unique vault identifier
    pub vault_id: [u8; 32],

    /// Operator allowed to manage strategies, epochs and allocation
    pub authority: Pubkey,

    /// Base asset accepted by the vault
    pub asset_mint: Pubkey,

    /// Program-owned token account holding deposited assets
    pub treasury: Pubkey,

    /// Strategy registry for this vault
    pub registry: Pubkey,

    /// Total value locked, in asset base units
    pub tvl: u64,

    /// Outstanding shares across all positions
    pub total_shares: u64,

    /// Number of registered strategies (0..=MAX_STRATEGIES)
    pub strategy_count: u8,

    /// Weight-update rate in PRECISION units
    pub learning_rate: u64,

    /// Rebalance/training cycle counter
    pub current_epoch: u64,

    /// Is the vault initialized
    pub is_initialized: bool,

    /// Bump seed for PDA derivation
    pub bump: u8,

    /// Reserved space for future upgrades
    pub _reserved: [u8; 32],
}

/// Outcome of a successful withdrawal settlement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WithdrawalSettlement {
    pub amount: u64,
    pub position_closed: bool,
}

impl VaultState {
    pub const LEN: usize = 8 + // discriminator
        32 + // vault_id
        32 + // authority
        32 + // asset_mint
        32 + // treasury
        32 + // registry
        8 + // tvl
        8 + // total_shares
        1 + // strategy_count
        8 + // learning_rate
        8 + // current_epoch
        1 + // is_initialized
        1 + // bump
        32; // _reserved

    pub fn new(vault_id: [u8; 32], authority: Pubkey, learning_rate: Option<u64>) -> Result<Self> {
        let learning_rate = learning_rate.unwrap_or(DEFAULT_LEARNING_RATE);
        Self::validate_learning_rate(learning_rate)?;

        Ok(Self {
            vault_id,
            authority,
            learning_rate,
            is_initialized: true,
            ..Default::default()
        })
    }

    /// Access control for operator-only instructions.
    pub fn assert_operator(&self, caller: &Pubkey) -> Result<()> {
        require_keys_eq!(self.authority, *caller, VaultError::NotAuthorized);
        Ok(())
    }

    pub fn validate_learning_rate(learning_rate: u64) -> Result<()> {
        require!(
            learning_rate > 0 && learning_rate <= PRECISION,
            VaultError::InvalidLearningRate
        );
        Ok(())
    }

    /// Shares minted for `amount`; 1:1 while no shares exist.
    pub fn calculate_shares(tvl: u64, total_shares: u64, amount: u64) -> Result<u64> {
        if total_shares == 0 {
            return Ok(amount);
        }
        mul_div_u64(amount, total_shares, tvl)
    }

    /// Validate a deposit and price it against the current share supply.
    pub fn preview_deposit(&self, amount: u64) -> Result<u64> {
        require!(amount >= MIN_DEPOSIT, VaultError::InvalidAmount);
        let shares = Self::calculate_shares(self.tvl, self.total_shares, amount)?;
        require!(shares > 0, VaultError::InvalidAmount);

        // settle_deposit must not overflow
        self.tvl.checked_add(amount).ok_or(VaultError::MathOverflow)?;
        self.total_shares.checked_add(shares).ok_or(VaultError::MathOverflow)?;
        Ok(shares)
    }

    /// Credit a priced deposit to the position and the global totals.
    pub fn settle_deposit(
        &mut self,
        position: &mut DepositorPosition,
        amount: u64,
        shares: u64,
        slot: Slot,
    ) -> Result<()> {
        position.credit(amount, shares, slot)?;
        self.tvl = self.tvl.checked_add(amount).ok_or(VaultError::MathOverflow)?;
        self.total_shares = self
            .total_shares
            .checked_add(shares)
            .ok_or(VaultError::MathOverflow)?;
        Ok(())
    }

    /// Validate a share burn and price it in asset units.
    pub fn preview_withdrawal(&self, position: &DepositorPosition, shares_to_burn: u64) -> Result<u64> {
        require!(
            position.shares > 0 && shares_to_burn <= position.shares,
            VaultError::InsufficientBalance
        );
        require!(self.total_shares > 0, VaultError::InsufficientBalance);

        let amount = mul_div_u64(shares_to_burn, self.tvl, self.total_shares)?;
        require!(amount > 0, VaultError::InvalidAmount);
        Ok(amount)
    }

    /// Burn shares after the payout has been transferred.
    pub fn settle_withdrawal(
        &mut self,
        position: &mut DepositorPosition,
        shares_to_burn: u64,
        amount: u64,
    ) -> Result<WithdrawalSettlement> {
        let position_closed = position.debit(amount, shares_to_burn)?;
        self.tvl = self.tvl.checked_sub(amount).ok_or(VaultError::MathOverflow)?;
        self.total_shares = self
            .total_shares
            .checked_sub(shares_to_burn)
            .ok_or(VaultError::MathOverflow)?;
        Ok(WithdrawalSettlement { amount, position_closed })
    }

    /// Asset value of one whole share in PRECISION units.
    pub fn share_price(&self) -> Result<u64> {
        if self.total_shares == 0 {
            return Ok(PRECISION);
        }
        mul_div_u64(self.tvl, PRECISION, self.total_shares)
    }

    pub fn advance_epoch(&mut self) -> Result<u64> {
        self.current_epoch = self
            .current_epoch
            .checked_add(1)
            .ok_or(VaultError::MathOverflow)?;
        Ok(self.current_epoch)
    }
}
