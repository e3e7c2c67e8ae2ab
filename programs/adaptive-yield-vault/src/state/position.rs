use anchor_lang::prelude::*;
use solana_program::{clock::Slot, system_program};

use crate::{constants::MAX_STRATEGIES, errors::VaultError};

#[account]
#[derive(Default, Debug)]
pub struct DepositorPosition {
    /// Associated vault
    pub vault: Pubkey,

    /// Depositor wallet address
    pub depositor: Pubkey,

    /// Cumulative principal contributed (bookkeeping only)
    pub amount: u64,

    /// Claim on the pool
    pub shares: u64,

    /// Slot of the last deposit
    pub entry_slot: Slot,

    /// Per-strategy breakdown slot, always zero-filled
    pub strategy_allocation: [u64; MAX_STRATEGIES],

    /// Bump seed for PDA derivation
    pub bump: u8,
}

impl DepositorPosition {
    pub const LEN: usize = 8 + // discriminator
        32 + // vault
        32 + // depositor
        8 + // amount
        8 + // shares
        8 + // entry_slot
        8 * MAX_STRATEGIES + // strategy_allocation
        1; // bump

    pub fn is_open(&self) -> bool {
        self.shares > 0
    }

    pub fn credit(&mut self, amount: u64, shares: u64, slot: Slot) -> Result<()> {
        self.amount = self.amount.checked_add(amount).ok_or(VaultError::MathOverflow)?;
        self.shares = self.shares.checked_add(shares).ok_or(VaultError::MathOverflow)?;
        self.entry_slot = slot;
        self.strategy_allocation = [0; MAX_STRATEGIES];
        Ok(())
    }

    /// Returns true when every share was burned and the position should be closed.
    pub fn debit(&mut self, amount: u64, shares: u64) -> Result<bool> {
        require!(shares <= self.shares, VaultError::InsufficientBalance);
        if shares == self.shares {
            self.amount = 0;
            self.shares = 0;
            return Ok(true);
        }
        self.shares -= shares;
        // principal is bookkeeping only; payouts above it floor to zero
        self.amount = self.amount.saturating_sub(amount);
        Ok(false)
    }

    /// Read a position PDA that may not exist. An empty or foreign account
    /// holds no shares.
    pub fn load(info: &AccountInfo) -> Result<Self> {
        require!(
            !info.data_is_empty() && info.owner == &crate::ID,
            VaultError::InsufficientBalance
        );
        let data = info.try_borrow_data()?;
        let position = Self::try_deserialize(&mut &data[..])?;
        Ok(position)
    }

    pub fn store(&self, info: &AccountInfo) -> Result<()> {
        let mut data = info.try_borrow_mut_data()?;
        let mut writer: &mut [u8] = &mut data[..];
        self.try_serialize(&mut writer)
    }

    /// Refund the rent to `destination` and hand the account back to the system program.
    pub fn close_account<'info>(info: &AccountInfo<'info>, destination: &AccountInfo<'info>) -> Result<()> {
        let refunded = destination
            .lamports()
            .checked_add(info.lamports())
            .ok_or(VaultError::MathOverflow)?;
        **destination.try_borrow_mut_lamports()? = refunded;
        **info.try_borrow_mut_lamports()? = 0;
        info.try_borrow_mut_data()?.fill(0);
        info.assign(&system_program::ID);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anchor_lang::error::Error;

    fn error_code<T: std::fmt::Debug>(result: Result<T>) -> u32 {
        match result.unwrap_err() {
            Error::AnchorError(e) => e.error_code_number,
            other => panic!("unexpected error {:?}", other),
        }
    }

    fn serialized(position: &DepositorPosition) -> Vec<u8> {
        let mut data = Vec::new();
        position.try_serialize(&mut data).unwrap();
        data.resize(DepositorPosition::LEN, 0);
        data
    }

    #[test]
    fn test_credit_accumulates() {
        let mut position = DepositorPosition::default();
        position.credit(1_000_000, 1_000_000, 10).unwrap();
        position.credit(2_000_000, 1_500_000, 20).unwrap();

        assert_eq!(position.amount, 3_000_000);
        assert_eq!(position.shares, 2_500_000);
        assert_eq!(position.entry_slot, 20);
        assert_eq!(position.strategy_allocation, [0; MAX_STRATEGIES]);
        assert!(position.is_open());
    }

    #[test]
    fn test_credit_resets_allocation_slot() {
        let mut position = DepositorPosition {
            strategy_allocation: [9; MAX_STRATEGIES],
            ..Default::default()
        };
        position.credit(1_000_000, 1_000_000, 1).unwrap();
        assert_eq!(position.strategy_allocation, [0; MAX_STRATEGIES]);
    }

    #[test]
    fn test_partial_and_full_debit() {
        let mut position = DepositorPosition::default();
        position.credit(4_000_000, 4_000_000, 1).unwrap();

        assert!(!position.debit(1_000_000, 1_000_000).unwrap());
        assert_eq!(position.shares, 3_000_000);
        assert_eq!(position.amount, 3_000_000);

        assert!(position.debit(3_000_000, 3_000_000).unwrap());
        assert!(!position.is_open());
        assert!(position.debit(1, 1).is_err());
    }

    #[test]
    fn test_debit_above_principal_saturates() {
        let mut position = DepositorPosition::default();
        position.credit(1_000_000, 1_000_000, 1).unwrap();
        // share price doubled: half the shares are worth the full principal and more
        assert!(!position.debit(1_200_000, 600_000).unwrap());
        assert_eq!(position.amount, 0);
        assert_eq!(position.shares, 400_000);
    }

    #[test]
    fn test_load_missing_position_is_empty_balance() {
        let key = Pubkey::new_unique();
        let system = system_program::ID;
        let mut lamports = 0;
        let mut data: Vec<u8> = Vec::new();
        let info = AccountInfo::new(&key, false, true, &mut lamports, &mut data, &system, false, 0);
        assert_eq!(
            error_code(DepositorPosition::load(&info)),
            u32::from(VaultError::InsufficientBalance)
        );
    }

    #[test]
    fn test_load_foreign_account_is_empty_balance() {
        let key = Pubkey::new_unique();
        let foreign = Pubkey::new_unique();
        let mut lamports = 1_000;
        let mut data = serialized(&DepositorPosition { shares: 5, ..Default::default() });
        let info = AccountInfo::new(&key, false, true, &mut lamports, &mut data, &foreign, false, 0);
        assert_eq!(
            error_code(DepositorPosition::load(&info)),
            u32::from(VaultError::InsufficientBalance)
        );
    }

    #[test]
    fn test_load_and_store_partial_burn() {
        let key = Pubkey::new_unique();
        let owner = crate::ID;
        let depositor = Pubkey::new_unique();
        let mut lamports = 1_000;
        let mut data = serialized(&DepositorPosition {
            depositor,
            amount: 4_000_000,
            shares: 4_000_000,
            ..Default::default()
        });
        let info = AccountInfo::new(&key, false, true, &mut lamports, &mut data, &owner, false, 0);

        let mut position = DepositorPosition::load(&info).unwrap();
        assert_eq!(position.depositor, depositor);
        assert!(!position.debit(1_000_000, 1_000_000).unwrap());
        position.store(&info).unwrap();

        let reloaded = DepositorPosition::load(&info).unwrap();
        assert_eq!(reloaded.shares, 3_000_000);
        assert_eq!(reloaded.amount, 3_000_000);
        assert_eq!(reloaded.depositor, depositor);
    }

    #[test]
    fn test_close_account_refunds_rent() {
        let key = Pubkey::new_unique();
        let owner = crate::ID;
        let mut lamports = 1_500;
        let mut data = serialized(&DepositorPosition { shares: 1, ..Default::default() });
        let info = AccountInfo::new(&key, false, true, &mut lamports, &mut data, &owner, false, 0);

        let wallet = Pubkey::new_unique();
        let system = system_program::ID;
        let mut wallet_lamports = 500;
        let mut wallet_data: Vec<u8> = Vec::new();
        let destination = AccountInfo::new(
            &wallet,
            true,
            true,
            &mut wallet_lamports,
            &mut wallet_data,
            &system,
            false,
            0,
        );

        DepositorPosition::close_account(&info, &destination).unwrap();
        assert_eq!(info.lamports(), 0);
        assert_eq!(destination.lamports(), 2_000);
        assert!(info.try_borrow_data().unwrap().iter().all(|b| *b == 0));
    }
}
