use anchor_lang::prelude::*;

#[error_code]
pub enum VaultError {
    #[msg("Caller is not the vault operator")]
    NotAuthorized,

    #[msg("Strategy registry is full")]
    CapacityExceeded,

    #[msg("Invalid amount")]
    InvalidAmount,

    #[msg("Insufficient share balance")]
    InsufficientBalance,

    #[msg("Strategy not found")]
    StrategyNotFound,

    #[msg("Invalid risk score or weight")]
    InvalidWeight,

    #[msg("Math overflow")]
    MathOverflow,

    #[msg("Strategy name exceeds 50 bytes")]
    NameTooLong,

    #[msg("Learning rate must be between 1 and 1_000_000")]
    InvalidLearningRate,
}
