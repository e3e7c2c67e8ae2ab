/// PDA seeds
pub const VAULT_SEED: &[u8] = b"vault";
pub const STRATEGY_REGISTRY_SEED: &[u8] = b"strategy_registry";
pub const POSITION_SEED: &[u8] = b"position";
pub const PERFORMANCE_SEED: &[u8] = b"performance";

/// Fixed-point scale shared by APYs, weights and learning rates
pub const PRECISION: u64 = 1_000_000;

/// Deposit constants
pub const MIN_DEPOSIT: u64 = 1_000_000;

/// Registry constants
pub const MAX_STRATEGIES: usize = 10;
pub const MAX_NAME_LEN: usize = 50;
pub const HISTORY_SLOTS: usize = 5;
pub const MAX_RISK_SCORE: u8 = 100;

/// Scoring constants
pub const DEFAULT_LEARNING_RATE: u64 = 50;
pub const DEFAULT_CONFIDENCE: u8 = 50;
pub const MIN_CONFIDENCE: u8 = 10;
pub const MAX_CONFIDENCE: u8 = 100;
pub const MIN_WEIGHT: u64 = 1;
