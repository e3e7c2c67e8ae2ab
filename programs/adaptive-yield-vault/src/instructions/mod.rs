pub mod initialize_vault;
pub mod register_strategy;
pub mod deposit;
pub mod withdraw;
pub mod record_performance;
pub mod advance_epoch;
pub mod optimize_allocation;
pub mod set_strategy_status;
pub mod set_learning_rate;

pub use initialize_vault::*;
pub use register_strategy::*;
pub use deposit::*;
pub use withdraw::*;
pub use record_performance::*;
pub use advance_epoch::*;
pub use optimize_allocation::*;
pub use set_strategy_status::*;
pub use set_learning_rate::*;
