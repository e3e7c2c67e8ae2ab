pub mod vault;
pub mod position;
pub mod registry;
pub mod performance;
pub mod operator;

pub use vault::*;
pub use position::*;
pub use registry::*;
pub use performance::*;
