pub mod participants;
pub mod reward_math;
pub mod vault;

pub use participants::*;
pub use reward_math::*;
pub use vault::*;
