pub mod constants;
pub mod errors;
pub mod prize;
pub mod types;

pub use errors::ValidationError;
pub use prize::{PayoutRate, PrizeTier};
