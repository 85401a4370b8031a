// Pure domain services
pub mod analytics;
pub mod simulator;
pub mod validator;

pub use analytics::*;
pub use simulator::*;
pub use validator::*;
