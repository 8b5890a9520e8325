pub mod error;

// JobBridge domain modules (canonical locations for all marketplace types)
pub mod account;
pub mod application;
pub mod dashboard;
pub mod offer;

pub use error::*;

// Re-export all domain types
pub use account::*;
pub use application::*;
pub use dashboard::*;
pub use offer::*;
