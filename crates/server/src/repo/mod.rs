pub mod account;
pub mod application;
pub mod dashboard;
pub mod offer;
