#[cfg(feature = "server")]
pub(crate) mod session;

mod auth;
pub use auth::*;

mod offer;
pub use offer::*;

mod application;
pub use application::*;

mod profile;
pub use profile::*;

mod dashboard;
pub use dashboard::*;
