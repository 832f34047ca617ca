//! CLI library components for the profile extractor.

pub mod logging;
pub mod session;

pub use session::ProfileSession;
