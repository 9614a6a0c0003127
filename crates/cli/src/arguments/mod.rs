//! Argument interpretation for the unixtools CLI.
//!
//! Turns the parsed command line into a [`Request`]: either one of the
//! operations with everything it needs, or a note that required flags are
//! missing, which is reported as guidance rather than as a failure.

pub mod request;

// Re-exports for convenience
pub use request::determine;
pub use request::Provider;
pub use request::Request;
