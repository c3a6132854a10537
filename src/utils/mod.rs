//! Utility modules
//!
//! Logging setup, `.env` loading and substitution dictionary files.

pub mod dictionary;
pub mod env;
pub mod logging;
