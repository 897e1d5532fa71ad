//! Configuration, errors and logging shared by the client and the CLI

pub mod config;
pub mod error;
pub mod log;

pub use error::QuoteError;
