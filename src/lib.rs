//! bitflip: flip even, odd, or all bits of a bounded 16-bit value.

pub mod cli;
pub mod error;
pub mod flip;
pub mod formatters;
pub mod input;
pub mod output;
pub mod types;

pub use error::FlipError;
