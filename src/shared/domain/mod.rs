/// Shared domain building blocks
pub mod accumulator;

pub use accumulator::{accumulate, Accumulator};
