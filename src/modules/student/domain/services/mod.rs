pub mod total_credits;

pub use total_credits::{total_credits, CreditTotal};
