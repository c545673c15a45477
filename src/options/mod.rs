// src/options/mod.rs
pub mod digital;
pub mod option_type;

pub use digital::{DigitalOption, MarketState};
pub use option_type::OptionType;
