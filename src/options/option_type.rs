// src/options/option_type.rs
use std::fmt;

/// Option type tags shared by the equity option products.
///
/// Only [`OptionType::DigitalCall`] and [`OptionType::DigitalPut`] are priced
/// by the digital pricers; every other tag is rejected with
/// `PricingError::UnsupportedOptionType`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OptionType {
    EuropeanCall,
    EuropeanPut,
    AmericanCall,
    AmericanPut,
    DigitalCall,
    DigitalPut,
}

impl fmt::Display for OptionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = match self {
            OptionType::EuropeanCall => "EUROPEAN_CALL",
            OptionType::EuropeanPut => "EUROPEAN_PUT",
            OptionType::AmericanCall => "AMERICAN_CALL",
            OptionType::AmericanPut => "AMERICAN_PUT",
            OptionType::DigitalCall => "DIGITAL_CALL",
            OptionType::DigitalPut => "DIGITAL_PUT",
        };
        f.write_str(tag)
    }
}
