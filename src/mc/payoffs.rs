//! Digital Payoff Functions
//!
//! # Mathematical Definitions
//!
//! - **Digital call**: H(S_T - K), pays 1 if the asset finishes above strike
//! - **Digital put**: H(K - S_T), pays 1 if the asset finishes below strike
//!
//! where H is [`heaviside`] with H(0) = 0. The analytic pricer uses the same
//! payoffs at expiry, so both methods agree on the tie at the strike.

use crate::error::{PricingError, PricingResult};
use crate::math_utils::heaviside;
use crate::options::option_type::OptionType;
use ndarray::Array1;

/// Terminal payoff of a digital contract
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Payoff {
    /// Digital call option: H(S_T - K)
    DigitalCall { k: f64 },

    /// Digital put option: H(K - S_T)
    DigitalPut { k: f64 },
}

impl Payoff {
    /// Payoff for an option type tag; non-digital tags are rejected.
    pub fn for_option_type(option_type: OptionType, k: f64) -> PricingResult<Payoff> {
        match option_type {
            OptionType::DigitalCall => Ok(Payoff::DigitalCall { k }),
            OptionType::DigitalPut => Ok(Payoff::DigitalPut { k }),
            other => Err(PricingError::UnsupportedOptionType { option_type: other }),
        }
    }

    /// Payoff for a single terminal price
    pub fn calculate(&self, s_t: f64) -> f64 {
        match *self {
            Payoff::DigitalCall { k } => heaviside(s_t - k),
            Payoff::DigitalPut { k } => heaviside(k - s_t),
        }
    }

    /// Payoffs for a batch of terminal prices
    pub fn calculate_batch(&self, terminal: &Array1<f64>) -> Array1<f64> {
        terminal.mapv(|s_t| self.calculate(s_t))
    }
}
