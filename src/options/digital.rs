// src/options/digital.rs
//! Digital (binary) option contract and the market inputs it is valued against
//!
//! A digital call pays 1 at expiry if `S_T > K`, a digital put pays 1 if
//! `S_T < K`; both pay 0 otherwise.

use crate::analytics::digital_analytic;
use crate::analytics::greeks::{self, DigitalGreeks, GreeksConfig};
use crate::error::{validation::*, PricingResult};
use crate::mc::mc_engine::{self, McConfig, McEstimate};
use crate::options::option_type::OptionType;
use chrono::NaiveDate;

/// Immutable digital option contract.
///
/// The option type is stored as given; the pricers reject tags other than
/// the two digital ones when a valuation is requested.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DigitalOption {
    expiry_date: NaiveDate,
    strike_price: f64,
    option_type: OptionType,
}

impl DigitalOption {
    /// Create a contract; fails if the strike is not strictly positive.
    pub fn new(
        expiry_date: NaiveDate,
        strike_price: f64,
        option_type: OptionType,
    ) -> PricingResult<Self> {
        validate_positive("strike_price", strike_price)?;
        validate_finite("strike_price", strike_price)?;
        Ok(DigitalOption {
            expiry_date,
            strike_price,
            option_type,
        })
    }

    pub fn expiry_date(&self) -> NaiveDate {
        self.expiry_date
    }

    pub fn strike_price(&self) -> f64 {
        self.strike_price
    }

    pub fn option_type(&self) -> OptionType {
        self.option_type
    }

    /// Closed-form Black-Scholes value
    pub fn value(&self, market: &MarketState) -> PricingResult<f64> {
        digital_analytic::digital_value(self, market)
    }

    /// Antithetic Monte Carlo value
    pub fn value_mc(&self, market: &MarketState, cfg: &McConfig) -> PricingResult<f64> {
        mc_engine::mc_value_digital(self, market, cfg)
    }

    /// Antithetic Monte Carlo value with its standard error
    pub fn estimate_mc(&self, market: &MarketState, cfg: &McConfig) -> PricingResult<McEstimate> {
        mc_engine::mc_price_digital(self, market, cfg)
    }

    /// Bump-and-revalue sensitivities of the closed-form value
    pub fn greeks(&self, market: &MarketState, cfg: &GreeksConfig) -> PricingResult<DigitalGreeks> {
        greeks::digital_greeks(self, market, cfg)
    }
}

/// Market inputs for a single valuation. Rates and yields are continuously
/// compounded.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MarketState {
    pub value_date: NaiveDate,
    pub stock_price: f64,
    pub dividend_yield: f64,
    pub volatility: f64,
    pub interest_rate: f64,
}

impl MarketState {
    pub fn new(
        value_date: NaiveDate,
        stock_price: f64,
        dividend_yield: f64,
        volatility: f64,
        interest_rate: f64,
    ) -> Self {
        MarketState {
            value_date,
            stock_price,
            dividend_yield,
            volatility,
            interest_rate,
        }
    }

    /// Spot must be positive; yield, volatility and rate must be finite.
    pub fn validate(&self) -> PricingResult<()> {
        validate_positive("stock_price", self.stock_price)?;
        validate_finite("stock_price", self.stock_price)?;
        validate_finite("dividend_yield", self.dividend_yield)?;
        validate_finite("volatility", self.volatility)?;
        validate_finite("interest_rate", self.interest_rate)?;
        Ok(())
    }

    pub fn with_stock_price(self, stock_price: f64) -> Self {
        MarketState { stock_price, ..self }
    }

    pub fn with_volatility(self, volatility: f64) -> Self {
        MarketState { volatility, ..self }
    }

    pub fn with_interest_rate(self, interest_rate: f64) -> Self {
        MarketState { interest_rate, ..self }
    }

    pub fn with_value_date(self, value_date: NaiveDate) -> Self {
        MarketState { value_date, ..self }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PricingError;

    fn expiry() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 3, 20).unwrap()
    }

    #[test]
    fn test_new_accepts_positive_strike() {
        let option = DigitalOption::new(expiry(), 105.0, OptionType::DigitalPut).unwrap();
        assert_eq!(option.expiry_date(), expiry());
        assert_eq!(option.strike_price(), 105.0);
        assert_eq!(option.option_type(), OptionType::DigitalPut);
    }

    #[test]
    fn test_new_rejects_non_positive_strike() {
        for strike in [0.0, -1.0, f64::NAN] {
            let err = DigitalOption::new(expiry(), strike, OptionType::DigitalCall).unwrap_err();
            assert!(matches!(err, PricingError::InvalidParameters { .. }));
        }
        assert!(DigitalOption::new(expiry(), f64::INFINITY, OptionType::DigitalCall).is_err());
    }

    #[test]
    fn test_new_keeps_non_digital_tag() {
        let option = DigitalOption::new(expiry(), 100.0, OptionType::EuropeanCall).unwrap();
        assert_eq!(option.option_type(), OptionType::EuropeanCall);
    }

    #[test]
    fn test_market_state_validate() {
        let base = MarketState::new(expiry(), 100.0, 0.01, 0.2, 0.05);
        assert!(base.validate().is_ok());
        // zero volatility is floored by the pricer, not rejected here
        assert!(base.with_volatility(0.0).validate().is_ok());

        for bad in [
            base.with_stock_price(0.0),
            base.with_stock_price(-5.0),
            base.with_stock_price(f64::INFINITY),
            base.with_volatility(f64::NAN),
            base.with_interest_rate(f64::NEG_INFINITY),
            MarketState { dividend_yield: f64::NAN, ..base },
        ] {
            assert!(matches!(
                bad.validate(),
                Err(PricingError::InvalidParameters { .. })
            ));
        }
    }

    #[test]
    fn test_market_state_builders() {
        let base = MarketState::new(expiry(), 100.0, 0.01, 0.2, 0.05);
        let bumped = base.with_stock_price(101.0).with_volatility(0.25);
        assert_eq!(bumped.stock_price, 101.0);
        assert_eq!(bumped.volatility, 0.25);
        assert_eq!(bumped.dividend_yield, base.dividend_yield);
        assert_eq!(bumped.interest_rate, base.interest_rate);
        assert_eq!(bumped.value_date, base.value_date);
    }
}
