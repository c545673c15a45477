// src/analytics/greeks.rs
//! Bump-and-revalue sensitivities of the closed-form digital value
//!
//! ```text
//! Δ = [V(S + h) - V(S)] / h
//! Γ = [V(S + h) - 2V(S) + V(S - h)] / h²
//! ν = [V(σ + h) - V(σ)] / h
//! ρ = [V(r + h) - V(r)] / h
//! Θ = [V(date + 1d) - V(date)] / (1 / DAYS_IN_YEAR)
//! ```
//!
//! Theta is per year. On the expiry date there is no later date to roll to
//! and theta is reported as zero.

use crate::analytics::digital_analytic::digital_value;
use crate::dates::year_fraction;
use crate::error::{validation::*, PricingError, PricingResult};
use crate::options::digital::{DigitalOption, MarketState};

/// Bump sizes for finite-difference Greeks
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GreeksConfig {
    pub spot_bump: f64,
    pub vol_bump: f64,
    pub rate_bump: f64,
}

impl GreeksConfig {
    pub fn validate(&self) -> PricingResult<()> {
        validate_positive("spot_bump", self.spot_bump)?;
        validate_positive("vol_bump", self.vol_bump)?;
        validate_positive("rate_bump", self.rate_bump)?;
        Ok(())
    }
}

impl Default for GreeksConfig {
    fn default() -> Self {
        GreeksConfig {
            spot_bump: 1e-4,
            vol_bump: 1e-4,
            rate_bump: 1e-4,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DigitalGreeks {
    pub value: f64,
    pub delta: f64,
    pub gamma: f64,
    pub vega: f64,
    pub theta: f64,
    pub rho: f64,
}

pub fn delta(option: &DigitalOption, market: &MarketState, bump: f64) -> PricingResult<f64> {
    let v = digital_value(option, market)?;
    let v_up = digital_value(option, &market.with_stock_price(market.stock_price + bump))?;
    Ok((v_up - v) / bump)
}

pub fn gamma(option: &DigitalOption, market: &MarketState, bump: f64) -> PricingResult<f64> {
    let v = digital_value(option, market)?;
    let v_up = digital_value(option, &market.with_stock_price(market.stock_price + bump))?;
    let v_down = digital_value(option, &market.with_stock_price(market.stock_price - bump))?;
    Ok((v_up - 2.0 * v + v_down) / (bump * bump))
}

pub fn vega(option: &DigitalOption, market: &MarketState, bump: f64) -> PricingResult<f64> {
    let v = digital_value(option, market)?;
    let v_up = digital_value(option, &market.with_volatility(market.volatility + bump))?;
    Ok((v_up - v) / bump)
}

pub fn rho(option: &DigitalOption, market: &MarketState, bump: f64) -> PricingResult<f64> {
    let v = digital_value(option, market)?;
    let v_up = digital_value(option, &market.with_interest_rate(market.interest_rate + bump))?;
    Ok((v_up - v) / bump)
}

pub fn theta(option: &DigitalOption, market: &MarketState) -> PricingResult<f64> {
    let v = digital_value(option, market)?;
    if market.value_date == option.expiry_date() {
        return Ok(0.0);
    }

    let next_date = market
        .value_date
        .succ_opt()
        .ok_or_else(|| PricingError::InvalidParameters {
            parameter: "value_date".to_string(),
            value: f64::NAN,
            constraint: "has no following calendar day".to_string(),
        })?;
    let v_next = digital_value(option, &market.with_value_date(next_date))?;
    Ok((v_next - v) / year_fraction(market.value_date, next_date))
}

/// All sensitivities in one pass, sharing the base valuation checks.
pub fn digital_greeks(
    option: &DigitalOption,
    market: &MarketState,
    cfg: &GreeksConfig,
) -> PricingResult<DigitalGreeks> {
    cfg.validate()?;
    Ok(DigitalGreeks {
        value: digital_value(option, market)?,
        delta: delta(option, market, cfg.spot_bump)?,
        gamma: gamma(option, market, cfg.spot_bump)?,
        vega: vega(option, market, cfg.vol_bump)?,
        theta: theta(option, market)?,
        rho: rho(option, market, cfg.rate_bump)?,
    })
}
