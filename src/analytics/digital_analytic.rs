// src/analytics/digital_analytic.rs
//! Closed-form Black-Scholes value of a cash-or-nothing digital paying 1
//!
//! # Formula
//! ```text
//! d₂ = [ln(S/K) + (r - q - σ²/2)t] / (σ√t)
//! call = e^(-rt) * Φ(d₂)
//! put  = e^(-rt) * Φ(-d₂)
//! ```
//!
//! On the expiry date the value is the terminal payoff itself. Since the
//! call and put together pay 1 in every state except `S_T = K`, the pair
//! prices a zero-coupon bond: `call + put = e^(-rt)`.

use crate::dates;
use crate::error::{validation::*, PricingError, PricingResult};
use crate::math_utils::{norm_cdf, SMALL};
use crate::mc::payoffs::Payoff;
use crate::options::digital::{DigitalOption, MarketState};
use crate::options::option_type::OptionType;
use tracing::{debug, warn};

/// Black-Scholes value of `option` under `market`.
///
/// # Errors
///
/// - `TemporalError` if the value date is after expiry
/// - `InvalidParameters` for a non-positive spot or non-finite market inputs
/// - `UnsupportedOptionType` for any tag other than digital call/put
pub fn digital_value(option: &DigitalOption, market: &MarketState) -> PricingResult<f64> {
    let expiry_date = option.expiry_date();
    validate_not_expired(market.value_date, expiry_date)?;
    market.validate()?;

    let k = option.strike_price();

    if market.value_date == expiry_date {
        let payoff = Payoff::for_option_type(option.option_type(), k)?;
        let v = payoff.calculate(market.stock_price);
        debug!(
            option_type = %option.option_type(),
            spot = market.stock_price,
            strike = k,
            value = v,
            "digital valued at expiry"
        );
        return Ok(v);
    }

    let t = dates::year_fraction(market.value_date, expiry_date);
    let ln_s0_k = (market.stock_price / k).ln();
    let sqrt_t = t.sqrt();

    let mut volatility = market.volatility;
    if volatility.abs() < SMALL {
        warn!(volatility, floor = SMALL, "volatility below floor, clamping");
        volatility = SMALL;
    }

    let den = volatility * sqrt_t;
    let v2 = volatility * volatility;
    let mu = market.interest_rate - market.dividend_yield;
    let d2 = (ln_s0_k + (mu - v2 / 2.0) * t) / den;
    let discount = (-market.interest_rate * t).exp();

    let v = match option.option_type() {
        OptionType::DigitalCall => discount * norm_cdf(d2),
        OptionType::DigitalPut => discount * norm_cdf(-d2),
        other => return Err(PricingError::UnsupportedOptionType { option_type: other }),
    };

    debug!(
        option_type = %option.option_type(),
        t,
        d2,
        value = v,
        "digital valued analytically"
    );
    Ok(v)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};
    use chrono::{Days, NaiveDate};

    fn value_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, 1).unwrap()
    }

    fn one_year_option(option_type: OptionType) -> DigitalOption {
        DigitalOption::new(value_date() + Days::new(365), 100.0, option_type).unwrap()
    }

    fn atm_market() -> MarketState {
        MarketState::new(value_date(), 100.0, 0.0, 0.2, 0.05)
    }

    #[test]
    fn test_atm_call_regression() {
        let v = digital_value(&one_year_option(OptionType::DigitalCall), &atm_market()).unwrap();
        assert_abs_diff_eq!(v, 0.532_324_815_453_763_4, epsilon = 1e-12);
    }

    #[test]
    fn test_atm_put_regression() {
        let v = digital_value(&one_year_option(OptionType::DigitalPut), &atm_market()).unwrap();
        assert_abs_diff_eq!(v, 0.418_904_609_046_950_65, epsilon = 1e-12);
    }

    #[test]
    fn test_dividend_yield_lowers_call() {
        let option = one_year_option(OptionType::DigitalCall);
        let no_div = digital_value(&option, &atm_market()).unwrap();
        let with_div = MarketState {
            dividend_yield: 0.03,
            ..atm_market()
        };
        let with_div = digital_value(&option, &with_div).unwrap();
        assert!(with_div < no_div);
    }

    #[test]
    fn test_value_after_expiry_fails() {
        let option = one_year_option(OptionType::DigitalCall);
        let market = atm_market().with_value_date(value_date() + Days::new(366));
        assert!(matches!(
            digital_value(&option, &market),
            Err(PricingError::TemporalError { .. })
        ));
    }

    #[test]
    fn test_zero_volatility_uses_floor() {
        let option = one_year_option(OptionType::DigitalPut);
        let market = atm_market().with_stock_price(103.0);
        let zero = digital_value(&option, &market.with_volatility(0.0)).unwrap();
        let floored = digital_value(&option, &market.with_volatility(SMALL)).unwrap();
        assert!(zero.is_finite());
        assert_eq!(zero, floored);
    }

    #[test]
    fn test_tiny_volatility_is_deterministic_forward() {
        // forward 100 * e^0.05 sits above the strike, so the call pays for sure
        let option = one_year_option(OptionType::DigitalCall);
        let call = digital_value(&option, &atm_market().with_volatility(0.0)).unwrap();
        assert_relative_eq!(call, (-0.05_f64).exp(), max_relative = 1e-14);
    }

    #[test]
    fn test_negative_spot_rejected() {
        let option = one_year_option(OptionType::DigitalCall);
        let result = digital_value(&option, &atm_market().with_stock_price(-5.0));
        assert!(matches!(result, Err(PricingError::InvalidParameters { .. })));
    }

    #[test]
    fn test_unsupported_type_before_expiry() {
        let option = one_year_option(OptionType::EuropeanPut);
        assert_eq!(
            digital_value(&option, &atm_market()),
            Err(PricingError::UnsupportedOptionType {
                option_type: OptionType::EuropeanPut
            })
        );
    }

    #[test]
    fn test_unsupported_type_at_expiry() {
        let option = one_year_option(OptionType::AmericanCall);
        let market = atm_market().with_value_date(option.expiry_date());
        assert!(matches!(
            digital_value(&option, &market),
            Err(PricingError::UnsupportedOptionType { .. })
        ));
    }
}
