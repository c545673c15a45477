//! # fast-digital: Digital Option Valuation
//!
//! Values cash-or-nothing digital (binary) options paying 1 at expiry, two ways:
//!
//! - **Analytic**: closed-form Black-Scholes price `e^(-rt) Φ(±d₂)`, collapsing
//!   to the step payoff on the expiry date
//! - **Monte Carlo**: exact GBM terminal prices with antithetic variates,
//!   reproducible from an explicit seed
//!
//! ## Quick Start
//!
//! ```rust
//! use chrono::NaiveDate;
//! use fast_digital::mc::mc_engine::McConfig;
//! use fast_digital::options::{DigitalOption, MarketState, OptionType};
//!
//! let value_date = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
//! let expiry = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap();
//!
//! let option = DigitalOption::new(expiry, 100.0, OptionType::DigitalCall).expect("Valid strike");
//! let market = MarketState::new(value_date, 100.0, 0.0, 0.2, 0.05);
//!
//! let analytic = option.value(&market).expect("Valid market");
//! let mc = option.value_mc(&market, &McConfig::default()).expect("Valid configuration");
//! assert!((analytic - mc).abs() < 0.02);
//! ```
//!
//! ## Conventions
//!
//! - Time to expiry is calendar days / 365
//! - The step payoff is 0 when spot equals strike, for calls and puts alike
//! - Volatility below `1e-12` in magnitude is floored to `1e-12` in the
//!   analytic formula

// Module declarations
pub mod analytics;
pub mod dates;
pub mod error;
pub mod math_utils;
pub mod mc;
pub mod models;
pub mod options;
pub mod output;
pub mod rng;

// Re-export commonly used types for convenience
pub use error::{PricingError, PricingResult};
pub use options::{DigitalOption, MarketState, OptionType};
