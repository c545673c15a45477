// src/analytics/mod.rs
pub mod digital_analytic;
pub mod greeks;
