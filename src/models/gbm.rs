// src/models/gbm.rs
//! Risk-neutral geometric Brownian motion
//!
//! ```text
//! dS_t = (r - q) S_t dt + σ S_t dW_t
//! S_T  = S_0 * exp((r - q - σ²/2)T + σ√T * Z)
//! ```

use ndarray::Array1;

pub struct Gbm {
    pub s0: f64,
    pub mu: f64,
    pub sigma: f64,
}

impl Gbm {
    /// GBM with drift `interest_rate - dividend_yield`
    pub fn risk_neutral(s0: f64, interest_rate: f64, dividend_yield: f64, sigma: f64) -> Self {
        Gbm {
            s0,
            mu: interest_rate - dividend_yield,
            sigma,
        }
    }

    /// Deterministic part of the terminal price, `S_0 * exp((μ - σ²/2)t)`
    pub fn drift_factor(&self, t: f64) -> f64 {
        let v2 = self.sigma * self.sigma;
        self.s0 * ((self.mu - v2 / 2.0) * t).exp()
    }

    /// Terminal prices for each draw and for its mirror image.
    ///
    /// Returns `(drift * m, drift / m)` with `m = exp(g √t σ)`, so the second
    /// array is the path driven by `-g`.
    pub fn antithetic_terminal(&self, t: f64, draws: &Array1<f64>) -> (Array1<f64>, Array1<f64>) {
        let drift = self.drift_factor(t);
        let shock = t.sqrt() * self.sigma;
        let m = draws.mapv(|g| (g * shock).exp());
        let primary = m.mapv(|x| drift * x);
        let mirror = m.mapv(|x| drift / x);
        (primary, mirror)
    }
}
