// src/math_utils.rs
use statrs::function::erf;
use std::f64::consts::SQRT_2;

/// Floor applied to volatility before it is used as a divisor
pub const SMALL: f64 = 1e-12;

/// Standard normal cumulative distribution function
pub fn norm_cdf(x: f64) -> f64 {
    0.5 * (1.0 + erf::erf(x / SQRT_2))
}

/// Unit step used for digital payoffs: 1 for `x > 0`, 0 otherwise.
///
/// The value at exactly zero is 0, so a digital finishing at the strike pays
/// nothing in either direction.
#[inline]
pub fn heaviside(x: f64) -> f64 {
    if x > 0.0 {
        1.0
    } else {
        0.0
    }
}

pub struct Timer {
    start_time: std::time::Instant,
}

impl Timer {
    pub fn new() -> Timer {
        Timer {
            start_time: std::time::Instant::now(),
        }
    }

    pub fn start(&mut self) {
        self.start_time = std::time::Instant::now();
    }

    pub fn elapsed_ms(&self) -> f64 {
        self.start_time.elapsed().as_secs_f64() * 1000.0
    }
}

impl Default for Timer {
    fn default() -> Self {
        Self::new()
    }
}
