// src/rng.rs
//! Random Number Generation for Monte Carlo Simulations
//!
//! # Design
//!
//! Every Monte Carlo valuation builds its own generator from an explicit seed:
//! 1. **Reproducibility**: same seed → bit-identical draws
//! 2. **Isolation**: no process-wide generator, so concurrent valuations
//!    cannot disturb each other's streams
//!
//! Draws are returned as a batch (`ndarray::Array1`) so the pricer can apply
//! the antithetic transform and payoff reductions over whole arrays.

use ndarray::Array1;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, StandardNormal};

/// Fresh generator seeded once from `seed`
pub fn seed_rng_from_u64(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

pub fn get_normal_draw<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    StandardNormal.sample(rng)
}

/// `n` independent standard normal variates drawn in order from `rng`
pub fn normal_draws<R: Rng + ?Sized>(rng: &mut R, n: usize) -> Array1<f64> {
    Array1::from_shape_simple_fn(n, || get_normal_draw(&mut *rng))
}
