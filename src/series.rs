use std::{f64::consts::PI, ops::Range};

use rand::prelude::*;
use rand_pcg::Pcg64;

pub const DAYS: usize = 31;
pub const SEED: u64 = 42;
pub const BASELINE: f64 = 10.0;
pub const WEEKLY_AMPLITUDE: f64 = 3.0;
pub const NOISE_STD_DEV: f64 = 3.0;
pub const TICK_STEP: u32 = 5;

/// A made up month of daily mean temperatures, stable for a given seed.
#[derive(Debug, Clone, PartialEq)]
pub struct TemperatureSeries {
    pub baseline: f64,
    // values[0] is day 1
    pub values: Vec<f64>,
}

impl TemperatureSeries {
    pub fn synthetic() -> Self {
        Self::generate(SEED)
    }

    pub fn generate(seed: u64) -> Self {
        let mut rng = Pcg64::seed_from_u64(seed);
        let values = (1..=DAYS)
            .map(|day| {
                let weekly = WEEKLY_AMPLITUDE * (2.0 * PI * day as f64 / 7.0).sin();
                BASELINE + weekly + NOISE_STD_DEV * standard_normal(&mut rng)
            })
            .collect();
        tracing::debug!(seed, baseline = BASELINE, days = DAYS, "generated synthetic temperatures");

        Self {
            baseline: BASELINE,
            values,
        }
    }

    /// `(day, value)` pairs, days starting at 1.
    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.values
            .iter()
            .enumerate()
            .map(|(i, value)| ((i + 1) as f64, *value))
    }

    pub fn first_day(&self) -> f64 {
        1.0
    }

    pub fn last_day(&self) -> f64 {
        self.values.len() as f64
    }

    /// Days that get a tick on the x axis: every multiple of `TICK_STEP`.
    pub fn day_ticks(&self) -> Vec<f64> {
        (TICK_STEP..=self.values.len() as u32)
            .step_by(TICK_STEP as usize)
            .map(f64::from)
            .collect()
    }

    /// Covers every value and the baseline, with some room around them.
    pub fn value_range(&self, padding: f64) -> Range<f64> {
        let (low, high) = self
            .values
            .iter()
            .fold((self.baseline, self.baseline), |(low, high), v| {
                (low.min(*v), high.max(*v))
            });
        low - padding..high + padding
    }
}

// Box-Muller
fn standard_normal(rng: &mut impl Rng) -> f64 {
    let u1: f64 = rng.gen();
    let u2: f64 = rng.gen();
    let u1 = u1.max(f64::EPSILON);

    (-2.0 * u1.ln()).sqrt() * (2.0 * PI * u2).cos()
}
