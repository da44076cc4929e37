use crate::{Result, Row};
use rand::{rngs::OsRng, Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Amount by which the self-biasing density is pushed back toward one half.
pub const BIAS_STEP: f64 = 0.01;

/// `seed` - random seed (if `None`, then the OS entropy source is used)
pub(crate) fn new_rng(seed: Option<u64>) -> Result<ChaCha8Rng> {
    Ok(if let Some(x) = seed {
        ChaCha8Rng::seed_from_u64(x)
    } else {
        ChaCha8Rng::from_rng(OsRng)?
    })
}

pub(crate) fn bernoulli_row(rng: &mut ChaCha8Rng, size: usize, p: f64) -> Row {
    Row::from_cells((0..size).map(|_| rng.gen_bool(p)).collect())
}

/// Produces rows whose cells are independent coin flips with a probability
/// that follows the previous row's density, nudged toward 0.5 so the density
/// neither dies out nor saturates.
pub(crate) struct BiasedSampler {
    rng: ChaCha8Rng,
    bias: f64,
}

impl BiasedSampler {
    pub(crate) fn new(rng: ChaCha8Rng) -> Self {
        Self { rng, bias: 0.5 }
    }

    pub(crate) fn bias(&self) -> f64 {
        self.bias
    }

    pub(crate) fn first_row(&mut self, size: usize) -> Row {
        bernoulli_row(&mut self.rng, size, self.bias)
    }

    pub(crate) fn next_row(&mut self, current: &Row) -> Row {
        let density = current.density();
        let p = if density > 0.5 {
            density - BIAS_STEP
        } else {
            density + BIAS_STEP
        };
        self.bias = p.clamp(0., 1.);
        bernoulli_row(&mut self.rng, current.len(), self.bias)
    }
}
