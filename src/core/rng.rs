// Copyright @yucwang 2026

use super::params::{LcgParams, DEFAULT_SEED, PLE63};
use super::skip;
use crate::math::constants::{Float, FLOAT_MANTISSA_BITS};

/// Linear congruential generator with plain value semantics: the state
/// is the whole generator, and cloning branches an independent stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LcgRng {
    params: LcgParams,
    state: u64,
}

impl LcgRng {
    /// 63-bit L'Ecuyer generator seeded with the given value.
    pub fn new(seed: u64) -> Self {
        Self::with_params(PLE63, seed)
    }

    pub fn with_params(params: LcgParams, seed: u64) -> Self {
        Self {
            params,
            state: seed & params.mask(),
        }
    }

    pub fn params(&self) -> &LcgParams {
        &self.params
    }

    /// Current state. This one value is also the complete serializable
    /// form of the generator.
    pub fn state(&self) -> u64 {
        self.state
    }

    pub fn reseed(&mut self, seed: u64) {
        self.state = seed & self.params.mask();
    }

    /// Advance one step and return the new state.
    pub fn step(&mut self) -> u64 {
        self.state = step_state(&self.params, self.state);
        self.state
    }

    /// Advance one step and fold the new state into [0, 1).
    pub fn next_f64(&mut self) -> Float {
        let state = self.step();
        state_to_unit(&self.params, state)
    }

    /// Jump by `ns` steps, forward or backward, in O(log |ns|) time.
    pub fn skip(&mut self, ns: i64) {
        self.state = skip::skip(&self.params, ns, self.state);
    }
}

impl Default for LcgRng {
    fn default() -> Self {
        Self::new(DEFAULT_SEED)
    }
}

/// One application of the recurrence. Wrapping u64 arithmetic followed
/// by the mask is exact for bits <= 63 since 2^bits divides 2^64.
pub fn step_state(params: &LcgParams, state: u64) -> u64 {
    params
        .mult
        .wrapping_mul(state)
        .wrapping_add(params.add)
        & params.mask()
}

/// Scale a state into [0, 1). States wider than an f64 mantissa drop
/// their low bits first; rounding `state * 2^-bits` directly lands on
/// exactly 1.0 for states within half an ulp of the modulus.
pub fn state_to_unit(params: &LcgParams, state: u64) -> Float {
    if params.bits > FLOAT_MANTISSA_BITS {
        let shift = params.bits - FLOAT_MANTISSA_BITS;
        (state >> shift) as Float / (1u64 << FLOAT_MANTISSA_BITS) as Float
    } else {
        state as Float * params.norm()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_seed_first_step() {
        let mut rng = LcgRng::default();
        assert_eq!(rng.state(), 1);
        // (2806196910506780709 * 1 + 1) mod 2^63
        assert_eq!(rng.step(), 2806196910506780710);
    }

    #[test]
    fn test_seed_is_masked_into_range() {
        let rng = LcgRng::new(u64::MAX);
        assert_eq!(rng.state(), PLE63.mask());

        let mut rng = LcgRng::new(7);
        rng.reseed(u64::MAX);
        assert_eq!(rng.state(), PLE63.mask());
    }

    #[test]
    fn test_zero_seed_is_accepted() {
        let mut rng = LcgRng::new(0);
        assert_eq!(rng.state(), 0);
        assert_eq!(rng.step(), PLE63.add);
    }

    #[test]
    fn test_clone_branches_stream() {
        let mut a = LcgRng::new(12345);
        let mut b = a;
        assert_eq!(a.step(), b.step());
        a.step();
        assert_ne!(a.state(), b.state());
    }

    #[test]
    fn test_skip_agrees_with_stepping() {
        let mut walked = LcgRng::new(99);
        let mut jumped = walked;
        for _ in 0..1000 {
            walked.step();
        }
        jumped.skip(1000);
        assert_eq!(walked.state(), jumped.state());

        jumped.skip(-1000);
        assert_eq!(jumped.state(), 99);
    }

    #[test]
    fn test_next_f64_in_unit_interval() {
        let mut rng = LcgRng::default();
        for _ in 0..10000 {
            let r = rng.next_f64();
            assert!(r >= 0.0 && r < 1.0, "out of range: {}", r);
        }
    }

    #[test]
    fn test_state_to_unit_near_modulus() {
        // The largest states must not round up to 1.0.
        for offset in 1..=512 {
            let r = state_to_unit(&PLE63, PLE63.modulus() - offset);
            assert!(r < 1.0, "state modulus - {} mapped to {}", offset, r);
        }
        assert_eq!(state_to_unit(&PLE63, 0), 0.0);
    }

    #[test]
    fn test_state_to_unit_narrow_params_exact() {
        let narrow = LcgParams::new(16, 5, 1);
        assert_eq!(state_to_unit(&narrow, 0), 0.0);
        assert_eq!(state_to_unit(&narrow, 1), 1.0 / 65536.0);
        assert_eq!(state_to_unit(&narrow, 65535), 65535.0 / 65536.0);
    }
}
