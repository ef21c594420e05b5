// Copyright @yucwang 2026

use crate::math::constants::Float;

/// Fixed configuration of a linear congruential recurrence
/// `next = (mult * state + add) mod 2^bits`.
///
/// `bits` must not exceed 63 so that the modulus fits a u64 and the
/// reduction stays a bitwise mask.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LcgParams {
    pub bits: u32,
    pub mult: u64,
    pub add: u64,
}

/// 63-bit generator with the multiplier from P. L'Ecuyer, "Efficient and
/// Portable Combined Random Number Generators", Comm. ACM 31(6), 1988.
pub const PLE63: LcgParams = LcgParams {
    bits: 63,
    mult: 2806196910506780709,
    add: 1,
};

pub const DEFAULT_SEED: u64 = 1;

impl LcgParams {
    pub const fn new(bits: u32, mult: u64, add: u64) -> Self {
        debug_assert!(bits <= 63, "modulus must fit a u64 state");
        Self { bits, mult, add }
    }

    pub const fn modulus(&self) -> u64 {
        1u64 << self.bits
    }

    pub const fn mask(&self) -> u64 {
        self.modulus() - 1
    }

    pub fn norm(&self) -> Float {
        1.0 / self.modulus() as Float
    }

    /// Full period requires an odd additive constant and a multiplier
    /// congruent to 1 mod 4 (Hull-Dobell for a power-of-two modulus).
    pub fn has_full_period(&self) -> bool {
        self.add & 1 == 1 && self.mult & 3 == 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ple63_constants() {
        assert_eq!(PLE63.modulus(), 1u64 << 63);
        assert_eq!(PLE63.mask(), (1u64 << 63) - 1);
        assert!(PLE63.has_full_period());
    }

    #[test]
    fn test_norm_matches_modulus() {
        let params = LcgParams::new(16, 5, 1);
        assert_eq!(params.norm(), 1.0 / 65536.0);
        assert!((PLE63.norm() - 1.0842021724855044e-19).abs() < 1e-34);
    }

    #[test]
    #[should_panic(expected = "modulus must fit a u64 state")]
    fn test_rejects_width_past_state_type() {
        LcgParams::new(64, 5, 1);
    }

    #[test]
    fn test_full_period_criterion() {
        assert!(LcgParams::new(16, 5, 1).has_full_period());
        assert!(!LcgParams::new(16, 6, 1).has_full_period());
        assert!(!LcgParams::new(16, 5, 2).has_full_period());
    }
}
