// Copyright @yucwang 2026

use super::params::LcgParams;

/// One application of `x -> (scale * x + offset) mod 2^bits`. Built and
/// consumed inside a single jump computation, never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Affine {
    pub scale: u64,
    pub offset: u64,
}

impl Affine {
    pub fn identity() -> Self {
        Self { scale: 1, offset: 0 }
    }

    pub fn single_step(params: &LcgParams) -> Self {
        Self {
            scale: params.mult,
            offset: params.add,
        }
    }

    /// Composition: apply `self`, then `next`. Wrapping u64 products
    /// reduced by the mask are exact because 2^bits divides 2^64.
    pub fn then(&self, next: &Affine, mask: u64) -> Affine {
        Affine {
            scale: self.scale.wrapping_mul(next.scale) & mask,
            offset: self
                .offset
                .wrapping_mul(next.scale)
                .wrapping_add(next.offset)
                & mask,
        }
    }

    /// Closed form for `self.then(&self)`: the doubled additive term
    /// collapses to `offset * (scale + 1)`.
    pub fn square(&self, mask: u64) -> Affine {
        Affine {
            scale: self.scale.wrapping_mul(self.scale) & mask,
            offset: self.offset.wrapping_mul(self.scale.wrapping_add(1)) & mask,
        }
    }

    pub fn apply(&self, state: u64, mask: u64) -> u64 {
        self.scale.wrapping_mul(state).wrapping_add(self.offset) & mask
    }
}

/// Fold a signed step count into the equivalent non-negative forward
/// count. The recurrence is a bijection with period 2^bits, so stepping
/// back by k equals stepping forward by modulus - k. Reinterpreting the
/// count as u64 reduces it mod 2^64, and 2^bits divides 2^64, so the
/// mask alone yields the residue for any width in one operation.
pub fn normalize_steps(params: &LcgParams, ns: i64) -> u64 {
    ns as u64 & params.mask()
}

/// Compose the affine transform equivalent to `nskip` forward steps.
/// Binary exponentiation over affine composition, after F. Brown,
/// "Random Number Generation with Arbitrary Stride", Trans. Am. Nucl.
/// Soc. (1994). Runs in at most `bits` iterations.
pub fn jump_transform(params: &LcgParams, mut nskip: u64) -> Affine {
    let mask = params.mask();
    let mut base = Affine::single_step(params);
    let mut result = Affine::identity();

    while nskip > 0 {
        if nskip & 1 == 1 {
            result = result.then(&base, mask);
        }
        base = base.square(mask);
        nskip >>= 1;
    }

    result
}

/// Jump a state by `ns` steps, forward or backward, without iterating.
pub fn skip(params: &LcgParams, ns: i64, state: u64) -> u64 {
    let transform = jump_transform(params, normalize_steps(params, ns));
    transform.apply(state, params.mask())
}
