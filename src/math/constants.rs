/* Copyright 2026 @Yuchen Wong */

pub type Float = f64;
pub type Int = i64;
pub type UInt = u64;

// Number of state bits an f64 mantissa can hold exactly.
pub const FLOAT_MANTISSA_BITS: u32 = 53;
