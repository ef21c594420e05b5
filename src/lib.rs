// Copyright @yucwang 2026

pub mod core;
pub mod math;
