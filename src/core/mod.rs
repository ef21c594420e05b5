// Copyright @yucwang 2026

pub mod adapter;
pub mod params;
pub mod rng;
pub mod skip;
