// src/numeric/mod.rs

pub mod approx;
pub mod average;
pub mod binary;
pub mod extrema;
pub mod percent;
