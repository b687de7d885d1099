//! Transfer fee calculation

pub mod burn;

pub use burn::*;
