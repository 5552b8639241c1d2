//! Value types shared across the vitalwatch crates.

pub mod types;
