//! Traits describing external inputs to the rules.
//!
//! The engine never reaches for a random source on its own; callers hand it
//! an [`RngOracle`] so production code can use entropy while tests script
//! every roll.
mod rng;

pub use rng::{RngOracle, ScriptedRng};
