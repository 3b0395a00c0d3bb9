//! Concrete oracle implementations used by live sessions.
mod rng;

pub use rng::EntropyRng;
