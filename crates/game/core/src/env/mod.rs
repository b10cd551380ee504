//! External inputs the engine depends on but does not own.
//!
//! The only one a 2048 board needs is randomness for spawning, exposed as the
//! [`RngOracle`] trait so callers decide where entropy comes from.
mod rng;

pub use rng::{PcgRng, RngOracle};
