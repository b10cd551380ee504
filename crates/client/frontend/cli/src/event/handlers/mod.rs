//! Event loop handlers split by concern.
//!
//! Each handler extends [`EventLoop`](super::EventLoop) with an `impl` block.

mod input;
mod rendering;
