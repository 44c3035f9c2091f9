//! Jianghu Runtime - Frame loop infrastructure
//!
//! Provides the building blocks a host application drives each frame:
//! - `FrameClock`: real-time or stepped frame timing
//! - `RuntimeSystem`: lifecycle trait for systems ticked by the frame loop
//! - `AnimationHost` / `TimelineHost`: cancellable per-particle animations

mod clock;
mod host;
mod system;

pub use clock::FrameClock;
pub use host::{AnimationHandle, AnimationHost, FrameSample, TimelineHost};
pub use system::RuntimeSystem;
