//! Runtime system trait

use jianghu_core::Result;

/// A system that can be ticked by the frame loop
///
/// `initialize` is the host's "safe to show randomized content" signal;
/// nothing animated should exist before it. `shutdown` must release every
/// running animation.
pub trait RuntimeSystem {
    /// Called once when the host is ready to render
    fn initialize(&mut self) -> Result<()>;

    /// Called once per frame with the elapsed time in seconds
    fn update(&mut self, dt: f64) -> Result<()>;

    /// Called when the system is being torn down
    fn shutdown(&mut self) -> Result<()>;

    /// Human-readable name for this system
    fn name(&self) -> &str;
}
