//! Jianghu Core - Foundational types for the Jianghu particle engine
//!
//! This crate provides the types that all other Jianghu crates depend on:
//! - `ParticleKey` - Stable particle identity across remounts
//! - `ThemeColor`, `Rgba` - Pass-through theme color and its parsed form
//! - Error types and Result alias

mod color;
mod error;
mod id;

pub use color::{Rgba, ThemeColor};
pub use error::{JianghuError, Result};
pub use id::ParticleKey;
