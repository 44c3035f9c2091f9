//! Jianghu Particles - Deterministic procedural particle fields
//!
//! Turns an effect tag, a requested count and a theme color into a field of
//! particles whose motion is fully reproducible:
//! - Index-seeded randomness and per-particle parameter derivation
//! - One pure profile resolver per effect type, with a safe fallback
//! - Per-type particle budgets, overridable from `jianghu.toml`
//! - A `VisualEngine` that mounts, diffs and cancels animations on a host

pub mod budget;
pub mod effect;
pub mod engine;
pub mod field;
pub mod instance;
pub mod params;
pub mod profiles;
pub mod rand;
pub mod settings;
pub mod shapes;

pub use budget::{clamp_count, BudgetTable};
pub use effect::{Category, EffectType};
pub use engine::VisualEngine;
pub use field::{build_field, render_particle_field, EngineConfig, Particle, ParticleField};
pub use instance::{ParticleInstance, Viewport};
pub use params::DerivedParameters;
pub use profiles::{resolve_particle, ResolvedParticle};
pub use rand::{seeded_random, SeedSamples};
pub use settings::EngineSettings;
pub use shapes::{ShapeFamily, ShapeSpec};
