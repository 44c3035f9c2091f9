//! Stable particle identifiers

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identity of one particle within a field: `"{effect_tag}-{index}"`.
///
/// The key is derived, never allocated. Two mounts of the same effect tag
/// produce the same keys for the same indices, which is what lets a host
/// keep an already-running animation alive when the field is rebuilt.
#[derive(Clone, Hash, Eq, PartialEq, Ord, PartialOrd, Serialize, Deserialize)]
pub struct ParticleKey {
    effect_tag: String,
    index: usize,
}

impl ParticleKey {
    pub fn new(effect_tag: impl Into<String>, index: usize) -> Self {
        Self {
            effect_tag: effect_tag.into(),
            index,
        }
    }

    pub fn effect_tag(&self) -> &str {
        &self.effect_tag
    }

    pub fn index(&self) -> usize {
        self.index
    }

    /// Prefix used for gradient/definition ids inside a particle's shape,
    /// unique per particle so shapes never share paint servers.
    pub fn gradient_id(&self) -> String {
        format!("p-{}-{}", self.effect_tag, self.index)
    }
}

impl fmt::Debug for ParticleKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ParticleKey({self})")
    }
}

impl fmt::Display for ParticleKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.effect_tag, self.index)
    }
}
