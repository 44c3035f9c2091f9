//! The visual engine façade
//!
//! `VisualEngine` owns the mounted particle field and the handles of its
//! running animations. It renders nothing until the host is ready and the
//! effect is visible, and it cancels every animation it started when it is
//! hidden, shut down or dropped.

use crate::budget::BudgetTable;
use crate::field::{build_field, EngineConfig, Particle};
use crate::instance::{ParticleInstance, Viewport};
use crate::settings::EngineSettings;
use jianghu_core::{ParticleKey, Result};
use jianghu_runtime::{AnimationHandle, AnimationHost, RuntimeSystem, TimelineHost};
use std::collections::BTreeMap;

struct Mounted {
    particle: Particle,
    handle: AnimationHandle,
}

pub struct VisualEngine<H: AnimationHost = TimelineHost> {
    host: H,
    budget: BudgetTable,
    config: EngineConfig,
    /// Host signalled it is safe to show randomized content
    ready: bool,
    visible: bool,
    mounted: BTreeMap<ParticleKey, Mounted>,
}

impl<H: AnimationHost> VisualEngine<H> {
    pub fn new(host: H, config: EngineConfig) -> Self {
        Self {
            host,
            budget: BudgetTable::default(),
            config,
            ready: false,
            visible: true,
            mounted: BTreeMap::new(),
        }
    }

    /// Engine for `effect_tag` using the settings' default count, color and budget
    pub fn with_settings(host: H, settings: &EngineSettings, effect_tag: &str) -> Self {
        let config = EngineConfig::new(
            effect_tag,
            settings.default_count,
            settings.default_color.clone(),
        );
        Self::new(host, config).with_budget(settings.budget_table())
    }

    pub fn with_budget(mut self, budget: BudgetTable) -> Self {
        self.budget = budget;
        self
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Replace the configuration and re-mount what changed
    pub fn set_config(&mut self, config: EngineConfig) {
        if config == self.config {
            return;
        }
        self.config = config;
        self.reconcile();
    }

    pub fn set_visible(&mut self, visible: bool) {
        if visible == self.visible {
            return;
        }
        self.visible = visible;
        self.reconcile();
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Ready and visible: particles are (or will be) mounted
    pub fn is_active(&self) -> bool {
        self.ready && self.visible
    }

    pub fn mounted_count(&self) -> usize {
        self.mounted.len()
    }

    /// Mounted particles in key order
    pub fn particles(&self) -> impl Iterator<Item = &Particle> {
        self.mounted.values().map(|m| &m.particle)
    }

    pub fn handle(&self, key: &ParticleKey) -> Option<AnimationHandle> {
        self.mounted.get(key).map(|m| m.handle)
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    /// Bring mounted animations in line with the current state.
    ///
    /// Keys whose profile is unchanged keep their running animation; keys
    /// that changed are restarted and keys that disappeared are cancelled.
    fn reconcile(&mut self) {
        if !self.is_active() {
            self.unmount_all();
            return;
        }

        let field = build_field(&self.config, &self.budget);
        let mut previous = std::mem::take(&mut self.mounted);
        let (mut kept, mut started) = (0usize, 0usize);

        for particle in field.particles {
            let handle = match previous.remove(&particle.key) {
                Some(old) if old.particle.profile == particle.profile => {
                    kept += 1;
                    old.handle
                }
                Some(old) => {
                    self.host.cancel(old.handle);
                    started += 1;
                    self.host.start(&particle.key, &particle.profile)
                }
                None => {
                    started += 1;
                    self.host.start(&particle.key, &particle.profile)
                }
            };
            self.mounted
                .insert(particle.key.clone(), Mounted { particle, handle });
        }

        let removed = previous.len();
        for old in previous.into_values() {
            self.host.cancel(old.handle);
        }

        log::debug!(
            "reconciled '{}': {kept} kept, {started} started, {removed} cancelled",
            self.config.effect_tag
        );
    }

    /// Cancel every running animation and forget the field
    pub fn unmount_all(&mut self) {
        if self.mounted.is_empty() {
            return;
        }
        let count = self.mounted.len();
        for (_, mounted) in std::mem::take(&mut self.mounted) {
            self.host.cancel(mounted.handle);
        }
        log::debug!("unmounted {count} particle(s) of '{}'", self.config.effect_tag);
    }
}

impl VisualEngine<TimelineHost> {
    /// Engine on an in-memory timeline host
    pub fn headless(config: EngineConfig) -> Self {
        Self::new(TimelineHost::new(), config)
    }

    /// Sample every running animation and pack it for rendering
    pub fn pack_instances(&self, viewport: Viewport) -> Vec<ParticleInstance> {
        self.host
            .frame()
            .iter()
            .filter_map(|sample| {
                let mounted = self.mounted.get(&sample.key)?;
                Some(ParticleInstance::from_sample(
                    &sample.initial,
                    &sample.state,
                    &mounted.particle.shape,
                    mounted.particle.derived.index,
                    viewport,
                ))
            })
            .collect()
    }
}

impl<H: AnimationHost> RuntimeSystem for VisualEngine<H> {
    fn initialize(&mut self) -> Result<()> {
        self.ready = true;
        self.reconcile();
        log::info!(
            "visual engine ready: '{}' with {} particle(s)",
            self.config.effect_tag,
            self.mounted.len()
        );
        Ok(())
    }

    fn update(&mut self, dt: f64) -> Result<()> {
        if self.is_active() {
            self.host.advance(dt);
        }
        Ok(())
    }

    fn shutdown(&mut self) -> Result<()> {
        self.ready = false;
        self.unmount_all();
        Ok(())
    }

    fn name(&self) -> &str {
        "visual-engine"
    }
}

impl<H: AnimationHost> Drop for VisualEngine<H> {
    fn drop(&mut self) {
        self.unmount_all();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::EngineSettings;

    fn petals(count: i64) -> EngineConfig {
        EngineConfig::new("falling-petal", count, "#FFB7C5")
    }

    #[test]
    fn inert_before_initialize() {
        let mut engine = VisualEngine::headless(petals(10));
        assert_eq!(engine.mounted_count(), 0);
        engine.update(0.5).unwrap();
        assert_eq!(engine.host().active_count(), 0);
        assert!(engine.pack_instances(Viewport::default()).is_empty());
    }

    #[test]
    fn mounts_after_initialize() {
        let mut engine = VisualEngine::headless(petals(1000));
        engine.initialize().unwrap();
        assert!(engine.is_active());
        assert_eq!(engine.mounted_count(), 80);
        assert_eq!(engine.host().active_count(), 80);
        assert_eq!(engine.name(), "visual-engine");
    }

    #[test]
    fn hidden_engine_cancels_everything() {
        let mut engine = VisualEngine::headless(petals(20));
        engine.initialize().unwrap();
        engine.set_visible(false);
        assert_eq!(engine.host().active_count(), 0);
        assert_eq!(engine.mounted_count(), 0);

        engine.set_visible(true);
        assert_eq!(engine.host().active_count(), 20);
    }

    #[test]
    fn hidden_before_initialize_stays_inert() {
        let mut engine = VisualEngine::headless(petals(20));
        engine.set_visible(false);
        engine.initialize().unwrap();
        assert_eq!(engine.host().active_count(), 0);
    }

    #[test]
    fn count_change_keeps_surviving_animations() {
        let mut engine = VisualEngine::headless(petals(10));
        engine.initialize().unwrap();
        let before: Vec<_> = (0..5)
            .map(|i| engine.handle(&ParticleKey::new("falling-petal", i)).unwrap())
            .collect();

        engine.set_config(petals(5));
        assert_eq!(engine.host().active_count(), 5);

        engine.set_config(petals(8));
        assert_eq!(engine.host().active_count(), 8);
        for (i, handle) in before.iter().enumerate() {
            assert_eq!(engine.handle(&ParticleKey::new("falling-petal", i)), Some(*handle));
        }
    }

    #[test]
    fn color_change_keeps_animations_and_updates_shapes() {
        let mut engine = VisualEngine::headless(petals(4));
        engine.initialize().unwrap();
        let key = ParticleKey::new("falling-petal", 2);
        let handle = engine.handle(&key);

        engine.set_config(EngineConfig::new("falling-petal", 4, "#ff00ff"));
        assert_eq!(engine.handle(&key), handle);
        let particle = engine.particles().find(|p| p.key == key).unwrap();
        assert_eq!(particle.shape.color.as_str(), "#ff00ff");
    }

    #[test]
    fn effect_change_replaces_the_field() {
        let mut engine = VisualEngine::headless(petals(10));
        engine.initialize().unwrap();
        engine.set_config(EngineConfig::new("lightning", 100, "#FFD700"));
        assert_eq!(engine.host().active_count(), 30);
        assert!(engine.particles().all(|p| p.key.effect_tag() == "lightning"));
    }

    #[test]
    fn shutdown_cleans_up() {
        let mut engine = VisualEngine::headless(petals(30));
        engine.initialize().unwrap();
        engine.update(1.0 / 60.0).unwrap();
        engine.shutdown().unwrap();
        assert_eq!(engine.host().active_count(), 0);
        assert!(!engine.is_active());
    }

    #[test]
    fn remount_gives_identical_profiles() {
        let mut engine = VisualEngine::headless(EngineConfig::new("taiji", 12, "#fff"));
        engine.initialize().unwrap();
        let first: Vec<Particle> = engine.particles().cloned().collect();
        engine.set_visible(false);
        engine.set_visible(true);
        let second: Vec<Particle> = engine.particles().cloned().collect();
        assert_eq!(first, second);
    }

    #[test]
    fn settings_drive_defaults() {
        let settings = EngineSettings::from_toml_str("default_count = 7\n").unwrap();
        let mut engine = VisualEngine::with_settings(TimelineHost::new(), &settings, "mist");
        engine.initialize().unwrap();
        assert_eq!(engine.mounted_count(), 7);
    }

    #[test]
    fn packs_visible_particles_once_playing() {
        let mut engine = VisualEngine::headless(EngineConfig::new("unknown-tag-xyz", 6, "#000"));
        engine.initialize().unwrap();
        assert_eq!(engine.pack_instances(Viewport::default()).len(), 6);

        // Ten seconds clears every stagger delay
        for _ in 0..600 {
            engine.update(1.0 / 60.0).unwrap();
        }
        let instances = engine.pack_instances(Viewport::default());
        assert_eq!(instances.len(), 6);
        assert!(instances.iter().all(|i| i.color == [0.0, 0.0, 0.0, 1.0]));
    }
}
