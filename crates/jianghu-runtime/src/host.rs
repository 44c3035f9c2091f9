//! Animation host: runs resolved profiles and cancels them on demand

use jianghu_animation::{AnimationProfile, InitialStyle, SampledState, Timeline};
use jianghu_core::ParticleKey;
use std::collections::BTreeMap;
use std::fmt;

/// Opaque handle to one running animation
#[derive(Clone, Copy, Hash, Eq, PartialEq, Ord, PartialOrd)]
pub struct AnimationHandle(u64);

impl fmt::Debug for AnimationHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AnimationHandle({})", self.0)
    }
}

/// The rendering side of the engine.
///
/// The engine hands over declarative profiles and keeps the handles; it
/// never interpolates anything itself. Every started animation must stay
/// cancellable until the host reports it gone.
pub trait AnimationHost {
    /// Begin playing `profile` for the particle identified by `key`
    fn start(&mut self, key: &ParticleKey, profile: &AnimationProfile) -> AnimationHandle;

    /// Stop an animation immediately. Returns false if the handle was unknown.
    fn cancel(&mut self, handle: AnimationHandle) -> bool;

    /// Animations currently scheduled
    fn active_count(&self) -> usize;

    /// Advance host-side time. Hosts with their own frame loop ignore this.
    fn advance(&mut self, _dt: f64) {}
}

/// One running animation's state at the current frame
#[derive(Debug, Clone)]
pub struct FrameSample {
    pub handle: AnimationHandle,
    pub key: ParticleKey,
    pub initial: InitialStyle,
    pub state: SampledState,
}

/// In-memory host that plays profiles on `Timeline`s.
///
/// Used for headless playback and tests; a browser or GPU front end plugs
/// in its own `AnimationHost`.
#[derive(Default)]
pub struct TimelineHost {
    next_handle: u64,
    running: BTreeMap<AnimationHandle, (ParticleKey, Timeline)>,
}

impl TimelineHost {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn timeline(&self, handle: AnimationHandle) -> Option<&Timeline> {
        self.running.get(&handle).map(|(_, tl)| tl)
    }

    pub fn key(&self, handle: AnimationHandle) -> Option<&ParticleKey> {
        self.running.get(&handle).map(|(key, _)| key)
    }

    /// Sample every running animation, in handle order
    pub fn frame(&self) -> Vec<FrameSample> {
        self.running
            .iter()
            .map(|(handle, (key, tl))| FrameSample {
                handle: *handle,
                key: key.clone(),
                initial: tl.profile().initial,
                state: tl.sample(),
            })
            .collect()
    }
}

impl AnimationHost for TimelineHost {
    fn start(&mut self, key: &ParticleKey, profile: &AnimationProfile) -> AnimationHandle {
        self.next_handle += 1;
        let handle = AnimationHandle(self.next_handle);
        self.running
            .insert(handle, (key.clone(), Timeline::new(profile.clone())));
        handle
    }

    fn cancel(&mut self, handle: AnimationHandle) -> bool {
        self.running.remove(&handle).is_some()
    }

    fn active_count(&self) -> usize {
        self.running.len()
    }

    fn advance(&mut self, dt: f64) {
        for (_, tl) in self.running.values_mut() {
            tl.advance(dt);
        }
        let before = self.running.len();
        self.running.retain(|_, (_, tl)| !tl.is_finished());
        let dropped = before - self.running.len();
        if dropped > 0 {
            log::debug!("timeline host released {dropped} finished animation(s)");
        }
    }
}
