//! Particle pool
//!
//! Ordered live particles (insertion order is draw order) plus an optional
//! recycle list. Bounded pools evict their oldest particle to make room.

use std::collections::VecDeque;

use crate::core::random::Rng;
use crate::simulation::context::{FrameContext, PointerState};
use crate::simulation::render::Surface;

use super::particles::Particle;

#[derive(Debug)]
pub struct ParticlePool<P> {
    live: VecDeque<P>,
    recycled: Vec<P>,
    capacity: Option<usize>,
    recycle: bool,
}

impl<P> ParticlePool<P> {
    /// No capacity limit; culled particles are dropped
    pub fn unbounded() -> Self {
        Self::with_policy(None, false)
    }

    /// At most `capacity` live particles; evicted and culled ones are kept
    /// for reuse
    pub fn bounded(capacity: usize) -> Self {
        Self::with_policy(Some(capacity), true)
    }

    pub fn with_policy(capacity: Option<usize>, recycle: bool) -> Self {
        Self {
            live: VecDeque::with_capacity(capacity.unwrap_or(0)),
            recycled: Vec::new(),
            capacity,
            recycle,
        }
    }

    pub fn len(&self) -> usize {
        self.live.len()
    }

    pub fn is_empty(&self) -> bool {
        self.live.is_empty()
    }

    pub fn recycled_len(&self) -> usize {
        self.recycled.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &P> {
        self.live.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut P> {
        self.live.iter_mut()
    }

    /// Add a particle. `init` receives a recycled particle to reinitialize
    /// when one is available.
    pub fn spawn_with<F>(&mut self, init: F)
    where
        F: FnOnce(Option<P>) -> P,
    {
        if !self.make_room() {
            return;
        }
        let slot = self.recycled.pop();
        self.live.push_back(init(slot));
    }

    /// Add an already built particle
    pub fn push(&mut self, particle: P) {
        if self.make_room() {
            self.live.push_back(particle);
        }
    }

    /// Drop every live and recycled particle
    pub fn clear(&mut self) {
        self.live.clear();
        self.recycled.clear();
    }

    // Evict from the front until one more particle fits.
    fn make_room(&mut self) -> bool {
        let Some(capacity) = self.capacity else {
            return true;
        };
        if capacity == 0 {
            return false;
        }
        while self.live.len() >= capacity {
            match self.live.pop_front() {
                Some(oldest) => self.retire(oldest),
                None => break,
            }
        }
        true
    }

    fn retire(&mut self, particle: P) {
        if self.recycle {
            self.recycled.push(particle);
        }
    }
}

impl<P: Particle> ParticlePool<P> {
    /// Update every live particle, then cull the dead ones
    pub fn update(&mut self, params: &P::Params, frame: &FrameContext, pointer: &PointerState, rng: &mut Rng) {
        for particle in self.live.iter_mut() {
            particle.update(params, frame, pointer, rng);
        }
        self.cull(params, frame);
    }

    /// Single compaction pass: survivors slide forward in order, the dead
    /// tail is retired. Returns how many were removed.
    pub fn cull(&mut self, params: &P::Params, frame: &FrameContext) -> usize {
        let len = self.live.len();
        let mut kept = 0;
        for i in 0..len {
            if self.live[i].is_alive(params, frame) {
                if i != kept {
                    self.live.swap(i, kept);
                }
                kept += 1;
            }
        }
        if self.recycle {
            self.recycled.extend(self.live.drain(kept..));
        } else {
            self.live.truncate(kept);
        }
        len - kept
    }

    /// Draw in insertion order
    pub fn draw(&self, params: &P::Params, surface: &mut dyn Surface) {
        for particle in self.live.iter() {
            particle.draw(params, surface);
        }
    }
}

impl<P> Default for ParticlePool<P> {
    fn default() -> Self {
        Self::unbounded()
    }
}
