use crate::core::random::Rng;
use crate::domain::tuning::RiverTuning;
use crate::domain::EffectKind;
use crate::simulation::context::{FrameContext, PointerState};
use crate::simulation::render::Surface;
use crate::systems::particles::{Band, Droplet};
use crate::systems::ParticlePool;

use super::Effect;

/// Grey droplets streaming left to right through a band, parting around
/// the pointer. Each frame fades the previous one instead of clearing it.
pub struct River {
    tuning: RiverTuning,
    droplets: ParticlePool<Droplet>,
    rng: Rng,
}

impl River {
    pub fn new(tuning: RiverTuning, seed: u32) -> Self {
        Self {
            tuning,
            droplets: ParticlePool::unbounded(),
            rng: Rng::new(seed),
        }
    }

    pub fn droplets(&self) -> &ParticlePool<Droplet> {
        &self.droplets
    }
}

impl Effect for River {
    fn kind(&self) -> EffectKind {
        EffectKind::River
    }

    fn setup(&mut self, frame: &FrameContext, _surface: &mut dyn Surface) {
        self.droplets.clear();
        if frame.is_empty() {
            return;
        }
        let band = Band::for_height(frame.height, &self.tuning);
        let count = (self.tuning.droplets_per_px * frame.width).ceil() as usize;
        for _ in 0..count {
            let x = self.rng.below(frame.width);
            let droplet = Droplet::new(x, band, &self.tuning, &mut self.rng);
            self.droplets.push(droplet);
        }
    }

    fn update(&mut self, frame: &FrameContext, pointer: &PointerState) {
        self.droplets.update(&self.tuning, frame, pointer, &mut self.rng);
    }

    fn draw(&mut self, frame: &FrameContext, surface: &mut dyn Surface) {
        surface.set_fill(&self.tuning.fade);
        surface.fill_rect(0.0, 0.0, frame.width * 2.0, frame.height * 2.0);
        self.droplets.draw(&self.tuning, surface);
    }

    fn autoclear(&self) -> bool {
        false
    }

    fn particle_count(&self) -> usize {
        self.droplets.len()
    }

    fn destroy(&mut self, _surface: &mut dyn Surface) {
        self.droplets.clear();
    }
}
