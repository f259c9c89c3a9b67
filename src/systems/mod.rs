//! Systems - particle variants, the pool that owns them, and the word
//! rasterizer that seeds the destroy-text effect

pub mod particles;
pub mod pool;
pub mod raster;

pub use particles::Particle;
pub use pool::ParticlePool;
