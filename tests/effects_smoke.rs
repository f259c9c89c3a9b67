use folio_effects::core::math::{wrap, Vec2};
use folio_effects::core::random::Rng;
use folio_effects::domain::tuning::{BallPitTuning, BubblesTuning, TextFit};
use folio_effects::simulation::render::{DrawCommand, RecordingSurface};
use folio_effects::simulation::{FrameContext, PointerState};
use folio_effects::systems::particles::{Ball, Bubble, Particle};
use folio_effects::systems::raster::{rasterize_word, BlockFont};
use folio_effects::systems::ParticlePool;
use folio_effects::{create_effect, EffectKind, Lineup, LoopState, Sketch, Tuning};

#[test]
fn sketch_loop_smoke() {
    let mut surface = RecordingSurface::new();
    let mut sketch = Sketch::new(create_effect(EffectKind::BallPit, &Tuning::default(), 42), 320.0, 200.0);
    sketch.setup(&mut surface);
    for i in 0..30 {
        sketch.tick(i as f64 * 16.0, None, &mut surface);
    }
    let stats = sketch.stats();
    assert_eq!(stats.frames(), 30);
    assert!(stats.update_ms() >= 0.0);
    assert!(stats.draw_ms() >= 0.0);
    assert_eq!(stats.particle_count() as usize, sketch.effect().particle_count());
}

#[test]
fn loop_state_machine() {
    let mut sketch = Sketch::new(create_effect(EffectKind::Stripes, &Tuning::default(), 1), 100.0, 100.0);
    assert_eq!(sketch.state(), LoopState::Running);
    sketch.start();
    sketch.start();
    assert_eq!(sketch.state(), LoopState::Running);
    sketch.stop();
    sketch.stop();
    assert_eq!(sketch.state(), LoopState::Paused);
}

#[test]
fn damping_only_update_slows_balls() {
    let tuning = BallPitTuning {
        wander: folio_effects::domain::tuning::WanderTuning { force: 0.0, ..Default::default() },
        mouse_radius: 0.0,
        ..BallPitTuning::default()
    };
    let frame = FrameContext::new(500.0, 500.0);
    let pointer = PointerState::at(-1e4, -1e4);
    let mut rng = Rng::new(99);
    for _ in 0..50 {
        let mut ball = Ball::new(Vec2::new(250.0, 250.0), &tuning, &mut rng);
        let before = ball.body.speed();
        ball.update(&tuning, &frame, &pointer, &mut rng);
        assert!(ball.body.speed() < before);
    }
}

#[test]
fn wrap_lands_inside_extent() {
    for x in [-1e6, -500.0, -0.5, 0.0, 499.9, 500.0, 12345.6] {
        let wrapped = wrap(x, 500.0);
        assert!((0.0..500.0).contains(&wrapped), "{x} -> {wrapped}");
    }
}

#[test]
fn full_pool_evicts_the_oldest_bubble() {
    let tuning = BubblesTuning::default();
    let mut rng = Rng::new(1);
    let mut pool = ParticlePool::bounded(3);
    for i in 0..4 {
        pool.push(Bubble::new(Vec2::new(i as f64, 0.0), 10.0, &tuning, &mut rng));
        assert!(pool.len() <= 3);
    }
    let xs: Vec<f64> = pool.iter().map(|b| b.body.pos.x).collect();
    assert_eq!(xs, vec![1.0, 2.0, 3.0]);
}

#[test]
fn shrunk_bubbles_die() {
    let tuning = BubblesTuning::default();
    let mut rng = Rng::new(4);
    let frame = FrameContext::new(100.0, 100.0);
    let mut bubble = Bubble::new(Vec2::zero(), 20.0, &tuning, &mut rng);
    for _ in 0..200 {
        bubble.update(&tuning, &frame, &PointerState::default(), &mut rng);
    }
    assert!(bubble.radius < 0.5);
    assert!(!bubble.is_alive(&tuning, &frame));
}

#[test]
fn rasterized_hi_is_stable() {
    let fit = TextFit::default();
    let first = rasterize_word(&mut BlockFont::new(), 200, 200, "HI", 10, 4, &fit);
    let second = rasterize_word(&mut BlockFont::new(), 200, 200, "HI", 10, 4, &fit);
    assert!(!first.is_empty());
    assert_eq!(first, second);
    assert!(first.iter().all(|p| p.x < 200.0 && p.y < 200.0));
}

#[test]
fn lineup_json_lists_every_effect() {
    let json = Lineup::default().to_json().unwrap();
    let parsed = Lineup::from_json(&json).unwrap();
    assert_eq!(parsed.effects.len(), 7);
    assert_eq!(parsed.effects[0].container, "#top .canvas-container");
}

#[test]
fn tuning_bundle_reaches_the_effect() {
    let tuning = Tuning::from_json(r#"{"bubbles":{"initial_particles":3}}"#).unwrap();
    let mut surface = RecordingSurface::new();
    let mut sketch = Sketch::new(create_effect(EffectKind::Bubbles, &tuning, 1), 200.0, 200.0);
    sketch.setup(&mut surface);
    assert_eq!(sketch.effect().particle_count(), 3);
    sketch.tick(0.0, None, &mut surface);
    assert_eq!(surface.count(|c| matches!(c, DrawCommand::Arc { .. })), 3);
}
