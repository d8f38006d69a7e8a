//! The particle engine: store, lifecycle and per-tick kinematics.
//!
//! The engine does not schedule itself. The host calls
//! [`Engine::step`] once per frame with the elapsed simulation time and
//! keeps scheduling frames for as long as `step` returns `true`. That
//! split keeps the simulation a plain function of its inputs - headless
//! tests drive it with synthetic clocks, the windowed host drives it from
//! the event loop.
//!
//! # Lifecycle
//!
//! ```text
//! Assembling --trigger_explosion()--> Exploding --delay--> Deactivated
//! ```
//!
//! Transitions are one-way. Triggering while already exploding, or any
//! call after deactivation, is a no-op.
//!
//! # Quick Start
//!
//! ```ignore
//! let mut engine = Engine::seeded(EngineConfig::default(), 7);
//!
//! // In your frame loop:
//! if !engine.step(elapsed_secs) {
//!     // deactivated - stop scheduling frames
//! }
//! ```

use glam::Vec3;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::geometry::{self, GeometryConfig};
use crate::particle::Particle;

/// Engine lifecycle state. Transitions are strictly one-way.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Phase {
    /// Particles converge on their targets; the shape idles and rotates.
    Assembling,
    /// Particles fly outward and shrink. The shutdown deadline is armed
    /// on the first tick after the trigger, once a clock is available.
    Exploding { shutdown_at: Option<f32> },
    /// Terminal. The engine never ticks again.
    Deactivated,
}

/// Tuning constants for the two-phase lifecycle.
///
/// Per-tick rates are deliberately frame-based rather than dt-scaled: the
/// host runs one tick per displayed frame, matching the pacing the shape
/// was designed around.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    pub geometry: GeometryConfig,
    /// Fraction of the remaining distance covered per assembly tick.
    pub assemble_rate: f32,
    /// Additive size growth per assembly tick, clamped at the base size.
    pub size_growth: f32,
    /// Idle Y-axis rotation, radians per tick.
    pub rotation_speed: f32,
    /// Woofer depth jitter amplitude (world units).
    pub jitter_amplitude: f32,
    /// Woofer depth jitter angular rate, radians per second of elapsed
    /// simulation time, so its period is frame-rate independent.
    pub jitter_rate: f32,
    /// Outward kick magnitude range at explosion time.
    pub min_force: f32,
    pub max_force: f32,
    /// Multiplicative velocity accelerant per explosion tick.
    pub velocity_gain: f32,
    /// Multiplicative base-size decay per explosion tick.
    pub size_decay: f32,
    /// Seconds between the first explosion tick and deactivation.
    pub shutdown_delay: f32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            geometry: GeometryConfig::default(),
            assemble_rate: 0.04,
            size_growth: 0.05,
            rotation_speed: 0.005,
            jitter_amplitude: 2.0,
            jitter_rate: 20.0,
            min_force: 10.0,
            max_force: 30.0,
            velocity_gain: 1.02,
            size_decay: 0.96,
            shutdown_delay: 2.0,
        }
    }
}

impl EngineConfig {
    /// Replace the target geometry.
    pub fn with_geometry(mut self, geometry: GeometryConfig) -> Self {
        self.geometry = geometry;
        self
    }

    /// Set the idle rotation speed (radians per tick).
    pub fn with_rotation_speed(mut self, speed: f32) -> Self {
        self.rotation_speed = speed;
        self
    }

    /// Set the assembly smoothing fraction per tick.
    pub fn with_assemble_rate(mut self, rate: f32) -> Self {
        self.assemble_rate = rate;
        self
    }

    /// Set the post-trigger deactivation delay in seconds.
    pub fn with_shutdown_delay(mut self, seconds: f32) -> Self {
        self.shutdown_delay = seconds;
        self
    }
}

/// The particle engine.
///
/// Owns its particle collection, rotation angle and lifecycle state
/// exclusively. Viewport geometry is read by the render step, not here.
pub struct Engine {
    particles: Vec<Particle>,
    phase: Phase,
    angle_y: f32,
    config: EngineConfig,
    rng: SmallRng,
}

impl Engine {
    /// Build an engine with an entropy-seeded RNG.
    pub fn new(config: EngineConfig) -> Self {
        Self::with_rng(config, SmallRng::from_entropy())
    }

    /// Build an engine with a fixed seed. Same seed, same swarm.
    pub fn seeded(config: EngineConfig, seed: u64) -> Self {
        Self::with_rng(config, SmallRng::seed_from_u64(seed))
    }

    fn with_rng(config: EngineConfig, mut rng: SmallRng) -> Self {
        let particles = geometry::generate(&config.geometry, &mut rng);
        Self {
            particles,
            phase: Phase::Assembling,
            angle_y: 0.0,
            config,
            rng,
        }
    }

    /// Advance the simulation one tick.
    ///
    /// `elapsed` is the simulation clock in seconds; it drives the idle
    /// jitter sinusoid and the deactivation deadline. Returns `true`
    /// while the host should keep scheduling frames. Once deactivated
    /// this is an inert no-op that returns `false`.
    pub fn step(&mut self, elapsed: f32) -> bool {
        match self.phase {
            Phase::Assembling => {
                self.assemble_tick(elapsed);
                self.angle_y += self.config.rotation_speed;
                true
            }
            Phase::Exploding { shutdown_at } => {
                let deadline =
                    shutdown_at.unwrap_or(elapsed + self.config.shutdown_delay);
                if elapsed >= deadline {
                    self.phase = Phase::Deactivated;
                    return false;
                }
                self.phase = Phase::Exploding {
                    shutdown_at: Some(deadline),
                };
                self.explode_tick();
                true
            }
            Phase::Deactivated => false,
        }
    }

    /// Kick every particle outward and enter the explosion phase.
    ///
    /// Only valid from [`Phase::Assembling`]; repeated triggers and
    /// post-deactivation triggers are no-ops.
    pub fn trigger_explosion(&mut self) {
        if self.phase != Phase::Assembling {
            return;
        }
        for p in &mut self.particles {
            let force = self.rng.gen_range(self.config.min_force..self.config.max_force);
            let dist = p.position.length();
            // A particle sitting exactly at the origin has no outward
            // direction; give it a fixed unit one instead of dividing by
            // zero.
            let dir = if dist > f32::EPSILON {
                p.position / dist
            } else {
                Vec3::Y
            };
            p.velocity = dir * force;
        }
        self.phase = Phase::Exploding { shutdown_at: None };
    }

    fn assemble_tick(&mut self, elapsed: f32) {
        let jitter =
            (elapsed * self.config.jitter_rate).sin() * self.config.jitter_amplitude;
        for p in &mut self.particles {
            // Exponential smoothing toward the target: a fixed fraction
            // of the remaining distance per tick.
            p.position += (p.target() - p.position) * self.config.assemble_rate;
            p.size = (p.size + self.config.size_growth).min(p.base_size);
            if p.kind.idle_jitter() {
                p.position.z += jitter;
            }
        }
    }

    fn explode_tick(&mut self) {
        for p in &mut self.particles {
            p.position += p.velocity;
            p.velocity *= self.config.velocity_gain;
            p.base_size *= self.config.size_decay;
        }
    }

    #[inline]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Whether the engine still ticks and draws.
    #[inline]
    pub fn is_active(&self) -> bool {
        self.phase != Phase::Deactivated
    }

    #[inline]
    pub fn is_exploding(&self) -> bool {
        matches!(self.phase, Phase::Exploding { .. })
    }

    /// Accumulated idle rotation angle. Frozen once the explosion starts.
    #[inline]
    pub fn angle_y(&self) -> f32 {
        self.angle_y
    }

    #[inline]
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Mutable particle access for the render step's depth sort.
    #[inline]
    pub fn particles_mut(&mut self) -> &mut [Particle] {
        &mut self.particles
    }

    #[inline]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    /// Shell-only geometry so the idle jitter never fires.
    fn quiet_config() -> EngineConfig {
        let geometry = GeometryConfig {
            shell_count: 40,
            woofer_count: 0,
            tweeter_count: 0,
            ..GeometryConfig::default()
        };
        EngineConfig::default().with_geometry(geometry)
    }

    fn speeds(engine: &Engine) -> Vec<f32> {
        engine.particles().iter().map(|p| p.velocity.length()).collect()
    }

    #[test]
    fn test_assembly_follows_exponential_smoothing_law() {
        let mut engine = Engine::seeded(quiet_config(), 1);
        let initial: Vec<f32> = engine
            .particles()
            .iter()
            .map(|p| (p.target() - p.position).length())
            .collect();

        let n = 50;
        for _ in 0..n {
            assert!(engine.step(0.0));
        }

        let rate = engine.config().assemble_rate;
        let factor = (1.0 - rate).powi(n);
        for (p, d0) in engine.particles().iter().zip(&initial) {
            let remaining = (p.target() - p.position).length();
            assert!(
                (remaining - d0 * factor).abs() < d0 * 1e-3,
                "remaining {remaining}, expected {}",
                d0 * factor
            );
        }
    }

    #[test]
    fn test_size_grows_additively_and_clamps_at_base() {
        let mut engine = Engine::seeded(quiet_config(), 2);
        for _ in 0..3 {
            engine.step(0.0);
        }
        for p in engine.particles() {
            let expected = (3.0 * engine.config().size_growth).min(p.base_size);
            assert!((p.size - expected).abs() < 1e-6);
        }
        for _ in 0..200 {
            engine.step(0.0);
        }
        for p in engine.particles() {
            assert!((p.size - p.base_size).abs() < 1e-6);
        }
    }

    #[test]
    fn test_rotation_accumulates_per_tick() {
        let mut engine = Engine::seeded(quiet_config(), 3);
        let n = 100;
        for _ in 0..n {
            engine.step(0.0);
        }
        let expected = n as f32 * engine.config().rotation_speed;
        assert!((engine.angle_y() - expected).abs() < 1e-5);
    }

    #[test]
    fn test_rotation_freezes_during_explosion() {
        let mut engine = Engine::seeded(quiet_config(), 4);
        engine.step(0.0);
        let frozen = engine.angle_y();
        engine.trigger_explosion();
        engine.step(0.1);
        engine.step(0.2);
        assert_eq!(engine.angle_y(), frozen);
    }

    #[test]
    fn test_explosion_speed_grows_and_base_size_shrinks_monotonically() {
        let mut engine = Engine::seeded(quiet_config(), 5);
        for _ in 0..10 {
            engine.step(0.0);
        }
        engine.trigger_explosion();
        engine.step(0.0);

        let mut prev_speeds = speeds(&engine);
        let mut prev_sizes: Vec<f32> =
            engine.particles().iter().map(|p| p.base_size).collect();
        for tick in 1..10 {
            engine.step(tick as f32 * 0.05);
            let now_speeds = speeds(&engine);
            let now_sizes: Vec<f32> =
                engine.particles().iter().map(|p| p.base_size).collect();
            for (now, prev) in now_speeds.iter().zip(&prev_speeds) {
                assert!(now > prev);
            }
            for (now, prev) in now_sizes.iter().zip(&prev_sizes) {
                assert!(now < prev);
            }
            prev_speeds = now_speeds;
            prev_sizes = now_sizes;
        }
    }

    #[test]
    fn test_zero_distance_particle_gets_unit_direction() {
        let mut engine = Engine::seeded(quiet_config(), 6);
        engine.particles_mut()[0].position = Vec3::ZERO;
        engine.trigger_explosion();
        let v = engine.particles()[0].velocity;
        let cfg = engine.config();
        assert_eq!(v.x, 0.0);
        assert_eq!(v.z, 0.0);
        assert!(v.y >= cfg.min_force && v.y < cfg.max_force);
    }

    #[test]
    fn test_second_trigger_is_a_no_op() {
        let mut engine = Engine::seeded(quiet_config(), 7);
        engine.trigger_explosion();
        let before: Vec<Vec3> = engine.particles().iter().map(|p| p.velocity).collect();
        engine.trigger_explosion();
        for (p, v) in engine.particles().iter().zip(&before) {
            assert_eq!(p.velocity, *v);
        }
        assert!(engine.is_exploding());
    }

    #[test]
    fn test_deactivation_is_terminal() {
        let delay = 2.0;
        let mut engine = Engine::seeded(quiet_config().with_shutdown_delay(delay), 8);
        engine.trigger_explosion();
        // Deadline armed at the first exploding tick's clock.
        assert!(engine.step(1.0));
        assert!(engine.step(2.5));
        assert!(!engine.step(3.1));
        assert_eq!(engine.phase(), Phase::Deactivated);
        assert!(!engine.is_active());

        // Everything after deactivation is inert.
        let frozen: Vec<Vec3> = engine.particles().iter().map(|p| p.position).collect();
        assert!(!engine.step(4.0));
        engine.trigger_explosion();
        assert_eq!(engine.phase(), Phase::Deactivated);
        for (p, pos) in engine.particles().iter().zip(&frozen) {
            assert_eq!(p.position, *pos);
        }
    }

    #[test]
    fn test_jitter_only_moves_primary_drivers_in_depth() {
        let geometry = GeometryConfig {
            shell_count: 0,
            woofer_count: 5,
            tweeter_count: 5,
            ..GeometryConfig::default()
        };
        let config = EngineConfig::default()
            .with_geometry(geometry)
            .with_assemble_rate(0.0);
        let mut engine = Engine::seeded(config, 9);
        let before: Vec<f32> = engine.particles().iter().map(|p| p.position.z).collect();
        // Pick an elapsed time where sin() is far from zero.
        engine.step(std::f32::consts::FRAC_PI_2 / 20.0);
        for (p, z0) in engine.particles().iter().zip(&before) {
            if p.kind.idle_jitter() {
                assert!((p.position.z - z0).abs() > 1.0);
            } else {
                assert_eq!(p.position.z, *z0);
            }
        }
    }
}
