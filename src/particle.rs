//! Particle data model.
//!
//! One [`Particle`] is a single simulated point. Its target position is
//! assigned exactly once at creation and never recomputed; everything else
//! mutates every tick. The particle set is fixed for the lifetime of one
//! engine instance - particles are never added or removed, only hidden by
//! zero size or by engine deactivation.

use glam::Vec3;

/// Solid 24-bit color used for the framebuffer palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Cabinet shell and woofer particles.
pub const GOLD: Rgb = Rgb::new(197, 169, 110);

/// Tweeter particles.
pub const DARK_GOLD: Rgb = Rgb::new(140, 110, 50);

/// Which cluster of the assembled shape a particle belongs to.
///
/// The kind has no effect on projection math; its only behavioral role is
/// the idle-phase depth jitter, expressed as a capability so the engine
/// never compares kinds inline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParticleKind {
    /// Hollow cuboid cabinet outline.
    Shell,
    /// Woofer ring on the front face.
    PrimaryDriver,
    /// Smaller, darker tweeter ring above the woofer.
    SecondaryDriver,
}

impl ParticleKind {
    /// Whether the assembly phase applies the sinusoidal depth jitter
    /// (the woofer "breathing" to the beat).
    #[inline]
    pub fn idle_jitter(self) -> bool {
        matches!(self, ParticleKind::PrimaryDriver)
    }
}

/// One simulated point.
#[derive(Debug, Clone)]
pub struct Particle {
    /// Current position in world units, mutated every tick.
    pub position: Vec3,
    /// World units per tick. Zero until the explosion begins, then grows
    /// in magnitude under the per-tick accelerant.
    pub velocity: Vec3,
    /// Stable per-particle size identity during assembly; decays
    /// multiplicatively during the explosion.
    pub base_size: f32,
    /// Currently rendered radius. Starts at 0 and grows toward
    /// `base_size` during assembly.
    pub size: f32,
    pub color: Rgb,
    pub kind: ParticleKind,
    /// Assembly destination, set once at creation.
    target: Vec3,
}

impl Particle {
    /// Create a particle at a far-spawn position headed for `target`.
    ///
    /// Particles start invisible (`size` 0) and at rest.
    pub fn new(position: Vec3, target: Vec3, base_size: f32, color: Rgb, kind: ParticleKind) -> Self {
        Self {
            position,
            velocity: Vec3::ZERO,
            base_size,
            size: 0.0,
            color,
            kind,
            target,
        }
    }

    /// Assembly destination. Immutable after creation.
    #[inline]
    pub fn target(&self) -> Vec3 {
        self.target
    }
}
