//! Host-facing intro controller.
//!
//! [`Intro`] ties the engine, the viewport adapter and a [`Surface`]
//! together behind the three operations a host needs: advance one frame,
//! detonate, and forward resizes. It owns the teardown contract - when
//! the engine deactivates, the surface is hidden exactly once and every
//! later call is inert.
//!
//! # Quick Start
//!
//! ```ignore
//! let engine = Engine::new(EngineConfig::default());
//! let mut intro = Intro::new(engine, surface, 1280, 720);
//!
//! // In your frame loop:
//! if !intro.advance(elapsed_secs) {
//!     // done - stop scheduling frames
//! }
//! ```

use crate::engine::Engine;
use crate::render;
use crate::surface::Surface;
use crate::viewport::Viewport;

/// The assembled intro: engine + viewport + drawing surface.
pub struct Intro<S: Surface> {
    engine: Engine,
    viewport: Viewport,
    surface: S,
    hidden: bool,
}

impl<S: Surface> Intro<S> {
    pub fn new(engine: Engine, surface: S, width: u32, height: u32) -> Self {
        Self {
            engine,
            viewport: Viewport::new(width, height),
            surface,
            hidden: false,
        }
    }

    /// Run one tick and paint one frame.
    ///
    /// Returns `true` while the host should schedule another frame. The
    /// first call after the engine deactivates hides the surface and
    /// returns `false`; everything after that is a no-op.
    pub fn advance(&mut self, elapsed: f32) -> bool {
        if self.hidden {
            return false;
        }
        if !self.engine.step(elapsed) {
            self.surface.hide();
            self.hidden = true;
            return false;
        }
        let angle_y = self.engine.angle_y();
        let exploding = self.engine.is_exploding();
        render::draw_frame(
            self.engine.particles_mut(),
            angle_y,
            exploding,
            &self.viewport,
            &mut self.surface,
        );
        true
    }

    /// Start the explosion. No-op if already exploding or torn down.
    pub fn detonate(&mut self) {
        self.engine.trigger_explosion();
    }

    /// Forward a host resize notification to the viewport adapter.
    pub fn handle_resize(&mut self, width: u32, height: u32) {
        self.viewport.resize(width, height);
    }

    /// Whether the intro still ticks and draws.
    #[inline]
    pub fn is_active(&self) -> bool {
        !self.hidden && self.engine.is_active()
    }

    #[inline]
    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    #[inline]
    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    #[inline]
    pub fn surface(&self) -> &S {
        &self.surface
    }

    #[inline]
    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }
}
