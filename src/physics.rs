//! Cabinet acoustics math.
//!
//! Closed-form formulas the dashboard binds to its sliders: net internal
//! volume after wall and driver displacement, and the Helmholtz port
//! length for vented topologies. Pure functions of a [`CabinetSpec`];
//! nothing here touches the particle engine.

use std::f32::consts::PI;

/// Speed of sound used by the Helmholtz formula, in cm/s.
pub const SPEED_OF_SOUND: f32 = 34_300.0;

/// Assumed average driver mounting depth for displacement, in cm.
const DRIVER_DEPTH: f32 = 15.0;

/// Flanged-port end correction factor applied per port diameter.
const END_CORRECTION: f32 = 0.82;

/// Box venting topology.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Topology {
    Sealed,
    Ported,
    Bandpass4,
    Bandpass6,
}

/// Mounted driver description.
#[derive(Debug, Clone, Copy)]
pub struct DriverConfig {
    pub count: u32,
    /// Nominal cone diameter in inches.
    pub cone_inches: f32,
}

/// External cabinet dimensions plus tuning inputs.
///
/// Lengths in cm except `wall_thickness` (mm, the unit cut sheets use).
#[derive(Debug, Clone)]
pub struct CabinetSpec {
    pub width: f32,
    pub height: f32,
    pub depth: f32,
    pub wall_thickness: f32,
    pub port_diameter: f32,
    pub tuning_hz: f32,
    pub topology: Topology,
    pub driver: DriverConfig,
}

impl Default for CabinetSpec {
    fn default() -> Self {
        Self {
            width: 50.0,
            height: 40.0,
            depth: 35.0,
            wall_thickness: 18.0,
            port_diameter: 10.0,
            tuning_hz: 38.0,
            topology: Topology::Ported,
            driver: DriverConfig {
                count: 1,
                cone_inches: 10.0,
            },
        }
    }
}

impl CabinetSpec {
    /// Net internal volume in litres.
    ///
    /// Inner box volume with double walls discounted on every axis, minus
    /// an approximate driver displacement (a cylinder of the cone radius
    /// by an average mounting depth) per driver. Zero when the walls
    /// consume any dimension; never negative.
    pub fn net_volume(&self) -> f32 {
        let wall_cm = self.wall_thickness / 10.0;
        let iw = self.width - wall_cm * 2.0;
        let ih = self.height - wall_cm * 2.0;
        let id = self.depth - wall_cm * 2.0;
        if iw <= 0.0 || ih <= 0.0 || id <= 0.0 {
            return 0.0;
        }
        let gross = iw * ih * id / 1000.0;

        let cone_radius = self.driver.cone_inches * 2.54 / 2.0;
        let displacement = PI * cone_radius * cone_radius * DRIVER_DEPTH / 1000.0;

        (gross - displacement * self.driver.count as f32).max(0.0)
    }

    /// Tuned port length in cm for the current net volume.
    ///
    /// Helmholtz resonator length for a round port of the configured
    /// diameter, with the flanged end correction subtracted. Zero for
    /// sealed boxes, degenerate volumes, or when the correction exceeds
    /// the raw length.
    pub fn port_length(&self) -> f32 {
        let volume = self.net_volume();
        if volume <= 0.0 || self.topology == Topology::Sealed {
            return 0.0;
        }
        let radius = self.port_diameter / 2.0;
        let area = PI * radius * radius;

        let numerator = SPEED_OF_SOUND * SPEED_OF_SOUND * area;
        let denominator =
            4.0 * PI * PI * self.tuning_hz * self.tuning_hz * (volume * 1000.0);

        (numerator / denominator - END_CORRECTION * self.port_diameter).max(0.0)
    }
}
