//! Derived process metrics
//!
//! One snapshot per frame aggregates everything the display consumes, so the
//! host never reaches into engine internals.

use membrane_physics::Region;

use crate::simulation::SimulationState;

/// Pressure divisor in the base flux term
const FLUX_PRESSURE_DIV: f32 = 50.0;

/// Residual flux fraction left when the membrane is fully fouled
const FLUX_FOULED_FLOOR: f32 = 0.4;

/// Per-frame snapshot of the display outputs.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Metrics {
    /// Instantaneous flux, rounded to two decimals
    pub flux: f32,
    /// Membrane health, 0-100
    pub membrane_health: f32,
    /// Simulation time in seconds
    pub elapsed_time: f32,
    /// Particles currently in the feed
    pub feed_count: usize,
    /// Particles held at the membrane face
    pub retentate_count: usize,
    /// Particles past the membrane
    pub permeate_count: usize,
}

impl Metrics {
    /// Capture a snapshot of the current state.
    pub fn capture(state: &SimulationState, pressure: f32) -> Self {
        let mut feed_count = 0;
        let mut retentate_count = 0;
        let mut permeate_count = 0;
        for p in &state.particles {
            match p.region {
                Region::Feed => feed_count += 1,
                Region::Retentate => retentate_count += 1,
                Region::Permeate => permeate_count += 1,
            }
        }

        Self {
            flux: flux(permeate_count, pressure, state.elapsed_time, state.membrane_health),
            membrane_health: state.membrane_health,
            elapsed_time: state.elapsed_time,
            feed_count,
            retentate_count,
            permeate_count,
        }
    }
}

/// Instantaneous flux.
///
/// Base flux grows with permeate throughput and driving pressure and decays
/// over the startup transient. Fouling scales it toward a residual 40% of the
/// base value as health approaches zero, never all the way to zero.
pub fn flux(permeate_count: usize, pressure: f32, elapsed_time: f32, membrane_health: f32) -> f32 {
    let base = permeate_count as f32 * (pressure / FLUX_PRESSURE_DIV) / (1.0 + elapsed_time);
    round2(base * (FLUX_FOULED_FLOOR + membrane_health / 100.0))
}

/// Round to two decimal places for display.
fn round2(value: f32) -> f32 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flux_is_zero_without_permeate() {
        assert_eq!(flux(0, 80.0, 5.0, 100.0), 0.0);
    }

    #[test]
    fn test_flux_formula() {
        // 10 * (50/50) / (1 + 1) = 5.0 base, * (0.4 + 1.0) = 7.0
        assert_eq!(flux(10, 50.0, 1.0, 100.0), 7.0);
    }

    #[test]
    fn test_flux_decays_over_startup_transient() {
        let early = flux(10, 50.0, 1.0, 100.0);
        let late = flux(10, 50.0, 9.0, 100.0);
        assert!(late < early);
    }

    #[test]
    fn test_fouled_flux_is_residual_fraction_of_base() {
        // at health 0 the health term contributes nothing, leaving 40% of base
        let base = 10.0 * (50.0 / 50.0) / (1.0 + 1.0);
        assert_eq!(flux(10, 50.0, 1.0, 0.0), round2(base * 0.4));

        let pristine = flux(10, 50.0, 1.0, 100.0);
        let fouled = flux(10, 50.0, 1.0, 0.0);
        assert!((fouled / pristine - 0.4 / 1.4).abs() < 1.0e-3);
    }

    #[test]
    fn test_flux_rounds_to_two_decimals() {
        let value = flux(7, 33.0, 2.7, 61.3);
        assert_eq!(value, (value * 100.0).round() / 100.0);
    }
}
