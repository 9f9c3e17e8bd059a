//! Process parameters for runtime tuning

/// Transmembrane pressure control range
pub const PRESSURE_MIN: f32 = 0.0;
pub const PRESSURE_MAX: f32 = 100.0;

/// Membrane pore size control range
pub const PORE_SIZE_MIN: f32 = 6.0;
pub const PORE_SIZE_MAX: f32 = 18.0;

/// Mean solute size control range
pub const SOLUTE_SIZE_MIN: f32 = 6.0;
pub const SOLUTE_SIZE_MAX: f32 = 18.0;

/// Feed concentration control range
pub const CONCENTRATION_MIN: f32 = 100.0;
pub const CONCENTRATION_MAX: f32 = 1500.0;

/// Stir rate control range
pub const STIR_RATE_MIN: f32 = 0.0;
pub const STIR_RATE_MAX: f32 = 100.0;

/// Control inputs of the filtration process.
///
/// Changing `feed_concentration`, `mean_solute_size`, or `pore_size` changes
/// the population recipe; the engine regenerates the population when one of
/// those moves.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimParams {
    /// Transmembrane pressure driving flow toward the membrane, 0-100
    pub pressure: f32,
    /// Membrane pore size, 6-18
    pub pore_size: f32,
    /// Mean solute radius, 6-18
    pub mean_solute_size: f32,
    /// Feed solids concentration, 100-1500
    pub feed_concentration: f32,
    /// Stirring rate, 0-100
    pub stir_rate: f32,
}

impl Default for SimParams {
    fn default() -> Self {
        Self {
            pressure: 50.0,           // moderate driving pressure
            pore_size: 12.0,          // passes most of the default solute mix
            mean_solute_size: 10.0,
            feed_concentration: 500.0,
            stir_rate: 30.0,
        }
    }
}

impl SimParams {
    /// Clamp every field into its control range.
    pub fn clamped(self) -> Self {
        Self {
            pressure: self.pressure.clamp(PRESSURE_MIN, PRESSURE_MAX),
            pore_size: self.pore_size.clamp(PORE_SIZE_MIN, PORE_SIZE_MAX),
            mean_solute_size: self
                .mean_solute_size
                .clamp(SOLUTE_SIZE_MIN, SOLUTE_SIZE_MAX),
            feed_concentration: self
                .feed_concentration
                .clamp(CONCENTRATION_MIN, CONCENTRATION_MAX),
            stir_rate: self.stir_rate.clamp(STIR_RATE_MIN, STIR_RATE_MAX),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_in_range() {
        let params = SimParams::default();
        assert_eq!(params, params.clamped());
    }

    #[test]
    fn test_clamped_pulls_fields_into_range() {
        let params = SimParams {
            pressure: 250.0,
            pore_size: -3.0,
            mean_solute_size: 100.0,
            feed_concentration: 0.0,
            stir_rate: 101.0,
        }
        .clamped();

        assert_eq!(params.pressure, PRESSURE_MAX);
        assert_eq!(params.pore_size, PORE_SIZE_MIN);
        assert_eq!(params.mean_solute_size, SOLUTE_SIZE_MAX);
        assert_eq!(params.feed_concentration, CONCENTRATION_MIN);
        assert_eq!(params.stir_rate, STIR_RATE_MAX);
    }
}
