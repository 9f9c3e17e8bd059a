//! Vessel geometry and motion constants for the membrane simulation
//!
//! These are simulation-space values tuned for real-time visualization, not
//! physical units.

/// Vessel interior width
pub const VESSEL_WIDTH: f32 = 600.0;

/// Vessel interior height
pub const VESSEL_HEIGHT: f32 = 320.0;

/// Particles are clamped this far inside the vessel walls
pub const WALL_MARGIN: f32 = 10.0;

/// Horizontal position of the membrane plane
pub const MEMBRANE_X: f32 = 360.0;

/// Distance from the membrane plane at which the permeation decision fires
pub const MEMBRANE_CONTACT: f32 = 8.0;

/// Offset past the membrane where a permeating particle re-enters
pub const PERMEATE_OFFSET: f32 = 6.0;

/// Offset before the membrane where a rejected particle settles
pub const RETENTATE_OFFSET: f32 = 12.0;

/// Horizontal position past which permeate recycles back into the feed
pub const PERMEATE_EXIT_X: f32 = 585.0;

// Feed spawn sub-region, kept clear of the walls and the membrane
pub const FEED_SPAWN_X_MIN: f32 = 30.0;
pub const FEED_SPAWN_X_MAX: f32 = 220.0;
pub const FEED_SPAWN_Y_MIN: f32 = 40.0;
pub const FEED_SPAWN_Y_MAX: f32 = 280.0;

/// Smallest solute radius
pub const MIN_PARTICLE_SIZE: f32 = 4.0;

/// Largest solute radius
pub const MAX_PARTICLE_SIZE: f32 = 20.0;

/// Pristine membrane health
pub const MEMBRANE_HEALTH_MAX: f32 = 100.0;

/// Frame rate the motion constants below are tuned at.
///
/// Per-step displacement scales by `dt * REFERENCE_FRAME_RATE`, so a step at
/// exactly 60 Hz advances by the tuned per-frame amounts and `dt = 0` moves
/// nothing.
pub const REFERENCE_FRAME_RATE: f32 = 60.0;

/// Baseline rightward acceleration in the feed channel
pub const FEED_ACCEL_BASE: f32 = 0.5;

/// Pressure divisor for feed acceleration
pub const FEED_ACCEL_PRESSURE_DIV: f32 = 70.0;

/// Amplitude of Brownian horizontal jitter in the feed
pub const FEED_JITTER: f32 = 0.4;

/// Fraction of incoming velocity kept, reversed, on membrane rejection
pub const BOUNCE_DAMPING: f32 = 0.3;

/// Per-frame amplitude of the retentate random walk
pub const RETENTATE_WALK: f32 = 0.5;

/// Walk bias toward the left wall; 0.5 would be unbiased
pub const RETENTATE_LEFT_BIAS: f32 = 0.54;

/// Retentate velocity drag per second
pub const RETENTATE_DRAG: f32 = 3.0;

/// Baseline outward velocity kick on permeation
pub const PERMEATE_KICK_BASE: f32 = 0.6;

/// Pressure divisor for the permeation kick
pub const PERMEATE_KICK_DIV: f32 = 80.0;

/// Baseline rightward acceleration in the permeate channel
pub const PERMEATE_ACCEL_BASE: f32 = 0.3;

/// Pressure divisor for permeate acceleration
pub const PERMEATE_ACCEL_PRESSURE_DIV: f32 = 60.0;

/// Downward drift acceleration in the permeate channel
pub const PERMEATE_SINK: f32 = 0.15;

/// Full-amplitude vertical stirring jitter at stir rate 100
pub const STIR_JITTER: f32 = 1.2;

/// Membrane health restored by one backwash
pub const BACKWASH_RECOVERY: f32 = 25.0;

/// Distance retentate particles are pushed back toward the feed on backwash
pub const BACKWASH_PUSHBACK: f32 = 80.0;

/// Pressure divisor in the fouling decay term
pub const FOULING_PRESSURE_DIV: f32 = 2200.0;

/// Concentration divisor in the fouling decay term
pub const FOULING_CONCENTRATION_DIV: f32 = 9000.0;
