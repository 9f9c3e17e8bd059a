//! Time-stepped filtration engine
//!
//! Each step runs a fixed pass sequence over the population: stirring, region
//! dispatch (feed transport and the permeation decision, retentate walk,
//! permeate transport and recycle), the hard bounds clamp, then the fouling
//! update. A step is atomic; parameter changes land between steps.

use glam::Vec2;
use membrane_physics::{
    Particle, Region, BACKWASH_PUSHBACK, BACKWASH_RECOVERY, BOUNCE_DAMPING, FEED_ACCEL_BASE,
    FEED_ACCEL_PRESSURE_DIV, FEED_JITTER, FOULING_CONCENTRATION_DIV, FOULING_PRESSURE_DIV,
    MEMBRANE_CONTACT, MEMBRANE_HEALTH_MAX, MEMBRANE_X, PERMEATE_ACCEL_BASE,
    PERMEATE_ACCEL_PRESSURE_DIV, PERMEATE_EXIT_X, PERMEATE_KICK_BASE, PERMEATE_KICK_DIV,
    PERMEATE_OFFSET, PERMEATE_SINK, REFERENCE_FRAME_RATE, RETENTATE_DRAG, RETENTATE_LEFT_BIAS,
    RETENTATE_OFFSET, RETENTATE_WALK, STIR_JITTER, VESSEL_HEIGHT, VESSEL_WIDTH, WALL_MARGIN,
};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::metrics::Metrics;
use crate::params::{
    SimParams, CONCENTRATION_MAX, CONCENTRATION_MIN, PORE_SIZE_MAX, PORE_SIZE_MIN, PRESSURE_MAX,
    PRESSURE_MIN, SOLUTE_SIZE_MAX, SOLUTE_SIZE_MIN, STIR_RATE_MAX, STIR_RATE_MIN,
};
use crate::population;

/// Complete kinematic state of one simulation run.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationState {
    /// Current population; order is stable identity, nothing more
    pub particles: Vec<Particle>,
    /// Simulation time accumulated while running, seconds
    pub elapsed_time: f32,
    /// Membrane condition, 100 pristine down to 0 fully fouled
    pub membrane_health: f32,
}

impl SimulationState {
    /// Fresh state around an existing population.
    pub fn new(particles: Vec<Particle>) -> Self {
        Self {
            particles,
            elapsed_time: 0.0,
            membrane_health: MEMBRANE_HEALTH_MAX,
        }
    }

    /// Advance the state by `dt` seconds.
    ///
    /// Total for all valid inputs: a zero, negative, or non-finite `dt`
    /// leaves the state untouched, and every numeric result is clamped into
    /// its domain instead of failing.
    pub fn step<R: Rng>(&mut self, params: &SimParams, dt: f32, rng: &mut R) {
        if !(dt.is_finite() && dt > 0.0) {
            return;
        }

        // displacement per step, in tuned per-frame units
        let frames = dt * REFERENCE_FRAME_RATE;
        let stir = params.stir_rate / STIR_RATE_MAX * STIR_JITTER;

        for particle in &mut self.particles {
            // stirring agitates every region vertically
            particle.position.y += symmetric(rng) * stir * frames;

            match particle.region {
                Region::Feed => {
                    particle.velocity.x +=
                        (FEED_ACCEL_BASE + params.pressure / FEED_ACCEL_PRESSURE_DIV) * dt;
                    particle.position.x += particle.velocity.x * frames;
                    particle.position.x += symmetric(rng) * FEED_JITTER * frames;

                    if particle.position.x >= MEMBRANE_X - MEMBRANE_CONTACT {
                        if particle.passes_membrane(params.pore_size) {
                            particle.region = Region::Permeate;
                            particle.position.x = MEMBRANE_X + PERMEATE_OFFSET;
                            particle.velocity.x =
                                PERMEATE_KICK_BASE + params.pressure / PERMEATE_KICK_DIV;
                        } else {
                            particle.region = Region::Retentate;
                            particle.position.x = MEMBRANE_X - RETENTATE_OFFSET;
                            particle.velocity.x *= -BOUNCE_DAMPING;
                        }
                    }
                }
                Region::Retentate => {
                    // slow drift off the membrane face, never back into bulk flow
                    particle.position.x +=
                        (rng.random::<f32>() - RETENTATE_LEFT_BIAS) * RETENTATE_WALK * frames;
                    particle.position.y += symmetric(rng) * RETENTATE_WALK * frames;
                    particle.velocity *= (1.0 - RETENTATE_DRAG * dt).max(0.0);
                    particle.position.x = particle
                        .position
                        .x
                        .clamp(WALL_MARGIN, MEMBRANE_X - RETENTATE_OFFSET);
                }
                Region::Permeate => {
                    particle.velocity.x +=
                        (PERMEATE_ACCEL_BASE + params.pressure / PERMEATE_ACCEL_PRESSURE_DIV) * dt;
                    particle.velocity.y += PERMEATE_SINK * dt;
                    particle.position += particle.velocity * frames;

                    if particle.position.x > PERMEATE_EXIT_X {
                        // closed loop: the permeate stream feeds back into the vessel
                        particle.position = population::feed_spawn_position(rng);
                        particle.velocity = Vec2::ZERO;
                        particle.region = Region::Feed;
                    }
                }
            }

            particle.position.x = particle
                .position
                .x
                .clamp(WALL_MARGIN, VESSEL_WIDTH - WALL_MARGIN);
            particle.position.y = particle
                .position
                .y
                .clamp(WALL_MARGIN, VESSEL_HEIGHT - WALL_MARGIN);
        }

        // irreversible fouling, driven by pressure and solids load
        let decay = (params.pressure / FOULING_PRESSURE_DIV
            + params.feed_concentration / FOULING_CONCENTRATION_DIV)
            * dt;
        self.membrane_health = (self.membrane_health - decay).clamp(0.0, MEMBRANE_HEALTH_MAX);
        self.elapsed_time += dt;
    }

    /// Restore part of the membrane and flush retained solids back into the
    /// feed. Permeate particles and the clock are untouched.
    pub fn backwash(&mut self) -> usize {
        self.membrane_health =
            (self.membrane_health + BACKWASH_RECOVERY).min(MEMBRANE_HEALTH_MAX);

        let mut flushed = 0;
        for particle in &mut self.particles {
            if particle.region == Region::Retentate {
                particle.region = Region::Feed;
                particle.position.x = (particle.position.x - BACKWASH_PUSHBACK).max(WALL_MARGIN);
                particle.velocity = Vec2::ZERO;
                flushed += 1;
            }
        }
        flushed
    }
}

/// Uniform sample in [-1, 1).
fn symmetric<R: Rng>(rng: &mut R) -> f32 {
    rng.random::<f32>() * 2.0 - 1.0
}

/// Owns the parameter store, the simulation state, the random source, and the
/// run flag.
///
/// Parameter setters clamp into the documented control ranges. Setters that
/// change the population recipe (feed concentration, mean solute size, pore
/// size) regenerate the population and restart the clock; pressure and stir
/// rate apply on the next step without touching the population.
pub struct Engine {
    params: SimParams,
    state: SimulationState,
    rng: SmallRng,
    running: bool,
}

impl Engine {
    /// Engine seeded from the OS.
    pub fn new(params: SimParams) -> Self {
        Self::from_rng(params, SmallRng::from_os_rng())
    }

    /// Deterministic engine for tests and reproducible demos.
    pub fn with_seed(params: SimParams, seed: u64) -> Self {
        Self::from_rng(params, SmallRng::seed_from_u64(seed))
    }

    fn from_rng(params: SimParams, mut rng: SmallRng) -> Self {
        let params = params.clamped();
        let particles = population::generate_population(&params, &mut rng);
        log::info!("engine ready: {} particles", particles.len());

        Self {
            params,
            state: SimulationState::new(particles),
            rng,
            running: true,
        }
    }

    /// Advance one frame. Does nothing while paused.
    pub fn tick(&mut self, dt: f32) {
        if !self.running {
            return;
        }
        self.state.step(&self.params, dt, &mut self.rng);
    }

    pub fn set_pressure(&mut self, pressure: f32) {
        self.params.pressure = pressure.clamp(PRESSURE_MIN, PRESSURE_MAX);
    }

    pub fn set_stir_rate(&mut self, stir_rate: f32) {
        self.params.stir_rate = stir_rate.clamp(STIR_RATE_MIN, STIR_RATE_MAX);
    }

    pub fn set_pore_size(&mut self, pore_size: f32) {
        self.params.pore_size = pore_size.clamp(PORE_SIZE_MIN, PORE_SIZE_MAX);
        self.regenerate();
    }

    pub fn set_mean_solute_size(&mut self, mean_solute_size: f32) {
        self.params.mean_solute_size = mean_solute_size.clamp(SOLUTE_SIZE_MIN, SOLUTE_SIZE_MAX);
        self.regenerate();
    }

    pub fn set_feed_concentration(&mut self, feed_concentration: f32) {
        self.params.feed_concentration =
            feed_concentration.clamp(CONCENTRATION_MIN, CONCENTRATION_MAX);
        self.regenerate();
    }

    /// Fresh population from the current recipe. Restarts the clock but
    /// leaves membrane fouling in place.
    fn regenerate(&mut self) {
        self.state.particles = population::generate_population(&self.params, &mut self.rng);
        self.state.elapsed_time = 0.0;
        log::info!("population regenerated: {} particles", self.state.particles.len());
    }

    /// Fresh population, clock to zero, membrane back to pristine.
    pub fn reset(&mut self) {
        self.regenerate();
        self.state.membrane_health = MEMBRANE_HEALTH_MAX;
        log::info!("simulation reset");
    }

    /// Clean the membrane and flush retained solids back into the feed.
    pub fn backwash(&mut self) {
        let flushed = self.state.backwash();
        log::info!(
            "backwash: health {:.1}, {} particles flushed to feed",
            self.state.membrane_health,
            flushed
        );
    }

    pub fn set_running(&mut self, running: bool) {
        self.running = running;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn params(&self) -> &SimParams {
        &self.params
    }

    pub fn state(&self) -> &SimulationState {
        &self.state
    }

    pub fn particles(&self) -> &[Particle] {
        &self.state.particles
    }

    /// Display snapshot for the current frame.
    pub fn metrics(&self) -> Metrics {
        Metrics::capture(&self.state, self.params.pressure)
    }
}
