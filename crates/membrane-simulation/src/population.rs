//! Particle population generation

use glam::Vec2;
use membrane_physics::{
    Particle, FEED_SPAWN_X_MAX, FEED_SPAWN_X_MIN, FEED_SPAWN_Y_MAX, FEED_SPAWN_Y_MIN,
    MAX_PARTICLE_SIZE, MIN_PARTICLE_SIZE,
};
use rand::Rng;

use crate::params::{SimParams, CONCENTRATION_MAX, CONCENTRATION_MIN};

/// Fewest particles, at minimum feed concentration
const BASE_COUNT: f32 = 20.0;

/// Additional particles across the full concentration range
const COUNT_SPAN: f32 = 130.0;

/// Uniform size spread around the mean solute size, as a fraction of the mean
const SIZE_SPREAD: f32 = 0.3;

/// Number of particles for a feed concentration value.
///
/// Scales linearly from 20 at the bottom of the concentration range to 150 at
/// the top.
pub fn population_size(feed_concentration: f32) -> usize {
    let c = feed_concentration.clamp(CONCENTRATION_MIN, CONCENTRATION_MAX);
    let t = (c - CONCENTRATION_MIN) / (CONCENTRATION_MAX - CONCENTRATION_MIN);
    (BASE_COUNT + t * COUNT_SPAN).round() as usize
}

/// Random position inside the feed spawn sub-region.
///
/// Also used when a permeate particle recycles back into the feed.
pub fn feed_spawn_position<R: Rng>(rng: &mut R) -> Vec2 {
    Vec2::new(
        rng.random_range(FEED_SPAWN_X_MIN..FEED_SPAWN_X_MAX),
        rng.random_range(FEED_SPAWN_Y_MIN..FEED_SPAWN_Y_MAX),
    )
}

/// Generate a fresh population for the current parameters.
///
/// Sizes spread uniformly within +/-30% of the mean solute size, clamped to
/// the particle size limits. Every particle starts at rest in the feed.
pub fn generate_population<R: Rng>(params: &SimParams, rng: &mut R) -> Vec<Particle> {
    let count = population_size(params.feed_concentration);
    let mut particles = Vec::with_capacity(count);

    for id in 0..count {
        let spread = 1.0 + (rng.random::<f32>() * 2.0 - 1.0) * SIZE_SPREAD;
        let size =
            (params.mean_solute_size * spread).clamp(MIN_PARTICLE_SIZE, MAX_PARTICLE_SIZE);
        particles.push(Particle::new(id as u32, feed_spawn_position(rng), size));
    }

    log::debug!(
        "generated {} particles (concentration {:.0}, mean size {:.1})",
        particles.len(),
        params.feed_concentration,
        params.mean_solute_size
    );

    particles
}

#[cfg(test)]
mod tests {
    use super::*;
    use membrane_physics::Region;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    #[test]
    fn test_population_size_endpoints() {
        assert_eq!(population_size(CONCENTRATION_MIN), 20);
        assert_eq!(population_size(CONCENTRATION_MAX), 150);
        // out-of-range input clamps rather than extrapolating
        assert_eq!(population_size(0.0), 20);
        assert_eq!(population_size(1.0e6), 150);
    }

    #[test]
    fn test_population_size_scales_linearly() {
        // normalize(300, 100, 1500) = 0.1538..., 20 + 0.1538 * 130 = 40
        assert_eq!(population_size(300.0), 40);
        assert_eq!(population_size(800.0), 85);
    }

    #[test]
    fn test_generated_particles_start_in_spawn_region() {
        let mut rng = SmallRng::seed_from_u64(7);
        let params = SimParams::default();

        for p in generate_population(&params, &mut rng) {
            assert_eq!(p.region, Region::Feed);
            assert_eq!(p.velocity, glam::Vec2::ZERO);
            assert!(p.position.x >= FEED_SPAWN_X_MIN && p.position.x < FEED_SPAWN_X_MAX);
            assert!(p.position.y >= FEED_SPAWN_Y_MIN && p.position.y < FEED_SPAWN_Y_MAX);
        }
    }

    #[test]
    fn test_sizes_stay_within_spread_and_limits() {
        let mut rng = SmallRng::seed_from_u64(11);
        let params = SimParams {
            mean_solute_size: 10.0,
            ..SimParams::default()
        };

        for p in generate_population(&params, &mut rng) {
            assert!(p.size >= 7.0 && p.size <= 13.0, "size out of spread: {}", p.size);
        }

        // a large mean presses against the upper size limit
        let params = SimParams {
            mean_solute_size: 18.0,
            ..SimParams::default()
        };
        for p in generate_population(&params, &mut rng) {
            assert!(p.size <= MAX_PARTICLE_SIZE);
        }
    }

    #[test]
    fn test_ids_are_stable_and_dense() {
        let mut rng = SmallRng::seed_from_u64(3);
        let particles = generate_population(&SimParams::default(), &mut rng);
        for (i, p) in particles.iter().enumerate() {
            assert_eq!(p.id, i as u32);
        }
    }
}
