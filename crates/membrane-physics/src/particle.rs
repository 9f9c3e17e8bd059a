//! Particle types and the region state machine

use crate::constants::{MAX_PARTICLE_SIZE, MIN_PARTICLE_SIZE};
use glam::Vec2;

/// Which side of the membrane a particle currently belongs to.
///
/// Transitions: `Feed -> Permeate` (passes the membrane), `Feed -> Retentate`
/// (rejected at the membrane), `Permeate -> Feed` (recycled at the vessel
/// exit), `Retentate -> Feed` (backwash). Nothing else.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    /// Unfiltered bulk solution, source side of the membrane
    Feed,
    /// Solute held at the membrane face, too large to pass
    Retentate,
    /// Solute that has passed through the membrane
    Permeate,
}

/// A single solute particle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    /// Stable identity within one population generation
    pub id: u32,
    /// Position in vessel space
    pub position: Vec2,
    /// Velocity, accumulates directional drift
    pub velocity: Vec2,
    /// Radius, fixed at creation
    pub size: f32,
    /// Current region
    pub region: Region,
}

impl Particle {
    /// Create a feed-side particle at rest.
    pub fn new(id: u32, position: Vec2, size: f32) -> Self {
        Self {
            id,
            position,
            velocity: Vec2::ZERO,
            size: size.clamp(MIN_PARTICLE_SIZE, MAX_PARTICLE_SIZE),
            region: Region::Feed,
        }
    }

    /// Permeation decision at membrane contact: only solutes strictly smaller
    /// than the pore size pass through.
    pub fn passes_membrane(&self, pore_size: f32) -> bool {
        self.size < pore_size
    }
}
