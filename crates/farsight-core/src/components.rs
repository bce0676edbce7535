//! ECS components for hecs entities.
//!
//! Components are plain data structs. Game logic lives in systems
//! and in the sensors crate, not here. A body is any entity with a
//! [`BodyKind`].

use std::collections::HashMap;

use glam::DVec3;
use hecs::Entity;
use serde::{Deserialize, Serialize};

pub use crate::enums::{BodyKind, FlightState};
use crate::constants::{RELATIONS_ALLY, RELATIONS_NEUTRAL};
use crate::types::FrameId;

/// Position in world space (meters).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position(pub DVec3);

impl Position {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self(DVec3::new(x, y, z))
    }

    /// This position expressed relative to `other`.
    pub fn relative_to(&self, other: &Position) -> DVec3 {
        self.0 - other.0
    }

    /// Straight-line distance to another position.
    pub fn range_to(&self, other: &Position) -> f64 {
        self.0.distance(other.0)
    }
}

/// Velocity in world space (m/s).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Velocity(pub DVec3);

impl Velocity {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self(DVec3::new(x, y, z))
    }

    pub fn speed(&self) -> f64 {
        self.0.length()
    }
}

/// Reference frame the body currently moves in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Frame(pub FrameId);

/// Marks a body that has died and is waiting to be removed from the world.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Dead;

/// Display name for HUD consumers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Label(pub String);

/// How a ship regards other bodies, on a 0..=100 scale.
///
/// Bodies without an entry are treated as [`RELATIONS_NEUTRAL`].
#[derive(Debug, Clone, Default)]
pub struct Relations {
    toward: HashMap<Entity, u8>,
}

impl Relations {
    pub fn get(&self, other: Entity) -> u8 {
        self.toward.get(&other).copied().unwrap_or(RELATIONS_NEUTRAL)
    }

    /// Set the relation toward `other`, clamped to 0..=100.
    pub fn set(&mut self, other: Entity, value: u8) {
        self.toward.insert(other, value.min(RELATIONS_ALLY));
    }

    /// Builder-style [`Relations::set`].
    pub fn with(mut self, other: Entity, value: u8) -> Self {
        self.set(other, value);
        self
    }

    /// Whether an explicit relation toward `other` is recorded.
    pub fn knows(&self, other: Entity) -> bool {
        self.toward.contains_key(&other)
    }

    pub fn forget(&mut self, other: Entity) {
        self.toward.remove(&other);
    }
}

/// The body a ship currently has selected as its combat target.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CombatTarget(pub Option<Entity>);
