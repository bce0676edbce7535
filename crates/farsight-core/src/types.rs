//! Fundamental value types shared by the simulation and its consumers.

use std::fmt;

use serde::{Deserialize, Serialize};

/// 8-bit RGBA color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const GRAY: Color = Color::rgb(128, 128, 128);
    pub const BLUE: Color = Color::rgb(0, 0, 255);
    pub const GREEN: Color = Color::rgb(0, 255, 0);
    pub const RED: Color = Color::rgb(255, 0, 0);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Same color with the alpha channel scaled by `factor` (clamped to 0..=1).
    pub fn faded(self, factor: f64) -> Self {
        let alpha = (f64::from(self.a) * factor.clamp(0.0, 1.0)).round() as u8;
        Self { a: alpha, ..self }
    }
}

/// Identifier of a reference coordinate frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct FrameId(pub u32);

impl FrameId {
    /// The root frame every system starts in.
    pub const ROOT: FrameId = FrameId(0);
}

impl fmt::Display for FrameId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "frame#{}", self.0)
    }
}

/// Serializable form of a body handle, used by commands and HUD views.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BodyId(pub u64);

impl BodyId {
    pub fn from_entity(entity: hecs::Entity) -> Self {
        Self(entity.to_bits().get())
    }

    /// Resolve back into an entity handle. The entity may no longer be alive.
    pub fn to_entity(self) -> Option<hecs::Entity> {
        hecs::Entity::from_bits(self.0)
    }
}

impl From<hecs::Entity> for BodyId {
    fn from(entity: hecs::Entity) -> Self {
        Self::from_entity(entity)
    }
}

/// Simulation time tracking.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct SimTime {
    /// Current tick number (increments by 1 each tick).
    pub tick: u64,
    /// Elapsed simulation time in seconds.
    pub elapsed_secs: f64,
}

impl SimTime {
    /// Seconds per tick at the default tick rate.
    pub fn dt(&self) -> f64 {
        crate::constants::DT
    }

    /// Advance by one tick.
    pub fn advance(&mut self) {
        self.tick += 1;
        self.elapsed_secs += self.dt();
    }
}
