//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

use crate::types::Color;

/// Closed set of body types a world can contain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BodyKind {
    Ship,
    Missile,
    CargoBody,
    Projectile,
    HyperspaceCloud,
    Star,
    Planet,
    /// A city or other structure fixed to a planet surface.
    SurfaceStructure,
    SpaceStation,
}

impl BodyKind {
    pub fn is_ship(self) -> bool {
        matches!(self, BodyKind::Ship)
    }

    /// Permanent landmarks, listed as static contacts rather than tracked.
    pub fn is_landmark(self) -> bool {
        matches!(
            self,
            BodyKind::Star | BodyKind::Planet | BodyKind::SurfaceStructure | BodyKind::SpaceStation
        )
    }
}

/// Ship flight state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum FlightState {
    #[default]
    Flying,
    Docking,
    Docked,
    Undocking,
    Landed,
    Jumping,
    Hyperspace,
}

/// Identification friend or foe, relative to the observing ship.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Iff {
    #[default]
    Unknown,
    Neutral,
    Ally,
    Hostile,
}

impl Iff {
    /// Presentation color for contacts and trails of this class.
    pub fn color(self) -> Color {
        match self {
            Iff::Unknown => Color::GRAY,
            Iff::Neutral => Color::BLUE,
            Iff::Ally => Color::GREEN,
            Iff::Hostile => Color::RED,
        }
    }
}

/// Predicate used when picking a combat target from the contact list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TargetingCriteria {
    /// Any ship, regardless of allegiance.
    #[default]
    Ship,
}
