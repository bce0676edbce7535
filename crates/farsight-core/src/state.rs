//! Sensor snapshot: the visible contact picture handed to the HUD each tick.

use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::events::ContactEvent;
use crate::types::{BodyId, Color, SimTime};

/// Complete contact state broadcast after each tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SensorSnapshot {
    pub time: SimTime,
    /// Tracked ships in sensor order.
    pub contacts: Vec<ContactView>,
    /// Landmarks rebuilt this tick.
    pub static_contacts: Vec<ContactView>,
    pub combat_target: Option<BodyId>,
    pub events: Vec<ContactEvent>,
}

/// One contact on the radar display.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactView {
    pub body: BodyId,
    pub kind: BodyKind,
    pub label: String,
    /// Range from own ship (meters). Zero for landmarks.
    pub distance: f64,
    pub iff: Iff,
    pub color: Color,
    /// Trail dots, oldest first, relative to the body's current position.
    pub trail: Vec<TrailPointView>,
}

/// One trail dot for rendering.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct TrailPointView {
    pub offset: [f64; 3],
    pub color: Color,
}
