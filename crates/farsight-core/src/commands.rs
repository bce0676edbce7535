//! Player commands sent to the simulation.
//!
//! Commands are queued and processed at the next tick boundary.

use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::types::{BodyId, FrameId};

/// All possible player actions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    // --- Targeting ---
    /// Pick the nearest contact matching the criteria as combat target.
    ChooseTarget { criteria: TargetingCriteria },
    /// Drop the current combat target.
    ClearTarget,

    // --- Diplomacy ---
    /// Change how the player regards a body; reclassifies its contact.
    SetRelations { body: BodyId, value: u8 },

    // --- World control ---
    /// Force a ship into a flight state (dock, land, launch...).
    SetFlightState { body: BodyId, state: FlightState },
    /// Move the player into another reference frame.
    EnterFrame { frame: FrameId },
    /// Mark a body as dead; it is removed at the end of the tick.
    Kill { body: BodyId },
}
